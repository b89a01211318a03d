pub mod location_reader;

pub use location_reader::LocationReader;
