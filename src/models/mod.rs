pub mod bounds;
pub mod record;
pub mod table;

pub use bounds::{BoundingBox, UK_BOUNDS};
pub use record::{is_canonical_serial, normalize_serial, CleanedDataset, SensorRecord};
pub use table::LocationTable;
