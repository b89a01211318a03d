pub mod cleaner;
pub mod cleaning_report;

pub use cleaner::{filter_to_bounds, load_and_clean, swap_coordinate_labels, DatasetCleaner};
pub use cleaning_report::CleaningReport;
