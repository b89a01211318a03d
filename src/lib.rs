pub mod analyzers;
pub mod cli;
pub mod error;
pub mod models;
pub mod processors;
pub mod readers;
pub mod render;
pub mod utils;
pub mod writers;

pub use error::{ProcessingError, Result};
pub use models::{BoundingBox, CleanedDataset, SensorRecord};
pub use processors::{load_and_clean, DatasetCleaner};
