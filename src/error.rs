use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset is missing required column(s): {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("Could not read {}: {reason}", path.display())]
    SourceRead { path: PathBuf, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid bounding box: {0}")]
    InvalidBounds(String),

    #[error("Render error: {0}")]
    Render(String),
}

impl ProcessingError {
    pub fn source_read(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        ProcessingError::SourceRead {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
