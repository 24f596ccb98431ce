use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MergeError>;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Could not open input file: {}", path.display())]
    MissingInputFile { path: PathBuf },

    #[error("Input directory does not exist: {}", path.display())]
    MissingInputDirectory { path: PathBuf },

    #[error("Invalid date '{value}': expected MM-DD-YYYY")]
    InvalidDate { value: String },

    #[error("Invalid coordinate format: {0}")]
    InvalidCoordinate(String),
}
