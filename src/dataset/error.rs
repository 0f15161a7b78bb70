use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("file not found at {}. Ensure the file exists.", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("required column is missing: {0}")]
    MissingColumn(String),
}

impl DatasetError {
    /// Map an I/O failure on `path`, singling out a missing file.
    pub(crate) fn from_io(path: &std::path::Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            DatasetError::FileNotFound(path.to_path_buf())
        } else {
            DatasetError::Io(error)
        }
    }
}
