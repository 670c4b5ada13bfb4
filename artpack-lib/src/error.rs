use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a whole batch before any row is processed.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input table has no `movie name` column
    #[error("Input must contain a '{column}' column (found: {})", .found.join(", "))]
    MissingTitleColumn { column: String, found: Vec<String> },

    /// The table header could not be read
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error opening the table or preparing the output tree
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that abort archive creation. A partial archive is never left behind.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A collected file did not live under the archive root
    #[error("File is outside the archive root: {}", .0.display())]
    OutsideRoot(PathBuf),

    /// The archive root does not exist or is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}
