use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// The batch could not run at all
    #[error("Batch failed: {0}")]
    Batch(String),

    /// Building the archive failed
    #[error("Archive failed: {0}")]
    Archive(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn batch(msg: impl Into<String>) -> Self {
        Self::Batch(msg.into())
    }

    pub(crate) fn archive(msg: impl Into<String>) -> Self {
        Self::Archive(msg.into())
    }
}
