use artpack_core::SourceError;

/// Errors that can occur while talking to TMDB.
#[derive(Debug, thiserror::Error)]
pub enum TmdbError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TMDB returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TmdbError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<TmdbError> for SourceError {
    fn from(e: TmdbError) -> Self {
        match e {
            // Request URLs carry the api_key query parameter; keep them out of messages.
            TmdbError::Http(e) => SourceError::http(e.without_url().to_string()),
            TmdbError::Status { status, body } => SourceError::unexpected_status(status, body),
            TmdbError::Json(e) => SourceError::parse(e.to_string()),
            other => SourceError::http(other.to_string()),
        }
    }
}
