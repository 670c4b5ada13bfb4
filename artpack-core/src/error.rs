use thiserror::Error;

/// Errors reported by a [`MetadataSource`](crate::MetadataSource).
#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport failure (connection refused, timeout, TLS, ...)
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The service answered with something other than 200 OK
    #[error("Unexpected response (HTTP {status}): {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body could not be understood
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl SourceError {
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn unexpected_status(status: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            body: body.into(),
        }
    }
}
