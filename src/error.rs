//! Furrow error types

/// Furrow error types
#[derive(Debug, thiserror::Error)]
pub enum FurrowError {
    // Remote-call errors
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("backend error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("malformed backend response: {0}")]
    Decode(String),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("backend does not support this operation")]
    Unsupported,
}

impl FurrowError {
    /// HTTP status carried by the error, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FurrowError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error came from talking to the backend: transport
    /// failure, non-2xx status or an undecodable body.
    ///
    /// The prediction service falls back on every backend error, not only
    /// these; this is for callers of [`PredictionBackend`](crate::PredictionBackend)
    /// that want to tell network trouble from local misconfiguration.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            FurrowError::Http(_) | FurrowError::Api { .. } | FurrowError::Decode(_)
        )
    }
}

impl From<reqwest::Error> for FurrowError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FurrowError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FurrowError::Api {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            FurrowError::Http(err.to_string())
        }
    }
}

/// Result type alias for Furrow operations
pub type Result<T> = std::result::Result<T, FurrowError>;
