//! Errors raised while talking to the remote services

/// Failure of a single outbound call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("failed to create HTTP client: {0}")]
    ClientBuild(String),

    #[error("HTTP error calling {endpoint}: {message}")]
    Http { endpoint: String, message: String },

    #[error("HTTP {status} from {endpoint}")]
    Status { endpoint: String, status: u16 },

    #[error("invalid JSON from {endpoint}: {message}")]
    InvalidJson { endpoint: String, message: String },

    #[error("request to {endpoint} timed out after {secs} seconds")]
    Timeout { endpoint: String, secs: u64 },

    /// Fake client ran out of scripted responses
    #[error("no scripted response left for {0}")]
    Script(&'static str),
}

impl ApiError {
    /// Whether the service could not be reached at all
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Timeout { .. })
    }

    /// Whether the service answered with something unusable
    pub fn is_invalid_response(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::InvalidJson { .. })
    }
}
