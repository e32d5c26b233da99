//! Error types for the upstream client

use thiserror::Error;

/// Result type alias for upstream operations
pub type Result<T> = std::result::Result<T, UpstreamError>;

/// Classified failures of an upstream repository listing
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Transport failure: DNS, refused connection, timeout
    #[error("upstream unreachable: {0}")]
    Unreachable(String),

    /// Upstream answered 404 for the organization
    #[error("organization not found: {0}")]
    NotFound(String),

    /// Upstream answered with any other non-200 status
    #[error("upstream returned status {0}")]
    BadStatus(u16),

    /// Upstream answered 200 but the body is not a list of repositories
    #[error("malformed upstream response: {0}")]
    MalformedResponse(String),

    /// The request could not be built (e.g. the base URL is unusable)
    #[error("invalid upstream request: {0}")]
    InvalidRequest(String),
}

impl UpstreamError {
    /// Check if this error is a transport-level failure
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable(_))
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::InvalidRequest(err.to_string())
        } else if err.is_decode() {
            Self::MalformedResponse(err.to_string())
        } else {
            Self::Unreachable(err.to_string())
        }
    }
}
