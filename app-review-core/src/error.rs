//! Error types shared by the review, lookup and host-facade crates.

use thiserror::Error;

/// Result type for app review operations.
pub type ReviewResult<T> = Result<T, ReviewError>;

/// Errors that can occur while building store URLs, looking up store
/// identifiers or talking to the host platform.
///
/// Review prompts never produce one of these: a prompt that cannot be shown
/// resolves to a "not available" outcome instead.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// Store identifier was empty or absent.
    #[error("store ID is missing")]
    MissingIdentifier,

    /// A store URL could not be formed from the identifier.
    #[error("invalid store URL: {0}")]
    InvalidUrl(String),

    /// The directory lookup URL could not be formed.
    #[error("invalid lookup request: {0}")]
    InvalidRequest(String),

    /// Transport failure (connection, DNS, timeout or reset).
    #[error("network error: {0}")]
    Network(String),

    /// Response body was present but is not JSON.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The host refused to open a URL.
    #[error("open failed: {0}")]
    OpenFailed(String),

    /// The host surface (activity, window) is not attached.
    #[error("host unavailable: {0}")]
    HostUnavailable(String),

    /// The platform could not start a review flow.
    #[error("review flow unavailable: {0}")]
    ReviewFlowUnavailable(String),
}

impl ReviewError {
    /// Returns true for transport-level failures.
    pub fn is_network(&self) -> bool {
        matches!(self, ReviewError::Network(_))
    }

    /// Returns true when the response body could not be parsed.
    pub fn is_parse(&self) -> bool {
        matches!(self, ReviewError::Parse(_))
    }

    /// Returns true for errors detected before any I/O was attempted.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            ReviewError::MissingIdentifier
                | ReviewError::InvalidUrl(_)
                | ReviewError::InvalidRequest(_)
        )
    }

    /// Numeric code reported to hosts that expect status-style error codes.
    pub fn code(&self) -> u16 {
        match self {
            ReviewError::MissingIdentifier => 404,
            ReviewError::InvalidUrl(_) | ReviewError::InvalidRequest(_) => 400,
            ReviewError::Parse(_) => 422,
            ReviewError::OpenFailed(_) => 500,
            ReviewError::Network(_) => 502,
            ReviewError::HostUnavailable(_) | ReviewError::ReviewFlowUnavailable(_) => 503,
        }
    }
}
