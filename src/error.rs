//! Error types for the backend-access layer.

use thiserror::Error;

/// Errors produced while preparing, sending, or decoding a backend call.
///
/// Callers of [`Backend::dispatch`](crate::http::Backend::dispatch) never see
/// these directly: every cause collapses into
/// [`Outcome::Failure`](crate::http::Outcome) and the detail is logged at the
/// dispatch site.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request value could not be serialized to JSON. The call is
    /// abandoned before any network attempt.
    #[error("request could not be encoded: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The server answered 401. Reserved exclusively for "authentication
    /// required"; any response body is discarded.
    #[error("server rejected the call as unauthorized")]
    Unauthorized,

    /// The HTTP round-trip itself failed (connect, timeout, protocol).
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// A body arrived but did not parse as the expected response type.
    #[error("response could not be decoded: {0}")]
    Decoding(String),

    /// The configured base endpoint is not a valid URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

/// A specialized Result type for backend operations.
pub type Result<T> = std::result::Result<T, BackendError>;
