/// Crate-wide result type for gateway calls.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures talking to the backend.
///
/// None of these are recovered locally and none are retried: a failed
/// call fails the whole command invocation, and the host framework's
/// top-level handler owns the user-facing message.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Connection-level failure before a status line arrived.
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}")]
    Status { status: reqwest::StatusCode },

    /// Serializing the registry for the wire failed.
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}
