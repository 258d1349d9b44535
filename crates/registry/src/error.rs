/// Crate-wide result type for registry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Typed registry errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A 1-based position addresses no entry.
    #[error("no server at position {position} (registry holds {len})")]
    OutOfRange { position: i64, len: usize },

    /// JSON (de)serialization of a stored registry failed.
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

impl Error {
    #[must_use]
    pub fn out_of_range(position: i64, len: usize) -> Self {
        Self::OutOfRange { position, len }
    }
}
