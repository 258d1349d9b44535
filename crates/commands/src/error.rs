/// Crate-wide result type for command dispatch.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Command failures.
///
/// `MissingArgument` and an out-of-range removal are recovered inside the
/// dispatcher (help redirect and fixed reply respectively); everything
/// else fails the invocation and surfaces through the host framework's
/// top-level handler.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// A required positional/flag argument is absent.
    #[error("missing required argument for {command}")]
    MissingArgument { command: &'static str },

    /// Registry mutation failed (out-of-range removal).
    #[error(transparent)]
    Registry(#[from] kyomiko_registry::Error),

    /// Backend call failed; never recovered locally.
    #[error(transparent)]
    Gateway(#[from] kyomiko_gateway::Error),

    /// Loading or saving the channel registry failed.
    #[error("registry store failure: {0}")]
    Store(#[source] anyhow::Error),

    /// The host session rejected a queued send or help render.
    #[error("session failure: {0}")]
    Session(#[source] anyhow::Error),

    /// Name not present in the command surface.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

impl CommandError {
    #[must_use]
    pub fn missing_argument(command: &'static str) -> Self {
        Self::MissingArgument { command }
    }
}
