use {anyhow::Result, async_trait::async_trait};

/// Host-framework services available to one command invocation.
///
/// The dispatcher never formats help text, never delivers messages itself
/// and never escapes twice — those three primitives stay with the host.
#[async_trait]
pub trait SessionPort: Send + Sync {
    /// Render another command's help text. Used as the reply when a
    /// required argument is missing.
    async fn help(&self, command: &str) -> Result<String>;

    /// Queue a message to the channel. Queued order is delivery order.
    async fn send_queued(&self, text: &str) -> Result<()>;

    /// Neutralize markup-significant characters for display. Applied
    /// exactly once per reply, and only by the dispatcher.
    fn escape(&self, text: &str) -> String;
}
