use std::sync::Arc;

use {dashmap::DashMap, tokio::sync::Mutex};

/// Per-channel mutation locks.
///
/// Two commands racing the load→save cycle on the same channel would lose
/// one update; holding the channel's mutex across the cycle serializes
/// them. Reads work on snapshot copies and never lock.
#[derive(Default)]
pub struct ChannelLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl ChannelLocks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for `channel_id`, created on first use and shared after.
    #[must_use]
    pub fn acquire(&self, channel_id: &str) -> Arc<Mutex<()>> {
        self.locks
            .entry(channel_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
