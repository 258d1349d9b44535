use std::{collections::HashMap, sync::RwLock};

use {anyhow::Result, async_trait::async_trait};

use crate::entry::ServerEntry;

/// Persistent storage for per-channel registries.
///
/// `load` returns an empty list for a channel that never saved one; `save`
/// must run after every mutation and before any dependent read, since a
/// detail view rendered right after a removal has to observe the new state.
#[async_trait]
pub trait RegistryStore: Send + Sync {
    async fn load(&self, channel_id: &str) -> Result<Vec<ServerEntry>>;
    async fn save(&self, channel_id: &str, entries: &[ServerEntry]) -> Result<()>;
}

/// In-memory store for tests and embedded hosts.
#[derive(Default)]
pub struct MemoryRegistryStore {
    channels: RwLock<HashMap<String, Vec<ServerEntry>>>,
}

impl MemoryRegistryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RegistryStore for MemoryRegistryStore {
    async fn load(&self, channel_id: &str) -> Result<Vec<ServerEntry>> {
        let channels = self.channels.read().unwrap_or_else(|e| e.into_inner());
        Ok(channels.get(channel_id).cloned().unwrap_or_default())
    }

    async fn save(&self, channel_id: &str, entries: &[ServerEntry]) -> Result<()> {
        let mut channels = self.channels.write().unwrap_or_else(|e| e.into_inner());
        channels.insert(channel_id.to_string(), entries.to_vec());
        Ok(())
    }
}
