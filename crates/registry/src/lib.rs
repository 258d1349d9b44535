//! Per-channel server registry.
//!
//! Each chat channel owns an ordered list of [`ServerEntry`] records,
//! addressed purely by 1-based position at render/removal time. Mutations
//! run through the [`store::RegistryStore`] load→mutate→save cycle;
//! [`locks::ChannelLocks`] serializes that cycle per channel.

pub mod entry;
pub mod error;
pub mod locks;
pub mod mutate;
pub mod sqlite;
pub mod store;
pub mod view;

pub use {
    entry::ServerEntry,
    error::{Error, Result},
    locks::ChannelLocks,
    mutate::remove_at,
    sqlite::SqliteRegistryStore,
    store::{MemoryRegistryStore, RegistryStore},
    view::render_detail,
};
