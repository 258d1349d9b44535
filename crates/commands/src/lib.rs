//! Command dispatch.
//!
//! Maps recognized command names (and their chat-facing aliases) plus
//! pre-tokenized arguments onto registry and gateway operations, and
//! formats the channel-visible result. The host chat framework owns
//! tokenization, help rendering, ordered sends and output escaping behind
//! [`session::SessionPort`].

pub mod error;
pub mod invocation;
pub mod service;
pub mod session;
pub mod surface;

pub use {
    error::{CommandError, Result},
    invocation::{Identity, Invocation},
    service::CommandService,
    session::SessionPort,
    surface::{COMMANDS, CommandSpec, GROUPS, resolve},
};
