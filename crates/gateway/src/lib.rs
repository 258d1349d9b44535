//! Backend gateway.
//!
//! Translates a resolved command plus identity context into exactly one
//! authenticated request against the configured backend, and hands the
//! response body back verbatim for the dispatcher to render. The gateway
//! never escapes output and never mutates the registry.

pub mod backend;
pub mod error;
pub mod http;

pub use {
    backend::Backend,
    error::{Error, Result},
    http::HttpBackend,
    reqwest::StatusCode,
};
