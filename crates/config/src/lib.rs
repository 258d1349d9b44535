//! Configuration loading and validation.
//!
//! Config files: `kyomiko.toml`, `kyomiko.yaml`, or `kyomiko.json`,
//! searched in `./` then `~/.config/kyomiko/`.
//!
//! Supports `${ENV_VAR}` substitution in the raw file text.

pub mod loader;
pub mod schema;
pub mod validate;

pub use {
    loader::{discover_and_load, load_config},
    schema::KyomikoConfig,
    validate::{Diagnostic, Severity, has_errors, validate},
};
