//! Invocation context and typed per-subcommand arguments.
//!
//! The host framework hands over arguments already tokenized; each
//! subcommand pins its required set in a typed struct parsed once at the
//! dispatch boundary.

use std::collections::HashMap;

use crate::error::{CommandError, Result};

/// Per-invocation identity context, sourced from the host session. Only
/// ever forwarded to the backend, never persisted.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: String,
    pub channel_id: String,
}

/// One tokenized command invocation as handed over by the host framework.
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    /// Positional arguments, already split.
    pub args: Vec<String>,
    /// Named options/flags, already parsed.
    pub options: HashMap<String, String>,
}

impl Invocation {
    #[must_use]
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }
}

/// `server.add` flags. All four are required; the add path never sets a
/// description.
#[derive(Debug)]
pub struct AddServerArgs<'a> {
    pub server_type: &'a str,
    pub ip: &'a str,
    pub port: &'a str,
    pub name: &'a str,
}

impl<'a> AddServerArgs<'a> {
    pub fn parse(invocation: &'a Invocation) -> Result<Self> {
        let missing = || CommandError::missing_argument("server.add");
        Ok(Self {
            server_type: invocation.option("type").ok_or_else(missing)?,
            ip: invocation.option("ip").ok_or_else(missing)?,
            port: invocation.option("port").ok_or_else(missing)?,
            name: invocation.option("name").ok_or_else(missing)?,
        })
    }
}

/// `server.remove` position, 1-based.
#[derive(Debug)]
pub struct RemoveServerArgs {
    pub position: i64,
}

impl RemoveServerArgs {
    /// A non-numeric position is treated like a missing one — the host's
    /// typed `<number>` slot would never have produced it.
    pub fn parse(invocation: &Invocation) -> Result<Self> {
        let raw = invocation
            .arg(0)
            .ok_or_else(|| CommandError::missing_argument("server.remove"))?;
        let position = raw
            .parse::<i64>()
            .map_err(|_| CommandError::missing_argument("server.remove"))?;
        Ok(Self { position })
    }
}

/// `mcauth.registry` in-game name.
#[derive(Debug)]
pub struct RegisterArgs<'a> {
    pub display_name: &'a str,
}

impl<'a> RegisterArgs<'a> {
    pub fn parse(invocation: &'a Invocation) -> Result<Self> {
        Ok(Self {
            display_name: invocation
                .arg(0)
                .ok_or_else(|| CommandError::missing_argument("mcauth.registry"))?,
        })
    }
}

/// `gal.info` search keyword (or id).
#[derive(Debug)]
pub struct InfoArgs<'a> {
    pub keyword: &'a str,
}

impl<'a> InfoArgs<'a> {
    pub fn parse(invocation: &'a Invocation) -> Result<Self> {
        Ok(Self {
            keyword: invocation
                .arg(0)
                .ok_or_else(|| CommandError::missing_argument("gal.info"))?,
        })
    }
}

/// `gal.alias` game id + alias, both required.
#[derive(Debug)]
pub struct AliasArgs<'a> {
    pub game_id: &'a str,
    pub alias: &'a str,
}

impl<'a> AliasArgs<'a> {
    pub fn parse(invocation: &'a Invocation) -> Result<Self> {
        let missing = || CommandError::missing_argument("gal.alias");
        Ok(Self {
            game_id: invocation.arg(0).ok_or_else(missing)?,
            alias: invocation.arg(1).ok_or_else(missing)?,
        })
    }
}

/// `gal.score` game id; the score itself stays optional and is forwarded
/// as-is.
#[derive(Debug)]
pub struct ScoreArgs<'a> {
    pub game_id: &'a str,
    pub score: Option<&'a str>,
}

impl<'a> ScoreArgs<'a> {
    pub fn parse(invocation: &'a Invocation) -> Result<Self> {
        Ok(Self {
            game_id: invocation
                .arg(0)
                .ok_or_else(|| CommandError::missing_argument("gal.score"))?,
            score: invocation.arg(1),
        })
    }
}
