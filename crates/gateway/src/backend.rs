use async_trait::async_trait;

use {crate::error::Result, kyomiko_registry::ServerEntry};

/// One method per backend call.
///
/// Every implementation attaches the static credential and returns the
/// response body text untouched — rendering and escaping belong to the
/// dispatcher. Identity values are opaque strings, forwarded and never
/// stored.
#[async_trait]
pub trait Backend: Send + Sync {
    /// GET `/server/list` with the serialized registry. Callers
    /// short-circuit an empty registry locally and never reach this.
    async fn server_status(&self, entries: &[ServerEntry]) -> Result<String>;

    /// POST `/auth/reg` — register a skin-station account for `user_id`
    /// under the given in-game name.
    async fn auth_register(&self, user_id: &str, display_name: &str) -> Result<String>;

    /// POST `/auth/passwd` — reset the account password to a random one.
    async fn auth_reset(&self, user_id: &str) -> Result<String>;

    /// GET `/gal/info` — look up a galgame by keyword or id.
    async fn game_info(
        &self,
        user_id: &str,
        channel_id: &str,
        keyword: &str,
    ) -> Result<String>;

    /// POST `/gal/alias` — attach an alias to a game.
    async fn set_alias(
        &self,
        user_id: &str,
        channel_id: &str,
        game_id: &str,
        alias: &str,
    ) -> Result<String>;

    /// POST `/gal/score` — rate a game. An absent score is forwarded as an
    /// absent field; its meaning is the backend's business.
    async fn set_score(
        &self,
        user_id: &str,
        channel_id: &str,
        game_id: &str,
        score: Option<&str>,
    ) -> Result<String>;
}
