//! HTTP implementation of the [`Backend`] trait over a single shared
//! `reqwest::Client`.

use {
    secrecy::{ExposeSecret, Secret},
    serde::Serialize,
    tracing::debug,
};

use {
    async_trait::async_trait,
    kyomiko_config::KyomikoConfig,
    kyomiko_registry::ServerEntry,
};

use crate::{
    backend::Backend,
    error::{Error, Result},
};

pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    authorization: Option<Secret<String>>,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>, authorization: Option<Secret<String>>) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            authorization,
        }
    }

    pub fn from_config(config: &KyomikoConfig) -> Self {
        Self::new(config.server.clone(), config.authorization.clone())
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.with_auth(self.client.get(self.url(path)))
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.with_auth(self.client.post(self.url(path)))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// The configured credential is forwarded verbatim — no scheme prefix
    /// is added, and the header is absent entirely when unconfigured.
    fn with_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.authorization {
            Some(ref token) => req.header("Authorization", token.expose_secret()),
            None => req,
        }
    }

    async fn read_body(resp: reqwest::Response) -> Result<String> {
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { status });
        }
        Ok(resp.text().await?)
    }
}

// ── Wire payloads ───────────────────────────────────────────────────────────

#[derive(Serialize)]
struct AuthRegBody<'a> {
    qq: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
struct AuthPasswdBody<'a> {
    qq: &'a str,
}

#[derive(Serialize)]
struct AliasBody<'a> {
    id: &'a str,
    #[serde(rename = "channelId")]
    channel_id: &'a str,
    #[serde(rename = "gameId")]
    game_id: &'a str,
    alias: &'a str,
}

#[derive(Serialize)]
struct ScoreBody<'a> {
    id: &'a str,
    #[serde(rename = "channelId")]
    channel_id: &'a str,
    #[serde(rename = "gameId")]
    game_id: &'a str,
    /// Dropped from the body when absent; the backend decides what a
    /// missing score means.
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<&'a str>,
}

#[async_trait]
impl Backend for HttpBackend {
    async fn server_status(&self, entries: &[ServerEntry]) -> Result<String> {
        let server_list = serde_json::to_string(entries)?;
        debug!(entry_count = entries.len(), "requesting server status");
        let resp = self
            .get("/server/list")
            .query(&[("serverList", server_list.as_str())])
            .send()
            .await?;
        Self::read_body(resp).await
    }

    async fn auth_register(&self, user_id: &str, display_name: &str) -> Result<String> {
        debug!(user_id, "requesting auth registration");
        let resp = self
            .post("/auth/reg")
            .json(&AuthRegBody {
                qq: user_id,
                name: display_name,
            })
            .send()
            .await?;
        Self::read_body(resp).await
    }

    async fn auth_reset(&self, user_id: &str) -> Result<String> {
        debug!(user_id, "requesting auth password reset");
        let resp = self
            .post("/auth/passwd")
            .json(&AuthPasswdBody { qq: user_id })
            .send()
            .await?;
        Self::read_body(resp).await
    }

    async fn game_info(
        &self,
        user_id: &str,
        channel_id: &str,
        keyword: &str,
    ) -> Result<String> {
        debug!(user_id, channel_id, keyword, "requesting game info");
        let resp = self
            .get("/gal/info")
            .query(&[
                ("id", user_id),
                ("channelId", channel_id),
                ("keyword", keyword),
            ])
            .send()
            .await?;
        Self::read_body(resp).await
    }

    async fn set_alias(
        &self,
        user_id: &str,
        channel_id: &str,
        game_id: &str,
        alias: &str,
    ) -> Result<String> {
        debug!(user_id, channel_id, game_id, "setting game alias");
        let resp = self
            .post("/gal/alias")
            .json(&AliasBody {
                id: user_id,
                channel_id,
                game_id,
                alias,
            })
            .send()
            .await?;
        Self::read_body(resp).await
    }

    async fn set_score(
        &self,
        user_id: &str,
        channel_id: &str,
        game_id: &str,
        score: Option<&str>,
    ) -> Result<String> {
        debug!(user_id, channel_id, game_id, has_score = score.is_some(), "setting game score");
        let resp = self
            .post("/gal/score")
            .json(&ScoreBody {
                id: user_id,
                channel_id,
                game_id,
                score,
            })
            .send()
            .await?;
        Self::read_body(resp).await
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {mockito::Matcher, secrecy::Secret, serde_json::json};

    use super::*;

    fn backend(url: &str) -> HttpBackend {
        HttpBackend::new(url, Some(Secret::new("sk-test".into())))
    }

    fn entries() -> Vec<ServerEntry> {
        vec![ServerEntry {
            server_type: "mc".into(),
            host: "a.com".into(),
            port: "25565".into(),
            name: "Survival".into(),
            description: None,
        }]
    }

    #[tokio::test]
    async fn server_status_sends_serialized_registry_and_credential() {
        let mut server = mockito::Server::new_async().await;
        let expected = serde_json::to_string(&entries()).unwrap();
        let mock = server
            .mock("GET", "/server/list")
            .match_query(Matcher::UrlEncoded("serverList".into(), expected))
            .match_header("Authorization", "sk-test")
            .with_status(200)
            .with_body("Survival: 3/20 online")
            .create_async()
            .await;

        let body = backend(&server.url())
            .server_status(&entries())
            .await
            .unwrap();
        assert_eq!(body, "Survival: 3/20 online");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn serialized_registry_round_trips_on_the_receiving_side() {
        // What the backend decodes from the query parameter must equal the
        // ordered entry list field-for-field.
        let sent = serde_json::to_string(&entries()).unwrap();
        let received: Vec<ServerEntry> = serde_json::from_str(&sent).unwrap();
        assert_eq!(received, entries());
    }

    #[tokio::test]
    async fn auth_register_posts_qq_and_name() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/reg")
            .match_header("Authorization", "sk-test")
            .match_body(Matcher::Json(json!({"qq": "10001", "name": "Steve"})))
            .with_status(200)
            .with_body("注册成功")
            .create_async()
            .await;

        let body = backend(&server.url())
            .auth_register("10001", "Steve")
            .await
            .unwrap();
        assert_eq!(body, "注册成功");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn auth_reset_posts_qq_only() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/passwd")
            .match_body(Matcher::Json(json!({"qq": "10001"})))
            .with_status(200)
            .with_body("密码已重置")
            .create_async()
            .await;

        backend(&server.url()).auth_reset("10001").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn game_info_sends_identity_and_keyword_as_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/gal/info")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("id".into(), "10001".into()),
                Matcher::UrlEncoded("channelId".into(), "chan:1".into()),
                Matcher::UrlEncoded("keyword".into(), "白色相簿".into()),
            ]))
            .with_status(200)
            .with_body("found")
            .create_async()
            .await;

        backend(&server.url())
            .game_info("10001", "chan:1", "白色相簿")
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn set_alias_posts_full_identity_payload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/gal/alias")
            .match_body(Matcher::Json(json!({
                "id": "10001",
                "channelId": "chan:1",
                "gameId": "g42",
                "alias": "WA2"
            })))
            .with_status(200)
            .with_body("ok")
            .create_async()
            .await;

        backend(&server.url())
            .set_alias("10001", "chan:1", "g42", "WA2")
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn set_score_forwards_supplied_score() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/gal/score")
            .match_body(Matcher::Json(json!({
                "id": "10001",
                "channelId": "chan:1",
                "gameId": "g42",
                "score": "8.5"
            })))
            .with_status(200)
            .with_body("ok")
            .create_async()
            .await;

        backend(&server.url())
            .set_score("10001", "chan:1", "g42", Some("8.5"))
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn absent_score_is_dropped_from_the_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/gal/score")
            .match_body(Matcher::Json(json!({
                "id": "10001",
                "channelId": "chan:1",
                "gameId": "g42"
            })))
            .with_status(200)
            .with_body("ok")
            .create_async()
            .await;

        backend(&server.url())
            .set_score("10001", "chan:1", "g42", None)
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn no_credential_means_no_authorization_header() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/passwd")
            .match_header("Authorization", Matcher::Missing)
            .with_status(200)
            .with_body("ok")
            .create_async()
            .await;

        HttpBackend::new(server.url(), None)
            .auth_reset("10001")
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_fails_the_call() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/gal/info")
            .match_query(Matcher::Any)
            .with_status(502)
            .create_async()
            .await;

        let err = backend(&server.url())
            .game_info("10001", "chan:1", "x")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Status { status } if status == reqwest::StatusCode::BAD_GATEWAY
        ));
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        // Nothing listens on port 9; the connection itself fails.
        let err = backend("http://127.0.0.1:9")
            .auth_reset("10001")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }

    #[test]
    fn trailing_slash_on_base_url_is_normalized() {
        let b = HttpBackend::new("https://api.example.com/", None);
        assert_eq!(b.url("/server/list"), "https://api.example.com/server/list");
    }
}
