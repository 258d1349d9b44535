use {
    secrecy::{ExposeSecret, Secret},
    serde::{Deserialize, Serialize},
};

/// Root configuration for the middleware.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KyomikoConfig {
    /// Backend base URL. Required; every gateway call targets it.
    pub server: String,

    /// Static credential forwarded verbatim in the `Authorization` header
    /// of every backend call. Requests go out unauthenticated when unset.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_secret_opt"
    )]
    pub authorization: Option<Secret<String>>,
}

impl std::fmt::Debug for KyomikoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KyomikoConfig")
            .field("server", &self.server)
            .field(
                "authorization",
                &self.authorization.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

fn serialize_secret_opt<S: serde::Serializer>(
    secret: &Option<Secret<String>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match secret {
        Some(s) => serializer.serialize_str(s.expose_secret()),
        None => serializer.serialize_none(),
    }
}
