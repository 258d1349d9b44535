use serde::{Deserialize, Serialize};

/// One registered server in a channel's registry.
///
/// The serde shape is the wire contract: the category tag travels as
/// `type`, and `description` is omitted entirely when unset. The same
/// shape is used for the backend's `serverList` parameter and for the
/// persisted channel record, so a serialized registry round-trips
/// field-for-field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerEntry {
    /// Category tag, backend-defined (e.g. "mc").
    #[serde(rename = "type")]
    pub server_type: String,

    /// Network address.
    pub host: String,

    /// Kept as text — callers must not assume a numeric range.
    pub port: String,

    /// Human-readable label.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
