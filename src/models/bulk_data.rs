use serde::{Deserialize, Serialize};

/// A downloadable export of the card database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkData {
    pub id: String,
    /// Kind of export, e.g. `"oracle_cards"` or `"default_cards"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub download_uri: String,
    pub updated_at: String,
    /// Size of the file in bytes.
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub content_encoding: Option<String>,
}
