use super::Extra;
use serde::{Deserialize, Serialize};

/// A group of related cards released together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Set {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub set_type: Option<String>,
    /// Release date as `YYYY-MM-DD`.
    #[serde(default)]
    pub released_at: Option<String>,
    #[serde(default)]
    pub card_count: u32,
    #[serde(default)]
    pub digital: bool,
    #[serde(default)]
    pub tcgplayer_id: Option<u64>,
    #[serde(default)]
    pub parent_set_code: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
    /// Search URL listing the cards of this set.
    #[serde(default)]
    pub search_uri: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}
