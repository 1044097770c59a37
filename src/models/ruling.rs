use serde::{Deserialize, Serialize};

/// An official note or clarification about a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruling {
    pub oracle_id: String,
    /// `"wotc"` or `"scryfall"`.
    pub source: String,
    /// Publication date as `YYYY-MM-DD`.
    pub published_at: String,
    pub comment: String,
}
