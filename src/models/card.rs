use super::Extra;
use serde::{Deserialize, Serialize};

/// A single printing of a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Scryfall ID of this printing.
    pub id: String,
    /// ID shared by every printing of the same card.
    #[serde(default)]
    pub oracle_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub layout: Option<String>,
    #[serde(default)]
    pub mana_cost: Option<String>,
    /// Mana value, formerly converted mana cost.
    #[serde(default)]
    pub cmc: Option<f64>,
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub color_identity: Vec<String>,
    /// Set code of this printing.
    pub set: String,
    #[serde(default)]
    pub set_name: Option<String>,
    pub collector_number: String,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub multiverse_ids: Option<Vec<u64>>,
    #[serde(default)]
    pub mtgo_id: Option<u64>,
    #[serde(default)]
    pub arena_id: Option<u64>,
    #[serde(default)]
    pub tcgplayer_id: Option<u64>,
    #[serde(default)]
    pub cardmarket_id: Option<u64>,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub scryfall_uri: Option<String>,
    #[serde(default)]
    pub rulings_uri: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// One entry of a collection lookup.
///
/// Exactly one identification scheme should be filled in; the API rejects
/// entries that mix them. The constructors build valid entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oracle_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub illustration_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiverse_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtgo_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arena_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collector_number: Option<String>,
}

impl Identifier {
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn oracle_id(oracle_id: impl Into<String>) -> Self {
        Self {
            oracle_id: Some(oracle_id.into()),
            ..Default::default()
        }
    }

    pub fn illustration_id(illustration_id: impl Into<String>) -> Self {
        Self {
            illustration_id: Some(illustration_id.into()),
            ..Default::default()
        }
    }

    pub fn multiverse_id(multiverse_id: u64) -> Self {
        Self {
            multiverse_id: Some(multiverse_id),
            ..Default::default()
        }
    }

    pub fn mtgo_id(mtgo_id: u64) -> Self {
        Self {
            mtgo_id: Some(mtgo_id),
            ..Default::default()
        }
    }

    pub fn arena_id(arena_id: u64) -> Self {
        Self {
            arena_id: Some(arena_id),
            ..Default::default()
        }
    }

    /// Identifies a card by name, optionally narrowed to one set.
    pub fn name(name: impl Into<String>, set: Option<&str>) -> Self {
        Self {
            name: Some(name.into()),
            set: set.map(str::to_string),
            ..Default::default()
        }
    }

    pub fn set_and_number(set: impl Into<String>, collector_number: impl Into<String>) -> Self {
        Self {
            set: Some(set.into()),
            collector_number: Some(collector_number.into()),
            ..Default::default()
        }
    }
}

/// Body of `POST /cards/collection`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionRequest {
    pub identifiers: Vec<Identifier>,
}

/// Card names suggested for a partial name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocompleteResult {
    #[serde(rename = "object", default)]
    pub object_type: String,
    #[serde(default)]
    pub total_values: u32,
    #[serde(default)]
    pub data: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_serializes_only_populated_fields() {
        let json = serde_json::to_value(Identifier::set_and_number("mrd", "150")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"set": "mrd", "collector_number": "150"})
        );

        let json = serde_json::to_value(Identifier::name("Ancient Tomb", None)).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Ancient Tomb"}));
    }

    #[test]
    fn test_card_keeps_unknown_fields() {
        let card: Card = serde_json::from_value(serde_json::json!({
            "object": "card",
            "id": "56ebc372-aabd-4174-a943-c7bf59e5028d",
            "name": "Phantom Nishoba",
            "set": "jud",
            "collector_number": "140",
            "cmc": 7.0,
            "prices": {"usd": "0.25"}
        }))
        .unwrap();

        assert_eq!(card.name, "Phantom Nishoba");
        assert_eq!(card.cmc, Some(7.0));
        assert!(card.color_identity.is_empty());
        assert_eq!(card.extra["prices"]["usd"], "0.25");
        assert_eq!(card.extra["object"], "card");
    }
}
