use super::Extra;
use serde::{Deserialize, Serialize};

/// A symbol that may appear in mana costs or rules text, such as `{T}` or `{W/U}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSymbol {
    pub symbol: String,
    pub english: String,
    #[serde(default)]
    pub represents_mana: bool,
    #[serde(default)]
    pub mana_value: Option<f64>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub svg_uri: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A mana cost normalized by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedManaCost {
    pub cost: String,
    pub cmc: f64,
    pub colors: Vec<String>,
    pub colorless: bool,
    pub monocolored: bool,
    pub multicolored: bool,
}
