use super::Extra;
use serde::{Deserialize, Serialize};

/// A list of strings, such as every known creature type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub uri: Option<String>,
    pub total_values: u32,
    pub data: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_fields_are_kept() {
        let catalog: Catalog = serde_json::from_str(
            r#"{
                "object": "catalog",
                "uri": "https://api.scryfall.com/catalog/land-types",
                "total_values": 2,
                "data": ["Forest", "Island"]
            }"#,
        )
        .unwrap();

        assert_eq!(catalog.data, vec!["Forest", "Island"]);
        assert_eq!(
            catalog.extra.get("object"),
            Some(&serde_json::json!("catalog"))
        );
        assert!(!catalog.extra.contains_key("total_values"));
    }
}
