//! Pre-flight argument checks.
//!
//! Each function rejects input the API would refuse anyway, returning
//! [`Error::InvalidArgument`] before any request is built. The messages are
//! stable and safe to match on.

use crate::{Error, Result};

fn ensure(condition: bool, message: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::InvalidArgument(message.to_string()))
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validates that a free-form argument is not blank.
///
/// `what` names the argument in the error message, e.g. `"Mana cost"`.
pub fn validate_not_blank(value: &str, what: &str) -> Result<()> {
    if is_blank(value) {
        return Err(Error::InvalidArgument(format!("{} cannot be blank", what)));
    }
    Ok(())
}

/// Validates a full-text search query.
pub fn validate_query(query: &str) -> Result<()> {
    ensure(!is_blank(query), "Query cannot be blank")?;
    ensure(
        query.chars().count() <= 1000,
        "Query too long (max 1000 characters)",
    )
}

/// Validates a card name used for exact or fuzzy lookups.
pub fn validate_card_name(name: &str) -> Result<()> {
    ensure(!is_blank(name), "Card name cannot be blank")?;
    ensure(
        name.chars().count() <= 500,
        "Card name too long (max 500 characters)",
    )
}

/// Validates a 1-based page number.
pub fn validate_page(page: i64) -> Result<()> {
    ensure(page > 0, "Page must be greater than 0")?;
    ensure(page <= 10000, "Page number too large (max 10000)")
}

/// Validates a set code such as `"mh3"` or `"pmei"`.
pub fn validate_set_code(code: &str) -> Result<()> {
    ensure(!is_blank(code), "Set code cannot be blank")?;
    ensure(
        (3..=5).contains(&code.chars().count()),
        "Set code must be 3-5 characters",
    )?;
    ensure(
        code.chars().all(char::is_alphanumeric),
        "Set code must contain only letters and digits",
    )
}

/// Validates a Scryfall object ID in canonical 8-4-4-4-12 UUID form.
///
/// Hex digits may be upper or lower case.
pub fn validate_scryfall_id(id: &str) -> Result<()> {
    ensure(!is_blank(id), "ID cannot be blank")?;
    ensure(is_uuid(id), "ID must be a valid UUID format")
}

fn is_uuid(id: &str) -> bool {
    const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

    let mut parts = id.split('-');
    let shape_ok = GROUPS.iter().all(|&len| {
        parts
            .next()
            .is_some_and(|part| part.len() == len && part.bytes().all(|b| b.is_ascii_hexdigit()))
    });
    shape_ok && parts.next().is_none()
}

/// Validates a collector number such as `"150"` or `"12★"`.
pub fn validate_collector_number(number: &str) -> Result<()> {
    ensure(!is_blank(number), "Collector number cannot be blank")?;
    ensure(
        number.chars().count() <= 10,
        "Collector number too long (max 10 characters)",
    )
}

/// Validates the identifier list of a collection lookup.
pub fn validate_identifiers<T>(identifiers: &[T]) -> Result<()> {
    ensure(!identifiers.is_empty(), "Identifiers list cannot be empty")?;
    ensure(
        identifiers.len() <= 75,
        "Too many identifiers (max 75 per request)",
    )
}

/// Validates an ISO 639-1 language code such as `"en"` or `"ja"`.
pub fn validate_language_code(lang: &str) -> Result<()> {
    ensure(!is_blank(lang), "Language code cannot be blank")?;
    ensure(
        lang.chars().count() == 2,
        "Language code must be 2 characters (ISO 639-1 format)",
    )?;
    ensure(
        lang.chars().all(|c| c.is_alphabetic() && c.is_lowercase()),
        "Language code must be lowercase letters",
    )
}

/// Validates a TCGplayer product ID.
pub fn validate_tcgplayer_id(id: i64) -> Result<()> {
    ensure(id > 0, "TCGPlayer ID must be positive")
}

/// Validates a Gatherer multiverse ID.
pub fn validate_multiverse_id(id: i64) -> Result<()> {
    ensure(id > 0, "Multiverse ID must be positive")
}

/// Validates an MTG Arena ID.
pub fn validate_arena_id(id: i64) -> Result<()> {
    ensure(id > 0, "Arena ID must be positive")
}

/// Validates an MTGO catalog ID.
pub fn validate_mtgo_id(id: i64) -> Result<()> {
    ensure(id > 0, "MTGO ID must be positive")
}

/// Validates a Cardmarket product ID.
pub fn validate_cardmarket_id(id: i64) -> Result<()> {
    ensure(id > 0, "Cardmarket ID must be positive")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<()>) -> String {
        match result {
            Err(Error::InvalidArgument(message)) => message,
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_not_blank() {
        assert!(validate_not_blank("{2}{G}", "Mana cost").is_ok());
        assert_eq!(
            message(validate_not_blank(" \t", "Autocomplete query")),
            "Autocomplete query cannot be blank"
        );
    }

    #[test]
    fn test_query_bounds() {
        assert!(validate_query("t:creature").is_ok());
        assert!(validate_query(&"a".repeat(1000)).is_ok());
        assert_eq!(message(validate_query("")), "Query cannot be blank");
        assert_eq!(message(validate_query("   ")), "Query cannot be blank");
        assert_eq!(
            message(validate_query(&"a".repeat(1001))),
            "Query too long (max 1000 characters)"
        );
    }

    #[test]
    fn test_query_length_counts_characters_not_bytes() {
        // 1000 three-byte characters
        assert!(validate_query(&"東".repeat(1000)).is_ok());
    }

    #[test]
    fn test_card_name_bounds() {
        assert!(validate_card_name("Lightning Bolt").is_ok());
        assert!(validate_card_name(&"a".repeat(500)).is_ok());
        assert_eq!(message(validate_card_name("")), "Card name cannot be blank");
        assert_eq!(
            message(validate_card_name(&"a".repeat(501))),
            "Card name too long (max 500 characters)"
        );
    }

    #[test]
    fn test_page_bounds() {
        assert!(validate_page(1).is_ok());
        assert!(validate_page(10000).is_ok());
        assert_eq!(message(validate_page(0)), "Page must be greater than 0");
        assert_eq!(message(validate_page(-3)), "Page must be greater than 0");
        assert_eq!(
            message(validate_page(10001)),
            "Page number too large (max 10000)"
        );
    }

    #[test]
    fn test_set_code_bounds() {
        assert!(validate_set_code("mh3").is_ok());
        assert!(validate_set_code("pmei1").is_ok());
        assert_eq!(message(validate_set_code(" ")), "Set code cannot be blank");
        assert_eq!(
            message(validate_set_code("ab")),
            "Set code must be 3-5 characters"
        );
        assert_eq!(
            message(validate_set_code("abcdef")),
            "Set code must be 3-5 characters"
        );
        assert_eq!(
            message(validate_set_code("m-3")),
            "Set code must contain only letters and digits"
        );
    }

    #[test]
    fn test_scryfall_id_format() {
        assert!(validate_scryfall_id("56ebc372-aabd-4174-a943-c7bf59e5028d").is_ok());
        assert!(validate_scryfall_id("56EBC372-AABD-4174-A943-C7BF59E5028D").is_ok());
        assert_eq!(message(validate_scryfall_id("")), "ID cannot be blank");
        for bad in [
            "not-a-uuid",
            "56ebc372aabd4174a943c7bf59e5028d",
            "56ebc372-aabd-4174-a943-c7bf59e5028",
            "56ebc372-aabd-4174-a943-c7bf59e5028d-00",
            "g6ebc372-aabd-4174-a943-c7bf59e5028d",
        ] {
            assert_eq!(
                message(validate_scryfall_id(bad)),
                "ID must be a valid UUID format",
                "{bad}"
            );
        }
    }

    #[test]
    fn test_collector_number_bounds() {
        assert!(validate_collector_number("150").is_ok());
        assert!(validate_collector_number("1234567890").is_ok());
        assert_eq!(
            message(validate_collector_number("")),
            "Collector number cannot be blank"
        );
        assert_eq!(
            message(validate_collector_number("12345678901")),
            "Collector number too long (max 10 characters)"
        );
    }

    #[test]
    fn test_identifier_count_bounds() {
        assert_eq!(
            message(validate_identifiers::<u8>(&[])),
            "Identifiers list cannot be empty"
        );
        assert!(validate_identifiers(&[0u8; 1]).is_ok());
        assert!(validate_identifiers(&[0u8; 75]).is_ok());
        assert_eq!(
            message(validate_identifiers(&[0u8; 76])),
            "Too many identifiers (max 75 per request)"
        );
    }

    #[test]
    fn test_language_code_format() {
        assert!(validate_language_code("en").is_ok());
        assert_eq!(
            message(validate_language_code("")),
            "Language code cannot be blank"
        );
        assert_eq!(
            message(validate_language_code("eng")),
            "Language code must be 2 characters (ISO 639-1 format)"
        );
        assert_eq!(
            message(validate_language_code("EN")),
            "Language code must be lowercase letters"
        );
        assert_eq!(
            message(validate_language_code("e1")),
            "Language code must be lowercase letters"
        );
    }

    #[test]
    fn test_external_ids_must_be_positive() {
        assert!(validate_tcgplayer_id(1).is_ok());
        assert_eq!(
            message(validate_tcgplayer_id(0)),
            "TCGPlayer ID must be positive"
        );
        assert_eq!(
            message(validate_multiverse_id(-1)),
            "Multiverse ID must be positive"
        );
        assert_eq!(message(validate_arena_id(0)), "Arena ID must be positive");
        assert_eq!(message(validate_mtgo_id(0)), "MTGO ID must be positive");
        assert_eq!(
            message(validate_cardmarket_id(0)),
            "Cardmarket ID must be positive"
        );
    }
}
