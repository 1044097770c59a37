use crate::{
    metadata::{encode_path, RequestMetadata},
    models::Ruling,
    pagination::Page,
    validation::{
        validate_arena_id, validate_collector_number, validate_mtgo_id, validate_multiverse_id,
        validate_scryfall_id, validate_set_code,
    },
    Client, Result,
};

/// Oracle rulings for a card, addressed by any of its identifiers.
#[derive(Debug, Clone, Copy)]
pub struct RulingsApi<'a> {
    client: &'a Client,
}

impl<'a> RulingsApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Rulings for the card with the given Scryfall ID.
    pub async fn by_card_id(&self, id: &str) -> Result<Page<Ruling>> {
        validate_scryfall_id(id)?;
        self.rulings(encode_path(&["cards", id, "rulings"])).await
    }

    /// Rulings for the card with the given multiverse ID.
    pub async fn by_multiverse_id(&self, id: i64) -> Result<Page<Ruling>> {
        validate_multiverse_id(id)?;
        self.rulings(format!("/cards/multiverse/{}/rulings", id))
            .await
    }

    /// Rulings for the card with the given MTGO ID.
    pub async fn by_mtgo_id(&self, id: i64) -> Result<Page<Ruling>> {
        validate_mtgo_id(id)?;
        self.rulings(format!("/cards/mtgo/{}/rulings", id)).await
    }

    /// Rulings for the card with the given Arena ID.
    pub async fn by_arena_id(&self, id: i64) -> Result<Page<Ruling>> {
        validate_arena_id(id)?;
        self.rulings(format!("/cards/arena/{}/rulings", id)).await
    }

    /// Rulings for the printing with the given set code and collector number.
    pub async fn by_code_and_number(&self, code: &str, number: &str) -> Result<Page<Ruling>> {
        validate_set_code(code)?;
        validate_collector_number(number)?;
        self.rulings(encode_path(&["cards", code, number, "rulings"]))
            .await
    }

    async fn rulings(&self, path: String) -> Result<Page<Ruling>> {
        self.client
            .fetch_page::<(), Ruling>(RequestMetadata::get(path), None)
            .await
    }
}
