use crate::{
    metadata::{encode_path, RequestMetadata},
    models::Set,
    pagination::Page,
    validation::{validate_not_blank, validate_scryfall_id, validate_tcgplayer_id},
    Client, Result,
};

/// Set lookups.
#[derive(Debug, Clone, Copy)]
pub struct SetsApi<'a> {
    client: &'a Client,
}

impl<'a> SetsApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists every set, in a single page.
    pub async fn all(&self) -> Result<Page<Set>> {
        self.client
            .fetch_page::<(), Set>(RequestMetadata::get("/sets"), None)
            .await
    }

    /// Looks a set up by its code.
    ///
    /// Only blankness is checked: the API also accepts longer codes such as
    /// those of token and promo sets.
    pub async fn by_code(&self, code: &str) -> Result<Set> {
        validate_not_blank(code, "Set code")?;
        self.set(RequestMetadata::get(encode_path(&["sets", code])))
            .await
    }

    /// Looks a set up by its TCGplayer group ID.
    pub async fn by_tcgplayer_id(&self, id: i64) -> Result<Set> {
        validate_tcgplayer_id(id)?;
        self.set(RequestMetadata::get(format!("/sets/tcgplayer/{}", id)))
            .await
    }

    /// Looks a set up by its Scryfall ID.
    pub async fn by_id(&self, id: &str) -> Result<Set> {
        validate_scryfall_id(id)?;
        self.set(RequestMetadata::get(encode_path(&["sets", id])))
            .await
    }

    async fn set(&self, request: RequestMetadata) -> Result<Set> {
        Ok(self.client.call::<(), Set>(request, None).await?.data)
    }
}
