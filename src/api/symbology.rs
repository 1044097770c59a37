use crate::{
    metadata::RequestMetadata,
    models::{CardSymbol, ParsedManaCost},
    pagination::Page,
    validation::validate_not_blank,
    Client, Result,
};

/// Card symbols and mana cost parsing.
#[derive(Debug, Clone, Copy)]
pub struct SymbologyApi<'a> {
    client: &'a Client,
}

impl<'a> SymbologyApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists every symbol that can appear on a card.
    pub async fn all(&self) -> Result<Page<CardSymbol>> {
        self.client
            .fetch_page::<(), CardSymbol>(RequestMetadata::get("/symbology"), None)
            .await
    }

    /// Normalizes a mana cost such as `"2WW"` into symbols and computes its
    /// mana value and colors.
    pub async fn parse_mana(&self, cost: &str) -> Result<ParsedManaCost> {
        validate_not_blank(cost, "Mana cost")?;
        let request = RequestMetadata::get("/symbology/parse-mana").with_query_param("cost", cost);
        Ok(self
            .client
            .call::<(), ParsedManaCost>(request, None)
            .await?
            .data)
    }
}
