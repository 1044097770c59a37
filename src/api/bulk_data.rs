use crate::{
    metadata::{encode_path, RequestMetadata},
    models::BulkData,
    pagination::Page,
    validation::{validate_not_blank, validate_scryfall_id},
    Client, Result,
};

/// Descriptors of the daily bulk data exports.
///
/// Only the descriptors are fetched; the export files themselves are plain
/// downloads from [`BulkData::download_uri`].
#[derive(Debug, Clone, Copy)]
pub struct BulkDataApi<'a> {
    client: &'a Client,
}

impl<'a> BulkDataApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists every available export.
    pub async fn all(&self) -> Result<Page<BulkData>> {
        self.client
            .fetch_page::<(), BulkData>(RequestMetadata::get("/bulk-data"), None)
            .await
    }

    /// Looks an export up by its Scryfall ID.
    pub async fn by_id(&self, id: &str) -> Result<BulkData> {
        validate_scryfall_id(id)?;
        self.descriptor(encode_path(&["bulk-data", id])).await
    }

    /// Looks an export up by its type, e.g. `"oracle_cards"`.
    pub async fn by_type(&self, kind: &str) -> Result<BulkData> {
        validate_not_blank(kind, "Bulk data type")?;
        self.descriptor(encode_path(&["bulk-data", kind])).await
    }

    async fn descriptor(&self, path: String) -> Result<BulkData> {
        Ok(self
            .client
            .call::<(), BulkData>(RequestMetadata::get(path), None)
            .await?
            .data)
    }
}
