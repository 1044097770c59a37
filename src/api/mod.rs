//! Typed endpoint wrappers.
//!
//! Each wrapper borrows a [`Client`], validates its arguments and only then
//! issues a request, so a rejected argument never reaches the network.
//! [`Scryfall`] bundles a client with accessors for every wrapper.

mod bulk_data;
mod cards;
mod catalogs;
mod rulings;
mod sets;
mod symbology;

pub use bulk_data::BulkDataApi;
pub use cards::{CardsApi, SearchOptions, SortDirection, SortOrder, UniqueMode};
pub use catalogs::{CatalogKind, CatalogsApi};
pub use rulings::RulingsApi;
pub use sets::SetsApi;
pub use symbology::SymbologyApi;

use crate::{Client, Result};

/// Entry point to the whole API.
///
/// # Examples
///
/// ```no_run
/// use scryfall_api::Scryfall;
///
/// # async fn example() -> Result<(), scryfall_api::Error> {
/// let scryfall = Scryfall::new()?;
///
/// let card = scryfall.cards().named_fuzzy("jac bele", None).await?;
/// let rulings = scryfall.rulings().by_card_id(&card.id).await?;
/// println!("{} has {} rulings", card.name, rulings.data.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Scryfall {
    client: Client,
}

impl Scryfall {
    /// Connects with the default configuration.
    pub fn new() -> Result<Self> {
        Ok(Self::with_client(Client::new()?))
    }

    /// Wraps an already configured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// The underlying client, for raw calls and pagination.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Card search and lookups.
    pub fn cards(&self) -> CardsApi<'_> {
        CardsApi::new(&self.client)
    }

    /// Set lookups.
    pub fn sets(&self) -> SetsApi<'_> {
        SetsApi::new(&self.client)
    }

    /// Card rulings.
    pub fn rulings(&self) -> RulingsApi<'_> {
        RulingsApi::new(&self.client)
    }

    /// Catalogs of names, types and other datapoints.
    pub fn catalogs(&self) -> CatalogsApi<'_> {
        CatalogsApi::new(&self.client)
    }

    /// Bulk data export descriptors.
    pub fn bulk_data(&self) -> BulkDataApi<'_> {
        BulkDataApi::new(&self.client)
    }

    /// Card symbols and mana cost parsing.
    pub fn symbology(&self) -> SymbologyApi<'_> {
        SymbologyApi::new(&self.client)
    }
}

impl From<Client> for Scryfall {
    fn from(client: Client) -> Self {
        Self::with_client(client)
    }
}
