use crate::{
    metadata::{encode_path, RequestMetadata},
    models::{AutocompleteResult, Card, CollectionRequest, Identifier},
    pagination::Page,
    validation::{
        validate_arena_id, validate_card_name, validate_cardmarket_id, validate_collector_number,
        validate_identifiers, validate_language_code, validate_mtgo_id, validate_multiverse_id,
        validate_not_blank, validate_page, validate_query, validate_scryfall_id,
        validate_set_code, validate_tcgplayer_id,
    },
    Client, Result,
};
use futures::Stream;
use std::fmt;

/// How duplicate printings are collapsed in search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UniqueMode {
    /// One result per card (the API default).
    #[default]
    Cards,
    /// One result per unique artwork.
    Art,
    /// Every printing.
    Prints,
}

impl UniqueMode {
    /// The value sent as the `unique` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            UniqueMode::Cards => "cards",
            UniqueMode::Art => "art",
            UniqueMode::Prints => "prints",
        }
    }
}

/// Field search results are sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    /// Card name, A to Z.
    Name,
    /// Set and collector number, newest set first.
    Set,
    /// Release date, newest first.
    Released,
    /// Rarity, common to mythic.
    Rarity,
    /// Color and color identity, WUBRG.
    Color,
    /// Price in US dollars, cheapest first.
    Usd,
    /// Price in MTGO tickets, cheapest first.
    Tix,
    /// Price in euros, cheapest first.
    Eur,
    /// Mana value, lowest first.
    Cmc,
    /// Power, lowest first.
    Power,
    /// Toughness, lowest first.
    Toughness,
    /// EDHREC popularity rank.
    Edhrec,
    /// Penny Dreadful popularity rank.
    Penny,
    /// Artist name, A to Z.
    Artist,
    /// Set review order.
    Review,
}

impl SortOrder {
    /// The value sent as the `order` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Name => "name",
            SortOrder::Set => "set",
            SortOrder::Released => "released",
            SortOrder::Rarity => "rarity",
            SortOrder::Color => "color",
            SortOrder::Usd => "usd",
            SortOrder::Tix => "tix",
            SortOrder::Eur => "eur",
            SortOrder::Cmc => "cmc",
            SortOrder::Power => "power",
            SortOrder::Toughness => "toughness",
            SortOrder::Edhrec => "edhrec",
            SortOrder::Penny => "penny",
            SortOrder::Artist => "artist",
            SortOrder::Review => "review",
        }
    }
}

/// Direction of the search sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Whatever direction suits the sort field.
    #[default]
    Auto,
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// The value sent as the `dir` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Auto => "auto",
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(UniqueMode, SortOrder, SortDirection);

/// Optional parameters of a card search.
///
/// Unset fields are left to the API's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// How duplicate printings are collapsed.
    pub unique: Option<UniqueMode>,
    /// Field to sort by.
    pub order: Option<SortOrder>,
    /// Sort direction.
    pub dir: Option<SortDirection>,
    /// Include tokens, planes and other extras.
    pub include_extras: bool,
    /// Include cards in every language.
    pub include_multilingual: bool,
    /// Include rare print variations.
    pub include_variations: bool,
    /// 1-based page to start from.
    pub page: Option<u32>,
}

/// Card lookups: search, names, identifiers and collections.
#[derive(Debug, Clone, Copy)]
pub struct CardsApi<'a> {
    client: &'a Client,
}

impl<'a> CardsApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn search_request(query: &str, options: &SearchOptions) -> Result<RequestMetadata> {
        validate_query(query)?;
        if let Some(page) = options.page {
            validate_page(i64::from(page))?;
        }

        Ok(RequestMetadata::get("/cards/search")
            .with_query_param("q", query)
            .with_optional_param("unique", options.unique)
            .with_optional_param("order", options.order)
            .with_optional_param("dir", options.dir)
            .with_query_param("include_extras", options.include_extras)
            .with_query_param("include_multilingual", options.include_multilingual)
            .with_query_param("include_variations", options.include_variations)
            .with_optional_param("page", options.page))
    }

    /// Runs a full-text search and returns one page of results.
    ///
    /// A search with no matches answers 404, surfaced as
    /// [`Error::NotFound`](crate::Error::NotFound).
    pub async fn search(&self, query: &str, options: &SearchOptions) -> Result<Page<Card>> {
        let request = Self::search_request(query, options)?;
        self.client.fetch_page::<(), Card>(request, None).await
    }

    /// Streams every result of a search across all pages.
    ///
    /// Arguments are validated immediately; the first request is sent when
    /// the stream is first polled.
    pub fn search_all(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<impl Stream<Item = Result<Card>> + Send + 'static> {
        let request = Self::search_request(query, options)?;
        Ok(self.client.paginate(request))
    }

    /// Suggests up to 20 card names starting with or containing `query`.
    pub async fn autocomplete(&self, query: &str, include_extras: bool) -> Result<AutocompleteResult> {
        validate_not_blank(query, "Autocomplete query")?;
        let request = RequestMetadata::get("/cards/autocomplete")
            .with_query_param("q", query)
            .with_query_param("include_extras", include_extras);
        Ok(self.client.call::<(), _>(request, None).await?.data)
    }

    /// Looks a card up by its exact name, optionally within one set.
    pub async fn named_exact(&self, name: &str, set: Option<&str>) -> Result<Card> {
        self.named("exact", name, set).await
    }

    /// Looks a card up by an approximate name, optionally within one set.
    ///
    /// Ambiguous names answer 404 with an error `type` of `"ambiguous"`.
    pub async fn named_fuzzy(&self, name: &str, set: Option<&str>) -> Result<Card> {
        self.named("fuzzy", name, set).await
    }

    async fn named(&self, mode: &str, name: &str, set: Option<&str>) -> Result<Card> {
        validate_card_name(name)?;
        if let Some(set) = set {
            validate_set_code(set)?;
        }
        let request = RequestMetadata::get("/cards/named")
            .with_query_param(mode, name)
            .with_optional_param("set", set);
        self.card(request).await
    }

    /// Returns a random card, optionally limited to cards matching `query`.
    pub async fn random(&self, query: Option<&str>) -> Result<Card> {
        let query = query.filter(|q| !q.trim().is_empty());
        if let Some(query) = query {
            validate_query(query)?;
        }
        self.card(RequestMetadata::get("/cards/random").with_optional_param("q", query))
            .await
    }

    /// Fetches up to 75 cards in one request.
    ///
    /// Identifiers that match nothing are listed in [`Page::not_found`].
    pub async fn collection(&self, identifiers: &[Identifier]) -> Result<Page<Card>> {
        validate_identifiers(identifiers)?;
        let body = CollectionRequest {
            identifiers: identifiers.to_vec(),
        };
        // Read-only lookup, safe to repeat
        let request = RequestMetadata::post("/cards/collection").idempotent(true);
        self.client.fetch_page(request, Some(&body)).await
    }

    /// Looks a printing up by set code and collector number.
    pub async fn by_code_and_number(&self, code: &str, number: &str, lang: Option<&str>) -> Result<Card> {
        validate_set_code(code)?;
        validate_collector_number(number)?;
        let path = match lang {
            Some(lang) => {
                validate_language_code(lang)?;
                encode_path(&["cards", code, number, lang])
            }
            None => encode_path(&["cards", code, number]),
        };
        self.card(RequestMetadata::get(path)).await
    }

    /// Looks a card up by its Gatherer multiverse ID.
    pub async fn by_multiverse_id(&self, id: i64) -> Result<Card> {
        validate_multiverse_id(id)?;
        self.card(RequestMetadata::get(format!("/cards/multiverse/{}", id)))
            .await
    }

    /// Looks a card up by its MTGO catalog ID.
    pub async fn by_mtgo_id(&self, id: i64) -> Result<Card> {
        validate_mtgo_id(id)?;
        self.card(RequestMetadata::get(format!("/cards/mtgo/{}", id)))
            .await
    }

    /// Looks a card up by its MTG Arena ID.
    pub async fn by_arena_id(&self, id: i64) -> Result<Card> {
        validate_arena_id(id)?;
        self.card(RequestMetadata::get(format!("/cards/arena/{}", id)))
            .await
    }

    /// Looks a card up by its TCGplayer product ID.
    pub async fn by_tcgplayer_id(&self, id: i64) -> Result<Card> {
        validate_tcgplayer_id(id)?;
        self.card(RequestMetadata::get(format!("/cards/tcgplayer/{}", id)))
            .await
    }

    /// Looks a card up by its Cardmarket product ID.
    pub async fn by_cardmarket_id(&self, id: i64) -> Result<Card> {
        validate_cardmarket_id(id)?;
        self.card(RequestMetadata::get(format!("/cards/cardmarket/{}", id)))
            .await
    }

    /// Looks a printing up by its Scryfall ID.
    pub async fn by_id(&self, id: &str) -> Result<Card> {
        validate_scryfall_id(id)?;
        self.card(RequestMetadata::get(encode_path(&["cards", id])))
            .await
    }

    async fn card(&self, request: RequestMetadata) -> Result<Card> {
        Ok(self.client.call::<(), Card>(request, None).await?.data)
    }
}
