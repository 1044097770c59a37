//! Paginated list results.
//!
//! List endpoints answer with a [`Page`]: a batch of items plus, when more
//! remain, an absolute `next_page` URL. [`Page::into_stream`] and
//! [`Client::paginate`] walk that chain lazily, one request per page
//! transition, yielding items in server order.

use crate::{metadata::RequestMetadata, Client, Error, Result};
use futures::Stream;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// One fetched page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Object discriminator, `"list"` for pages.
    #[serde(rename = "object", default = "default_object")]
    pub object_type: String,
    /// Whether another page follows this one.
    #[serde(default)]
    pub has_more: bool,
    /// Absolute URL of the next page; present exactly when `has_more` is set.
    #[serde(default)]
    pub next_page: Option<String>,
    /// Total number of cards across all pages, for card searches.
    #[serde(default)]
    pub total_cards: Option<u64>,
    /// The items of this page, in server order.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Non-fatal problems reported while producing the list.
    #[serde(default)]
    pub warnings: Option<Vec<String>>,
    /// Identifiers from a collection lookup that matched no card.
    #[serde(default)]
    pub not_found: Option<Vec<NotFound>>,
}

fn default_object() -> String {
    "list".to_string()
}

/// An identifier from a collection lookup that matched nothing.
///
/// Echoes back whichever identifier fields the request used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotFound {
    /// The Scryfall ID that was requested.
    #[serde(default)]
    pub id: Option<String>,
    /// The card name that was requested.
    #[serde(default)]
    pub name: Option<String>,
    /// The set code that was requested.
    #[serde(default)]
    pub set: Option<String>,
    /// The collector number that was requested.
    #[serde(default)]
    pub collector_number: Option<String>,
    /// Every other identifier field, such as `mtgo_id` or `oracle_id`.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl<T> Page<T> {
    /// Builds a page from its items and an optional next-page URL.
    pub fn new(data: Vec<T>, next_page: Option<String>) -> Self {
        Self {
            object_type: default_object(),
            has_more: next_page.is_some(),
            next_page,
            total_cards: None,
            data,
            warnings: None,
            not_found: None,
        }
    }

    /// Rejects pages whose `has_more` flag and `next_page` link disagree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if `has_more` is set without a `next_page`,
    /// or a `next_page` is present while `has_more` is not set.
    pub fn check_links(&self) -> Result<()> {
        let reason = match (self.has_more, &self.next_page) {
            (true, None) => "page has more results but no next_page link",
            (false, Some(_)) => "page has a next_page link but has_more is false",
            _ => return Ok(()),
        };
        tracing::error!(
            has_more = self.has_more,
            next_page = ?self.next_page,
            "Inconsistent pagination fields"
        );
        Err(Error::Parse {
            status: None,
            reason: reason.to_string(),
            raw_response: None,
        })
    }

    /// Returns `true` if this is the last page.
    pub fn is_last(&self) -> bool {
        !self.has_more
    }
}

impl<T> Page<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Fetches the page after this one, or `None` on the last page.
    pub async fn next(&self, client: &Client) -> Result<Option<Page<T>>> {
        self.check_links()?;
        match &self.next_page {
            Some(url) => client
                .fetch_page::<(), T>(RequestMetadata::get(url.as_str()), None)
                .await
                .map(Some),
            None => Ok(None),
        }
    }

    /// Turns this page into a stream over its items and all following pages.
    ///
    /// Items of a page are yielded before the next page is requested. A
    /// failed page request is yielded as an error and ends the stream.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use futures::TryStreamExt;
    /// use scryfall_api::{api::SearchOptions, Scryfall};
    ///
    /// # async fn example() -> Result<(), scryfall_api::Error> {
    /// let scryfall = Scryfall::new()?;
    /// let first = scryfall.cards().search("t:sliver", &SearchOptions::default()).await?;
    ///
    /// let names: Vec<String> = first
    ///     .into_stream(scryfall.client().clone())
    ///     .map_ok(|card| card.name)
    ///     .try_collect()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn into_stream(self, client: Client) -> impl Stream<Item = Result<T>> + Send + 'static {
        cursor_stream(Cursor {
            client,
            items: Vec::new().into_iter(),
            pending: Some(self),
            next: None,
        })
    }

    /// Like [`Page::into_stream`], leaving this page untouched.
    pub fn stream(&self, client: &Client) -> impl Stream<Item = Result<T>> + Send + 'static
    where
        T: Clone,
    {
        self.clone().into_stream(client.clone())
    }
}

impl Client {
    /// Streams every item of a list endpoint, starting from its first page.
    ///
    /// Nothing is requested until the stream is polled.
    pub fn paginate<T>(&self, metadata: RequestMetadata) -> impl Stream<Item = Result<T>> + Send + 'static
    where
        T: DeserializeOwned + Send + 'static,
    {
        cursor_stream(Cursor {
            client: self.clone(),
            items: Vec::new().into_iter(),
            pending: None,
            next: Some(metadata),
        })
    }
}

/// Position in a page chain: unread items, a fetched page not yet
/// unpacked, and the request for the page after that.
struct Cursor<T> {
    client: Client,
    items: std::vec::IntoIter<T>,
    pending: Option<Page<T>>,
    next: Option<RequestMetadata>,
}

fn cursor_stream<T>(cursor: Cursor<T>) -> impl Stream<Item = Result<T>> + Send + 'static
where
    T: DeserializeOwned + Send + 'static,
{
    futures::stream::try_unfold(cursor, advance::<T>)
}

/// Yields the next item, fetching at most one page to find it.
async fn advance<T>(mut cursor: Cursor<T>) -> Result<Option<(T, Cursor<T>)>>
where
    T: DeserializeOwned + Send + 'static,
{
    loop {
        if let Some(item) = cursor.items.next() {
            return Ok(Some((item, cursor)));
        }

        if let Some(page) = cursor.pending.take() {
            page.check_links()?;
            cursor.next = page.next_page.map(RequestMetadata::get);
            cursor.items = page.data.into_iter();
            continue;
        }

        let Some(request) = cursor.next.take() else {
            return Ok(None);
        };

        tracing::debug!(url = %request.path, "Fetching next page");
        let page = cursor
            .client
            .call::<(), Page<T>>(request, None)
            .await?
            .data;
        cursor.pending = Some(page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_list_envelope() {
        let page: Page<String> = serde_json::from_str(
            r#"{
                "object": "list",
                "has_more": true,
                "next_page": "https://api.scryfall.com/cards/search?page=2&q=bolt",
                "total_cards": 412,
                "data": ["a", "b"],
                "warnings": ["Invalid expression “xyz:1” was ignored."]
            }"#,
        )
        .unwrap();

        assert!(page.has_more);
        assert_eq!(page.total_cards, Some(412));
        assert_eq!(page.data, vec!["a", "b"]);
        assert!(page.not_found.is_none());
        assert!(page.check_links().is_ok());
    }

    #[test]
    fn test_deserialize_minimal_envelope() {
        let page: Page<String> = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert_eq!(page.object_type, "list");
        assert!(page.is_last());
        assert!(page.check_links().is_ok());
    }

    #[test]
    fn test_not_found_entries() {
        let page: Page<String> = serde_json::from_str(
            r#"{
                "object": "list",
                "has_more": false,
                "data": [],
                "not_found": [
                    {"name": "Nonexistent Card"},
                    {"set": "mrd", "collector_number": "999"},
                    {"mtgo_id": 1}
                ]
            }"#,
        )
        .unwrap();

        let not_found = page.not_found.unwrap();
        assert_eq!(not_found.len(), 3);
        assert_eq!(not_found[0].name.as_deref(), Some("Nonexistent Card"));
        assert_eq!(not_found[1].collector_number.as_deref(), Some("999"));
        assert_eq!(not_found[2].other.get("mtgo_id"), Some(&serde_json::json!(1)));
    }

    #[test]
    fn test_has_more_without_next_page_is_rejected() {
        let mut page = Page::new(vec![1, 2], None);
        page.has_more = true;
        assert!(matches!(page.check_links(), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_next_page_without_has_more_is_rejected() {
        let mut page = Page::new(vec![1], Some("https://api.scryfall.com/x".to_string()));
        page.has_more = false;
        assert!(matches!(page.check_links(), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_new_sets_has_more_from_link() {
        assert!(Page::new(vec![1], Some("https://x/2".to_string())).has_more);
        assert!(Page::<u8>::new(vec![], None).is_last());
    }
}
