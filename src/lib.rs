//! # scryfall-api - A typed client for the Scryfall card database
//!
//! Every API call goes through one transport pipeline built on `reqwest`:
//! arguments are validated before anything is sent, non-2xx responses are
//! classified into typed errors, transient failures are retried with
//! backoff, and list endpoints can be walked page by page as a stream.
//!
//! ## Quick Start
//!
//! ```no_run
//! use futures::TryStreamExt;
//! use scryfall_api::{api::SearchOptions, Scryfall};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), scryfall_api::Error> {
//!     let scryfall = Scryfall::new()?;
//!
//!     // A single card
//!     let bolt = scryfall.cards().named_exact("Lightning Bolt", None).await?;
//!     println!("{}: {:?}", bolt.name, bolt.oracle_text);
//!
//!     // One page of a search
//!     let page = scryfall.cards().search("t:dragon cmc=4", &SearchOptions::default()).await?;
//!     println!("{:?} dragons in total", page.total_cards);
//!
//!     // Every result, across all pages
//!     let names: Vec<String> = scryfall
//!         .cards()
//!         .search_all("t:sliver", &SearchOptions::default())?
//!         .map_ok(|card| card.name)
//!         .try_collect()
//!         .await?;
//!     println!("{} slivers", names.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Pre-flight validation** - Malformed arguments fail with [`Error::InvalidArgument`] before any request
//! - **Typed errors** - 400, 404, 429 and 5xx answers map to their own variants carrying the server's error object
//! - **Retry with backoff** - Transient failures of idempotent requests are retried; `Retry-After` is honored
//! - **Lazy pagination** - [`Page::into_stream`] and [`Client::paginate`] fetch one page per transition
//! - **Opt-in HTTP logging** - Request and response lines at configurable detail, to `tracing` or a custom sink
//! - **Lossless models** - Fields the models don't name are kept in an `extra` map
//!
//! ## Error Handling
//!
//! ```no_run
//! use scryfall_api::{Error, Scryfall};
//!
//! # async fn example() -> Result<(), Error> {
//! # let scryfall = Scryfall::new()?;
//! match scryfall.cards().named_fuzzy("bolt", None).await {
//!     Ok(card) => println!("Found {}", card.name),
//!     Err(Error::NotFound(payload)) => {
//!         // e.g. type "ambiguous" when several cards match
//!         println!("No single match: {:?} ({:?})", payload.details, payload.error_type);
//!     }
//!     Err(Error::RateLimited { retry_after, .. }) => {
//!         println!("Slow down, retry after {:?}", retry_after);
//!     }
//!     Err(e) if e.is_retryable() => println!("Transient failure: {}", e),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Retry Policy
//!
//! ```no_run
//! use scryfall_api::{rate_limit::RateLimitConfig, Client, RetryPolicy, Scryfall};
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), scryfall_api::Error> {
//! let client = Client::builder()
//!     .retry_policy(RetryPolicy {
//!         max_retries: 5,
//!         initial_delay: Duration::from_millis(500),
//!         max_delay: Duration::from_secs(30),
//!         jitter: true,
//!     })
//!     .rate_limit_config(RateLimitConfig::builder().max_wait(Duration::from_secs(60)).build())
//!     .build()?;
//!
//! let scryfall = Scryfall::with_client(client);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod classify;
mod client;
pub mod config;
mod error;
pub mod logging;
pub mod metadata;
pub mod models;
pub mod pagination;
pub mod rate_limit;
mod response;
pub mod retry;
pub mod validation;

pub use api::Scryfall;
pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use error::{Error, ErrorPayload, Result};
pub use logging::{LogLevel, LogSink};
pub use pagination::Page;
pub use response::Response;
pub use retry::{RetryOnTransient, RetryPolicy, RetryPredicate};
