//! Response and request bodies.
//!
//! Models keep the fields most callers need as typed struct fields and
//! collect every other field in a flattened JSON map, so new upstream
//! fields never break decoding.

mod bulk_data;
mod card;
mod catalog;
mod ruling;
mod set;
mod symbology;

pub use bulk_data::BulkData;
pub use card::{AutocompleteResult, Card, CollectionRequest, Identifier};
pub use catalog::Catalog;
pub use ruling::Ruling;
pub use set::Set;
pub use symbology::{CardSymbol, ParsedManaCost};

/// Fields a model does not name explicitly.
pub type Extra = serde_json::Map<String, serde_json::Value>;
