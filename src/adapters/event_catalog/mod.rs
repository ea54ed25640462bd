//! Event catalog adapters - tag lookup over HTTP.

mod http_tag_lookup;

pub use http_tag_lookup::{EventCatalogConfig, HttpEventTagLookup};
