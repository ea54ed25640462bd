//! HTTP adapters - REST API implementations.
//!
//! Bodies use the positional JSON arrays of the wire format in
//! `adapters::wire`. Each domain module has its own routes; `api_router`
//! assembles them with tracing, request ids and a request timeout.

pub mod error;
pub mod interest;
pub mod preference;
mod router;

pub use error::{domain_error_response, status_for, ErrorResponse};
pub use router::{api_router, REQUEST_ID_HEADER};

use std::sync::Arc;

use axum::http::HeaderMap;

use crate::application::InterestAggregator;
use crate::domain::foundation::CommandMetadata;

/// State shared by all routes.
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<InterestAggregator>,
}

impl AppState {
    pub fn new(aggregator: Arc<InterestAggregator>) -> Self {
        Self { aggregator }
    }
}

/// Command metadata for an HTTP request, correlated by its request id.
pub(crate) fn command_metadata(headers: &HeaderMap) -> CommandMetadata {
    let metadata = CommandMetadata::new().with_source("http");
    match headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        Some(request_id) => metadata.with_correlation_id(request_id),
        None => metadata,
    }
}
