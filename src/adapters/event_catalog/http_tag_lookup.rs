//! HTTP client for the event catalog's tag endpoint.
//!
//! `GET {base_url}/events/{event_id}/tags` answers with a JSON array of tag
//! names. The event id is sent as one percent-encoded path segment.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use tracing::debug;

use crate::domain::foundation::{DomainError, ErrorCode, EventId};
use crate::ports::EventTagLookup;

/// Configuration for the event catalog client.
#[derive(Debug, Clone)]
pub struct EventCatalogConfig {
    /// Base URL of the catalog service, without trailing slash.
    pub base_url: String,
    pub timeout: Duration,
}

impl EventCatalogConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct HttpEventTagLookup {
    config: EventCatalogConfig,
    base_url: Url,
    client: Client,
}

impl HttpEventTagLookup {
    pub fn new(config: EventCatalogConfig) -> Result<Self, DomainError> {
        let base_url = Url::parse(&config.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Invalid event catalog URL: {}", config.base_url),
                )
            })?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self {
            config,
            base_url,
            client,
        })
    }

    fn tags_url(&self, event_id: &EventId) -> Result<Url, DomainError> {
        // Url drops bare dot segments instead of encoding them.
        if matches!(event_id.as_str(), "." | "..") {
            return Err(DomainError::validation(
                "event_id",
                format!("Event id '{}' cannot be looked up", event_id),
            ));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                DomainError::new(ErrorCode::InternalError, "Event catalog URL cannot take a path")
            })?
            .pop_if_empty()
            .extend(["events", event_id.as_str(), "tags"]);
        Ok(url)
    }
}

#[async_trait]
impl EventTagLookup for HttpEventTagLookup {
    async fn tags_for_event(&self, event_id: &EventId) -> Result<Vec<String>, DomainError> {
        let response = self
            .client
            .get(self.tags_url(event_id)?)
            .send()
            .await
            .map_err(|e| {
                let reason = if e.is_timeout() {
                    format!("Event catalog timed out after {:?}", self.config.timeout)
                } else {
                    format!("Event catalog unreachable: {}", e)
                };
                DomainError::new(ErrorCode::CollaboratorUnavailable, reason)
            })?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::NOT_FOUND => {
                return Err(DomainError::new(
                    ErrorCode::EventNotFound,
                    format!("Event {} not found in catalog", event_id),
                )
                .with_detail("event_id", event_id.to_string()));
            }
            status => {
                return Err(DomainError::new(
                    ErrorCode::CollaboratorUnavailable,
                    format!("Event catalog answered {}", status),
                ));
            }
        }

        let tags: Vec<String> = response.json().await.map_err(|e| {
            DomainError::new(
                ErrorCode::CollaboratorUnavailable,
                format!("Event catalog returned malformed tags: {}", e),
            )
        })?;

        debug!(event_id = %event_id, tag_count = tags.len(), "Resolved event tags");
        Ok(tags)
    }
}
