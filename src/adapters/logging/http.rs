//! Activity logger posting entries to the logging service.

use reqwest::Client;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::debug;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{ActivityLogEntry, ActivityLogger};

/// Sends each entry as a JSON POST on a spawned task.
///
/// Delivery failures are logged at debug level and otherwise ignored.
#[derive(Clone)]
pub struct HttpActivityLogger {
    client: Client,
    url: String,
}

impl HttpActivityLogger {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to create HTTP client: {}", e),
            )
        })?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl ActivityLogger for HttpActivityLogger {
    fn log(&self, entry: ActivityLogEntry) {
        let Ok(handle) = Handle::try_current() else {
            debug!(operation = %entry.operation, "No runtime; activity log entry dropped");
            return;
        };

        let request = self.client.post(&self.url).json(&entry);
        handle.spawn(async move {
            match request.send().await {
                Ok(response) if !response.status().is_success() => {
                    debug!(
                        operation = %entry.operation,
                        status = %response.status(),
                        "Logging service rejected entry"
                    );
                }
                Ok(_) => {}
                Err(e) => {
                    debug!(operation = %entry.operation, error = %e, "Logging service unreachable");
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Instant;

    #[test]
    fn log_without_runtime_does_not_panic() {
        let logger =
            HttpActivityLogger::new("http://127.0.0.1:9/log", Duration::from_millis(100)).unwrap();

        logger.log(ActivityLogEntry::info("svc", "add_like", json!([]), "Saving like"));
    }

    #[tokio::test]
    async fn log_returns_before_delivery() {
        // Non-routable address: delivery would hang until the client timeout.
        let logger =
            HttpActivityLogger::new("http://10.255.255.1/log", Duration::from_secs(5)).unwrap();

        let started = Instant::now();
        logger.log(ActivityLogEntry::info("svc", "add_like", json!(["u", "e"]), "Saving like"));

        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
