//! Collaborator service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Endpoints of the services the aggregator calls.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollaboratorsConfig {
    /// Base URL of the event catalog (tag lookup)
    #[serde(default)]
    pub event_catalog_url: String,

    /// Logging service endpoint; entries only go to tracing when unset
    pub activity_log_url: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl CollaboratorsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.event_catalog_url.is_empty() {
            return Err(ValidationError::MissingRequired(
                "COLLABORATORS__EVENT_CATALOG_URL",
            ));
        }
        if !is_http_url(&self.event_catalog_url) {
            return Err(ValidationError::InvalidCollaboratorUrl("event_catalog_url"));
        }
        if let Some(url) = &self.activity_log_url {
            if !is_http_url(url) {
                return Err(ValidationError::InvalidCollaboratorUrl("activity_log_url"));
            }
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn default_timeout() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CollaboratorsConfig {
        CollaboratorsConfig {
            event_catalog_url: "http://event-das:8000".to_string(),
            activity_log_url: None,
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(valid().validate().is_ok());
        assert_eq!(valid().timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_missing_catalog_url() {
        assert!(matches!(
            CollaboratorsConfig::default().validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_non_http_urls_rejected() {
        let catalog = CollaboratorsConfig {
            event_catalog_url: "ftp://catalog".to_string(),
            ..valid()
        };
        assert!(catalog.validate().is_err());

        let logger = CollaboratorsConfig {
            activity_log_url: Some("logger:9000".to_string()),
            ..valid()
        };
        assert!(logger.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = CollaboratorsConfig {
            timeout_secs: 0,
            ..valid()
        };
        assert!(config.validate().is_err());
    }
}
