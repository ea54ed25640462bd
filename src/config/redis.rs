//! Redis configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Redis pub/sub settings
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    /// Redis connection URL
    pub url: String,

    /// Channel receiving weight updates for the ranking service
    #[serde(default = "default_ranking_channel")]
    pub ranking_channel: String,

    /// Consume like/favorite events from the reaction channels
    #[serde(default = "default_listen_reactions")]
    pub listen_reactions: bool,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl RedisConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate Redis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("REDIS__URL"));
        }
        if !self.url.starts_with("redis://") && !self.url.starts_with("rediss://") {
            return Err(ValidationError::InvalidRedisUrl);
        }
        if self.ranking_channel.trim().is_empty() {
            return Err(ValidationError::EmptyChannel);
        }
        Ok(())
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            ranking_channel: default_ranking_channel(),
            listen_reactions: default_listen_reactions(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_ranking_channel() -> String {
    "make_top".to_string()
}

fn default_listen_reactions() -> bool {
    true
}

fn default_timeout() -> u64 {
    5
}
