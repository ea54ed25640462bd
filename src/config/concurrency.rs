//! Optimistic write configuration

use serde::Deserialize;

use crate::application::DEFAULT_MAX_FOLD_ATTEMPTS;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct ConcurrencyConfig {
    /// Attempts per fold before giving up on a contended record
    #[serde(default = "default_max_fold_attempts")]
    pub max_fold_attempts: u32,
}

impl ConcurrencyConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_fold_attempts == 0 {
            return Err(ValidationError::InvalidMaxAttempts);
        }
        Ok(())
    }
}

impl Default for ConcurrencyConfig {
    fn default() -> Self {
        Self {
            max_fold_attempts: default_max_fold_attempts(),
        }
    }
}

fn default_max_fold_attempts() -> u32 {
    DEFAULT_MAX_FOLD_ATTEMPTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_attempts() {
        let config = ConcurrencyConfig::default();
        assert_eq!(config.max_fold_attempts, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let config = ConcurrencyConfig {
            max_fold_attempts: 0,
        };
        assert!(config.validate().is_err());
    }
}
