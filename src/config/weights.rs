//! Fold weight configuration

use serde::Deserialize;

use crate::domain::interest::{
    FoldWeights, DEFAULT_FAVORITE_WEIGHT, DEFAULT_LIKE_WEIGHT, DEFAULT_QUESTIONNAIRE_WEIGHT,
};

use super::error::ValidationError;

/// Weights of the three signal sources, relative to a like.
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_like")]
    pub like: f64,

    #[serde(default = "default_favorite")]
    pub favorite: f64,

    #[serde(default = "default_questionnaire")]
    pub questionnaire: f64,
}

impl WeightsConfig {
    /// Immutable weight set for the aggregator.
    pub fn fold_weights(&self) -> Result<FoldWeights, ValidationError> {
        FoldWeights::new(self.like, self.favorite, self.questionnaire)
            .map_err(|e| ValidationError::InvalidWeight(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.fold_weights().map(|_| ())
    }
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            like: default_like(),
            favorite: default_favorite(),
            questionnaire: default_questionnaire(),
        }
    }
}

fn default_like() -> f64 {
    DEFAULT_LIKE_WEIGHT
}

fn default_favorite() -> f64 {
    DEFAULT_FAVORITE_WEIGHT
}

fn default_questionnaire() -> f64 {
    DEFAULT_QUESTIONNAIRE_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_build_reference_weights() {
        let weights = WeightsConfig::default().fold_weights().unwrap();
        assert_eq!(weights, FoldWeights::default());
    }

    #[test]
    fn test_zero_weight_is_rejected() {
        let config = WeightsConfig {
            favorite: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidWeight(_))
        ));
    }
}
