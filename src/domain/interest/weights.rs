//! Signal weights and reaction kinds.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Tag name to affinity weight. Absent tags are implicitly 0.0.
pub type TagWeights = BTreeMap<String, f64>;

/// Reference weight of a like.
pub const DEFAULT_LIKE_WEIGHT: f64 = 1.0;
/// One favorite counts as five likes on events with the same tags.
pub const DEFAULT_FAVORITE_WEIGHT: f64 = 5.0;
/// One questionnaire counts as fifty likes.
pub const DEFAULT_QUESTIONNAIRE_WEIGHT: f64 = 50.0;

/// Immutable weight constants injected into the aggregator at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoldWeights {
    like: f64,
    favorite: f64,
    questionnaire: f64,
}

impl FoldWeights {
    /// Creates a weight set; every weight must be finite and positive.
    pub fn new(like: f64, favorite: f64, questionnaire: f64) -> Result<Self, ValidationError> {
        for (field, value) in [
            ("like", like),
            ("favorite", favorite),
            ("questionnaire", questionnaire),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ValidationError::invalid_format(
                    field,
                    format!("weight must be a positive finite number, got {}", value),
                ));
            }
        }
        Ok(Self {
            like,
            favorite,
            questionnaire,
        })
    }

    pub fn like(&self) -> f64 {
        self.like
    }

    pub fn favorite(&self) -> f64 {
        self.favorite
    }

    pub fn questionnaire(&self) -> f64 {
        self.questionnaire
    }

    /// Weight applied for a reaction of the given kind.
    pub fn for_reaction(&self, kind: ReactionKind) -> f64 {
        match kind {
            ReactionKind::Like => self.like,
            ReactionKind::Favorite => self.favorite,
        }
    }
}

impl Default for FoldWeights {
    fn default() -> Self {
        Self {
            like: DEFAULT_LIKE_WEIGHT,
            favorite: DEFAULT_FAVORITE_WEIGHT,
            questionnaire: DEFAULT_QUESTIONNAIRE_WEIGHT,
        }
    }
}

/// Kind of reaction a user can leave on an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionKind {
    Like,
    Favorite,
}

/// Whether a reaction is being added or taken back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionAction {
    Add,
    Cancel,
}

impl ReactionAction {
    pub fn is_cancel(&self) -> bool {
        matches!(self, ReactionAction::Cancel)
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReactionKind::Like => write!(f, "like"),
            ReactionKind::Favorite => write!(f, "favorite"),
        }
    }
}

impl fmt::Display for ReactionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReactionAction::Add => write!(f, "add"),
            ReactionAction::Cancel => write!(f, "cancel"),
        }
    }
}
