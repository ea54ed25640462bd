//! HTTP DTOs for interest endpoints.
//!
//! Requests are the wire tuples from `adapters::wire`; only responses need
//! their own types.

use serde::{Deserialize, Serialize};

use crate::application::{RecordReactionResult, SubmitQuestionnaireResult};
use crate::domain::interest::TagWeights;

/// A user's weights after a successful fold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightsResponse {
    pub user_id: String,
    pub tags: TagWeights,
}

impl From<SubmitQuestionnaireResult> for WeightsResponse {
    fn from(result: SubmitQuestionnaireResult) -> Self {
        Self {
            user_id: result.user_id.to_string(),
            tags: result.tags,
        }
    }
}

impl From<RecordReactionResult> for WeightsResponse {
    fn from(result: RecordReactionResult) -> Self {
        Self {
            user_id: result.user_id.to_string(),
            tags: result.tags,
        }
    }
}

/// Body returned when a reaction arrives before any questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionNotAppliedResponse {
    pub user_id: String,
    pub applied: bool,
}

impl ReactionNotAppliedResponse {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            applied: false,
        }
    }
}
