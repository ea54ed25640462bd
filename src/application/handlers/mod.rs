//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod interest;
pub mod preference;

pub use interest::{
    GetWeightsHandler, GetWeightsQuery, RecordReactionCommand, RecordReactionHandler,
    RecordReactionResult, SubmitQuestionnaireCommand, SubmitQuestionnaireHandler,
    SubmitQuestionnaireResult, DEFAULT_MAX_FOLD_ATTEMPTS,
};
pub use preference::{GetFlagsHandler, GetFlagsQuery, SaveFlagsCommand, SaveFlagsHandler};
