//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).
//! `InterestAggregator` bundles them behind the boundary operations used by
//! the HTTP routes and the reaction listener.

mod aggregator;
pub mod handlers;

pub use aggregator::{AggregatorPorts, AggregatorSettings, InterestAggregator};
pub use handlers::{
    GetFlagsHandler, GetFlagsQuery, GetWeightsHandler, GetWeightsQuery, RecordReactionCommand,
    RecordReactionHandler, RecordReactionResult, SaveFlagsCommand, SaveFlagsHandler,
    SubmitQuestionnaireCommand, SubmitQuestionnaireHandler, SubmitQuestionnaireResult,
    DEFAULT_MAX_FOLD_ATTEMPTS,
};
