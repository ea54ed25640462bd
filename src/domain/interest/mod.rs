//! Interest domain - per-user tag weights folded from questionnaires and reactions.

mod events;
mod record;
mod weights;

pub use events::WeightsUpdated;
pub use record::{InterestRecord, RecordLookup};
pub use weights::{
    FoldWeights, ReactionAction, ReactionKind, TagWeights, DEFAULT_FAVORITE_WEIGHT,
    DEFAULT_LIKE_WEIGHT, DEFAULT_QUESTIONNAIRE_WEIGHT,
};
