//! HTTP adapter for questionnaire, reaction and weight endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ReactionNotAppliedResponse, WeightsResponse};
pub use routes::interest_routes;
