//! HTTP adapter for boolean preference flags.

mod handlers;
mod routes;

pub use routes::preference_routes;
