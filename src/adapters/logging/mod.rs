//! Activity logger adapters.
//!
//! - `HttpActivityLogger` - Posts entries to the shared logging service
//! - `TracingActivityLogger` - Emits entries as `tracing` events

mod http;
mod tracing_logger;

pub use http::HttpActivityLogger;
pub use tracing_logger::TracingActivityLogger;
