//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory repositories
//! - `postgres` - PostgreSQL repositories
//! - `events` - Event bus implementations (in-memory, Redis) and reaction intake
//! - `event_catalog` - Event tag lookup over HTTP
//! - `logging` - Activity log sinks
//! - `http` - REST API
//! - `wire` - JSON array message format shared by HTTP and Redis

pub mod event_catalog;
pub mod events;
pub mod http;
pub mod logging;
pub mod memory;
pub mod postgres;
pub mod wire;

pub use event_catalog::{EventCatalogConfig, HttpEventTagLookup};
pub use events::{
    InMemoryEventBus, ReactionEventHandler, RedisEventListener, RedisEventPublisher,
    REACTION_CHANNELS,
};
pub use http::{api_router, AppState};
pub use logging::{HttpActivityLogger, TracingActivityLogger};
pub use memory::{InMemoryInterestRepository, InMemoryPreferenceRepository};
pub use postgres::{PostgresInterestRepository, PostgresPreferenceRepository};
