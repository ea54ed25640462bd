//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `InterestRepository` - Versioned interest records
//! - `PreferenceRepository` - Boolean preference flags
//!
//! ## Collaborator Ports
//!
//! - `EventTagLookup` - Tags of a catalog event
//! - `ActivityLogger` - Fire-and-forget remote log sink
//!
//! ## Event Ports
//!
//! - `EventPublisher` - Publishing weight updates to the ranking service
//! - `EventHandler` / `EventSubscriber` - Consuming reaction events

mod activity_logger;
mod event_publisher;
mod event_subscriber;
mod event_tag_lookup;
mod interest_repository;
mod preference_repository;

pub use activity_logger::{ActivityLogEntry, ActivityLogger, LogLevel};
pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventHandler, EventSubscriber};
pub use event_tag_lookup::EventTagLookup;
pub use interest_repository::{InterestRepository, SaveOutcome};
pub use preference_repository::PreferenceRepository;
