//! Event bus adapters.
//!
//! Adapters implement the event publishing and subscribing ports
//! for different environments:
//!
//! - `InMemoryEventBus` - Synchronous, in-process bus for tests and local runs
//! - `RedisEventPublisher` - Ranking notifications over Redis pub/sub
//! - `RedisEventListener` - Reaction intake from Redis pub/sub
//! - `ReactionEventHandler` - Folds reaction events through the aggregator

mod in_memory;
mod reaction_handler;
mod redis_listener;
mod redis_publisher;

pub use in_memory::InMemoryEventBus;
pub use reaction_handler::{reaction_for_channel, ReactionEventHandler};
pub use redis_listener::{RedisEventListener, REACTION_CHANNELS};
pub use redis_publisher::RedisEventPublisher;
