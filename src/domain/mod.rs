//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, events, errors)
//! - `interest` - Interest records and the weight fold arithmetic
//! - `preference` - Boolean preference flags

pub mod foundation;
pub mod interest;
pub mod preference;
