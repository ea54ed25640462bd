//! Interest Aggregator - per-user interest profiles
//!
//! This crate folds questionnaires, likes and favorites into a weighted map
//! from topic tag to affinity, and notifies the ranking service whenever a
//! user's weights change.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
