//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `graph` - The static decision graph and its validation
//! - `engine` - The questionnaire traversal engine and recommendation view

pub mod engine;
pub mod foundation;
pub mod graph;
