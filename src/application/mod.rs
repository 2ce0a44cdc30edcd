//! Application layer - Command and query handlers.
//!
//! Handlers orchestrate domain logic through ports; they hold no business
//! rules of their own.

pub mod handlers;
