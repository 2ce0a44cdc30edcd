//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `http` - Axum REST API (the rendering surface)
//! - `storage` - Module file and session stores

pub mod http;
pub mod storage;
