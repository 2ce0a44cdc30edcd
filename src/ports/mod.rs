//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ModuleStore` - Retrieval of module texts by number
//! - `SessionStore` - Persistence of traversal sessions

mod module_store;
mod session_store;

pub use module_store::{ModuleStore, ModuleStoreError};
pub use session_store::{SessionStore, SessionStoreError};
