//! Storage Adapters
//!
//! - **LocalModuleStore** - Reads `Module<N>.md` files from a directory
//! - **InMemorySessionStore** - Keeps traversal sessions in memory

mod in_memory_session_store;
mod local_module_store;

pub use in_memory_session_store::InMemorySessionStore;
pub use local_module_store::LocalModuleStore;
