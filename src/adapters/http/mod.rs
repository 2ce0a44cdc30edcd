//! HTTP adapters - REST API implementations.

pub mod guide;

// Re-export key types for convenience
pub use guide::guide_router;
pub use guide::GuideAppState;
