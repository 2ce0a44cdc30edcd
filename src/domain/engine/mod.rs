//! Questionnaire engine - Traversal state and the final view.

mod traversal;
mod view;

pub use traversal::{Answer, EngineState, TraversalSession};
pub use view::{RecommendationView, RecommendedModule, BUNDLE_FILE_NAME, NOT_APPLICABLE_MESSAGE};
