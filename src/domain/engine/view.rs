//! Recommendation view - the final output of a traversal session.

use serde::{Deserialize, Serialize};

/// File name of the bulk-download artifact.
///
/// The typo is a user-visible contract inherited from the published
/// tutorial; do not correct it.
pub const BUNDLE_FILE_NAME: &str = "Captive Protal Guidelines.md";

/// Message shown when nothing beyond the seed module was recommended.
pub const NOT_APPLICABLE_MESSAGE: &str =
    "Unfortunately, this tutorial is not for you at the moment";

/// The final view produced when a traversal session finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationView {
    /// Nothing beyond the seeded setup guide applied to this user.
    NotApplicable,

    /// One entry per recommended module, in recommendation order.
    Recommended(Vec<RecommendedModule>),
}

/// A single recommended module in the final view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedModule {
    /// The module number.
    pub number: u32,

    /// Human-readable label, used as the link text.
    pub detail: String,

    /// Per-module resource name, `Module<N>.md`.
    pub resource: String,
}
