//! HTTP DTOs (Data Transfer Objects) for guide endpoints.
//!
//! These types define the JSON request/response structure for the
//! questionnaire API. They serve as the boundary between HTTP and the
//! application layer.

use serde::{Deserialize, Serialize};

use crate::domain::engine::{
    Answer, EngineState, RecommendationView, TraversalSession, BUNDLE_FILE_NAME,
    NOT_APPLICABLE_MESSAGE,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::graph::DecisionGraph;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to answer the currently presented question.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRequest {
    /// The user's answer, `"yes"` or `"no"`.
    pub answer: Answer,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response describing the current state of a traversal session.
///
/// Always reflects exactly one question or one final view; each response
/// replaces the client's prior view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Session ID.
    pub session_id: String,
    /// The view the client should render.
    #[serde(flatten)]
    pub view: SessionViewResponse,
}

/// The view portion of a session response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionViewResponse {
    /// A question awaits an answer.
    Question {
        /// Node key of the question, stable across renders.
        key: String,
        /// The prompt text to display.
        prompt: String,
    },
    /// The traversal finished; the final view is available.
    Finished {
        /// The final recommendation view.
        recommendations: RecommendationsResponse,
    },
}

/// Response for the final recommendation view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    /// False when nothing beyond the seeded setup guide applied.
    pub applicable: bool,
    /// The "not applicable" message, present only when `applicable` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// One link per recommended module, in recommendation order.
    pub modules: Vec<ModuleLinkResponse>,
    /// Bulk-download artifact name, absent when there is nothing to download.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle: Option<String>,
}

/// A single module link in the final view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleLinkResponse {
    /// Module number.
    pub number: u32,
    /// Human-readable label, used as link text.
    pub detail: String,
    /// Per-module resource name, `Module<N>.md`.
    pub resource: String,
}

impl From<RecommendationView> for RecommendationsResponse {
    fn from(view: RecommendationView) -> Self {
        match view {
            RecommendationView::NotApplicable => Self {
                applicable: false,
                message: Some(NOT_APPLICABLE_MESSAGE.to_string()),
                modules: Vec::new(),
                bundle: None,
            },
            RecommendationView::Recommended(modules) => Self {
                applicable: true,
                message: None,
                modules: modules
                    .into_iter()
                    .map(|m| ModuleLinkResponse {
                        number: m.number,
                        detail: m.detail,
                        resource: m.resource,
                    })
                    .collect(),
                bundle: Some(BUNDLE_FILE_NAME.to_string()),
            },
        }
    }
}

impl SessionResponse {
    /// Builds the response for a session's current state.
    ///
    /// # Errors
    ///
    /// Returns a domain error only on a graph integrity fault (an awaited
    /// key without a question node).
    pub fn from_session(
        session: &TraversalSession,
        graph: &DecisionGraph,
    ) -> Result<Self, DomainError> {
        let view = match session.state() {
            EngineState::Awaiting(key) => {
                let prompt = session.current_prompt(graph).ok_or_else(|| {
                    DomainError::new(
                        ErrorCode::NodeNotFound,
                        format!("Awaited node '{}' is not a question in the graph", key),
                    )
                })?;
                SessionViewResponse::Question {
                    key: key.to_string(),
                    prompt: prompt.to_string(),
                }
            }
            EngineState::Finished => SessionViewResponse::Finished {
                recommendations: session.recommendations(graph)?.into(),
            },
        };

        Ok(Self {
            session_id: session.id().to_string(),
            view,
        })
    }
}

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
