//! Route configuration for guide endpoints.
//!
//! Configures the Axum router with questionnaire and download routes.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    answer_question, download_bundle, fetch_module, get_recommendations, get_session,
    reset_session, start_session, GuideAppState,
};

/// Creates the guide router with all endpoints.
///
/// Routes:
/// - `POST /api/sessions` - Start a traversal session
/// - `GET /api/sessions/:id` - Current question or final view
/// - `POST /api/sessions/:id/answer` - Answer the current question
/// - `POST /api/sessions/:id/reset` - Reset to the start node
/// - `GET /api/sessions/:id/recommendations` - Final recommendation view
/// - `GET /api/sessions/:id/bundle` - Bulk download of recommended modules
/// - `GET /api/modules/:number` - Single module download
pub fn guide_router() -> Router<GuideAppState> {
    Router::new()
        .route("/api/sessions", post(start_session))
        .route("/api/sessions/:id", get(get_session))
        .route("/api/sessions/:id/answer", post(answer_question))
        .route("/api/sessions/:id/reset", post(reset_session))
        .route("/api/sessions/:id/recommendations", get(get_recommendations))
        .route("/api/sessions/:id/bundle", get(download_bundle))
        .route("/api/modules/:number", get(fetch_module))
}
