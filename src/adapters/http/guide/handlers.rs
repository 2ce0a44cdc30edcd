//! HTTP handlers for guide endpoints.
//!
//! These handlers connect Axum routes to application layer command/query
//! handlers. Session ids arrive as path parameters; bad formats are 400s,
//! unknown sessions 404s, and state misuse (answering a finished session,
//! fetching recommendations early) maps to 409.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::handlers::guide::{
    AnswerQuestionCommand, AnswerQuestionError, AnswerQuestionHandler, DownloadBundleCommand,
    DownloadBundleError, DownloadBundleHandler, FetchModuleError, FetchModuleHandler,
    FetchModuleQuery, GetRecommendationsError, GetRecommendationsHandler,
    GetRecommendationsQuery, GetSessionError, GetSessionHandler, GetSessionQuery,
    ResetSessionCommand, ResetSessionError, ResetSessionHandler, StartSessionCommand,
    StartSessionError, StartSessionHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::graph::DecisionGraph;
use crate::ports::{ModuleStore, ModuleStoreError, SessionStore};

use super::dto::{AnswerRequest, ErrorResponse, RecommendationsResponse, SessionResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct GuideAppState {
    pub session_store: Arc<dyn SessionStore>,
    pub module_store: Arc<dyn ModuleStore>,
    pub graph: Arc<DecisionGraph>,
}

impl GuideAppState {
    pub fn new(
        session_store: Arc<dyn SessionStore>,
        module_store: Arc<dyn ModuleStore>,
        graph: Arc<DecisionGraph>,
    ) -> Self {
        Self {
            session_store,
            module_store,
            graph,
        }
    }

    pub fn start_session_handler(&self) -> StartSessionHandler {
        StartSessionHandler::new(self.session_store.clone(), self.graph.clone())
    }

    pub fn get_session_handler(&self) -> GetSessionHandler {
        GetSessionHandler::new(self.session_store.clone())
    }

    pub fn answer_question_handler(&self) -> AnswerQuestionHandler {
        AnswerQuestionHandler::new(self.session_store.clone(), self.graph.clone())
    }

    pub fn reset_session_handler(&self) -> ResetSessionHandler {
        ResetSessionHandler::new(self.session_store.clone(), self.graph.clone())
    }

    pub fn get_recommendations_handler(&self) -> GetRecommendationsHandler {
        GetRecommendationsHandler::new(self.session_store.clone(), self.graph.clone())
    }

    pub fn download_bundle_handler(&self) -> DownloadBundleHandler {
        DownloadBundleHandler::new(
            self.session_store.clone(),
            self.module_store.clone(),
            self.graph.clone(),
        )
    }

    pub fn fetch_module_handler(&self) -> FetchModuleHandler {
        FetchModuleHandler::new(self.module_store.clone())
    }
}

fn parse_session_id(raw: &str) -> Result<SessionId, GuideApiError> {
    raw.parse()
        .map_err(|_| GuideApiError::BadRequest("Invalid session ID format".to_string()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions - Start a traversal session
pub async fn start_session(
    State(state): State<GuideAppState>,
) -> Result<impl IntoResponse, GuideApiError> {
    let handler = state.start_session_handler();
    let result = handler.handle(StartSessionCommand).await?;

    let response = SessionResponse::from_session(&result.session, &state.graph)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/sessions/:id - Current session state
pub async fn get_session(
    State(state): State<GuideAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, GuideApiError> {
    let session_id = parse_session_id(&session_id)?;

    let handler = state.get_session_handler();
    let result = handler.handle(GetSessionQuery { session_id }).await?;

    let response = SessionResponse::from_session(&result.session, &state.graph)?;
    Ok(Json(response))
}

/// POST /api/sessions/:id/answer - Answer the current question
pub async fn answer_question(
    State(state): State<GuideAppState>,
    Path(session_id): Path<String>,
    Json(request): Json<AnswerRequest>,
) -> Result<impl IntoResponse, GuideApiError> {
    let session_id = parse_session_id(&session_id)?;

    let handler = state.answer_question_handler();
    let result = handler
        .handle(AnswerQuestionCommand {
            session_id,
            answer: request.answer,
        })
        .await?;

    let response = SessionResponse::from_session(&result.session, &state.graph)?;
    Ok(Json(response))
}

/// POST /api/sessions/:id/reset - Reset the session to the start
pub async fn reset_session(
    State(state): State<GuideAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, GuideApiError> {
    let session_id = parse_session_id(&session_id)?;

    let handler = state.reset_session_handler();
    let result = handler.handle(ResetSessionCommand { session_id }).await?;

    let response = SessionResponse::from_session(&result.session, &state.graph)?;
    Ok(Json(response))
}

/// GET /api/sessions/:id/recommendations - Final view
pub async fn get_recommendations(
    State(state): State<GuideAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, GuideApiError> {
    let session_id = parse_session_id(&session_id)?;

    let handler = state.get_recommendations_handler();
    let result = handler
        .handle(GetRecommendationsQuery { session_id })
        .await?;

    let response: RecommendationsResponse = result.view.into();
    Ok(Json(response))
}

/// GET /api/sessions/:id/bundle - Bulk download of all recommended modules
pub async fn download_bundle(
    State(state): State<GuideAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, GuideApiError> {
    let session_id = parse_session_id(&session_id)?;

    let handler = state.download_bundle_handler();
    let result = handler.handle(DownloadBundleCommand { session_id }).await?;

    Ok(attachment(result.file_name, result.content))
}

/// GET /api/modules/:number - Single module download
pub async fn fetch_module(
    State(state): State<GuideAppState>,
    Path(number): Path<u32>,
) -> Result<impl IntoResponse, GuideApiError> {
    let handler = state.fetch_module_handler();
    let result = handler.handle(FetchModuleQuery { number }).await?;

    Ok(attachment(&result.resource, result.content))
}

/// Serves text as a browser-save attachment with the given file name.
fn attachment(file_name: &str, content: String) -> Response {
    (
        [
            (CONTENT_TYPE, "text/markdown; charset=utf-8".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        content,
    )
        .into_response()
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts application errors to HTTP responses.
#[derive(Debug)]
pub enum GuideApiError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl GuideApiError {
    fn from_domain(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidStateTransition | ErrorCode::SessionNotFinished => {
                GuideApiError::Conflict(err.to_string())
            }
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                GuideApiError::BadRequest(err.to_string())
            }
            // Graph integrity faults are server-side defects.
            _ => GuideApiError::Internal(err.to_string()),
        }
    }

    fn from_module_store(err: ModuleStoreError) -> Self {
        match err {
            ModuleStoreError::NotFound { .. } => GuideApiError::NotFound(err.to_string()),
            ModuleStoreError::Io { .. } => GuideApiError::Internal(err.to_string()),
        }
    }
}

impl From<DomainError> for GuideApiError {
    fn from(err: DomainError) -> Self {
        GuideApiError::from_domain(err)
    }
}

impl From<StartSessionError> for GuideApiError {
    fn from(err: StartSessionError) -> Self {
        match err {
            StartSessionError::Domain(e) => GuideApiError::from_domain(e),
            StartSessionError::Store(e) => GuideApiError::Internal(e.to_string()),
        }
    }
}

impl From<GetSessionError> for GuideApiError {
    fn from(err: GetSessionError) -> Self {
        match err {
            GetSessionError::SessionNotFound(id) => {
                GuideApiError::NotFound(format!("Session not found: {}", id))
            }
            GetSessionError::Store(e) => GuideApiError::Internal(e.to_string()),
        }
    }
}

impl From<AnswerQuestionError> for GuideApiError {
    fn from(err: AnswerQuestionError) -> Self {
        match err {
            AnswerQuestionError::SessionNotFound(id) => {
                GuideApiError::NotFound(format!("Session not found: {}", id))
            }
            AnswerQuestionError::Domain(e) => GuideApiError::from_domain(e),
            AnswerQuestionError::Store(e) => GuideApiError::Internal(e.to_string()),
        }
    }
}

impl From<ResetSessionError> for GuideApiError {
    fn from(err: ResetSessionError) -> Self {
        match err {
            ResetSessionError::SessionNotFound(id) => {
                GuideApiError::NotFound(format!("Session not found: {}", id))
            }
            ResetSessionError::Domain(e) => GuideApiError::from_domain(e),
            ResetSessionError::Store(e) => GuideApiError::Internal(e.to_string()),
        }
    }
}

impl From<GetRecommendationsError> for GuideApiError {
    fn from(err: GetRecommendationsError) -> Self {
        match err {
            GetRecommendationsError::SessionNotFound(id) => {
                GuideApiError::NotFound(format!("Session not found: {}", id))
            }
            GetRecommendationsError::Domain(e) => GuideApiError::from_domain(e),
            GetRecommendationsError::Store(e) => GuideApiError::Internal(e.to_string()),
        }
    }
}

impl From<DownloadBundleError> for GuideApiError {
    fn from(err: DownloadBundleError) -> Self {
        match err {
            DownloadBundleError::SessionNotFound(id) => {
                GuideApiError::NotFound(format!("Session not found: {}", id))
            }
            DownloadBundleError::Domain(e) => GuideApiError::from_domain(e),
            DownloadBundleError::Module(e) => GuideApiError::from_module_store(e),
            DownloadBundleError::Store(e) => GuideApiError::Internal(e.to_string()),
        }
    }
}

impl From<FetchModuleError> for GuideApiError {
    fn from(err: FetchModuleError) -> Self {
        match err {
            FetchModuleError::Module(e) => GuideApiError::from_module_store(e),
        }
    }
}

impl IntoResponse for GuideApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            GuideApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            GuideApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            GuideApiError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg),
            GuideApiError::Internal(msg) => {
                tracing::error!(message = %msg, "internal error serving guide request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(code, message))).into_response()
    }
}
