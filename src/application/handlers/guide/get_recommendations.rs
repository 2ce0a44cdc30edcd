//! GetRecommendationsHandler - Query handler for the final view.

use std::sync::Arc;

use crate::domain::engine::RecommendationView;
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::graph::DecisionGraph;
use crate::ports::{SessionStore, SessionStoreError};

/// Query for a finished session's recommendation view.
#[derive(Debug, Clone)]
pub struct GetRecommendationsQuery {
    /// The session whose view to produce.
    pub session_id: SessionId,
}

/// Result of a successful view production.
#[derive(Debug)]
pub struct GetRecommendationsResult {
    /// The final recommendation view.
    pub view: RecommendationView,
}

/// Error type for producing the recommendation view.
#[derive(Debug)]
pub enum GetRecommendationsError {
    /// No session with that id exists.
    SessionNotFound(SessionId),
    /// Domain error (session not finished, or graph integrity fault).
    Domain(DomainError),
    /// Session could not be loaded.
    Store(SessionStoreError),
}

impl std::fmt::Display for GetRecommendationsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetRecommendationsError::SessionNotFound(id) => {
                write!(f, "Session not found: {}", id)
            }
            GetRecommendationsError::Domain(err) => write!(f, "{}", err),
            GetRecommendationsError::Store(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for GetRecommendationsError {}

impl From<DomainError> for GetRecommendationsError {
    fn from(err: DomainError) -> Self {
        GetRecommendationsError::Domain(err)
    }
}

impl From<SessionStoreError> for GetRecommendationsError {
    fn from(err: SessionStoreError) -> Self {
        GetRecommendationsError::Store(err)
    }
}

/// Handler for producing recommendation views.
pub struct GetRecommendationsHandler {
    session_store: Arc<dyn SessionStore>,
    graph: Arc<DecisionGraph>,
}

impl GetRecommendationsHandler {
    pub fn new(session_store: Arc<dyn SessionStore>, graph: Arc<DecisionGraph>) -> Self {
        Self {
            session_store,
            graph,
        }
    }

    pub async fn handle(
        &self,
        query: GetRecommendationsQuery,
    ) -> Result<GetRecommendationsResult, GetRecommendationsError> {
        let session = self
            .session_store
            .find(query.session_id)
            .await?
            .ok_or(GetRecommendationsError::SessionNotFound(query.session_id))?;

        let view = session.recommendations(&self.graph)?;
        Ok(GetRecommendationsResult { view })
    }
}
