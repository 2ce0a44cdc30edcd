//! GetSessionHandler - Query handler for the current session state.

use std::sync::Arc;

use crate::domain::engine::TraversalSession;
use crate::domain::foundation::SessionId;
use crate::ports::{SessionStore, SessionStoreError};

/// Query for the current state of a session.
#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    /// The session to look up.
    pub session_id: SessionId,
}

/// Result of a successful session lookup.
#[derive(Debug)]
pub struct GetSessionResult {
    /// The session as last persisted.
    pub session: TraversalSession,
}

/// Error type for session lookup.
#[derive(Debug)]
pub enum GetSessionError {
    /// No session with that id exists.
    SessionNotFound(SessionId),
    /// Session could not be loaded.
    Store(SessionStoreError),
}

impl std::fmt::Display for GetSessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetSessionError::SessionNotFound(id) => write!(f, "Session not found: {}", id),
            GetSessionError::Store(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for GetSessionError {}

impl From<SessionStoreError> for GetSessionError {
    fn from(err: SessionStoreError) -> Self {
        GetSessionError::Store(err)
    }
}

/// Handler for session lookups.
pub struct GetSessionHandler {
    session_store: Arc<dyn SessionStore>,
}

impl GetSessionHandler {
    pub fn new(session_store: Arc<dyn SessionStore>) -> Self {
        Self { session_store }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<GetSessionResult, GetSessionError> {
        let session = self
            .session_store
            .find(query.session_id)
            .await?
            .ok_or(GetSessionError::SessionNotFound(query.session_id))?;

        Ok(GetSessionResult { session })
    }
}
