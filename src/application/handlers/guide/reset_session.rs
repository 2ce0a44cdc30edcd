//! ResetSessionHandler - Command handler for restarting a session.
//!
//! Restores the seeded initial state (pending queue cleared, recommendation
//! list back to module 0 only) and re-enters the start node.

use std::sync::Arc;

use crate::domain::engine::TraversalSession;
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::graph::DecisionGraph;
use crate::ports::{SessionStore, SessionStoreError};

/// Command to reset a session to its initial state.
#[derive(Debug, Clone)]
pub struct ResetSessionCommand {
    /// The session to reset.
    pub session_id: SessionId,
}

/// Result of a successful reset.
#[derive(Debug)]
pub struct ResetSessionResult {
    /// The session, back at the first question.
    pub session: TraversalSession,
}

/// Error type for resetting a session.
#[derive(Debug)]
pub enum ResetSessionError {
    /// No session with that id exists.
    SessionNotFound(SessionId),
    /// Domain error (graph integrity fault during the initial visit).
    Domain(DomainError),
    /// Session could not be loaded or persisted.
    Store(SessionStoreError),
}

impl std::fmt::Display for ResetSessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResetSessionError::SessionNotFound(id) => write!(f, "Session not found: {}", id),
            ResetSessionError::Domain(err) => write!(f, "{}", err),
            ResetSessionError::Store(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ResetSessionError {}

impl From<DomainError> for ResetSessionError {
    fn from(err: DomainError) -> Self {
        ResetSessionError::Domain(err)
    }
}

impl From<SessionStoreError> for ResetSessionError {
    fn from(err: SessionStoreError) -> Self {
        ResetSessionError::Store(err)
    }
}

/// Handler for resetting sessions.
pub struct ResetSessionHandler {
    session_store: Arc<dyn SessionStore>,
    graph: Arc<DecisionGraph>,
}

impl ResetSessionHandler {
    pub fn new(session_store: Arc<dyn SessionStore>, graph: Arc<DecisionGraph>) -> Self {
        Self {
            session_store,
            graph,
        }
    }

    pub async fn handle(
        &self,
        cmd: ResetSessionCommand,
    ) -> Result<ResetSessionResult, ResetSessionError> {
        let mut session = self
            .session_store
            .find(cmd.session_id)
            .await?
            .ok_or(ResetSessionError::SessionNotFound(cmd.session_id))?;

        session.reset(&self.graph)?;
        self.session_store.save(&session).await?;

        tracing::info!(session_id = %session.id(), "traversal session reset");
        Ok(ResetSessionResult { session })
    }
}
