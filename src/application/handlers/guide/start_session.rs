//! StartSessionHandler - Command handler for starting a traversal session.
//!
//! Creates a fresh engine instance seeded with module 0, enters the graph's
//! start node, and persists the session.

use std::sync::Arc;

use crate::domain::engine::TraversalSession;
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::graph::DecisionGraph;
use crate::ports::{SessionStore, SessionStoreError};

/// Command to start a new traversal session.
#[derive(Debug, Clone, Default)]
pub struct StartSessionCommand;

/// Result of successfully starting a session.
#[derive(Debug)]
pub struct StartSessionResult {
    /// The newly created session, positioned at the first question.
    pub session: TraversalSession,
}

/// Error type for starting a session.
#[derive(Debug)]
pub enum StartSessionError {
    /// Domain error (graph integrity fault during the initial visit).
    Domain(DomainError),
    /// Session could not be persisted.
    Store(SessionStoreError),
}

impl std::fmt::Display for StartSessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartSessionError::Domain(err) => write!(f, "{}", err),
            StartSessionError::Store(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for StartSessionError {}

impl From<DomainError> for StartSessionError {
    fn from(err: DomainError) -> Self {
        StartSessionError::Domain(err)
    }
}

impl From<SessionStoreError> for StartSessionError {
    fn from(err: SessionStoreError) -> Self {
        StartSessionError::Store(err)
    }
}

/// Handler for starting traversal sessions.
pub struct StartSessionHandler {
    session_store: Arc<dyn SessionStore>,
    graph: Arc<DecisionGraph>,
}

impl StartSessionHandler {
    pub fn new(session_store: Arc<dyn SessionStore>, graph: Arc<DecisionGraph>) -> Self {
        Self {
            session_store,
            graph,
        }
    }

    pub async fn handle(
        &self,
        _cmd: StartSessionCommand,
    ) -> Result<StartSessionResult, StartSessionError> {
        let session = TraversalSession::start(SessionId::new(), &self.graph)?;
        self.session_store.save(&session).await?;

        tracing::info!(session_id = %session.id(), "traversal session started");
        Ok(StartSessionResult { session })
    }
}
