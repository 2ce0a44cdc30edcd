//! AnswerQuestionHandler - Command handler for answering the current question.
//!
//! Each answer fully completes before the next can be processed for the
//! same session; the engine advances synchronously and the updated session
//! is persisted before the result is returned.

use std::sync::Arc;

use crate::domain::engine::{Answer, TraversalSession};
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::graph::DecisionGraph;
use crate::ports::{SessionStore, SessionStoreError};

/// Command to answer the currently presented question.
#[derive(Debug, Clone)]
pub struct AnswerQuestionCommand {
    /// The session to advance.
    pub session_id: SessionId,
    /// The user's answer.
    pub answer: Answer,
}

/// Result of a successful answer.
#[derive(Debug)]
pub struct AnswerQuestionResult {
    /// The session after the traversal advanced.
    pub session: TraversalSession,
}

/// Error type for answering a question.
#[derive(Debug)]
pub enum AnswerQuestionError {
    /// No session with that id exists.
    SessionNotFound(SessionId),
    /// Domain error (e.g. the session is already finished).
    Domain(DomainError),
    /// Session could not be loaded or persisted.
    Store(SessionStoreError),
}

impl std::fmt::Display for AnswerQuestionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerQuestionError::SessionNotFound(id) => write!(f, "Session not found: {}", id),
            AnswerQuestionError::Domain(err) => write!(f, "{}", err),
            AnswerQuestionError::Store(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AnswerQuestionError {}

impl From<DomainError> for AnswerQuestionError {
    fn from(err: DomainError) -> Self {
        AnswerQuestionError::Domain(err)
    }
}

impl From<SessionStoreError> for AnswerQuestionError {
    fn from(err: SessionStoreError) -> Self {
        AnswerQuestionError::Store(err)
    }
}

/// Handler for answering questions.
pub struct AnswerQuestionHandler {
    session_store: Arc<dyn SessionStore>,
    graph: Arc<DecisionGraph>,
}

impl AnswerQuestionHandler {
    pub fn new(session_store: Arc<dyn SessionStore>, graph: Arc<DecisionGraph>) -> Self {
        Self {
            session_store,
            graph,
        }
    }

    pub async fn handle(
        &self,
        cmd: AnswerQuestionCommand,
    ) -> Result<AnswerQuestionResult, AnswerQuestionError> {
        // 1. Load the session
        let mut session = self
            .session_store
            .find(cmd.session_id)
            .await?
            .ok_or(AnswerQuestionError::SessionNotFound(cmd.session_id))?;

        // 2. Advance the traversal (domain logic handles validation)
        session.answer(&self.graph, cmd.answer)?;

        // 3. Persist the updated session
        self.session_store.save(&session).await?;

        tracing::debug!(
            session_id = %session.id(),
            finished = session.is_finished(),
            "question answered"
        );
        Ok(AnswerQuestionResult { session })
    }
}
