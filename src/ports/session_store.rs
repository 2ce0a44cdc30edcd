//! Session Store Port - Persistence of traversal sessions.
//!
//! Sessions live for the duration of a questionnaire walk. The reference
//! adapter keeps them in memory; nothing outlives the process.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::engine::TraversalSession;
use crate::domain::foundation::SessionId;

/// Errors that can occur during session storage operations.
#[derive(Debug, Clone, Error)]
pub enum SessionStoreError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Port for persisting and loading traversal sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Saves a session, overwriting any existing session with the same id.
    async fn save(&self, session: &TraversalSession) -> Result<(), SessionStoreError>;

    /// Finds a session by id.
    async fn find(&self, id: SessionId) -> Result<Option<TraversalSession>, SessionStoreError>;

    /// Removes a session.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError::NotFound` if no such session exists.
    async fn remove(&self, id: SessionId) -> Result<(), SessionStoreError>;
}
