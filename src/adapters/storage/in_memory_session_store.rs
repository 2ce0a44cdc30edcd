//! In-Memory Session Store Adapter
//!
//! Stores traversal sessions in memory. Sessions do not survive a restart;
//! the questionnaire has no persistence requirement beyond the page
//! lifetime it replaces.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::engine::TraversalSession;
use crate::domain::foundation::SessionId;
use crate::ports::{SessionStore, SessionStoreError};

/// In-memory storage for traversal sessions.
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, TraversalSession>>>,
}

impl InMemorySessionStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the number of stored sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save(&self, session: &TraversalSession) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id(), session.clone());
        Ok(())
    }

    async fn find(&self, id: SessionId) -> Result<Option<TraversalSession>, SessionStoreError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(&id).cloned())
    }

    async fn remove(&self, id: SessionId) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions
            .remove(&id)
            .map(|_| ())
            .ok_or(SessionStoreError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::graph::captive_portal_graph;

    fn test_session() -> TraversalSession {
        TraversalSession::start(SessionId::new(), &captive_portal_graph()).unwrap()
    }

    #[tokio::test]
    async fn save_and_find_round_trips() {
        let store = InMemorySessionStore::new();
        let session = test_session();

        store.save(&session).await.unwrap();
        let found = store.find(session.id()).await.unwrap();

        assert_eq!(found, Some(session));
    }

    #[tokio::test]
    async fn find_missing_returns_none() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.find(SessionId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_overwrites_existing_session() {
        let store = InMemorySessionStore::new();
        let graph = captive_portal_graph();
        let mut session = test_session();

        store.save(&session).await.unwrap();
        session
            .answer(&graph, crate::domain::engine::Answer::Yes)
            .unwrap();
        store.save(&session).await.unwrap();

        assert_eq!(store.session_count().await, 1);
        let found = store.find(session.id()).await.unwrap().unwrap();
        assert_eq!(found, session);
    }

    #[tokio::test]
    async fn remove_deletes_session() {
        let store = InMemorySessionStore::new();
        let session = test_session();

        store.save(&session).await.unwrap();
        store.remove(session.id()).await.unwrap();

        assert_eq!(store.find(session.id()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn remove_missing_returns_not_found() {
        let store = InMemorySessionStore::new();
        let result = store.remove(SessionId::new()).await;
        assert!(matches!(result, Err(SessionStoreError::NotFound(_))));
    }
}
