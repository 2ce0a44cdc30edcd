//! DownloadBundleHandler - Command handler for the bulk download.
//!
//! Retrieves every recommended module's text concurrently and joins on all
//! of them: if any single retrieval fails, the whole operation fails with
//! no partial output and no retry. Texts are concatenated in
//! recommendation order, separated by a single newline, and packaged under
//! the fixed bundle file name.

use std::sync::Arc;

use futures::future::try_join_all;

use crate::domain::engine::{RecommendationView, BUNDLE_FILE_NAME};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::graph::DecisionGraph;
use crate::ports::{ModuleStore, ModuleStoreError, SessionStore, SessionStoreError};

/// Command to assemble the bulk-download bundle for a finished session.
#[derive(Debug, Clone)]
pub struct DownloadBundleCommand {
    /// The session whose recommendations to bundle.
    pub session_id: SessionId,
}

/// Result of a successful bundle assembly.
#[derive(Debug)]
pub struct DownloadBundleResult {
    /// The artifact file name (fixed, typo included).
    pub file_name: &'static str,
    /// The newline-joined concatenation of all recommended module texts.
    pub content: String,
}

/// Error type for bundle assembly.
#[derive(Debug)]
pub enum DownloadBundleError {
    /// No session with that id exists.
    SessionNotFound(SessionId),
    /// Domain error (session not finished, or nothing to download).
    Domain(DomainError),
    /// A module retrieval failed; the whole operation is aborted.
    Module(ModuleStoreError),
    /// Session could not be loaded.
    Store(SessionStoreError),
}

impl std::fmt::Display for DownloadBundleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DownloadBundleError::SessionNotFound(id) => write!(f, "Session not found: {}", id),
            DownloadBundleError::Domain(err) => write!(f, "{}", err),
            DownloadBundleError::Module(err) => write!(f, "{}", err),
            DownloadBundleError::Store(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for DownloadBundleError {}

impl From<DomainError> for DownloadBundleError {
    fn from(err: DomainError) -> Self {
        DownloadBundleError::Domain(err)
    }
}

impl From<ModuleStoreError> for DownloadBundleError {
    fn from(err: ModuleStoreError) -> Self {
        DownloadBundleError::Module(err)
    }
}

impl From<SessionStoreError> for DownloadBundleError {
    fn from(err: SessionStoreError) -> Self {
        DownloadBundleError::Store(err)
    }
}

/// Handler for assembling the bulk-download bundle.
pub struct DownloadBundleHandler {
    session_store: Arc<dyn SessionStore>,
    module_store: Arc<dyn ModuleStore>,
    graph: Arc<DecisionGraph>,
}

impl DownloadBundleHandler {
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

    pub async fn handle(
        &self,
        cmd: DownloadBundleCommand,
    ) -> Result<DownloadBundleResult, DownloadBundleError> {
        // 1. Load the session and require the final view
        let session = self
            .session_store
            .find(cmd.session_id)
            .await?
            .ok_or(DownloadBundleError::SessionNotFound(cmd.session_id))?;

        // A not-applicable view offers no download action.
        if session.recommendations(&self.graph)? == RecommendationView::NotApplicable {
            return Err(DownloadBundleError::Domain(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Nothing to download: no modules were recommended",
            )));
        }

        // 2. Fetch all module texts concurrently, any-fails-all-fails
        let texts = try_join_all(
            session
                .recommended()
                .iter()
                .map(|&number| self.module_store.fetch(number)),
        )
        .await?;

        // 3. Concatenate in recommendation order
        let content = texts.join("\n");

        tracing::info!(
            session_id = %session.id(),
            modules = session.recommended().len(),
            bytes = content.len(),
            "bundle assembled"
        );
        Ok(DownloadBundleResult {
            file_name: BUNDLE_FILE_NAME,
            content,
        })
    }
}
