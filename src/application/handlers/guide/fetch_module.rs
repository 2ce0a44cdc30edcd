//! FetchModuleHandler - Query handler for a single module download.

use std::sync::Arc;

use crate::domain::graph::module_resource_name;
use crate::ports::{ModuleStore, ModuleStoreError};

/// Query for a single module's text.
#[derive(Debug, Clone)]
pub struct FetchModuleQuery {
    /// The module number to fetch.
    pub number: u32,
}

/// Result of a successful module fetch.
#[derive(Debug)]
pub struct FetchModuleResult {
    /// The resource file name, `Module<N>.md`.
    pub resource: String,
    /// The module's full text.
    pub content: String,
}

/// Error type for fetching a module.
#[derive(Debug)]
pub enum FetchModuleError {
    /// The module's resource could not be retrieved.
    Module(ModuleStoreError),
}

impl std::fmt::Display for FetchModuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchModuleError::Module(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for FetchModuleError {}

impl From<ModuleStoreError> for FetchModuleError {
    fn from(err: ModuleStoreError) -> Self {
        FetchModuleError::Module(err)
    }
}

/// Handler for single-module downloads.
pub struct FetchModuleHandler {
    module_store: Arc<dyn ModuleStore>,
}

impl FetchModuleHandler {
    pub fn new(module_store: Arc<dyn ModuleStore>) -> Self {
        Self { module_store }
    }

    pub async fn handle(
        &self,
        query: FetchModuleQuery,
    ) -> Result<FetchModuleResult, FetchModuleError> {
        let content = self.module_store.fetch(query.number).await?;

        Ok(FetchModuleResult {
            resource: module_resource_name(query.number),
            content,
        })
    }
}
