//! Module Store Port - Retrieval of module texts.
//!
//! Each learning module is backed by a textual resource named
//! `Module<N>.md`. The domain depends on this trait; adapters (like
//! `LocalModuleStore`) provide the implementation.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while retrieving a module's text.
#[derive(Debug, Clone, Error)]
pub enum ModuleStoreError {
    /// The module's resource does not exist.
    #[error("Module {number} not found: {resource}")]
    NotFound { number: u32, resource: String },

    /// IO error during retrieval.
    #[error("IO error retrieving module {number}: {message}")]
    Io { number: u32, message: String },
}

impl ModuleStoreError {
    /// Creates a not found error.
    pub fn not_found(number: u32, resource: impl Into<String>) -> Self {
        Self::NotFound {
            number,
            resource: resource.into(),
        }
    }

    /// Creates an IO error.
    pub fn io(number: u32, message: impl Into<String>) -> Self {
        Self::Io {
            number,
            message: message.into(),
        }
    }
}

/// Port for retrieving module texts by module number.
///
/// # Contract
///
/// Implementations must return the full text of the module's resource or
/// fail; there is no partial read and no retry. Concurrent fetches of
/// distinct modules must be safe.
#[async_trait]
pub trait ModuleStore: Send + Sync {
    /// Retrieves the text of the module with the given number.
    ///
    /// # Errors
    ///
    /// Returns `ModuleStoreError::NotFound` if the resource doesn't exist.
    async fn fetch(&self, number: u32) -> Result<String, ModuleStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_displays_resource() {
        let err = ModuleStoreError::not_found(3, "Module3.md");
        assert!(err.to_string().contains("Module3.md"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn module_store_is_object_safe() {
        fn check<T: ModuleStore + ?Sized>() {}
        check::<dyn ModuleStore>();
    }
}
