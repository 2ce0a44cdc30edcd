//! Local Module Store Adapter - Implementation of ModuleStore.
//!
//! Reads module texts from markdown files in a flat directory:
//!
//! ```text
//! {base_path}/
//! ├── Module0.md
//! ├── Module1.md
//! └── Module2.md
//! ```

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

use crate::domain::graph::module_resource_name;
use crate::ports::{ModuleStore, ModuleStoreError};

/// Local filesystem store for module markdown files.
#[derive(Debug, Clone)]
pub struct LocalModuleStore {
    /// Directory holding the `Module<N>.md` files.
    base_path: PathBuf,
}

impl LocalModuleStore {
    /// Creates a store reading from the given directory.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Returns the full path for a module's resource.
    fn module_path(&self, number: u32) -> PathBuf {
        self.base_path.join(module_resource_name(number))
    }
}

#[async_trait]
impl ModuleStore for LocalModuleStore {
    async fn fetch(&self, number: u32) -> Result<String, ModuleStoreError> {
        let path = self.module_path(number);

        fs::read_to_string(&path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                ModuleStoreError::not_found(number, path.display().to_string())
            }
            _ => ModuleStoreError::io(
                number,
                format!("Failed to read {}: {}", path.display(), e),
            ),
        })
    }
}
