//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Storage configuration: where module files and the optional graph
/// definition live.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the `Module<N>.md` files
    #[serde(default = "default_modules_dir")]
    pub modules_dir: PathBuf,

    /// Optional YAML decision-graph definition; the built-in captive
    /// portal graph is used when absent
    pub graph_file: Option<PathBuf>,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.modules_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyModulesDir);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            modules_dir: default_modules_dir(),
            graph_file: None,
        }
    }
}

fn default_modules_dir() -> PathBuf {
    PathBuf::from("./modules")
}
