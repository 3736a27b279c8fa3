//! Batch orchestrator configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ClassifyConfig;
use crate::errors::ConfigError;

/// Configuration for a batch classification run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub classify: ClassifyConfig,
    /// Reclassify every file regardless of fingerprint match.
    pub force: bool,
    /// Bounded timeout for each embedding call.
    pub embed_timeout_ms: u64,
    /// Worker threads for the file fan-out. 0 = library default.
    pub threads: usize,
    /// Where to write the run manifest. None = caller handles it.
    pub manifest_path: Option<PathBuf>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            classify: ClassifyConfig::default(),
            force: false,
            embed_timeout_ms: 30_000,
            threads: 0,
            manifest_path: None,
        }
    }
}

impl BatchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.classify.validate()?;
        if self.embed_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}
