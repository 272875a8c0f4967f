//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::DocbotConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from `docbot.toml` under `root` (if any) and environment.
    pub fn load(root: &Path) -> Result<DocbotConfig, ConfigError> {
        MergeService::load(root)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<DocbotConfig, ConfigError> {
        MergeService::load_from_file(path)
    }
}
