//! Runtime configuration.
//!
//! Read once from the environment (after `.env` is loaded) and passed to the
//! commands explicitly.

use std::path::{Path, PathBuf};

use ksrs_core::{ScoringConfig, ScoringConfigOverride};

use crate::error::{CliError, Result};

pub const LOG_FILTER_VAR: &str = "RUST_LOG";
pub const SCORING_CONFIG_VAR: &str = "KSRS_SCORING_CONFIG";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_filter: String,
    /// JSON file holding a partial scoring configuration.
    pub scoring_config_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            scoring_config_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            log_filter: std::env::var(LOG_FILTER_VAR).unwrap_or_else(|_| "info".into()),
            scoring_config_path: std::env::var_os(SCORING_CONFIG_VAR).map(PathBuf::from),
        }
    }

    /// Default scoring weights merged with the configured override file, if any.
    pub fn scoring_config(&self) -> Result<ScoringConfig> {
        let defaults = ScoringConfig::default();
        match &self.scoring_config_path {
            Some(path) => {
                let overrides = load_override(path)?;
                tracing::debug!(path = %path.display(), "loaded scoring overrides");
                Ok(defaults.merge(&overrides))
            }
            None => Ok(defaults),
        }
    }
}

fn load_override(path: &Path) -> Result<ScoringConfigOverride> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CliError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}
