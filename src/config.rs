use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::norms::NormMode;

pub const DEFAULT_SUFFIX: &str = "_norm";
pub const DEFAULT_TABLE_NAME: &str = "norm";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Parameters of a batch normalization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormParams {
    pub mode: NormMode,
    /// Appended to the real-score vector name.
    pub suffix: String,
    pub table_name: String,
    /// Normalize rows on the rayon pool.
    pub parallel: bool,
}

impl Default for NormParams {
    fn default() -> Self {
        Self {
            mode: NormMode::default(),
            suffix: DEFAULT_SUFFIX.to_string(),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            parallel: false,
        }
    }
}

impl NormParams {
    pub fn with_mode(mode: NormMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let params: NormParams = serde_json::from_str(text)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.suffix.is_empty() {
            return Err(ConfigError::InvalidArgument(
                "suffix cannot be empty".to_string(),
            ));
        }
        if self.table_name.trim().is_empty() {
            return Err(ConfigError::InvalidArgument(
                "table_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
