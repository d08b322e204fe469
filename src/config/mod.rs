#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::SelectionStrategy;
use crate::utils::error::{Result, ScoreError};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_path, Validate};
use std::path::{Path, PathBuf};

pub const DEFAULT_TOP_N: i64 = 5;

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub data_path: PathBuf,
    pub top_n: usize,
    pub strategy: SelectionStrategy,
    pub debug: bool,
    pub log_format: LogFormat,
}

impl RunConfig {
    pub fn new(data_path: impl Into<PathBuf>, top_n: usize) -> Self {
        Self {
            data_path: data_path.into(),
            top_n,
            strategy: SelectionStrategy::default(),
            debug: false,
            log_format: LogFormat::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("f", &self.data_path)?;

        if self.top_n < 1 {
            return Err(ScoreError::InvalidConfigValueError {
                field: "n".to_string(),
                value: self.top_n.to_string(),
                reason: "Value must be a positive integer".to_string(),
            });
        }

        Ok(())
    }
}

impl ConfigProvider for RunConfig {
    fn data_path(&self) -> &Path {
        &self.data_path
    }

    fn top_n(&self) -> usize {
        self.top_n
    }

    fn strategy(&self) -> SelectionStrategy {
        self.strategy
    }
}
