use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// 單行記錄解析失敗的原因
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Malformed record, expected `<score>:<json>`: {record}")]
    MalformedRecord { record: String },

    #[error("Invalid score: {0}")]
    InvalidScore(#[from] ParseIntError),

    #[error("Invalid JSON payload: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("No string `id` field in record")]
    MissingId,
}

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value `{value}` for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Cannot open data file {}: {source}", .path.display())]
    OpenError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Line {line}: {source}")]
    ScanError {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("Empty input file: {} has no valid records", .path.display())]
    EmptyResultError { path: PathBuf },

    #[error("Serialization error: {0}")]
    RenderError(#[from] serde_json::Error),

    #[error("Cannot write result: {0}")]
    OutputError(#[source] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Io,
    Validation,
    Output,
}

impl ScoreError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScoreError::ConfigError { .. }
            | ScoreError::MissingConfigError { .. }
            | ScoreError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            ScoreError::OpenError { .. } | ScoreError::IoError(_) => ErrorCategory::Io,
            ScoreError::ScanError { .. } | ScoreError::EmptyResultError { .. } => {
                ErrorCategory::Validation
            }
            ScoreError::RenderError(_) | ScoreError::OutputError(_) => ErrorCategory::Output,
        }
    }

    /// 行程結束碼：資料驗證失敗為 2，其餘失敗為 1
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Validation => 2,
            ErrorCategory::Config | ErrorCategory::Io | ErrorCategory::Output => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScoreError::MissingConfigError { field } => {
                format!("-{} command argument is required", field)
            }
            ScoreError::InvalidConfigValueError { field, reason, .. } => {
                format!("-{} command argument is invalid: {}", field, reason)
            }
            ScoreError::OpenError { path, .. } => {
                format!("Could not open data file {}", path.display())
            }
            ScoreError::ScanError { line, .. } => {
                format!("Data file contains an invalid record on line {}", line)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;
