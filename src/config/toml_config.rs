use crate::domain::model::SelectionStrategy;
use crate::utils::error::{Result, ScoreError};
use crate::utils::logger::LogFormat;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional defaults file. Every section and key may be omitted; command
/// line flags take precedence over anything set here.
///
/// ```toml
/// [input]
/// path = "${DATA_DIR}/score_recs.data"
///
/// [selection]
/// n = 10
/// strategy = "sort"
///
/// [diagnostics]
/// enabled = true
/// log_format = "json"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    pub input: InputConfig,
    pub selection: SelectionConfig,
    pub diagnostics: DiagnosticsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectionConfig {
    pub n: Option<i64>,
    pub strategy: Option<SelectionStrategy>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiagnosticsConfig {
    pub enabled: Option<bool>,
    pub log_format: Option<LogFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ScoreError::ConfigError {
            message: format!(
                "Cannot read config file {}: {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ScoreError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ScoreError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_all_defaults() {
        assert_eq!(TomlConfig::from_toml_str("").unwrap(), TomlConfig::default());
    }

    #[test]
    fn test_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[input]
path = "./data/score_recs.data"

[selection]
n = 3
strategy = "sort"

[diagnostics]
enabled = true
log_format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.input.path, Some(PathBuf::from("./data/score_recs.data")));
        assert_eq!(config.selection.n, Some(3));
        assert_eq!(config.selection.strategy, Some(SelectionStrategy::Sort));
        assert_eq!(config.diagnostics.enabled, Some(true));
        assert_eq!(config.diagnostics.log_format, Some(LogFormat::Json));
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("TOP_SCORES_TEST_DATA_DIR", "/srv/scores");
        let config = TomlConfig::from_toml_str(
            r#"
[input]
path = "${TOP_SCORES_TEST_DATA_DIR}/recs.data"
"#,
        )
        .unwrap();
        assert_eq!(config.input.path, Some(PathBuf::from("/srv/scores/recs.data")));

        let config = TomlConfig::from_toml_str(
            r#"
[input]
path = "${TOP_SCORES_TEST_UNSET_VARIABLE}/recs.data"
"#,
        )
        .unwrap();
        assert_eq!(
            config.input.path,
            Some(PathBuf::from("${TOP_SCORES_TEST_UNSET_VARIABLE}/recs.data"))
        );
    }

    #[test]
    fn test_invalid_config_is_config_error() {
        for content in [
            "[selection]\nn = \"five\"",
            "[selection]\nstrategy = \"bogus\"",
            "[output]\nformat = \"csv\"",
            "not toml at all",
        ] {
            let err = TomlConfig::from_toml_str(content).unwrap_err();
            assert!(matches!(err, ScoreError::ConfigError { .. }), "{}", content);
            assert_eq!(err.exit_code(), 1);
        }
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = TomlConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ScoreError::ConfigError { .. }));
    }
}
