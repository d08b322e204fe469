use crate::config::toml_config::TomlConfig;
use crate::config::{RunConfig, DEFAULT_TOP_N};
use crate::domain::model::SelectionStrategy;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_positive_number, validate_required_field, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "top-scores")]
#[command(about = "Print the N highest scoring records of a data file as JSON")]
pub struct CliConfig {
    /// Data file name
    #[arg(short = 'f')]
    pub file: Option<PathBuf>,

    /// The N highest scores (default 5)
    #[arg(short = 'n', allow_negative_numbers = true)]
    pub n: Option<i64>,

    /// Turn debug output on (written to stderr)
    #[arg(short = 'd')]
    pub debug: bool,

    /// TOML file with default settings
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Top-N selection algorithm: heap or sort
    #[arg(long)]
    pub strategy: Option<SelectionStrategy>,

    /// Debug log format: compact or json
    #[arg(long)]
    pub log_format: Option<LogFormat>,
}

impl CliConfig {
    /// 合併命令列與 TOML 設定（命令列優先）並驗證，不會開啟資料檔
    pub fn resolve(&self) -> Result<RunConfig> {
        let file_config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        let data_path = self.file.clone().or(file_config.input.path);
        let data_path = validate_required_field("f", &data_path)?.clone();

        let n = self.n.or(file_config.selection.n).unwrap_or(DEFAULT_TOP_N);
        let top_n = validate_positive_number("n", n, 1)?;

        let config = RunConfig {
            data_path,
            top_n,
            strategy: self
                .strategy
                .or(file_config.selection.strategy)
                .unwrap_or_default(),
            debug: self.debug || file_config.diagnostics.enabled.unwrap_or(false),
            log_format: self
                .log_format
                .or(file_config.diagnostics.log_format)
                .unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ScoreError;
    use std::io::Write;

    fn parse(args: &[&str]) -> CliConfig {
        let mut argv = vec!["top-scores"];
        argv.extend_from_slice(args);
        CliConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["-f", "scores.data"]).resolve().unwrap();
        assert_eq!(config, RunConfig::new("scores.data", 5));
    }

    #[test]
    fn test_all_flags() {
        let config = parse(&[
            "-f",
            "scores.data",
            "-n",
            "3",
            "-d",
            "--strategy",
            "sort",
            "--log-format",
            "json",
        ])
        .resolve()
        .unwrap();

        assert_eq!(config.top_n, 3);
        assert!(config.debug);
        assert_eq!(config.strategy, SelectionStrategy::Sort);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_missing_file_flag() {
        let err = parse(&["-n", "3"]).resolve().unwrap_err();
        assert!(matches!(err, ScoreError::MissingConfigError { ref field } if field == "f"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_non_positive_n_rejected() {
        for n in ["0", "-1"] {
            let err = parse(&["-f", "./data/NoSuchFile", "-n", n]).resolve().unwrap_err();
            assert!(
                matches!(err, ScoreError::InvalidConfigValueError { ref field, .. } if field == "n"),
                "n = {}",
                n
            );
        }
    }

    #[test]
    fn test_unknown_strategy_rejected_by_parser() {
        let result = CliConfig::try_parse_from(["top-scores", "-f", "x", "--strategy", "bogus"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_override_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[input]\npath = \"from_toml.data\"\n\n[selection]\nn = 9\nstrategy = \"sort\"\n\n[diagnostics]\nenabled = true"
        )
        .unwrap();
        let config_path = file.path().to_str().unwrap();

        let from_toml = parse(&["-c", config_path]).resolve().unwrap();
        assert_eq!(from_toml.data_path, PathBuf::from("from_toml.data"));
        assert_eq!(from_toml.top_n, 9);
        assert_eq!(from_toml.strategy, SelectionStrategy::Sort);
        assert!(from_toml.debug);

        let overridden = parse(&["-c", config_path, "-f", "cli.data", "-n", "2", "--strategy", "heap"])
            .resolve()
            .unwrap();
        assert_eq!(overridden.data_path, PathBuf::from("cli.data"));
        assert_eq!(overridden.top_n, 2);
        assert_eq!(overridden.strategy, SelectionStrategy::Heap);
    }
}
