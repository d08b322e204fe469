use crate::adapters::diagnostics::NullDiagnostics;
use crate::adapters::storage::LocalStorage;
use crate::config::RunConfig;
use crate::core::pipeline::ScorePipeline;
use crate::core::{renderer, Pipeline};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::io::Write;
use std::path::PathBuf;

pub struct TopScoresEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> TopScoresEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs scan, select and render, writing the JSON result to `out`.
    ///
    /// Nothing is written to `out` unless every stage before it succeeded.
    /// Returns the number of records emitted.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<usize> {
        let records = self.pipeline.scan()?;
        let selection = self.pipeline.select(records);
        let rendered = self.pipeline.render(&selection)?;
        renderer::write_output(out, &rendered)?;
        Ok(selection.len())
    }

    /// Like [`run`](Self::run), reporting failures to the diagnostic channel
    /// and mapping them to the process exit code.
    pub fn run_to_exit_code<W: Write>(&self, out: &mut W) -> i32 {
        match self.run(out) {
            Ok(_) => 0,
            Err(e) => {
                self.pipeline.diagnostics().failed(&e);
                e.exit_code()
            }
        }
    }
}

/// 以預設設定（heap 選取、關閉診斷輸出）處理單一資料檔，回傳結束碼
pub fn highest_n_scores<W: Write>(path: impl Into<PathBuf>, n: usize, out: &mut W) -> i32 {
    let config = RunConfig::new(path, n);
    if let Err(e) = config.validate() {
        return e.exit_code();
    }

    let pipeline = ScorePipeline::new(LocalStorage, config, Box::new(NullDiagnostics));
    TopScoresEngine::new(pipeline).run_to_exit_code(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::MemoryStorage;
    use crate::utils::error::ScoreError;

    type MemoryEngine = TopScoresEngine<ScorePipeline<MemoryStorage, RunConfig>>;

    fn engine_for(content: &str, n: usize) -> MemoryEngine {
        let storage = MemoryStorage::new().with_file("scores.data", content);
        let config = RunConfig::new("scores.data", n);
        TopScoresEngine::new(ScorePipeline::new(storage, config, Box::new(NullDiagnostics)))
    }

    #[test]
    fn test_run_writes_json_with_trailing_newline() {
        let engine = engine_for("10:{\"id\":\"a\"}\n5:{\"id\":\"b\"}\n", 1);
        let mut out = Vec::new();
        assert_eq!(engine.run(&mut out).unwrap(), 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[\n  {\n    \"score\": 10,\n    \"id\": \"a\"\n  }\n]\n"
        );
    }

    #[test]
    fn test_failure_leaves_output_untouched() {
        let engine = engine_for("10:{\"id\":\"a\"}\n10:{\"name\":\"x\"}\n", 5);
        let mut out = Vec::new();
        let err = engine.run(&mut out).unwrap_err();
        assert!(matches!(err, ScoreError::ScanError { line: 2, .. }));
        assert!(out.is_empty());

        let mut out = Vec::new();
        assert_eq!(engine.run_to_exit_code(&mut out), 2);
        assert!(out.is_empty());
    }

    #[test]
    fn test_exit_codes() {
        let mut out = Vec::new();
        assert_eq!(engine_for("", 5).run_to_exit_code(&mut out), 2);
        assert_eq!(engine_for("3:{\"id\":\"a\"}", 5).run_to_exit_code(&mut out), 0);

        let missing = TopScoresEngine::new(ScorePipeline::new(
            MemoryStorage::new(),
            RunConfig::new("nowhere.data", 5),
            Box::new(NullDiagnostics),
        ));
        assert_eq!(missing.run_to_exit_code(&mut out), 1);
    }

    #[test]
    fn test_highest_n_scores_rejects_zero_n_before_io() {
        let mut out = Vec::new();
        assert_eq!(highest_n_scores("./data/NoSuchFile", 0, &mut out), 1);
        assert!(out.is_empty());
    }
}
