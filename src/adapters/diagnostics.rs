use crate::core::{Diagnostics, Record, SelectionResult};
use crate::domain::model::SkipReason;
use crate::utils::error::ScoreError;
use std::path::Path;

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn processing(&self, _path: &Path, _n: usize) {}

    fn record(&self, _line: usize, _record: &Record) {}

    fn skipped(&self, _line: usize, _reason: SkipReason) {}

    fn selected(&self, _selection: &SelectionResult) {}

    fn failed(&self, _error: &ScoreError) {}
}

/// Forwards diagnostics to `tracing`. Output goes wherever the subscriber
/// installed by `utils::logger` writes (stderr).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn processing(&self, path: &Path, n: usize) {
        tracing::info!("Processing data file: {}", path.display());
        tracing::debug!("n: {}", n);
    }

    fn record(&self, line: usize, record: &Record) {
        tracing::debug!("line {} score: {} id: {}", line, record.score, record.id);
    }

    fn skipped(&self, line: usize, reason: SkipReason) {
        match reason {
            SkipReason::Blank => tracing::trace!("line {} is blank, skipped", line),
            SkipReason::ZeroScore => tracing::debug!("line {} has score 0, skipped", line),
        }
    }

    fn selected(&self, selection: &SelectionResult) {
        tracing::info!("✅ Selected {} records", selection.len());
    }

    fn failed(&self, error: &ScoreError) {
        tracing::error!(
            "❌ Processing failed: {} (Category: {:?}, exit code {})",
            error,
            error.category(),
            error.exit_code()
        );
        tracing::error!("💡 {}", error.user_friendly_message());
    }
}
