use crate::domain::model::{Record, RecordSet, SelectionResult, SelectionStrategy, SkipReason};
use crate::utils::error::{Result, ScoreError};
use std::io::BufRead;
use std::path::Path;

/// 資料來源。回傳的 reader 在離開作用域時關閉。
pub trait Storage {
    type Reader: BufRead;

    fn open(&self, path: &Path) -> Result<Self::Reader>;
}

pub trait ConfigProvider {
    fn data_path(&self) -> &Path;
    fn top_n(&self) -> usize;
    fn strategy(&self) -> SelectionStrategy;
}

/// Diagnostic channel injected into the pipeline. Implementations must not
/// influence control flow.
pub trait Diagnostics {
    fn processing(&self, path: &Path, n: usize);
    fn record(&self, line: usize, record: &Record);
    fn skipped(&self, line: usize, reason: SkipReason);
    fn selected(&self, selection: &SelectionResult);
    fn failed(&self, error: &ScoreError);
}

pub trait Pipeline {
    fn scan(&self) -> Result<RecordSet>;
    fn select(&self, records: RecordSet) -> SelectionResult;
    fn render(&self, selection: &SelectionResult) -> Result<Vec<u8>>;
    fn diagnostics(&self) -> &dyn Diagnostics;
}
