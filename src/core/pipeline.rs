use crate::core::{parser, renderer, selector};
use crate::core::{ConfigProvider, Diagnostics, Pipeline, RecordSet, SelectionResult, Storage};
use crate::domain::model::ParsedLine;
use crate::utils::error::{Result, ScoreError};
use std::borrow::Cow;
use std::io::BufRead;

pub struct ScorePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    diagnostics: Box<dyn Diagnostics>,
}

impl<S: Storage, C: ConfigProvider> ScorePipeline<S, C> {
    pub fn new(storage: S, config: C, diagnostics: Box<dyn Diagnostics>) -> Self {
        Self {
            storage,
            config,
            diagnostics,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ScorePipeline<S, C> {
    fn scan(&self) -> Result<RecordSet> {
        let path = self.config.data_path();
        self.diagnostics.processing(path, self.config.top_n());

        let mut records = RecordSet::new();
        {
            // reader 只存活於此區塊，任何提早返回都會關閉檔案
            let reader = self.storage.open(path)?;
            for (index, bytes) in reader.split(b'\n').enumerate() {
                let bytes = bytes?;
                let line = decode_line(&bytes);
                let line_no = index + 1;

                let parsed = parser::parse_record(&line).map_err(|source| {
                    ScoreError::ScanError {
                        line: line_no,
                        source,
                    }
                })?;

                match parsed {
                    ParsedLine::Record(record) => {
                        self.diagnostics.record(line_no, &record);
                        records.push(record);
                    }
                    ParsedLine::Skip(reason) => self.diagnostics.skipped(line_no, reason),
                }
            }
        }

        if records.is_empty() {
            return Err(ScoreError::EmptyResultError {
                path: path.to_path_buf(),
            });
        }

        Ok(records)
    }

    fn select(&self, records: RecordSet) -> SelectionResult {
        let selection =
            selector::select_top_n(records, self.config.top_n(), self.config.strategy());
        self.diagnostics.selected(&selection);
        selection
    }

    fn render(&self, selection: &SelectionResult) -> Result<Vec<u8>> {
        renderer::render(selection)
    }

    fn diagnostics(&self) -> &dyn Diagnostics {
        self.diagnostics.as_ref()
    }
}

/// 以位元組讀取整行，去掉結尾 '\r'，非 UTF-8 位元組以 U+FFFD 取代。
/// 編碼問題交由解析器判定為資料錯誤，而不是 I/O 錯誤。
fn decode_line(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes)
}
