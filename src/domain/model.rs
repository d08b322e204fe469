use serde::{Deserialize, Serialize};

/// 單筆已驗證的分數記錄。欄位順序即輸出 JSON 的欄位順序。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub score: u64,
    pub id: String,
}

impl Record {
    pub fn new(score: u64, id: impl Into<String>) -> Self {
        Self {
            score,
            id: id.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Blank,
    ZeroScore,
}

/// Outcome of parsing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Record(Record),
    Skip(SkipReason),
}

/// Valid records in encounter order.
pub type RecordSet = Vec<Record>;

/// Top-N records, descending by score.
pub type SelectionResult = Vec<Record>;

/// Top-N 選取演算法。兩者在同分時皆以先出現者優先。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionStrategy {
    /// Bounded min-heap of size n.
    #[default]
    Heap,
    /// Stable full sort, then truncate.
    Sort,
}

impl std::fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionStrategy::Heap => write!(f, "heap"),
            SelectionStrategy::Sort => write!(f, "sort"),
        }
    }
}

impl std::str::FromStr for SelectionStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heap" => Ok(SelectionStrategy::Heap),
            "sort" => Ok(SelectionStrategy::Sort),
            other => Err(format!(
                "Unsupported selection strategy: {}. Valid strategies: heap, sort",
                other
            )),
        }
    }
}
