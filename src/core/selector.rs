use crate::domain::model::{Record, RecordSet, SelectionResult, SelectionStrategy};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Selects the `n` highest scoring records, descending by score.
///
/// `n` larger than the record count is clamped. Among equal scores the record
/// that appeared first in the input ranks higher, for both strategies.
pub fn select_top_n(
    records: RecordSet,
    n: usize,
    strategy: SelectionStrategy,
) -> SelectionResult {
    match strategy {
        SelectionStrategy::Heap => select_by_heap(records, n),
        SelectionStrategy::Sort => select_by_sort(records, n),
    }
}

/// Record tagged with its position in the input.
struct Ranked {
    seq: usize,
    record: Record,
}

impl Ranked {
    fn key(&self) -> (u64, Reverse<usize>) {
        (self.record.score, Reverse(self.seq))
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

fn select_by_heap(records: RecordSet, n: usize) -> SelectionResult {
    let n = n.min(records.len());
    if n == 0 {
        return Vec::new();
    }

    // 大小為 n 的最小堆積，堆頂是目前入選中排名最低者
    let mut heap: BinaryHeap<Reverse<Ranked>> = BinaryHeap::with_capacity(n);
    for (seq, record) in records.into_iter().enumerate() {
        let candidate = Ranked { seq, record };
        if heap.len() < n {
            heap.push(Reverse(candidate));
        } else if let Some(mut lowest) = heap.peek_mut() {
            if candidate > lowest.0 {
                *lowest = Reverse(candidate);
            }
        }
    }

    let mut selected: Vec<Ranked> = heap.into_iter().map(|Reverse(ranked)| ranked).collect();
    selected.sort_unstable_by(|a, b| b.cmp(a));
    selected.into_iter().map(|ranked| ranked.record).collect()
}

fn select_by_sort(mut records: RecordSet, n: usize) -> SelectionResult {
    // sort_by 為穩定排序，同分者維持輸入順序
    records.sort_by(|a, b| b.score.cmp(&a.score));
    records.truncate(n);
    records
}
