use serde::Serialize;
use crate::structs::aggregated_record::AggregatedRecord;
use crate::structs::period_key::PeriodKey;

/// A nested group dropped because two of its rows named the same leaf key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscardedGroup {
    pub period: PeriodKey,
    pub group: String,
    pub duplicate_leaf: String,
    pub lines: Vec<usize>,
}

impl DiscardedGroup {
    pub fn row_count(&self) -> usize {
        self.lines.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub records: Vec<AggregatedRecord>,
    pub discarded_groups: Vec<DiscardedGroup>,
}

impl Aggregation {
    pub fn discarded_rows(&self) -> usize {
        self.discarded_groups.iter().map(DiscardedGroup::row_count).sum()
    }
}
