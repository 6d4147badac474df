use crate::structs::leaf_key::LeafKey;
use crate::structs::period_key::PeriodKey;

/// A CSV row that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRow {
    pub line: usize,
    pub period: PeriodKey,
    pub group: String,
    pub leaf: LeafKey,
    pub count: u32,
}
