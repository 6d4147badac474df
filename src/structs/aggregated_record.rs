use crate::structs::leaf_key::LeafKey;
use crate::structs::period_key::PeriodKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafCount {
    pub key: LeafKey,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedGroup {
    pub name: String,
    pub entries: Vec<LeafCount>,
}

/// One period with its surviving nested groups, ready to become a DTO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedRecord {
    pub period: PeriodKey,
    pub groups: Vec<AggregatedGroup>,
}

impl AggregatedRecord {
    pub fn leaf_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }
}
