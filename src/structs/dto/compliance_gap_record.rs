use serde::{Deserialize, Serialize};
use crate::enums::month::Month;
use crate::structs::aggregated_record::AggregatedRecord;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComplianceGapRecord {
    pub month: Month,
    pub year: u16,
    pub frameworks: Vec<FrameworkStatuses>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FrameworkStatuses {
    pub framework: String,
    pub statuses: Vec<StatusCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusCount {
    pub status: String,
    pub count: u32,
}

impl From<AggregatedRecord> for ComplianceGapRecord {
    fn from(record: AggregatedRecord) -> Self {
        Self {
            month: record.period.month,
            year: record.period.year,
            frameworks: record.groups
                .into_iter()
                .map(|group| FrameworkStatuses {
                    framework: group.name,
                    statuses: group.entries
                        .into_iter()
                        .map(|entry| StatusCount {
                            status: entry.key.name.to_string(),
                            count: entry.count,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}
