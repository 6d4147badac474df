use serde::{Deserialize, Serialize};
use crate::enums::month::Month;
use crate::structs::aggregated_record::AggregatedRecord;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BuVulnerabilityRecord {
    pub month: Month,
    pub year: u16,
    pub business_units: Vec<BusinessUnitSeverities>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessUnitSeverities {
    pub bu_name: String,
    pub severities: Vec<SeverityCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeverityCount {
    pub severity: String,
    pub count: u32,
}

impl From<AggregatedRecord> for BuVulnerabilityRecord {
    fn from(record: AggregatedRecord) -> Self {
        Self {
            month: record.period.month,
            year: record.period.year,
            business_units: record.groups
                .into_iter()
                .map(|group| BusinessUnitSeverities {
                    bu_name: group.name,
                    severities: group.entries
                        .into_iter()
                        .map(|entry| SeverityCount {
                            severity: entry.key.name.to_string(),
                            count: entry.count,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}
