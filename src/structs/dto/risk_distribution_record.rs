use serde::{Deserialize, Serialize};
use crate::enums::month::Month;
use crate::structs::aggregated_record::AggregatedRecord;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RiskDistributionRecord {
    pub month: Month,
    pub year: u16,
    pub business_units: Vec<BusinessUnitRisks>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessUnitRisks {
    pub bu_name: String,
    pub risks: Vec<RiskLevelCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RiskLevelCount {
    pub risk_level: String,
    pub count: u32,
}

impl From<AggregatedRecord> for RiskDistributionRecord {
    fn from(record: AggregatedRecord) -> Self {
        Self {
            month: record.period.month,
            year: record.period.year,
            business_units: record.groups
                .into_iter()
                .map(|group| BusinessUnitRisks {
                    bu_name: group.name,
                    risks: group.entries
                        .into_iter()
                        .map(|entry| RiskLevelCount {
                            risk_level: entry.key.name.to_string(),
                            count: entry.count,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}
