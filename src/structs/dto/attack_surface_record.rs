use serde::{Deserialize, Serialize};
use crate::enums::month::Month;
use crate::structs::aggregated_record::AggregatedRecord;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttackSurfaceRecord {
    pub month: Month,
    pub year: u16,
    pub business_units: Vec<BusinessUnitAssets>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessUnitAssets {
    pub bu_name: String,
    pub assets: Vec<AssetTypeCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssetTypeCount {
    pub asset_type: String,
    pub count: u32,
}

impl From<AggregatedRecord> for AttackSurfaceRecord {
    fn from(record: AggregatedRecord) -> Self {
        Self {
            month: record.period.month,
            year: record.period.year,
            business_units: record.groups
                .into_iter()
                .map(|group| BusinessUnitAssets {
                    bu_name: group.name,
                    assets: group.entries
                        .into_iter()
                        .map(|entry| AssetTypeCount {
                            asset_type: entry.key.name.to_string(),
                            count: entry.count,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}
