use std::fmt;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::errors::SecdashResult;
use crate::structs::aggregated_record::AggregatedRecord;
use crate::structs::dto::attack_surface_record::AttackSurfaceRecord;
use crate::structs::dto::bu_vulnerability_record::BuVulnerabilityRecord;
use crate::structs::dto::compliance_gap_record::ComplianceGapRecord;
use crate::structs::dto::risk_distribution_record::RiskDistributionRecord;
use crate::structs::import_schema::ImportSchema;

const BU_VULNERABILITIES: ImportSchema = ImportSchema {
    group_field: "buName",
    leaf_field: "severity",
    allowed_leaves: &["Critical", "High", "Medium", "Low"],
    default_endpoint: "/bu-vulnerabilities",
};

const RISK_DISTRIBUTION: ImportSchema = ImportSchema {
    group_field: "buName",
    leaf_field: "riskLevel",
    allowed_leaves: &["High", "Medium", "Low"],
    default_endpoint: "/risk-distributions",
};

const COMPLIANCE_GAPS: ImportSchema = ImportSchema {
    group_field: "framework",
    leaf_field: "status",
    allowed_leaves: &["Compliant", "PartiallyCompliant", "NonCompliant", "NotAssessed"],
    default_endpoint: "/compliance-gaps",
};

const ATTACK_SURFACE: ImportSchema = ImportSchema {
    group_field: "buName",
    leaf_field: "assetType",
    allowed_leaves: &["Domain", "Subdomain", "IpAddress", "Application", "CloudAsset", "Certificate"],
    default_endpoint: "/attack-surface",
};

/// The bulk-importable record types of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    BuVulnerabilities,
    RiskDistribution,
    ComplianceGaps,
    AttackSurface,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        RecordKind::BuVulnerabilities,
        RecordKind::RiskDistribution,
        RecordKind::ComplianceGaps,
        RecordKind::AttackSurface,
    ];

    pub fn schema(&self) -> &'static ImportSchema {
        match self {
            RecordKind::BuVulnerabilities => &BU_VULNERABILITIES,
            RecordKind::RiskDistribution => &RISK_DISTRIBUTION,
            RecordKind::ComplianceGaps => &COMPLIANCE_GAPS,
            RecordKind::AttackSurface => &ATTACK_SURFACE,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            RecordKind::BuVulnerabilities => "bu-vulnerabilities",
            RecordKind::RiskDistribution => "risk-distribution",
            RecordKind::ComplianceGaps => "compliance-gaps",
            RecordKind::AttackSurface => "attack-surface",
        }
    }

    pub fn from_slug(slug: &str) -> Option<RecordKind> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }

    pub fn description(&self) -> &'static str {
        match self {
            RecordKind::BuVulnerabilities => "Monthly vulnerability counts per business unit and severity",
            RecordKind::RiskDistribution => "Monthly risk distribution per business unit",
            RecordKind::ComplianceGaps => "Monthly control status counts per compliance framework",
            RecordKind::AttackSurface => "Monthly exposed asset counts per business unit",
        }
    }

    /// An example row matching `schema().headers()`, used by `template`.
    pub fn sample_row(&self) -> [&'static str; 5] {
        match self {
            RecordKind::BuVulnerabilities => ["Jan", "2024", "Retail Banking", "Critical", "5"],
            RecordKind::RiskDistribution => ["Jan", "2024", "Retail Banking", "High", "12"],
            RecordKind::ComplianceGaps => ["Jan", "2024", "ISO 27001", "NonCompliant", "3"],
            RecordKind::AttackSurface => ["Jan", "2024", "Retail Banking", "Domain", "42"],
        }
    }

    /// Shapes an aggregated period into the JSON body the API expects for this kind.
    pub fn build_payload(&self, record: AggregatedRecord) -> SecdashResult<Value> {
        let payload = match self {
            RecordKind::BuVulnerabilities => serde_json::to_value(BuVulnerabilityRecord::from(record))?,
            RecordKind::RiskDistribution => serde_json::to_value(RiskDistributionRecord::from(record))?,
            RecordKind::ComplianceGaps => serde_json::to_value(ComplianceGapRecord::from(record))?,
            RecordKind::AttackSurface => serde_json::to_value(AttackSurfaceRecord::from(record))?,
        };
        Ok(payload)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::enums::month::Month;
    use crate::structs::aggregated_record::{AggregatedGroup, LeafCount};
    use crate::structs::period_key::PeriodKey;

    fn record(kind: RecordKind, group: &str, leaf: &str, count: u32) -> AggregatedRecord {
        AggregatedRecord {
            period: PeriodKey::new(Month::Mar, 2024),
            groups: vec![AggregatedGroup {
                name: group.to_string(),
                entries: vec![LeafCount {
                    key: kind.schema().leaf_key(leaf).unwrap(),
                    count,
                }],
            }],
        }
    }

    #[test]
    fn slugs_round_trip_through_clap_names() {
        for kind in RecordKind::ALL {
            assert_eq!(RecordKind::from_slug(kind.slug()), Some(kind));
            let clap_name = kind.to_possible_value().unwrap();
            assert_eq!(clap_name.get_name(), kind.slug());
        }
        assert_eq!(RecordKind::from_slug("unknown"), None);
    }

    #[test]
    fn sample_rows_use_allowed_leaf_values() {
        for kind in RecordKind::ALL {
            let sample = kind.sample_row();
            assert!(kind.schema().leaf_key(sample[3]).is_some(), "{} sample leaf", kind);
        }
    }

    #[test]
    fn bu_vulnerability_payload_shape() {
        let kind = RecordKind::BuVulnerabilities;
        let payload = kind.build_payload(record(kind, "BU2", "high", 2)).unwrap();
        assert_eq!(
            payload,
            json!({
                "month": "Mar",
                "year": 2024,
                "businessUnits": [{ "buName": "BU2", "severities": [{ "severity": "High", "count": 2 }] }]
            })
        );
    }

    #[test]
    fn compliance_gap_payload_shape() {
        let kind = RecordKind::ComplianceGaps;
        let payload = kind.build_payload(record(kind, "PCI DSS", "noncompliant", 4)).unwrap();
        assert_eq!(
            payload,
            json!({
                "month": "Mar",
                "year": 2024,
                "frameworks": [{ "framework": "PCI DSS", "statuses": [{ "status": "NonCompliant", "count": 4 }] }]
            })
        );
    }

    #[test]
    fn risk_and_attack_surface_payloads_use_camel_case_leaf_keys() {
        let risk = RecordKind::RiskDistribution
            .build_payload(record(RecordKind::RiskDistribution, "BU1", "Low", 1))
            .unwrap();
        assert_eq!(risk["businessUnits"][0]["risks"][0]["riskLevel"], "Low");

        let surface = RecordKind::AttackSurface
            .build_payload(record(RecordKind::AttackSurface, "BU1", "ipaddress", 9))
            .unwrap();
        assert_eq!(surface["businessUnits"][0]["assets"][0]["assetType"], "IpAddress");
        assert_eq!(surface["businessUnits"][0]["assets"][0]["count"], 9);
    }
}
