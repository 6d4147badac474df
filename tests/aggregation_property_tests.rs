//! Property tests for grouping and duplicate-group discarding.

use std::collections::{BTreeMap, BTreeSet};
use proptest::prelude::*;
use secdash_cli::enums::month::Month;
use secdash_cli::enums::record_kind::RecordKind;
use secdash_cli::services::aggregator::Aggregator;
use secdash_cli::services::row_validator::RowValidator;
use secdash_cli::structs::metric_row::MetricRow;
use secdash_cli::structs::period_key::PeriodKey;
use secdash_cli::structs::raw_row::RawRow;

const GROUPS: [&str; 3] = ["BU1", "BU2", "BU3"];

fn metric_rows() -> impl Strategy<Value = Vec<MetricRow>> {
    let schema = RecordKind::BuVulnerabilities.schema();
    let row = (0usize..3, 2023u16..2025, 0usize..GROUPS.len(), 0usize..4, 0u32..100);

    prop::collection::vec(row, 0..40).prop_map(move |rows| {
        rows.into_iter()
            .enumerate()
            .filter_map(|(idx, (month, year, group, leaf, count))| {
                Some(MetricRow {
                    line: idx + 2,
                    period: PeriodKey::new(Month::ALL[month], year),
                    group: GROUPS[group].to_string(),
                    leaf: schema.leaf_key(schema.allowed_leaves[leaf])?,
                    count,
                })
            })
            .collect()
    })
}

/// Group sizes and duplicate flags computed without the aggregator.
fn naive_groups(rows: &[MetricRow]) -> BTreeMap<(PeriodKey, String), (usize, bool)> {
    let mut seen: BTreeMap<(PeriodKey, String), Vec<&str>> = BTreeMap::new();
    for row in rows {
        seen.entry((row.period, row.group.clone())).or_default().push(row.leaf.name);
    }

    seen.into_iter()
        .map(|(key, leaves)| {
            let distinct: BTreeSet<_> = leaves.iter().collect();
            let duplicated = distinct.len() != leaves.len();
            (key, (leaves.len(), duplicated))
        })
        .collect()
}

proptest! {
    #[test]
    fn one_record_per_period_with_a_surviving_group(rows in metric_rows()) {
        let aggregation = Aggregator::aggregate(&rows);
        let expected: BTreeSet<PeriodKey> = naive_groups(&rows)
            .into_iter()
            .filter(|(_, (_, duplicated))| !duplicated)
            .map(|((period, _), _)| period)
            .collect();

        let periods: Vec<PeriodKey> = aggregation.records.iter().map(|r| r.period).collect();
        prop_assert_eq!(periods, expected.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn skipped_rows_match_discarded_group_sizes(rows in metric_rows()) {
        let aggregation = Aggregator::aggregate(&rows);
        let expected: usize = naive_groups(&rows)
            .values()
            .filter(|(_, duplicated)| *duplicated)
            .map(|(size, _)| size)
            .sum();

        prop_assert_eq!(aggregation.discarded_rows(), expected);

        let kept: usize = aggregation.records.iter().map(|r| r.leaf_count()).sum();
        prop_assert_eq!(kept + aggregation.discarded_rows(), rows.len());
    }

    #[test]
    fn surviving_groups_never_repeat_a_leaf(rows in metric_rows()) {
        for record in Aggregator::aggregate(&rows).records {
            for group in &record.groups {
                prop_assert!(!group.entries.is_empty());
                prop_assert!(group.entries.windows(2).all(|pair| pair[0].key < pair[1].key));
            }
        }
    }

    #[test]
    fn result_does_not_depend_on_row_order(
        (rows, shuffled) in metric_rows().prop_flat_map(|rows| {
            let shuffled = Just(rows.clone()).prop_shuffle();
            (Just(rows), shuffled)
        })
    ) {
        let original = Aggregator::aggregate(&rows);
        let reordered = Aggregator::aggregate(&shuffled);

        prop_assert_eq!(original.records, reordered.records);
        prop_assert_eq!(original.discarded_groups, reordered.discarded_groups);
    }

    #[test]
    fn validation_never_panics_on_arbitrary_text(
        month in ".{0,12}",
        year in ".{0,6}",
        leaf in ".{0,10}",
        count in ".{0,8}",
    ) {
        let kind = RecordKind::RiskDistribution;
        let validator = RowValidator::with_max_year(kind.schema(), 2025);
        let row = RawRow::new(2)
            .with_field("month", &month)
            .with_field("year", &year)
            .with_field("buName", "BU1")
            .with_field("riskLevel", &leaf)
            .with_field("count", &count);

        if let Ok(metric) = validator.validate(&row) {
            prop_assert!((2000..=2025).contains(&metric.period.year));
            prop_assert_eq!(metric.group, "BU1");
        }
    }
}
