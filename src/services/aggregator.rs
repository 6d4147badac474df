use std::collections::BTreeMap;
use crate::structs::aggregated_record::{AggregatedGroup, AggregatedRecord, LeafCount};
use crate::structs::aggregation::{Aggregation, DiscardedGroup};
use crate::structs::leaf_key::LeafKey;
use crate::structs::metric_row::MetricRow;
use crate::structs::period_key::PeriodKey;

/// Folds validated rows into one record per period.
///
/// Rows are bucketed by period, then by group name. A group in which any leaf
/// key appears more than once is dropped whole; its rows are reported through
/// [`Aggregation::discarded_groups`] and never merged or overwritten. Periods
/// left without groups produce no record.
///
/// Buckets are ordered maps, so the result does not depend on input order:
/// periods come out by (year, month), groups by name, leaves by the order the
/// kind declares them in.
pub struct Aggregator;

impl Aggregator {
    pub fn aggregate(rows: &[MetricRow]) -> Aggregation {
        let mut buckets: BTreeMap<PeriodKey, BTreeMap<&str, Vec<&MetricRow>>> = BTreeMap::new();

        for row in rows {
            buckets
                .entry(row.period)
                .or_default()
                .entry(row.group.as_str())
                .or_default()
                .push(row);
        }

        let mut aggregation = Aggregation::default();

        for (period, groups) in buckets {
            let mut kept = Vec::new();

            for (name, members) in groups {
                match Self::fold_group(&members) {
                    Ok(entries) => kept.push(AggregatedGroup {
                        name: name.to_string(),
                        entries,
                    }),
                    Err(duplicate_leaf) => {
                        let mut lines: Vec<usize> = members.iter().map(|m| m.line).collect();
                        lines.sort_unstable();

                        log::warn!(
                            "⚠️ Skipping {} for {}: '{}' appears more than once (lines {:?})",
                            name, period, duplicate_leaf, lines
                        );

                        aggregation.discarded_groups.push(DiscardedGroup {
                            period,
                            group: name.to_string(),
                            duplicate_leaf: duplicate_leaf.name.to_string(),
                            lines,
                        });
                    }
                }
            }

            if kept.is_empty() {
                log::debug!("No valid groups left for {}", period);
                continue;
            }

            aggregation.records.push(AggregatedRecord { period, groups: kept });
        }

        aggregation
    }

    /// Returns the group's leaf entries, or the first duplicated leaf key.
    fn fold_group(members: &[&MetricRow]) -> Result<Vec<LeafCount>, LeafKey> {
        let mut by_leaf: BTreeMap<LeafKey, Vec<u32>> = BTreeMap::new();
        for member in members {
            by_leaf.entry(member.leaf).or_default().push(member.count);
        }

        if let Some((leaf, _)) = by_leaf.iter().find(|(_, counts)| counts.len() > 1) {
            return Err(*leaf);
        }

        Ok(by_leaf
            .into_iter()
            .map(|(key, counts)| LeafCount { key, count: counts[0] })
            .collect())
    }
}
