use serde::Serialize;
use crate::enums::record_kind::RecordKind;
use crate::structs::aggregation::DiscardedGroup;
use crate::structs::rejected_row::RejectedRow;
use crate::structs::submission_summary::SubmissionSummary;

/// Everything an import did, for display and for `--report`.
#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub kind: RecordKind,
    pub endpoint: String,
    pub total_rows: usize,
    pub valid_rows: usize,
    pub rejected_rows: Vec<RejectedRow>,
    pub discarded_groups: Vec<DiscardedGroup>,
    pub records_built: usize,
    pub submission: Option<SubmissionSummary>,
}

impl ImportReport {
    pub fn new(kind: RecordKind, endpoint: &str) -> Self {
        Self {
            kind,
            endpoint: endpoint.to_string(),
            total_rows: 0,
            valid_rows: 0,
            rejected_rows: Vec::new(),
            discarded_groups: Vec::new(),
            records_built: 0,
            submission: None,
        }
    }

    pub fn discarded_rows(&self) -> usize {
        self.discarded_groups.iter().map(DiscardedGroup::row_count).sum()
    }

    /// Rows that did not reach any record: rejected ones plus rows of
    /// discarded groups.
    pub fn skipped_rows(&self) -> usize {
        self.rejected_rows.len() + self.discarded_rows()
    }

    pub fn print_summary(&self) {
        println!("\n📊 Import Summary ({})", self.kind);
        println!("═══════════════════════════════════════");
        println!("   Rows read: {}", self.total_rows);
        println!("   Valid rows: {}", self.valid_rows);
        println!("   Rejected rows: {}", self.rejected_rows.len());
        println!("   Discarded groups: {} ({} rows)", self.discarded_groups.len(), self.discarded_rows());
        println!("   Records built: {}", self.records_built);

        for rejected in &self.rejected_rows {
            println!("   ❌ line {}: {}", rejected.line, rejected.rejection);
        }

        for group in &self.discarded_groups {
            println!(
                "   ⚠️ {} / {}: duplicate '{}' on lines {:?}",
                group.period, group.group, group.duplicate_leaf, group.lines
            );
        }

        match &self.submission {
            Some(summary) => {
                println!("\n📨 Submitted to {}", self.endpoint);
                println!("   Created {}, {} failed", summary.created, summary.failed);
            }
            None => println!("\n🧪 Dry run - nothing was submitted"),
        }

        println!("═══════════════════════════════════════\n");
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
