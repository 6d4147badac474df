use std::io::Read;
use std::path::Path;
use serde_json::Value;
use crate::enums::record_kind::RecordKind;
use crate::errors::{SecdashError, SecdashResult};
use crate::services::aggregator::Aggregator;
use crate::services::csv_reader::{CsvContents, CsvReader};
use crate::services::row_validator::RowValidator;
use crate::structs::import_report::ImportReport;
use crate::structs::rejected_row::RejectedRow;

/// Validated, grouped payloads waiting to be submitted.
#[derive(Debug)]
pub struct PreparedImport {
    pub report: ImportReport,
    pub payloads: Vec<Value>,
}

impl PreparedImport {
    /// Fails with `EmptyImport` when no record survived validation and
    /// duplicate filtering.
    pub fn ensure_records(&self) -> SecdashResult<()> {
        if !self.payloads.is_empty() {
            return Ok(());
        }

        Err(SecdashError::EmptyImport {
            kind: self.report.kind.to_string(),
            rejected_rows: self.report.rejected_rows.len(),
            discarded_groups: self.report.discarded_groups.len(),
        })
    }
}

/// CSV file to API payloads, without touching the network.
pub struct ImportPipeline {
    kind: RecordKind,
    endpoint: String,
    reader: CsvReader,
    validator: RowValidator,
}

impl ImportPipeline {
    pub fn new(kind: RecordKind, endpoint: &str, delimiter: char) -> SecdashResult<Self> {
        Self::with_validator(kind, endpoint, delimiter, RowValidator::new(kind.schema()))
    }

    pub fn with_validator(kind: RecordKind, endpoint: &str, delimiter: char, validator: RowValidator) -> SecdashResult<Self> {
        let delimiter = u8::try_from(delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| SecdashError::validation_error(
                "import.delimiter",
                &delimiter.to_string(),
                "single ASCII character",
                Some("Use ',' or ';'"),
            ))?;

        Ok(Self {
            kind,
            endpoint: endpoint.to_string(),
            reader: CsvReader::new(kind.schema(), delimiter),
            validator,
        })
    }

    /// Like [`ImportPipeline::inspect_path`], but an import without records
    /// is an error.
    pub fn prepare_path(&self, path: &Path) -> SecdashResult<PreparedImport> {
        let prepared = self.inspect_path(path)?;
        prepared.ensure_records()?;
        Ok(prepared)
    }

    pub fn prepare<R: Read>(&self, input: R) -> SecdashResult<PreparedImport> {
        let prepared = self.inspect(input)?;
        prepared.ensure_records()?;
        Ok(prepared)
    }

    /// Runs the whole pipeline and keeps the report even when every row was
    /// skipped. Only unreadable input fails here.
    pub fn inspect_path(&self, path: &Path) -> SecdashResult<PreparedImport> {
        let contents = self.reader.read_path(path)?;
        self.build(contents)
    }

    pub fn inspect<R: Read>(&self, input: R) -> SecdashResult<PreparedImport> {
        let contents = self.reader.read(input)?;
        self.build(contents)
    }

    fn build(&self, contents: CsvContents) -> SecdashResult<PreparedImport> {
        let mut report = ImportReport::new(self.kind, &self.endpoint);
        report.total_rows = contents.rows.len() + contents.malformed.len();

        report.rejected_rows.extend(contents.malformed.into_iter().map(|m| RejectedRow {
            line: m.line,
            rejection: m.rejection,
        }));

        let mut valid = Vec::with_capacity(contents.rows.len());
        for row in &contents.rows {
            match self.validator.validate(row) {
                Ok(metric) => valid.push(metric),
                Err(rejection) => {
                    log::warn!("⚠️ Line {} rejected: {}", row.line, rejection);
                    report.rejected_rows.push(RejectedRow { line: row.line, rejection });
                }
            }
        }
        report.rejected_rows.sort_by_key(|r| r.line);
        report.valid_rows = valid.len();

        let aggregation = Aggregator::aggregate(&valid);
        report.discarded_groups = aggregation.discarded_groups;
        report.records_built = aggregation.records.len();

        let payloads = aggregation.records
            .into_iter()
            .map(|record| self.kind.build_payload(record))
            .collect::<SecdashResult<Vec<_>>>()?;

        if payloads.is_empty() {
            log::warn!("⚠️ No {} records left from {} rows", self.kind, report.total_rows);
        } else {
            log::info!(
                "✅ Built {} {} records from {} rows ({} skipped)",
                payloads.len(), self.kind, report.total_rows, report.skipped_rows()
            );
        }

        Ok(PreparedImport { report, payloads })
    }
}
