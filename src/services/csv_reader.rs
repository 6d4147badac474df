use std::io::Read;
use std::path::Path;
use csv::{ReaderBuilder, StringRecord, Trim};
use crate::enums::row_rejection::RowRejection;
use crate::errors::{SecdashError, SecdashResult};
use crate::structs::import_schema::ImportSchema;
use crate::structs::raw_row::RawRow;

/// A record the CSV library could not decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRow {
    pub line: usize,
    pub rejection: RowRejection,
}

#[derive(Debug, Default)]
pub struct CsvContents {
    pub rows: Vec<RawRow>,
    pub malformed: Vec<MalformedRow>,
}

pub struct CsvReader {
    schema: &'static ImportSchema,
    delimiter: u8,
}

impl CsvReader {
    pub fn new(schema: &'static ImportSchema, delimiter: u8) -> Self {
        Self { schema, delimiter }
    }

    pub fn read_path(&self, path: &Path) -> SecdashResult<CsvContents> {
        let file = std::fs::File::open(path)
            .map_err(|e| SecdashError::file_error(&path.display().to_string(), "open", &e.to_string()))?;
        log::debug!("Reading CSV from {}", path.display());
        self.read(file)
    }

    /// Fails only when the header row is unreadable or incomplete; bad
    /// records are collected into [`CsvContents::malformed`].
    pub fn read<R: Read>(&self, input: R) -> SecdashResult<CsvContents> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(input);

        let headers = reader.headers()?.clone();
        self.check_headers(&headers)?;

        let mut contents = CsvContents::default();

        for result in reader.records() {
            match result {
                Ok(record) => {
                    let line = record.position().map(|p| p.line() as usize).unwrap_or_default();
                    contents.rows.push(Self::to_raw_row(line, &headers, &record));
                }
                Err(e) => {
                    let line = e.position().map(|p| p.line() as usize).unwrap_or_default();
                    log::warn!("⚠️ Skipping malformed CSV record at line {}: {}", line, e);
                    contents.malformed.push(MalformedRow {
                        line,
                        rejection: RowRejection::Malformed { message: e.to_string() },
                    });
                }
            }
        }

        log::debug!("Read {} records ({} malformed)", contents.rows.len(), contents.malformed.len());
        Ok(contents)
    }

    /// Every required column must appear exactly once; a repeated one would
    /// make the row value ambiguous.
    fn check_headers(&self, headers: &StringRecord) -> SecdashResult<()> {
        let occurrences = |required: &str| headers.iter().filter(|h| *h == required).count();

        let mut missing = Vec::new();
        let mut repeated = Vec::new();
        for required in self.schema.headers() {
            match occurrences(required) {
                0 => missing.push(required),
                1 => {}
                _ => repeated.push(required),
            }
        }

        let reason = match (missing.is_empty(), repeated.is_empty()) {
            (true, true) => return Ok(()),
            (false, true) => format!("missing required columns: {}", missing.join(", ")),
            (true, false) => format!("repeated columns: {}", repeated.join(", ")),
            (false, false) => format!(
                "missing required columns: {}; repeated columns: {}",
                missing.join(", "),
                repeated.join(", ")
            ),
        };

        Err(SecdashError::parse_error(
            "CSV",
            Some(1),
            &reason,
            Some(&format!("expected header: {}", self.schema.header_line(self.delimiter as char))),
        ))
    }

    fn to_raw_row(line: usize, headers: &StringRecord, record: &StringRecord) -> RawRow {
        let mut row = RawRow::new(line);
        for (name, value) in headers.iter().zip(record.iter()) {
            row.fields.insert(name.to_string(), value.to_string());
        }
        row
    }
}
