use chrono::Datelike;
use crate::config::constants::{COUNT_FIELD, MIN_YEAR, MONTH_FIELD, YEAR_FIELD};
use crate::enums::month::Month;
use crate::enums::row_rejection::RowRejection;
use crate::structs::import_schema::ImportSchema;
use crate::structs::metric_row::MetricRow;
use crate::structs::period_key::PeriodKey;
use crate::structs::raw_row::RawRow;

pub struct RowValidator {
    schema: &'static ImportSchema,
    max_year: i32,
}

impl RowValidator {
    pub fn new(schema: &'static ImportSchema) -> Self {
        Self::with_max_year(schema, chrono::Local::now().year() + 1)
    }

    pub fn with_max_year(schema: &'static ImportSchema, max_year: i32) -> Self {
        Self { schema, max_year }
    }

    /// Checks presence, enum membership and numeric ranges. Never looks at
    /// other rows.
    pub fn validate(&self, row: &RawRow) -> Result<MetricRow, RowRejection> {
        let month_raw = Self::required(row, MONTH_FIELD)?;
        let year_raw = Self::required(row, YEAR_FIELD)?;
        let group = Self::required(row, self.schema.group_field)?;
        let leaf_raw = Self::required(row, self.schema.leaf_field)?;
        let count_raw = Self::required(row, COUNT_FIELD)?;

        let month = month_raw
            .parse::<Month>()
            .map_err(|_| RowRejection::InvalidMonth { value: month_raw.to_string() })?;

        let year = self.parse_year(year_raw)?;

        let leaf = self.schema.leaf_key(leaf_raw).ok_or_else(|| RowRejection::InvalidEnumValue {
            field: self.schema.leaf_field.to_string(),
            value: leaf_raw.to_string(),
            allowed: self.schema.allowed_leaves.join(", "),
        })?;

        let count = Self::parse_count(count_raw)?;

        Ok(MetricRow {
            line: row.line,
            period: PeriodKey::new(month, year),
            group: group.to_string(),
            leaf,
            count,
        })
    }

    fn required<'a>(row: &'a RawRow, field: &str) -> Result<&'a str, RowRejection> {
        row.get(field).ok_or_else(|| RowRejection::MissingField { field: field.to_string() })
    }

    /// Plain decimal digits only; `u32::from_str` alone would also take a
    /// leading `+`.
    fn parse_count(value: &str) -> Result<u32, RowRejection> {
        let invalid = || RowRejection::InvalidCount {
            field: COUNT_FIELD.to_string(),
            value: value.to_string(),
        };

        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        value.parse::<u32>().map_err(|_| invalid())
    }

    fn parse_year(&self, value: &str) -> Result<u16, RowRejection> {
        let invalid = || RowRejection::InvalidYear {
            value: value.to_string(),
            min: MIN_YEAR,
            max: self.max_year,
        };

        if value.len() != 4 || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: i32 = value.parse().map_err(|_| invalid())?;
        if year < MIN_YEAR || year > self.max_year {
            return Err(invalid());
        }

        u16::try_from(year).map_err(|_| invalid())
    }
}
