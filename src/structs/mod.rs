pub mod aggregated_record;
pub mod aggregation;
pub mod cli;
pub mod config;
pub mod dto;
pub mod import_report;
pub mod import_schema;
pub mod leaf_key;
pub mod metric_row;
pub mod period_key;
pub mod raw_row;
pub mod rejected_row;
pub mod submission_summary;
