pub mod aggregator;
pub mod api_client;
pub mod bulk_submitter;
pub mod csv_reader;
pub mod import_pipeline;
pub mod rate_limiter;
pub mod row_validator;
