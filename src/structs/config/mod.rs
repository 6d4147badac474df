pub mod config;
pub mod api_config;
pub mod import_config;
pub mod output_config;
