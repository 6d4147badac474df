use serde::{Deserialize, Serialize};
use crate::structs::config::api_config::ApiConfig;
use crate::structs::config::import_config::ImportConfig;
use crate::structs::config::output_config::OutputConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub import: ImportConfig,

    #[serde(default)]
    pub output: OutputConfig,
}
