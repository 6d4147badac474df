use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ImportConfig {
    #[serde(default = "ConfigHelper::default_delimiter")]
    pub delimiter: char,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            delimiter: ConfigHelper::default_delimiter(),
        }
    }
}
