use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct OutputConfig {
    /// Directory for import reports when `--report` is given a relative path.
    #[serde(default)]
    pub report_dir: Option<String>,
}
