use std::fs;
use std::path::PathBuf;
use crate::config::constants::{API_URL_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::enums::record_kind::RecordKind;
use crate::errors::{ResultExt, SecdashError, SecdashResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

const SAMPLE_CONFIG: &str = r#"# Secdash bulk import configuration

[api]
# Dashboard REST API root. SECDASH_API_URL overrides this value.
base_url = "http://localhost:8000/api"

# Per-request timeout
timeout_secs = 30

# Upper bound on submissions per second during an import
requests_per_second = 5

# Endpoint overrides, keyed by record kind
[api.endpoints]
# bu-vulnerabilities = "/bu-vulnerabilities"
# risk-distribution = "/risk-distributions"
# compliance-gaps = "/compliance-gaps"
# attack-surface = "/attack-surface"

[import]
# Single-character CSV field separator
delimiter = ","

[output]
# Where relative --report paths are written
# report_dir = "./secdash-reports"
"#;

impl ConfigManager {
    pub fn config_path() -> SecdashResult<PathBuf> {
        Self::config_path_under(dirs::home_dir())
    }

    fn config_path_under(home: Option<PathBuf>) -> SecdashResult<PathBuf> {
        home.map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| SecdashError::system_error("locating configuration", "no home directory for the current user"))
    }

    /// Loads the config file when present, falling back to defaults, then
    /// applies environment overrides.
    pub fn load() -> SecdashResult<Config> {
        let path = Self::config_path()?;

        let mut config = if path.exists() {
            log::info!("📋 Loading config from: {}", path.display());
            let content = fs::read_to_string(&path)
                .map_err(|e| SecdashError::config_file_error(&path.display().to_string(), &e.to_string()))?;
            Self::parse(&content).with_context(&format!("loading {}", path.display()))?
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Config::default()
        };

        Self::apply_env_overrides(&mut config, std::env::var(API_URL_ENV).ok());
        Ok(config)
    }

    pub fn parse(content: &str) -> SecdashResult<Config> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply_env_overrides(config: &mut Config, api_url: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            log::debug!("Using API base URL from {}", API_URL_ENV);
            config.api.base_url = url.trim().to_string();
        }
    }

    pub fn create_sample_config() -> SecdashResult<PathBuf> {
        let path = Self::config_path()?;

        if path.exists() {
            return Err(SecdashError::config_error(
                "configuration file already exists",
                None,
                Some(&format!("Edit {} or remove it first", path.display())),
            ));
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| SecdashError::file_error(&dir.display().to_string(), "create directory", &e.to_string()))?;
        }
        fs::write(&path, SAMPLE_CONFIG)
            .map_err(|e| SecdashError::file_error(&path.display().to_string(), "write", &e.to_string()))?;

        Ok(path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        match url::Url::parse(&config.api.base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => errors.push(format!("api.base_url must use http or https, got '{}'", url.scheme())),
            Err(e) => errors.push(format!("api.base_url '{}' is not a valid URL: {}", config.api.base_url, e)),
        }

        if config.api.timeout_secs == 0 {
            errors.push("api.timeout_secs must be greater than zero".to_string());
        }

        if config.api.requests_per_second == 0 {
            errors.push("api.requests_per_second must be greater than zero".to_string());
        }

        if !config.import.delimiter.is_ascii() {
            errors.push(format!("import.delimiter '{}' must be a single ASCII character", config.import.delimiter));
        }

        for (kind, path) in &config.api.endpoints {
            if RecordKind::from_slug(kind).is_none() {
                errors.push(format!("api.endpoints has unknown record kind: {}", kind));
            }
            if !path.starts_with('/') {
                errors.push(format!("api.endpoints.{} must start with '/': {}", kind, path));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Same checks as [`ConfigManager::validate_config`], folded into one error.
    pub fn ensure_valid(config: &Config) -> SecdashResult<()> {
        Self::validate_config(config).map_err(|errors| SecdashError::MultipleErrors {
            errors: errors
                .iter()
                .map(|e| SecdashError::config_error(e, None, None))
                .collect(),
            context: "configuration validation".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_config_parses_and_validates() {
        let config = ConfigManager::parse(SAMPLE_CONFIG).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
        assert_eq!(config.api.requests_per_second, 5);
        assert_eq!(config.import.delimiter, ',');
        assert!(ConfigManager::validate_config(&config).is_ok());
    }

    #[test]
    fn empty_file_falls_back_to_defaults() {
        let config = ConfigManager::parse("").unwrap();
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(
            config.api.endpoint_for(RecordKind::RiskDistribution),
            "/risk-distributions"
        );
    }

    #[test]
    fn endpoint_overrides_apply_per_kind() {
        let config = ConfigManager::parse(
            r#"
            [api.endpoints]
            compliance-gaps = "/v2/compliance/gaps"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.endpoint_for(RecordKind::ComplianceGaps), "/v2/compliance/gaps");
        assert_eq!(config.api.endpoint_for(RecordKind::AttackSurface), "/attack-surface");
    }

    #[test]
    fn env_override_replaces_base_url_unless_blank() {
        let mut config = Config::default();
        ConfigManager::apply_env_overrides(&mut config, Some("  ".to_string()));
        assert_eq!(config.api.base_url, "http://localhost:8000/api");

        ConfigManager::apply_env_overrides(&mut config, Some("https://dash.internal/api".to_string()));
        assert_eq!(config.api.base_url, "https://dash.internal/api");
    }

    #[test]
    fn validation_collects_every_problem() {
        let config = ConfigManager::parse(
            r#"
            [api]
            base_url = "ftp://dash"
            timeout_secs = 0
            requests_per_second = 0

            [api.endpoints]
            vendors = "vendors"

            [import]
            delimiter = "§"
            "#,
        )
        .unwrap();

        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 6);
        assert!(errors.iter().any(|e| e.contains("http or https")));
        assert!(errors.iter().any(|e| e.contains("unknown record kind: vendors")));

        match ConfigManager::ensure_valid(&config).unwrap_err() {
            SecdashError::MultipleErrors { errors, .. } => assert_eq!(errors.len(), 6),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn config_lives_under_the_home_directory() {
        let path = ConfigManager::config_path_under(Some(PathBuf::from("/home/analyst"))).unwrap();
        assert_eq!(path, PathBuf::from("/home/analyst/secdash/config.toml"));

        let err = ConfigManager::config_path_under(None).unwrap_err();
        assert!(matches!(err, SecdashError::SystemError { .. }));
        assert_eq!(err.severity(), crate::errors::ErrorSeverity::Critical);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = ConfigManager::parse("[api\nbase_url = 1").unwrap_err();
        assert!(matches!(err, SecdashError::ParseError { ref content_type, .. } if content_type == "TOML"));
    }
}
