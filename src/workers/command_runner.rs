use std::fs;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::record_kind::RecordKind;
use crate::errors::{SecdashError, SecdashResult};
use crate::logger::progress_logger::ProgressLogger;
use crate::services::api_client::DashboardApiClient;
use crate::services::bulk_submitter::BulkSubmitter;
use crate::services::import_pipeline::{ImportPipeline, PreparedImport};
use crate::services::rate_limiter::ApiRateLimiter;
use crate::structs::config::config::Config;
use crate::structs::import_report::ImportReport;
use crate::traits::record_api::RecordApi;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> SecdashResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Kinds => self.kinds_command(),
            Commands::Template { kind, output } => self.template_command(kind, output),
            Commands::Import { kind, file, dry_run, report } => self.import_command(kind, file, dry_run, report).await,
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> SecdashResult<()> {
        log::info!("🚀 Initializing secdash configuration...");

        let path = ConfigManager::create_sample_config()?;
        log::info!("✅ Created sample config at: {}", path.display());
        log::info!("🔧 Run 'secdash validate' to check your configuration.");
        Ok(())
    }

    fn kinds_command(&self) -> SecdashResult<()> {
        let config = ConfigManager::load()?;

        println!("\n📋 Importable record kinds:");
        println!("{}", "=".repeat(50));

        for kind in RecordKind::ALL {
            let schema = kind.schema();
            println!("• {}", kind);
            println!("   📝 {}", kind.description());
            println!("   🧾 Header: {}", schema.header_line(config.import.delimiter));
            println!("   🏷️ {} values: {}", schema.leaf_field, schema.allowed_leaves.join(", "));
            println!("   🌐 Endpoint: {}", config.api.endpoint_for(kind));
            println!();
        }

        Ok(())
    }

    fn template_command(&self, kind: RecordKind, output: Option<PathBuf>) -> SecdashResult<()> {
        let config = ConfigManager::load()?;
        let template = Self::render_template(kind, config.import.delimiter);

        match output {
            Some(path) => {
                fs::write(&path, &template)
                    .map_err(|e| SecdashError::file_error(&path.display().to_string(), "write", &e.to_string()))?;
                log::info!("✅ Wrote {} template to {}", kind, path.display());
            }
            None => print!("{}", template),
        }

        Ok(())
    }

    pub fn render_template(kind: RecordKind, delimiter: char) -> String {
        let separator = delimiter.to_string();
        format!(
            "{}\n{}\n",
            kind.schema().header_line(delimiter),
            kind.sample_row().join(&separator)
        )
    }

    async fn import_command(&self, kind: RecordKind, file: PathBuf, dry_run: bool, report_path: Option<PathBuf>) -> SecdashResult<()> {
        log::info!("📥 Importing {} from {}", kind, file.display());

        let config = ConfigManager::load()?;
        ConfigManager::ensure_valid(&config)?;

        let endpoint = config.api.endpoint_for(kind).to_string();
        let pipeline = ImportPipeline::new(kind, &endpoint, config.import.delimiter)?;
        let prepared = pipeline.inspect_path(&file)?;

        let api: Option<Arc<dyn RecordApi>> = if dry_run {
            None
        } else {
            Some(Arc::new(DashboardApiClient::new(&config.api)?))
        };

        Self::run_import(&config, prepared, api, report_path.as_deref()).await
    }

    /// Submits (or, without an API, prints) the prepared payloads. The summary
    /// is printed and the report written before any import error is returned.
    pub async fn run_import(
        config: &Config,
        mut prepared: PreparedImport,
        api: Option<Arc<dyn RecordApi>>,
        report_path: Option<&Path>,
    ) -> SecdashResult<()> {
        let kind = prepared.report.kind;

        if let Err(e) = prepared.ensure_records() {
            Self::finish_report(config, &prepared.report, report_path)?;
            return Err(e);
        }

        match api {
            None => {
                for payload in &prepared.payloads {
                    println!("{}", serde_json::to_string_pretty(payload)?);
                }
            }
            Some(api) => {
                let submitter = BulkSubmitter::new(api, Self::rate_limiter(config));

                let mut progress = ProgressLogger::new(format!("📨 Submitting {} records", kind));
                progress.start(prepared.payloads.len());

                let summary = submitter
                    .submit_all(&prepared.report.endpoint, &prepared.payloads, |done, total| progress.update(done, total))
                    .await;

                if summary.all_failed() {
                    progress.error(&format!("All {} submissions failed", summary.failed)).await;
                } else {
                    progress.stop(&format!("Created {}, {} failed", summary.created, summary.failed)).await;
                }

                prepared.report.submission = Some(summary);
            }
        }

        Self::finish_report(config, &prepared.report, report_path)?;

        match prepared.report.submission {
            Some(summary) if summary.all_failed() => Err(SecdashError::SubmissionFailed {
                kind: kind.to_string(),
                failed: summary.failed,
            }),
            _ => Ok(()),
        }
    }

    fn finish_report(config: &Config, report: &ImportReport, report_path: Option<&Path>) -> SecdashResult<()> {
        report.print_summary();

        match report_path {
            Some(path) => Self::write_report(report, &Self::resolve_report_path(config, path)),
            None => Ok(()),
        }
    }

    fn rate_limiter(config: &Config) -> Option<ApiRateLimiter> {
        NonZeroU32::new(config.api.requests_per_second).map(ApiRateLimiter::per_second)
    }

    /// Relative report paths land in `output.report_dir` when one is configured.
    pub fn resolve_report_path(config: &Config, path: &Path) -> PathBuf {
        match &config.output.report_dir {
            Some(dir) if path.is_relative() => Path::new(dir).join(path),
            _ => path.to_path_buf(),
        }
    }

    fn write_report(report: &ImportReport, path: &Path) -> SecdashResult<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .map_err(|e| SecdashError::file_error(&dir.display().to_string(), "create directory", &e.to_string()))?;
        }

        fs::write(path, report.to_json()?)
            .map_err(|e| SecdashError::file_error(&path.display().to_string(), "write", &e.to_string()))?;
        log::info!("💾 Import report saved to {}", path.display());
        Ok(())
    }

    fn validate_command(&self) -> SecdashResult<()> {
        log::info!("🔍 Validating secdash configuration...");

        let config = ConfigManager::load()?;
        log::info!("✅ Configuration loaded");

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                log::info!("🌐 API: {}", config.api.base_url);
                for kind in RecordKind::ALL {
                    log::info!("   {} -> {}", kind, config.api.endpoint_for(kind));
                }
                Ok(())
            }
            Err(errors) => {
                log::error!("❌ Issues found:");
                for issue in &errors {
                    log::error!("   - {}", issue);
                }
                ConfigManager::ensure_valid(&config)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::row_validator::RowValidator;
    use crate::traits::record_api::MockRecordApi;

    const VULNERABILITIES: &str = "\
month,year,buName,severity,count
Jan,2024,BU1,High,3
Feb,2024,BU1,High,4
";

    fn inspect(csv: &str) -> PreparedImport {
        let kind = RecordKind::BuVulnerabilities;
        ImportPipeline::with_validator(kind, "/bu-vulnerabilities", ',', RowValidator::with_max_year(kind.schema(), 2025))
            .unwrap()
            .inspect(csv.as_bytes())
            .unwrap()
    }

    fn read_report(path: &Path) -> serde_json::Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn empty_import_still_writes_the_report() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.output.report_dir = Some(dir.path().display().to_string());

        let prepared = inspect("month,year,buName,severity,count\nJan,1999,BU1,High,1\nJan,2024,BU1,Severe,1\n");
        let err = CommandRunner::run_import(&config, prepared, None, Some(Path::new("runs/empty.json")))
            .await
            .unwrap_err();

        assert!(matches!(err, SecdashError::EmptyImport { rejected_rows: 2, .. }));

        let report = read_report(&dir.path().join("runs/empty.json"));
        assert_eq!(report["records_built"], 0);
        assert_eq!(report["rejected_rows"][0]["reason"], "invalid_year");
        assert_eq!(report["rejected_rows"][1]["reason"], "invalid_enum_value");
    }

    #[tokio::test]
    async fn every_submission_failing_is_an_error_after_the_report_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let report_path = dir.path().join("failed.json");

        let mut api = MockRecordApi::new();
        api.expect_create_record()
            .withf(|endpoint, _| endpoint.to_string() == "/bu-vulnerabilities")
            .times(2)
            .returning(|endpoint, _| Err(SecdashError::api_error(endpoint, 503, "maintenance")));

        let err = CommandRunner::run_import(&Config::default(), inspect(VULNERABILITIES), Some(Arc::new(api)), Some(&report_path))
            .await
            .unwrap_err();

        match err {
            SecdashError::SubmissionFailed { kind, failed } => {
                assert_eq!(kind, "bu-vulnerabilities");
                assert_eq!(failed, 2);
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let report = read_report(&report_path);
        assert_eq!(report["submission"]["created"], 0);
        assert_eq!(report["submission"]["failed"], 2);
    }

    #[tokio::test]
    async fn partial_failure_still_succeeds() {
        let mut api = MockRecordApi::new();
        let mut calls = 0;
        api.expect_create_record().times(2).returning(move |endpoint, _| {
            calls += 1;
            if calls == 1 {
                Ok(())
            } else {
                Err(SecdashError::api_error(endpoint, 422, "duplicate period"))
            }
        });

        let result = CommandRunner::run_import(&Config::default(), inspect(VULNERABILITIES), Some(Arc::new(api)), None).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn dry_run_makes_no_calls() {
        let result = CommandRunner::run_import(&Config::default(), inspect(VULNERABILITIES), None, None).await;
        assert!(result.is_ok());
    }

    #[test]
    fn template_contains_header_and_sample_row() {
        let template = CommandRunner::render_template(RecordKind::BuVulnerabilities, ',');
        assert_eq!(template, "month,year,buName,severity,count\nJan,2024,Retail Banking,Critical,5\n");

        let semicolon = CommandRunner::render_template(RecordKind::ComplianceGaps, ';');
        assert!(semicolon.starts_with("month;year;framework;status;count\n"));
    }

    #[test]
    fn report_paths_resolve_against_report_dir() {
        let mut config = Config::default();
        assert_eq!(
            CommandRunner::resolve_report_path(&config, Path::new("run.json")),
            PathBuf::from("run.json")
        );

        config.output.report_dir = Some("reports".to_string());
        assert_eq!(
            CommandRunner::resolve_report_path(&config, Path::new("run.json")),
            PathBuf::from("reports/run.json")
        );
        assert_eq!(
            CommandRunner::resolve_report_path(&config, Path::new("/tmp/run.json")),
            PathBuf::from("/tmp/run.json")
        );
    }
}
