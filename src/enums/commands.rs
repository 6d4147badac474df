use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::record_kind::RecordKind;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// List the importable record kinds
    Kinds,
    /// Print the CSV header and an example row for a record kind
    Template {
        kind: RecordKind,
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate, group and submit a CSV file
    Import {
        kind: RecordKind,
        file: PathBuf,
        /// Build the payloads without calling the API
        #[clap(long)]
        dry_run: bool,
        /// Write the import report as JSON
        #[clap(short, long)]
        report: Option<PathBuf>,
    },
    /// Check the configuration file
    Validate,
}
