use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "secdash")]
#[clap(about = "Bulk CSV importer for the security compliance dashboard", long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
