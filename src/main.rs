use clap::Parser;
use secdash_cli::errors::ErrorHandler;
use secdash_cli::structs::cli::Cli;
use secdash_cli::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    let mut runner = CommandRunner::new();
    if let Err(e) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&e);
        std::process::exit(1);
    }
}
