use popcat::cli::Cli;
use popcat::commands::execute;
use popcat::config::resolve as resolve_config;
use popcat::error::CliError;
use popcat::logger::{initialize as LoggerInitialize, level_for};

use popcat_core::PopcatClient;

use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is normal
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = LoggerInitialize(level_for(cli.verbose, cli.quiet), cli.log_file.as_deref()) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    if let Ok(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = resolve_config(cli.config.as_deref(), cli.base_url.as_deref())?;
    let client = PopcatClient::from_config(&config)?;

    let output = execute(cli.command, &client).await?;
    println!("{output}");

    Ok(())
}
