mod backend;
mod cli;
mod commands;
mod config;
mod error;
mod render;

#[cfg(test)]
mod mock_backend;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(err.exit_code());
        }
    };
    tracing::debug!(base_url = %config.base_url, timeout = ?config.timeout, "configuration loaded");

    let mut stdout = std::io::stdout().lock();
    match commands::run(&config, cli.command, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

/// Logs go to stderr so stdout stays machine-readable. `RUST_LOG` wins over
/// the default level; `-v` forces debug for this crate.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warn,prestabanco=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).with_writer(std::io::stderr).init();
}
