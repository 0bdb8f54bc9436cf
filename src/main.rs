//! User Registry - Application entry point
//!
//! Parses the command line, sets up logging and runs the chosen command.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use user_registry::{
    cli::{Cli, Commands},
    commands,
    config::Config,
    errors::AppResult,
};

/// Filter used when `--verbose` is given
const VERBOSE_FILTER: &str = "user_registry=debug,tower_http=debug,info";

/// Filter used when neither `--verbose` nor `RUST_LOG` is set
const DEFAULT_FILTER: &str = "info";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(log_filter(cli.verbose, std::env::var("RUST_LOG").ok()));

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            ExitCode::FAILURE
        }
    }
}

/// Dispatch the parsed command with configuration loaded from the environment
async fn run(cli: Cli) -> AppResult<()> {
    let config = Config::from_env();
    tracing::debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, config).await,
        Commands::Openapi => commands::openapi::execute().await,
    }
}

/// Pick the log filter directive: `--verbose` wins over `RUST_LOG`
fn log_filter(verbose: bool, rust_log: Option<String>) -> String {
    if verbose {
        return VERBOSE_FILTER.to_string();
    }

    rust_log
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Install the global subscriber; logs go to stderr so `openapi` output stays clean
fn init_tracing(filter: String) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::new(filter))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_overrides_rust_log() {
        assert_eq!(log_filter(true, Some("warn".to_string())), VERBOSE_FILTER);
    }

    #[test]
    fn test_rust_log_used_when_set() {
        assert_eq!(log_filter(false, Some("warn".to_string())), "warn");
    }

    #[test]
    fn test_default_when_unset_or_blank() {
        assert_eq!(log_filter(false, None), DEFAULT_FILTER);
        assert_eq!(log_filter(false, Some("  ".to_string())), DEFAULT_FILTER);
    }
}
