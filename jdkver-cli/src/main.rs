//! jdkver CLI entry point
//!
//! Parses the command line, loads configuration, initializes logging
//! and dispatches to the subcommand handlers.

mod cli;
mod commands;
mod error;
mod logging;
mod output;

use std::path::Path;

use clap::Parser;

use jdkver_core::config::{GeneralConfig, JdkverConfig};

use crate::cli::{Cli, Commands};
use crate::error::{CliError, USAGE_EXIT_CODE};
use crate::output::OutputWriter;

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version print to stdout and succeed
            let code = if e.use_stderr() { USAGE_EXIT_CODE } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let writer = OutputWriter::new(cli.output);

    match cli.command {
        // `config` reports load failures itself, so it runs on default logging
        Commands::Config(args) => {
            let mut general = GeneralConfig::default();
            if let Some(level) = cli.log_level {
                general.log_level = level;
            }
            logging::init_tracing(&general).map_err(|e| CliError::Config(e.to_string()))?;
            commands::config::execute(args, cli.config.as_deref(), &writer).await
        }
        Commands::Detect(args) => {
            let config = load_config(cli.config.as_deref(), cli.log_level).await?;
            commands::detect::execute(args, &config, &writer).await
        }
        Commands::Parse(args) => {
            load_config(cli.config.as_deref(), cli.log_level).await?;
            commands::parse::execute(args, &writer).await
        }
    }
}

/// Load configuration, apply the `--log-level` override and start logging.
async fn load_config(
    path: Option<&Path>,
    log_level: Option<String>,
) -> Result<JdkverConfig, CliError> {
    let mut config = JdkverConfig::load_or_default(path).await?;
    if let Some(level) = log_level {
        config.general.log_level = level;
        config.validate()?;
    }
    logging::init_tracing(&config.general).map_err(|e| CliError::Config(e.to_string()))?;

    tracing::debug!(
        config = ?path,
        java_cmd = %config.probe.java_cmd,
        "jdkver starting"
    );
    Ok(config)
}
