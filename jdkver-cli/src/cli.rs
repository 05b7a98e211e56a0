//! CLI argument parsing using clap derive API
//!
//! This module defines the command-line interface structure using clap's derive macros.
//! It is purely declarative with no side effects or I/O.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// jdkver -- turn a Java runtime version banner into a semantic version.
///
/// Use `jdkver <COMMAND> --help` for subcommand details.
#[derive(Parser, Debug)]
#[command(name = "jdkver", version, about, long_about = None)]
pub struct Cli {
    /// Path to a jdkver.toml configuration file (defaults + env overrides when omitted).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output format.
    #[arg(long, global = true, default_value = "csv")]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single comma-separated line: major, minor, security, build, opt, semver.
    Csv,
    /// Human-readable labelled fields.
    Text,
    /// Machine-readable JSON.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a Java runtime and parse its version banner.
    Detect(DetectArgs),

    /// Parse a version banner read from a file or stdin.
    Parse(ParseArgs),

    /// Manage configuration.
    Config(ConfigArgs),
}

// ---- detect ----

/// Run `<java> -version` and parse the result.
///
/// When the environment variable named by `probe.literal_env` (default `TEST`)
/// is set, its value is parsed instead of running the runtime.
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Build counter appended to the semantic version (e.g. the CI build number).
    pub build_num: u64,

    /// Java binary to run (overrides `probe.java_cmd`).
    #[arg(long)]
    pub java_cmd: Option<String>,

    /// Seconds to wait for the runtime (overrides `probe.timeout_secs`).
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,
}

// ---- parse ----

/// Parse a captured version banner.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Build counter appended to the semantic version (e.g. the CI build number).
    pub build_num: u64,

    /// File containing the banner (default: read stdin).
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

// ---- config ----

/// Manage jdkver configuration.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate the configuration and report errors.
    Validate,
    /// Show the effective configuration (file + env overrides + defaults).
    Show {
        /// Show only a specific section (general, probe).
        #[arg(long)]
        section: Option<String>,
    },
}
