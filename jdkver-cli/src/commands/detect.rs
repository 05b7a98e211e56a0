//! `jdkver detect` command handler

use tracing::info;

use jdkver_core::config::JdkverConfig;
use jdkver_parser::{JavaCommandSource, LiteralSource, ParsedVersion, detect};

use crate::cli::DetectArgs;
use crate::error::CliError;
use crate::output::OutputWriter;

/// Execute the `detect` command.
///
/// Uses the literal banner from the `probe.literal_env` variable when it is set,
/// otherwise runs the configured Java runtime.
pub async fn execute(
    args: DetectArgs,
    config: &JdkverConfig,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let literal = LiteralSource::from_env(&config.probe.literal_env);
    let version = resolve(&args, config, literal).await?;
    writer.render(&version)?;
    Ok(())
}

/// Pick the version source and parse its banner.
///
/// `literal` is built from the literal env var by the caller so the choice is testable.
async fn resolve(
    args: &DetectArgs,
    config: &JdkverConfig,
    literal: Option<LiteralSource>,
) -> Result<ParsedVersion, CliError> {
    if let Some(source) = literal {
        info!(
            env = %config.probe.literal_env,
            "using version banner from environment instead of running java"
        );
        return Ok(detect(&source, args.build_num).await?);
    }

    let java_cmd = args
        .java_cmd
        .clone()
        .unwrap_or_else(|| config.probe.java_cmd.clone());
    let timeout = args
        .timeout_secs
        .map(std::time::Duration::from_secs)
        .unwrap_or_else(|| config.probe.timeout());

    let source = JavaCommandSource::new(java_cmd, config.probe.version_flag.clone(), timeout);
    info!(build_num = args.build_num, "detecting java runtime version");
    Ok(detect(&source, args.build_num).await?)
}
