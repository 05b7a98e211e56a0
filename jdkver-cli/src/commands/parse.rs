//! `jdkver parse` command handler

use tokio::io::AsyncReadExt;
use tracing::info;

use crate::cli::ParseArgs;
use crate::error::CliError;
use crate::output::OutputWriter;

/// Execute the `parse` command.
pub async fn execute(args: ParseArgs, writer: &OutputWriter) -> Result<(), CliError> {
    let text = match &args.file {
        Some(path) => {
            info!(path = %path.display(), "reading version banner from file");
            tokio::fs::read_to_string(path).await?
        }
        None => {
            info!("reading version banner from stdin");
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            text
        }
    };

    let version = jdkver_parser::parse(&text, args.build_num)?;
    writer.render(&version)?;
    Ok(())
}
