//! CLI-specific error types and exit code mapping

use jdkver_parser::{DetectError, ProbeError, VersionParseError};

/// CLI-specific error type.
///
/// Each variant carries enough context for a user-friendly message.
/// The `exit_code()` method maps errors to process exit codes so CI scripts
/// can tell "not a version banner" apart from "unparseable version".
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading or validation failure.
    #[error("configuration error: {0}")]
    Config(String),

    /// A subcommand-specific operation failed.
    #[error("{0}")]
    Command(String),

    /// The banner could not be parsed.
    #[error(transparent)]
    Parse(#[from] VersionParseError),

    /// The banner could not be obtained from the runtime.
    #[error("runtime error: {0}")]
    Probe(#[from] ProbeError),

    /// JSON serialisation failed during output rendering.
    #[error("json output error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// IO error (file read, stdout write, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map the error to a process exit code.
    ///
    /// | Code | Meaning                                  |
    /// |------|------------------------------------------|
    /// | 0    | Success                                  |
    /// | 1    | General / command error                  |
    /// | 2    | Configuration error                      |
    /// | 3    | Input is not a version banner            |
    /// | 4    | Version token could not be decomposed    |
    /// | 5    | Runtime could not be run or timed out    |
    /// | 10   | IO error                                 |
    /// | 64   | Command line usage error ([`USAGE_EXIT_CODE`]) |
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::Parse(VersionParseError::MalformedInput { .. }) => 3,
            Self::Parse(VersionParseError::MalformedVersion { .. }) => 4,
            Self::Probe(_) => 5,
            Self::Io(_) => 10,
            Self::JsonSerialize(_) | Self::Command(_) => 1,
        }
    }
}

/// Exit code for command line usage errors (BSD `EX_USAGE`).
///
/// clap's own code 2 would collide with [`CliError::Config`].
pub const USAGE_EXIT_CODE: i32 = 64;

impl From<DetectError> for CliError {
    fn from(e: DetectError) -> Self {
        match e {
            DetectError::Probe(e) => Self::Probe(e),
            DetectError::Parse(e) => Self::Parse(e),
        }
    }
}

impl From<jdkver_core::JdkverError> for CliError {
    fn from(e: jdkver_core::JdkverError) -> Self {
        Self::Config(e.to_string())
    }
}
