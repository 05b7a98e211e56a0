#![doc = include_str!("../README.md")]
//!
//! # Module Structure
//!
//! - [`error`]: Domain error types (`VersionParseError`, `ProbeError`, `DetectError`)
//! - [`extract`]: Raw token extraction from the banner (`extract_token`)
//! - [`scheme`]: Numbering scheme classification (`Scheme`, `classify`)
//! - [`version`]: Parsed record and entry point (`ParsedVersion`, `Build`, `parse`)
//! - [`source`]: Banner text sources (`VersionSource`, `JavaCommandSource`, `LiteralSource`, `detect`)
//!
//! # Architecture
//!
//! ```text
//! VersionSource --> banner text --> extract_token --> classify --> decompose --> ParsedVersion
//!                                        |                |             |
//!                                  MalformedInput         +-- MalformedVersion
//! ```

mod decompose;
pub mod error;
pub mod extract;
pub mod scheme;
pub mod source;
pub mod version;

// --- Public API Re-exports ---

// Error
pub use error::{DetectError, ProbeError, VersionParseError};

// Parser
pub use extract::extract_token;
pub use scheme::{Classified, Scheme, classify};
pub use version::{ABSENT_MARKER, Build, ParsedVersion, parse};

// Sources
pub use source::{JavaCommandSource, LiteralSource, VersionSource, detect};
