//! Output formatting abstraction for csv / text / JSON rendering
//!
//! All subcommand output flows through [`OutputWriter`] which handles format switching.
//! This keeps format-specific logic out of command handlers entirely.

use std::io::Write;

use serde::Serialize;

use jdkver_parser::{ABSENT_MARKER, ParsedVersion};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Abstraction for writing CLI output in different formats.
///
/// Subcommand handlers call `writer.render(&payload)` where `payload`
/// implements both `Serialize` (for JSON) and `Render` (for csv / text).
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    /// Create a new output writer with the specified format.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render a payload to stdout.
    pub fn render<T: Render + Serialize>(&self, payload: &T) -> Result<(), CliError> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.render_to(payload, &mut handle)
    }

    /// Render a payload to an arbitrary writer.
    pub fn render_to<T: Render + Serialize>(
        &self,
        payload: &T,
        w: &mut dyn Write,
    ) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Csv => payload.render_line(w)?,
            OutputFormat::Text => payload.render_text(w)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *w, payload)?;
                writeln!(w)?;
            }
        }
        Ok(())
    }
}

/// Trait for human-readable rendering.
///
/// Implemented by every CLI output payload alongside `serde::Serialize`.
pub trait Render {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()>;

    /// Compact single-line form; payloads without one fall back to text.
    fn render_line(&self, w: &mut dyn Write) -> std::io::Result<()> {
        self.render_text(w)
    }
}

impl Render for ParsedVersion {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        use colored::Colorize;

        writeln!(w, "Version: {} ({})", self.semver().bold(), self.scheme())?;
        writeln!(w, "  Major:    {}", self.major())?;
        writeln!(w, "  Minor:    {}", self.minor())?;
        writeln!(w, "  Security: {}", self.security())?;
        writeln!(w, "  Build:    {}", self.build())?;
        writeln!(w, "  Opt:      {}", self.opt().unwrap_or(ABSENT_MARKER))?;
        Ok(())
    }

    fn render_line(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(w, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JDK8: &str = "openjdk version \"1.8.0_202\"\n\
        OpenJDK Runtime Environment (AdoptOpenJDK)(build 1.8.0_202-b08)\n";

    fn render(format: OutputFormat, version: &ParsedVersion) -> String {
        let mut buffer = Vec::new();
        OutputWriter::new(format)
            .render_to(version, &mut buffer)
            .expect("rendering should succeed");
        String::from_utf8(buffer).expect("valid UTF-8")
    }

    #[test]
    fn test_csv_output_is_fixed_field_line() {
        colored::control::set_override(false);
        let version = jdkver_parser::parse(JDK8, 1).expect("should parse");
        let output = render(OutputFormat::Csv, &version);
        assert_eq!(output, "8, 0, 202, 08, None, 8.0.202+08.1\n");
        assert_eq!(output.trim_end().split(", ").count(), 6);
    }

    #[test]
    fn test_text_output_labels_fields() {
        colored::control::set_override(false);
        let version = jdkver_parser::parse(JDK8, 1).expect("should parse");
        let output = render(OutputFormat::Text, &version);
        assert!(output.contains("8.0.202+08.1"), "should show semver");
        assert!(output.contains("legacy"), "should show scheme");
        assert!(output.contains("Build:    08"), "should keep leading zero");
        assert!(output.contains("Opt:      None"), "should show absent marker");
    }

    #[test]
    fn test_json_output_structure() {
        let version = jdkver_parser::parse(JDK8, 1).expect("should parse");
        let output = render(OutputFormat::Json, &version);
        let parsed: serde_json::Value = serde_json::from_str(&output).expect("should parse JSON");

        assert_eq!(parsed["scheme"].as_str(), Some("legacy"));
        assert_eq!(parsed["major"].as_u64(), Some(8));
        assert_eq!(parsed["security"].as_u64(), Some(202));
        assert_eq!(parsed["build"].as_str(), Some("08"));
        assert!(parsed["opt"].is_null(), "absent opt should be null in JSON");
        assert_eq!(parsed["semver"].as_str(), Some("8.0.202+08.1"));
    }

    #[test]
    fn test_render_line_defaults_to_text() {
        #[derive(Serialize)]
        struct TextOnly;

        impl Render for TextOnly {
            fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
                writeln!(w, "text body")
            }
        }

        let mut buffer = Vec::new();
        OutputWriter::new(OutputFormat::Csv)
            .render_to(&TextOnly, &mut buffer)
            .expect("rendering should succeed");
        assert_eq!(String::from_utf8(buffer).expect("valid UTF-8"), "text body\n");
    }
}
