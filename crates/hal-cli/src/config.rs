//! Command-line configuration for `hal-render`.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `HAL_FORMAT` | xml | Output format (`xml`, `json`, or a media type) |
//! | `HAL_OUTPUT` | stdout | Output file |
//! | `HAL_INDENT` | 2 | Spaces per indentation level (0 = single line) |
//! | `HAL_MAX_DEPTH` | 64 | Maximum resource/property nesting depth |
//! | `HAL_NO_DECLARATION` | false | Omit the XML declaration (ignored for JSON) |
//! | `HAL_LOG_LEVEL` | warn | Log level |

use std::path::PathBuf;

use clap::Parser;
use hal_render::{HalFormat, RenderOptions};

/// Largest accepted indentation width.
const MAX_INDENT: usize = 16;

/// Configuration for the `hal-render` command.
#[derive(Debug, Clone, Parser)]
#[command(name = "hal-render")]
#[command(about = "Render HAL+JSON resources as HAL+XML or HAL+JSON")]
pub struct CliConfig {
    /// Input HAL+JSON file. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Output file. Writes to stdout when omitted.
    #[arg(short, long, env = "HAL_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Output format: xml, json, or a media type such as application/hal+xml.
    #[arg(short, long, env = "HAL_FORMAT", default_value = "xml")]
    pub format: HalFormat,

    /// Spaces per indentation level (0 for single-line output).
    #[arg(long, env = "HAL_INDENT", default_value = "2")]
    pub indent: usize,

    /// Maximum nesting depth of embedded resources and map properties.
    #[arg(long, env = "HAL_MAX_DEPTH", default_value = "64")]
    pub max_depth: usize,

    /// Omit the XML declaration. Ignored for JSON output.
    #[arg(long, env = "HAL_NO_DECLARATION")]
    pub no_declaration: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "HAL_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl CliConfig {
    /// Returns the input path, or `None` when reading from stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input
            .as_ref()
            .filter(|path| path.as_os_str() != "-")
    }

    /// Rendering options derived from the command line.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::default()
            .with_indent(self.indent)
            .with_max_depth(self.max_depth)
            .with_xml_declaration(!self.no_declaration)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.max_depth == 0 {
            errors.push("Max depth cannot be 0".to_string());
        }

        if self.indent > MAX_INDENT {
            errors.push(format!("Indent cannot exceed {} spaces", MAX_INDENT));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(std::iter::once("hal-render").chain(args.iter().copied()))
            .expect("arguments parse")
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]);
        assert_eq!(config.format, HalFormat::Xml);
        assert!(config.input_path().is_none());
        assert_eq!(config.render_options(), RenderOptions::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_format_accepts_media_type() {
        let config = parse(&["-f", "application/hal+json", "order.json"]);
        assert_eq!(config.format, HalFormat::Json);
        assert_eq!(config.input_path(), Some(&PathBuf::from("order.json")));
    }

    #[test]
    fn test_dash_reads_stdin() {
        assert!(parse(&["-"]).input_path().is_none());
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(CliConfig::try_parse_from(["hal-render", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_render_options_from_flags() {
        let config = parse(&["--indent", "0", "--max-depth", "5", "--no-declaration"]);
        assert_eq!(
            config.render_options(),
            RenderOptions::default()
                .with_indent(0)
                .with_max_depth(5)
                .with_xml_declaration(false)
        );
    }

    #[test]
    fn test_validate_collects_errors() {
        let config = parse(&["--max-depth", "0", "--indent", "40"]);
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.contains("Max depth")));
    }

    #[test]
    fn test_no_declaration_allowed_with_json() {
        let config = parse(&["-f", "json", "--no-declaration"]);
        assert!(config.validate().is_ok());
    }
}
