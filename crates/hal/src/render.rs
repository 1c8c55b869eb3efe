//! The renderer abstraction and output format selection.

use std::fmt;
use std::str::FromStr;

use crate::config::RenderOptions;
use crate::error::Result;
use crate::json::JsonRenderer;
use crate::resource::Resource;
use crate::xml::XmlRenderer;

/// Turns a resource into document text.
pub trait Renderer {
    fn render(&self, resource: &Resource) -> Result<String>;

    fn format(&self) -> HalFormat;

    /// MIME type of the documents this renderer produces.
    fn media_type(&self) -> &'static str {
        self.format().mime_type()
    }
}

/// Supported HAL document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HalFormat {
    /// HAL+JSON (application/hal+json)
    Json,
    /// HAL+XML (application/hal+xml)
    #[default]
    Xml,
}

impl HalFormat {
    /// Returns the MIME type string for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            HalFormat::Json => "application/hal+json",
            HalFormat::Xml => "application/hal+xml",
        }
    }

    /// Parses a format name (`json`, `xml`) or a media type.
    ///
    /// Media type parameters such as `; charset=utf-8` are ignored.
    pub fn parse(value: &str) -> Option<Self> {
        let media_type = value.split(';').next().unwrap_or_default().trim();
        let media_type = media_type.to_lowercase();

        match media_type.as_str() {
            "json" | "hal+json" | "application/hal+json" | "application/json" => {
                Some(HalFormat::Json)
            }
            "xml" | "hal+xml" | "application/hal+xml" | "application/xml" | "text/xml" => {
                Some(HalFormat::Xml)
            }
            _ => None,
        }
    }

    /// Creates a renderer for this format.
    pub fn renderer(&self, options: RenderOptions) -> Box<dyn Renderer> {
        match self {
            HalFormat::Json => Box::new(JsonRenderer::new(options)),
            HalFormat::Xml => Box::new(XmlRenderer::new(options)),
        }
    }
}

impl FromStr for HalFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        HalFormat::parse(s).ok_or_else(|| format!("unsupported HAL format: {}", s))
    }
}

impl fmt::Display for HalFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HalFormat::Json => write!(f, "json"),
            HalFormat::Xml => write!(f, "xml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_media_types() {
        assert_eq!(HalFormat::parse("xml"), Some(HalFormat::Xml));
        assert_eq!(HalFormat::parse("JSON"), Some(HalFormat::Json));
        assert_eq!(
            HalFormat::parse("application/hal+xml; charset=utf-8"),
            Some(HalFormat::Xml)
        );
        assert_eq!(HalFormat::parse("application/hal+json"), Some(HalFormat::Json));
        assert_eq!(HalFormat::parse("text/html"), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "yaml".parse::<HalFormat>().unwrap_err();
        assert_eq!(err, "unsupported HAL format: yaml");
    }

    #[test]
    fn test_renderer_media_type() {
        let options = RenderOptions::default();
        assert_eq!(HalFormat::Xml.renderer(options.clone()).media_type(), "application/hal+xml");
        assert_eq!(HalFormat::Json.renderer(options).media_type(), "application/hal+json");
    }
}
