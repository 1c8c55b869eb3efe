//! Rendering options.
//!
//! # Example
//!
//! ```rust
//! use hal_render::RenderOptions;
//!
//! // Defaults: two-space indentation, XML declaration, depth limit of 64
//! let options = RenderOptions::default();
//!
//! // Or adjust programmatically
//! let options = RenderOptions::default()
//!     .with_indent(4)
//!     .with_max_depth(16);
//! ```

use serde::{Deserialize, Serialize};

/// Default number of spaces per indentation level.
pub const DEFAULT_INDENT: usize = 2;

/// Default limit on resource and property nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options shared by the XML and JSON renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Spaces per indentation level. Zero produces single-line output.
    pub indent: usize,

    /// Maximum nesting depth of embedded resources and map properties.
    /// Deeper input fails with `HalError::DepthExceeded`.
    pub max_depth: usize,

    /// Emit `<?xml version="1.0" encoding="UTF-8"?>`. Ignored for JSON.
    pub xml_declaration: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            max_depth: DEFAULT_MAX_DEPTH,
            xml_declaration: true,
        }
    }
}

impl RenderOptions {
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_xml_declaration(mut self, xml_declaration: bool) -> Self {
        self.xml_declaration = xml_declaration;
        self
    }
}
