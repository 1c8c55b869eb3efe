//! HAL+JSON rendering.
//!
//! The JSON form is the resource tree as-is: `_links` and `_embedded` stay
//! reserved keys and key order follows declaration order. Values that have
//! no JSON form are rejected before anything is written.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use crate::config::RenderOptions;
use crate::error::{HalError, Result};
use crate::render::{HalFormat, Renderer};
use crate::resource::Resource;
use crate::value::{Map, Value};

/// Renders a resource as a pretty-printed HAL+JSON string with default
/// options.
///
/// # Examples
///
/// ```rust
/// use hal_render::{Link, Resource};
/// use hal_render::json::to_json_string;
///
/// let resource = Resource::new()
///     .with_link("self", Link::new("/u/1"))
///     .with_property("active", true);
///
/// let json = to_json_string(&resource)?;
/// assert!(json.starts_with("{\n  \"_links\""));
/// # Ok::<(), hal_render::HalError>(())
/// ```
pub fn to_json_string(resource: &Resource) -> Result<String> {
    JsonRenderer::default().render(resource)
}

/// Renderer producing HAL+JSON documents.
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    options: RenderOptions,
}

impl JsonRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, resource: &Resource) -> Result<String> {
        validate_map(resource.as_map(), 0, self.options.max_depth)?;

        let json = if self.options.indent == 0 {
            serde_json::to_string(resource.as_map())?
        } else {
            let indent = " ".repeat(self.options.indent);
            let mut buffer = Vec::new();
            let formatter = PrettyFormatter::with_indent(indent.as_bytes());
            let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
            resource.as_map().serialize(&mut serializer)?;
            String::from_utf8(buffer)?
        };

        debug!(bytes = json.len(), "rendered resource as JSON");
        Ok(json)
    }

    fn format(&self) -> HalFormat {
        HalFormat::Json
    }
}

/// Rejects opaque values and over-deep nesting, naming the offending key.
fn validate_map(map: &Map, depth: usize, max_depth: usize) -> Result<()> {
    if depth >= max_depth {
        return Err(HalError::DepthExceeded { limit: max_depth });
    }
    for (key, value) in map.iter() {
        validate_value(key, value, depth, max_depth)?;
    }
    Ok(())
}

fn validate_value(key: &str, value: &Value, depth: usize, max_depth: usize) -> Result<()> {
    match value {
        Value::Scalar(_) => Ok(()),
        Value::Map(map) => validate_map(map, depth + 1, max_depth),
        Value::List(items) => items
            .iter()
            .try_for_each(|item| validate_value(key, item, depth, max_depth)),
        Value::Opaque(_) => Err(HalError::invalid_value(key, value)),
    }
}
