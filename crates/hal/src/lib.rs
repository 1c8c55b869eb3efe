//! # HAL Renderer
//!
//! Renders HAL hypermedia resources (properties, `_links` and `_embedded`
//! sub-resources) as HAL+XML or HAL+JSON documents.
//!
//! ## Features
//!
//! - **Explicit value model**: [`Value`] tags every container as a list or a
//!   map when it is built, so rendering never guesses from key shapes.
//! - **XML Support**: a recursive tree builder that turns resources into
//!   `resource`/`link` elements and serializes them with quick-xml.
//! - **Self link collapsing**: a single unambiguous `self` link becomes
//!   attributes of its `resource` element instead of a nested `link`.
//! - **JSON Support**: HAL+JSON output through `serde_json`, behind the same
//!   [`Renderer`] trait.
//!
//! ## HAL ↔ XML Mapping
//!
//! | HAL | XML |
//! |-----|-----|
//! | `{"name": "Alice"}` | `<name>Alice</name>` |
//! | `{"active": true}` | `<active>true</active>` |
//! | `{"deleted": null}` | `<deleted></deleted>` |
//! | `{"tag": ["a", "b"]}` | `<tag>a</tag><tag>b</tag>` |
//! | `{"_links": {"next": {"href": "/p/2"}}}` | `<link rel="next" href="/p/2"/>` |
//! | `{"_links": {"self": {"href": "/u/1"}}}` | `<resource rel="self" href="/u/1">` |
//! | `{"_embedded": {"item": {...}}}` | `<resource rel="item" ...>...</resource>` |
//!
//! ## Examples
//!
//! ```rust
//! use hal_render::{Link, Resource, to_xml_string};
//!
//! let resource = Resource::new()
//!     .with_link("self", Link::new("/u/1"))
//!     .with_property("name", "Alice")
//!     .with_property("active", true);
//!
//! let xml = to_xml_string(&resource)?;
//! assert!(xml.contains("<resource rel=\"self\" href=\"/u/1\">"));
//! assert!(xml.contains("<active>true</active>"));
//! # Ok::<(), hal_render::HalError>(())
//! ```
//!
//! Resources can also come straight from JSON:
//!
//! ```rust
//! use hal_render::{HalFormat, RenderOptions, Renderer, Resource};
//!
//! let resource = Resource::try_from(serde_json::json!({
//!     "_links": {"self": {"href": "/orders/1"}},
//!     "total": 30
//! }))?;
//!
//! let renderer = HalFormat::Xml.renderer(RenderOptions::default().with_indent(0));
//! let xml = renderer.render(&resource)?;
//! assert!(xml.ends_with("<resource rel=\"self\" href=\"/orders/1\"><total>30</total></resource>"));
//! # Ok::<(), hal_render::HalError>(())
//! ```

pub mod config;
pub mod error;
pub mod json;
pub mod normalize;
pub mod render;
pub mod resource;
pub mod value;
pub mod xml;

// Re-export common types and functions
pub use config::RenderOptions;
pub use error::{HalError, Result};
pub use json::{JsonRenderer, to_json_string};
pub use render::{HalFormat, Renderer};
pub use resource::{Link, Resource};
pub use value::{Map, Scalar, Value, ValueKind};
pub use xml::{XmlRenderer, to_xml_string};
