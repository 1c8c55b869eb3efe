//! HAL+XML rendering.
//!
//! ## Mapping
//!
//! Every resource becomes a `resource` element. Its children are, in order:
//!
//! - one `link` element per link, with `rel` first and then the link's own
//!   attributes in declared order
//! - one nested `resource` element per embedded resource
//! - one element per ordinary property, named after the key
//!
//! **Input**:
//! ```json
//! {
//!   "_links": {
//!     "self": {"href": "/orders/1"},
//!     "customer": {"href": "/customers/7", "title": "Ann"}
//!   },
//!   "total": 30,
//!   "shipped": false,
//!   "items": ["book", "pen"]
//! }
//! ```
//!
//! **Output**:
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <resource rel="self" href="/orders/1">
//!   <link rel="customer" href="/customers/7" title="Ann"/>
//!   <total>30</total>
//!   <shipped>false</shipped>
//!   <items>book</items>
//!   <items>pen</items>
//! </resource>
//! ```
//!
//! ## Self links
//!
//! A single `self` link with an `href` does not produce a `link` element.
//! Its attributes go on the `resource` element itself, with `rel` set to the
//! relation the resource is rendered under (`self` for the root, the
//! embedding relation for embedded resources). Zero or several `self` links,
//! or one without `href`, render as ordinary `link` elements.
//!
//! ## Constants
//!
//! `true`/`false` render as their names and `null` as empty text, both in
//! element text and in attributes.

pub mod links;
pub mod node;
pub mod tree;
pub(crate) mod utils;

use tracing::debug;

use crate::config::RenderOptions;
use crate::error::Result;
use crate::render::{HalFormat, Renderer};
use crate::resource::{Resource, SELF_REL};
use crate::xml::node::Document;
use crate::xml::tree::ResourceTreeBuilder;

pub use node::{Element, NodeBuilder};

/// Renders a resource as a HAL+XML string with default options.
///
/// # Examples
///
/// ```rust
/// use hal_render::{Link, Resource};
/// use hal_render::xml::to_xml_string;
///
/// let resource = Resource::new()
///     .with_link("self", Link::new("/u/1"))
///     .with_property("name", "Alice");
///
/// let xml = to_xml_string(&resource)?;
/// assert_eq!(
///     xml,
///     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
///      <resource rel=\"self\" href=\"/u/1\">\n  \
///      <name>Alice</name>\n\
///      </resource>"
/// );
/// # Ok::<(), hal_render::HalError>(())
/// ```
pub fn to_xml_string(resource: &Resource) -> Result<String> {
    XmlRenderer::default().render(resource)
}

/// Builds the in-memory document for a resource without serializing it.
pub fn build_document(resource: &Resource, options: &RenderOptions) -> Result<Document> {
    let mut document = Document::new();
    let root = ResourceTreeBuilder::new(&mut document, options.max_depth)
        .build(resource.as_map(), SELF_REL)?;
    document.set_root(root);
    Ok(document)
}

/// Renderer producing HAL+XML documents.
#[derive(Debug, Clone, Default)]
pub struct XmlRenderer {
    options: RenderOptions,
}

impl XmlRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }
}

impl Renderer for XmlRenderer {
    fn render(&self, resource: &Resource) -> Result<String> {
        let document = build_document(resource, &self.options)?;
        let xml = document.to_xml_string(&self.options)?;
        debug!(
            elements = document.elements_created(),
            bytes = xml.len(),
            "rendered resource as XML"
        );
        Ok(xml)
    }

    fn format(&self) -> HalFormat {
        HalFormat::Xml
    }
}
