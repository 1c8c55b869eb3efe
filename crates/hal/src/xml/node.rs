//! Node building capability and the in-memory XML document.
//!
//! The tree builders never create elements directly; they go through a
//! [`NodeBuilder`] passed in by `&mut`, the way a DOM document hands out
//! nodes. [`Document`] is the implementation used for rendering: it keeps
//! the element tree in memory and serializes it with quick-xml.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::config::RenderOptions;
use crate::error::{HalError, Result};
use crate::xml::utils;

/// Element creation primitives used by the XML tree builders.
pub trait NodeBuilder {
    type Node;

    /// Creates an element with no attributes and no content.
    fn create_element(&mut self, name: &str) -> Result<Self::Node>;

    /// Creates a leaf element holding `text`, which may be empty.
    fn create_text_element(&mut self, name: &str, text: &str) -> Result<Self::Node>;

    /// Sets an attribute. Setting an existing name replaces its value in place.
    fn set_attribute(&mut self, node: &mut Self::Node, name: &str, value: &str) -> Result<()>;

    fn append_child(&mut self, parent: &mut Self::Node, child: Self::Node);
}

/// An element of the rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes in the order they were first set.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = value.to_string(),
            None => self
                .attributes
                .push((name.to_string(), value.to_string())),
        }
    }
}

/// In-memory XML document (version 1.0, UTF-8).
#[derive(Debug, Default)]
pub struct Document {
    root: Option<Element>,
    elements_created: usize,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_root(&mut self, root: Element) {
        self.root = Some(root);
    }

    pub fn root(&self) -> Option<&Element> {
        self.root.as_ref()
    }

    /// Number of elements handed out by this document so far.
    pub fn elements_created(&self) -> usize {
        self.elements_created
    }

    /// Serializes the document to `writer`.
    pub fn write_to<W: Write>(&self, writer: W, options: &RenderOptions) -> Result<()> {
        let mut writer = if options.indent > 0 {
            Writer::new_with_indent(writer, b' ', options.indent)
        } else {
            Writer::new(writer)
        };

        if options.xml_declaration {
            writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        }

        if let Some(root) = &self.root {
            write_element(&mut writer, root)?;
        }

        Ok(())
    }

    /// Serializes the document to a string with trailing whitespace removed.
    pub fn to_xml_string(&self, options: &RenderOptions) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer, options)?;
        let xml = String::from_utf8(buffer)?;
        Ok(xml.trim_end().to_string())
    }

    fn checked_element(&mut self, name: &str) -> Result<Element> {
        if !utils::is_valid_name(name) {
            return Err(HalError::InvalidName(name.to_string()));
        }
        self.elements_created += 1;
        Ok(Element::new(name))
    }
}

impl NodeBuilder for Document {
    type Node = Element;

    fn create_element(&mut self, name: &str) -> Result<Element> {
        self.checked_element(name)
    }

    fn create_text_element(&mut self, name: &str, text: &str) -> Result<Element> {
        let mut element = self.checked_element(name)?;
        element.text = Some(text.to_string());
        Ok(element)
    }

    fn set_attribute(&mut self, node: &mut Element, name: &str, value: &str) -> Result<()> {
        if !utils::is_valid_name(name) {
            return Err(HalError::InvalidName(name.to_string()));
        }
        node.set_attribute(name, value);
        Ok(())
    }

    fn append_child(&mut self, parent: &mut Element, child: Element) {
        parent.children.push(child);
    }
}

/// Writes one element and its subtree.
///
/// Elements with neither text nor children are written as empty tags; text
/// elements always get a start and end tag, even when the text is empty.
/// Quotes in text content are left as they are.
fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.text.is_none() && element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if let Some(text) = &element.text {
        writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
    }
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> RenderOptions {
        RenderOptions::default()
    }

    #[test]
    fn test_set_attribute_replaces_in_place() -> Result<()> {
        let mut doc = Document::new();
        let mut element = doc.create_element("link")?;
        doc.set_attribute(&mut element, "rel", "self")?;
        doc.set_attribute(&mut element, "href", "/a")?;
        doc.set_attribute(&mut element, "rel", "other")?;

        let names: Vec<_> = element.attributes().iter().map(|(n, v)| (n.as_str(), v.as_str())).collect();
        assert_eq!(names, vec![("rel", "other"), ("href", "/a")]);
        Ok(())
    }

    #[test]
    fn test_invalid_names_rejected() {
        let mut doc = Document::new();
        assert!(matches!(
            doc.create_element("1abc"),
            Err(HalError::InvalidName(ref name)) if name == "1abc"
        ));
        assert_eq!(doc.elements_created(), 0);
    }

    #[test]
    fn test_serialize_indented() -> Result<()> {
        let mut doc = Document::new();
        let mut root = doc.create_element("resource")?;
        doc.set_attribute(&mut root, "rel", "self")?;
        let name = doc.create_text_element("name", "Alice")?;
        let empty = doc.create_text_element("deleted", "")?;
        let link = doc.create_element("link")?;
        doc.append_child(&mut root, name);
        doc.append_child(&mut root, empty);
        doc.append_child(&mut root, link);
        doc.set_root(root);

        let xml = doc.to_xml_string(&options())?;
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <resource rel=\"self\">\n  \
             <name>Alice</name>\n  \
             <deleted></deleted>\n  \
             <link/>\n\
             </resource>"
        );
        Ok(())
    }

    #[test]
    fn test_serialize_escapes_text_and_attributes() -> Result<()> {
        let mut doc = Document::new();
        let mut root = doc.create_element("resource")?;
        doc.set_attribute(&mut root, "href", "/a?x=1&y=<2>")?;
        let child = doc.create_text_element("expr", "a < b & c")?;
        doc.append_child(&mut root, child);
        doc.set_root(root);

        let xml = doc.to_xml_string(&options().with_xml_declaration(false))?;
        assert!(xml.contains("href=\"/a?x=1&amp;y=&lt;2&gt;\""));
        assert!(xml.contains("<expr>a &lt; b &amp; c</expr>"));
        Ok(())
    }

    #[test]
    fn test_text_keeps_quotes() -> Result<()> {
        let mut doc = Document::new();
        let mut root = doc.create_element("resource")?;
        doc.set_attribute(&mut root, "title", "O'Brien")?;
        let child = doc.create_text_element("name", "O'Brien \"Jr\" <b> & co")?;
        doc.append_child(&mut root, child);
        doc.set_root(root);

        let xml = doc.to_xml_string(&options().with_indent(0).with_xml_declaration(false))?;
        assert_eq!(
            xml,
            "<resource title=\"O&apos;Brien\"><name>O'Brien \"Jr\" &lt;b&gt; &amp; co</name></resource>"
        );
        Ok(())
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_reported_as_io() -> Result<()> {
        let mut doc = Document::new();
        let root = doc.create_element("resource")?;
        doc.set_root(root);

        let err = doc.write_to(FailingWriter, &options()).unwrap_err();
        assert!(matches!(err, HalError::Io(_)));
        Ok(())
    }

    #[test]
    fn test_serialize_compact() -> Result<()> {
        let mut doc = Document::new();
        let mut root = doc.create_element("resource")?;
        let child = doc.create_text_element("id", "7")?;
        doc.append_child(&mut root, child);
        doc.set_root(root);

        let xml = doc.to_xml_string(&options().with_indent(0).with_xml_declaration(false))?;
        assert_eq!(xml, "<resource><id>7</id></resource>");
        Ok(())
    }
}
