//! `link` elements and self-link collapsing.

use std::borrow::Cow;

use tracing::debug;

use crate::error::{HalError, Result};
use crate::normalize::normalize;
use crate::resource::SELF_REL;
use crate::value::{Map, Scalar, Value};
use crate::xml::node::NodeBuilder;
use crate::xml::utils::{HREF_ATTRIBUTE, LINK_ELEMENT, REL_ATTRIBUTE};

/// Builds one `link` element: `rel` first, then the link's own attributes in
/// declared order.
pub fn build_link<B: NodeBuilder>(builder: &mut B, relation: &str, link: &Map) -> Result<B::Node> {
    let mut node = builder.create_element(LINK_ELEMENT)?;
    builder.set_attribute(&mut node, REL_ATTRIBUTE, relation)?;
    for (name, value) in link.iter() {
        let text = attribute_text(name, value)?;
        builder.set_attribute(&mut node, name, &text)?;
    }
    Ok(node)
}

/// Builds the `link` elements for one `_links` relation.
///
/// A map is a single link; a list yields one element per link, in order.
pub fn build_relation_links<B: NodeBuilder>(
    builder: &mut B,
    relation: &str,
    value: &Value,
) -> Result<Vec<B::Node>> {
    match value {
        Value::Map(link) => Ok(vec![build_link(builder, relation, link)?]),
        Value::List(items) => items
            .iter()
            .map(|item| match item {
                Value::Map(link) => build_link(builder, relation, link),
                other => Err(HalError::invalid_value(relation, other)),
            })
            .collect(),
        other => Err(HalError::invalid_value(relation, other)),
    }
}

/// Attributes taken from a collapsed self link, to be set on the owning
/// `resource` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSelfLink {
    attributes: Vec<(String, String)>,
}

impl InlineSelfLink {
    /// `rel`, `href`, then the remaining link attributes in declared order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn apply<B: NodeBuilder>(&self, builder: &mut B, node: &mut B::Node) -> Result<()> {
        for (name, value) in &self.attributes {
            builder.set_attribute(node, name, value)?;
        }
        Ok(())
    }
}

/// Decides whether the `self` link of a resource collapses into attributes.
///
/// Only a single link with a non-null `href` qualifies, whether it is given
/// directly or as a one-element list. Anything else returns `None` and is
/// left to ordinary link rendering. `relation` is the name the resource is
/// rendered under: `self` at the root, the embedding relation otherwise.
pub fn inject_self_link(relation: &str, links: &Map) -> Result<Option<InlineSelfLink>> {
    let link = match links.get(SELF_REL) {
        Some(Value::Map(link)) => link,
        Some(Value::List(items)) => match items.as_slice() {
            [Value::Map(link)] => link,
            _ => return Ok(None),
        },
        _ => return Ok(None),
    };

    let href = match link.get(HREF_ATTRIBUTE) {
        None | Some(Value::Scalar(Scalar::Null)) => return Ok(None),
        Some(href) => attribute_text(HREF_ATTRIBUTE, href)?,
    };

    let mut attributes = Vec::with_capacity(link.len() + 1);
    attributes.push((REL_ATTRIBUTE.to_string(), relation.to_string()));
    attributes.push((HREF_ATTRIBUTE.to_string(), href.into_owned()));
    for (name, value) in link.iter().filter(|(name, _)| *name != HREF_ATTRIBUTE) {
        attributes.push((name.to_string(), attribute_text(name, value)?.into_owned()));
    }

    debug!(relation, "collapsing self link into resource attributes");
    Ok(Some(InlineSelfLink { attributes }))
}

fn attribute_text<'v>(name: &str, value: &'v Value) -> Result<Cow<'v, str>> {
    match value {
        Value::Scalar(scalar) => Ok(normalize(scalar)),
        other => Err(HalError::invalid_value(name, other)),
    }
}
