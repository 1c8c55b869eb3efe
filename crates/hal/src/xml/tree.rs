//! Recursive construction of `resource` elements.

use tracing::trace;

use crate::error::{HalError, Result};
use crate::normalize::normalize;
use crate::resource::{ResourceParts, SELF_REL};
use crate::value::{Map, Value};
use crate::xml::links::{build_relation_links, inject_self_link};
use crate::xml::node::NodeBuilder;
use crate::xml::utils::RESOURCE_ELEMENT;

/// Builds `resource` elements from resource maps.
///
/// Children of a resource element come in three groups, each in declared
/// order: `link` elements from `_links`, nested `resource` elements from
/// `_embedded`, then one element per ordinary property.
pub struct ResourceTreeBuilder<'b, B: NodeBuilder> {
    builder: &'b mut B,
    max_depth: usize,
}

impl<'b, B: NodeBuilder> ResourceTreeBuilder<'b, B> {
    pub fn new(builder: &'b mut B, max_depth: usize) -> Self {
        Self { builder, max_depth }
    }

    /// Builds the element for `resource` rendered under `relation`.
    ///
    /// The document root is rendered under `self`.
    pub fn build(&mut self, resource: &Map, relation: &str) -> Result<B::Node> {
        self.build_resource(resource, relation, 0)
    }

    fn build_resource(&mut self, resource: &Map, relation: &str, depth: usize) -> Result<B::Node> {
        self.check_depth(depth)?;

        let parts = ResourceParts::split(resource)?;
        let mut node = self.builder.create_element(RESOURCE_ELEMENT)?;

        let no_links = Map::new();
        let links = parts.links.unwrap_or(&no_links);

        let inline_self = inject_self_link(relation, links)?;
        if let Some(inline_self) = &inline_self {
            inline_self.apply(&mut *self.builder, &mut node)?;
        }

        for (rel, value) in links.iter() {
            if rel == SELF_REL && inline_self.is_some() {
                continue;
            }
            for link in build_relation_links(&mut *self.builder, rel, value)? {
                self.builder.append_child(&mut node, link);
            }
        }

        if let Some(embedded) = parts.embedded {
            for (rel, value) in embedded.iter() {
                match value {
                    Value::Map(child) => self.append_embedded(&mut node, child, rel, depth)?,
                    Value::List(items) => {
                        for item in items {
                            match item {
                                Value::Map(child) => {
                                    self.append_embedded(&mut node, child, rel, depth)?
                                }
                                other => return Err(HalError::invalid_value(rel, other)),
                            }
                        }
                    }
                    other => return Err(HalError::invalid_value(rel, other)),
                }
            }
        }

        for (key, value) in parts.properties() {
            self.append_property(&mut node, key, value, depth)?;
        }

        Ok(node)
    }

    fn append_embedded(
        &mut self,
        parent: &mut B::Node,
        resource: &Map,
        relation: &str,
        depth: usize,
    ) -> Result<()> {
        trace!(relation, depth = depth + 1, "rendering embedded resource");
        let child = self.build_resource(resource, relation, depth + 1)?;
        self.builder.append_child(parent, child);
        Ok(())
    }

    /// Appends the element(s) for one ordinary property. Lists expand to one
    /// sibling element per item, all named after `key`.
    fn append_property(
        &mut self,
        parent: &mut B::Node,
        key: &str,
        value: &Value,
        depth: usize,
    ) -> Result<()> {
        match value {
            Value::List(items) => {
                for item in items {
                    if let Value::List(_) = item {
                        return Err(HalError::InvalidValue {
                            key: key.to_string(),
                            value: format!("nested {}", item.describe()),
                        });
                    }
                    let element = self.build_element(key, item, depth)?;
                    self.builder.append_child(parent, element);
                }
            }
            _ => {
                let element = self.build_element(key, value, depth)?;
                self.builder.append_child(parent, element);
            }
        }
        Ok(())
    }

    /// Generic element rule. Maps nest without any `_links`/`_embedded`
    /// handling; that only applies at resource nodes.
    fn build_element(&mut self, key: &str, value: &Value, depth: usize) -> Result<B::Node> {
        match value {
            Value::Scalar(scalar) => self.builder.create_text_element(key, &normalize(scalar)),
            Value::Map(map) => {
                self.check_depth(depth + 1)?;
                let mut node = self.builder.create_element(key)?;
                for (child_key, child_value) in map.iter() {
                    self.append_property(&mut node, child_key, child_value, depth + 1)?;
                }
                Ok(node)
            }
            Value::List(_) | Value::Opaque(_) => Err(HalError::invalid_value(key, value)),
        }
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth >= self.max_depth {
            return Err(HalError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::node::{Document, Element};
    use serde_json::json;

    fn build(value: serde_json::Value) -> Result<Element> {
        let map = match Value::from(value) {
            Value::Map(map) => map,
            other => panic!("expected a map, got {}", other.describe()),
        };
        let mut doc = Document::new();
        ResourceTreeBuilder::new(&mut doc, 8).build(&map, "self")
    }

    fn child_names(element: &Element) -> Vec<&str> {
        element.children().iter().map(Element::name).collect()
    }

    #[test]
    fn test_children_grouped_links_embedded_properties() -> Result<()> {
        let root = build(json!({
            "name": "Alice",
            "_embedded": {"pet": {"kind": "cat"}},
            "_links": {"next": {"href": "/n"}},
        }))?;

        assert_eq!(child_names(&root), vec!["link", "resource", "name"]);
        Ok(())
    }

    #[test]
    fn test_embedded_resource_uses_relation_for_self_link() -> Result<()> {
        let root = build(json!({
            "_embedded": {
                "author": {"_links": {"self": {"href": "/people/1"}}, "name": "Ann"}
            }
        }))?;

        let author = &root.children()[0];
        assert_eq!(author.name(), "resource");
        assert_eq!(author.attribute("rel"), Some("author"));
        assert_eq!(author.attribute("href"), Some("/people/1"));
        assert_eq!(child_names(author), vec!["name"]);
        Ok(())
    }

    #[test]
    fn test_embedded_list_preserves_order() -> Result<()> {
        let root = build(json!({
            "_embedded": {"item": [{"id": 1}, {"id": 2}, {"id": 3}]}
        }))?;

        let ids: Vec<_> = root
            .children()
            .iter()
            .map(|item| item.children()[0].text().unwrap_or_default())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        Ok(())
    }

    #[test]
    fn test_nested_map_does_not_apply_hal_rules() -> Result<()> {
        let root = build(json!({
            "meta": {"_links": {"self": {"href": "/x"}}}
        }))?;

        let meta = &root.children()[0];
        assert_eq!(meta.name(), "meta");
        assert!(meta.attributes().is_empty());
        assert_eq!(child_names(meta), vec!["_links"]);
        Ok(())
    }

    #[test]
    fn test_list_property_repeats_element() -> Result<()> {
        let root = build(json!({"tag": ["a", {"label": "b"}, true]}))?;

        assert_eq!(child_names(&root), vec!["tag", "tag", "tag"]);
        assert_eq!(root.children()[0].text(), Some("a"));
        assert_eq!(child_names(&root.children()[1]), vec!["label"]);
        assert_eq!(root.children()[2].text(), Some("true"));
        Ok(())
    }

    #[test]
    fn test_list_of_lists_rejected() {
        let err = build(json!({"matrix": [[1, 2], [3]]})).unwrap_err();
        match err {
            HalError::InvalidValue { key, value } => {
                assert_eq!(key, "matrix");
                assert_eq!(value, "nested list of 2 item(s)");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_embedded_scalar_rejected() {
        let err = build(json!({"_embedded": {"child": "oops"}})).unwrap_err();
        assert!(matches!(err, HalError::InvalidValue { ref key, .. } if key == "child"));
    }

    #[test]
    fn test_depth_limit() {
        let mut value = json!({"leaf": 1});
        for _ in 0..8 {
            value = json!({"_embedded": {"child": value}});
        }
        assert!(matches!(
            build(value),
            Err(HalError::DepthExceeded { limit: 8 })
        ));
    }

    #[test]
    fn test_generic_maps_count_towards_depth() {
        let mut value = json!("deep");
        for _ in 0..8 {
            value = json!({ "level": value });
        }
        assert!(matches!(
            build(json!({ "root": value })),
            Err(HalError::DepthExceeded { .. })
        ));
    }
}
