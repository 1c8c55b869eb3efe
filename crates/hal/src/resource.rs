//! HAL resources and links on top of the value model.
//!
//! A resource is a [`Map`] with two reserved keys, `_links` and `_embedded`.
//! [`ResourceParts`] splits a resource map into those sections and its
//! ordinary properties by reference, so rendering never touches caller data.

use crate::error::{HalError, Result};
use crate::value::{Map, Value};

/// Reserved key holding the link relations of a resource.
pub const LINKS_KEY: &str = "_links";

/// Reserved key holding the embedded resources of a resource.
pub const EMBEDDED_KEY: &str = "_embedded";

/// Relation name of a resource's own canonical link.
pub const SELF_REL: &str = "self";

/// A single link: attribute name to scalar, conventionally with `href`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Link {
    attributes: Map,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        let mut attributes = Map::new();
        attributes.insert("href", href.into());
        Self { attributes }
    }

    /// Adds an extra attribute such as `title` or `type`.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    pub fn attributes(&self) -> &Map {
        &self.attributes
    }
}

impl From<Link> for Value {
    fn from(link: Link) -> Self {
        Value::Map(link.attributes)
    }
}

impl From<Map> for Link {
    fn from(attributes: Map) -> Self {
        Self { attributes }
    }
}

/// A HAL resource: properties plus `_links` and `_embedded` sections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resource {
    map: Map,
}

impl Resource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.map.insert(key, value);
        self
    }

    /// Sets the single link for `rel`, replacing anything already there.
    pub fn with_link(mut self, rel: impl Into<String>, link: Link) -> Self {
        self.section_mut(LINKS_KEY).insert(rel, link);
        self
    }

    /// Sets a list of links for `rel`. The relation always renders as a
    /// list, even with a single element.
    pub fn with_links(mut self, rel: impl Into<String>, links: Vec<Link>) -> Self {
        let links: Vec<Value> = links.into_iter().map(Value::from).collect();
        self.section_mut(LINKS_KEY).insert(rel, links);
        self
    }

    pub fn with_embedded(mut self, rel: impl Into<String>, resource: Resource) -> Self {
        self.section_mut(EMBEDDED_KEY).insert(rel, resource);
        self
    }

    pub fn with_embedded_list(mut self, rel: impl Into<String>, resources: Vec<Resource>) -> Self {
        let resources: Vec<Value> = resources.into_iter().map(Value::from).collect();
        self.section_mut(EMBEDDED_KEY).insert(rel, resources);
        self
    }

    pub fn as_map(&self) -> &Map {
        &self.map
    }

    pub fn into_map(self) -> Map {
        self.map
    }

    fn section_mut(&mut self, key: &str) -> &mut Map {
        if !matches!(self.map.get(key), Some(Value::Map(_))) {
            self.map.insert(key, Map::new());
        }
        match self.map.get_mut(key) {
            Some(Value::Map(section)) => section,
            _ => unreachable!("reserved section was just inserted as a map"),
        }
    }
}

impl From<Map> for Resource {
    fn from(map: Map) -> Self {
        Self { map }
    }
}

impl From<Resource> for Value {
    fn from(resource: Resource) -> Self {
        Value::Map(resource.map)
    }
}

impl TryFrom<Value> for Resource {
    type Error = HalError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Map(map) => Ok(Self { map }),
            other => Err(HalError::invalid_value("resource", &other)),
        }
    }
}

impl TryFrom<serde_json::Value> for Resource {
    type Error = HalError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        Resource::try_from(Value::from(value))
    }
}

/// Borrowed view of a resource map split into its reserved sections and the
/// remaining ordinary properties.
#[derive(Debug, Clone)]
pub struct ResourceParts<'a> {
    pub links: Option<&'a Map>,
    pub embedded: Option<&'a Map>,
    map: &'a Map,
}

impl<'a> ResourceParts<'a> {
    /// Splits `map`. Reserved sections that are present must be maps.
    pub fn split(map: &'a Map) -> Result<Self> {
        Ok(Self {
            links: reserved_section(map, LINKS_KEY)?,
            embedded: reserved_section(map, EMBEDDED_KEY)?,
            map,
        })
    }

    /// Ordinary properties in declared order, skipping reserved keys.
    pub fn properties(&self) -> impl Iterator<Item = (&'a str, &'a Value)> + 'a {
        self.map
            .iter()
            .filter(|(key, _)| *key != LINKS_KEY && *key != EMBEDDED_KEY)
    }
}

fn reserved_section<'a>(map: &'a Map, key: &str) -> Result<Option<&'a Map>> {
    match map.get(key) {
        None => Ok(None),
        Some(Value::Map(section)) => Ok(Some(section)),
        Some(other) => Err(HalError::invalid_value(key, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_populates_reserved_sections() {
        let resource = Resource::new()
            .with_property("name", "Alice")
            .with_link("self", Link::new("/u/1"))
            .with_links("friends", vec![Link::new("/u/2"), Link::new("/u/3")])
            .with_embedded("manager", Resource::new().with_property("name", "Bob"));

        let parts = ResourceParts::split(resource.as_map()).unwrap();
        let links = parts.links.unwrap();
        assert_eq!(links.keys().collect::<Vec<_>>(), vec!["self", "friends"]);
        assert_eq!(links.get("friends").and_then(Value::as_list).map(|l| l.len()), Some(2));
        assert!(parts.embedded.unwrap().contains_key("manager"));
    }

    #[test]
    fn test_properties_skip_reserved_keys() {
        let resource = Resource::try_from(json!({
            "id": 1,
            "_links": {},
            "name": "x",
            "_embedded": {},
        }))
        .unwrap();

        let parts = ResourceParts::split(resource.as_map()).unwrap();
        let keys: Vec<_> = parts.properties().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["id", "name"]);
        // The caller's map still holds every key.
        assert_eq!(resource.as_map().len(), 4);
    }

    #[test]
    fn test_scalar_links_section_is_invalid() {
        let resource = Resource::try_from(json!({"_links": "nope"})).unwrap();
        let err = ResourceParts::split(resource.as_map()).unwrap_err();
        assert!(matches!(err, HalError::InvalidValue { ref key, .. } if key == "_links"));
    }

    #[test]
    fn test_non_map_resource_rejected() {
        assert!(Resource::try_from(json!(["a"])).is_err());
    }
}
