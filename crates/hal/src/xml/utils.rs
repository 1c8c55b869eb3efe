//! Element names and XML name checks shared by the XML builders.

/// Element name of every rendered resource, root and embedded alike.
pub const RESOURCE_ELEMENT: &str = "resource";

/// Element name of a rendered link.
pub const LINK_ELEMENT: &str = "link";

/// Attribute carrying the relation name on links and collapsed self links.
pub const REL_ATTRIBUTE: &str = "rel";

/// Attribute carrying the link target.
pub const HREF_ATTRIBUTE: &str = "href";

/// Checks whether `name` can be used as an element or attribute name.
///
/// Namespaces are not supported, so `:` is rejected along with anything that
/// would not survive as an XML `Name`.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
