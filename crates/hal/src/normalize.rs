//! Textual form of scalar constants.

use std::borrow::Cow;

use crate::value::Scalar;

/// Converts a scalar to the text written into attributes and leaf elements.
///
/// `true` and `false` become their names, `null` becomes the empty string.
/// Strings pass through untouched and numbers keep their own textual form.
pub fn normalize(scalar: &Scalar) -> Cow<'_, str> {
    match scalar {
        Scalar::Bool(true) => Cow::Borrowed("true"),
        Scalar::Bool(false) => Cow::Borrowed("false"),
        Scalar::Null => Cow::Borrowed(""),
        Scalar::String(s) => Cow::Borrowed(s.as_str()),
        Scalar::Number(n) => Cow::Owned(n.to_string()),
    }
}
