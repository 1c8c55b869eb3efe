//! Error types for HAL rendering.

use thiserror::Error;

use crate::value::Value;

/// Errors that can occur while rendering a HAL resource.
///
/// Any error aborts the whole render; callers never receive partial output.
#[derive(Error, Debug)]
pub enum HalError {
    /// A value has no representation in the output document.
    ///
    /// `key` names the property, relation or link attribute holding it and
    /// `value` is a short description of what was found there.
    #[error("invalid value for `{key}`: {value}")]
    InvalidValue { key: String, value: String },

    /// A property key or link attribute name is not a valid XML name.
    #[error("invalid XML name: `{0}`")]
    InvalidName(String),

    /// The resource nests deeper than the configured limit.
    #[error("resource nesting exceeds the maximum depth of {limit}")]
    DepthExceeded { limit: usize },

    /// Writing the document failed. quick-xml reports write failures as
    /// `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl HalError {
    /// Builds an [`HalError::InvalidValue`] describing `value` under `key`.
    pub fn invalid_value(key: impl Into<String>, value: &Value) -> Self {
        HalError::InvalidValue {
            key: key.into(),
            value: value.describe(),
        }
    }
}

/// Result type alias for HAL rendering operations.
pub type Result<T> = std::result::Result<T, HalError>;
