//! # Reference Object
//!
//! A simple object to allow referencing other components in the
//! specification, internally and externally. Anywhere the spec accepts a
//! "Schema Object or Reference Object", the model uses [`RefOr`].

use serde::{Deserialize, Serialize};

/// A `$ref` pointer to another definition.
///
/// Serializes as the single-key object `{"$ref": "<pointer>"}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    /// The reference string, e.g. `#/components/schemas/Pet`.
    #[serde(rename = "$ref")]
    pub ref_path: String,
}

impl Reference {
    /// Creates a reference from a pointer string.
    pub fn new(ref_path: impl Into<String>) -> Self {
        Self {
            ref_path: ref_path.into(),
        }
    }
}

/// Either an inline object or a reference to one.
///
/// `Ref` is listed first so that untagged deserialization claims any
/// object carrying a `$ref` key as a reference; inline objects never
/// declare that key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RefOr<T> {
    /// A `$ref` pointer.
    Ref(Reference),
    /// An inline object.
    Item(T),
}

impl<T> RefOr<T> {
    /// Wraps an inline object.
    pub fn item(value: T) -> Self {
        RefOr::Item(value)
    }

    /// Wraps a reference pointer.
    pub fn reference(ref_path: impl Into<String>) -> Self {
        RefOr::Ref(Reference::new(ref_path))
    }

    /// Returns the inline object, if this is not a reference.
    pub fn as_item(&self) -> Option<&T> {
        match self {
            RefOr::Item(value) => Some(value),
            RefOr::Ref(_) => None,
        }
    }

    /// Returns the reference, if this is not an inline object.
    pub fn as_ref_path(&self) -> Option<&str> {
        match self {
            RefOr::Ref(reference) => Some(&reference.ref_path),
            RefOr::Item(_) => None,
        }
    }
}

impl<T> From<Reference> for RefOr<T> {
    fn from(reference: Reference) -> Self {
        RefOr::Ref(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v3::schema::Schema;

    #[test]
    fn test_reference_shape() {
        let r = Reference::new("#/components/schemas/Pet");
        let s = serde_json::to_string(&r).unwrap();
        assert_eq!(s, "{\"$ref\":\"#/components/schemas/Pet\"}");
    }

    #[test]
    fn test_ref_or_picks_reference() {
        let parsed: RefOr<Schema> =
            serde_json::from_str("{\"$ref\":\"#/components/schemas/Pet\"}").unwrap();
        assert_eq!(parsed.as_ref_path(), Some("#/components/schemas/Pet"));
    }

    #[test]
    fn test_ref_or_picks_inline_item() {
        let parsed: RefOr<Schema> = serde_json::from_str("{\"type\":\"string\"}").unwrap();
        let schema = parsed.as_item().expect("inline schema expected");
        assert_eq!(schema.schema_type.as_deref(), Some("string"));
    }
}
