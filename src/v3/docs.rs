//! # External Documentation and Tags
//!
//! References to documentation hosted outside the document, and the tag
//! metadata used to group operations.

use crate::v3::extensions::{impl_extensible, Extensions};
use serde::{Deserialize, Serialize};

/// A reference to external documentation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalDocumentation {
    /// A short description of the target documentation. CommonMark
    /// syntax MAY be used for rich text representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// REQUIRED. The URL for the target documentation.
    pub url: String,

    /// Specification extensions (`x-...`).
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl ExternalDocumentation {
    /// Creates an external documentation link.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            description: None,
            url: url.into(),
            extensions: Extensions::new(),
        }
    }
}

/// Metadata for a single tag used by the document's operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// REQUIRED. The name of the tag.
    pub name: String,

    /// A short description for the tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Additional external documentation for this tag.
    #[serde(rename = "externalDocs", skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,

    /// Specification extensions (`x-...`).
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Tag {
    /// Creates a tag with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl_extensible!(ExternalDocumentation, Tag);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_external_docs_shape() {
        let docs = ExternalDocumentation::new("https://example.com/docs");
        let value = serde_json::to_value(&docs).unwrap();
        assert_eq!(value, json!({"url": "https://example.com/docs"}));
    }

    #[test]
    fn test_tag_with_external_docs() {
        let tag = Tag {
            description: Some("Pet operations".into()),
            external_docs: Some(ExternalDocumentation::new("https://example.com/pets")),
            ..Tag::new("pets")
        };
        let value = serde_json::to_value(&tag).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "pets",
                "description": "Pet operations",
                "externalDocs": {"url": "https://example.com/pets"},
            })
        );
    }
}
