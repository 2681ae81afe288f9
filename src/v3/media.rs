//! # Payload Objects
//!
//! Media types, encodings, examples and request bodies: the objects that
//! describe how payloads are shaped on the wire.

use crate::v3::extensions::{impl_extensible, Extensions};
use crate::v3::parameter::Header;
use crate::v3::reference::RefOr;
use crate::v3::schema::Schema;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single media type representation (e.g. `application/json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    /// The schema defining the content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<RefOr<Schema>>,

    /// Example of the media type; SHOULD match the schema. Mutually
    /// exclusive with `examples`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,

    /// Named examples of the media type. Mutually exclusive with
    /// `example`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<IndexMap<String, RefOr<Example>>>,

    /// Encoding per property. Applies only to `requestBody` content of
    /// `multipart` or `application/x-www-form-urlencoded` media types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<IndexMap<String, Encoding>>,

    /// Specification extensions (`x-...`).
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl MediaType {
    /// Creates a media type carrying the given schema.
    pub fn new(schema: impl Into<RefOr<Schema>>) -> Self {
        Self {
            schema: Some(schema.into()),
            ..Default::default()
        }
    }
}

/// Encoding definition for a single schema property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Encoding {
    /// Content-Type for the encoded property.
    #[serde(rename = "contentType", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Additional headers, e.g. `Content-Disposition`. `Content-Type`
    /// is described separately and SHALL be ignored here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<IndexMap<String, RefOr<Header>>>,

    /// Serialization style, as in the Parameter Object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    /// Explode modifier, as in the Parameter Object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explode: Option<bool>,

    /// Allows RFC 3986 reserved characters to pass unescaped.
    #[serde(rename = "allowReserved", skip_serializing_if = "Option::is_none")]
    pub allow_reserved: Option<bool>,

    /// Specification extensions (`x-...`).
    #[serde(flatten)]
    pub extensions: Extensions,
}

/// A grouped example with optional metadata.
///
/// `value` and `externalValue` are mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Example {
    /// Short description for the example.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Long description for the example. CommonMark syntax MAY be used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Embedded literal example. Examples that cannot be naturally
    /// represented in JSON or YAML can be supplied as a string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// A URL pointing to the example, for values that cannot easily be
    /// included in the document.
    #[serde(rename = "externalValue", skip_serializing_if = "Option::is_none")]
    pub external_value: Option<String>,

    /// Specification extensions (`x-...`).
    #[serde(flatten)]
    pub extensions: Extensions,
}

/// A single request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    /// A brief description of the request body. CommonMark syntax MAY
    /// be used for rich text representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// REQUIRED. The content of the request body, keyed by media type
    /// or media type range; `text/plain` overrides `text/*`.
    pub content: IndexMap<String, MediaType>,

    /// Determines if the request body is required. Defaults to `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Specification extensions (`x-...`).
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl RequestBody {
    /// Creates a request body with a single media type entry.
    pub fn new(media_type: impl Into<String>, content: MediaType) -> Self {
        let mut map = IndexMap::new();
        map.insert(media_type.into(), content);
        Self {
            description: None,
            content: map,
            required: None,
            extensions: Extensions::new(),
        }
    }
}

impl_extensible!(MediaType, Encoding, Example, RequestBody);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_media_type_with_schema_ref() {
        let media = MediaType::new(RefOr::<Schema>::reference("#/components/schemas/Pet"));
        let value = serde_json::to_value(&media).unwrap();
        assert_eq!(
            value,
            json!({"schema": {"$ref": "#/components/schemas/Pet"}})
        );
    }

    #[test]
    fn test_request_body_round_trip() {
        let body = RequestBody {
            required: Some(true),
            ..RequestBody::new("application/json", MediaType::new(Schema::new("object")))
        };
        let s = serde_json::to_string(&body).unwrap();
        let back: RequestBody = serde_json::from_str(&s).unwrap();
        assert_eq!(back, body);
    }

    #[test]
    fn test_example_external_value_key() {
        let example = Example {
            external_value: Some("https://example.com/pet.json".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&example).unwrap();
        assert_eq!(
            value,
            json!({"externalValue": "https://example.com/pet.json"})
        );
    }
}
