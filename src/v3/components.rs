//! # Components Object
//!
//! Holds reusable objects for the rest of the document. Objects defined
//! here have no effect on the API unless explicitly referenced.

use crate::v3::extensions::{impl_extensible, Extensions};
use crate::v3::media::{Example, RequestBody};
use crate::v3::parameter::{Header, Parameter};
use crate::v3::reference::RefOr;
use crate::v3::responses::{Callback, Link, Response};
use crate::v3::schema::Schema;
use crate::v3::security::SecurityScheme;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Reusable component definitions, each keyed by a component name
/// matching `^[a-zA-Z0-9.\-_]+$`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Components {
    /// Reusable Schema Objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemas: Option<IndexMap<String, RefOr<Schema>>>,

    /// Reusable Response Objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<IndexMap<String, RefOr<Response>>>,

    /// Reusable Parameter Objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<IndexMap<String, RefOr<Parameter>>>,

    /// Reusable Example Objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<IndexMap<String, RefOr<Example>>>,

    /// Reusable Request Body Objects.
    #[serde(rename = "requestBodies", skip_serializing_if = "Option::is_none")]
    pub request_bodies: Option<IndexMap<String, RefOr<RequestBody>>>,

    /// Reusable Header Objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<IndexMap<String, RefOr<Header>>>,

    /// Reusable Security Scheme Objects.
    #[serde(rename = "securitySchemes", skip_serializing_if = "Option::is_none")]
    pub security_schemes: Option<IndexMap<String, RefOr<SecurityScheme>>>,

    /// Reusable Link Objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<IndexMap<String, RefOr<Link>>>,

    /// Reusable Callback Objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callbacks: Option<IndexMap<String, RefOr<Callback>>>,

    /// Specification extensions (`x-...`).
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Components {
    /// Creates an empty Components Object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named schema definition.
    pub fn with_schema(mut self, name: impl Into<String>, schema: impl Into<RefOr<Schema>>) -> Self {
        self.schemas
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), schema.into());
        self
    }
}

impl_extensible!(Components);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_components_serialize_empty() {
        let components = Components::new();
        let s = serde_json::to_string(&components).unwrap();
        assert_eq!(s, "{}");
    }

    #[test]
    fn test_schema_and_reference_entries() {
        let components = Components::new()
            .with_schema("Pet", Schema::new("object"))
            .with_schema("Dog", RefOr::<Schema>::reference("#/components/schemas/Pet"));
        let value = serde_json::to_value(&components).unwrap();
        assert_eq!(
            value,
            json!({
                "schemas": {
                    "Pet": {"type": "object"},
                    "Dog": {"$ref": "#/components/schemas/Pet"},
                },
            })
        );
    }

    #[test]
    fn test_request_bodies_key_name() {
        let components = Components {
            request_bodies: Some(IndexMap::from([(
                "PetBody".to_string(),
                RefOr::<RequestBody>::reference("#/components/requestBodies/Shared"),
            )])),
            ..Default::default()
        };
        let value = serde_json::to_value(&components).unwrap();
        assert!(value.get("requestBodies").is_some());
    }
}
