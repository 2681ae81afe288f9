#![deny(missing_docs)]

//! # Paths, Path Items and Operations
//!
//! The Paths Object holds the relative paths to individual endpoints.
//! It is a pattern-keyed map (`/path` keys plus `x-` extensions), so it
//! carries custom serde rather than a derived struct shape.

use crate::v3::docs::ExternalDocumentation;
use crate::v3::extensions::{impl_extensible, Extensions};
use crate::v3::media::RequestBody;
use crate::v3::parameter::Parameter;
use crate::v3::reference::RefOr;
use crate::v3::responses::{Callback, Responses};
use crate::v3::security::SecurityRequirement;
use crate::v3::server::Server;
use indexmap::IndexMap;
use serde::de::Error as DeError;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Relative paths to individual endpoints, keyed by path template.
///
/// Keys MUST begin with a slash and are appended to the server URL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paths {
    /// Path items keyed by path template (e.g. `/pets/{petId}`).
    pub items: IndexMap<String, PathItem>,

    /// Spec extensions attached to the Paths Object (`x-...`).
    pub extensions: Extensions,
}

impl Paths {
    /// Creates an empty Paths Object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a path item under the given template.
    pub fn with_path(mut self, template: impl Into<String>, item: PathItem) -> Self {
        self.items.insert(template.into(), item);
        self
    }

    /// Returns true when no path items are present.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Serialize for Paths {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.items.len() + self.extensions.len()))?;
        for (key, value) in &self.items {
            map.serialize_entry(key, value)?;
        }
        for (key, value) in self.extensions.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Paths {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        let mut out = Paths::new();

        for (key, value) in raw {
            if key.starts_with("x-") {
                out.extensions.insert(key, value);
                continue;
            }
            let item = serde_json::from_value::<PathItem>(value).map_err(|e| {
                DeError::custom(format!("Failed to parse path item '{}': {}", key, e))
            })?;
            out.items.insert(key, item);
        }

        Ok(out)
    }
}

/// The operations available on a single path.
///
/// The path itself may still be exposed to documentation tooling when
/// every operation field is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    /// Allows for an external definition of this path item. If there
    /// are conflicts with the referenced structure, the behavior is
    /// undefined.
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub ref_path: Option<String>,

    /// An optional summary intended to apply to all operations in this
    /// path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// An optional description intended to apply to all operations in
    /// this path. CommonMark syntax MAY be used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// A definition of a GET operation on this path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,

    /// A definition of a PUT operation on this path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,

    /// A definition of a POST operation on this path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,

    /// A definition of a DELETE operation on this path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,

    /// A definition of an OPTIONS operation on this path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,

    /// A definition of a HEAD operation on this path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,

    /// A definition of a PATCH operation on this path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,

    /// A definition of a TRACE operation on this path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Operation>,

    /// An alternative server array to service all operations in this
    /// path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<Server>>,

    /// Parameters applicable to all operations under this path. May be
    /// overridden, but not removed, at the operation level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<RefOr<Parameter>>>,

    /// Specification extensions (`x-...`).
    #[serde(flatten)]
    pub extensions: Extensions,
}

/// A single API operation on a path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Tags for API documentation control; used for logical grouping of
    /// operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// A short summary of what the operation does.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// A verbose explanation of the operation behavior. CommonMark
    /// syntax MAY be used for rich text representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Additional external documentation for this operation.
    #[serde(rename = "externalDocs", skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,

    /// Unique string used to identify the operation. MUST be unique
    /// among all operations in the document.
    #[serde(rename = "operationId", skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,

    /// Parameters applicable to this operation; overrides matching
    /// path-item parameters by `name` and `in`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<RefOr<Parameter>>>,

    /// The request body applicable to this operation. Meaningful only
    /// for methods where HTTP 1.1 defines body semantics.
    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RefOr<RequestBody>>,

    /// REQUIRED. The list of possible responses as they are returned
    /// from executing this operation.
    pub responses: Responses,

    /// Possible out-of-band callbacks related to this operation, keyed
    /// by a unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callbacks: Option<IndexMap<String, RefOr<Callback>>>,

    /// Declares this operation deprecated. Default value is `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,

    /// Security mechanisms that can be used for this operation;
    /// overrides any declared top-level `security`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,

    /// An alternative server array to service this operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<Server>>,

    /// Specification extensions (`x-...`).
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Operation {
    /// Creates an operation with the required responses container.
    pub fn new(responses: Responses) -> Self {
        Self {
            responses,
            ..Default::default()
        }
    }

    /// Sets the operation identifier.
    pub fn with_operation_id(mut self, operation_id: impl Into<String>) -> Self {
        self.operation_id = Some(operation_id.into());
        self
    }

    /// Adds a parameter definition.
    pub fn with_parameter(mut self, parameter: impl Into<RefOr<Parameter>>) -> Self {
        self.parameters
            .get_or_insert_with(Vec::new)
            .push(parameter.into());
        self
    }
}

impl_extensible!(PathItem, Operation);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v3::responses::Response;
    use serde_json::json;

    fn list_pets() -> Operation {
        Operation::new(Responses::new("200", Response::new("a paged list of pets")))
            .with_operation_id("listPets")
    }

    #[test]
    fn test_paths_split_extensions_from_items() {
        let yaml = "
/pets:
  get:
    operationId: listPets
    responses:
      '200':
        description: a paged list of pets
x-router: legacy
";
        let paths: Paths = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(paths.items.len(), 1);
        assert_eq!(paths.extensions.get("x-router"), Some(&json!("legacy")));

        let get = paths.items["/pets"].get.as_ref().expect("get expected");
        assert_eq!(get.operation_id.as_deref(), Some("listPets"));
    }

    #[test]
    fn test_paths_serialize_keeps_extensions() {
        let paths = Paths::new().with_path(
            "/pets",
            PathItem {
                get: Some(list_pets()),
                ..Default::default()
            },
        );
        let mut paths = paths;
        paths.extensions.insert("x-router", json!("legacy"));

        let value = serde_json::to_value(&paths).unwrap();
        assert_eq!(value["x-router"], json!("legacy"));
        assert_eq!(
            value["/pets"]["get"]["responses"]["200"]["description"],
            json!("a paged list of pets")
        );
    }

    #[test]
    fn test_operation_requires_responses_key() {
        let op = list_pets();
        let value = serde_json::to_value(&op).unwrap();
        assert_eq!(
            value,
            json!({
                "operationId": "listPets",
                "responses": {"200": {"description": "a paged list of pets"}},
            })
        );
    }

    #[test]
    fn test_path_item_ref_key() {
        let item = PathItem {
            ref_path: Some("shared.yaml#/paths/~1pets".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value, json!({"$ref": "shared.yaml#/paths/~1pets"}));
    }
}
