#![deny(missing_docs)]

//! # Response Objects
//!
//! The Responses container maps HTTP status codes (and the `default`
//! slot) to response definitions, with support for specification
//! extensions at the map level. Also home to `Link` and `Callback`.

use crate::v3::extensions::{impl_extensible, Extensions};
use crate::v3::media::MediaType;
use crate::v3::parameter::Header;
use crate::v3::paths::PathItem;
use crate::v3::reference::RefOr;
use crate::v3::server::Server;
use indexmap::IndexMap;
use serde::de::Error as DeError;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// The expected responses of an operation.
///
/// Spec validity requires at least one entry, which SHOULD include a
/// successful response; not enforced here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Responses {
    /// The documentation of responses other than the ones declared for
    /// specific HTTP status codes.
    pub default: Option<RefOr<Response>>,

    /// Responses keyed by HTTP status code (`"200"`) or range
    /// (`"2XX"`), quoted per the spec.
    pub statuses: IndexMap<String, RefOr<Response>>,

    /// Spec extensions attached to the Responses Object (`x-...`).
    pub extensions: Extensions,
}

impl Responses {
    /// Creates a container with a single status entry.
    pub fn new(status: impl Into<String>, response: impl Into<RefOr<Response>>) -> Self {
        let mut statuses = IndexMap::new();
        statuses.insert(status.into(), response.into());
        Self {
            default: None,
            statuses,
            extensions: Extensions::new(),
        }
    }

    /// Adds a status entry.
    pub fn with_status(
        mut self,
        status: impl Into<String>,
        response: impl Into<RefOr<Response>>,
    ) -> Self {
        self.statuses.insert(status.into(), response.into());
        self
    }

    /// Sets the `default` slot.
    pub fn with_default(mut self, response: impl Into<RefOr<Response>>) -> Self {
        self.default = Some(response.into());
        self
    }
}

impl Serialize for Responses {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len =
            self.default.is_some() as usize + self.statuses.len() + self.extensions.len();
        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(default) = &self.default {
            map.serialize_entry("default", default)?;
        }
        for (status, response) in &self.statuses {
            map.serialize_entry(status, response)?;
        }
        for (key, value) in self.extensions.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Responses {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        let mut out = Responses::default();

        for (key, value) in raw {
            if key.starts_with("x-") {
                out.extensions.insert(key, value);
                continue;
            }
            let response = serde_json::from_value::<RefOr<Response>>(value).map_err(|e| {
                DeError::custom(format!("Failed to parse response '{}': {}", key, e))
            })?;
            if key == "default" {
                out.default = Some(response);
            } else {
                out.statuses.insert(key, response);
            }
        }

        Ok(out)
    }
}

/// A single response from an API operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// REQUIRED. A short description of the response. CommonMark syntax
    /// MAY be used for rich text representation.
    pub description: String,

    /// Headers sent with the response, keyed by header name
    /// (case-insensitive; `Content-Type` SHALL be ignored).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<IndexMap<String, RefOr<Header>>>,

    /// Potential response payloads, keyed by media type or range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, MediaType>>,

    /// Links that can be followed from the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<IndexMap<String, RefOr<Link>>>,

    /// Specification extensions (`x-...`).
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Response {
    /// Creates a response with the required description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    /// Adds a payload definition for one media type.
    pub fn with_content(mut self, media_type: impl Into<String>, content: MediaType) -> Self {
        self.content
            .get_or_insert_with(IndexMap::new)
            .insert(media_type.into(), content);
        self
    }
}

impl From<Response> for RefOr<Response> {
    fn from(response: Response) -> Self {
        RefOr::Item(response)
    }
}

/// A design-time link to another operation.
///
/// `operationRef` and `operationId` are mutually exclusive; parameter
/// values may be constants or runtime expressions, carried here as
/// free-form JSON values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// A relative or absolute reference to an OAS operation. Mutually
    /// exclusive with `operationId`.
    #[serde(rename = "operationRef", skip_serializing_if = "Option::is_none")]
    pub operation_ref: Option<String>,

    /// The name of an existing, resolvable OAS operation. Mutually
    /// exclusive with `operationRef`.
    #[serde(rename = "operationId", skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,

    /// Parameters to pass to the linked operation, keyed by parameter
    /// name. Values are constants or runtime expressions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<IndexMap<String, Value>>,

    /// A constant or runtime expression used as the request body when
    /// calling the target operation.
    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<Value>,

    /// A description of the link. CommonMark syntax MAY be used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// A server object to be used by the target operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<Server>,

    /// Specification extensions (`x-...`).
    #[serde(flatten)]
    pub extensions: Extensions,
}

/// A callback definition: a map of runtime expressions to the path item
/// describing the out-of-band request.
pub type Callback = IndexMap<String, PathItem>;

impl_extensible!(Response, Link);
