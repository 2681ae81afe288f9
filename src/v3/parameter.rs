//! # Parameter and Header Objects
//!
//! Describes a single operation parameter, uniquely identified by the
//! combination of `name` and location (`in`). The Header Object follows
//! the same structure minus the two identifying fields.

use crate::v3::extensions::{impl_extensible, Extensions};
use crate::v3::media::{Example, MediaType};
use crate::v3::reference::RefOr;
use crate::v3::schema::Schema;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single operation parameter.
///
/// Spec validity requires `required: true` when `in` is `"path"`, and at
/// most one of `schema`/`content` to be set; both are caller contracts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// REQUIRED. The name of the parameter. Case sensitive.
    pub name: String,

    /// REQUIRED. The location of the parameter: `"query"`, `"header"`,
    /// `"path"` or `"cookie"`.
    #[serde(rename = "in")]
    pub location: String,

    /// A brief description of the parameter. CommonMark syntax MAY be
    /// used for rich text representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Determines whether this parameter is mandatory. Default value is
    /// `false`; MUST be `true` for path parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Specifies that the parameter is deprecated and SHOULD be
    /// transitioned out of usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,

    /// Sets the ability to pass empty-valued parameters. Valid only for
    /// query parameters.
    #[serde(rename = "allowEmptyValue", skip_serializing_if = "Option::is_none")]
    pub allow_empty_value: Option<bool>,

    /// Describes how the parameter value is serialized (`form`,
    /// `simple`, `deepObject`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    /// When `true`, array or object values generate separate parameters
    /// per item/property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explode: Option<bool>,

    /// Allows RFC 3986 reserved characters to pass unescaped. Valid only
    /// for query parameters.
    #[serde(rename = "allowReserved", skip_serializing_if = "Option::is_none")]
    pub allow_reserved: Option<bool>,

    /// The schema defining the type used for the parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<RefOr<Schema>>,

    /// Example of the parameter's potential value; SHOULD match the
    /// schema. Mutually exclusive with `examples`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,

    /// Named examples of the parameter's potential value. Mutually
    /// exclusive with `example`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<IndexMap<String, RefOr<Example>>>,

    /// A map containing the representations for the parameter, keyed by
    /// media type. Alternative to `schema` for complex serialization
    /// scenarios.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, MediaType>>,

    /// Specification extensions (`x-...`).
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Parameter {
    /// Creates a parameter with the required name and location.
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            ..Default::default()
        }
    }

    /// Sets the parameter schema.
    pub fn with_schema(mut self, schema: impl Into<RefOr<Schema>>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Marks the parameter as mandatory.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }
}

/// A response or encoding header.
///
/// Follows the structure of [`Parameter`], except that `name` is given
/// by the containing map key and `in` is implicitly `"header"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// A brief description of the header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Determines whether this header is mandatory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Specifies that the header is deprecated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,

    /// Serialization style; only `"simple"` is valid for headers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    /// Explode modifier for array/object values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explode: Option<bool>,

    /// The schema defining the type used for the header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<RefOr<Schema>>,

    /// Example of the header's potential value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,

    /// Named examples of the header's potential value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<IndexMap<String, RefOr<Example>>>,

    /// Representations of the header, keyed by media type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, MediaType>>,

    /// Specification extensions (`x-...`).
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl From<Parameter> for RefOr<Parameter> {
    fn from(parameter: Parameter) -> Self {
        RefOr::Item(parameter)
    }
}

impl From<Header> for RefOr<Header> {
    fn from(header: Header) -> Self {
        RefOr::Item(header)
    }
}

impl_extensible!(Parameter, Header);
