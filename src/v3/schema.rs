#![deny(missing_docs)]

//! # Schema Object
//!
//! The Schema Object allows the definition of input and output data
//! types. These types can be objects, but also primitives and arrays.
//! It is an extended subset of JSON Schema Specification Wright Draft 00;
//! unless stated otherwise the field definitions follow JSON Schema.
//!
//! Any time a Schema Object can be used, a Reference Object can be used
//! in its place, which is what [`RefOr<Schema>`] models.

use crate::v3::docs::ExternalDocumentation;
use crate::v3::extensions::{impl_extensible, Extensions};
use crate::v3::reference::RefOr;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A JSON-Schema-derived data type definition.
///
/// Every field is optional; the model performs no validation. Constraints
/// stated in the field docs (for example that `items` must be present
/// when `type` is `"array"`) are contracts on the caller, checked only by
/// an external validator if one is in use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Short title for the schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Explanation of the schema. CommonMark syntax MAY be used for rich
    /// text representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Value MUST be a string. Multiple types via an array are not
    /// supported.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,

    /// Further refinement of `type`, e.g. `int64`, `date-time`, `uuid`.
    /// The OAS offers a few predefined formats on top of JSON Schema's.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Value MUST be an object and not an array. Inline or referenced
    /// schema MUST be a Schema Object and not a standard JSON Schema.
    /// `items` MUST be present if the `type` is `array`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<RefOr<Schema>>>,

    /// Property definitions, each a Schema Object or Reference Object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, RefOr<Schema>>>,

    /// Value can be a boolean or an object. Inline or referenced schema
    /// MUST be a Schema Object and not a standard JSON Schema.
    #[serde(
        rename = "additionalProperties",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_properties: Option<AdditionalProperties>,

    /// The instance validates against all of these subschemas.
    #[serde(rename = "allOf", skip_serializing_if = "Option::is_none")]
    pub all_of: Option<Vec<RefOr<Schema>>>,

    /// The instance validates against exactly one of these subschemas.
    #[serde(rename = "oneOf", skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<RefOr<Schema>>>,

    /// The instance validates against at least one of these subschemas.
    #[serde(rename = "anyOf", skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<RefOr<Schema>>>,

    /// The instance must not validate against this subschema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<RefOr<Schema>>>,

    /// A numeric instance is valid only if division by this value
    /// results in an integer.
    #[serde(rename = "multipleOf", skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,

    /// The value assumed by a consumer when none is provided. Unlike
    /// JSON Schema, the value MUST conform to the `type` defined at the
    /// same level; if `type` is `string` then `default` can be `"foo"`
    /// but cannot be `1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Allows sending a `null` value for the defined schema. Default
    /// value is `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,

    /// Adds support for polymorphism between composed schemas. Legal
    /// only when one of `oneOf`, `anyOf`, `allOf` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<Discriminator>,

    /// Relevant only for property schemas. A read-only property MAY be
    /// sent in a response but SHOULD NOT be sent in a request. A
    /// property MUST NOT be marked as both `readOnly` and `writeOnly`.
    #[serde(rename = "readOnly", skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    /// Relevant only for property schemas. A write-only property MAY be
    /// sent in a request but SHOULD NOT be sent in a response. A
    /// property MUST NOT be marked as both `readOnly` and `writeOnly`.
    #[serde(rename = "writeOnly", skip_serializing_if = "Option::is_none")]
    pub write_only: Option<bool>,

    /// XML representation metadata. MAY be used only on property
    /// schemas; has no effect on root schemas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xml: Option<Xml>,

    /// Additional external documentation for this schema.
    #[serde(rename = "externalDocs", skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,

    /// A free-form example of an instance for this schema. Examples that
    /// cannot be naturally represented in JSON or YAML can be supplied
    /// as a string with escaping where necessary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,

    /// Specifies that the schema is deprecated and SHOULD be
    /// transitioned out of usage. Default value is `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,

    /// Inclusive numeric upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,

    /// Makes `maximum` an exclusive bound.
    #[serde(rename = "exclusiveMaximum", skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<bool>,

    /// Inclusive numeric lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,

    /// Makes `minimum` an exclusive bound.
    #[serde(rename = "exclusiveMinimum", skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<bool>,

    /// Maximum string length.
    #[serde(rename = "maxLength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,

    /// Minimum string length.
    #[serde(rename = "minLength", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,

    /// This string SHOULD be a valid regular expression, according to
    /// the ECMA 262 regular expression dialect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Maximum array length.
    #[serde(rename = "maxItems", skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,

    /// Minimum array length.
    #[serde(rename = "minItems", skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,

    /// Requires all array items to be unique.
    #[serde(rename = "uniqueItems", skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,

    /// Maximum number of object properties.
    #[serde(rename = "maxProperties", skip_serializing_if = "Option::is_none")]
    pub max_properties: Option<u64>,

    /// Minimum number of object properties.
    #[serde(rename = "minProperties", skip_serializing_if = "Option::is_none")]
    pub min_properties: Option<u64>,

    /// Names of properties that must be present. By default, properties
    /// defined by the `properties` keyword are not required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    /// Restricts the value to a fixed set of literals. Must contain at
    /// least one element; elements must be unique.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,

    /// Specification extensions (`x-...`).
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Schema {
    /// Creates a schema with the given `type`.
    pub fn new(schema_type: impl Into<String>) -> Self {
        Self {
            schema_type: Some(schema_type.into()),
            ..Default::default()
        }
    }

    /// Sets an optional description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the format refinement.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Sets the item schema for array types.
    pub fn with_items(mut self, items: impl Into<RefOr<Schema>>) -> Self {
        self.items = Some(Box::new(items.into()));
        self
    }

    /// Adds a named property definition.
    pub fn with_property(
        mut self,
        name: impl Into<String>,
        schema: impl Into<RefOr<Schema>>,
    ) -> Self {
        self.properties
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), schema.into());
        self
    }

    /// Replaces the list of required property names.
    pub fn with_required(mut self, required: Vec<String>) -> Self {
        self.required = Some(required);
        self
    }
}

/// The `additionalProperties` keyword: a boolean flag or a schema for
/// the values of undeclared properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    /// `true` permits, `false` forbids undeclared properties.
    Flag(bool),
    /// Undeclared property values must match this schema.
    Schema(Box<RefOr<Schema>>),
}

/// Metadata enabling polymorphic selection among composed schemas.
///
/// The discriminator names a payload property whose value picks the
/// matching subschema out of `oneOf`/`anyOf`/`allOf`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Discriminator {
    /// Name of the property holding the discriminating value.
    #[serde(rename = "propertyName")]
    pub property_name: String,

    /// Maps discriminating values to schema names or references.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping: Option<IndexMap<String, String>>,
}

impl Discriminator {
    /// Creates a discriminator over the given property.
    pub fn new(property_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            mapping: None,
        }
    }
}

/// Metadata describing the XML representation of a property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Xml {
    /// Replaces the name of the element/attribute used for the property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Absolute URI of a namespace definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Prefix used for the name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Declares whether the property translates to an attribute instead
    /// of an element. Default value is `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<bool>,

    /// Signifies whether an array is wrapped (`<books><book/></books>`)
    /// or unwrapped (`<book/>`). MAY be used only with `type: array`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapped: Option<bool>,

    /// Specification extensions (`x-...`).
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl From<Schema> for RefOr<Schema> {
    fn from(schema: Schema) -> Self {
        RefOr::Item(schema)
    }
}

impl_extensible!(Schema, Xml);
