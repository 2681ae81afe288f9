#![deny(missing_docs)]

//! # OAS Model
//!
//! Typed object model for OpenAPI 3.0 documents.
//!
//! Every specification object is a plain data structure: public fields
//! named after the spec keys, serialized with serde. The model performs
//! no validation and resolves no references; it exists so that documents
//! can be assembled in code and round-tripped through JSON or YAML.

/// Shared error types.
pub mod error;

/// The OpenAPI 3.0 object family.
pub mod v3;

pub use error::{SpecError, SpecResult};
pub use v3::{
    AdditionalProperties, ApiKeyScheme, Callback, Components, Contact, Discriminator, Document,
    Encoding, Example, Extensible, Extensions, ExternalDocumentation, Header, HttpScheme, Info,
    License, Link, MediaType, OAuth2Scheme, OAuthFlow, OAuthFlows, OpenIdConnectScheme,
    Operation, Parameter, PathItem, Paths, RefOr, Reference, RequestBody, Response, Responses,
    Schema, SecurityRequirement, SecurityScheme, Server, ServerVariable, Tag, Xml,
};
