#![deny(missing_docs)]

//! # OpenAPI 3.0 Object Model
//!
//! One module per object family, mirroring the specification's layout:
//! - Schema and its satellites (`Discriminator`, `Xml`).
//! - Servers, metadata (`Info`, `Contact`, `License`), documentation links.
//! - Paths, operations, parameters, request/response payloads.
//! - Security schemes and reusable components.
//! - The `Document` root with JSON/YAML conversion helpers.
//!
//! All types are passive attribute bags. Specification constraints (for
//! example the mutual exclusivity of `readOnly` and `writeOnly`) are
//! documented on the fields but never enforced.

pub mod components;
pub mod docs;
pub mod document;
pub mod extensions;
pub mod info;
pub mod media;
pub mod parameter;
pub mod paths;
pub mod reference;
pub mod responses;
pub mod schema;
pub mod security;
pub mod server;

pub use components::Components;
pub use docs::{ExternalDocumentation, Tag};
pub use document::Document;
pub use extensions::{Extensible, Extensions};
pub use info::{Contact, Info, License};
pub use media::{Encoding, Example, MediaType, RequestBody};
pub use parameter::{Header, Parameter};
pub use paths::{Operation, PathItem, Paths};
pub use reference::{RefOr, Reference};
pub use responses::{Callback, Link, Response, Responses};
pub use schema::{AdditionalProperties, Discriminator, Schema, Xml};
pub use security::{
    ApiKeyScheme, HttpScheme, OAuth2Scheme, OAuthFlow, OAuthFlows, OpenIdConnectScheme,
    SecurityRequirement, SecurityScheme,
};
pub use server::{Server, ServerVariable};
