#![deny(missing_docs)]

//! # Document Root
//!
//! The root object of an OpenAPI document, plus the JSON/YAML
//! conversion helpers. These helpers are the crate's only fallible
//! entry points; everything else is plain data.

use crate::error::SpecResult;
use crate::v3::components::Components;
use crate::v3::docs::{ExternalDocumentation, Tag};
use crate::v3::extensions::{impl_extensible, Extensions};
use crate::v3::info::Info;
use crate::v3::paths::Paths;
use crate::v3::security::SecurityRequirement;
use crate::v3::server::Server;
use serde::{Deserialize, Serialize};

/// The root of an OpenAPI 3.0 document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// REQUIRED. The semantic version number of the OpenAPI
    /// Specification that the document uses, e.g. `"3.0.2"`. Distinct
    /// from `info.version`, which is the API's own version.
    pub openapi: String,

    /// REQUIRED. Metadata about the API.
    pub info: Info,

    /// Connectivity information for target servers. When absent or
    /// empty, the default is a single server with a `url` of `/`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<Server>>,

    /// REQUIRED. The available paths and operations for the API.
    pub paths: Paths,

    /// Reusable objects for the rest of the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,

    /// Security mechanisms that can be used across the API. Individual
    /// operations can override this definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,

    /// Tags used by the document with additional metadata, in the order
    /// documentation tooling should present them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// Additional external documentation.
    #[serde(rename = "externalDocs", skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,

    /// Specification extensions (`x-...`).
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Document {
    /// Creates a document from its three required pieces.
    pub fn new(openapi: impl Into<String>, info: Info, paths: Paths) -> Self {
        Self {
            openapi: openapi.into(),
            info,
            paths,
            ..Default::default()
        }
    }

    /// Adds a server definition.
    pub fn with_server(mut self, server: Server) -> Self {
        self.servers.get_or_insert_with(Vec::new).push(server);
        self
    }

    /// Sets the reusable components section.
    pub fn with_components(mut self, components: Components) -> Self {
        self.components = Some(components);
        self
    }

    /// Adds a tag definition.
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(tag);
        self
    }

    /// Serializes the document to a compact JSON string.
    pub fn to_json_string(&self) -> SpecResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the document to a pretty-printed JSON string.
    pub fn to_json_string_pretty(&self) -> SpecResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serializes the document to a YAML string.
    pub fn to_yaml_string(&self) -> SpecResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Deserializes a document from a JSON string.
    pub fn from_json_str(input: &str) -> SpecResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Deserializes a document from a YAML string.
    pub fn from_yaml_str(input: &str) -> SpecResult<Self> {
        Ok(serde_yaml::from_str(input)?)
    }
}

impl_extensible!(Document);
