//! # Server Object
//!
//! An object representing a Server: a deployment target for the API,
//! addressed by a URL template whose `{bracketed}` variables are
//! substituted from the accompanying variable map.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A deployment target for the described API.
///
/// Spec validity requires a `variables` entry for every `{placeholder}`
/// token present in `url`; the model does not check this.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Server {
    /// REQUIRED. A URL to the target host. Supports server variables and
    /// MAY be relative, to indicate that the host location is relative
    /// to where the document is served. Variable substitutions are made
    /// when a variable is named in `{brackets}`.
    pub url: String,

    /// An optional string describing the host designated by the URL.
    /// CommonMark syntax MAY be used for rich text representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// A map between a variable name and its value. The value is used
    /// for substitution in the server's URL template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<IndexMap<String, ServerVariable>>,
}

impl Server {
    /// Creates a server pointing at the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: None,
            variables: None,
        }
    }

    /// Sets an optional description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a substitution definition for one URL variable.
    pub fn with_variable(mut self, name: impl Into<String>, variable: ServerVariable) -> Self {
        self.variables
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), variable);
        self
    }
}

/// Substitution definition for one server URL variable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerVariable {
    /// Restricts the substitution to a fixed set of values. SHOULD NOT
    /// be empty when present.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,

    /// REQUIRED. The value used when no other is supplied. Unlike the
    /// Schema Object, this value MUST be provided.
    pub default: String,

    /// Optional description for the variable. CommonMark syntax MAY be
    /// used for rich text representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ServerVariable {
    /// Creates a variable with the given default value.
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            enum_values: None,
            default: default.into(),
            description: None,
        }
    }
}
