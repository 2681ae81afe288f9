//! # Security Objects
//!
//! Security scheme definitions and the requirement lists that reference
//! them. The scheme is a sum type dispatched on the `type` key so the
//! serializer never has to inspect field combinations at runtime.

use crate::v3::extensions::{impl_extensible, Extensions};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Lists required security schemes by component name.
///
/// Values are scope lists for `oauth2`/`openIdConnect` schemes and MUST
/// be empty for the other types.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// A security scheme usable by the operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SecurityScheme {
    /// API key in a header, query parameter or cookie.
    #[serde(rename = "apiKey")]
    ApiKey(ApiKeyScheme),

    /// HTTP authentication (Basic, Bearer, ...).
    #[serde(rename = "http")]
    Http(HttpScheme),

    /// OAuth2 flows.
    #[serde(rename = "oauth2")]
    OAuth2(OAuth2Scheme),

    /// OpenID Connect discovery.
    #[serde(rename = "openIdConnect")]
    OpenIdConnect(OpenIdConnectScheme),
}

/// API key scheme details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiKeyScheme {
    /// A short description for the scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// REQUIRED. The name of the header, query or cookie parameter.
    pub name: String,

    /// REQUIRED. The key location: `"query"`, `"header"` or `"cookie"`.
    #[serde(rename = "in")]
    pub location: String,

    /// Specification extensions (`x-...`).
    #[serde(flatten)]
    pub extensions: Extensions,
}

/// HTTP authentication scheme details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpScheme {
    /// A short description for the scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// REQUIRED. The HTTP Authorization scheme name, as registered for
    /// RFC 7235 (e.g. `basic`, `bearer`).
    pub scheme: String,

    /// A hint to the client about how the bearer token is formatted
    /// (e.g. `JWT`).
    #[serde(rename = "bearerFormat", skip_serializing_if = "Option::is_none")]
    pub bearer_format: Option<String>,

    /// Specification extensions (`x-...`).
    #[serde(flatten)]
    pub extensions: Extensions,
}

/// OAuth2 scheme details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OAuth2Scheme {
    /// A short description for the scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// REQUIRED. Configuration of the supported flow types.
    pub flows: OAuthFlows,

    /// Specification extensions (`x-...`).
    #[serde(flatten)]
    pub extensions: Extensions,
}

/// OpenID Connect scheme details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenIdConnectScheme {
    /// A short description for the scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// REQUIRED. Discovery URL for OpenID Connect configuration values,
    /// in the form of a URL.
    #[serde(rename = "openIdConnectUrl")]
    pub open_id_connect_url: String,

    /// Specification extensions (`x-...`).
    #[serde(flatten)]
    pub extensions: Extensions,
}

/// Configuration of the supported OAuth flow types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OAuthFlows {
    /// Configuration for the OAuth Implicit flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit: Option<OAuthFlow>,

    /// Configuration for the OAuth Resource Owner Password flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<OAuthFlow>,

    /// Configuration for the OAuth Client Credentials flow.
    #[serde(rename = "clientCredentials", skip_serializing_if = "Option::is_none")]
    pub client_credentials: Option<OAuthFlow>,

    /// Configuration for the OAuth Authorization Code flow.
    #[serde(rename = "authorizationCode", skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<OAuthFlow>,

    /// Specification extensions (`x-...`).
    #[serde(flatten)]
    pub extensions: Extensions,
}

/// Configuration details for one OAuth flow type.
///
/// `authorizationUrl` applies to `implicit` and `authorizationCode`
/// flows; `tokenUrl` to everything but `implicit`. Both stay optional
/// here since one object type serves all four flow slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OAuthFlow {
    /// The authorization URL to be used for this flow.
    #[serde(rename = "authorizationUrl", skip_serializing_if = "Option::is_none")]
    pub authorization_url: Option<String>,

    /// The token URL to be used for this flow.
    #[serde(rename = "tokenUrl", skip_serializing_if = "Option::is_none")]
    pub token_url: Option<String>,

    /// The URL to be used for obtaining refresh tokens.
    #[serde(rename = "refreshUrl", skip_serializing_if = "Option::is_none")]
    pub refresh_url: Option<String>,

    /// REQUIRED. The available scopes, mapping scope name to a short
    /// description.
    pub scopes: IndexMap<String, String>,

    /// Specification extensions (`x-...`).
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl_extensible!(
    ApiKeyScheme,
    HttpScheme,
    OAuth2Scheme,
    OpenIdConnectScheme,
    OAuthFlows,
    OAuthFlow,
);
