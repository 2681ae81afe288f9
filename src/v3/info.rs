//! # Info Object
//!
//! Metadata about the API: title, version, contact and license details.

use crate::v3::extensions::{impl_extensible, Extensions};
use serde::{Deserialize, Serialize};

/// Metadata about the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// REQUIRED. The title of the application.
    pub title: String,

    /// A short description of the application. CommonMark syntax MAY be
    /// used for rich text representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// A URL to the Terms of Service for the API.
    #[serde(rename = "termsOfService", skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,

    /// Contact information for the exposed API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,

    /// License information for the exposed API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,

    /// REQUIRED. The version of the OpenAPI document itself, distinct
    /// from the OpenAPI Specification version.
    pub version: String,

    /// Specification extensions (`x-...`).
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Info {
    /// Creates API metadata with the required title and version.
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            ..Default::default()
        }
    }

    /// Sets an optional description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets optional contact metadata.
    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.contact = Some(contact);
        self
    }

    /// Sets optional license metadata.
    pub fn with_license(mut self, license: License) -> Self {
        self.license = Some(license);
        self
    }
}

/// Contact information for the exposed API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// The identifying name of the contact person/organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The URL pointing to the contact information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// The email address of the contact person/organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Specification extensions (`x-...`).
    #[serde(flatten)]
    pub extensions: Extensions,
}

/// License information for the exposed API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct License {
    /// REQUIRED. The license name used for the API.
    pub name: String,

    /// A URL to the license used for the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Specification extensions (`x-...`).
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl License {
    /// Creates a license with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
            extensions: Extensions::new(),
        }
    }
}

impl_extensible!(Info, Contact, License);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_info() {
        let info = Info::new("Pet Store", "1.0.3");
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value, json!({"title": "Pet Store", "version": "1.0.3"}));
    }

    #[test]
    fn test_info_spec_key_names() {
        let info = Info {
            terms_of_service: Some("https://example.com/terms".into()),
            ..Info::new("Pet Store", "1.0.3")
        };
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(
            value["termsOfService"],
            json!("https://example.com/terms")
        );
    }

    #[test]
    fn test_info_extension_round_trip() {
        let mut info = Info::new("Pet Store", "1.0.3");
        info.extensions.insert("x-logo", json!({"url": "logo.png"}));
        let s = serde_json::to_string(&info).unwrap();
        let back: Info = serde_json::from_str(&s).unwrap();
        assert_eq!(back, info);
    }
}
