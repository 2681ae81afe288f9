//! # Error Handling
//!
//! Provides the unified `SpecError` enum used by the document
//! conversion entry points.

use derive_more::{Display, From};

/// The crate error enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum SpecError {
    /// Wrapper for JSON (de)serialization errors.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// Wrapper for YAML (de)serialization errors.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for SpecError {}

/// Helper type alias for Result using SpecError.
pub type SpecResult<T> = Result<T, SpecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SpecError = json_err.into();
        assert!(matches!(err, SpecError::Json(_)));
    }

    #[test]
    fn test_yaml_conversion() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("{").unwrap_err();
        let err: SpecError = yaml_err.into();
        assert!(matches!(err, SpecError::Yaml(_)));
    }

    #[test]
    fn test_string_conversion() {
        let err: SpecError = String::from("something wrong").into();
        match err {
            SpecError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to SpecError::General"),
        }
    }
}
