//! Error types for environment checks and lookups.

use thiserror::Error;

/// Result type for envkit operations.
pub type Result<T> = std::result::Result<T, EnvError>;

/// Errors that can occur while validating or reading the environment.
///
/// The lenient getters never produce these; only checks, strict getters,
/// manifest loading and [`FromEnv`](crate::FromEnv) validation do.
#[derive(Debug, Error)]
pub enum EnvError {
    /// A required variable has no value and no default was supplied.
    #[error("{key}: required but not set")]
    RequiredNotSet { key: String },

    /// Writing a default value into the environment failed.
    #[error("failed to set {key}: {reason}")]
    SetFailed { key: String, reason: String },

    /// A value was present but could not be parsed by a strict getter.
    #[error("failed to parse {key}={value:?}: {reason}")]
    Parse {
        key: String,
        value: String,
        reason: String,
    },

    /// A directive manifest could not be read or parsed.
    #[error("Manifest error: {0}")]
    Manifest(String),

    /// A loaded configuration failed validation.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl EnvError {
    /// Normalized key the error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            EnvError::RequiredNotSet { key }
            | EnvError::SetFailed { key, .. }
            | EnvError::Parse { key, .. } => Some(key),
            EnvError::Manifest(_) | EnvError::Invalid(_) => None,
        }
    }

    /// Whether this is the "required but not set" failure.
    pub fn is_required_not_set(&self) -> bool {
        matches!(self, EnvError::RequiredNotSet { .. })
    }
}

impl From<serde_json::Error> for EnvError {
    fn from(err: serde_json::Error) -> Self {
        EnvError::Manifest(err.to_string())
    }
}

impl From<serde_yaml::Error> for EnvError {
    fn from(err: serde_yaml::Error) -> Self {
        EnvError::Manifest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_not_set_display() {
        let err = EnvError::RequiredNotSet {
            key: "APP_PORT".to_string(),
        };
        assert_eq!(err.to_string(), "APP_PORT: required but not set");
        assert!(err.is_required_not_set());
        assert_eq!(err.key(), Some("APP_PORT"));
    }

    #[test]
    fn test_set_failed_is_distinct() {
        let err = EnvError::SetFailed {
            key: "A=B".to_string(),
            reason: "key contains '='".to_string(),
        };
        assert!(!err.is_required_not_set());
        assert!(err.to_string().contains("failed to set A=B"));
    }

    #[test]
    fn test_manifest_has_no_key() {
        let err = EnvError::Manifest("bad".into());
        assert!(err.key().is_none());
    }
}
