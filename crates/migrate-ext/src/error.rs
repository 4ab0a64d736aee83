//! Error types for the migration extension library.

use thiserror::Error;

/// Exit code for configuration errors (bad YAML, missing fields).
pub const EXIT_CONFIG_ERROR: u8 = 1;
/// Exit code for command objects that fail validation.
pub const EXIT_VALIDATION_ERROR: u8 = 2;
/// Exit code for extension methods called on an incapable command object.
pub const EXIT_UNSUPPORTED_CAPABILITY: u8 = 3;
/// Exit code for file system errors.
pub const EXIT_IO_ERROR: u8 = 7;

/// Main error type for migration extension operations.
#[derive(Error, Debug)]
pub enum MigrateExtError {
    /// A provider extension method was called on a command object that
    /// does not implement the additional-features capability.
    #[error("Method {method} must be called on an object implementing {capability}")]
    UnsupportedCapability {
        method: &'static str,
        capability: &'static str,
    },

    /// Configuration error (invalid plan file, unknown provider, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Command object failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MigrateExtError {
    /// Create an UnsupportedCapability error for the given extension method.
    pub fn unsupported(method: &'static str, capability: &'static str) -> Self {
        MigrateExtError::UnsupportedCapability { method, capability }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            MigrateExtError::Config(_)
            | MigrateExtError::Yaml(_)
            | MigrateExtError::Json(_) => EXIT_CONFIG_ERROR,
            MigrateExtError::Validation(_) => EXIT_VALIDATION_ERROR,
            MigrateExtError::UnsupportedCapability { .. } => EXIT_UNSUPPORTED_CAPABILITY,
            MigrateExtError::Io(_) => EXIT_IO_ERROR,
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for migration extension operations.
pub type Result<T> = std::result::Result<T, MigrateExtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_message_names_method_and_capability() {
        let err = MigrateExtError::unsupported(
            "with_overriding_system_value",
            "SupportAdditionalFeatures",
        );
        assert_eq!(
            err.to_string(),
            "Method with_overriding_system_value must be called on an object implementing SupportAdditionalFeatures"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            MigrateExtError::Config("x".into()).exit_code(),
            EXIT_CONFIG_ERROR
        );
        assert_eq!(
            MigrateExtError::Validation("x".into()).exit_code(),
            EXIT_VALIDATION_ERROR
        );
        assert_eq!(
            MigrateExtError::unsupported("m", "c").exit_code(),
            EXIT_UNSUPPORTED_CAPABILITY
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(MigrateExtError::from(io).exit_code(), EXIT_IO_ERROR);
    }

    #[test]
    fn test_format_detailed_starts_with_error() {
        let err = MigrateExtError::Config("plan has no operations".into());
        let detailed = err.format_detailed();
        assert!(detailed.starts_with("Error: Configuration error: plan has no operations"));
    }
}
