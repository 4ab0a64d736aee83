//! Identifier validation for command object names.
//!
//! Schema, table and column names end up spliced into generated SQL, where
//! they cannot be parameterized. Command objects check them up front so the
//! SQL generator only ever sees well-formed names.

use crate::error::{MigrateExtError, Result};

/// Maximum identifier length (conservative limit across databases).
/// - PostgreSQL: 63 bytes
/// - SQL Server: 128 characters
const MAX_IDENTIFIER_LENGTH: usize = 128;

/// Validate an identifier.
///
/// Rejects:
/// - Empty identifiers
/// - Identifiers containing null bytes
/// - Identifiers exceeding maximum length
///
/// `what` names the identifier in the error message (e.g. "table name").
pub fn validate_identifier(what: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(MigrateExtError::Validation(format!(
            "{} cannot be empty",
            what
        )));
    }

    if name.contains('\0') {
        return Err(MigrateExtError::Validation(format!(
            "{} contains null byte: {:?}",
            what, name
        )));
    }

    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(MigrateExtError::Validation(format!(
            "{} exceeds maximum length of {} bytes (got {} bytes): {:?}",
            what,
            MAX_IDENTIFIER_LENGTH,
            name.len(),
            name
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("table name", "users").is_ok());
        assert!(validate_identifier("table name", "User Accounts").is_ok());
        assert!(validate_identifier("column name", "col\"with\"quotes").is_ok());
        assert!(validate_identifier("column name", &"a".repeat(128)).is_ok());
    }

    #[test]
    fn test_empty_identifier() {
        let err = validate_identifier("table name", "").unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: table name cannot be empty");
    }

    #[test]
    fn test_null_byte_identifier() {
        let err = validate_identifier("column name", "id\0; DROP").unwrap_err();
        assert!(err.to_string().contains("null byte"));
    }

    #[test]
    fn test_too_long_identifier() {
        let err = validate_identifier("schema name", &"s".repeat(129)).unwrap_err();
        assert!(err.to_string().contains("maximum length of 128"));
    }
}
