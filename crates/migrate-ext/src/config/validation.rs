//! Plan file validation.

use super::Config;
use crate::drivers::Provider;
use crate::error::{MigrateExtError, Result};

/// Validate the configuration.
pub fn validate(config: &Config) -> Result<()> {
    if let Some(target) = &config.target {
        Provider::from_db_type(target)?;
    }

    if config.operations.is_empty() {
        return Err(MigrateExtError::Config(
            "operations must contain at least one insert".into(),
        ));
    }

    for (i, op) in config.operations.iter().enumerate() {
        if op.table.trim().is_empty() {
            return Err(MigrateExtError::Config(format!(
                "operations[{}].table is required",
                i
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InsertOperation;

    fn operation(table: &str) -> InsertOperation {
        InsertOperation {
            table: table.to_string(),
            schema: None,
            overriding: None,
            identity_insert: false,
            rows: Vec::new(),
        }
    }

    fn valid_config() -> Config {
        Config {
            target: Some("postgres".to_string()),
            operations: vec![operation("users")],
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_target_is_optional() {
        let mut config = valid_config();
        config.target = None;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_unknown_target() {
        let mut config = valid_config();
        config.target = Some("oracle".to_string());
        assert!(matches!(validate(&config), Err(MigrateExtError::Config(_))));
    }

    #[test]
    fn test_no_operations() {
        let mut config = valid_config();
        config.operations.clear();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("at least one insert"));
    }

    #[test]
    fn test_blank_table() {
        let mut config = valid_config();
        config.operations.push(operation("  "));
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("operations[1].table is required"));
    }
}
