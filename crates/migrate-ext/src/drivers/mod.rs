//! Provider-specific extensions.
//!
//! Each provider module owns its own feature keys and the fluent extension
//! traits that write them:
//!
//! - [`postgres`]: `OVERRIDING SYSTEM VALUE` / `OVERRIDING USER VALUE`
//! - [`mssql`]: `SET IDENTITY_INSERT`
//! - [`common`]: the shared capability check
//!
//! # Adding a provider
//!
//! 1. Create `drivers/<provider>/extensions.rs` with its `FeatureKey`
//!    constants, prefixed with the provider name
//! 2. Write an extension trait blanket-implemented for every
//!    `InsertDataSyntax + ?Sized`, calling [`common::attach_feature`]
//! 3. Add a [`Provider`] variant and list its keys in
//!    [`Provider::feature_keys`]

pub mod common;
pub mod mssql;
pub mod postgres;

pub use mssql::MssqlInsertDataExt;
pub use postgres::PostgresInsertDataExt;

use crate::core::FeatureKey;
use crate::error::{MigrateExtError, Result};

/// Database providers with extension vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Mssql,
    Postgres,
}

impl Provider {
    /// Every known provider.
    pub const ALL: [Provider; 2] = [Provider::Mssql, Provider::Postgres];

    /// Resolve a provider from a database type string.
    ///
    /// # Errors
    ///
    /// Returns an error if the database type is not recognized.
    pub fn from_db_type(db_type: &str) -> Result<Self> {
        match db_type.to_lowercase().as_str() {
            "mssql" | "sqlserver" | "sql_server" => Ok(Provider::Mssql),
            "postgres" | "postgresql" | "pg" => Ok(Provider::Postgres),
            other => Err(MigrateExtError::Config(format!(
                "Unknown database type: '{}'. Supported types: mssql, postgres",
                other
            ))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Provider::Mssql => "mssql",
            Provider::Postgres => "postgres",
        }
    }

    /// The provider's feature key registry.
    pub fn feature_keys(&self) -> &'static [FeatureKey] {
        match self {
            Provider::Mssql => &[mssql::IDENTITY_INSERT],
            Provider::Postgres => &[postgres::OVERRIDING_IDENTITY_VALUES],
        }
    }

    /// Whether `key` belongs to this provider.
    pub fn owns(&self, key: FeatureKey) -> bool {
        self.feature_keys().contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_from_db_type() {
        assert_eq!(Provider::from_db_type("postgres").unwrap(), Provider::Postgres);
        assert_eq!(Provider::from_db_type("mssql").unwrap(), Provider::Mssql);

        // Alternative names
        assert_eq!(Provider::from_db_type("PostgreSQL").unwrap(), Provider::Postgres);
        assert_eq!(Provider::from_db_type("pg").unwrap(), Provider::Postgres);
        assert_eq!(Provider::from_db_type("sqlserver").unwrap(), Provider::Mssql);
        assert_eq!(Provider::from_db_type("sql_server").unwrap(), Provider::Mssql);

        let err = Provider::from_db_type("oracle").unwrap_err();
        assert!(err.to_string().contains("Unknown database type: 'oracle'"));
    }

    #[test]
    fn test_registries_are_disjoint_and_namespaced() {
        for provider in Provider::ALL {
            for key in provider.feature_keys() {
                let prefix = match provider {
                    Provider::Mssql => "SqlServer",
                    Provider::Postgres => "Postgres",
                };
                assert!(key.as_str().starts_with(prefix), "{} not namespaced", key);

                let owners = Provider::ALL.iter().filter(|p| p.owns(*key)).count();
                assert_eq!(owners, 1);
            }
        }
    }
}
