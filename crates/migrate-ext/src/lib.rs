//! # migrate-ext
//!
//! Provider-specific extensions for database migration commands.
//!
//! Migration commands are built through provider-agnostic fluent builders.
//! This library lets provider modules attach extra metadata to those
//! commands without widening the generic builder surface:
//!
//! - **Additional features**: a per-command key/value store behind the
//!   [`SupportAdditionalFeatures`] capability
//! - **Postgres**: `OVERRIDING SYSTEM VALUE` / `OVERRIDING USER VALUE`
//! - **SQL Server**: `SET IDENTITY_INSERT`
//! - **Plan files**: YAML descriptions of insert commands, built into
//!   command objects with [`build_plan`]
//!
//! ## Example
//!
//! ```rust
//! use migrate_ext::{InsertDataExpression, InsertDataSyntax, InsertionRow, PostgresInsertDataExt};
//! use migrate_ext::drivers::postgres::{overriding_identity_values, OverridingIdentityValues};
//!
//! fn main() -> migrate_ext::Result<()> {
//!     let mut insert = InsertDataExpression::new("users");
//!     insert
//!         .with_overriding_user_value()?
//!         .row(InsertionRow::new().with("id", 7).with("name", "bob"));
//!
//!     assert_eq!(
//!         overriding_identity_values(&insert),
//!         Some(OverridingIdentityValues::User)
//!     );
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod drivers;
pub mod error;
pub mod plan;

// Re-exports for convenient access
pub use config::{Config, InsertOperation};
pub use crate::core::{
    AdditionalFeatures, FeatureKey, FeatureValue, InsertDataExpression, InsertDataSyntax,
    InsertionRow, SqlValue, SupportAdditionalFeatures,
};
pub use drivers::{MssqlInsertDataExt, PostgresInsertDataExt, Provider};
pub use error::{MigrateExtError, Result};
pub use plan::build_plan;
