//! Postgres extensions for insert-data builders.
//!
//! Postgres identity columns reject or ignore explicit values depending on
//! how they were declared. An `INSERT` can override that with an
//! `OVERRIDING SYSTEM VALUE` or `OVERRIDING USER VALUE` clause. These
//! extension methods record which clause the caller wants; the Postgres SQL
//! generator reads it back from [`OVERRIDING_IDENTITY_VALUES`].
//!
//! ```rust
//! use migrate_ext::core::{InsertDataExpression, InsertDataSyntax, InsertionRow};
//! use migrate_ext::drivers::postgres::{
//!     overriding_identity_values, OverridingIdentityValues, PostgresInsertDataExt,
//! };
//!
//! # fn main() -> migrate_ext::Result<()> {
//! let mut insert = InsertDataExpression::new("users");
//! insert
//!     .with_overriding_system_value()?
//!     .row(InsertionRow::new().with("id", 1).with("name", "alice"));
//!
//! assert_eq!(
//!     overriding_identity_values(&insert),
//!     Some(OverridingIdentityValues::System)
//! );
//! # Ok(())
//! # }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{FeatureKey, FeatureValue, InsertDataSyntax};
use crate::drivers::common::attach_feature;
use crate::error::{MigrateExtError, Result};

/// Feature key for the identity override requested on an insert.
pub const OVERRIDING_IDENTITY_VALUES: FeatureKey =
    FeatureKey::new("PostgresOverridingSystemValue");

/// Which side wins for identity columns on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverridingIdentityValues {
    /// Explicit values replace system-generated ones, even for
    /// `GENERATED ALWAYS` identity columns.
    System,
    /// Explicit values are ignored and system-generated ones are used for
    /// `GENERATED BY DEFAULT` identity columns.
    User,
}

impl OverridingIdentityValues {
    /// Variant name as stored in the feature store.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OverridingIdentityValues::System => "System",
            OverridingIdentityValues::User => "User",
        }
    }

    /// The SQL clause the generator emits between the column list and `VALUES`.
    pub const fn clause(&self) -> &'static str {
        match self {
            OverridingIdentityValues::System => "OVERRIDING SYSTEM VALUE",
            OverridingIdentityValues::User => "OVERRIDING USER VALUE",
        }
    }
}

impl fmt::Display for OverridingIdentityValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<OverridingIdentityValues> for FeatureValue {
    fn from(value: OverridingIdentityValues) -> Self {
        FeatureValue::Symbol(value.as_str())
    }
}

impl TryFrom<&FeatureValue> for OverridingIdentityValues {
    type Error = MigrateExtError;

    fn try_from(value: &FeatureValue) -> Result<Self> {
        match value.as_symbol() {
            Some("System") => Ok(OverridingIdentityValues::System),
            Some("User") => Ok(OverridingIdentityValues::User),
            _ => Err(MigrateExtError::Validation(format!(
                "unrecognized value for {}: {}",
                OVERRIDING_IDENTITY_VALUES, value
            ))),
        }
    }
}

/// Postgres fluent methods for any [`InsertDataSyntax`] builder.
///
/// Both methods write the same key, so calling both leaves whichever ran
/// last. Calling one repeatedly has the same effect as calling it once.
///
/// # Errors
///
/// Both fail with [`MigrateExtError::UnsupportedCapability`] if the builder
/// does not carry additional features. The builder is not modified.
pub trait PostgresInsertDataExt: InsertDataSyntax {
    /// Add an `OVERRIDING SYSTEM VALUE` clause to this insert.
    fn with_overriding_system_value(&mut self) -> Result<&mut Self>;

    /// Add an `OVERRIDING USER VALUE` clause to this insert.
    fn with_overriding_user_value(&mut self) -> Result<&mut Self>;
}

impl<T: InsertDataSyntax + ?Sized> PostgresInsertDataExt for T {
    fn with_overriding_system_value(&mut self) -> Result<&mut Self> {
        set_overriding_identity_values(
            self,
            OverridingIdentityValues::System,
            "with_overriding_system_value",
        )
    }

    fn with_overriding_user_value(&mut self) -> Result<&mut Self> {
        set_overriding_identity_values(
            self,
            OverridingIdentityValues::User,
            "with_overriding_user_value",
        )
    }
}

fn set_overriding_identity_values<'a, B: InsertDataSyntax + ?Sized>(
    builder: &'a mut B,
    overriding: OverridingIdentityValues,
    method: &'static str,
) -> Result<&'a mut B> {
    attach_feature(builder, method, OVERRIDING_IDENTITY_VALUES, overriding.into())
}

/// Identity override requested on `builder`, for the Postgres generator.
///
/// `None` means no override was requested, the builder carries no features,
/// or the stored value is not one this provider understands.
pub fn overriding_identity_values<B>(builder: &B) -> Option<OverridingIdentityValues>
where
    B: InsertDataSyntax + ?Sized,
{
    builder
        .as_additional_features()
        .and_then(|features| features.additional_features().get_as(OVERRIDING_IDENTITY_VALUES))
}
