//! SQL Server extensions for insert-data builders.
//!
//! SQL Server refuses explicit values for `IDENTITY` columns unless the
//! insert runs between `SET IDENTITY_INSERT <table> ON` and `OFF`.
//! [`MssqlInsertDataExt::with_identity_insert`] records that request for the
//! SQL Server generator under [`IDENTITY_INSERT`].

use crate::core::{FeatureKey, FeatureValue, InsertDataSyntax};
use crate::drivers::common::{attach_feature, read_feature};
use crate::error::Result;

/// Feature key for wrapping an insert in `SET IDENTITY_INSERT ON/OFF`.
pub const IDENTITY_INSERT: FeatureKey = FeatureKey::new("SqlServerIdentityInsert");

/// SQL Server fluent methods for any [`InsertDataSyntax`] builder.
pub trait MssqlInsertDataExt: InsertDataSyntax {
    /// Allow explicit values for the table's identity column.
    ///
    /// # Errors
    ///
    /// Fails with [`MigrateExtError::UnsupportedCapability`] if the builder
    /// does not carry additional features.
    ///
    /// [`MigrateExtError::UnsupportedCapability`]: crate::MigrateExtError::UnsupportedCapability
    fn with_identity_insert(&mut self) -> Result<&mut Self>;
}

impl<T: InsertDataSyntax + ?Sized> MssqlInsertDataExt for T {
    fn with_identity_insert(&mut self) -> Result<&mut Self> {
        attach_feature(
            self,
            "with_identity_insert",
            IDENTITY_INSERT,
            FeatureValue::Bool(true),
        )
    }
}

/// Whether `builder` asked for identity insert. Absent means no.
pub fn identity_insert<B>(builder: &B) -> bool
where
    B: InsertDataSyntax + ?Sized,
{
    read_feature(builder, IDENTITY_INSERT)
        .and_then(FeatureValue::as_bool)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{InsertDataExpression, InsertionRow, SupportAdditionalFeatures};
    use crate::error::MigrateExtError;

    #[derive(Debug)]
    struct Plain;

    impl InsertDataSyntax for Plain {
        fn row(&mut self, _row: InsertionRow) -> &mut dyn InsertDataSyntax {
            self
        }

        fn in_schema(&mut self, _schema: &str) -> &mut dyn InsertDataSyntax {
            self
        }
    }

    #[test]
    fn test_identity_insert_sets_flag() {
        let mut expr = InsertDataExpression::new("Orders");
        assert!(!identity_insert(&expr));

        expr.with_identity_insert().unwrap();
        assert!(identity_insert(&expr));
        assert_eq!(
            expr.additional_feature(IDENTITY_INSERT),
            Some(&FeatureValue::Bool(true))
        );
    }

    #[test]
    fn test_identity_insert_is_idempotent() {
        let mut expr = InsertDataExpression::new("Orders");
        expr.with_identity_insert()
            .unwrap()
            .with_identity_insert()
            .unwrap();
        assert_eq!(expr.additional_features().len(), 1);
    }

    #[test]
    fn test_identity_insert_on_plain_builder() {
        let err = Plain.with_identity_insert().unwrap_err();
        assert!(matches!(
            err,
            MigrateExtError::UnsupportedCapability {
                method: "with_identity_insert",
                ..
            }
        ));
        assert!(!identity_insert(&Plain));
    }

    #[test]
    fn test_explicit_false_reads_as_false() {
        let mut expr = InsertDataExpression::new("Orders");
        expr.set_additional_feature(IDENTITY_INSERT, FeatureValue::Bool(false));
        assert!(!identity_insert(&expr));
    }
}
