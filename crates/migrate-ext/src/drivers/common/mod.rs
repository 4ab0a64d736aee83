//! Common utilities shared across provider drivers.
//!
//! - [`attach_feature`]: the capability check and error path every provider
//!   extension method goes through

use tracing::debug;

use crate::core::{FeatureKey, FeatureValue, InsertDataSyntax, CAPABILITY_NAME};
use crate::error::{MigrateExtError, Result};

/// Attach `value` under `key` on `builder`, on behalf of extension `method`.
///
/// Fails with [`MigrateExtError::UnsupportedCapability`] when the builder
/// does not carry additional features; the builder is left untouched in
/// that case. On success the same builder is handed back for chaining.
pub fn attach_feature<'a, B>(
    builder: &'a mut B,
    method: &'static str,
    key: FeatureKey,
    value: FeatureValue,
) -> Result<&'a mut B>
where
    B: InsertDataSyntax + ?Sized,
{
    match builder.as_additional_features_mut() {
        Some(features) => features.set_additional_feature(key, value),
        None => {
            debug!("{} rejected: builder does not implement {}", method, CAPABILITY_NAME);
            return Err(MigrateExtError::unsupported(method, CAPABILITY_NAME));
        }
    }
    Ok(builder)
}

/// Read the feature under `key` from `builder`, if it carries features at all.
pub fn read_feature<B>(builder: &B, key: FeatureKey) -> Option<&FeatureValue>
where
    B: InsertDataSyntax + ?Sized,
{
    builder
        .as_additional_features()
        .and_then(|features| features.additional_feature(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{InsertDataExpression, InsertionRow, SupportAdditionalFeatures};

    const PROBE: FeatureKey = FeatureKey::new("TestProbe");

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
    fn test_attach_on_capable_builder() {
        let mut expr = InsertDataExpression::new("t");
        attach_feature(&mut expr, "probe", PROBE, FeatureValue::Int(3)).unwrap();
        assert_eq!(expr.additional_feature(PROBE), Some(&FeatureValue::Int(3)));
        assert_eq!(read_feature(&expr, PROBE), Some(&FeatureValue::Int(3)));
    }

    #[test]
    fn test_attach_returns_builder_for_chaining() {
        let mut expr = InsertDataExpression::new("t");
        attach_feature(&mut expr, "probe", PROBE, FeatureValue::Int(1))
            .unwrap()
            .row(InsertionRow::new().with("id", 1));
        assert_eq!(expr.rows().len(), 1);
        assert_eq!(read_feature(&expr, PROBE), Some(&FeatureValue::Int(1)));
    }

    #[test]
    fn test_attach_on_plain_builder_fails() {
        let mut plain = Plain;
        let err = attach_feature(&mut plain, "probe", PROBE, FeatureValue::Null).unwrap_err();
        assert!(matches!(
            err,
            MigrateExtError::UnsupportedCapability {
                method: "probe",
                capability: CAPABILITY_NAME
            }
        ));
        assert!(read_feature(&plain, PROBE).is_none());
    }
}
