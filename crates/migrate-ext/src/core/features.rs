//! Additional features: provider-private metadata carried by command objects.
//!
//! A command object that implements [`SupportAdditionalFeatures`] owns an
//! [`AdditionalFeatures`] store. Provider extension methods write into it
//! under well-known [`FeatureKey`]s, and the provider's SQL generator reads
//! the same keys back. The command object itself never interprets them.
//!
//! # Keys
//!
//! Keys are compile-time constants declared in each provider module:
//!
//! ```rust
//! use migrate_ext::core::FeatureKey;
//!
//! pub const MY_FEATURE: FeatureKey = FeatureKey::new("MyProviderMyFeature");
//! assert_eq!(MY_FEATURE.as_str(), "MyProviderMyFeature");
//! ```
//!
//! Uniqueness is only guaranteed inside a provider namespace. Prefix every
//! key with the provider name.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

/// Name of the capability, as reported by extension errors.
pub const CAPABILITY_NAME: &str = "SupportAdditionalFeatures";

/// Provider-namespaced identifier of one additional feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FeatureKey(&'static str);

impl FeatureKey {
    /// Declare a feature key.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty. In a `const` item this is a compile error.
    pub const fn new(name: &'static str) -> Self {
        assert!(!name.is_empty(), "feature key cannot be empty");
        Self(name)
    }

    /// The key text.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Value stored under a [`FeatureKey`].
///
/// Providers convert their own types into one of these variants, usually
/// [`FeatureValue::Symbol`] for enumerations, and implement
/// `TryFrom<&FeatureValue>` to read them back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    /// Explicitly attached absence of a value.
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
    /// Variant name of a provider-defined enumeration.
    Symbol(&'static str),
}

impl FeatureValue {
    /// Symbol or text content, if any.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            FeatureValue::Symbol(s) => Some(*s),
            FeatureValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FeatureValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FeatureValue::Null)
    }
}

impl From<bool> for FeatureValue {
    fn from(value: bool) -> Self {
        FeatureValue::Bool(value)
    }
}

impl From<i64> for FeatureValue {
    fn from(value: i64) -> Self {
        FeatureValue::Int(value)
    }
}

impl From<String> for FeatureValue {
    fn from(value: String) -> Self {
        FeatureValue::Text(value)
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        FeatureValue::Text(value.to_string())
    }
}

impl<T: Into<FeatureValue>> From<Option<T>> for FeatureValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FeatureValue::Null, Into::into)
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Null => f.write_str("null"),
            FeatureValue::Bool(b) => write!(f, "{}", b),
            FeatureValue::Int(i) => write!(f, "{}", i),
            FeatureValue::Text(s) => f.write_str(s),
            FeatureValue::Symbol(s) => f.write_str(s),
        }
    }
}

/// Metadata store: at most one value per key, last write wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AdditionalFeatures {
    entries: BTreeMap<FeatureKey, FeatureValue>,
}

impl AdditionalFeatures {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `key` with `value`, returning the value it replaced.
    pub fn insert(&mut self, key: FeatureKey, value: FeatureValue) -> Option<FeatureValue> {
        let previous = self.entries.insert(key, value);

        match &previous {
            Some(old) if Some(old) != self.entries.get(&key) => {
                warn!(
                    "Additional feature {} overwritten: {} -> {}",
                    key, old, self.entries[&key]
                );
            }
            Some(_) => debug!("Additional feature {} re-attached with same value", key),
            None => debug!("Additional feature {} = {}", key, self.entries[&key]),
        }

        previous
    }

    pub fn get(&self, key: FeatureKey) -> Option<&FeatureValue> {
        self.entries.get(&key)
    }

    /// Read a value converted into a provider type.
    ///
    /// Returns `None` when the key is absent or holds a value the provider
    /// type does not recognize.
    pub fn get_as<T>(&self, key: FeatureKey) -> Option<T>
    where
        T: for<'v> TryFrom<&'v FeatureValue>,
    {
        self.get(key).and_then(|v| T::try_from(v).ok())
    }

    pub fn contains_key(&self, key: FeatureKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, FeatureKey, FeatureValue> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a AdditionalFeatures {
    type Item = (&'a FeatureKey, &'a FeatureValue);
    type IntoIter = btree_map::Iter<'a, FeatureKey, FeatureValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Capability of a command object to carry additional features.
///
/// Implementing this trait is optional. Generic builders advertise it
/// through [`InsertDataSyntax::as_additional_features`]; objects that don't
/// implement it are still valid, they just reject provider extensions.
///
/// [`InsertDataSyntax::as_additional_features`]: super::InsertDataSyntax::as_additional_features
pub trait SupportAdditionalFeatures {
    /// The store, as read by SQL generators.
    fn additional_features(&self) -> &AdditionalFeatures;

    /// Attach `value` under `key`, replacing any prior value.
    ///
    /// Never fails. Implementations that want to validate keys or values
    /// do it here.
    fn set_additional_feature(&mut self, key: FeatureKey, value: FeatureValue);

    /// Look up a single feature.
    fn additional_feature(&self, key: FeatureKey) -> Option<&FeatureValue> {
        self.additional_features().get(key)
    }

    /// Return the feature under `key`, attaching `default` first if absent.
    fn additional_feature_or_insert(
        &mut self,
        key: FeatureKey,
        default: FeatureValue,
    ) -> FeatureValue {
        if let Some(existing) = self.additional_feature(key) {
            return existing.clone();
        }
        self.set_additional_feature(key, default.clone());
        default
    }

    /// Like [`additional_feature_or_insert`](Self::additional_feature_or_insert)
    /// but only builds the default when the key is absent.
    fn additional_feature_or_insert_with<F>(&mut self, key: FeatureKey, default: F) -> FeatureValue
    where
        F: FnOnce() -> FeatureValue,
        Self: Sized,
    {
        if let Some(existing) = self.additional_feature(key) {
            return existing.clone();
        }
        let value = default();
        self.set_additional_feature(key, value.clone());
        value
    }
}
