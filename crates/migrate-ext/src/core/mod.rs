//! Core abstractions for provider-agnostic migration commands.
//!
//! - [`features`]: feature keys, values, the metadata store and the
//!   [`SupportAdditionalFeatures`] capability
//! - [`traits`]: the generic [`InsertDataSyntax`] builder
//! - [`expression`]: the [`InsertDataExpression`] command object
//! - [`value`]: column values for inserted rows
//! - [`identifier`]: name validation for command objects
//!
//! Nothing in this module knows about a specific database. Provider
//! vocabulary lives in [`crate::drivers`].

pub mod expression;
pub mod features;
pub mod identifier;
pub mod traits;
pub mod value;

pub use expression::{InsertDataExpression, InsertionRow};
pub use features::{
    AdditionalFeatures, FeatureKey, FeatureValue, SupportAdditionalFeatures, CAPABILITY_NAME,
};
pub use traits::InsertDataSyntax;
pub use value::SqlValue;
