//! Core traits for provider-agnostic migration commands.
//!
//! - [`InsertDataSyntax`]: the generic fluent builder for "insert data"
//!   commands, handed out by the migration runner
//! - [`SupportAdditionalFeatures`]: the optional capability that lets
//!   provider extensions attach metadata to a command
//!
//! # Capability query
//!
//! A builder does not have to carry additional features. Provider extension
//! methods ask the builder at runtime through
//! [`InsertDataSyntax::as_additional_features_mut`], which defaults to `None`.
//! Command objects that own a feature store override it to return
//! themselves.

use super::expression::InsertionRow;
pub use super::features::SupportAdditionalFeatures;

/// Generic builder for an "insert data" migration command.
///
/// Every fluent method returns the same object as a builder, so generic
/// calls and provider extension calls can be chained in any order.
pub trait InsertDataSyntax {
    /// Append one row of column values.
    fn row(&mut self, row: InsertionRow) -> &mut dyn InsertDataSyntax;

    /// Target a specific schema instead of the connection default.
    fn in_schema(&mut self, schema: &str) -> &mut dyn InsertDataSyntax;

    /// Query for the additional-features capability (read side).
    ///
    /// SQL generators use this to find provider metadata.
    fn as_additional_features(&self) -> Option<&dyn SupportAdditionalFeatures> {
        None
    }

    /// Query for the additional-features capability (write side).
    ///
    /// Provider extension methods use this to attach metadata.
    fn as_additional_features_mut(&mut self) -> Option<&mut dyn SupportAdditionalFeatures> {
        None
    }
}
