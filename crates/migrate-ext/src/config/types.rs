//! Plan file type definitions.

use serde::{Deserialize, Serialize};

use crate::core::InsertionRow;
use crate::drivers::postgres::OverridingIdentityValues;

/// Root of a plan file: the insert-data commands to build.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database type whose generator will consume the commands
    /// (e.g. "postgres"). Only used to filter what gets reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Insert-data commands, in execution order.
    pub operations: Vec<InsertOperation>,
}

/// One insert-data command and the provider extensions to apply to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InsertOperation {
    /// Target table.
    pub table: String,

    /// Target schema (default: connection default).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Postgres identity override: `system` or `user`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overriding: Option<OverridingIdentityValues>,

    /// SQL Server `SET IDENTITY_INSERT` wrapping (default: false).
    #[serde(default)]
    pub identity_insert: bool,

    /// Rows to insert, each a mapping of column to value.
    #[serde(default)]
    pub rows: Vec<InsertionRow>,
}
