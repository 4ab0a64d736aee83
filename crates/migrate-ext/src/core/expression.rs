//! The "insert data" command object.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{MigrateExtError, Result};

use super::features::{AdditionalFeatures, FeatureKey, FeatureValue, SupportAdditionalFeatures};
use super::identifier::validate_identifier;
use super::traits::InsertDataSyntax;
use super::value::SqlValue;

/// One row to insert: column names paired with values, in column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsertionRow {
    columns: Vec<(String, SqlValue)>,
}

impl InsertionRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column value, builder style.
    ///
    /// Setting the same column twice replaces the earlier value in place.
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.set(column, value);
        self
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<SqlValue>) {
        let column = column.into();
        let value = value.into();
        match self.columns.iter_mut().find(|(name, _)| *name == column) {
            Some(slot) => slot.1 = value,
            None => self.columns.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, v)| v)
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SqlValue)> {
        self.columns.iter().map(|(name, v)| (name.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Serialize for InsertionRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in &self.columns {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for InsertionRow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct RowVisitor;

        impl<'de> Visitor<'de> for RowVisitor {
            type Value = InsertionRow;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of column names to values")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut row = InsertionRow::new();
                while let Some((column, value)) = access.next_entry::<String, SqlValue>()? {
                    row.set(column, value);
                }
                Ok(row)
            }
        }

        deserializer.deserialize_map(RowVisitor)
    }
}

/// Command object for inserting rows into a table.
///
/// Carries an [`AdditionalFeatures`] store, so provider extension methods
/// (e.g. Postgres `OVERRIDING SYSTEM VALUE`) can be applied to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsertDataExpression {
    #[serde(skip_serializing_if = "Option::is_none")]
    schema_name: Option<String>,
    table_name: String,
    rows: Vec<InsertionRow>,
    additional_features: AdditionalFeatures,
}

impl InsertDataExpression {
    /// Create an insert command for `table_name` with no rows.
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            schema_name: None,
            table_name: table_name.into(),
            rows: Vec::new(),
            additional_features: AdditionalFeatures::new(),
        }
    }

    pub fn schema_name(&self) -> Option<&str> {
        self.schema_name.as_deref()
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn rows(&self) -> &[InsertionRow] {
        &self.rows
    }

    /// Check that the command is well formed.
    ///
    /// Collects every problem into one [`MigrateExtError::Validation`].
    /// Additional features are never validated here; they belong to the
    /// provider that reads them.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if let Err(e) = validate_identifier("table name", &self.table_name) {
            errors.push(e);
        }
        if let Some(schema) = &self.schema_name {
            if let Err(e) = validate_identifier("schema name", schema) {
                errors.push(e);
            }
        }
        for (i, row) in self.rows.iter().enumerate() {
            if row.is_empty() {
                errors.push(MigrateExtError::Validation(format!(
                    "row {} has no columns",
                    i + 1
                )));
            }
            for column in row.column_names() {
                if let Err(e) = validate_identifier("column name", column) {
                    errors.push(e);
                }
            }
        }

        if errors.is_empty() {
            return Ok(());
        }

        let messages: Vec<String> = errors
            .into_iter()
            .map(|e| match e {
                MigrateExtError::Validation(msg) => msg,
                other => other.to_string(),
            })
            .collect();
        Err(MigrateExtError::Validation(format!(
            "insert into {}: {}",
            self.qualified_name(),
            messages.join("; ")
        )))
    }

    fn qualified_name(&self) -> String {
        match &self.schema_name {
            Some(schema) => format!("{}.{}", schema, self.table_name),
            None => self.table_name.clone(),
        }
    }
}

impl InsertDataSyntax for InsertDataExpression {
    fn row(&mut self, row: InsertionRow) -> &mut dyn InsertDataSyntax {
        self.rows.push(row);
        self
    }

    fn in_schema(&mut self, schema: &str) -> &mut dyn InsertDataSyntax {
        self.schema_name = Some(schema.to_string());
        self
    }

    fn as_additional_features(&self) -> Option<&dyn SupportAdditionalFeatures> {
        Some(self)
    }

    fn as_additional_features_mut(&mut self) -> Option<&mut dyn SupportAdditionalFeatures> {
        Some(self)
    }
}

impl SupportAdditionalFeatures for InsertDataExpression {
    fn additional_features(&self) -> &AdditionalFeatures {
        &self.additional_features
    }

    fn set_additional_feature(&mut self, key: FeatureKey, value: FeatureValue) {
        self.additional_features.insert(key, value);
    }
}
