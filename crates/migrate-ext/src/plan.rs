//! Build insert-data commands from a plan file.
//!
//! Each [`InsertOperation`] becomes one [`InsertDataExpression`]. Provider
//! options are applied through the same public extension traits a
//! migration author would call, so a plan exercises exactly the fluent
//! chain a hand-written migration would.

use tracing::{debug, info};

use crate::config::{Config, InsertOperation};
use crate::core::{InsertDataExpression, InsertDataSyntax, SupportAdditionalFeatures};
use crate::drivers::postgres::{OverridingIdentityValues, PostgresInsertDataExt};
use crate::drivers::MssqlInsertDataExt;
use crate::error::Result;

/// Build and validate every command in `config`, in order.
pub fn build_plan(config: &Config) -> Result<Vec<InsertDataExpression>> {
    let commands = config
        .operations
        .iter()
        .map(build_command)
        .collect::<Result<Vec<_>>>()?;

    info!(
        "Built {} insert command(s), {} with additional features",
        commands.len(),
        commands
            .iter()
            .filter(|c| !c.additional_features().is_empty())
            .count()
    );

    Ok(commands)
}

/// Build and validate a single command.
pub fn build_command(op: &InsertOperation) -> Result<InsertDataExpression> {
    let mut command = InsertDataExpression::new(op.table.as_str());
    apply(&mut command, op)?;
    command.validate()?;

    debug!(
        "Insert into {}: {} row(s), {} feature(s)",
        op.table,
        command.rows().len(),
        command.additional_features().len()
    );

    Ok(command)
}

/// Apply an operation's schema, rows and provider options to any builder.
///
/// Provider options go first, so a builder that rejects them is left
/// untouched.
pub fn apply<B>(builder: &mut B, op: &InsertOperation) -> Result<()>
where
    B: InsertDataSyntax + ?Sized,
{
    match op.overriding {
        Some(OverridingIdentityValues::System) => {
            builder.with_overriding_system_value()?;
        }
        Some(OverridingIdentityValues::User) => {
            builder.with_overriding_user_value()?;
        }
        None => {}
    }

    if op.identity_insert {
        builder.with_identity_insert()?;
    }

    if let Some(schema) = &op.schema {
        builder.in_schema(schema);
    }

    for row in &op.rows {
        builder.row(row.clone());
    }

    Ok(())
}
