//! PostgreSQL provider.
//!
//! - [`extensions`]: Postgres fluent vocabulary for insert-data builders
//!   and the feature keys it writes

pub mod extensions;

pub use extensions::{
    overriding_identity_values, OverridingIdentityValues, PostgresInsertDataExt,
    OVERRIDING_IDENTITY_VALUES,
};
