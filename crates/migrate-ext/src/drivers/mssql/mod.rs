//! Microsoft SQL Server provider.
//!
//! - [`extensions`]: SQL Server fluent vocabulary for insert-data builders
//!   and the feature keys it writes

pub mod extensions;

pub use extensions::{identity_insert, MssqlInsertDataExt, IDENTITY_INSERT};
