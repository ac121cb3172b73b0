//! Core abstractions for dialect-independent DDL generation.
//!
//! - [`schema`]: database, table, column, index and relation metadata
//! - [`value`]: column default values
//! - [`traits`]: the [`Dialect`] capability trait
//! - [`identifier`]: identifier validation and quoting helpers
//! - [`script`]: the append-only statement container
//! - [`catalog`]: dialect registry
//!
//! # Design Patterns
//!
//! - **Strategy**: `Dialect` provides interchangeable quoting and literal rules
//! - **Registry**: `DialectCatalog` maps dialect names to immutable profiles

pub mod catalog;
pub mod identifier;
pub mod schema;
pub mod script;
pub mod traits;
pub mod value;

// Re-export commonly used types for convenience
pub use catalog::DialectCatalog;
pub use schema::{Column, DataType, Database, Index, Relation, Table};
pub use script::Script;
pub use traits::Dialect;
pub use value::DefaultValue;
