//! # dialect-ddl
//!
//! Dialect-aware DDL generation.
//!
//! This library turns a database-independent schema description into DDL
//! statements for a specific database engine:
//!
//! - **Type resolution** through per-dialect type rules, a sparse type-name
//!   override table and a default table
//! - **Pre-table phases** for auxiliary objects (PostgreSQL sequences) emitted
//!   before any table
//! - **Column descriptors** with type-aware DEFAULT literals and NOT NULL
//! - **Create/drop/alter** scripts for databases, tables, indexes, relations
//!   and columns
//!
//! ## Example
//!
//! ```rust,no_run
//! use dialect_ddl::{Config, Database, Script};
//!
//! fn main() -> dialect_ddl::Result<()> {
//!     let config = Config::load("ddl.yaml")?;
//!     let db = Database::load("schema.yaml")?;
//!
//!     let mut script = Script::new();
//!     config.generator()?.create_database(&db, &mut script)?;
//!     print!("{}", script.render(&config.terminator));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod dialect;
pub mod drivers;
pub mod error;
pub mod generator;

// Re-exports for convenient access
pub use crate::core::{
    Column, DataType, Database, DefaultValue, Dialect, DialectCatalog, Index, Relation, Script,
    Table,
};
pub use config::Config;
pub use dialect::{DialectProfile, TypeNames, TypeRule};
pub use error::{DdlError, Result};
pub use generator::{
    DdlAction, DdlGenerator, DdlTarget, GeneratorOptions, PreTablePhase, SequencePhase,
    UnresolvedPolicy,
};
