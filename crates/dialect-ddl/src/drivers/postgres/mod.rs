//! PostgreSQL driver.
//!
//! - [`PostgresDialect`]: SQL syntax strategy for PostgreSQL
//! - [`profile`]: type overrides and the sequence phase
//!
//! Auto-increment columns render as `SERIAL`/`BIGSERIAL`; a CREATE SEQUENCE
//! per column is emitted before the tables.

mod dialect;

pub use dialect::PostgresDialect;

use crate::core::schema::DataType;
use crate::dialect::{DialectProfile, TypeRule};
use crate::generator::SequencePhase;

/// Build the PostgreSQL profile.
pub fn profile() -> DialectProfile {
    DialectProfile::builder("postgres", PostgresDialect::new())
        .alias("postgresql")
        .alias("pg")
        .type_name(DataType::Bool, "BOOLEAN")
        .type_name(DataType::Clob, "TEXT")
        .type_name(DataType::Blob, "BYTEA")
        .rule(TypeRule::byte_width(DataType::AutoInc, "SERIAL", "BIGSERIAL", 8))
        .rule(TypeRule::fixed(DataType::Float, "DOUBLE PRECISION"))
        .rule(TypeRule::named(DataType::Blob))
        .alter_type_clause(" TYPE ")
        .phase(SequencePhase)
        .build()
}
