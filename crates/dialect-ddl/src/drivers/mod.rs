//! Built-in dialect drivers.
//!
//! - [`generic`]: ANSI SQL, no overrides
//! - [`postgres`]: PostgreSQL, sequence-backed auto-increment
//! - [`mssql`]: Microsoft SQL Server, native identity columns
//!
//! # Architecture
//!
//! Each driver module provides:
//! - a `Dialect` implementation (quoting, reserved words, literal syntax)
//! - a `profile()` function assembling its [`DialectProfile`]
//!
//! # Adding New Databases
//!
//! 1. Create a new module under `drivers/` (e.g., `drivers/oracle/`)
//! 2. Implement the `Dialect` trait
//! 3. Build a profile: type names, type rules, pre-table phases
//! 4. Add it to [`builtin_profiles`]

pub mod generic;
pub mod mssql;
pub mod postgres;

pub use generic::GenericDialect;
pub use mssql::MssqlDialect;
pub use postgres::PostgresDialect;

use crate::dialect::DialectProfile;

/// Profiles of every built-in dialect, in registration order.
pub fn builtin_profiles() -> Vec<DialectProfile> {
    vec![generic::profile(), postgres::profile(), mssql::profile()]
}
