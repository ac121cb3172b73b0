//! Microsoft SQL Server driver.
//!
//! - [`MssqlDialect`]: SQL syntax strategy for MSSQL
//! - [`profile`]: type overrides with native `IDENTITY` columns
//!
//! No pre-table phase is registered: auto-increment is a column property.

mod dialect;

pub use dialect::MssqlDialect;

use crate::core::schema::DataType;
use crate::dialect::{DialectProfile, TypeRule};

/// Build the SQL Server profile.
pub fn profile() -> DialectProfile {
    DialectProfile::builder("mssql", MssqlDialect::new())
        .alias("sqlserver")
        .alias("sql_server")
        .type_name(DataType::Bool, "BIT")
        .type_name(DataType::Clob, "NVARCHAR(MAX)")
        .type_name(DataType::Blob, "VARBINARY(MAX)")
        .type_name(DataType::UniqueId, "UNIQUEIDENTIFIER")
        .type_name(DataType::DateTime, "DATETIME2")
        .type_name(DataType::Timestamp, "DATETIME2")
        .rule(TypeRule::byte_width(
            DataType::AutoInc,
            "INT IDENTITY(1, 1)",
            "BIGINT IDENTITY(1, 1)",
            8,
        ))
        .build()
}
