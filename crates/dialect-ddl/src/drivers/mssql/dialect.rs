//! MSSQL SQL dialect (Strategy pattern).
//!
//! Provides MSSQL-specific identifier quoting and literal syntax.

use crate::core::identifier::{quote_bracket, MSSQL_RESERVED};
use crate::core::traits::Dialect;

/// Microsoft SQL Server dialect implementation.
#[derive(Debug, Clone, Default)]
pub struct MssqlDialect;

impl MssqlDialect {
    /// Create a new MSSQL dialect instance.
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for MssqlDialect {
    fn name(&self) -> &str {
        "mssql"
    }

    fn quote_ident(&self, name: &str) -> String {
        quote_bracket(name)
    }

    fn reserved_words(&self) -> &[&str] {
        MSSQL_RESERVED
    }

    fn drop_index_on_table(&self) -> bool {
        true
    }

    // BIT has no TRUE/FALSE keywords
    fn bool_literal(&self, value: bool) -> &'static str {
        if value {
            "1"
        } else {
            "0"
        }
    }

    fn bytes_literal(&self, bytes: &[u8]) -> String {
        format!("0x{}", hex::encode_upper(bytes))
    }

    fn text_literal(&self, s: &str) -> String {
        format!("N'{}'", s.replace('\'', "''"))
    }
}
