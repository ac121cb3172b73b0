//! Identifier validation and quoting helpers shared by all dialects.
//!
//! SQL identifiers cannot be bound as parameters, so every name that ends up
//! in generated DDL goes through one of these helpers. A name is emitted
//! unquoted only when it is a plain identifier and not a reserved word;
//! otherwise the dialect quotes it and escapes the quote character.

use crate::error::{DdlError, Result};

/// Maximum identifier length (conservative limit across databases).
/// - PostgreSQL: 63 bytes
/// - SQL Server: 128 characters
const MAX_IDENTIFIER_LENGTH: usize = 128;

/// Reserved words common to ANSI SQL and every built-in dialect.
pub const ANSI_RESERVED: &[&str] = &[
    "ALL", "ALTER", "AND", "ANY", "AS", "ASC", "BETWEEN", "BY", "CASE", "CHECK", "COLUMN",
    "CONSTRAINT", "CREATE", "CROSS", "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP",
    "CURRENT_USER", "DEFAULT", "DELETE", "DESC", "DISTINCT", "DROP", "ELSE", "END", "EXISTS",
    "FALSE", "FOREIGN", "FROM", "FULL", "GRANT", "GROUP", "HAVING", "IN", "INDEX", "INNER",
    "INSERT", "INTERSECT", "INTO", "IS", "JOIN", "KEY", "LEFT", "LIKE", "NOT", "NULL", "ON",
    "OR", "ORDER", "OUTER", "PRIMARY", "REFERENCES", "RIGHT", "SELECT", "SESSION_USER", "SET",
    "SOME", "TABLE", "THEN", "TO", "TRUE", "UNION", "UNIQUE", "UPDATE", "USER", "USING",
    "VALUES", "VIEW", "WHEN", "WHERE", "WITH",
];

/// Additional PostgreSQL reserved words.
pub const POSTGRES_RESERVED: &[&str] = &[
    "ANALYSE", "ANALYZE", "ARRAY", "ASYMMETRIC", "BOTH", "CAST", "COLLATE", "CONCURRENTLY",
    "DEFERRABLE", "DO", "FETCH", "FOR", "FREEZE", "ILIKE", "INITIALLY", "LATERAL", "LEADING",
    "LIMIT", "LOCALTIME", "LOCALTIMESTAMP", "NATURAL", "NOTNULL", "OFFSET", "ONLY", "OVERLAPS",
    "PLACING", "RETURNING", "SIMILAR", "SYMMETRIC", "TABLESAMPLE", "TRAILING", "VARIADIC",
    "VERBOSE", "WINDOW",
];

/// Additional SQL Server reserved words.
pub const MSSQL_RESERVED: &[&str] = &[
    "BACKUP", "BEGIN", "BREAK", "BROWSE", "BULK", "CLUSTERED", "COMMIT", "CONTAINS", "CONTINUE",
    "DATABASE", "DECLARE", "DENY", "DUMP", "ERRLVL", "ESCAPE", "EXEC", "EXECUTE", "EXIT",
    "FILE", "FILLFACTOR", "FUNCTION", "GOTO", "HOLDLOCK", "IDENTITY", "IF", "KILL", "LINENO",
    "MERGE", "NOCHECK", "NONCLUSTERED", "OPEN", "OVER", "PERCENT", "PIVOT", "PLAN", "PRINT",
    "PROC", "PROCEDURE", "PUBLIC", "RAISERROR", "READ", "RESTORE", "RETURN", "REVERT",
    "REVOKE", "ROLLBACK", "ROWCOUNT", "RULE", "SAVE", "SCHEMA", "SHUTDOWN", "TOP", "TRAN",
    "TRANSACTION", "TRIGGER", "TRUNCATE", "UNPIVOT", "USE", "WAITFOR", "WHILE",
];

/// Validate an identifier for security issues.
///
/// Rejects:
/// - Empty identifiers
/// - Identifiers containing null bytes (injection vector)
/// - Identifiers exceeding maximum length
///
/// # Errors
///
/// Returns `DdlError::Config` for invalid identifiers with a descriptive message.
pub fn validate_identifier(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(DdlError::Config("Identifier cannot be empty".to_string()));
    }

    if name.contains('\0') {
        return Err(DdlError::Config(format!(
            "SECURITY: Identifier contains null byte (possible injection attempt): {:?}",
            name
        )));
    }

    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(DdlError::Config(format!(
            "SECURITY: Identifier exceeds maximum length of {} bytes (got {} bytes): {:?}",
            MAX_IDENTIFIER_LENGTH,
            name.len(),
            name
        )));
    }

    Ok(())
}

/// Check whether a name matches `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Check whether a name is one of `reserved` (case-insensitive).
pub fn is_reserved(name: &str, reserved: &[&str]) -> bool {
    reserved.iter().any(|word| word.eq_ignore_ascii_case(name))
}

/// Wrap an identifier in double quotes (ANSI, PostgreSQL), doubling embedded
/// double quotes.
pub fn quote_double(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Wrap an identifier in brackets (SQL Server), doubling embedded closing
/// brackets.
pub fn quote_bracket(name: &str) -> String {
    format!("[{}]", name.replace(']', "]]"))
}
