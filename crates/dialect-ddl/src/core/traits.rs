//! Dialect capabilities consumed by the DDL generator.
//!
//! - [`Dialect`]: identifier quoting, name qualification and literal rendering
//!   for one database engine
//!
//! The generator never decides quoting or literal syntax itself; it asks the
//! dialect. Type names and the auto-increment strategy live in the
//! [`DialectProfile`](crate::dialect::DialectProfile) instead, because they
//! are data rather than behaviour.

use super::identifier;
use super::schema::DataType;
use super::value::DefaultValue;

/// SQL syntax strategy for different database engines.
///
/// # Design Pattern
///
/// This is a **Strategy** pattern - different implementations provide
/// interchangeable SQL syntax rules. Default methods cover the ANSI
/// behaviour; engines override only where they diverge.
pub trait Dialect: Send + Sync {
    /// Get the dialect identifier (e.g., "postgres", "mssql").
    fn name(&self) -> &str;

    /// Quote an identifier unconditionally.
    ///
    /// - ANSI/PostgreSQL: `"identifier"`
    /// - MSSQL: `[identifier]`
    fn quote_ident(&self, name: &str) -> String;

    /// Reserved words of this engine beyond the ANSI set.
    fn reserved_words(&self) -> &[&str] {
        &[]
    }

    /// Decide whether an identifier needs quoting.
    ///
    /// Plain identifiers (`[A-Za-z_][A-Za-z0-9_]*`) that are neither ANSI
    /// reserved nor reserved by the engine are emitted as-is.
    fn needs_quoting(&self, name: &str) -> bool {
        !identifier::is_plain_identifier(name)
            || identifier::is_reserved(name, identifier::ANSI_RESERVED)
            || identifier::is_reserved(name, self.reserved_words())
    }

    /// Render an identifier, quoting it only when required.
    fn ident(&self, name: &str) -> String {
        if self.needs_quoting(name) {
            self.quote_ident(name)
        } else {
            name.to_string()
        }
    }

    /// Render an object name qualified with its schema.
    fn qualified_name(&self, schema: Option<&str>, name: &str, quote: bool) -> String {
        let name = if quote {
            self.quote_ident(name)
        } else {
            name.to_string()
        };
        match schema {
            Some(schema) if !schema.is_empty() => format!("{}.{}", self.ident(schema), name),
            _ => name,
        }
    }

    /// Whether DROP INDEX names the indexed table (`DROP INDEX i ON t`).
    fn drop_index_on_table(&self) -> bool {
        false
    }

    /// Whether column-level DEFAULT clauses are emitted at all.
    fn ddl_column_defaults(&self) -> bool {
        true
    }

    /// SQL keyword for a boolean literal.
    fn bool_literal(&self, value: bool) -> &'static str {
        if value {
            "TRUE"
        } else {
            "FALSE"
        }
    }

    /// SQL literal for binary data.
    fn bytes_literal(&self, bytes: &[u8]) -> String {
        format!("X'{}'", hex::encode_upper(bytes))
    }

    /// SQL literal for a character string.
    fn text_literal(&self, s: &str) -> String {
        DefaultValue::quote_text(s)
    }

    /// Render a default value as an SQL literal for a column of `data_type`.
    ///
    /// Numeric columns accept numeric strings unquoted, boolean columns accept
    /// 0/1 integers, and everything else falls back to the value's own form.
    /// Non-finite numbers are always quoted.
    fn literal(&self, value: &DefaultValue, data_type: DataType) -> String {
        match value {
            DefaultValue::Expr { expr } => expr.clone(),
            DefaultValue::Bool(b) => {
                if data_type.is_numeric() {
                    u8::from(*b).to_string()
                } else {
                    self.bool_literal(*b).to_string()
                }
            }
            DefaultValue::Int(i) => {
                if data_type == DataType::Bool {
                    self.bool_literal(*i != 0).to_string()
                } else if data_type.is_text() {
                    self.text_literal(&i.to_string())
                } else {
                    i.to_string()
                }
            }
            DefaultValue::Float(f) => {
                if data_type.is_text() || !f.is_finite() {
                    self.text_literal(&f.to_string())
                } else {
                    f.to_string()
                }
            }
            DefaultValue::Uuid(u) => DefaultValue::quote_text(&u.to_string()),
            DefaultValue::DateTime(dt) => {
                DefaultValue::quote_text(&dt.format("%Y-%m-%d %H:%M:%S%.f").to_string())
            }
            DefaultValue::Date(d) => DefaultValue::quote_text(&d.format("%Y-%m-%d").to_string()),
            DefaultValue::Text(s) => {
                let numeric = s.trim().parse::<f64>().is_ok_and(f64::is_finite);
                if data_type.is_numeric() && numeric {
                    s.trim().to_string()
                } else {
                    self.text_literal(s)
                }
            }
            DefaultValue::Bytes(b) => self.bytes_literal(b),
        }
    }
}
