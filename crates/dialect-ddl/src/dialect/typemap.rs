//! Type-name table, dialect type rules and the default type resolver.
//!
//! Resolution of a [`DataType`] into an SQL type fragment runs in three
//! tiers:
//!
//! 1. [`TypeRule`]s registered by the dialect, in registration order
//! 2. the dialect's sparse [`TypeNames`] override map
//! 3. [`default_type`], the dialect-independent default table
//!
//! A `None` result means the type has no SQL representation.

use std::collections::BTreeMap;

use crate::core::schema::{Column, DataType};

/// Integer width in bytes from a column size. The sign is ignored and any
/// fractional part truncated.
pub fn byte_width(size: f64) -> u64 {
    (size as i64).unsigned_abs()
}

/// Sparse map from data types to dialect-specific type keywords.
///
/// A type present in the map always renders as exactly its keyword, without
/// any size suffix. Types absent from the map fall through to
/// [`default_type`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeNames {
    names: BTreeMap<DataType, String>,
}

impl TypeNames {
    /// Create an empty override map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the keyword for a data type.
    pub fn set(&mut self, data_type: DataType, keyword: impl Into<String>) {
        self.names.insert(data_type, keyword.into());
    }

    /// Get the overriding keyword for a data type.
    pub fn get(&self, data_type: DataType) -> Option<&str> {
        self.names.get(&data_type).map(String::as_str)
    }

    /// Check if a data type is overridden.
    pub fn contains(&self, data_type: DataType) -> bool {
        self.names.contains_key(&data_type)
    }

    /// Number of overridden types.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if nothing is overridden.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over overrides ordered by data type.
    pub fn iter(&self) -> impl Iterator<Item = (DataType, &str)> {
        self.names.iter().map(|(t, k)| (*t, k.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(DataType, S)> for TypeNames {
    fn from_iter<I: IntoIterator<Item = (DataType, S)>>(iter: I) -> Self {
        let mut names = TypeNames::new();
        for (data_type, keyword) in iter {
            names.set(data_type, keyword);
        }
        names
    }
}

/// How a dialect type rule renders its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRender {
    /// Choose between two keywords by byte width: `large` when the width is
    /// at least `threshold`, `standard` otherwise.
    ByteWidth {
        standard: String,
        large: String,
        threshold: u64,
    },
    /// Always the same keyword, whatever the size.
    Fixed(String),
    /// The dialect's [`TypeNames`] keyword for the type.
    Named,
}

/// Dialect-specific rendering for one data type, checked before the
/// type-name table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRule {
    /// Data type the rule applies to.
    pub data_type: DataType,
    /// Rendering strategy.
    pub render: TypeRender,
}

impl TypeRule {
    /// Width-selected keyword (e.g. `SERIAL`/`BIGSERIAL`).
    pub fn byte_width(
        data_type: DataType,
        standard: impl Into<String>,
        large: impl Into<String>,
        threshold: u64,
    ) -> Self {
        Self {
            data_type,
            render: TypeRender::ByteWidth {
                standard: standard.into(),
                large: large.into(),
                threshold,
            },
        }
    }

    /// Size-independent keyword.
    pub fn fixed(data_type: DataType, keyword: impl Into<String>) -> Self {
        Self {
            data_type,
            render: TypeRender::Fixed(keyword.into()),
        }
    }

    /// Keyword taken from the type-name table.
    pub fn named(data_type: DataType) -> Self {
        Self {
            data_type,
            render: TypeRender::Named,
        }
    }

    /// Apply the rule. Returns `None` only for a `Named` rule whose type has
    /// no entry in `names`.
    pub fn apply(&self, size: f64, names: &TypeNames) -> Option<String> {
        match &self.render {
            TypeRender::ByteWidth {
                standard,
                large,
                threshold,
            } => {
                if byte_width(size) >= *threshold {
                    Some(large.clone())
                } else {
                    Some(standard.clone())
                }
            }
            TypeRender::Fixed(keyword) => Some(keyword.clone()),
            TypeRender::Named => names.get(self.data_type).map(str::to_string),
        }
    }
}

/// Default SQL type for a data type.
///
/// | Type | Rendering |
/// |---|---|
/// | Integer, AutoInc | 1–2 bytes `SMALLINT`, over 4 `BIGINT`, else `INTEGER` |
/// | Varchar | `VARCHAR(n)`, 100 when no size |
/// | Char | `CHAR(n)`, 1 when no size |
/// | DateTime, Timestamp | `TIMESTAMP` |
/// | Decimal | `DECIMAL(p,s)`, bare `DECIMAL` when no precision |
/// | UniqueId | `CHAR(36)` |
pub fn default_type(data_type: DataType, size: f64, column: &Column) -> Option<String> {
    let sql = match data_type {
        DataType::Integer | DataType::AutoInc => {
            let bytes = byte_width(size);
            if bytes > 0 && bytes < 3 {
                "SMALLINT".to_string()
            } else if bytes > 4 {
                "BIGINT".to_string()
            } else {
                "INTEGER".to_string()
            }
        }
        DataType::Varchar => {
            let len = match byte_width(size) {
                0 => 100,
                n => n,
            };
            format!("VARCHAR({})", len)
        }
        DataType::Char => {
            let len = match byte_width(size) {
                0 => 1,
                n => n,
            };
            format!("CHAR({})", len)
        }
        DataType::Date => "DATE".to_string(),
        DataType::Time => "TIME".to_string(),
        DataType::DateTime | DataType::Timestamp => "TIMESTAMP".to_string(),
        DataType::Bool => "BOOLEAN".to_string(),
        DataType::Float => "FLOAT".to_string(),
        DataType::Decimal => {
            let precision = byte_width(size);
            if precision > 0 {
                format!("DECIMAL({},{})", precision, column.scale)
            } else {
                "DECIMAL".to_string()
            }
        }
        DataType::Clob => "CLOB".to_string(),
        DataType::Blob => "BLOB".to_string(),
        DataType::UniqueId => "CHAR(36)".to_string(),
        DataType::Unknown => return None,
    };
    Some(sql)
}
