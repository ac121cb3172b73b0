//! Schema model: databases, tables, columns, indexes and relations.
//!
//! These types are the database-independent input of the generator. They are
//! built once (in code or loaded from a YAML/JSON schema file) and only read
//! during DDL generation.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::value::DefaultValue;
use crate::error::{DdlError, Result};

/// Abstract, database-independent column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    /// Type without an SQL representation.
    Unknown,
    /// Integer; the size is the width in bytes.
    Integer,
    /// Auto-incremented integer; the size is the width in bytes.
    #[serde(alias = "autoinc", alias = "autoincrement", alias = "serial")]
    AutoInc,
    /// Variable-length character string; the size is the maximum length.
    #[serde(alias = "text", alias = "string")]
    Varchar,
    /// Fixed-length character string.
    Char,
    /// Date without time.
    Date,
    /// Time of day.
    Time,
    /// Date and time.
    #[serde(alias = "datetime")]
    DateTime,
    /// Date and time, typically maintained by the database.
    Timestamp,
    /// Boolean flag.
    #[serde(alias = "boolean")]
    Bool,
    /// Floating point number.
    #[serde(alias = "double")]
    Float,
    /// Exact decimal; the size is the precision.
    #[serde(alias = "numeric")]
    Decimal,
    /// Large character object.
    Clob,
    /// Large binary object.
    Blob,
    /// Globally unique identifier.
    #[serde(alias = "uniqueid", alias = "uuid")]
    UniqueId,
}

impl DataType {
    /// All data types, in declaration order.
    pub const ALL: [DataType; 15] = [
        DataType::Unknown,
        DataType::Integer,
        DataType::AutoInc,
        DataType::Varchar,
        DataType::Char,
        DataType::Date,
        DataType::Time,
        DataType::DateTime,
        DataType::Timestamp,
        DataType::Bool,
        DataType::Float,
        DataType::Decimal,
        DataType::Clob,
        DataType::Blob,
        DataType::UniqueId,
    ];

    /// Snake-case name, as used in schema files.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Unknown => "unknown",
            DataType::Integer => "integer",
            DataType::AutoInc => "auto_inc",
            DataType::Varchar => "varchar",
            DataType::Char => "char",
            DataType::Date => "date",
            DataType::Time => "time",
            DataType::DateTime => "date_time",
            DataType::Timestamp => "timestamp",
            DataType::Bool => "bool",
            DataType::Float => "float",
            DataType::Decimal => "decimal",
            DataType::Clob => "clob",
            DataType::Blob => "blob",
            DataType::UniqueId => "unique_id",
        }
    }

    /// Whether literals of this type are written as bare numbers.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            DataType::Integer | DataType::AutoInc | DataType::Float | DataType::Decimal
        )
    }

    /// Whether literals of this type are character strings.
    pub fn is_text(&self) -> bool {
        matches!(self, DataType::Varchar | DataType::Char | DataType::Clob)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Database metadata: the unit of "create everything" requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Database {
    /// Database name (informational).
    #[serde(default)]
    pub name: String,

    /// Schema that qualifies every object name, if any.
    #[serde(default)]
    pub schema: Option<String>,

    /// Tables in declaration order.
    #[serde(default)]
    pub tables: Vec<Table>,

    /// Foreign key relations in declaration order.
    #[serde(default)]
    pub relations: Vec<Relation>,
}

impl Database {
    /// Create an empty database.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the schema that qualifies object names.
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Append a table.
    pub fn with_table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    /// Append a relation.
    pub fn with_relation(mut self, relation: Relation) -> Self {
        self.relations.push(relation);
        self
    }

    /// Load a schema file. `.json` files are parsed as JSON, everything else
    /// as YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Parse a schema from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a schema from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Find a table by name (case-insensitive).
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Find a table by name, returning an error if it does not exist.
    pub fn require_table(&self, name: &str) -> Result<&Table> {
        self.table(name)
            .ok_or_else(|| DdlError::UnknownObject(format!("table '{}'", name)))
    }

    /// Iterate over all (table, column) pairs in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = (&Table, &Column)> {
        self.tables
            .iter()
            .flat_map(|t| t.columns.iter().map(move |c| (t, c)))
    }
}

/// Table metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    /// Table name.
    pub name: String,

    /// Column definitions in declaration order.
    #[serde(default)]
    pub columns: Vec<Column>,

    /// Primary key column names.
    #[serde(default)]
    pub primary_key: Vec<String>,

    /// Indexes created together with the table.
    #[serde(default)]
    pub indexes: Vec<Index>,
}

impl Table {
    /// Create a table without columns.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a column.
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Set the primary key columns.
    pub fn with_primary_key<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_key = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Append an index.
    pub fn with_index(mut self, index: Index) -> Self {
        self.indexes.push(index);
        self
    }

    /// Find a column by name (case-insensitive).
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Find a column by name, returning an error if it does not exist.
    pub fn require_column(&self, name: &str) -> Result<&Column> {
        self.column(name).ok_or_else(|| {
            DdlError::UnknownObject(format!("column '{}.{}'", self.name, name))
        })
    }

    /// Find an index by name (case-insensitive).
    pub fn index(&self, name: &str) -> Option<&Index> {
        self.indexes
            .iter()
            .find(|i| i.name.eq_ignore_ascii_case(name))
    }

    /// Check if the table has a primary key.
    pub fn has_pk(&self) -> bool {
        !self.primary_key.is_empty()
    }
}

/// Column metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    pub name: String,

    /// Abstract data type.
    #[serde(rename = "type")]
    pub data_type: DataType,

    /// Byte width for integers, length for strings, precision for decimals.
    /// The sign carries no meaning.
    #[serde(default)]
    pub size: f64,

    /// Decimal scale.
    #[serde(default)]
    pub scale: u32,

    /// Whether the column is NOT NULL.
    #[serde(default)]
    pub required: bool,

    /// Whether the database assigns the value.
    #[serde(default)]
    pub auto_generated: bool,

    /// Default value, if any.
    #[serde(default)]
    pub default: Option<DefaultValue>,

    /// Explicit name of the backing sequence for auto-increment columns.
    #[serde(default)]
    pub sequence: Option<String>,
}

impl Column {
    /// Create an optional column.
    pub fn new(name: impl Into<String>, data_type: DataType, size: f64) -> Self {
        Self {
            name: name.into(),
            data_type,
            size,
            scale: 0,
            required: false,
            auto_generated: false,
            default: None,
            sequence: None,
        }
    }

    /// Create an auto-increment column. Such columns are always generated by
    /// the database.
    pub fn auto_inc(name: impl Into<String>, size: f64) -> Self {
        Self {
            auto_generated: true,
            ..Self::new(name, DataType::AutoInc, size)
        }
    }

    /// Mark the column NOT NULL.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the column as assigned by the database.
    pub fn auto_generated(mut self) -> Self {
        self.auto_generated = true;
        self
    }

    /// Set the decimal scale.
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    /// Set the default value.
    pub fn with_default(mut self, value: impl Into<DefaultValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Set the backing sequence name.
    pub fn with_sequence(mut self, name: impl Into<String>) -> Self {
        self.sequence = Some(name.into());
        self
    }

    /// Name of the sequence backing this column: the explicit name if set,
    /// otherwise `<table>_<column>_SEQ`.
    pub fn sequence_name(&self, table: &Table) -> Cow<'_, str> {
        match &self.sequence {
            Some(name) => Cow::Borrowed(name.as_str()),
            None => Cow::Owned(format!("{}_{}_SEQ", table.name, self.name)),
        }
    }

    /// Whether the database assigns the value. Auto-increment columns always
    /// qualify, whether or not the flag was set.
    pub fn is_auto_generated(&self) -> bool {
        self.auto_generated || self.data_type == DataType::AutoInc
    }

    /// `table.column`, for messages and script comments.
    pub fn full_name(&self, table: &Table) -> String {
        format!("{}.{}", table.name, self.name)
    }
}

/// Index metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Index {
    /// Index name.
    pub name: String,

    /// Indexed column names.
    pub columns: Vec<String>,

    /// Whether the index is unique.
    #[serde(default)]
    pub unique: bool,
}

impl Index {
    /// Create a non-unique index.
    pub fn new<I, S>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            unique: false,
        }
    }

    /// Make the index unique.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

/// Foreign key relation between two tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relation {
    /// Constraint name.
    pub name: String,

    /// Referencing table.
    pub table: String,

    /// Referencing column names.
    pub columns: Vec<String>,

    /// Referenced table.
    pub ref_table: String,

    /// Referenced column names.
    pub ref_columns: Vec<String>,

    /// ON DELETE action (e.g. "CASCADE", "SET NULL").
    #[serde(default)]
    pub on_delete: Option<String>,
}

impl Relation {
    /// Create a relation.
    pub fn new<I, S, J, T>(
        name: impl Into<String>,
        table: impl Into<String>,
        columns: I,
        ref_table: impl Into<String>,
        ref_columns: J,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        J: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            table: table.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            ref_table: ref_table.into(),
            ref_columns: ref_columns.into_iter().map(Into::into).collect(),
            on_delete: None,
        }
    }

    /// Set the ON DELETE action.
    pub fn on_delete(mut self, action: impl Into<String>) -> Self {
        self.on_delete = Some(action.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_table() -> Table {
        Table::new("T")
            .with_column(Column::auto_inc("id", 4.0))
            .with_column(Column::new("name", DataType::Varchar, 50.0).required())
            .with_primary_key(["id"])
    }

    #[test]
    fn test_sequence_name_derived() {
        let table = make_test_table();
        let id = table.column("id").unwrap();
        assert_eq!(id.sequence_name(&table), "T_id_SEQ");
    }

    #[test]
    fn test_sequence_name_explicit() {
        let table = Table::new("orders")
            .with_column(Column::auto_inc("id", 8.0).with_sequence("order_seq"));
        let id = &table.columns[0];
        assert_eq!(id.sequence_name(&table), "order_seq");
    }

    #[test]
    fn test_column_lookup_case_insensitive() {
        let table = make_test_table();
        assert!(table.column("NAME").is_some());
        assert!(table.column("missing").is_none());
        assert!(table.require_column("missing").is_err());
    }

    #[test]
    fn test_database_columns_in_declaration_order() {
        let db = Database::new("shop")
            .with_table(make_test_table())
            .with_table(Table::new("U").with_column(Column::new("x", DataType::Bool, 0.0)));

        let names: Vec<String> = db.columns().map(|(t, c)| c.full_name(t)).collect();
        assert_eq!(names, vec!["T.id", "T.name", "U.x"]);
    }

    #[test]
    fn test_database_from_yaml() {
        let yaml = r#"
name: shop
schema: sales
tables:
  - name: T
    primary_key: [id]
    columns:
      - { name: id, type: autoinc, size: 4, auto_generated: true }
      - { name: name, type: text, size: 50, required: true }
      - { name: price, type: decimal, size: 10, scale: 2, default: 0 }
relations:
  - name: FK_T_U
    table: T
    columns: [id]
    ref_table: U
    ref_columns: [t_id]
"#;
        let db = Database::from_yaml(yaml).unwrap();
        assert_eq!(db.schema.as_deref(), Some("sales"));
        let table = db.require_table("t").unwrap();
        assert_eq!(table.columns[0].data_type, DataType::AutoInc);
        assert_eq!(table.columns[1].data_type, DataType::Varchar);
        assert!(table.columns[1].required);
        assert_eq!(table.columns[2].scale, 2);
        assert_eq!(table.columns[2].default, Some(DefaultValue::Int(0)));
        assert_eq!(db.relations.len(), 1);
    }

    #[test]
    fn test_auto_inc_from_yaml_is_auto_generated() {
        let yaml = r#"
name: x
tables:
  - name: T
    columns:
      - { name: id, type: autoinc, size: 4, default: 7 }
      - { name: n, type: integer, size: 4 }
"#;
        let db = Database::from_yaml(yaml).unwrap();
        let table = &db.tables[0];
        assert!(!table.columns[0].auto_generated);
        assert!(table.columns[0].is_auto_generated());
        assert!(!table.columns[1].is_auto_generated());
    }

    #[test]
    fn test_database_from_json() {
        let json = r#"{"name":"x","tables":[{"name":"A","columns":[{"name":"flag","type":"bool","default":true}]}]}"#;
        let db = Database::from_json(json).unwrap();
        assert_eq!(db.tables[0].columns[0].default, Some(DefaultValue::Bool(true)));
        assert!(db.schema.is_none());
    }

    #[test]
    fn test_data_type_display() {
        assert_eq!(DataType::AutoInc.to_string(), "auto_inc");
        assert_eq!(DataType::UniqueId.to_string(), "unique_id");
        assert!(DataType::Decimal.is_numeric());
        assert!(DataType::Clob.is_text());
        assert!(!DataType::Blob.is_text());
    }
}
