//! Dialect-independent DDL generation.
//!
//! [`DdlGenerator`] owns the algorithm skeleton: iterate tables, iterate
//! columns, assemble column descriptors and statements. Everything that
//! differs between databases is looked up in its [`DialectProfile`].
//!
//! # Script order
//!
//! [`DdlGenerator::create_database`] is an explicit pipeline:
//!
//! 1. every [`PreTablePhase`] of the profile, in registration order
//!    (e.g. CREATE SEQUENCE for auto-increment columns)
//! 2. one CREATE TABLE per table, each followed by its indexes
//! 3. one foreign key constraint per relation
//!
//! so auxiliary objects always precede the tables that may use them.

mod column;
mod objects;
mod phase;
mod sequence;

pub use phase::PreTablePhase;
pub use sequence::SequencePhase;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::schema::{Column, Database, Table};
use crate::core::script::Script;
use crate::core::traits::Dialect;
use crate::dialect::DialectProfile;
use crate::error::{DdlError, Result};

/// What to do with a column whose type cannot be rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnresolvedPolicy {
    /// Abort the statement with [`DdlError::UnresolvedType`].
    #[default]
    Fail,
    /// Leave the column out of the statement and log a warning.
    Skip,
}

/// Options applied on top of the dialect profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Schema used instead of the database's own schema.
    pub schema: Option<String>,
    /// Overrides the dialect's column-default capability when set.
    pub column_defaults: Option<bool>,
    /// Prefix statements with `-- ... --` comment lines.
    pub comments: bool,
    /// Handling of unresolved column types.
    pub unresolved: UnresolvedPolicy,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            schema: None,
            column_defaults: None,
            comments: true,
            unresolved: UnresolvedPolicy::Fail,
        }
    }
}

/// DDL action requested through [`DdlGenerator::ddl_script`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DdlAction {
    Create,
    Drop,
    Alter,
}

/// Schema object addressed by name through [`DdlGenerator::ddl_script`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DdlTarget<'a> {
    /// The whole database.
    Database,
    /// One table.
    Table(&'a str),
    /// One column of a table.
    Column { table: &'a str, column: &'a str },
    /// One index of a table.
    Index { table: &'a str, index: &'a str },
    /// One foreign key relation.
    Relation(&'a str),
}

/// Generates DDL scripts for one dialect.
#[derive(Debug, Clone)]
pub struct DdlGenerator {
    profile: Arc<DialectProfile>,
    options: GeneratorOptions,
}

impl DdlGenerator {
    /// Create a generator with default options.
    pub fn new(profile: Arc<DialectProfile>) -> Self {
        Self {
            profile,
            options: GeneratorOptions::default(),
        }
    }

    /// Replace the generator options.
    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    /// The dialect profile.
    pub fn profile(&self) -> &DialectProfile {
        &self.profile
    }

    /// The dialect capabilities.
    pub fn dialect(&self) -> &dyn Dialect {
        self.profile.dialect()
    }

    /// The generator options.
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Whether column DEFAULT clauses are emitted.
    pub fn column_defaults(&self) -> bool {
        self.options
            .column_defaults
            .unwrap_or_else(|| self.dialect().ddl_column_defaults())
    }

    /// Schema that qualifies object names of `db`.
    pub fn schema<'a>(&'a self, db: &'a Database) -> Option<&'a str> {
        self.options.schema.as_deref().or(db.schema.as_deref())
    }

    /// Render an object name, quoted if the dialect requires it and qualified
    /// with the schema.
    pub fn qualified_name(&self, db: &Database, name: &str) -> String {
        let dialect = self.dialect();
        dialect.qualified_name(self.schema(db), name, dialect.needs_quoting(name))
    }

    /// Render a comma-separated list of identifiers.
    pub(crate) fn ident_list(&self, names: &[String]) -> String {
        names
            .iter()
            .map(|n| self.dialect().ident(n))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Append a `-- text --` comment line if comments are enabled.
    pub(crate) fn comment(&self, sql: &mut String, text: &str) {
        if self.options.comments {
            sql.push_str("-- ");
            sql.push_str(text);
            sql.push_str(" --\n");
        }
    }

    /// Apply the unresolved-type policy to a column that could not be
    /// rendered.
    pub(crate) fn unresolved(&self, table: &Table, column: &Column) -> Result<()> {
        match self.options.unresolved {
            UnresolvedPolicy::Fail => Err(DdlError::unresolved(
                &table.name,
                &column.name,
                column.data_type,
            )),
            UnresolvedPolicy::Skip => {
                warn!(
                    "Skipping column {}: data type {} has no {} representation",
                    column.full_name(table),
                    column.data_type,
                    self.profile.name()
                );
                Ok(())
            }
        }
    }

    /// Append the DDL creating every object of `db`.
    ///
    /// All pre-table phase statements come before the first CREATE TABLE.
    ///
    /// On error `script` is left untouched.
    pub fn create_database(&self, db: &Database, script: &mut Script) -> Result<()> {
        let mut out = Script::new();

        for phase in self.profile.phases() {
            phase.create(self, db, &mut out)?;
        }

        for table in &db.tables {
            self.create_table(db, table, &mut out)?;
        }

        for relation in &db.relations {
            self.create_relation(db, relation, &mut out)?;
        }

        info!(
            "Generated {} {} statements for database '{}' ({} tables)",
            out.len(),
            self.profile.name(),
            db.name,
            db.tables.len()
        );
        script.append(out);
        Ok(())
    }

    /// Append the DDL dropping every object of `db`, in reverse dependency
    /// order: relations, tables (last declared first), then the objects of
    /// the pre-table phases.
    pub fn drop_database(&self, db: &Database, script: &mut Script) -> Result<()> {
        let mut out = Script::new();

        for relation in db.relations.iter().rev() {
            self.drop_relation(db, relation, &mut out)?;
        }

        for table in db.tables.iter().rev() {
            self.drop_table(db, table, &mut out)?;
        }

        for phase in self.profile.phases().iter().rev() {
            phase.destroy(self, db, &mut out)?;
        }

        info!(
            "Generated {} {} drop statements for database '{}'",
            out.len(),
            self.profile.name(),
            db.name
        );
        script.append(out);
        Ok(())
    }

    /// Append the DDL for `action` on the object named by `target`.
    ///
    /// # Errors
    ///
    /// - [`DdlError::UnknownObject`] if a named object is not in `db`
    /// - [`DdlError::Unsupported`] for ALTER on anything but a column
    /// - [`DdlError::UnresolvedType`] under [`UnresolvedPolicy::Fail`]
    pub fn ddl_script(
        &self,
        action: DdlAction,
        db: &Database,
        target: DdlTarget<'_>,
        script: &mut Script,
    ) -> Result<()> {
        match target {
            DdlTarget::Database => match action {
                DdlAction::Create => self.create_database(db, script),
                DdlAction::Drop => self.drop_database(db, script),
                DdlAction::Alter => Err(DdlError::Unsupported(
                    "ALTER is not defined for a database".to_string(),
                )),
            },
            DdlTarget::Table(name) => {
                let table = db.require_table(name)?;
                match action {
                    DdlAction::Create => self.create_table(db, table, script),
                    DdlAction::Drop => self.drop_table(db, table, script),
                    DdlAction::Alter => Err(DdlError::Unsupported(format!(
                        "ALTER is not defined for table '{}'; alter its columns instead",
                        table.name
                    ))),
                }
            }
            DdlTarget::Column { table, column } => {
                let table = db.require_table(table)?;
                let column = table.require_column(column)?;
                match action {
                    DdlAction::Create => self.add_column(db, table, column, script),
                    DdlAction::Drop => self.drop_column(db, table, column, script),
                    DdlAction::Alter => self.alter_column(db, table, column, script),
                }
            }
            DdlTarget::Index { table, index } => {
                let table = db.require_table(table)?;
                let index = table.index(index).ok_or_else(|| {
                    DdlError::UnknownObject(format!("index '{}' on '{}'", index, table.name))
                })?;
                match action {
                    DdlAction::Create => self.create_index(db, table, index, script),
                    DdlAction::Drop => self.drop_index(db, table, index, script),
                    DdlAction::Alter => Err(DdlError::Unsupported(format!(
                        "ALTER is not defined for index '{}'",
                        index.name
                    ))),
                }
            }
            DdlTarget::Relation(name) => {
                let relation = db
                    .relations
                    .iter()
                    .find(|r| r.name.eq_ignore_ascii_case(name))
                    .ok_or_else(|| DdlError::UnknownObject(format!("relation '{}'", name)))?;
                match action {
                    DdlAction::Create => self.create_relation(db, relation, script),
                    DdlAction::Drop => self.drop_relation(db, relation, script),
                    DdlAction::Alter => Err(DdlError::Unsupported(format!(
                        "ALTER is not defined for relation '{}'",
                        relation.name
                    ))),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::DialectCatalog;
    use crate::core::schema::{Column, DataType, Index, Relation, Table};

    fn generator(dialect: &str) -> DdlGenerator {
        DdlGenerator::new(DialectCatalog::builtin().require(dialect).unwrap())
    }

    fn shop() -> Database {
        Database::new("shop")
            .with_table(
                Table::new("customer")
                    .with_column(Column::auto_inc("id", 4.0))
                    .with_column(Column::new("name", DataType::Varchar, 80.0).required())
                    .with_primary_key(["id"]),
            )
            .with_table(
                Table::new("orders")
                    .with_column(Column::auto_inc("id", 8.0))
                    .with_column(Column::new("customer_id", DataType::Integer, 4.0).required())
                    .with_column(Column::new("note", DataType::Clob, 0.0))
                    .with_primary_key(["id"])
                    .with_index(Index::new("ix_orders_customer", ["customer_id"])),
            )
            .with_relation(
                Relation::new("fk_orders_customer", "orders", ["customer_id"], "customer", ["id"])
                    .on_delete("CASCADE"),
            )
    }

    #[test]
    fn test_round_trip_single_table() {
        let db = Database::new("db").with_table(
            Table::new("T")
                .with_column(Column::auto_inc("id", 4.0))
                .with_column(Column::new("name", DataType::Varchar, 50.0).required()),
        );
        let mut script = Script::new();
        generator("postgres").create_database(&db, &mut script).unwrap();

        assert_eq!(script.len(), 2);
        assert_eq!(
            script.statements()[0],
            "-- creating sequence for column T.id --\n\
             CREATE SEQUENCE T_id_SEQ INCREMENT BY 1 START WITH 1 MINVALUE 0"
        );
        assert_eq!(
            script.statements()[1],
            "-- creating table T --\n\
             CREATE TABLE T (\n    id SERIAL NOT NULL,\n    name VARCHAR(50) NOT NULL\n)"
        );
    }

    #[test]
    fn test_sequences_precede_every_table() {
        let db = shop();
        let mut script = Script::new();
        generator("postgres").create_database(&db, &mut script).unwrap();

        let sequences: Vec<usize> = script
            .iter()
            .enumerate()
            .filter(|(_, s)| s.contains("CREATE SEQUENCE"))
            .map(|(i, _)| i)
            .collect();
        let first_table = script.position("CREATE TABLE").unwrap();

        assert_eq!(sequences.len(), 2);
        assert!(sequences.iter().all(|&i| i < first_table));
        assert!(script.position("orders_id_SEQ").unwrap() > script.position("customer_id_SEQ").unwrap());
    }

    #[test]
    fn test_create_database_order() {
        let db = shop();
        let mut script = Script::new();
        generator("postgres").create_database(&db, &mut script).unwrap();

        // 2 sequences, 2 tables, 1 index, 1 relation
        assert_eq!(script.len(), 6);
        assert!(script.statements()[2].contains("CREATE TABLE customer"));
        assert!(script.statements()[3].contains("CREATE TABLE orders"));
        assert!(script.statements()[4].starts_with("CREATE INDEX ix_orders_customer ON orders"));
        assert!(script.statements()[5].contains(
            "ALTER TABLE orders ADD CONSTRAINT fk_orders_customer FOREIGN KEY (customer_id) \
             REFERENCES customer (id) ON DELETE CASCADE"
        ));
    }

    #[test]
    fn test_create_database_twice_duplicates_sequences() {
        let db = shop();
        let gen = generator("postgres");
        let mut script = Script::new();
        gen.create_database(&db, &mut script).unwrap();
        gen.create_database(&db, &mut script).unwrap();

        let count = script.iter().filter(|s| s.contains("CREATE SEQUENCE")).count();
        assert_eq!(count, 4);
    }

    #[test]
    fn test_mssql_has_no_sequences() {
        let db = shop();
        let mut script = Script::new();
        generator("mssql").create_database(&db, &mut script).unwrap();

        assert!(script.position("CREATE SEQUENCE").is_none());
        assert!(script.statements()[0].contains("id INT IDENTITY(1, 1) NOT NULL"));
        assert!(script.statements()[1].contains("id BIGINT IDENTITY(1, 1) NOT NULL"));
        assert!(script.statements()[1].contains("note NVARCHAR(MAX)"));
    }

    #[test]
    fn test_drop_database_reverse_order() {
        let db = shop();
        let mut script = Script::new();
        generator("postgres").drop_database(&db, &mut script).unwrap();

        let stmts = script.statements();
        assert_eq!(stmts.len(), 5);
        assert_eq!(stmts[0], "ALTER TABLE orders DROP CONSTRAINT fk_orders_customer");
        assert_eq!(stmts[1], "DROP TABLE orders");
        assert_eq!(stmts[2], "DROP TABLE customer");
        assert_eq!(stmts[3], "DROP SEQUENCE customer_id_SEQ");
        assert_eq!(stmts[4], "DROP SEQUENCE orders_id_SEQ");
    }

    #[test]
    fn test_schema_option_overrides_database_schema() {
        let db = shop().with_schema("sales");
        let gen = generator("postgres").with_options(GeneratorOptions {
            schema: Some("archive".to_string()),
            comments: false,
            ..GeneratorOptions::default()
        });
        let mut script = Script::new();
        gen.create_database(&db, &mut script).unwrap();

        assert_eq!(
            script.statements()[0],
            "CREATE SEQUENCE archive.customer_id_SEQ INCREMENT BY 1 START WITH 1 MINVALUE 0"
        );
        assert!(script.statements()[2].starts_with("CREATE TABLE archive.customer ("));
    }

    #[test]
    fn test_unresolved_fail_aborts_statement() {
        let db = Database::new("db").with_table(
            Table::new("T")
                .with_column(Column::new("ok", DataType::Integer, 4.0))
                .with_column(Column::new("odd", DataType::Unknown, 0.0)),
        );
        let mut script = Script::new();
        let err = generator("generic").create_database(&db, &mut script).unwrap_err();

        assert!(matches!(
            err,
            DdlError::UnresolvedType { ref column, data_type: DataType::Unknown, .. } if column == "odd"
        ));
        assert!(script.is_empty());
    }

    #[test]
    fn test_unresolved_fail_discards_sequences() {
        let db = Database::new("db").with_table(
            Table::new("T")
                .with_column(Column::auto_inc("id", 4.0))
                .with_column(Column::new("x", DataType::Unknown, 0.0)),
        );
        let mut script = Script::new();
        script.add_stmt("-- header");
        let err = generator("postgres").create_database(&db, &mut script).unwrap_err();

        assert!(matches!(err, DdlError::UnresolvedType { ref column, .. } if column == "x"));
        assert_eq!(script.statements(), &["-- header".to_string()]);
    }

    #[test]
    fn test_unresolved_skip_omits_column() {
        let db = Database::new("db").with_table(
            Table::new("T")
                .with_column(Column::new("ok", DataType::Integer, 4.0))
                .with_column(Column::new("odd", DataType::Unknown, 0.0)),
        );
        let gen = generator("generic").with_options(GeneratorOptions {
            unresolved: UnresolvedPolicy::Skip,
            comments: false,
            ..GeneratorOptions::default()
        });
        let mut script = Script::new();
        gen.create_database(&db, &mut script).unwrap();

        assert_eq!(script.statements()[0], "CREATE TABLE T (\n    ok INTEGER\n)");
    }

    #[test]
    fn test_ddl_script_dispatch() {
        let db = shop();
        let gen = generator("postgres").with_options(GeneratorOptions {
            comments: false,
            ..GeneratorOptions::default()
        });
        let mut script = Script::new();

        gen.ddl_script(DdlAction::Drop, &db, DdlTarget::Table("orders"), &mut script)
            .unwrap();
        gen.ddl_script(
            DdlAction::Alter,
            &db,
            DdlTarget::Column { table: "customer", column: "name" },
            &mut script,
        )
        .unwrap();
        gen.ddl_script(
            DdlAction::Drop,
            &db,
            DdlTarget::Index { table: "orders", index: "ix_orders_customer" },
            &mut script,
        )
        .unwrap();

        assert_eq!(
            script.statements(),
            &[
                "DROP TABLE orders".to_string(),
                "ALTER TABLE customer ALTER COLUMN name TYPE VARCHAR(80) NOT NULL".to_string(),
                "DROP INDEX ix_orders_customer".to_string(),
            ]
        );
    }

    #[test]
    fn test_ddl_script_errors() {
        let db = shop();
        let gen = generator("postgres");
        let mut script = Script::new();

        let err = gen
            .ddl_script(DdlAction::Create, &db, DdlTarget::Table("missing"), &mut script)
            .unwrap_err();
        assert!(matches!(err, DdlError::UnknownObject(_)));

        let err = gen
            .ddl_script(DdlAction::Alter, &db, DdlTarget::Database, &mut script)
            .unwrap_err();
        assert!(matches!(err, DdlError::Unsupported(_)));

        let err = gen
            .ddl_script(DdlAction::Create, &db, DdlTarget::Relation("nope"), &mut script)
            .unwrap_err();
        assert!(matches!(err, DdlError::UnknownObject(_)));
        assert!(script.is_empty());
    }
}
