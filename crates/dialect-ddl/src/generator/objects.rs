//! Table, index, relation and column statements.

use tracing::debug;

use crate::core::schema::{Column, Database, Index, Relation, Table};
use crate::core::script::Script;
use crate::error::{DdlError, Result};

use super::DdlGenerator;

impl DdlGenerator {
    /// Append CREATE TABLE for `table`, followed by its indexes.
    ///
    /// Columns whose type cannot be resolved are handled by the
    /// [`UnresolvedPolicy`](super::UnresolvedPolicy); on `Fail` nothing is
    /// appended. A table left without any clause is rejected with
    /// [`DdlError::Unsupported`].
    pub fn create_table(&self, db: &Database, table: &Table, script: &mut Script) -> Result<()> {
        let mut clauses = Vec::with_capacity(table.columns.len() + 1);
        for column in &table.columns {
            let mut clause = String::new();
            if self.render_column(column, false, &mut clause) {
                clauses.push(clause);
            } else {
                self.unresolved(table, column)?;
            }
        }

        if table.has_pk() {
            clauses.push(format!("PRIMARY KEY ({})", self.ident_list(&table.primary_key)));
        }

        if clauses.is_empty() {
            return Err(DdlError::Unsupported(format!(
                "table '{}' has no column renderable in {}",
                table.name,
                self.profile().name()
            )));
        }

        let mut sql = String::new();
        self.comment(&mut sql, &format!("creating table {}", table.name));
        sql.push_str(&format!(
            "CREATE TABLE {} (\n    {}\n)",
            self.qualified_name(db, &table.name),
            clauses.join(",\n    ")
        ));

        debug!("Table {} with {} clauses", table.name, clauses.len());
        script.add_stmt(sql);

        for index in &table.indexes {
            self.create_index(db, table, index, script)?;
        }
        Ok(())
    }

    /// Append DROP TABLE for `table`.
    pub fn drop_table(&self, db: &Database, table: &Table, script: &mut Script) -> Result<()> {
        script.add_stmt(format!("DROP TABLE {}", self.qualified_name(db, &table.name)));
        Ok(())
    }

    /// Append CREATE [UNIQUE] INDEX for `index` on `table`.
    pub fn create_index(
        &self,
        db: &Database,
        table: &Table,
        index: &Index,
        script: &mut Script,
    ) -> Result<()> {
        let sql = format!(
            "CREATE {}INDEX {} ON {} ({})",
            if index.unique { "UNIQUE " } else { "" },
            self.dialect().ident(&index.name),
            self.qualified_name(db, &table.name),
            self.ident_list(&index.columns)
        );
        debug!("Index {} on {}", index.name, table.name);
        script.add_stmt(sql);
        Ok(())
    }

    /// Append DROP INDEX for `index`.
    pub fn drop_index(
        &self,
        db: &Database,
        table: &Table,
        index: &Index,
        script: &mut Script,
    ) -> Result<()> {
        let sql = if self.dialect().drop_index_on_table() {
            format!(
                "DROP INDEX {} ON {}",
                self.dialect().ident(&index.name),
                self.qualified_name(db, &table.name)
            )
        } else {
            format!("DROP INDEX {}", self.qualified_name(db, &index.name))
        };
        script.add_stmt(sql);
        Ok(())
    }

    /// Append the foreign key constraint for `relation`.
    pub fn create_relation(&self, db: &Database, relation: &Relation, script: &mut Script) -> Result<()> {
        let mut sql = String::new();
        self.comment(
            &mut sql,
            &format!("creating foreign key constraint {}", relation.name),
        );
        sql.push_str(&format!(
            "ALTER TABLE {} ADD CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({})",
            self.qualified_name(db, &relation.table),
            self.dialect().ident(&relation.name),
            self.ident_list(&relation.columns),
            self.qualified_name(db, &relation.ref_table),
            self.ident_list(&relation.ref_columns)
        ));
        if let Some(action) = &relation.on_delete {
            sql.push_str(" ON DELETE ");
            sql.push_str(action);
        }

        debug!(
            "Relation {}: {} -> {}",
            relation.name, relation.table, relation.ref_table
        );
        script.add_stmt(sql);
        Ok(())
    }

    /// Append the statement dropping the foreign key constraint.
    pub fn drop_relation(&self, db: &Database, relation: &Relation, script: &mut Script) -> Result<()> {
        script.add_stmt(format!(
            "ALTER TABLE {} DROP CONSTRAINT {}",
            self.qualified_name(db, &relation.table),
            self.dialect().ident(&relation.name)
        ));
        Ok(())
    }

    /// Append ALTER TABLE ... ADD for `column`.
    pub fn add_column(
        &self,
        db: &Database,
        table: &Table,
        column: &Column,
        script: &mut Script,
    ) -> Result<()> {
        self.alter_table_column(db, table, column, "ADD ", false, script)
    }

    /// Append ALTER TABLE ... ALTER COLUMN for `column`, using the dialect's
    /// ALTER COLUMN clause between name and type.
    pub fn alter_column(
        &self,
        db: &Database,
        table: &Table,
        column: &Column,
        script: &mut Script,
    ) -> Result<()> {
        self.alter_table_column(db, table, column, "ALTER COLUMN ", true, script)
    }

    /// Append ALTER TABLE ... DROP COLUMN for `column`.
    pub fn drop_column(
        &self,
        db: &Database,
        table: &Table,
        column: &Column,
        script: &mut Script,
    ) -> Result<()> {
        script.add_stmt(format!(
            "ALTER TABLE {} DROP COLUMN {}",
            self.qualified_name(db, &table.name),
            self.dialect().ident(&column.name)
        ));
        Ok(())
    }

    fn alter_table_column(
        &self,
        db: &Database,
        table: &Table,
        column: &Column,
        verb: &str,
        alter: bool,
        script: &mut Script,
    ) -> Result<()> {
        let mut sql = format!("ALTER TABLE {} {}", self.qualified_name(db, &table.name), verb);
        if !self.render_column(column, alter, &mut sql) {
            return self.unresolved(table, column);
        }
        script.add_stmt(sql);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::DialectCatalog;
    use crate::core::schema::DataType;
    use crate::generator::{GeneratorOptions, UnresolvedPolicy};

    fn generator(dialect: &str) -> DdlGenerator {
        DdlGenerator::new(DialectCatalog::builtin().require(dialect).unwrap()).with_options(
            GeneratorOptions {
                comments: false,
                ..GeneratorOptions::default()
            },
        )
    }

    fn make_test_table() -> Table {
        Table::new("T")
            .with_column(Column::auto_inc("id", 4.0))
            .with_column(Column::new("name", DataType::Varchar, 50.0).required())
            .with_primary_key(["id"])
            .with_index(Index::new("ux_t_name", ["name"]).unique())
    }

    #[test]
    fn test_create_table_with_primary_key_and_index() {
        let db = Database::new("db");
        let mut script = Script::new();
        generator("postgres")
            .create_table(&db, &make_test_table(), &mut script)
            .unwrap();

        assert_eq!(
            script.statements(),
            &[
                "CREATE TABLE T (\n    id SERIAL NOT NULL,\n    name VARCHAR(50) NOT NULL,\n    PRIMARY KEY (id)\n)"
                    .to_string(),
                "CREATE UNIQUE INDEX ux_t_name ON T (name)".to_string(),
            ]
        );
    }

    #[test]
    fn test_create_table_comment() {
        let db = Database::new("db");
        let gen = DdlGenerator::new(DialectCatalog::builtin().require("postgres").unwrap());
        let mut script = Script::new();
        gen.create_table(&db, &make_test_table(), &mut script).unwrap();
        assert!(script.statements()[0].starts_with("-- creating table T --\nCREATE TABLE T ("));
    }

    #[test]
    fn test_mssql_table_quoting_and_identity() {
        let db = Database::new("db").with_schema("dbo");
        let table = Table::new("order")
            .with_column(Column::auto_inc("id", 8.0))
            .with_column(Column::new("ref", DataType::UniqueId, 0.0))
            .with_primary_key(["id"]);
        let mut script = Script::new();
        generator("mssql").create_table(&db, &table, &mut script).unwrap();

        assert_eq!(
            script.statements()[0],
            "CREATE TABLE dbo.[order] (\n    id BIGINT IDENTITY(1, 1) NOT NULL,\n    ref UNIQUEIDENTIFIER,\n    PRIMARY KEY (id)\n)"
        );
    }

    #[test]
    fn test_drop_index_per_dialect() {
        let db = Database::new("db").with_schema("app");
        let table = make_test_table();
        let index = &table.indexes[0];

        let mut script = Script::new();
        generator("postgres").drop_index(&db, &table, index, &mut script).unwrap();
        generator("mssql").drop_index(&db, &table, index, &mut script).unwrap();

        assert_eq!(script.statements()[0], "DROP INDEX app.ux_t_name");
        assert_eq!(script.statements()[1], "DROP INDEX ux_t_name ON app.T");
    }

    #[test]
    fn test_relation_statements() {
        let db = Database::new("db");
        let relation = Relation::new("fk_a_b", "a", ["b_id", "b_rev"], "b", ["id", "rev"]);
        let mut script = Script::new();
        let gen = generator("generic");
        gen.create_relation(&db, &relation, &mut script).unwrap();
        gen.drop_relation(&db, &relation, &mut script).unwrap();

        assert_eq!(
            script.statements()[0],
            "ALTER TABLE a ADD CONSTRAINT fk_a_b FOREIGN KEY (b_id, b_rev) REFERENCES b (id, rev)"
        );
        assert_eq!(script.statements()[1], "ALTER TABLE a DROP CONSTRAINT fk_a_b");
    }

    #[test]
    fn test_column_alterations() {
        let db = Database::new("db");
        let table = make_test_table();
        let column = table.column("name").unwrap();
        let gen = generator("postgres");
        let mut script = Script::new();

        gen.add_column(&db, &table, column, &mut script).unwrap();
        gen.alter_column(&db, &table, column, &mut script).unwrap();
        gen.drop_column(&db, &table, column, &mut script).unwrap();

        assert_eq!(
            script.statements(),
            &[
                "ALTER TABLE T ADD name VARCHAR(50) NOT NULL".to_string(),
                "ALTER TABLE T ALTER COLUMN name TYPE VARCHAR(50) NOT NULL".to_string(),
                "ALTER TABLE T DROP COLUMN name".to_string(),
            ]
        );
    }

    #[test]
    fn test_add_unresolved_column() {
        let db = Database::new("db");
        let table = Table::new("T").with_column(Column::new("odd", DataType::Unknown, 0.0));
        let column = &table.columns[0];
        let mut script = Script::new();

        let err = generator("postgres")
            .add_column(&db, &table, column, &mut script)
            .unwrap_err();
        assert!(matches!(err, DdlError::UnresolvedType { .. }));

        let skip = generator("postgres").with_options(GeneratorOptions {
            unresolved: UnresolvedPolicy::Skip,
            ..GeneratorOptions::default()
        });
        skip.add_column(&db, &table, column, &mut script).unwrap();
        assert!(script.is_empty());
    }

    #[test]
    fn test_skip_rejects_table_without_columns() {
        let db = Database::new("db");
        let table = Table::new("T").with_column(Column::new("x", DataType::Unknown, 0.0));
        let gen = generator("generic").with_options(GeneratorOptions {
            unresolved: UnresolvedPolicy::Skip,
            comments: false,
            ..GeneratorOptions::default()
        });
        let mut script = Script::new();

        let err = gen.create_table(&db, &table, &mut script).unwrap_err();
        assert!(matches!(err, DdlError::Unsupported(ref msg) if msg.contains("'T'")));
        assert!(script.is_empty());
    }
}
