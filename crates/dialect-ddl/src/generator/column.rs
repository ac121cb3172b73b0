//! Column descriptor assembly.

use crate::core::schema::{Column, DataType};

use super::DdlGenerator;

impl DdlGenerator {
    /// Resolve a data type through the dialect profile.
    pub fn resolve_type(&self, data_type: DataType, size: f64, column: &Column) -> Option<String> {
        self.profile().resolve_type(data_type, size, column)
    }

    /// Render one column clause into `sql`:
    /// `name TYPE [DEFAULT literal] [NOT NULL]`.
    ///
    /// With `alter` set, the profile's ALTER COLUMN clause separates name and
    /// type. Returns `false` without touching `sql` when the type cannot be
    /// resolved.
    pub fn render_column(&self, column: &Column, alter: bool, sql: &mut String) -> bool {
        let Some(sql_type) = self.resolve_type(column.data_type, column.size, column) else {
            return false;
        };

        sql.push_str(&self.dialect().ident(&column.name));
        if alter {
            sql.push_str(self.profile().alter_type_clause());
        } else {
            sql.push(' ');
        }
        sql.push_str(&sql_type);

        if self.column_defaults() && !column.is_auto_generated() {
            if let Some(default) = &column.default {
                sql.push_str(" DEFAULT ");
                sql.push_str(&self.dialect().literal(default, column.data_type));
            }
        }

        if column.required || column.is_auto_generated() {
            sql.push_str(" NOT NULL");
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::DialectCatalog;
    use crate::core::value::DefaultValue;
    use crate::generator::GeneratorOptions;

    fn generator(dialect: &str) -> DdlGenerator {
        DdlGenerator::new(DialectCatalog::builtin().require(dialect).unwrap())
    }

    fn render(gen: &DdlGenerator, column: &Column, alter: bool) -> Option<String> {
        let mut sql = String::new();
        gen.render_column(column, alter, &mut sql).then_some(sql)
    }

    #[test]
    fn test_overridden_types_ignore_size() {
        let gen = generator("postgres");
        for size in [0.0, 1.0, 255.0, -40.0] {
            let c = Column::new("c", DataType::Clob, size);
            assert_eq!(gen.resolve_type(DataType::Clob, size, &c).unwrap(), "TEXT");
            assert_eq!(gen.resolve_type(DataType::Bool, size, &c).unwrap(), "BOOLEAN");
            assert_eq!(gen.resolve_type(DataType::Blob, size, &c).unwrap(), "BYTEA");
        }
    }

    #[test]
    fn test_auto_inc_width_threshold() {
        let gen = generator("postgres");
        let c = Column::auto_inc("id", 0.0);
        assert_eq!(gen.resolve_type(DataType::AutoInc, 1.0, &c).unwrap(), "SERIAL");
        assert_eq!(gen.resolve_type(DataType::AutoInc, 7.0, &c).unwrap(), "SERIAL");
        assert_eq!(gen.resolve_type(DataType::AutoInc, 8.0, &c).unwrap(), "BIGSERIAL");
        assert_eq!(gen.resolve_type(DataType::AutoInc, 16.0, &c).unwrap(), "BIGSERIAL");
        assert_eq!(
            gen.resolve_type(DataType::AutoInc, -4.0, &c),
            gen.resolve_type(DataType::AutoInc, 4.0, &c)
        );
        assert_eq!(gen.resolve_type(DataType::AutoInc, -8.0, &c).unwrap(), "BIGSERIAL");
    }

    #[test]
    fn test_float_collapses_to_double_precision() {
        let gen = generator("postgres");
        let c = Column::new("f", DataType::Float, 0.0);
        for size in [0.0, 4.0, 8.0, 53.0] {
            assert_eq!(gen.resolve_type(DataType::Float, size, &c).unwrap(), "DOUBLE PRECISION");
        }
    }

    #[test]
    fn test_required_always_not_null() {
        let gen = generator("postgres");
        let c = Column::new("qty", DataType::Integer, 4.0)
            .required()
            .with_default(5);
        assert_eq!(render(&gen, &c, false).unwrap(), "qty INTEGER DEFAULT 5 NOT NULL");

        let c = Column::new("qty", DataType::Integer, 4.0).required();
        assert_eq!(render(&gen, &c, false).unwrap(), "qty INTEGER NOT NULL");
    }

    #[test]
    fn test_optional_column_has_no_null_keyword() {
        let gen = generator("postgres");
        let c = Column::new("note", DataType::Varchar, 20.0);
        assert_eq!(render(&gen, &c, false).unwrap(), "note VARCHAR(20)");
    }

    #[test]
    fn test_auto_generated_suppresses_default() {
        let gen = generator("postgres");
        let c = Column::auto_inc("id", 4.0).with_default(1);
        assert_eq!(render(&gen, &c, false).unwrap(), "id SERIAL NOT NULL");

        let c = Column::new("created", DataType::Timestamp, 0.0)
            .auto_generated()
            .with_default(DefaultValue::expr("CURRENT_TIMESTAMP"));
        assert_eq!(render(&gen, &c, false).unwrap(), "created TIMESTAMP NOT NULL");
    }

    #[test]
    fn test_auto_inc_from_schema_file_renders_like_builder() {
        let gen = generator("postgres");
        let loaded: Column =
            serde_yaml::from_str("{ name: id, type: autoinc, size: 4, default: 7 }").unwrap();
        let built = Column::auto_inc("id", 4.0).with_default(7);
        assert_eq!(render(&gen, &loaded, false).unwrap(), "id SERIAL NOT NULL");
        assert_eq!(render(&gen, &loaded, false), render(&gen, &built, false));
    }

    #[test]
    fn test_column_defaults_can_be_disabled() {
        let gen = generator("postgres").with_options(GeneratorOptions {
            column_defaults: Some(false),
            ..GeneratorOptions::default()
        });
        let c = Column::new("flag", DataType::Bool, 0.0).with_default(true);
        assert_eq!(render(&gen, &c, false).unwrap(), "flag BOOLEAN");
    }

    #[test]
    fn test_dialect_literals_in_default() {
        let c = Column::new("flag", DataType::Bool, 0.0).with_default(true).required();
        assert_eq!(render(&generator("postgres"), &c, false).unwrap(), "flag BOOLEAN DEFAULT TRUE NOT NULL");
        assert_eq!(render(&generator("mssql"), &c, false).unwrap(), "flag BIT DEFAULT 1 NOT NULL");

        let c = Column::new("label", DataType::Varchar, 10.0).with_default("n/a");
        assert_eq!(render(&generator("mssql"), &c, false).unwrap(), "label VARCHAR(10) DEFAULT N'n/a'");
    }

    #[test]
    fn test_alter_clause_per_dialect() {
        let c = Column::new("name", DataType::Varchar, 50.0).required();
        assert_eq!(render(&generator("postgres"), &c, true).unwrap(), "name TYPE VARCHAR(50) NOT NULL");
        assert_eq!(render(&generator("generic"), &c, true).unwrap(), "name VARCHAR(50) NOT NULL");
    }

    #[test]
    fn test_quoted_column_name() {
        let c = Column::new("order", DataType::Integer, 4.0);
        assert_eq!(render(&generator("postgres"), &c, false).unwrap(), "\"order\" INTEGER");
        assert_eq!(render(&generator("mssql"), &c, false).unwrap(), "[order] INTEGER");
    }

    #[test]
    fn test_unresolved_leaves_buffer_untouched() {
        let gen = generator("postgres");
        let c = Column::new("odd", DataType::Unknown, 0.0).required();
        let mut sql = String::from("CREATE TABLE t (");
        assert!(!gen.render_column(&c, false, &mut sql));
        assert_eq!(sql, "CREATE TABLE t (");
    }
}
