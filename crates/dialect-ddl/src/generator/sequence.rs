//! Sequence-backed auto-increment emulation.

use tracing::debug;

use crate::core::schema::{Column, DataType, Database, Table};
use crate::core::script::Script;
use crate::error::Result;

use super::{DdlGenerator, PreTablePhase};

/// Emits one CREATE SEQUENCE per auto-increment column.
///
/// Columns are visited in table then column declaration order. The sequence
/// is not referenced from the column's DEFAULT.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequencePhase;

impl SequencePhase {
    fn sequences(db: &Database) -> impl Iterator<Item = (&Table, &Column)> {
        db.columns()
            .filter(|(_, column)| column.data_type == DataType::AutoInc)
    }
}

impl PreTablePhase for SequencePhase {
    fn name(&self) -> &str {
        "sequences"
    }

    fn create(&self, generator: &DdlGenerator, db: &Database, script: &mut Script) -> Result<()> {
        for (table, column) in Self::sequences(db) {
            let name = generator.qualified_name(db, &column.sequence_name(table));

            let mut sql = String::new();
            generator.comment(
                &mut sql,
                &format!("creating sequence for column {}", column.full_name(table)),
            );
            sql.push_str(&format!(
                "CREATE SEQUENCE {} INCREMENT BY 1 START WITH 1 MINVALUE 0",
                name
            ));

            debug!("Sequence {} for column {}", name, column.full_name(table));
            script.add_stmt(sql);
        }
        Ok(())
    }

    fn destroy(&self, generator: &DdlGenerator, db: &Database, script: &mut Script) -> Result<()> {
        for (table, column) in Self::sequences(db) {
            let name = generator.qualified_name(db, &column.sequence_name(table));
            script.add_stmt(format!("DROP SEQUENCE {}", name));
        }
        Ok(())
    }
}
