//! Pre-table generation phases.

use crate::core::schema::Database;
use crate::core::script::Script;
use crate::error::Result;

use super::DdlGenerator;

/// A pass over the whole database that runs before any table is created.
///
/// Dialects register phases on their profile to emit auxiliary objects
/// (sequences, custom types, extensions) that tables may depend on. Phases
/// run in registration order on create and in reverse order on drop.
pub trait PreTablePhase: Send + Sync {
    /// Phase name, for logs.
    fn name(&self) -> &str;

    /// Append the statements creating the phase's objects.
    fn create(&self, generator: &DdlGenerator, db: &Database, script: &mut Script) -> Result<()>;

    /// Append the statements dropping the phase's objects.
    fn destroy(&self, _generator: &DdlGenerator, _db: &Database, _script: &mut Script) -> Result<()> {
        Ok(())
    }
}
