//! ANSI SQL driver.
//!
//! The profile carries no overrides: every type resolves through the
//! default table. Useful as a baseline and for engines without a dedicated
//! driver.

use crate::core::identifier::quote_double;
use crate::core::traits::Dialect;
use crate::dialect::DialectProfile;

/// Plain ANSI SQL dialect.
#[derive(Debug, Clone, Default)]
pub struct GenericDialect;

impl GenericDialect {
    /// Create a new generic dialect instance.
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &str {
        "generic"
    }

    fn quote_ident(&self, name: &str) -> String {
        quote_double(name)
    }
}

/// Build the ANSI profile.
pub fn profile() -> DialectProfile {
    DialectProfile::builder("generic", GenericDialect::new())
        .alias("ansi")
        .alias("default")
        .build()
}
