//! Configuration validation.

use super::Config;
use crate::core::catalog::DialectCatalog;
use crate::core::identifier::validate_identifier;
use crate::error::{DdlError, Result};

/// Validate the configuration against a dialect catalog.
pub fn validate(config: &Config, catalog: &DialectCatalog) -> Result<()> {
    if config.dialect.trim().is_empty() {
        return Err(DdlError::Config("dialect is required".into()));
    }
    if !catalog.has(&config.dialect) {
        return Err(DdlError::Config(format!(
            "dialect must be one of {}, got '{}'",
            catalog.names().join(", "),
            config.dialect
        )));
    }

    if let Some(schema) = &config.schema {
        validate_identifier(schema)
            .map_err(|e| DdlError::Config(format!("schema is invalid: {}", e)))?;
    }

    if config.terminator.is_empty() {
        return Err(DdlError::Config("terminator cannot be empty".into()));
    }

    Ok(())
}
