//! Configuration loading and validation.

mod types;
mod validation;

pub use types::*;

use std::path::Path;

use crate::core::catalog::DialectCatalog;
use crate::error::Result;
use crate::generator::DdlGenerator;

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration against the built-in dialects.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self, DialectCatalog::builtin())
    }

    /// Build a generator for the configured dialect from the built-in
    /// catalog.
    pub fn generator(&self) -> Result<DdlGenerator> {
        self.generator_from(DialectCatalog::builtin())
    }

    /// Build a generator for the configured dialect from `catalog`.
    pub fn generator_from(&self, catalog: &DialectCatalog) -> Result<DdlGenerator> {
        let profile = catalog.require(&self.dialect)?;
        Ok(DdlGenerator::new(profile).with_options(self.generator_options()))
    }
}
