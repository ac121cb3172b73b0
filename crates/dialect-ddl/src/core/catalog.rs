//! Dialect catalog for explicit dependency injection.
//!
//! The [`DialectCatalog`] is a registry of dialect profiles keyed by name and
//! alias. Callers may build their own catalog (e.g. to register a custom
//! dialect) or use [`DialectCatalog::builtin`], a process-wide catalog of the
//! built-in drivers that is initialised on first use and read-only after.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::dialect::DialectProfile;
use crate::drivers;
use crate::error::{DdlError, Result};

/// Registry of dialect profiles.
///
/// # Example
///
/// ```rust,ignore
/// let mut catalog = DialectCatalog::new();
/// catalog.register(postgres::profile());
///
/// let profile = catalog.require("pg")?;
/// let generator = DdlGenerator::new(profile);
/// ```
#[derive(Default)]
pub struct DialectCatalog {
    /// Registered profiles by canonical name.
    profiles: BTreeMap<String, Arc<DialectProfile>>,

    /// Alias → canonical name.
    aliases: BTreeMap<String, String>,
}

impl DialectCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with the built-in dialects registered.
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new();
        for profile in drivers::builtin_profiles() {
            catalog.register(profile);
        }
        catalog
    }

    /// The shared catalog of built-in dialects.
    pub fn builtin() -> &'static DialectCatalog {
        static BUILTIN: OnceLock<DialectCatalog> = OnceLock::new();
        BUILTIN.get_or_init(Self::with_builtins)
    }

    /// Register a profile under its name and aliases. A later registration
    /// with the same name replaces the earlier one.
    pub fn register(&mut self, profile: DialectProfile) {
        let name = profile.name().to_string();
        for alias in profile.aliases() {
            self.aliases.insert(alias.clone(), name.clone());
        }
        debug!("Registered dialect '{}'", name);
        self.profiles.insert(name, Arc::new(profile));
    }

    /// Canonical name for a dialect name or alias (case-insensitive).
    pub fn resolve_name(&self, name: &str) -> Option<&str> {
        let key = name.trim().to_lowercase();
        if let Some((canonical, _)) = self.profiles.get_key_value(&key) {
            return Some(canonical.as_str());
        }
        self.aliases.get(&key).map(String::as_str)
    }

    /// Get a profile by name or alias.
    pub fn get(&self, name: &str) -> Option<Arc<DialectProfile>> {
        self.resolve_name(name)
            .and_then(|canonical| self.profiles.get(canonical))
            .cloned()
    }

    /// Get a profile by name or alias, returning an error if not found.
    pub fn require(&self, name: &str) -> Result<Arc<DialectProfile>> {
        self.get(name).ok_or_else(|| {
            DdlError::UnknownDialect(format!(
                "'{}'. Supported dialects: {}",
                name,
                self.names().join(", ")
            ))
        })
    }

    /// Check if a dialect name or alias is registered.
    pub fn has(&self, name: &str) -> bool {
        self.resolve_name(name).is_some()
    }

    /// Canonical names of all registered dialects, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }

    /// Iterate over registered profiles, sorted by name.
    pub fn profiles(&self) -> impl Iterator<Item = &Arc<DialectProfile>> {
        self.profiles.values()
    }
}

impl std::fmt::Debug for DialectCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialectCatalog")
            .field("profiles", &self.profiles.keys().collect::<Vec<_>>())
            .field("aliases", &self.aliases)
            .finish()
    }
}
