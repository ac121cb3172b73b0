//! Immutable dialect profiles.
//!
//! A [`DialectProfile`] bundles everything that makes one target database
//! different from the default generator: its [`Dialect`] capabilities, the
//! type-name overrides, the priority-ordered type rules, the ALTER COLUMN
//! keyword and the pre-table phases. Profiles are assembled once with
//! [`DialectProfileBuilder`] and shared read-only behind an `Arc`.

use std::fmt;
use std::sync::Arc;

use crate::core::schema::{Column, DataType};
use crate::core::traits::Dialect;
use crate::generator::PreTablePhase;

use super::typemap::{default_type, TypeNames, TypeRule};

/// Per-dialect generator configuration.
pub struct DialectProfile {
    name: String,
    aliases: Vec<String>,
    dialect: Arc<dyn Dialect>,
    type_names: TypeNames,
    type_rules: Vec<TypeRule>,
    alter_type_clause: String,
    phases: Vec<Arc<dyn PreTablePhase>>,
}

impl DialectProfile {
    /// Start building a profile.
    pub fn builder(name: impl Into<String>, dialect: impl Dialect + 'static) -> DialectProfileBuilder {
        DialectProfileBuilder::new(name, Arc::new(dialect))
    }

    /// Registered name (lowercase).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alternative names accepted by the catalog.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Dialect capabilities.
    pub fn dialect(&self) -> &dyn Dialect {
        self.dialect.as_ref()
    }

    /// Type-name overrides.
    pub fn type_names(&self) -> &TypeNames {
        &self.type_names
    }

    /// Type rules in priority order.
    pub fn type_rules(&self) -> &[TypeRule] {
        &self.type_rules
    }

    /// Text placed between column name and type in ALTER COLUMN.
    pub fn alter_type_clause(&self) -> &str {
        &self.alter_type_clause
    }

    /// Phases run before the table phase, in registration order.
    pub fn phases(&self) -> &[Arc<dyn PreTablePhase>] {
        &self.phases
    }

    /// Resolve a data type into an SQL type fragment.
    ///
    /// Type rules are checked first, in registration order; then the
    /// type-name overrides; then the default table. `None` means the type
    /// cannot be rendered.
    pub fn resolve_type(&self, data_type: DataType, size: f64, column: &Column) -> Option<String> {
        if let Some(rule) = self.type_rules.iter().find(|r| r.data_type == data_type) {
            if let Some(sql) = rule.apply(size, &self.type_names) {
                return Some(sql);
            }
        }
        if let Some(keyword) = self.type_names.get(data_type) {
            return Some(keyword.to_string());
        }
        default_type(data_type, size, column)
    }
}

impl fmt::Debug for DialectProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialectProfile")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("type_names", &self.type_names)
            .field("type_rules", &self.type_rules)
            .field("alter_type_clause", &self.alter_type_clause)
            .field(
                "phases",
                &self.phases.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Builder for [`DialectProfile`]. The only place a profile can be changed.
pub struct DialectProfileBuilder {
    profile: DialectProfile,
}

impl DialectProfileBuilder {
    fn new(name: impl Into<String>, dialect: Arc<dyn Dialect>) -> Self {
        Self {
            profile: DialectProfile {
                name: name.into().to_lowercase(),
                aliases: Vec::new(),
                dialect,
                type_names: TypeNames::new(),
                type_rules: Vec::new(),
                alter_type_clause: " ".to_string(),
                phases: Vec::new(),
            },
        }
    }

    /// Add an alternative name.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.profile.aliases.push(alias.into().to_lowercase());
        self
    }

    /// Override the keyword of a data type.
    pub fn type_name(mut self, data_type: DataType, keyword: impl Into<String>) -> Self {
        self.profile.type_names.set(data_type, keyword);
        self
    }

    /// Append a type rule. Earlier rules win.
    pub fn rule(mut self, rule: TypeRule) -> Self {
        self.profile.type_rules.push(rule);
        self
    }

    /// Set the text between column name and type in ALTER COLUMN.
    pub fn alter_type_clause(mut self, clause: impl Into<String>) -> Self {
        self.profile.alter_type_clause = clause.into();
        self
    }

    /// Append a pre-table phase.
    pub fn phase(mut self, phase: impl PreTablePhase + 'static) -> Self {
        self.profile.phases.push(Arc::new(phase));
        self
    }

    /// Finish the profile.
    pub fn build(self) -> DialectProfile {
        self.profile
    }
}
