//! Configuration type definitions.

use serde::{Deserialize, Serialize};

use crate::generator::{GeneratorOptions, UnresolvedPolicy};

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Target dialect name or alias (default: postgres).
    #[serde(default = "default_dialect")]
    pub dialect: String,

    /// Schema qualifying every object name, overriding the schema file's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Emit column DEFAULT clauses. Unset uses the dialect's capability.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_defaults: Option<bool>,

    /// Prefix statements with `-- ... --` comments (default: true).
    #[serde(default = "default_true")]
    pub comments: bool,

    /// Handling of columns whose type cannot be rendered (default: fail).
    #[serde(default)]
    pub unresolved: UnresolvedPolicy,

    /// Text written after every statement (default: ";").
    #[serde(default = "default_terminator")]
    pub terminator: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dialect: default_dialect(),
            schema: None,
            column_defaults: None,
            comments: true,
            unresolved: UnresolvedPolicy::default(),
            terminator: default_terminator(),
        }
    }
}

impl Config {
    /// Generator options described by this configuration.
    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            schema: self.schema.clone(),
            column_defaults: self.column_defaults,
            comments: self.comments,
            unresolved: self.unresolved,
        }
    }
}

fn default_dialect() -> String {
    "postgres".to_string()
}

fn default_terminator() -> String {
    ";".to_string()
}

fn default_true() -> bool {
    true
}
