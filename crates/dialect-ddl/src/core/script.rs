//! Ordered, append-only DDL script.

use std::fmt;

use serde::Serialize;

/// Ordered sequence of DDL statements.
///
/// Statements can only be appended; there is no removal or reordering. A
/// script is owned by a single generation call, which takes it by `&mut`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Script {
    statements: Vec<String>,
}

impl Script {
    /// Create an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statement.
    pub fn add_stmt(&mut self, stmt: impl Into<String>) {
        self.statements.push(stmt.into());
    }

    /// Move every statement of `other` to the end of this script.
    pub fn append(&mut self, other: Script) {
        self.statements.extend(other.statements);
    }

    /// Number of statements.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Check if no statement has been appended.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Statements in append order.
    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    /// Iterate over statements in append order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.statements.iter()
    }

    /// Index of the first statement containing `needle`.
    pub fn position(&self, needle: &str) -> Option<usize> {
        self.statements.iter().position(|s| s.contains(needle))
    }

    /// Render the script as SQL text, ending every statement with
    /// `terminator` and separating statements with a blank line.
    pub fn render(&self, terminator: &str) -> String {
        let mut out = String::new();
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(stmt);
            out.push_str(terminator);
            out.push('\n');
        }
        out
    }

    /// Consume the script and return its statements.
    pub fn into_statements(self) -> Vec<String> {
        self.statements
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(";"))
    }
}

impl<'a> IntoIterator for &'a Script {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
