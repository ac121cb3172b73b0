//! Error types for DDL generation.

use thiserror::Error;

use crate::core::schema::DataType;

/// Main error type for DDL generation.
#[derive(Error, Debug)]
pub enum DdlError {
    /// Configuration error (invalid YAML, bad option values, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// No dialect registered under the requested name
    #[error("Unknown database dialect: {0}")]
    UnknownDialect(String),

    /// A column type the dialect cannot render
    #[error("Column {table}.{column}: data type {data_type} has no SQL representation")]
    UnresolvedType {
        table: String,
        column: String,
        data_type: DataType,
    },

    /// A table, column or index referenced by name does not exist
    #[error("Unknown schema object: {0}")]
    UnknownObject(String),

    /// The requested DDL action is not defined for the object
    #[error("Unsupported DDL action: {0}")]
    Unsupported(String),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DdlError {
    /// Create an UnresolvedType error for a column of a table.
    pub fn unresolved(
        table: impl Into<String>,
        column: impl Into<String>,
        data_type: DataType,
    ) -> Self {
        DdlError::UnresolvedType {
            table: table.into(),
            column: column.into(),
            data_type,
        }
    }

    /// Process exit code for this error.
    ///
    /// - 1: configuration or input parsing
    /// - 2: the schema could not be rendered
    /// - 7: file system
    pub fn exit_code(&self) -> u8 {
        match self {
            DdlError::Config(_)
            | DdlError::UnknownDialect(_)
            | DdlError::Yaml(_)
            | DdlError::Json(_) => 1,
            DdlError::UnresolvedType { .. }
            | DdlError::UnknownObject(_)
            | DdlError::Unsupported(_) => 2,
            DdlError::Io(_) => 7,
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for DDL generation.
pub type Result<T> = std::result::Result<T, DdlError>;
