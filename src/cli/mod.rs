//! CLI support for pipeline-rules
//!
//! Provides programmatic access to the `rules` command so it can be
//! embedded in other configuration checkers.

mod check;
mod convert;

pub use check::{CheckOptions, CheckResult, execute_check};
pub use convert::{env_to_variables, json_to_variables};

use std::io;
use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// The expression failed to lex or matches no grammar
    #[error("Invalid expression: {0}")]
    Statement(#[from] crate::StatementError),

    /// Variables were not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Variables were JSON, but not an object
    #[error("Variables must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// A variable value that is neither a string nor null
    #[error("Variable '{name}' must be a string or null, got {found}")]
    InvalidVariable { name: String, found: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
