//! CLI support for factql
//!
//! Provides programmatic access to the factql command-line operations so
//! other tools can embed them.

mod check;
mod convert;
mod inspect;

pub use check::{CheckOptions, CheckResult, execute_check};
pub use convert::{json_to_facts, json_to_value};
pub use inspect::{render_ast, render_lexed_tokens};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Lexing, parsing or evaluation failed
    #[error("{0}")]
    Query(#[from] crate::Error),

    /// Facts input is not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Facts JSON has the wrong shape
    #[error("Invalid facts: {0}")]
    InvalidFacts(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No facts provided
    #[error("No facts provided. Use --facts or pipe JSON to stdin.")]
    NoInput,
}

impl From<crate::LexError> for CliError {
    fn from(e: crate::LexError) -> Self {
        CliError::Query(e.into())
    }
}

impl From<crate::ParseError> for CliError {
    fn from(e: crate::ParseError) -> Self {
        CliError::Query(e.into())
    }
}

impl From<crate::EvalError> for CliError {
    fn from(e: crate::EvalError) -> Self {
        CliError::Query(e.into())
    }
}
