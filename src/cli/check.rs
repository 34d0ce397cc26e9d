//! Evaluate factql expressions against JSON facts

use super::{CliError, json_to_facts};
use crate::{Evaluator, lex, parse};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The expression to evaluate
    pub expression: String,
    /// Facts as JSON: an object, or an array of objects
    pub facts: Option<String>,
    /// Only validate syntax, don't evaluate
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug, Clone, PartialEq)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// The expression evaluated to this verdict
    Verdict(bool),
}

/// Execute a factql check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let tokens = lex(&options.expression)?;
    let ast = parse(tokens)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    let json_str = options.facts.as_ref().ok_or(CliError::NoInput)?;
    let json_value: serde_json::Value = serde_json::from_str(json_str)?;
    let facts = json_to_facts(json_value)?;

    let verdict = Evaluator::new().eval(&ast, &facts)?;
    Ok(CheckResult::Verdict(verdict))
}
