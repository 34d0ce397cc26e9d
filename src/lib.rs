pub mod ast;
pub mod cli;
pub mod cursor;
pub mod error;
pub mod evaluator;
pub mod facts;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod value;

pub use ast::{Category, Keyword, ListItem, Literal, Node, Token};
pub use cursor::Cursor;
pub use error::{Error, Result};
pub use evaluator::{EvalContext, EvalError, Evaluator};
pub use facts::{Fact, Facts, fact};
pub use lexer::{LexError, Lexer, lex, validate_token_adjacency};
pub use output::{render_tokens, to_sexpr, to_sexpr_pretty};
pub use parser::{ParseError, Parser, parse};
pub use value::Value;

/// Lexes, parses and evaluates `expression` against `facts`.
///
/// # Examples
///
/// ```
/// use factql::{evaluate, fact, Facts, Value};
///
/// let facts = Facts::Single(fact([("a", Value::Integer(2))]));
/// assert!(evaluate("a in [1 2]", &facts).unwrap());
/// assert!(!evaluate("a == 1", &facts).unwrap());
/// ```
pub fn evaluate(expression: &str, facts: &Facts) -> Result<bool> {
    let tokens = lex(expression)?;
    let ast = parse(tokens)?;
    Ok(Evaluator::new().eval(&ast, facts)?)
}
