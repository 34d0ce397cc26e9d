//! Show how an expression lexes and parses

use super::CliError;
use crate::{lex, output, parse};

/// Lex `expression` and list its tokens, one per line
pub fn render_lexed_tokens(expression: &str) -> Result<String, CliError> {
    let tokens = lex(expression)?;
    Ok(output::render_tokens(&tokens))
}

/// Parse `expression` and render its tree as an s-expression
pub fn render_ast(expression: &str, pretty: bool) -> Result<String, CliError> {
    let ast = parse(lex(expression)?)?;
    Ok(if pretty {
        output::to_sexpr_pretty(&ast)
    } else {
        output::to_sexpr(&ast)
    })
}
