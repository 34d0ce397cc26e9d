//! Text rendering for factql tokens and syntax trees.
//!
//! Trees render as s-expressions with the operator first, in a compact
//! single-line form or an indented multi-line form.
//!
//! # Examples
//!
//! ```
//! use factql::{lexer::lex, parser::parse};
//! use factql::output::{to_sexpr, to_sexpr_pretty};
//!
//! let ast = parse(lex("a == 1 && b in [2 3]").unwrap()).unwrap();
//!
//! assert_eq!(to_sexpr(&ast), "(&& (== a 1) (in b [2 3]))");
//! assert_eq!(to_sexpr_pretty(&ast), "(&&\n  (== a 1)\n  (in b [2 3]))");
//! ```

use crate::ast::{Node, Token};

pub struct TreePrinter {
    pretty: bool,
}

impl TreePrinter {
    pub fn new(pretty: bool) -> Self {
        TreePrinter { pretty }
    }

    pub fn print(&self, node: &Node) -> String {
        self.print_node(node, 0)
    }

    fn print_node(&self, node: &Node, indent: usize) -> String {
        let (head, children): (String, Vec<&Node>) = match node {
            Node::Literal(literal) => return literal.to_string(),
            Node::List(items) => {
                let items: Vec<String> = items.iter().map(|l| l.to_string()).collect();
                return format!("[{}]", items.join(" "));
            }
            Node::Junction { op, left, right } => (op.to_string(), vec![left.as_ref(), right.as_ref()]),
            Node::Comparison { op, left, right } => (op.to_string(), vec![left.as_ref(), right.as_ref()]),
            Node::Membership { left, right } => ("in".to_string(), vec![left.as_ref(), right.as_ref()]),
            Node::Where { subject, filter } => ("where".to_string(), vec![subject.as_ref(), filter.as_ref()]),
            Node::Group(inner) => ("group".to_string(), vec![inner.as_ref()]),
        };

        // Comparisons and membership tests only hold leaves; keep them on one line
        let inline = children
            .iter()
            .all(|c| matches!(c, Node::Literal(_) | Node::List(_)));

        if self.pretty && !inline {
            let items: Vec<String> = children
                .iter()
                .map(|c| format!("{}{}", self.indent(indent + 1), self.print_node(c, indent + 1)))
                .collect();
            format!("({}\n{})", head, items.join("\n"))
        } else {
            let items: Vec<String> = children
                .iter()
                .map(|c| self.print_node(c, indent))
                .collect();
            format!("({} {})", head, items.join(" "))
        }
    }

    fn indent(&self, level: usize) -> String {
        "  ".repeat(level)
    }
}

/// Renders a tree on a single line.
pub fn to_sexpr(node: &Node) -> String {
    TreePrinter::new(false).print(node)
}

/// Renders a tree with one operand per line and 2-space indentation.
pub fn to_sexpr_pretty(node: &Node) -> String {
    TreePrinter::new(true).print(node)
}

/// One `Category value` line per token.
///
/// # Examples
///
/// ```
/// use factql::{lexer::lex, output::render_tokens};
///
/// let tokens = lex("a == 1").unwrap();
/// assert_eq!(render_tokens(&tokens), "Word     a\nKeyword  ==\nNumber   1");
/// ```
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| format!("{:<8} {}", t.category().to_string(), t))
        .collect::<Vec<_>>()
        .join("\n")
}
