use log::debug;
use thiserror::Error;

use crate::{
    ast::{Literal, Node},
    facts::{Fact, Facts},
    value::Value,
};

/// Evaluation context: the full facts input and the record comparisons read.
#[derive(Debug, Clone, Copy)]
pub struct EvalContext<'a> {
    /// Everything passed to the evaluator; `where` quantifies over this
    pub facts: &'a Facts,
    /// The fact comparisons and membership tests look fields up in
    pub record: Option<&'a Fact>,
}

impl<'a> EvalContext<'a> {
    pub fn new(facts: &'a Facts) -> Self {
        let record = match facts {
            Facts::Single(fact) => Some(fact),
            Facts::Many(_) => None,
        };
        EvalContext { facts, record }
    }

    /// Create a new context bound to one record of the sequence
    pub fn with_record(&self, record: &'a Fact) -> Self {
        EvalContext {
            facts: self.facts,
            record: Some(record),
        }
    }

    fn lookup(&self, field: &str) -> Option<&'a Value> {
        self.record?.get(field)
    }
}

/// Errors that can occur during evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// A node that has no truth value of its own (a bare literal or list)
    #[error("Cannot evaluate '{node}' as a condition")]
    UnsupportedNode { node: String },

    /// The left side of a comparison or membership test is not a field name
    #[error("Expected a field name on the left of '{operator}', found '{found}'")]
    NotAFieldReference { operator: String, found: String },

    /// The right side of `in` is not a bracketed list
    #[error("Expected a list on the right of 'in', found '{found}'")]
    ExpectedList { found: String },
}

/// Walks a parsed expression against facts.
///
/// Stateless; one evaluator can be reused for any number of trees and inputs.
#[derive(Debug, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluates `node` against a single fact or a sequence of facts.
    ///
    /// # Examples
    ///
    /// ```
    /// use factql::{fact, lexer::lex, parser::parse, Evaluator, Facts, Value};
    ///
    /// let ast = parse(lex("a == 1 where b == 2").unwrap()).unwrap();
    /// let facts = Facts::Many(vec![
    ///     fact([("a", Value::Integer(1)), ("b", Value::Integer(3))]),
    ///     fact([("a", Value::Integer(1)), ("b", Value::Integer(2))]),
    /// ]);
    ///
    /// assert!(Evaluator::new().eval(&ast, &facts).unwrap());
    /// ```
    pub fn eval(&self, node: &Node, facts: &Facts) -> Result<bool, EvalError> {
        let verdict = self.eval_node(node, &EvalContext::new(facts))?;
        debug!("'{}' against {} fact(s): {}", node, facts.len(), verdict);
        Ok(verdict)
    }

    fn eval_node(&self, node: &Node, ctx: &EvalContext) -> Result<bool, EvalError> {
        match node {
            // Both sides always run so errors surface regardless of the other side
            Node::Junction { op, left, right } => {
                let left = self.eval_node(left, ctx)?;
                let right = self.eval_node(right, ctx)?;
                Ok(op.apply(left, right))
            }
            Node::Comparison { op, left, right } => {
                let field = field_name(left, &op.to_string())?;
                let expected = match right.as_ref() {
                    Node::Literal(literal) => literal,
                    other => {
                        return Err(EvalError::UnsupportedNode {
                            node: other.to_string(),
                        });
                    }
                };
                let Some(actual) = ctx.lookup(field) else {
                    return Ok(false);
                };
                if expected.is_falsy() {
                    return Ok(false);
                }
                Ok(op.apply(actual, &expected.to_value()))
            }
            Node::Group(inner) => self.eval_node(inner, ctx),
            Node::Membership { left, right } => {
                let items = match right.as_ref() {
                    Node::List(items) => items,
                    other => {
                        return Err(EvalError::ExpectedList {
                            found: other.to_string(),
                        });
                    }
                };
                let field = match left.as_ref() {
                    Node::Literal(Literal::Word(name)) => name,
                    Node::Literal(_) => return Ok(false),
                    other => {
                        return Err(EvalError::NotAFieldReference {
                            operator: "in".to_string(),
                            found: other.to_string(),
                        });
                    }
                };
                Ok(ctx.lookup(field).is_some_and(|value| items.contains(value)))
            }
            Node::Where { subject, filter } => self.eval_where(subject, filter, ctx),
            Node::Literal(_) | Node::List(_) => Err(EvalError::UnsupportedNode {
                node: node.to_string(),
            }),
        }
    }

    /// `subject where filter`: some record satisfies the filter and the subject.
    ///
    /// With a record already in scope (a single fact, or one bound by an
    /// enclosing `where`) this is a conjunction on that record. Otherwise each
    /// record of the sequence is bound in turn.
    fn eval_where(
        &self,
        subject: &Node,
        filter: &Node,
        ctx: &EvalContext,
    ) -> Result<bool, EvalError> {
        if ctx.record.is_some() {
            return Ok(self.eval_node(filter, ctx)? && self.eval_node(subject, ctx)?);
        }

        let Facts::Many(records) = ctx.facts else {
            return Ok(false);
        };
        for (i, record) in records.iter().enumerate() {
            let scoped = ctx.with_record(record);
            if self.eval_node(filter, &scoped)? && self.eval_node(subject, &scoped)? {
                debug!("where '{}' satisfied by record {}", filter, i);
                return Ok(true);
            }
        }
        Ok(false)
    }
}

fn field_name<'n>(node: &'n Node, operator: &str) -> Result<&'n str, EvalError> {
    match node {
        Node::Literal(Literal::Word(name)) => Ok(name),
        other => Err(EvalError::NotAFieldReference {
            operator: operator.to_string(),
            found: other.to_string(),
        }),
    }
}
