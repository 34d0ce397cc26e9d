use std::fmt;

use crate::{
    ast::{BinaryOp, Comparator, Junction},
    value::Value,
};

/// A Number or Word token lifted into the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Integer(i64),
    Float(f64),
    /// Field name on the left of a comparison, text value anywhere else
    Word(String),
}

impl Literal {
    /// Zero, NaN and the empty word. A comparison against a falsy literal never holds.
    pub fn is_falsy(&self) -> bool {
        match self {
            Literal::Integer(n) => *n == 0,
            Literal::Float(n) => *n == 0.0 || n.is_nan(),
            Literal::Word(w) => w.is_empty(),
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Literal::Integer(n) => Value::Integer(*n),
            Literal::Float(n) => Value::Float(*n),
            Literal::Word(w) => Value::String(w.clone()),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(n) => write!(f, "{}", n),
            Literal::Float(n) => write!(f, "{}", n),
            Literal::Word(w) => f.write_str(w),
        }
    }
}

/// One element of a bracketed list. Each item owns the rest of the list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub literal: Literal,
    pub next: Option<Box<ListItem>>,
}

impl ListItem {
    pub fn new(literal: Literal, next: Option<ListItem>) -> Self {
        ListItem {
            literal,
            next: next.map(Box::new),
        }
    }

    /// Walks the chain until an item loosely equals `value`.
    pub fn contains(&self, value: &Value) -> bool {
        self.iter().any(|literal| value.loose_eq(&literal.to_value()))
    }

    pub fn iter(&self) -> ListIter<'_> {
        ListIter { item: Some(self) }
    }
}

impl Drop for ListItem {
    // Unlink one item at a time so long lists don't recurse on drop
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut item) = next {
            next = item.next.take();
        }
    }
}

pub struct ListIter<'a> {
    item: Option<&'a ListItem>,
}

impl<'a> Iterator for ListIter<'a> {
    type Item = &'a Literal;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.item?;
        self.item = item.next.as_deref();
        Some(&item.literal)
    }
}

/// Abstract Syntax Tree node produced by the parser.
///
/// Every node owns its subtrees outright; the tree is built once per parse and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Number or word leaf
    ///
    /// # Example
    /// ```text
    /// status
    /// 42
    /// ```
    Literal(Literal),

    /// `&&` / `||`
    ///
    /// Right-associative: `a && b && c` is `a && (b && c)`.
    Junction {
        op: Junction,
        left: Box<Node>,
        right: Box<Node>,
    },

    /// Field comparison
    ///
    /// # Example
    /// ```text
    /// age >= 18
    /// ```
    Comparison {
        op: Comparator,
        left: Box<Node>,
        right: Box<Node>,
    },

    /// Parenthesised expression
    Group(Box<Node>),

    /// Bracketed literal list
    ///
    /// # Example
    /// ```text
    /// [1 2 open]
    /// ```
    List(ListItem),

    /// Membership test
    ///
    /// # Example
    /// ```text
    /// region in [eu us]
    /// ```
    Membership { left: Box<Node>, right: Box<Node> },

    /// Quantified filter: `subject where filter`
    ///
    /// Over a sequence of facts this holds when some single fact satisfies
    /// both the filter and the subject.
    Where { subject: Box<Node>, filter: Box<Node> },
}

impl Node {
    pub fn word(name: impl Into<String>) -> Node {
        Node::Literal(Literal::Word(name.into()))
    }

    pub fn binary(op: BinaryOp, left: Node, right: Node) -> Node {
        let left = Box::new(left);
        let right = Box::new(right);
        match op {
            BinaryOp::Junction(op) => Node::Junction { op, left, right },
            BinaryOp::Compare(op) => Node::Comparison { op, left, right },
            BinaryOp::In => Node::Membership { left, right },
            BinaryOp::Where => Node::Where {
                subject: left,
                filter: right,
            },
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::output::to_sexpr(self))
    }
}
