use std::{cmp::Ordering, fmt};

use crate::{ast::Keyword, value::Value};

/// Boolean connectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Junction {
    /// Logical AND (`&&`)
    And,
    /// Logical OR (`||`)
    Or,
}

impl Junction {
    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            Junction::And => left && right,
            Junction::Or => left || right,
        }
    }
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// Equal (`==`)
    Equal,
    /// Not equal (`!=`)
    NotEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    GreaterThan,
    /// Less than (`<`)
    LessThan,
}

impl Comparator {
    /// Compares a fact value against a literal using loose equality and ordering.
    ///
    /// Ordering operators are false when the two sides have no ordering.
    pub fn apply(self, actual: &Value, expected: &Value) -> bool {
        match self {
            Comparator::Equal => actual.loose_eq(expected),
            Comparator::NotEqual => !actual.loose_eq(expected),
            Comparator::GreaterEqual => matches!(
                actual.loose_cmp(expected),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            Comparator::LessEqual => matches!(
                actual.loose_cmp(expected),
                Some(Ordering::Less | Ordering::Equal)
            ),
            Comparator::GreaterThan => actual.loose_cmp(expected) == Some(Ordering::Greater),
            Comparator::LessThan => actual.loose_cmp(expected) == Some(Ordering::Less),
        }
    }
}

/// Every keyword that joins two subtrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Junction(Junction),
    Compare(Comparator),
    In,
    Where,
}

impl BinaryOp {
    pub fn from_keyword(keyword: Keyword) -> Option<BinaryOp> {
        let op = match keyword {
            Keyword::And => BinaryOp::Junction(Junction::And),
            Keyword::Or => BinaryOp::Junction(Junction::Or),
            Keyword::EqEq => BinaryOp::Compare(Comparator::Equal),
            Keyword::NotEq => BinaryOp::Compare(Comparator::NotEqual),
            Keyword::GtEq => BinaryOp::Compare(Comparator::GreaterEqual),
            Keyword::LtEq => BinaryOp::Compare(Comparator::LessEqual),
            Keyword::Gt => BinaryOp::Compare(Comparator::GreaterThan),
            Keyword::Lt => BinaryOp::Compare(Comparator::LessThan),
            Keyword::In => BinaryOp::In,
            Keyword::Where => BinaryOp::Where,
            Keyword::LParen | Keyword::RParen | Keyword::LBracket | Keyword::RBracket => {
                return None;
            }
        };
        Some(op)
    }

    pub fn keyword(self) -> Keyword {
        match self {
            BinaryOp::Junction(Junction::And) => Keyword::And,
            BinaryOp::Junction(Junction::Or) => Keyword::Or,
            BinaryOp::Compare(Comparator::Equal) => Keyword::EqEq,
            BinaryOp::Compare(Comparator::NotEqual) => Keyword::NotEq,
            BinaryOp::Compare(Comparator::GreaterEqual) => Keyword::GtEq,
            BinaryOp::Compare(Comparator::LessEqual) => Keyword::LtEq,
            BinaryOp::Compare(Comparator::GreaterThan) => Keyword::Gt,
            BinaryOp::Compare(Comparator::LessThan) => Keyword::Lt,
            BinaryOp::In => Keyword::In,
            BinaryOp::Where => Keyword::Where,
        }
    }
}

impl fmt::Display for Junction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", BinaryOp::Junction(*self).keyword())
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", BinaryOp::Compare(*self).keyword())
    }
}
