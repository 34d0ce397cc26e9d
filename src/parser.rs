use log::trace;
use thiserror::Error;

use crate::{
    ast::{BinaryOp, Keyword, ListItem, Literal, Node, Token},
    cursor::Cursor,
};

/// Deepest `expression` nesting accepted; groups and every `&&`, `||` and
/// `where` operand each open one level.
pub const MAX_NESTING: usize = 128;

const JUNCTIONS: [Keyword; 2] = [Keyword::And, Keyword::Or];

const COMPARATORS: [Keyword; 6] = [
    Keyword::EqEq,
    Keyword::GtEq,
    Keyword::LtEq,
    Keyword::Gt,
    Keyword::Lt,
    Keyword::NotEq,
];

/// Grammar errors. `found` is the offending token text, or `end of input`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Expected {expected}, found {found}")]
    ExpectedLiteral { expected: &'static str, found: String },

    #[error("Expected '{expected}', found {found}")]
    ExpectedKeyword { expected: Keyword, found: String },

    #[error("Unexpected {found} after complete expression")]
    UnexpectedToken { found: String },

    #[error("Expression nests deeper than {limit} levels")]
    TooDeep { limit: usize },
}

fn describe(token: Option<&Token>) -> String {
    match token {
        Some(token) => format!("'{}'", token),
        None => "end of input".to_string(),
    }
}

/// Recursive-descent parser over a validated token sequence.
///
/// Rules are entered with the cursor on their first token and return with it
/// on their last, except [`Parser::expression`], which stops one past its
/// last token so the caller can inspect the follow token (`)` or end of input).
///
/// ```text
/// expression  := where
/// where       := and (WHERE expression)?
/// and         := comparator ((AND|OR) expression)?
/// comparator  := inExpr (CMP literal)?
/// inExpr      := brackets (IN brackets)?
/// brackets    := literal | '[' listItem ']' | '(' expression ')'
/// listItem    := literal (listItem)?
/// ```
pub struct Parser {
    cursor: Cursor,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            depth: 0,
        }
    }

    /// Current cursor index into the token buffer.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    fn current(&self) -> Option<&Token> {
        self.cursor.current()
    }

    fn found(&self) -> String {
        describe(self.current())
    }

    fn expect(&self, expected: Keyword) -> Result<(), ParseError> {
        match self.current() {
            Some(Token::Keyword(k)) if *k == expected => Ok(()),
            other => Err(ParseError::ExpectedKeyword {
                expected,
                found: describe(other),
            }),
        }
    }

    /// Tries to consume one of `keywords` after `subexpr`.
    ///
    /// On a match the keyword's right operand is parsed with `next_rule` and
    /// joined to `subexpr`. Without a match `subexpr` comes back unchanged;
    /// with `should_backstep` the cursor is also restored to where it was,
    /// otherwise it is left on the peeked token.
    pub fn operator(
        &mut self,
        keywords: &[Keyword],
        subexpr: Node,
        next_rule: fn(&mut Self) -> Result<Node, ParseError>,
        should_backstep: bool,
    ) -> Result<Node, ParseError> {
        self.cursor.next();

        if let Some(Token::Keyword(keyword)) = self.current()
            && keywords.contains(keyword)
            && let Some(op) = BinaryOp::from_keyword(*keyword)
        {
            trace!("operator '{}' at {}", keyword, self.position());
            self.cursor.next();
            let right = next_rule(self)?;
            return Ok(Node::binary(op, subexpr, right));
        }

        if should_backstep {
            self.cursor.back();
        }
        Ok(subexpr)
    }

    pub fn expression(&mut self) -> Result<Node, ParseError> {
        trace!("expression at {}", self.position());
        if self.depth >= MAX_NESTING {
            return Err(ParseError::TooDeep { limit: MAX_NESTING });
        }
        self.depth += 1;
        let node = self.where_clause();
        self.depth -= 1;
        node
    }

    /// A full expression that leaves the cursor on its own last token.
    fn nested_expression(&mut self) -> Result<Node, ParseError> {
        let node = self.expression()?;
        self.cursor.back();
        Ok(node)
    }

    pub fn where_clause(&mut self) -> Result<Node, ParseError> {
        trace!("where at {}", self.position());
        let subject = self.and()?;
        self.operator(&[Keyword::Where], subject, Self::expression, false)
    }

    pub fn and(&mut self) -> Result<Node, ParseError> {
        trace!("and at {}", self.position());
        let left = self.comparator()?;
        self.operator(&JUNCTIONS, left, Self::nested_expression, true)
    }

    pub fn comparator(&mut self) -> Result<Node, ParseError> {
        trace!("comparator at {}", self.position());
        let left = self.in_expr()?;
        self.operator(&COMPARATORS, left, Self::literal, true)
    }

    pub fn in_expr(&mut self) -> Result<Node, ParseError> {
        trace!("in at {}", self.position());
        let left = self.brackets()?;
        self.operator(&[Keyword::In], left, Self::brackets, true)
    }

    pub fn brackets(&mut self) -> Result<Node, ParseError> {
        match self.current() {
            Some(Token::Keyword(Keyword::LBracket)) => {
                trace!("list at {}", self.position());
                self.cursor.next();
                let items = self.list_item()?;
                self.cursor.next();
                self.expect(Keyword::RBracket)?;
                Ok(Node::List(items))
            }
            Some(Token::Keyword(Keyword::LParen)) => {
                trace!("group at {}", self.position());
                self.cursor.next();
                let inner = self.expression()?;
                self.expect(Keyword::RParen)?;
                Ok(Node::Group(Box::new(inner)))
            }
            _ => self
                .read_literal("a literal, '[' or '('")
                .map(Node::Literal),
        }
    }

    /// Reads literals up to the closing bracket and links them front to back.
    fn list_item(&mut self) -> Result<ListItem, ParseError> {
        let first = self.read_literal("a list value")?;
        let mut rest = Vec::new();

        self.cursor.next();
        while self.current().is_some_and(Token::is_literal) {
            rest.push(self.read_literal("a list value")?);
            self.cursor.next();
        }
        self.cursor.back();

        let next = rest
            .into_iter()
            .rev()
            .fold(None, |next, literal| Some(ListItem::new(literal, next)));
        Ok(ListItem::new(first, next))
    }

    pub fn literal(&mut self) -> Result<Node, ParseError> {
        self.read_literal("a literal").map(Node::Literal)
    }

    fn read_literal(&self, expected: &'static str) -> Result<Literal, ParseError> {
        match self.current() {
            Some(Token::Integer(n)) => Ok(Literal::Integer(*n)),
            Some(Token::Float(n)) => Ok(Literal::Float(*n)),
            Some(Token::Word(w)) => Ok(Literal::Word(w.clone())),
            _ => Err(ParseError::ExpectedLiteral {
                expected,
                found: self.found(),
            }),
        }
    }

    /// Parses the whole token sequence as one expression.
    pub fn parse(&mut self) -> Result<Node, ParseError> {
        let node = self.expression()?;
        match self.current() {
            None => Ok(node),
            Some(token) => Err(ParseError::UnexpectedToken {
                found: describe(Some(token)),
            }),
        }
    }
}

pub fn parse(tokens: Vec<Token>) -> Result<Node, ParseError> {
    Parser::new(tokens).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    fn parser(source: &str) -> Parser {
        Parser::new(lex(source).unwrap())
    }

    #[test]
    fn test_failed_junction_restores_cursor() {
        let mut p = parser("a == 1 where b == 2");
        let node = p.and().unwrap();
        assert!(matches!(node, Node::Comparison { .. }));
        // On the `1`, not on `where`
        assert_eq!(p.position(), 2);
    }

    #[test]
    fn test_failed_comparator_restores_cursor() {
        let mut p = parser("a && b == 1");
        let before = p.position();
        let node = p.comparator().unwrap();
        assert_eq!(node, Node::word("a"));
        assert_eq!(p.position(), before);
    }

    #[test]
    fn test_failed_membership_at_end_restores_cursor() {
        let mut p = parser("a");
        p.in_expr().unwrap();
        assert_eq!(p.position(), 0);
        assert!(p.current().is_some());
    }

    #[test]
    fn test_where_leaves_cursor_on_follow_token() {
        let mut p = parser("(a == 1) || b");
        p.cursor.next();
        p.expression().unwrap();
        assert_eq!(p.current(), Some(&Token::Keyword(Keyword::RParen)));
    }

    #[test]
    fn test_list_chain_order() {
        let mut p = parser("[1 b 2.5]");
        let node = p.brackets().unwrap();
        let Node::List(items) = node else {
            panic!("Expected list");
        };
        let collected: Vec<_> = items.iter().cloned().collect();
        assert_eq!(
            collected,
            vec![
                Literal::Integer(1),
                Literal::Word("b".to_string()),
                Literal::Float(2.5)
            ]
        );
        assert_eq!(p.current(), Some(&Token::Keyword(Keyword::RBracket)));
    }
}
