use std::fmt;

/// The closed set of symbols and reserved words the lexer recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// Logical AND (`&&`)
    And,
    /// Logical OR (`||`)
    Or,
    /// Quantified filter
    ///
    /// # Examples
    /// ```text
    /// a == 1 where b == 2
    /// ```
    Where,
    /// List membership
    ///
    /// # Examples
    /// ```text
    /// status in [open pending]
    /// ```
    In,
    /// Left parenthesis for grouping
    LParen,
    /// Right parenthesis
    RParen,
    /// Left bracket opening a list
    LBracket,
    /// Right bracket
    RBracket,
    /// Equality (`==`)
    EqEq,
    /// Greater than or equal (`>=`)
    GtEq,
    /// Less than or equal (`<=`)
    LtEq,
    /// Greater than (`>`)
    Gt,
    /// Less than (`<`)
    Lt,
    /// Inequality (`!=`)
    NotEq,
}

impl Keyword {
    pub const ALL: [Keyword; 14] = [
        Keyword::And,
        Keyword::Or,
        Keyword::Where,
        Keyword::In,
        Keyword::LParen,
        Keyword::RParen,
        Keyword::LBracket,
        Keyword::RBracket,
        Keyword::EqEq,
        Keyword::GtEq,
        Keyword::LtEq,
        Keyword::Gt,
        Keyword::Lt,
        Keyword::NotEq,
    ];

    /// Looks up the keyword spelled exactly as `text`.
    pub fn from_symbol(text: &str) -> Option<Keyword> {
        Keyword::ALL.into_iter().find(|k| k.as_str() == text)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::And => "&&",
            Keyword::Or => "||",
            Keyword::Where => "where",
            Keyword::In => "in",
            Keyword::LParen => "(",
            Keyword::RParen => ")",
            Keyword::LBracket => "[",
            Keyword::RBracket => "]",
            Keyword::EqEq => "==",
            Keyword::GtEq => ">=",
            Keyword::LtEq => "<=",
            Keyword::Gt => ">",
            Keyword::Lt => "<",
            Keyword::NotEq => "!=",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the parser and evaluator interpret a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Keyword,
    Number,
    Word,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Keyword => f.write_str("Keyword"),
            Category::Number => f.write_str("Number"),
            Category::Word => f.write_str("Word"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// One of the fixed operator symbols or reserved words
    Keyword(Keyword),

    /// Integer
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 7
    /// ```
    Integer(i64),

    /// Decimal number
    ///
    /// # Examples
    /// ```text
    /// 1.2
    /// .5
    /// ```
    Float(f64),

    /// Field name or bare text value
    ///
    /// Letters, digits, `-` and `_`.
    ///
    /// # Examples
    /// ```text
    /// status
    /// item_count
    /// eu-west-1
    /// ```
    Word(String),
}

impl Token {
    pub fn category(&self) -> Category {
        match self {
            Token::Keyword(_) => Category::Keyword,
            Token::Integer(_) | Token::Float(_) => Category::Number,
            Token::Word(_) => Category::Word,
        }
    }

    /// True for Number and Word tokens.
    pub fn is_literal(&self) -> bool {
        !matches!(self, Token::Keyword(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Keyword(k) => write!(f, "{}", k),
            Token::Integer(n) => write!(f, "{}", n),
            Token::Float(n) => write!(f, "{}", n),
            Token::Word(w) => f.write_str(w),
        }
    }
}
