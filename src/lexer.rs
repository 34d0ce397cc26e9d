use log::trace;
use thiserror::Error;

use crate::ast::{Keyword, Token};

/// Errors raised while turning source text into a valid token sequence.
///
/// Every message carries the offending source so a caller can show it as-is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    /// A character outside every recognised class
    #[error("ERROR: Invalid character: '{character}' at position {position}\nCode:\n\t{source_text}")]
    InvalidCharacter {
        character: char,
        position: usize,
        source_text: String,
    },

    /// A run of symbol characters that spells no keyword (`&`, `=`, `!`)
    #[error("ERROR: Unknown symbol '{symbol}' at position {position}\nCode:\n\t{source_text}")]
    UnknownSymbol {
        symbol: String,
        position: usize,
        source_text: String,
    },

    /// Digits and points that do not form a number (`1.2.3`, `.`)
    #[error("ERROR: '{text}' is not a valid number\nCode:\n\t{source_text}")]
    InvalidNumber { text: String, source_text: String },

    /// Two literals side by side outside a list
    #[error("ERROR: '{left} {right}' forms an illegal combination outside of a list\nCode:\n\t{source_text}")]
    IllegalCombination {
        left: String,
        right: String,
        source_text: String,
    },

    /// An operator keyword between `[` and `]`
    #[error("ERROR: Values in a list must be words or numbers\nCode:\n\t{source_text}")]
    ListContent { source_text: String },
}

/// Character classes. A token only ever accumulates characters of one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Symbol,
    Number,
    Word,
}

impl CharClass {
    fn of(ch: char) -> Option<CharClass> {
        match ch {
            '&' | '|' | '<' | '>' | '=' | '!' | '(' | ')' | '[' | ']' => Some(CharClass::Symbol),
            '.' => Some(CharClass::Number),
            c if c.is_ascii_digit() => Some(CharClass::Number),
            c if c.is_alphanumeric() || c == '_' || c == '-' => Some(CharClass::Word),
            _ => None,
        }
    }
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn source_text(&self) -> String {
        self.input.iter().collect()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Longest match: a two-character keyword wins over its one-character prefix.
    fn read_symbol(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        let first = self.current_char().unwrap_or_default();

        if let Some(second) = self.peek_char(1)
            && let Some(keyword) = Keyword::from_symbol(&format!("{first}{second}"))
        {
            self.advance();
            self.advance();
            return Ok(Token::Keyword(keyword));
        }

        match Keyword::from_symbol(first.encode_utf8(&mut [0; 4])) {
            Some(keyword) => {
                self.advance();
                Ok(Token::Keyword(keyword))
            }
            None => Err(LexError::UnknownSymbol {
                symbol: first.to_string(),
                position: start,
                source_text: self.source_text(),
            }),
        }
    }

    fn read_number(&mut self) -> Result<Token, LexError> {
        let mut number = String::new();

        while let Some(ch) = self.current_char() {
            if CharClass::of(ch) == Some(CharClass::Number) {
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let invalid = || LexError::InvalidNumber {
            text: number.clone(),
            source_text: self.source_text(),
        };

        if number.contains('.') {
            number.parse::<f64>().map(Token::Float).map_err(|_| invalid())
        } else {
            match number.parse::<i64>() {
                Ok(n) => Ok(Token::Integer(n)),
                // Too wide for i64, still a valid number
                Err(_) => number.parse::<f64>().map(Token::Float).map_err(|_| invalid()),
            }
        }
    }

    /// Reads letters, digits, `-` and `_`; reserved words become keywords.
    fn read_word(&mut self) -> Token {
        let mut word = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' || ch == '-' {
                word.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match Keyword::from_symbol(&word) {
            Some(keyword) => Token::Keyword(keyword),
            None => Token::Word(word),
        }
    }

    /// Returns the next token, or `None` at the end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        let token = match CharClass::of(ch) {
            Some(CharClass::Symbol) => self.read_symbol()?,
            Some(CharClass::Number) => self.read_number()?,
            Some(CharClass::Word) => self.read_word(),
            None => {
                return Err(LexError::InvalidCharacter {
                    character: ch,
                    position: self.position,
                    source_text: self.source_text(),
                });
            }
        };

        trace!("lexed {:?} '{}'", token.category(), token);
        Ok(Some(token))
    }

    /// Splits the whole input into tokens without checking how they sit together.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}

/// Rejects two literals side by side outside a list, and any operator inside one.
///
/// `source` is only used for the error message.
pub fn validate_token_adjacency(tokens: &[Token], source: &str) -> Result<(), LexError> {
    let mut in_list = false;
    let mut previous: Option<&Token> = None;

    for token in tokens {
        match token {
            Token::Keyword(Keyword::LBracket) => in_list = true,
            Token::Keyword(Keyword::RBracket) => in_list = false,
            Token::Keyword(_) if in_list => {
                return Err(LexError::ListContent {
                    source_text: source.to_string(),
                });
            }
            _ => {}
        }

        if !in_list
            && let Some(prev) = previous
            && prev.is_literal()
            && token.is_literal()
        {
            return Err(LexError::IllegalCombination {
                left: prev.to_string(),
                right: token.to_string(),
                source_text: source.to_string(),
            });
        }

        previous = Some(token);
    }
    Ok(())
}

/// Tokenizes `source` and validates the result.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Lexer::new(source).tokenize()?;
    validate_token_adjacency(&tokens, source)?;
    Ok(tokens)
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("&& || where in");
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Keyword(Keyword::And)));
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Keyword(Keyword::Or)));
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Keyword(Keyword::Where)));
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Keyword(Keyword::In)));
    assert_eq!(lexer.next_token().unwrap(), None);
}

#[test]
fn test_comparison_without_spaces() {
    let mut lexer = Lexer::new("(b<=3)");
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Keyword(Keyword::LParen)));
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Word("b".to_string())));
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Keyword(Keyword::LtEq)));
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Integer(3)));
    assert_eq!(lexer.next_token().unwrap(), Some(Token::Keyword(Keyword::RParen)));
}
