use crate::ast::Token;

/// A rewindable position over an owned token buffer.
///
/// The index never drops below `0` and never moves past `len`. Once `next()`
/// steps past the last token the cursor is at end of input and `current()`
/// yields `None`; a `back()` from there lands on the last token again.
#[derive(Debug, Clone)]
pub struct Cursor {
    tokens: Vec<Token>,
    index: usize,
    eof: bool,
}

impl Cursor {
    pub fn new(tokens: Vec<Token>) -> Self {
        let eof = tokens.is_empty();
        Cursor {
            tokens,
            index: 0,
            eof,
        }
    }

    pub fn next(&mut self) {
        if self.index < self.tokens.len() {
            self.index += 1;
        }
        self.eof = self.index >= self.tokens.len();
    }

    pub fn back(&mut self) {
        self.index = self.index.saturating_sub(1);
        self.eof = self.index >= self.tokens.len();
    }

    pub fn current(&self) -> Option<&Token> {
        if self.eof {
            return None;
        }
        self.tokens.get(self.index)
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn is_eof(&self) -> bool {
        self.eof
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> Vec<Token> {
        (0..n).map(|i| Token::Word(format!("w{i}"))).collect()
    }

    #[test]
    fn test_next_past_end_sets_eof() {
        let mut cursor = Cursor::new(words(2));
        cursor.next();
        assert_eq!(cursor.current(), Some(&Token::Word("w1".to_string())));
        cursor.next();
        assert!(cursor.is_eof());
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.current(), None);

        cursor.next();
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_back_clamps_at_zero() {
        let mut cursor = Cursor::new(words(1));
        cursor.back();
        assert_eq!(cursor.position(), 0);
        assert!(!cursor.is_eof());
    }

    #[test]
    fn test_back_from_eof_restores_last_token() {
        let mut cursor = Cursor::new(words(3));
        cursor.next();
        cursor.next();
        cursor.next();
        assert!(cursor.is_eof());
        cursor.back();
        assert!(!cursor.is_eof());
        assert_eq!(cursor.current(), Some(&Token::Word("w2".to_string())));
    }

    #[test]
    fn test_empty_buffer_starts_at_eof() {
        let cursor = Cursor::new(Vec::new());
        assert!(cursor.is_eof());
        assert_eq!(cursor.current(), None);
    }
}
