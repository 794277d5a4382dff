use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

/// A 0-based character position in expression text.
#[derive(Debug, Clone, Default, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// 0-based character offset (not a byte offset).
    pub offset: usize,
}

impl Position {
    /// Creates a new `Position`.
    #[inline]
    pub const fn new(offset: usize) -> Self {
        Self { offset }
    }

    /// 1-based column, for diagnostics.
    #[inline]
    pub const fn column(&self) -> usize {
        self.offset + 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "column {}", self.column())
    }
}

/// Tracks the current position while scanning expression text.
///
/// The parser has no separate token stream: every character is a token, so
/// `Cursor` only needs one character of lookahead.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    chars: Peekable<Chars<'a>>,
    pos: Position,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
            pos: Position::default(),
        }
    }

    /// Returns the next character without consuming it.
    #[inline]
    pub fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Consumes one character, advancing the position.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.pos.offset += 1;
        Some(c)
    }

    /// Consumes the next character if it equals `expected`.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Position of the next unconsumed character.
    #[inline]
    pub fn position(&self) -> Position {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_counts_characters_not_bytes() {
        let mut cursor = Cursor::new("äb");
        assert_eq!(cursor.advance(), Some('ä'));
        assert_eq!(cursor.position(), Position::new(1));
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.position(), Position::new(2));
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.position(), Position::new(2));
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn eat_only_consumes_matching_char() {
        let mut cursor = Cursor::new("(a");
        assert!(!cursor.eat('a'));
        assert_eq!(cursor.position(), Position::new(0));
        assert!(cursor.eat('('));
        assert_eq!(cursor.peek(), Some('a'));
    }

    #[test]
    fn position_displays_one_based_column() {
        assert_eq!(Position::new(0).to_string(), "column 1");
        assert_eq!(Position::new(4).column(), 5);
    }
}
