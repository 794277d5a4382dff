//! # Error Types
//!
//! This module defines the error surface of the word generator:
//!
//! - [`SyntaxError`]: a malformed expression, carrying the offending
//!   [`Position`] and character,
//! - [`InputError`]: an unusable alphabet or word count,
//! - [`WordgenError`]: the union of both, returned by the pipeline entry
//!   points so callers can propagate with `?`.
//!
//! Every failure is terminal for the request that produced it. Nothing here
//! is retried internally; the caller decides whether to prompt again.

use crate::cursor::Position;
use thiserror::Error;

/// A malformed expression.
///
/// Positions are 0-based character offsets into the expression text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// Input ran out where a symbol, `@` or `(` was expected.
    ///
    /// Also produced for an empty expression.
    #[error("unexpected end of expression at {position}")]
    UnexpectedEnd { position: Position },

    /// A `(` was not closed by a `)` at the point the group ended.
    ///
    /// `found` is the character seen instead of `)`, or `None` at end of input.
    #[error("unmatched '(' opened at {open}: expected ')' at {position}, found {}", describe(.found))]
    UnmatchedParen {
        open: Position,
        position: Position,
        found: Option<char>,
    },

    /// A `)` with no group open.
    #[error("unmatched ')' at {position}")]
    UnmatchedCloseParen { position: Position },

    /// A character that is neither an alphabet symbol nor valid at this point.
    #[error("unexpected character {ch:?} at {position}")]
    UnexpectedChar { position: Position, ch: char },

    /// Groups and repetitions nest deeper than the parser accepts.
    ///
    /// `position` is the `(` or `*` that crossed the limit.
    #[error("expression nests deeper than {limit} levels at {position}")]
    NestingTooDeep { position: Position, limit: usize },
}

fn describe(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("{c:?}"),
        None => "end of expression".to_string(),
    }
}

impl SyntaxError {
    /// Position of the offending character (or of the end of input).
    pub fn position(&self) -> Position {
        match self {
            SyntaxError::UnexpectedEnd { position }
            | SyntaxError::UnmatchedParen { position, .. }
            | SyntaxError::UnmatchedCloseParen { position }
            | SyntaxError::UnexpectedChar { position, .. }
            | SyntaxError::NestingTooDeep { position, .. } => *position,
        }
    }

    /// Renders the expression with a caret under the offending position.
    ///
    /// ```rust
    /// # use wordgen::{Alphabet, parse};
    /// let alphabet = Alphabet::new("ab").unwrap();
    /// let err = parse("a+c", &alphabet).unwrap_err();
    /// assert_eq!(err.caret("a+c"), "a+c\n  ^");
    /// ```
    pub fn caret(&self, expression: &str) -> String {
        format!("{expression}\n{}^", " ".repeat(self.position().offset))
    }
}

/// An unusable alphabet or word count.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The alphabet has no symbols.
    #[error("alphabet is empty")]
    EmptyAlphabet,

    /// The word count is not a number.
    #[error("word count {0:?} is not a number")]
    InvalidCount(String),

    /// The word count is zero or negative.
    #[error("word count must be positive, got {0}")]
    NonPositiveCount(String),

    /// The word count is a positive number too large to represent.
    #[error("word count {0} is too large")]
    CountTooLarge(String),
}

/// Represents all errors a word-generation request can fail with.
///
/// Conversions from the specific error types are derived with `#[from]`,
/// so functions returning [`Result`] can use `?` directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordgenError {
    /// The expression could not be parsed.
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    /// The alphabet or word count was rejected.
    #[error("invalid input: {0}")]
    Input(#[from] InputError),
}

/// Result type used throughout the crate.
pub type Result<T, E = WordgenError> = std::result::Result<T, E>;
