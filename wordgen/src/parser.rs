//! # Expression Parser
//!
//! A recursive-descent parser from expression text to an [`Expr`] tree.
//! Precedence, lowest to highest:
//!
//! ```text
//! Union   -> Concat ( '+' Concat )*         one chain of alternatives
//! Concat  -> Star Star*                     one chain of factors
//! Star    -> Primary '*'*                   each '*' wraps once more
//! Primary -> '(' Union ')' | '@' | symbol
//! ```
//!
//! There is no separate lexer: every character is a token. Concatenation has
//! no operator; a new factor starts whenever the next character is neither
//! `+` nor `)`.
//!
//! Chains are collected in loops, so only groups and repetitions add depth,
//! to the parser's stack and to the tree. Both are capped at [`MAX_DEPTH`].
//!
//! A character is an operator or a literal depending on where it appears,
//! not on whether it is in the alphabet. `(` and `@` always open a group or
//! denote the empty word. At a factor position any alphabet symbol is a
//! literal, including `+`, `*` or `)` if the alphabet contains them.

use crate::alphabet::Alphabet;
use crate::cursor::{Cursor, Position};
use crate::error::SyntaxError;
use crate::expr::Expr;

/// Deepest nesting of groups, and height of the resulting tree, the parser
/// accepts.
pub const MAX_DEPTH: usize = 256;

/// Parses expression text against a fixed alphabet.
///
/// The parser holds no state between calls; parsing the same text twice
/// yields equal trees.
///
/// # Example
///
/// ```rust
/// # use wordgen::{Alphabet, Expr, ExprParser};
/// let alphabet = Alphabet::new("ab").unwrap();
/// let parser = ExprParser::new(&alphabet);
/// let e = parser.parse("(a+b)b").unwrap();
/// assert_eq!(
///     e,
///     Expr::concat(
///         Expr::union(Expr::literal('a'), Expr::literal('b')),
///         Expr::literal('b'),
///     )
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExprParser<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> ExprParser<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Parses `text` into an expression tree.
    ///
    /// # Errors
    ///
    /// - [`SyntaxError::UnexpectedEnd`] if the text (possibly empty) ends
    ///   where a factor is expected,
    /// - [`SyntaxError::UnmatchedParen`] if a group is not closed,
    /// - [`SyntaxError::UnmatchedCloseParen`] for a `)` with no open group,
    /// - [`SyntaxError::UnexpectedChar`] for any other character that is not
    ///   an alphabet symbol,
    /// - [`SyntaxError::NestingTooDeep`] past [`MAX_DEPTH`] levels of groups
    ///   or tree height.
    pub fn parse(&self, text: &str) -> Result<Expr, SyntaxError> {
        let mut state = ParseState {
            cursor: Cursor::new(text),
            alphabet: self.alphabet,
            groups: 0,
        };
        let (expr, height) = state.union()?;
        if let Some(c) = state.cursor.peek() {
            // `concat` only stops before `+` or `)`, and `union` consumes `+`
            let position = state.cursor.position();
            return Err(if c == ')' {
                SyntaxError::UnmatchedCloseParen { position }
            } else {
                SyntaxError::UnexpectedChar { position, ch: c }
            });
        }
        log::debug!("parsed {text:?}: height {height}");
        Ok(expr)
    }
}

/// Parses `text` over `alphabet`. Shorthand for
/// [`ExprParser::new(alphabet).parse(text)`](ExprParser::parse).
pub fn parse(text: &str, alphabet: &Alphabet) -> Result<Expr, SyntaxError> {
    ExprParser::new(alphabet).parse(text)
}

struct ParseState<'t, 'a> {
    cursor: Cursor<'t>,
    alphabet: &'a Alphabet,
    groups: usize,
}

/// A parsed subexpression and the height of its tree; leaves have height 0.
type Parsed = (Expr, usize);

impl ParseState<'_, '_> {
    fn union(&mut self) -> Result<Parsed, SyntaxError> {
        let start = self.cursor.position();
        log::trace!("union at {start}");
        let (first, mut height) = self.concat()?;
        let mut alternatives = vec![first];
        while self.cursor.eat('+') {
            let (next, h) = self.concat()?;
            height = height.max(h);
            alternatives.push(next);
        }
        if alternatives.len() > 1 {
            height = deepen(height, start)?;
        }
        Ok((Expr::union_all(alternatives), height))
    }

    fn concat(&mut self) -> Result<Parsed, SyntaxError> {
        let start = self.cursor.position();
        log::trace!("concat at {start}");
        let (first, mut height) = self.star()?;
        let mut factors = vec![first];
        while let Some(c) = self.cursor.peek() {
            if c == '+' || c == ')' {
                break;
            }
            let (next, h) = self.star()?;
            height = height.max(h);
            factors.push(next);
        }
        if factors.len() > 1 {
            height = deepen(height, start)?;
        }
        Ok((Expr::concat_all(factors), height))
    }

    fn star(&mut self) -> Result<Parsed, SyntaxError> {
        let (mut expr, mut height) = self.primary()?;
        loop {
            let position = self.cursor.position();
            if !self.cursor.eat('*') {
                return Ok((expr, height));
            }
            height = deepen(height, position)?;
            expr = Expr::star(expr);
        }
    }

    fn primary(&mut self) -> Result<Parsed, SyntaxError> {
        let position = self.cursor.position();
        log::trace!("primary at {position}");
        match self.cursor.advance() {
            None => Err(SyntaxError::UnexpectedEnd { position }),
            Some('(') => {
                self.groups += 1;
                if self.groups > MAX_DEPTH {
                    return Err(SyntaxError::NestingTooDeep {
                        position,
                        limit: MAX_DEPTH,
                    });
                }
                let inner = self.union()?;
                if !self.cursor.eat(')') {
                    return Err(SyntaxError::UnmatchedParen {
                        open: position,
                        position: self.cursor.position(),
                        found: self.cursor.peek(),
                    });
                }
                self.groups -= 1;
                Ok(inner)
            }
            Some('@') => Ok((Expr::empty(), 0)),
            Some(c) if self.alphabet.contains(c) => Ok((Expr::literal(c), 0)),
            Some(c) => Err(SyntaxError::UnexpectedChar { position, ch: c }),
        }
    }
}

/// Height of a node whose tallest child has `height`.
fn deepen(height: usize, position: Position) -> Result<usize, SyntaxError> {
    let height = height + 1;
    if height > MAX_DEPTH {
        return Err(SyntaxError::NestingTooDeep {
            position,
            limit: MAX_DEPTH,
        });
    }
    Ok(height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Position;

    fn ab() -> Alphabet {
        Alphabet::new("ab").unwrap()
    }

    fn a() -> Expr {
        Expr::literal('a')
    }

    fn b() -> Expr {
        Expr::literal('b')
    }

    #[test]
    fn parses_single_symbol_and_empty_word() {
        let _ = env_logger::builder().is_test(true).try_init();
        assert_eq!(parse("a", &ab()).unwrap(), a());
        assert_eq!(parse("@", &ab()).unwrap(), Expr::empty());
    }

    #[test]
    fn empty_word_needs_no_alphabet_entry() {
        let alphabet = Alphabet::new("x").unwrap();
        assert_eq!(
            parse("x@", &alphabet).unwrap(),
            Expr::concat(Expr::literal('x'), Expr::empty())
        );
    }

    #[test]
    fn concat_is_one_chain() {
        assert_eq!(
            parse("aba", &ab()).unwrap(),
            Expr::Concat(vec![a(), b(), a()])
        );
        assert_eq!(
            parse("aba", &ab()).unwrap(),
            Expr::concat(Expr::concat(a(), b()), a())
        );
    }

    #[test]
    fn union_is_one_chain() {
        assert_eq!(
            parse("a+b+@", &ab()).unwrap(),
            Expr::Union(vec![a(), b(), Expr::empty()])
        );
        assert_eq!(
            parse("a+b+@", &ab()).unwrap(),
            Expr::union(a(), Expr::union(b(), Expr::empty()))
        );
    }

    #[test]
    fn groups_of_the_same_operator_splice() {
        assert_eq!(parse("a(ba)", &ab()).unwrap(), parse("aba", &ab()).unwrap());
        assert_eq!(
            parse("(a+b)+a", &ab()).unwrap(),
            parse("a+b+a", &ab()).unwrap()
        );
        assert_eq!(
            parse("(a+b)(ab)", &ab()).unwrap(),
            Expr::Concat(vec![Expr::union(a(), b()), a(), b()])
        );
    }

    #[test]
    fn precedence_star_over_concat_over_union() {
        assert_eq!(
            parse("ab*+a", &ab()).unwrap(),
            Expr::union(Expr::concat(a(), Expr::star(b())), a())
        );
    }

    #[test]
    fn grouping_overrides_precedence() {
        assert_eq!(
            parse("(a+b)b", &ab()).unwrap(),
            Expr::concat(Expr::union(a(), b()), b())
        );
        assert_eq!(
            parse("(ab)*", &ab()).unwrap(),
            Expr::star(Expr::concat(a(), b()))
        );
    }

    #[test]
    fn repeated_star_nests() {
        assert_eq!(
            parse("a**", &ab()).unwrap(),
            Expr::star(Expr::star(a()))
        );
    }

    #[test]
    fn empty_text_is_unexpected_end() {
        assert_eq!(
            parse("", &ab()),
            Err(SyntaxError::UnexpectedEnd {
                position: Position::new(0)
            })
        );
    }

    #[test]
    fn truncated_union_is_unexpected_end() {
        assert_eq!(
            parse("a+", &ab()),
            Err(SyntaxError::UnexpectedEnd {
                position: Position::new(2)
            })
        );
        assert_eq!(
            parse("(", &ab()),
            Err(SyntaxError::UnexpectedEnd {
                position: Position::new(1)
            })
        );
    }

    #[test]
    fn unclosed_group_is_unmatched_paren() {
        let alphabet = Alphabet::new("a").unwrap();
        assert_eq!(
            parse("(a", &alphabet),
            Err(SyntaxError::UnmatchedParen {
                open: Position::new(0),
                position: Position::new(2),
                found: None,
            })
        );
    }

    #[test]
    fn stray_close_paren_is_reported() {
        assert_eq!(
            parse("ab)", &ab()),
            Err(SyntaxError::UnmatchedCloseParen {
                position: Position::new(2)
            })
        );
    }

    #[test]
    fn misplaced_operators_are_unexpected() {
        assert_eq!(
            parse("+a", &ab()),
            Err(SyntaxError::UnexpectedChar {
                position: Position::new(0),
                ch: '+'
            })
        );
        assert_eq!(
            parse("a+*", &ab()),
            Err(SyntaxError::UnexpectedChar {
                position: Position::new(2),
                ch: '*'
            })
        );
        assert_eq!(
            parse("()", &ab()),
            Err(SyntaxError::UnexpectedChar {
                position: Position::new(1),
                ch: ')'
            })
        );
    }

    #[test]
    fn unknown_symbol_is_unexpected() {
        assert_eq!(
            parse("abc", &ab()),
            Err(SyntaxError::UnexpectedChar {
                position: Position::new(2),
                ch: 'c'
            })
        );
        assert!(matches!(
            parse("a b", &ab()),
            Err(SyntaxError::UnexpectedChar { ch: ' ', .. })
        ));
    }

    #[test]
    fn reserved_symbol_in_alphabet_is_literal_at_factor_position() {
        let alphabet = Alphabet::new("a*").unwrap();
        // leading `*` is a factor, trailing `*` is repetition
        assert_eq!(
            parse("*a*", &alphabet).unwrap(),
            Expr::concat(Expr::literal('*'), Expr::star(a()))
        );
    }

    #[test]
    fn reparse_yields_equal_trees() {
        let alphabet = ab();
        let parser = ExprParser::new(&alphabet);
        let text = "(a+@)*b(ab+ba)**";
        assert_eq!(parser.parse(text).unwrap(), parser.parse(text).unwrap());
    }

    #[test]
    fn display_round_trips_through_parser() {
        let alphabet = ab();
        for text in ["(a+b)b", "a+b+@", "(ab)*a", "a**b", "((a+b)+a)b", "a(b(ab))"] {
            let e = parse(text, &alphabet).unwrap();
            assert_eq!(parse(&e.to_string(), &alphabet).unwrap(), e, "{text}");
        }
    }

    #[test]
    fn long_chains_parse_and_enumerate() {
        let _ = env_logger::builder().is_test(true).try_init();
        let alphabet = ab();
        let text = "ab".repeat(5_000);
        let e = parse(&text, &alphabet).unwrap();
        assert!(matches!(&e, Expr::Concat(factors) if factors.len() == 10_000));
        let words: Vec<_> = e.words().take(2).collect();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].as_str(), text);
        assert!(e.starvations().is_empty());
        assert_eq!(e.to_string(), text);

        let text = vec!["a"; 10_000].join("+");
        let e = parse(&text, &alphabet).unwrap();
        assert_eq!(e.words().count(), 10_000);
    }

    #[test]
    fn nesting_up_to_the_limit_is_accepted() {
        let alphabet = ab();
        let text = format!("{}a{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        let e = parse(&text, &alphabet).unwrap();
        assert_eq!(e, a());

        let text = format!("a{}", "*".repeat(MAX_DEPTH));
        let e = parse(&text, &alphabet).unwrap();
        let words: Vec<String> = e.words().take(3).map(|w| w.to_string()).collect();
        assert_eq!(words, ["", "", ""]);
    }

    #[test]
    fn deep_nesting_is_rejected() {
        let alphabet = ab();
        let text = format!("{}a{}", "(".repeat(2_000), ")".repeat(2_000));
        assert_eq!(
            parse(&text, &alphabet),
            Err(SyntaxError::NestingTooDeep {
                position: Position::new(MAX_DEPTH),
                limit: MAX_DEPTH,
            })
        );

        let text = format!("a{}", "*".repeat(2_000));
        assert_eq!(
            parse(&text, &alphabet),
            Err(SyntaxError::NestingTooDeep {
                position: Position::new(MAX_DEPTH + 1),
                limit: MAX_DEPTH,
            })
        );

        // every other group adds a concatenation level to the tree
        let mut text = String::from("a");
        for _ in 0..MAX_DEPTH {
            text = format!("b({text}+a)");
        }
        assert!(matches!(
            parse(&text, &alphabet),
            Err(SyntaxError::NestingTooDeep { .. })
        ));
    }

    #[test]
    fn error_carries_position_for_caret() {
        let err = parse("ab+x", &ab()).unwrap_err();
        assert_eq!(err.position(), Position::new(3));
        assert_eq!(err.caret("ab+x"), "ab+x\n   ^");
    }
}
