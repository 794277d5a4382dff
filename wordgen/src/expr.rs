//! # Expression Tree
//!
//! This module defines [`Expr`], the closed set of expression nodes produced
//! by the [`parser`](crate::parser) and consumed by the
//! [`words`](crate::words) enumerator:
//!
//! - [`Expr::Literal`]: one alphabet symbol,
//! - [`Expr::Empty`]: the empty word `@`,
//! - [`Expr::Concat`]: a chain of factors, each re-enumerated for every word
//!   of the factors before it,
//! - [`Expr::Union`]: a chain of alternatives, each started once the previous
//!   one is exhausted,
//! - [`Expr::Star`]: Kleene closure, enumerated level by level.
//!
//! Concatenation and union are associative in both language and enumeration
//! order, so a chain such as `abc` or `a+b+c` is stored as one node holding
//! all operands instead of a left- or right-leaning spine of binary nodes.
//! The tree is therefore only as deep as its groups and stars, and the parser
//! bounds that depth (see [`MAX_DEPTH`](crate::parser::MAX_DEPTH)).
//!
//! Each child is exclusively owned by its parent and nodes are never mutated
//! after construction, so one tree can back any number of independent
//! enumerations.
//!
//! The module also provides a small static analysis ([`Expr::starvations`])
//! that points out where the left-biased enumeration order will never reach
//! part of the language.

use crate::words::Words;
use std::fmt;

/// A node of the expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A single alphabet symbol.
    Literal(char),
    /// The empty word, written `@`.
    Empty,
    /// Concatenation of two or more factors, leftmost outermost: the last
    /// factor is re-enumerated for every word of the ones before it.
    Concat(Vec<Expr>),
    /// Union of two or more alternatives, in order: each alternative starts
    /// once the previous one is exhausted.
    Union(Vec<Expr>),
    /// Kleene closure of the inner expression.
    Star(Box<Expr>),
}

impl Expr {
    pub fn literal(c: char) -> Self {
        Expr::Literal(c)
    }

    pub fn empty() -> Self {
        Expr::Empty
    }

    /// Concatenation of `left` and `right`. Operands that are themselves
    /// concatenations are spliced into the new chain.
    pub fn concat(left: Expr, right: Expr) -> Self {
        Self::concat_all(vec![left, right])
    }

    /// Union of `left` and `right`. Operands that are themselves unions are
    /// spliced into the new chain.
    pub fn union(left: Expr, right: Expr) -> Self {
        Self::union_all(vec![left, right])
    }

    pub fn star(inner: Expr) -> Self {
        Expr::Star(Box::new(inner))
    }

    /// Concatenation of `factors`, in order. A single factor is returned as
    /// is; no factors denote the empty word alone.
    pub fn concat_all(factors: Vec<Expr>) -> Self {
        let mut chain = Vec::with_capacity(factors.len());
        for factor in factors {
            match factor {
                Expr::Concat(inner) => chain.extend(inner),
                other => chain.push(other),
            }
        }
        match <[Expr; 1]>::try_from(chain) {
            Ok([single]) => single,
            Err(chain) => Expr::Concat(chain),
        }
    }

    /// Union of `alternatives`, in order. A single alternative is returned
    /// as is; no alternatives denote the empty language.
    pub fn union_all(alternatives: Vec<Expr>) -> Self {
        let mut chain = Vec::with_capacity(alternatives.len());
        for alternative in alternatives {
            match alternative {
                Expr::Union(inner) => chain.extend(inner),
                other => chain.push(other),
            }
        }
        match <[Expr; 1]>::try_from(chain) {
            Ok([single]) => single,
            Err(chain) => Expr::Union(chain),
        }
    }

    /// Starts a fresh enumeration of the words this node denotes.
    ///
    /// ```rust
    /// # use wordgen::Expr;
    /// let e = Expr::star(Expr::literal('a'));
    /// let words: Vec<String> = e.words().take(3).map(|w| w.to_string()).collect();
    /// assert_eq!(words, ["", "a", "aa"]);
    /// ```
    pub fn words(&self) -> Words<'_> {
        Words::new(self)
    }

    /// Returns `true` if the enumeration of this node ends, that is, if no
    /// [`Expr::Star`] occurs in it.
    pub fn is_finite(&self) -> bool {
        match self {
            Expr::Literal(_) | Expr::Empty => true,
            Expr::Concat(parts) | Expr::Union(parts) => parts.iter().all(Expr::is_finite),
            Expr::Star(_) => false,
        }
    }

    /// Number of words the enumeration yields, duplicates included.
    ///
    /// `None` if the enumeration never ends (any [`Expr::Star`], even `@*`)
    /// or if the count does not fit in a `usize`; use [`Expr::is_finite`]
    /// to tell the two apart.
    pub fn enumeration_len(&self) -> Option<usize> {
        match self {
            Expr::Literal(_) | Expr::Empty => Some(1),
            Expr::Concat(factors) => factors
                .iter()
                .try_fold(1usize, |n, f| n.checked_mul(f.enumeration_len()?)),
            Expr::Union(alternatives) => alternatives
                .iter()
                .try_fold(0usize, |n, a| n.checked_add(a.enumeration_len()?)),
            Expr::Star(_) => None,
        }
    }

    /// Lists the nodes where enumeration order starves part of the language.
    ///
    /// The findings are diagnostics only; enumeration still follows the
    /// left-first, level-by-level order.
    ///
    /// ```rust
    /// # use wordgen::{Alphabet, StarvationKind, parse};
    /// let alphabet = Alphabet::new("ab").unwrap();
    /// let e = parse("a*+b", &alphabet).unwrap();
    /// let found = e.starvations();
    /// assert_eq!(found.len(), 1);
    /// assert_eq!(found[0].kind, StarvationKind::UnionRightUnreachable);
    /// ```
    pub fn starvations(&self) -> Vec<Starvation<'_>> {
        let mut out = Vec::new();
        self.collect_starvations(&mut out);
        out
    }

    fn collect_starvations<'a>(&'a self, out: &mut Vec<Starvation<'a>>) {
        let kind = match self {
            Expr::Literal(_) | Expr::Empty => None,
            Expr::Concat(factors) => {
                // an infinite factor pins every factor before it to its first
                // word; harmless only if they have a single word anyway
                let stalled = factors
                    .iter()
                    .rposition(|f| !f.is_finite())
                    .is_some_and(|i| factors[..i].iter().any(|f| f.enumeration_len() != Some(1)));
                stalled.then_some(StarvationKind::ConcatLeftStalled)
            }
            Expr::Union(alternatives) => {
                let hidden = alternatives
                    .split_last()
                    .is_some_and(|(_, init)| init.iter().any(|a| !a.is_finite()));
                hidden.then_some(StarvationKind::UnionRightUnreachable)
            }
            Expr::Star(inner) => {
                (!inner.is_finite()).then_some(StarvationKind::StarLevelUnbounded)
            }
        };
        if let Some(kind) = kind {
            out.push(Starvation { kind, expr: self });
        }
        match self {
            Expr::Literal(_) | Expr::Empty => {}
            Expr::Concat(parts) | Expr::Union(parts) => {
                for part in parts {
                    part.collect_starvations(out);
                }
            }
            Expr::Star(inner) => inner.collect_starvations(out),
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::Union(..) => 0,
            Expr::Concat(..) => 1,
            Expr::Star(_) => 2,
            Expr::Literal(_) | Expr::Empty => 3,
        }
    }

    fn fmt_at(&self, f: &mut fmt::Formatter<'_>, min: u8) -> fmt::Result {
        if self.precedence() < min {
            write!(f, "(")?;
            self.fmt_at(f, 0)?;
            return write!(f, ")");
        }
        match self {
            Expr::Literal(c) => write!(f, "{c}"),
            Expr::Empty => write!(f, "@"),
            Expr::Concat(factors) if factors.is_empty() => write!(f, "@"),
            Expr::Concat(factors) => {
                for factor in factors {
                    factor.fmt_at(f, 2)?;
                }
                Ok(())
            }
            Expr::Union(alternatives) => {
                for (i, alternative) in alternatives.iter().enumerate() {
                    if i > 0 {
                        write!(f, "+")?;
                    }
                    alternative.fmt_at(f, 1)?;
                }
                Ok(())
            }
            Expr::Star(inner) => {
                inner.fmt_at(f, 2)?;
                write!(f, "*")
            }
        }
    }
}

/// Renders the expression in the grammar's own syntax with minimal
/// parentheses, so that parsing the output yields an equal tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_at(f, 0)
    }
}

/// What part of the language an enumeration never reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarvationKind {
    /// An alternative before the last is infinite; the alternatives after it
    /// never appear.
    UnionRightUnreachable,
    /// A factor is infinite; the factors before it only ever contribute
    /// their first word.
    ConcatLeftStalled,
    /// Inner of a star is infinite; no word needs more than one repetition.
    StarLevelUnbounded,
}

/// A node flagged by [`Expr::starvations`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Starvation<'a> {
    pub kind: StarvationKind,
    pub expr: &'a Expr,
}

impl fmt::Display for Starvation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let why = match self.kind {
            StarvationKind::UnionRightUnreachable => {
                "left operand is infinite, right operand is never reached"
            }
            StarvationKind::ConcatLeftStalled => {
                "right operand is infinite, only the first left word is used"
            }
            StarvationKind::StarLevelUnbounded => {
                "repeated expression is infinite, only one repetition is produced"
            }
        };
        write!(f, "{}: {why}", self.expr)
    }
}
