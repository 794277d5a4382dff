//! # Word Enumeration
//!
//! [`Words`] is a lazy, pull-based iterator over the words an [`Expr`]
//! denotes. Each node kind keeps its own explicit state:
//!
//! - literal and empty word: one pending word,
//! - concatenation: one cursor per factor, advanced like an odometer. The
//!   leftmost factor is outermost; every word of a factor restarts the
//!   factor after it with a fresh cursor,
//! - union: the cursor of the current alternative and the alternatives not
//!   yet started,
//! - star: the empty word, then one level at a time. Level `k + 1` extends
//!   every word of level `k`, in order, with every word of a fresh inner
//!   enumeration.
//!
//! The order is fully determined: left before right, and level `k` before
//! level `k + 1`. Nothing is interleaved, so an infinite alternative of a
//! union hides the ones after it, and an infinite factor of a concatenation
//! pins the words of the factors before it (see [`Expr::starvations`]).
//!
//! Chains are walked with loops, never by recursion, so a concatenation of
//! thousands of symbols costs one stack frame.
//!
//! Enumerations may be infinite. Consumers take a bounded prefix; stopping
//! early needs no cleanup.

use crate::expr::Expr;
use std::iter::FusedIterator;
use std::mem;
use std::slice;

/// A generated word. The empty word is the empty string.
pub type Word = smartstring::alias::String;

/// Lazy enumeration of the words of an [`Expr`].
///
/// Created by [`Expr::words`]. Every call starts from the beginning; the
/// tree itself is only borrowed.
#[derive(Debug)]
pub struct Words<'a> {
    state: State<'a>,
}

#[derive(Debug)]
enum State<'a> {
    Single(Option<Word>),
    Concat(Box<ConcatState<'a>>),
    Union(Box<UnionState<'a>>),
    Star(Box<StarState<'a>>),
}

/// Odometer over the factors of a concatenation.
///
/// `cursors[i]` enumerates `factors[i]`; `ends[i]` is the length of `word`
/// made of the current words of `factors[..i]`.
#[derive(Debug)]
struct ConcatState<'a> {
    factors: &'a [Expr],
    cursors: Vec<Words<'a>>,
    ends: Vec<usize>,
    word: Word,
}

#[derive(Debug)]
struct UnionState<'a> {
    pending: slice::Iter<'a, Expr>,
    current: Option<Words<'a>>,
}

#[derive(Debug)]
struct StarState<'a> {
    inner: &'a Expr,
    started: bool,
    level: usize,
    frontier: Vec<Word>,
    next_frontier: Vec<Word>,
    index: usize,
    cursor: Option<Words<'a>>,
}

impl<'a> Words<'a> {
    pub fn new(expr: &'a Expr) -> Self {
        let state = match expr {
            Expr::Literal(c) => {
                let mut word = Word::new();
                word.push(*c);
                State::Single(Some(word))
            }
            Expr::Empty => State::Single(Some(Word::new())),
            Expr::Concat(factors) => match factors.first() {
                None => State::Single(Some(Word::new())),
                Some(first) => State::Concat(Box::new(ConcatState {
                    factors,
                    cursors: vec![first.words()],
                    ends: vec![0],
                    word: Word::new(),
                })),
            },
            Expr::Union(alternatives) => State::Union(Box::new(UnionState {
                pending: alternatives.iter(),
                current: None,
            })),
            Expr::Star(inner) => State::Star(Box::new(StarState {
                inner: &**inner,
                started: false,
                level: 0,
                frontier: vec![Word::new()],
                next_frontier: Vec::new(),
                index: 0,
                cursor: None,
            })),
        };
        Self { state }
    }
}

impl ConcatState<'_> {
    fn next_word(&mut self) -> Option<Word> {
        loop {
            // once the first cursor is exhausted the stack stays empty
            let depth = self.cursors.len();
            let cursor = self.cursors.last_mut()?;
            match cursor.next() {
                Some(part) => {
                    self.word.truncate(self.ends[depth - 1]);
                    self.word.push_str(&part);
                    if depth == self.factors.len() {
                        return Some(self.word.clone());
                    }
                    self.ends.push(self.word.len());
                    self.cursors.push(self.factors[depth].words());
                }
                None => {
                    self.cursors.pop();
                    self.ends.pop();
                }
            }
        }
    }
}

impl UnionState<'_> {
    fn next_word(&mut self) -> Option<Word> {
        loop {
            if let Some(word) = self.current.as_mut().and_then(|cursor| cursor.next()) {
                return Some(word);
            }
            self.current = Some(self.pending.next()?.words());
        }
    }
}

impl StarState<'_> {
    fn next_word(&mut self) -> Option<Word> {
        if !self.started {
            self.started = true;
            return Some(Word::new());
        }
        loop {
            if let Some(cursor) = &mut self.cursor {
                if let Some(suffix) = cursor.next() {
                    let mut word = self.frontier[self.index].clone();
                    word.push_str(&suffix);
                    self.next_frontier.push(word.clone());
                    return Some(word);
                }
                self.cursor = None;
                self.index += 1;
            }
            if self.index >= self.frontier.len() {
                if self.next_frontier.is_empty() {
                    return None;
                }
                self.frontier = mem::take(&mut self.next_frontier);
                self.index = 0;
                self.level += 1;
                log::trace!(
                    "star {}: level {} with {} prefixes",
                    self.inner,
                    self.level,
                    self.frontier.len()
                );
            }
            self.cursor = Some(self.inner.words());
        }
    }
}

impl Iterator for Words<'_> {
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        match &mut self.state {
            State::Single(word) => word.take(),
            State::Concat(state) => state.next_word(),
            State::Union(state) => state.next_word(),
            State::Star(state) => state.next_word(),
        }
    }
}

impl FusedIterator for Words<'_> {}
