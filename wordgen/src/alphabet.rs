//! # alphabet
//!
//! An ordered symbol set built on [`indexmap::IndexSet`].
//!
//! Each symbol's insertion index is its sort priority: the first symbol typed
//! sorts first. Re-inserting a symbol keeps its original index.
//!
//! ## Example
//! ```rust
//! # use wordgen::Alphabet;
//! let alphabet = Alphabet::new("bab").unwrap();
//! assert_eq!(alphabet.len(), 2);
//! assert_eq!(alphabet.rank('b'), Some(0));
//! assert_eq!(alphabet.rank('a'), Some(1));
//! assert_eq!(alphabet.rank('c'), None);
//! ```

use crate::error::InputError;
use indexmap::IndexSet;

/// Characters the expression grammar reserves as operators.
pub const RESERVED: [char; 5] = ['+', '*', '(', ')', '@'];

/// A non-empty, ordered set of distinct symbols.
///
/// The order defines both which characters are literals and how generated
/// words sort (see [`LexOrder`](crate::LexOrder)).
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: IndexSet<char>,
}

// `IndexSet` equality ignores order, but here order is the sort priority.
impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.symbols.iter().eq(other.symbols.iter())
    }
}

impl Eq for Alphabet {}

impl Alphabet {
    /// Builds an alphabet from the characters of `text`, in order.
    ///
    /// Duplicates collapse to their first occurrence.
    pub fn new(text: &str) -> Result<Self, InputError> {
        Self::from_symbols(text.chars())
    }

    /// Builds an alphabet from a sequence of symbols, in order.
    ///
    /// Returns [`InputError::EmptyAlphabet`] if the sequence is empty.
    pub fn from_symbols<I>(symbols: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = char>,
    {
        let mut set = IndexSet::new();
        for c in symbols {
            if !set.insert(c) {
                log::warn!("duplicate alphabet symbol {c:?} ignored");
            }
        }
        if set.is_empty() {
            return Err(InputError::EmptyAlphabet);
        }
        Ok(Self { symbols: set })
    }

    /// Returns `true` if `c` is a symbol of this alphabet.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    /// Sort priority of `c`: its 0-based index in the typed order.
    #[inline]
    pub fn rank(&self, c: char) -> Option<usize> {
        self.symbols.get_index_of(&c)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; an `Alphabet` cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in priority order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    /// Symbols that collide with grammar operators, in priority order.
    ///
    /// They are still accepted; the parser decides by position whether such a
    /// character is an operator or a literal.
    pub fn reserved(&self) -> Vec<char> {
        self.symbols().filter(|c| RESERVED.contains(c)).collect()
    }
}
