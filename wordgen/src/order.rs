//! Lexicographic order over words, driven by alphabet priority.

use crate::alphabet::Alphabet;
use std::cmp::Ordering;

/// Compares words symbol by symbol using each symbol's rank in an
/// [`Alphabet`].
///
/// - the empty word precedes every other word,
/// - the first differing symbol decides, lower rank first,
/// - if one word is a prefix of the other, the shorter one is first.
///
/// Symbols outside the alphabet cannot come out of a parsed expression. They
/// still get a place so the order stays total: after every alphabet symbol,
/// and among themselves by code point.
///
/// ```rust
/// # use wordgen::{Alphabet, LexOrder};
/// let alphabet = Alphabet::new("ba").unwrap();
/// let mut words = vec!["a", "b", ""];
/// LexOrder::new(&alphabet).sort(&mut words);
/// assert_eq!(words, ["", "b", "a"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LexOrder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> LexOrder<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    fn key(&self, c: char) -> (usize, char) {
        match self.alphabet.rank(c) {
            Some(rank) => (rank, '\0'),
            None => (usize::MAX, c),
        }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        a.chars()
            .map(|c| self.key(c))
            .cmp(b.chars().map(|c| self.key(c)))
    }

    /// Stable sort of `words` by [`compare`](Self::compare).
    pub fn sort<W: AsRef<str>>(&self, words: &mut [W]) {
        words.sort_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(words: &[&str], alphabet: &str) -> Vec<String> {
        let alphabet = Alphabet::new(alphabet).unwrap();
        let mut words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        LexOrder::new(&alphabet).sort(&mut words);
        words
    }

    #[test]
    fn typed_order_defines_priority() {
        assert_eq!(order(&["a", "b", ""], "ba"), ["", "b", "a"]);
        assert_eq!(order(&["a", "b", ""], "ab"), ["", "a", "b"]);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(order(&["aab", "a", "aa"], "ab"), ["a", "aa", "aab"]);
    }

    #[test]
    fn first_difference_decides_not_length() {
        assert_eq!(order(&["b", "aaaa"], "ab"), ["aaaa", "b"]);
        assert_eq!(order(&["ab", "bb", "ba", "aa"], "ba"), ["bb", "ba", "ab", "aa"]);
    }

    #[test]
    fn empty_word_precedes_everything() {
        let alphabet = Alphabet::new("ab").unwrap();
        let ord = LexOrder::new(&alphabet);
        assert_eq!(ord.compare("", "a"), Ordering::Less);
        assert_eq!(ord.compare("b", ""), Ordering::Greater);
        assert_eq!(ord.compare("", ""), Ordering::Equal);
    }

    #[test]
    fn unknown_symbols_rank_last_by_code_point() {
        assert_eq!(order(&["z", "y", "b", "a"], "ba"), ["b", "a", "y", "z"]);
    }

    /// A word tagged with where it was generated.
    #[derive(Debug, PartialEq)]
    struct Tagged(&'static str, usize);

    impl AsRef<str> for Tagged {
        fn as_ref(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn sort_is_stable_for_equal_words() {
        let alphabet = Alphabet::new("ba").unwrap();
        let mut words = vec![
            Tagged("a", 0),
            Tagged("", 1),
            Tagged("b", 2),
            Tagged("a", 3),
            Tagged("", 4),
            Tagged("b", 5),
        ];
        LexOrder::new(&alphabet).sort(&mut words);
        assert_eq!(
            words,
            [
                Tagged("", 1),
                Tagged("", 4),
                Tagged("b", 2),
                Tagged("b", 5),
                Tagged("a", 0),
                Tagged("a", 3),
            ]
        );
    }
}
