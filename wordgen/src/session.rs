//! # Session Pipeline
//!
//! Ties the pieces together for one request:
//!
//! ```text
//! alphabet + expression ──► parse ──► Expr ──► words().take(count) ──► sort ──► Vec<Word>
//! ```
//!
//! [`enumerate`] either returns the full word list or an error, never both.
//! [`Repl`] wraps the pipeline in the interactive prompt loop used by the
//! `wordgen repl` command.

use crate::alphabet::Alphabet;
use crate::error::{InputError, Result, WordgenError};
use crate::order::LexOrder;
use crate::parser::parse;
use crate::words::Word;
use indexmap::IndexSet;
use std::io::{self, BufRead, Write};
use std::num::{IntErrorKind, NonZeroUsize, ParseIntError};

/// How the empty word is written in output.
pub const EMPTY_WORD: &str = "@";

/// One word-generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub alphabet: Alphabet,
    pub expression: String,
    /// Maximum number of words to pull from the enumeration.
    pub count: NonZeroUsize,
    /// Drop repeated words from the collected prefix.
    pub distinct: bool,
    /// Sort the collected words with [`LexOrder`]; otherwise keep
    /// enumeration order.
    pub sorted: bool,
}

impl Request {
    /// Creates a sorted, non-distinct request.
    pub fn new(alphabet: Alphabet, expression: impl Into<String>, count: NonZeroUsize) -> Self {
        Self {
            alphabet,
            expression: expression.into(),
            count,
            distinct: false,
            sorted: true,
        }
    }

    /// Validates raw user text and builds a request from it.
    ///
    /// ```rust
    /// # use wordgen::{InputError, Request, WordgenError};
    /// let request = Request::from_text("ab", "a*", "5").unwrap();
    /// assert_eq!(request.count.get(), 5);
    /// assert_eq!(
    ///     Request::from_text("", "a", "5"),
    ///     Err(WordgenError::Input(InputError::EmptyAlphabet))
    /// );
    /// ```
    pub fn from_text(alphabet: &str, expression: &str, count: &str) -> Result<Self> {
        let alphabet = Alphabet::new(alphabet)?;
        let count = parse_count(count)?;
        Ok(Self::new(alphabet, expression, count))
    }

    pub fn with_distinct(mut self, distinct: bool) -> Self {
        self.distinct = distinct;
        self
    }

    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }
}

/// Parses a word count typed by the user.
///
/// Surrounding whitespace is ignored.
pub fn parse_count(text: &str) -> Result<NonZeroUsize, InputError> {
    let text = text.trim();
    let n: i64 = text.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => InputError::CountTooLarge(text.to_string()),
        IntErrorKind::NegOverflow => InputError::NonPositiveCount(text.to_string()),
        _ => InputError::InvalidCount(text.to_string()),
    })?;
    if n <= 0 {
        return Err(InputError::NonPositiveCount(text.to_string()));
    }
    usize::try_from(n)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| InputError::CountTooLarge(text.to_string()))
}

/// Runs a request: parse, take at most `count` words, optionally de-duplicate,
/// optionally sort.
///
/// De-duplication only filters the words already taken, so a request always
/// terminates, and may return fewer than `count` words.
///
/// ```rust
/// # use wordgen::{Request, enumerate};
/// let request = Request::from_text("ab", "(a+b)b", "4").unwrap();
/// assert_eq!(enumerate(&request).unwrap(), ["ab", "bb"]);
/// ```
pub fn enumerate(request: &Request) -> Result<Vec<Word>> {
    let expr = parse(&request.expression, &request.alphabet)?;
    for starvation in expr.starvations() {
        log::warn!("{starvation}");
    }

    let mut words: Vec<Word> = expr.words().take(request.count.get()).collect();
    log::debug!(
        "collected {} of {} requested words from {expr}",
        words.len(),
        request.count
    );

    if request.distinct {
        let unique: IndexSet<Word> = words.into_iter().collect();
        words = unique.into_iter().collect();
    }
    if request.sorted {
        LexOrder::new(&request.alphabet).sort(&mut words);
    }
    Ok(words)
}

/// Output form of a word: the empty word is shown as [`EMPTY_WORD`].
pub fn render(word: &str) -> &str {
    if word.is_empty() { EMPTY_WORD } else { word }
}

/// Human-readable report of a failed request.
///
/// Syntax errors include the expression with a caret under the offending
/// position.
pub fn report(err: &WordgenError, expression: &str) -> String {
    match err {
        WordgenError::Syntax(e) => format!("{err}\n{}", e.caret(expression)),
        WordgenError::Input(_) => err.to_string(),
    }
}

/// Interactive prompt loop.
///
/// Each round reads an alphabet, an expression and a word count, then prints
/// the words one per line. Any failure prints an `error:` line and starts a
/// new round. An empty alphabet line, `quit`, `exit` or end of input ends the
/// loop.
pub struct Repl<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let Some(alphabet) = self.prompt("alphabet> ")? else {
                break;
            };
            if alphabet.is_empty() || alphabet == "quit" || alphabet == "exit" {
                break;
            }
            let alphabet = match Alphabet::new(&alphabet) {
                Ok(alphabet) => alphabet,
                Err(e) => {
                    writeln!(self.output, "error: {e}")?;
                    continue;
                }
            };
            let reserved = alphabet.reserved();
            if !reserved.is_empty() {
                let list: String = reserved.into_iter().collect();
                writeln!(
                    self.output,
                    "warning: alphabet contains operator symbols {list:?}; they act as operators outside factor positions"
                )?;
            }

            let Some(expression) = self.prompt("expression> ")? else {
                break;
            };
            let Some(count) = self.prompt("count> ")? else {
                break;
            };
            let count = match parse_count(&count) {
                Ok(count) => count,
                Err(e) => {
                    writeln!(self.output, "error: {e}")?;
                    continue;
                }
            };

            let request = Request::new(alphabet, expression, count);
            match enumerate(&request) {
                Ok(words) => {
                    for word in &words {
                        writeln!(self.output, "{}", render(word))?;
                    }
                }
                Err(e) => writeln!(self.output, "error: {}", report(&e, &request.expression))?,
            }
        }
        Ok(())
    }

    /// Writes `label` and reads one line; `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
