//! Copyright (c) 2005–2025 IKH Software, Inc.
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0
//! or (at your option) any later version (LGPL-3.0-or-later).
//!
//! # wordgen
//!
//! Parses regular expressions over a finite, ordered alphabet and enumerates
//! the words they generate.
//!
//! ```text
//! alphabet + text ──► ExprParser ──► Expr ──► Words (lazy) ──► take(n) ──► LexOrder ──► words
//! ```
//!
//! ## Grammar
//!
//! | syntax   | meaning                                  |
//! |----------|------------------------------------------|
//! | `x`      | an alphabet symbol                       |
//! | `@`      | the empty word                           |
//! | `EF`     | concatenation                            |
//! | `E+F`    | union (words of `E` first, then of `F`)  |
//! | `E*`     | Kleene closure, shortest repetitions first |
//! | `(E)`    | grouping                                 |
//!
//! ## Example
//!
//! ```rust
//! use wordgen::{Alphabet, parse, LexOrder};
//!
//! let alphabet = Alphabet::new("ba").unwrap();
//! let expr = parse("(a+b)*", &alphabet).unwrap();
//!
//! let mut words: Vec<_> = expr.words().take(7).collect();
//! LexOrder::new(&alphabet).sort(&mut words);
//!
//! let words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
//! assert_eq!(words, ["", "b", "bb", "ba", "a", "ab", "aa"]);
//! ```
//!
//! ## Modules
//!
//! - [`alphabet`]: ordered symbol set and sort priority
//! - [`cursor`]: character cursor and positions
//! - [`error`]: syntax and input errors
//! - [`expr`]: expression tree and enumeration analysis
//! - [`parser`]: recursive-descent parser
//! - [`words`]: lazy word enumeration
//! - [`order`]: lexicographic comparator
//! - [`session`]: request pipeline and interactive loop
pub mod alphabet;
pub mod cursor;
pub mod error;
pub mod expr;
pub mod order;
pub mod parser;
pub mod session;
pub mod words;

pub use alphabet::Alphabet;
pub use cursor::Position;
pub use error::{InputError, Result, SyntaxError, WordgenError};
pub use expr::{Expr, Starvation, StarvationKind};
pub use order::LexOrder;
pub use parser::{ExprParser, MAX_DEPTH, parse};
pub use session::{EMPTY_WORD, Repl, Request, enumerate, parse_count, render, report};
pub use words::{Word, Words};
