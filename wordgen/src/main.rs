//! Command-line interface for wordgen.
//!
//! This binary wraps [`enumerate`] and [`ExprParser`]:
//!
//! - `generate` prints the first words of an expression, one per line,
//! - `parse` prints the parsed tree and any enumeration starvation,
//! - `repl` runs the interactive prompt loop on stdin/stdout.
//!
//! Set `RUST_LOG=debug` (or `trace`) to see parser and enumerator logs.

use anyhow::{Context, Result, bail};
use clap::{Parser as ClapParser, Subcommand};
use std::io::{self, BufWriter, Write};
use wordgen::{Alphabet, ExprParser, Repl, Request, enumerate, parse_count, render, report};

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Prints the first words generated by an expression
    Generate {
        /// Alphabet symbols; typed order is the sort priority
        #[arg(short, long)]
        alphabet: String,
        /// Expression over the alphabet
        #[arg(short, long)]
        expr: String,
        /// Number of words to take
        #[arg(short = 'n', long, allow_hyphen_values = true)]
        count: String,
        /// Drop repeated words
        #[arg(short, long)]
        distinct: bool,
        /// Keep enumeration order instead of sorting
        #[arg(short, long)]
        unsorted: bool,
    },
    /// Parses an expression and prints its tree
    Parse {
        /// Alphabet symbols
        #[arg(short, long)]
        alphabet: String,
        /// Expression over the alphabet
        #[arg(short, long)]
        expr: String,
    },
    /// Reads alphabet, expression and count interactively
    Repl {},
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Generate {
            alphabet,
            expr,
            count,
            distinct,
            unsorted,
        } => {
            let alphabet = Alphabet::new(&alphabet)?;
            warn_reserved(&alphabet);
            let count = parse_count(&count)?;
            let request = Request::new(alphabet, expr, count)
                .with_distinct(distinct)
                .with_sorted(!unsorted);
            let words = match enumerate(&request) {
                Ok(words) => words,
                Err(e) => bail!(report(&e, &request.expression)),
            };
            let mut out = BufWriter::new(io::stdout().lock());
            for word in &words {
                writeln!(out, "{}", render(word))?;
            }
            out.flush()?;
        }
        Commands::Parse { alphabet, expr } => {
            let alphabet = Alphabet::new(&alphabet)?;
            warn_reserved(&alphabet);
            let tree = match ExprParser::new(&alphabet).parse(&expr) {
                Ok(tree) => tree,
                Err(e) => bail!("syntax error: {e}\n{}", e.caret(&expr)),
            };
            println!("{tree}");
            println!("{tree:#?}");
            for starvation in tree.starvations() {
                println!("starvation: {starvation}");
            }
        }
        Commands::Repl {} => {
            let stdin = io::stdin();
            let mut repl = Repl::new(stdin.lock(), io::stdout().lock());
            repl.run().context("interactive session failed")?;
        }
    }

    Ok(())
}

fn warn_reserved(alphabet: &Alphabet) {
    let reserved = alphabet.reserved();
    if !reserved.is_empty() {
        eprintln!(
            "warning: alphabet contains operator symbols {:?}",
            reserved.into_iter().collect::<String>()
        );
    }
}
