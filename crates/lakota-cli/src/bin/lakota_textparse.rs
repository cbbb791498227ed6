// lakota-textparse: Extract words from text.
//
// Reads a text file (or stdin) line by line, finds the words on each
// line and prints them case-folded, one per line. Words without vowels
// and words of MAX_WORD_BYTES or more are reported on stderr and
// skipped.
//
// Usage:
//   lakota-textparse [OPTIONS] [FILE]
//
// Options:
//   -u, --unique           Print each word once, sorted
//   -v, -q                 More or less logging on stderr
//   -h, --help             Print help

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufReader, Write};

use lakota_core::transform::{count_vowels, fold_case};
use lakota_speller::lexicon::{LexiconReader, LineReader};
use lakota_speller::tokenizer;
use log::warn;

/// Longest word, in bytes, that is still printed.
const MAX_WORD_BYTES: usize = 96;

/// Longest input line, in bytes.
const MAX_TEXT_LINE: usize = 32 * 1024;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (verbosity, args) = lakota_cli::parse_verbosity(&args);
    lakota_cli::init_logging(verbosity);

    if lakota_cli::wants_help(&args) {
        println!("lakota-textparse: Extract words from text.");
        println!();
        println!("Usage: lakota-textparse [OPTIONS] [FILE]");
        println!();
        println!("Reads FILE (or stdin) and prints every word, case-folded,");
        println!("one per line.");
        println!();
        println!("Options:");
        println!("  -u, --unique           Print each word once, sorted");
        println!("  -v, -q                 More or less logging on stderr");
        println!("  -h, --help             Print this help");
        return;
    }

    let unique = args.iter().any(|a| a == "-u" || a == "--unique");
    let file = args.iter().find(|a| !a.starts_with('-'));

    let mut reader: Box<dyn LineReader> = match file {
        Some(path) => {
            let file = File::open(path)
                .unwrap_or_else(|e| lakota_cli::fatal(&format!("failed to open {path}: {e}")));
            Box::new(LexiconReader::with_max_line_len(
                BufReader::new(file),
                MAX_TEXT_LINE,
            ))
        }
        None => Box::new(LexiconReader::with_max_line_len(
            io::stdin().lock(),
            MAX_TEXT_LINE,
        )),
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut seen = BTreeSet::new();

    loop {
        let line = match reader.read_line() {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => lakota_cli::fatal(&format!("failed to read input: {e}")),
        };

        for span in tokenizer::words(&line) {
            let Some(word) = span.slice(&line) else {
                continue;
            };
            if word.len() >= MAX_WORD_BYTES {
                warn!(
                    "line {}: word at {} too long ({} bytes), skipping",
                    reader.line_number(),
                    span.start,
                    word.len()
                );
                continue;
            }
            let folded = match fold_case(word) {
                Ok(folded) => folded,
                Err(e) => lakota_cli::fatal(&format!("failed to fold `{word}`: {e}")),
            };
            if count_vowels(&folded) == 0 {
                warn!("line {}: no vowels in `{word}`, skipping", reader.line_number());
                continue;
            }

            if unique {
                seen.insert(folded);
            } else {
                let _ = writeln!(out, "{folded}");
            }
        }
    }

    for word in &seen {
        let _ = writeln!(out, "{word}");
    }
    let _ = out.flush();
}
