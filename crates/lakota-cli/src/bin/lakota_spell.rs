// lakota-spell: Check spelling of words from stdin.
//
// Reads words from stdin (one per line) and reports whether each word
// is correctly spelled:
//   C: word    (correct)
//   W: word    (wrong / misspelled)
//
// With --text, each input line is running text: every word is checked in
// front of the word that follows it, and only misspelled words are
// reported.
//
// Usage:
//   lakota-spell [-d DICT_PATH] [OPTIONS]
//
// Options:
//   -d, --dict-path PATH   Lexicon file, or directory holding lexicon.txt
//   -s, --suggest           Also print suggestions for misspelled words
//   -t, --text              Treat input lines as running text
//   -v, -q                  More or less logging on stderr
//   -h, --help              Print help

use std::io::{self, BufRead, Write};

use lakota_speller::SuggestionResult;

fn write_suggestions(out: &mut impl Write, result: &SuggestionResult) {
    for suggestion in result.suggestions() {
        let _ = writeln!(out, "S: {suggestion}");
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = lakota_cli::setup(&args);

    if lakota_cli::wants_help(&args) {
        println!("lakota-spell: Check spelling of words from stdin.");
        println!();
        println!("Usage: lakota-spell [-d DICT_PATH] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (correct)");
        println!("  W: word    (misspelled)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Lexicon file, or directory holding lexicon.txt");
        println!("  -s, --suggest           Also print suggestions for misspelled words");
        println!("  -t, --text              Treat input lines as running text");
        println!("  -v, -q                  More or less logging on stderr");
        println!("  -h, --help              Print this help");
        return;
    }

    let show_suggestions = args.iter().any(|a| a == "-s" || a == "--suggest");
    let text_mode = args.iter().any(|a| a == "-t" || a == "--text");

    let handle =
        lakota_cli::load_handle(dict_path.as_deref()).unwrap_or_else(|e| lakota_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };

        if text_mode {
            for misspelling in handle.check_text(&line) {
                let _ = writeln!(out, "W: {}", misspelling.word);
                if show_suggestions {
                    write_suggestions(&mut out, &misspelling.result);
                }
            }
            continue;
        }

        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        let result = handle.suggest(word, None);
        if result.is_correct() {
            let _ = writeln!(out, "C: {word}");
        } else {
            let _ = writeln!(out, "W: {word}");
            if show_suggestions {
                write_suggestions(&mut out, &result);
            }
        }
    }
}
