// lakota-suggest: Generate spelling suggestions for words.
//
// Prints suggestions for misspelled words. Correctly spelled words are
// printed as-is. Ablaut corrections follow a "-" entry.
//
// Usage:
//   lakota-suggest [-d DICT_PATH] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH    Lexicon file, or directory holding lexicon.txt
//   --next WORD             Word that follows, for ablaut checking
//                           ("" or "." for the end of a sentence)
//   -n, --max-suggestions N Maximum number of plain suggestions
//   --json                  Print one JSON object per word
//   -v, -q                  More or less logging on stderr
//   -h, --help              Print help

use std::io::{self, BufRead, Write};

use lakota_speller::SuggestionResult;
use lakota_speller::handle::LakotaHandle;
use serde_json::json;

fn print_plain(out: &mut impl Write, word: &str, result: &SuggestionResult) {
    match result {
        SuggestionResult::Correct => {
            let _ = writeln!(out, "{word} (correct)");
        }
        SuggestionResult::NotFound => {
            let _ = writeln!(out, "{word}: (no suggestions)");
        }
        SuggestionResult::Error(kind) => {
            let _ = writeln!(out, "{word}: error: {kind}");
        }
        SuggestionResult::Suggestions(list) => {
            let _ = writeln!(out, "{word}:");
            for s in list {
                let _ = writeln!(out, "  {s}");
            }
        }
    }
}

fn print_json(out: &mut impl Write, word: &str, next: Option<&str>, result: &SuggestionResult) {
    let status = match result {
        SuggestionResult::Correct => "correct",
        SuggestionResult::NotFound => "not_found",
        SuggestionResult::Error(_) => "error",
        SuggestionResult::Suggestions(_) => "suggestions",
    };
    let mut value = json!({
        "word": word,
        "next": next,
        "status": status,
        "code": result.code(),
        "suggestions": result.suggestions(),
    });
    if let SuggestionResult::Error(kind) = result {
        value["error"] = json!(kind.as_str());
    }
    let _ = writeln!(out, "{value}");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = lakota_cli::setup(&args);

    if lakota_cli::wants_help(&args) {
        println!("lakota-suggest: Generate spelling suggestions.");
        println!();
        println!("Usage: lakota-suggest [-d DICT_PATH] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, suggests for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH     Lexicon file, or directory holding lexicon.txt");
        println!("  --next WORD              Word that follows, for ablaut checking");
        println!("                           (\"\" or \".\" for the end of a sentence)");
        println!("  -n, --max-suggestions N  Maximum number of plain suggestions");
        println!("  --json                   Print one JSON object per word");
        println!("  -v, -q                   More or less logging on stderr");
        println!("  -h, --help               Print this help");
        return;
    }

    let mut max_suggestions: Option<usize> = None;
    let mut next: Option<String> = None;
    let mut as_json = false;
    let mut words: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "-n" || arg == "--max-suggestions" {
            let Some(value) = args.get(i + 1) else {
                lakota_cli::fatal("--max-suggestions requires a value");
            };
            max_suggestions = Some(
                value
                    .parse()
                    .unwrap_or_else(|_| lakota_cli::fatal("invalid number for --max-suggestions")),
            );
            skip_next = true;
        } else if arg == "--next" {
            let Some(value) = args.get(i + 1) else {
                lakota_cli::fatal("--next requires a value");
            };
            next = Some(value.clone());
            skip_next = true;
        } else if let Some(value) = arg.strip_prefix("--next=") {
            next = Some(value.to_string());
        } else if arg == "--json" {
            as_json = true;
        } else if !arg.starts_with('-') {
            words.push(arg.clone());
        }
    }

    let mut handle = lakota_cli::load_handle(dict_path.as_deref())
        .unwrap_or_else(|e| lakota_cli::fatal(&e));
    handle.set_max_suggestions(max_suggestions);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let next = next.as_deref();
    let suggest_word = |word: &str, handle: &LakotaHandle, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let result = handle.suggest(word, next);
        if as_json {
            print_json(out, word, next, &result);
        } else {
            print_plain(out, word, &result);
        }
    };

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            suggest_word(word, &handle, &mut out);
        }
    } else {
        for word in &words {
            suggest_word(word, &handle, &mut out);
        }
    }
}
