// lakota-cli: shared utilities for CLI tools.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

use env_logger::Builder;
use lakota_speller::handle::LakotaHandle;
use lakota_speller::lexicon::DICTIONARY_ENV;
use log::{LevelFilter, debug};

/// Lexicon file name looked up in each search directory.
pub const LEXICON_FILE: &str = "lexicon.txt";

/// Search for a lexicon file and create a LakotaHandle.
///
/// Search order:
/// 1. `dict_path` argument (a file, or a directory holding `lexicon.txt`)
/// 2. `LK_DICTIONARY` environment variable
/// 3. `~/.lakota/lexicon.txt`
/// 4. `/usr/share/lakota/lexicon.txt`
/// 5. `lexicon.txt` in the current working directory
pub fn load_handle(dict_path: Option<&str>) -> Result<LakotaHandle, String> {
    let search_paths = build_search_paths(dict_path);

    for path in &search_paths {
        if path.is_file() {
            debug!("loading lexicon from {}", path.display());
            return LakotaHandle::from_path(path)
                .map_err(|e| format!("failed to load {}: {e}", path.display()));
        }
    }

    Err(format!(
        "could not find a lexicon in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of candidate lexicon files.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(lexicon_in(Path::new(p)));
    }

    if let Ok(env_path) = std::env::var(DICTIONARY_ENV) {
        paths.push(lexicon_in(Path::new(&env_path)));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".lakota").join(LEXICON_FILE));
    }

    paths.push(PathBuf::from("/usr/share/lakota").join(LEXICON_FILE));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(LEXICON_FILE));
    }

    paths
}

/// `path` itself, or `path/lexicon.txt` when it names a directory.
fn lexicon_in(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(LEXICON_FILE)
    } else {
        path.to_path_buf()
    }
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            match args.get(i + 1) {
                Some(val) => {
                    dict_path = Some(val.clone());
                    skip_next = true;
                }
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Strip `-v`, `-vv`, `--verbose`, `-q` and `--quiet` from the args.
///
/// Returns `(verbosity, remaining_args)`: 0 is quiet, 1 the default, and
/// each `v` adds one.
pub fn parse_verbosity(args: &[String]) -> (u8, Vec<String>) {
    let mut verbosity: u8 = 1;
    let mut remaining = Vec::new();

    for arg in args {
        match arg.as_str() {
            "-q" | "--quiet" => verbosity = 0,
            "--verbose" => verbosity = verbosity.saturating_add(1),
            a if a.len() > 1 && a.starts_with('-') && a[1..].bytes().all(|b| b == b'v') => {
                let count = u8::try_from(a.len() - 1).unwrap_or(u8::MAX);
                verbosity = verbosity.saturating_add(count);
            }
            _ => remaining.push(arg.clone()),
        }
    }

    (verbosity, remaining)
}

/// Initialize logging to stderr. `RUST_LOG` overrides the level chosen by
/// `verbosity`.
pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

/// Common argument handling: logging flags and the dictionary path.
///
/// Returns `(dict_path, remaining_args)`.
pub fn setup(args: &[String]) -> (Option<String>, Vec<String>) {
    let (verbosity, args) = parse_verbosity(args);
    init_logging(verbosity);
    parse_dict_path(&args)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn dict_path_forms() {
        let (path, rest) = parse_dict_path(&args(&["-d", "/tmp/lex.txt", "-s"]));
        assert_eq!(path.as_deref(), Some("/tmp/lex.txt"));
        assert_eq!(rest, ["-s"]);

        let (path, rest) = parse_dict_path(&args(&["word", "--dict-path=/x"]));
        assert_eq!(path.as_deref(), Some("/x"));
        assert_eq!(rest, ["word"]);

        let (path, _) = parse_dict_path(&args(&["word"]));
        assert_eq!(path, None);
    }

    #[test]
    fn verbosity_flags() {
        assert_eq!(parse_verbosity(&args(&["a"])), (1, args(&["a"])));
        assert_eq!(parse_verbosity(&args(&["-q", "a"])).0, 0);
        assert_eq!(parse_verbosity(&args(&["-v"])).0, 2);
        assert_eq!(parse_verbosity(&args(&["-vv", "--verbose"])).0, 4);
        // A lone dash is an argument, not a flag.
        assert_eq!(parse_verbosity(&args(&["-"])), (1, args(&["-"])));
    }

    #[test]
    fn help_flag() {
        assert!(wants_help(&args(&["x", "--help"])));
        assert!(wants_help(&args(&["-h"])));
        assert!(!wants_help(&args(&["-s"])));
    }

    #[test]
    fn explicit_path_comes_first() {
        let paths = build_search_paths(Some("/nonexistent/lexicon.txt"));
        assert_eq!(paths[0], PathBuf::from("/nonexistent/lexicon.txt"));
        assert!(paths.contains(&PathBuf::from("/usr/share/lakota/lexicon.txt")));
    }

    #[test]
    fn directory_path_resolves_to_lexicon_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(LEXICON_FILE), "- ki\u{014B}\nS s\u{00E1}pA\n").unwrap();

        let dir_str = dir.path().to_str().unwrap();
        let paths = build_search_paths(Some(dir_str));
        assert_eq!(paths[0], dir.path().join(LEXICON_FILE));

        let handle = load_handle(Some(dir_str)).unwrap();
        assert_eq!(handle.word_count(), 5);
        assert!(handle.spell("ki\u{014B}"));
    }

    #[test]
    fn broken_lexicon_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.txt");
        std::fs::write(&path, "S:sab\n").unwrap();
        let err = load_handle(path.to_str()).unwrap_err();
        assert!(err.contains("broken.txt"), "{err}");
    }
}
