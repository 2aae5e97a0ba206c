// laddergram-cli: shared utilities for the ladder CLI tools.

use std::path::PathBuf;
use std::process;

use laddergram_engine::{Dictionary, EngineError};

/// Word list file name looked for in the home config directory.
const HOME_WORD_LIST: &str = "words.txt";

/// System word list shipped by most Unix installs.
const SYSTEM_WORD_LIST: &str = "/usr/share/dict/words";

/// Search for a word list and load the dictionary.
///
/// Search order:
/// 1. `word_list` argument (if provided)
/// 2. `LADDERGRAM_WORD_LIST` environment variable
/// 3. `~/.laddergram/words.txt`
/// 4. `/usr/share/dict/words`
/// 5. `./words.txt` (fallback for local development)
pub fn load_dictionary(word_list: Option<&str>) -> Result<Dictionary, String> {
    let search_paths = build_search_paths(word_list);

    for path in &search_paths {
        if path.is_file() {
            return Dictionary::load_from_path(path)
                .map_err(|e: EngineError| format!("failed to load word list: {e}"));
        }
    }

    Err(format!(
        "could not find a word list in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of word-list locations to try.
fn build_search_paths(word_list: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = word_list {
        paths.push(PathBuf::from(p));
    }

    // 2. LADDERGRAM_WORD_LIST environment variable
    if let Ok(env_path) = std::env::var("LADDERGRAM_WORD_LIST") {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".laddergram").join(HOME_WORD_LIST));
    }

    // 4. System dictionary
    paths.push(PathBuf::from(SYSTEM_WORD_LIST));

    // 5. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(HOME_WORD_LIST));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--word-list=PATH` or `-w PATH` argument from command line args.
///
/// Returns `(word_list_path, remaining_args)`.
pub fn parse_word_list_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut word_list = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--word-list=") {
            word_list = Some(val.to_string());
        } else if arg == "--word-list" || arg == "-w" {
            if i + 1 < args.len() {
                word_list = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (word_list, remaining)
}

/// Parse a `--flag=N` or `--flag N` numeric option out of the args.
///
/// Returns `(value, remaining_args)`; exits on an unparsable value.
pub fn parse_numeric_flag(args: &[String], flag: &str) -> (Option<usize>, Vec<String>) {
    let prefix = format!("{flag}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        let raw = if let Some(val) = arg.strip_prefix(&prefix) {
            Some(val.to_string())
        } else if arg == flag {
            if i + 1 < args.len() {
                skip_next = true;
                Some(args[i + 1].clone())
            } else {
                eprintln!("error: {flag} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
            None
        };
        if let Some(raw) = raw {
            match raw.parse() {
                Ok(parsed) => value = Some(parsed),
                Err(_) => {
                    eprintln!("error: {flag} requires a number, got {raw:?}");
                    process::exit(1);
                }
            }
        }
    }

    (value, remaining)
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
