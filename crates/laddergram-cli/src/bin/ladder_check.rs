// ladder-check: Check dictionary membership of words from stdin.
//
// Reads words from stdin (one per line) and reports whether each word is in
// the ladder dictionary:
//   C: word    (contained)
//   W: word    (not contained)
//
// Usage:
//   ladder-check [-w WORD_LIST]
//
// Options:
//   -w, --word-list PATH   Newline-delimited word list file
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (word_list, args) = laddergram_cli::parse_word_list_path(&args);

    if laddergram_cli::wants_help(&args) {
        println!("ladder-check: Check dictionary membership of words from stdin.");
        println!();
        println!("Usage: ladder-check [-w WORD_LIST]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (contained)");
        println!("  W: word    (not contained)");
        println!();
        println!("Options:");
        println!("  -w, --word-list PATH   Newline-delimited word list file");
        println!("  -h, --help             Print this help");
        return;
    }

    let dictionary = laddergram_cli::load_dictionary(word_list.as_deref())
        .unwrap_or_else(|e| laddergram_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => laddergram_cli::fatal(&format!("stdin: {e}")),
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        let marker = if dictionary.contains(word) { 'C' } else { 'W' };
        if writeln!(out, "{marker}: {}", word.to_uppercase()).is_err() {
            return;
        }
    }
}
