// ladder-words: List words formable from subsets of a letter set.
//
// Reads letter strings from stdin (one per line) and prints every
// dictionary word formable from any subset of the letters. Inputs longer
// than eight letters are rejected by the engine and print "-".
//
// Usage:
//   ladder-words [-w WORD_LIST] [--length N]

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (word_list, args) = laddergram_cli::parse_word_list_path(&args);
    let (length, args) = laddergram_cli::parse_numeric_flag(&args, "--length");

    if laddergram_cli::wants_help(&args) {
        println!("ladder-words: List words formable from subsets of a letter set.");
        println!();
        println!("Usage: ladder-words [-w WORD_LIST] [--length N]");
        println!();
        println!("Reads letter strings from stdin (one per line, at most eight");
        println!("letters). For each, prints the formable words or '-'.");
        println!();
        println!("Options:");
        println!("  -w, --word-list PATH   Newline-delimited word list file");
        println!("  --length N             Only report words of exactly N letters");
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
        let letters = line.trim();
        if letters.is_empty() {
            continue;
        }
        let words = dictionary.find_valid_words(letters, length);
        let listing = if words.is_empty() {
            "-".to_string()
        } else {
            words.join(" ")
        };
        if writeln!(out, "{}: {listing}", letters.to_uppercase()).is_err() {
            return;
        }
    }
}
