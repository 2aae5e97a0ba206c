// ladder-suggest: Score candidate next letters for letter sets from stdin.
//
// Reads letter strings from stdin (one per line) and prints each viable
// next letter with its viability score and the words it unlocks, best
// first. The target rung defaults to one more than the input length.
//
// Usage:
//   ladder-suggest [-w WORD_LIST] [--target N]

use std::io::{self, BufRead, Write};

use laddergram_engine::SuggestionEngine;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (word_list, args) = laddergram_cli::parse_word_list_path(&args);
    let (target, args) = laddergram_cli::parse_numeric_flag(&args, "--target");

    if laddergram_cli::wants_help(&args) {
        println!("ladder-suggest: Score candidate next letters for letter sets.");
        println!();
        println!("Usage: ladder-suggest [-w WORD_LIST] [--target N]");
        println!();
        println!("Reads letter strings from stdin (one per line). For each,");
        println!("prints every letter that yields at least one word, with its");
        println!("viability score and unlocked words, best first.");
        println!();
        println!("Options:");
        println!("  -w, --word-list PATH   Newline-delimited word list file");
        println!("  --target N             Target rung length (default: input length + 1)");
        println!("  -h, --help             Print this help");
        return;
    }

    let dictionary = laddergram_cli::load_dictionary(word_list.as_deref())
        .unwrap_or_else(|e| laddergram_cli::fatal(&e));
    let engine = SuggestionEngine::new(&dictionary);

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
        let target = target.unwrap_or(letters.chars().count() + 1);
        let suggestions = engine.generate_suggestions(letters, target);

        if writeln!(out, "{}:", letters.to_uppercase()).is_err() {
            return;
        }
        if suggestions.is_empty() {
            let _ = writeln!(out, "  (no viable letters)");
            continue;
        }
        for s in &suggestions {
            if writeln!(
                out,
                "  {} {:.3}  {}",
                s.letter,
                s.viability_score,
                s.valid_words.join(" ")
            )
            .is_err()
            {
                return;
            }
        }
    }
}
