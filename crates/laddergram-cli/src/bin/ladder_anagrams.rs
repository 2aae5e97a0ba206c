// ladder-anagrams: List full-anagram words for letter sets from stdin.
//
// Reads letter strings from stdin (one per line) and prints every
// dictionary word that rearranges all of the letters, or "-" if none.
//
// Usage:
//   ladder-anagrams [-w WORD_LIST]

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (word_list, args) = laddergram_cli::parse_word_list_path(&args);

    if laddergram_cli::wants_help(&args) {
        println!("ladder-anagrams: List full-anagram words for letter sets from stdin.");
        println!();
        println!("Usage: ladder-anagrams [-w WORD_LIST]");
        println!();
        println!("Reads letter strings from stdin (one per line). For each,");
        println!("prints the letters followed by every word using all of them,");
        println!("or '-' when there are none.");
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
        let letters = line.trim();
        if letters.is_empty() {
            continue;
        }
        let anagrams = dictionary.find_anagrams(letters);
        let listing = if anagrams.is_empty() {
            "-".to_string()
        } else {
            anagrams.join(" ")
        };
        if writeln!(out, "{}: {listing}", letters.to_uppercase()).is_err() {
            return;
        }
    }
}
