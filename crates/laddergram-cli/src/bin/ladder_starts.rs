// ladder-starts: List every viable three-letter starting signature.
//
// Builds the signature graph and prints each length-3 signature that can
// reach length 8, with its representative word, word count and advisory
// difficulty score.
//
// Usage:
//   ladder-starts [-w WORD_LIST]

use std::io::{self, Write};

use laddergram_engine::SignatureGraph;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (word_list, args) = laddergram_cli::parse_word_list_path(&args);

    if laddergram_cli::wants_help(&args) {
        println!("ladder-starts: List every viable three-letter starting signature.");
        println!();
        println!("Usage: ladder-starts [-w WORD_LIST]");
        println!();
        println!("Prints one line per viable start: the signature, its most");
        println!("recognizable word, the word count and the difficulty score.");
        println!();
        println!("Options:");
        println!("  -w, --word-list PATH   Newline-delimited word list file");
        println!("  -h, --help             Print this help");
        return;
    }

    let dictionary = laddergram_cli::load_dictionary(word_list.as_deref())
        .unwrap_or_else(|e| laddergram_cli::fatal(&e));
    let graph = SignatureGraph::build(&dictionary);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for start in graph.viable_starts() {
        let word = graph.representative_word(start).unwrap_or("-");
        if writeln!(
            out,
            "{}  {}  words {}  difficulty {:.2}",
            start,
            word,
            graph.word_count(start),
            graph.difficulty_score(start)
        )
        .is_err()
        {
            return;
        }
    }

    let _ = writeln!(
        out,
        "{} viable starts of {} length-3 signatures",
        graph.viable_starts().len(),
        graph.signature_count(3)
    );
}
