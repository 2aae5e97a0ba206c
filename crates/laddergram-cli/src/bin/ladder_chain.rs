// ladder-chain: Build a complete 3-to-8 ladder from a starting word.
//
// Takes the starting word as an argument and prints the assembled chain,
// one rung per line. With --json the chain is emitted in the persistence
// schema instead. The default builder is the greedy scorer; --via-graph
// switches to the graph-backed builder, which only fails when no full
// ladder exists at all.
//
// Usage:
//   ladder-chain [-w WORD_LIST] [--json] [--via-graph] START_WORD

use laddergram_core::chain::{AnagramChain, Difficulty};
use laddergram_engine::{SignatureGraph, SuggestionEngine};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (word_list, args) = laddergram_cli::parse_word_list_path(&args);

    if laddergram_cli::wants_help(&args) {
        println!("ladder-chain: Build a complete 3-to-8 ladder from a starting word.");
        println!();
        println!("Usage: ladder-chain [-w WORD_LIST] [--json] [--via-graph] START_WORD");
        println!();
        println!("Options:");
        println!("  -w, --word-list PATH   Newline-delimited word list file");
        println!("  --json                 Emit the chain persistence record as JSON");
        println!("  --via-graph            Use the graph-backed builder (provably");
        println!("                         completable, ignores viability scores)");
        println!("  -h, --help             Print this help");
        return;
    }

    let as_json = args.iter().any(|a| a == "--json");
    let via_graph = args.iter().any(|a| a == "--via-graph");
    let start_word = match args.iter().find(|a| !a.starts_with('-')) {
        Some(word) => word.clone(),
        None => laddergram_cli::fatal("a three-letter START_WORD argument is required"),
    };

    let dictionary = laddergram_cli::load_dictionary(word_list.as_deref())
        .unwrap_or_else(|e| laddergram_cli::fatal(&e));
    let engine = SuggestionEngine::new(&dictionary);

    let levels = if via_graph {
        let graph = SignatureGraph::build(&dictionary);
        engine.generate_chain_via_graph(&start_word, &graph)
    } else {
        engine.generate_complete_chain(&start_word)
    };

    let Some(levels) = levels else {
        // A miss is a normal outcome: the start word has no viable ladder
        // under this builder.
        eprintln!("no complete ladder found from {:?}", start_word.to_uppercase());
        std::process::exit(2);
    };

    if as_json {
        let chain = AnagramChain::new(
            start_word.to_uppercase(),
            format!("ladder starting from {}", start_word.to_uppercase()),
            Difficulty::Medium,
            levels,
        );
        match serde_json::to_string_pretty(&chain) {
            Ok(json) => println!("{json}"),
            Err(e) => laddergram_cli::fatal(&format!("serialize: {e}")),
        }
        return;
    }

    for level in &levels {
        match (&level.starting_letters, level.added_letter) {
            (Some(letters), _) => println!(
                "{}  start {}  word {}",
                level.letter_count,
                letters,
                level.suggested_word.as_deref().unwrap_or("-")
            ),
            (None, Some(added)) => println!(
                "{}  +{}     word {}",
                level.letter_count,
                added,
                level.suggested_word.as_deref().unwrap_or("-")
            ),
            (None, None) => println!("{}  ?", level.letter_count),
        }
    }
}
