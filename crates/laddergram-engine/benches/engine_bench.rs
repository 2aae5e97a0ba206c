// Criterion benchmarks for laddergram-engine.
//
// Runs against a synthetic in-memory word list so the benchmarks need no
// external dictionary file.
//
// Run:
//   cargo bench -p laddergram-engine

use criterion::{Criterion, criterion_group, criterion_main};
use laddergram_engine::{Dictionary, SignatureGraph, SuggestionEngine};

/// A compact corpus with several overlapping ladders.
const WORDS: &[&str] = &[
    "CAT", "ACT", "RAT", "TAR", "ART", "EAR", "ERA", "TEA", "EAT", "ATE",
    "SEA", "TON", "NOT", "SIN", "TIN", "NIT", "DOG", "CART", "RATE", "TARE",
    "TEAR", "EARS", "SEAR", "ERAS", "ANTS", "TANS", "NEST", "NETS", "SENT",
    "TENS", "DOGS", "TRACE", "CRATE", "REACT", "RATES", "STARE", "TEARS",
    "TARES", "ASTER", "ANTES", "NATES", "STEAN", "TRACED", "REDACT",
    "CARTED", "CRATED", "STARED", "TRADES", "TREADS", "DARTS", "ANTRES",
    "STERNA", "ASTERN", "REDACTS", "ROASTED", "TORSADE", "STERNAL",
    "RENTALS", "ANTLERS", "SALTERN", "CASTERED", "NOTECARDS",
];

fn corpus() -> String {
    WORDS.join("\n")
}

fn bench_dictionary_load(c: &mut Criterion) {
    let list = corpus();
    c.bench_function("dictionary_load", |b| {
        b.iter(|| {
            let dict = Dictionary::load_from_reader(list.as_bytes()).expect("load");
            std::hint::black_box(dict.word_count());
        });
    });
}

fn bench_graph_build(c: &mut Criterion) {
    let dictionary = Dictionary::from_words(WORDS.iter().copied());
    c.bench_function("graph_build", |b| {
        b.iter(|| {
            let graph = SignatureGraph::build(&dictionary);
            std::hint::black_box(graph.viable_starts().len());
        });
    });
}

fn bench_generate_suggestions(c: &mut Criterion) {
    let dictionary = Dictionary::from_words(WORDS.iter().copied());
    let engine = SuggestionEngine::new(&dictionary);
    c.bench_function("generate_suggestions", |b| {
        b.iter(|| {
            for letters in ["CAT", "RAT", "EAR", "CART", "TRACE"] {
                let target = letters.len() + 1;
                std::hint::black_box(engine.generate_suggestions(letters, target));
            }
        });
    });
}

fn bench_find_valid_words(c: &mut Criterion) {
    let dictionary = Dictionary::from_words(WORDS.iter().copied());
    c.bench_function("find_valid_words_7_letters", |b| {
        b.iter(|| {
            std::hint::black_box(dictionary.find_valid_words("STERNAL", None));
        });
    });
}

fn bench_complete_chain(c: &mut Criterion) {
    let dictionary = Dictionary::from_words(WORDS.iter().copied());
    let engine = SuggestionEngine::new(&dictionary);
    c.bench_function("generate_complete_chain", |b| {
        b.iter(|| {
            std::hint::black_box(engine.generate_complete_chain("CAT"));
        });
    });
}

criterion_group!(
    benches,
    bench_dictionary_load,
    bench_graph_build,
    bench_generate_suggestions,
    bench_find_valid_words,
    bench_complete_chain
);
criterion_main!(benches);
