//! Anagram-ladder word-graph engine.
//!
//! Generates and validates "anagram ladders": sequences of words of
//! increasing length (3 to 8 letters) where each step adds exactly one
//! letter and rearranges the result into a new dictionary word.
//!
//! # Architecture
//!
//! - [`dictionary`] -- Word-list ingestion, membership and anagram-group
//!   queries
//! - [`graph`] -- Precomputed signature graph with single-letter-addition
//!   edges and memoized reachability to a target length
//! - [`suggest`] -- Next-letter scoring and greedy ladder assembly
//!
//! The [`Dictionary`] is built once from a word list; the
//! [`SignatureGraph`] is built once from the dictionary. Both are read-only
//! afterward (the graph's reachability memo populates behind a lock) and
//! can be shared across any number of concurrent readers.

pub mod dictionary;
pub mod graph;
pub mod suggest;

pub use dictionary::Dictionary;
pub use graph::SignatureGraph;
pub use suggest::{ChainPolicy, LetterSuggestion, SuggestionEngine};

/// Error type for word-list ingestion.
///
/// Search misses (no anagrams, no reachable path, no viable chain) are
/// never errors; they come back as empty collections or `None`. The only
/// fatal condition is a word-list source that cannot be read -- no partial
/// dictionary is ever produced.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("word list source unavailable: {reason}")]
    SourceUnavailable { reason: String },
}
