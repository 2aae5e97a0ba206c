//! Shared value types and pure scoring functions for the laddergram
//! anagram-ladder engine.
//!
//! # Architecture
//!
//! - [`signature`] -- Canonical sorted-letter signatures (anagram keys)
//! - [`chain`] -- Ladder chain and level records plus structural validation
//! - [`scoring`] -- Letter-commonness penalty and letter classification

pub mod chain;
pub mod scoring;
pub mod signature;

pub use chain::{AnagramChain, AnagramLevel, Difficulty};
pub use signature::Signature;
