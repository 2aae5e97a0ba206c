// Next-letter suggestion scoring and ladder assembly.
//
// Scoring combines vowel balance, a sampled forward-lookahead probe, and
// letter commonness into a single viability score in [0, 1]. The greedy
// chain builder is a content-authoring aid, not an exhaustive solver; the
// graph-backed builder below it trades interpretability for a guarantee.

use std::cmp::Ordering;

use laddergram_core::chain::{AnagramLevel, MAX_LETTER_COUNT, MIN_LETTER_COUNT};
use laddergram_core::scoring::{HIGH_FREQUENCY_LETTERS, is_vowel};
use laddergram_core::signature::Signature;

use crate::dictionary::Dictionary;
use crate::graph::SignatureGraph;

/// Lower edge of the vowel ratio band scored as ideal.
const VOWEL_BAND_LOW: f64 = 0.30;

/// Upper edge of the vowel ratio band scored as ideal.
const VOWEL_BAND_HIGH: f64 = 0.45;

/// Linear falloff per unit of distance outside the vowel band.
const VOWEL_DECAY_RATE: f64 = 2.5;

/// Weight of the vowel-balance term in the viability score.
const VOWEL_WEIGHT: f64 = 0.35;

/// Weight of the forward-lookahead term.
const LOOKAHEAD_WEIGHT: f64 = 0.45;

/// Weight of the letter-commonness term.
const FREQUENCY_WEIGHT: f64 = 0.20;

/// Frequency score for letters outside the high-frequency set.
const UNCOMMON_FREQUENCY_SCORE: f64 = 0.5;

/// A scored candidate next letter. Ephemeral: produced per request, never
/// persisted.
#[derive(Debug, Clone)]
pub struct LetterSuggestion {
    /// The candidate letter to add.
    pub letter: char,
    /// The current letters plus the candidate.
    pub resulting_letters: String,
    /// Every word using all of `resulting_letters`, alphabetical. All
    /// members of an anagram group share a length, so this order is also
    /// longest-first.
    pub valid_words: Vec<String>,
    /// Combined score in [0, 1]; higher is more promising.
    pub viability_score: f64,
    /// Fraction of vowels in `resulting_letters`.
    pub vowel_ratio: f64,
    /// 1.0 for a high-frequency letter, 0.5 otherwise.
    pub letter_frequency_score: f64,
}

/// Tunable policy for suggestion lookahead and greedy chain assembly.
///
/// The defaults reproduce the standard authoring behavior; the threshold
/// and probe set are policy, not algorithm, and callers may tighten or
/// loosen them.
#[derive(Debug, Clone)]
pub struct ChainPolicy {
    /// Minimum viability a suggestion must clear during greedy assembly.
    pub viability_threshold: f64,
    /// How many of a suggestion's words the lookahead probes.
    pub lookahead_sample_size: usize,
    /// Letters tried when probing whether a word extends to the next rung.
    pub probe_letters: Vec<char>,
}

impl Default for ChainPolicy {
    fn default() -> Self {
        Self {
            viability_threshold: 0.4,
            lookahead_sample_size: 5,
            probe_letters: vec!['E', 'S', 'R', 'T', 'A', 'I', 'N'],
        }
    }
}

/// Scores candidate next letters against a dictionary and assembles
/// complete ladders.
///
/// Pure computation over the dictionary's read-only structures; an engine
/// can serve any number of concurrent callers.
pub struct SuggestionEngine<'a> {
    dictionary: &'a Dictionary,
    policy: ChainPolicy,
}

impl<'a> SuggestionEngine<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self::with_policy(dictionary, ChainPolicy::default())
    }

    pub fn with_policy(dictionary: &'a Dictionary, policy: ChainPolicy) -> Self {
        Self { dictionary, policy }
    }

    pub fn policy(&self) -> &ChainPolicy {
        &self.policy
    }

    /// Score every letter A-Z that, appended to `current_letters`, yields
    /// at least one dictionary word using all of the letters.
    ///
    /// Letters with no valid words are excluded entirely, not scored as
    /// zero. Results are sorted by descending viability; ties keep A-to-Z
    /// order.
    pub fn generate_suggestions(
        &self,
        current_letters: &str,
        target_letter_count: usize,
    ) -> Vec<LetterSuggestion> {
        let current = normalize_letters(current_letters);
        let mut suggestions = Vec::new();

        for letter in 'A'..='Z' {
            let resulting_letters = format!("{current}{letter}");
            let valid_words = self.dictionary.find_anagrams(&resulting_letters);
            if valid_words.is_empty() {
                continue;
            }

            let vowel_ratio = vowel_ratio(&resulting_letters);
            let vowel_score = vowel_band_score(vowel_ratio);
            let letter_frequency_score = if HIGH_FREQUENCY_LETTERS.contains(&letter) {
                1.0
            } else {
                UNCOMMON_FREQUENCY_SCORE
            };
            // The terminal rung needs no lookahead.
            let next_level_score = if target_letter_count < MAX_LETTER_COUNT {
                self.lookahead_score(&valid_words)
            } else {
                1.0
            };

            let viability_score = VOWEL_WEIGHT * vowel_score
                + LOOKAHEAD_WEIGHT * next_level_score
                + FREQUENCY_WEIGHT * letter_frequency_score;

            suggestions.push(LetterSuggestion {
                letter,
                resulting_letters,
                valid_words,
                viability_score,
                vowel_ratio,
                letter_frequency_score,
            });
        }

        // Stable sort: equal scores keep the A-to-Z insertion order.
        suggestions.sort_by(|a, b| {
            b.viability_score
                .partial_cmp(&a.viability_score)
                .unwrap_or(Ordering::Equal)
        });
        suggestions
    }

    /// Fraction of a sample of `valid_words` that extend to the next rung
    /// when any probe letter is appended.
    fn lookahead_score(&self, valid_words: &[String]) -> f64 {
        let sample_size = valid_words.len().min(self.policy.lookahead_sample_size);
        if sample_size == 0 {
            return 0.0;
        }
        let extendable = valid_words[..sample_size]
            .iter()
            .filter(|word| {
                self.policy.probe_letters.iter().any(|&probe| {
                    !self
                        .dictionary
                        .find_anagrams(&format!("{word}{probe}"))
                        .is_empty()
                })
            })
            .count();
        extendable as f64 / sample_size as f64
    }

    /// Greedily assemble a complete six-rung ladder from a 3-letter
    /// dictionary word.
    ///
    /// At each rung the first suggestion (in score order) clearing the
    /// policy threshold is taken -- first over the bar, not best -- and the
    /// longest word of that suggestion becomes the next rung's basis. No
    /// backtracking: any rung without a qualifying suggestion aborts the
    /// whole build and returns `None`. `None` is a normal search outcome,
    /// not a failure.
    pub fn generate_complete_chain(&self, start_word: &str) -> Option<Vec<AnagramLevel>> {
        let start = normalize_letters(start_word);
        if start.chars().count() != MIN_LETTER_COUNT || !self.dictionary.contains(&start) {
            return None;
        }

        let mut levels = vec![AnagramLevel::start(&start, Some(&start))];
        let mut current = start;

        for target in (MIN_LETTER_COUNT + 1)..=MAX_LETTER_COUNT {
            let suggestions = self.generate_suggestions(&current, target);
            let chosen = suggestions
                .into_iter()
                .find(|s| s.viability_score >= self.policy.viability_threshold)?;
            let next_word = chosen.valid_words.first()?.clone();
            levels.push(AnagramLevel::step(target, chosen.letter, Some(&next_word)));
            current = next_word;
        }

        Some(levels)
    }

    /// Assemble a ladder by backtracking over the signature graph, using
    /// reachability as a hard existence filter.
    ///
    /// Children are tried in ascending difficulty order, so the emitted
    /// ladder favors recognizable words, and every child on the path is
    /// provably completable. Returns `None` only when the start word has no
    /// path to length 8 at all.
    pub fn generate_chain_via_graph(
        &self,
        start_word: &str,
        graph: &SignatureGraph,
    ) -> Option<Vec<AnagramLevel>> {
        let start = normalize_letters(start_word);
        if start.chars().count() != MIN_LETTER_COUNT || !self.dictionary.contains(&start) {
            return None;
        }

        let start_signature = Signature::of(&start);
        if !graph.can_reach_length(&start_signature, MIN_LETTER_COUNT, MAX_LETTER_COUNT) {
            return None;
        }

        let mut path = vec![start_signature];
        if !extend_path(graph, &mut path) {
            return None;
        }

        let mut levels = vec![AnagramLevel::start(&start, Some(&start))];
        for pair in path.windows(2) {
            let added = pair[0].added_letter(&pair[1])?;
            levels.push(AnagramLevel::step(
                pair[1].len(),
                added,
                graph.representative_word(&pair[1]),
            ));
        }
        Some(levels)
    }
}

/// Depth-first extension of a signature path to the top rung. Only children
/// that can still reach the top are descended into.
fn extend_path(graph: &SignatureGraph, path: &mut Vec<Signature>) -> bool {
    let Some(current) = path.last().cloned() else {
        return false;
    };
    let len = current.len();
    if len == MAX_LETTER_COUNT {
        return true;
    }

    let mut children: Vec<&Signature> = graph
        .next_signatures(&current)
        .iter()
        .filter(|child| graph.can_reach_length(child, len + 1, MAX_LETTER_COUNT))
        .collect();
    children.sort_by(|a, b| {
        graph
            .difficulty_score(a)
            .partial_cmp(&graph.difficulty_score(b))
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.cmp(b))
    });

    for child in children {
        path.push(child.clone());
        if extend_path(graph, path) {
            return true;
        }
        path.pop();
    }
    false
}

/// Uppercase and strip whitespace; letter order is irrelevant to every
/// consumer (signatures canonicalize).
fn normalize_letters(letters: &str) -> String {
    letters
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Fraction of vowels among the letters.
fn vowel_ratio(letters: &str) -> f64 {
    let total = letters.chars().count();
    if total == 0 {
        return 0.0;
    }
    let vowels = letters.chars().filter(|&c| is_vowel(c)).count();
    vowels as f64 / total as f64
}

/// 1.0 inside the ideal vowel band; linear decay at `VOWEL_DECAY_RATE` per
/// unit distance from the nearest band edge outside it, floored at 0.
fn vowel_band_score(ratio: f64) -> f64 {
    let distance = if ratio < VOWEL_BAND_LOW {
        VOWEL_BAND_LOW - ratio
    } else if ratio > VOWEL_BAND_HIGH {
        ratio - VOWEL_BAND_HIGH
    } else {
        return 1.0;
    };
    (1.0 - distance * VOWEL_DECAY_RATE).max(0.0)
}
