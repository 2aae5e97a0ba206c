// Signature graph: length-partitioned anagram groups, single-letter-addition
// edges between adjacent lengths, and memoized reachability to a target
// length.
//
// Edges only connect length L to length L+1, so the graph is a DAG over
// length-partitioned signatures and every traversal terminates.

use std::sync::Mutex;

use hashbrown::HashMap;
use laddergram_core::scoring::letter_penalty;
use laddergram_core::signature::Signature;

use crate::dictionary::Dictionary;

/// Letter count of the shortest ladder rung.
pub const MIN_RUNG_LETTERS: usize = 3;

/// Letter count of the longest ladder rung.
pub const MAX_RUNG_LETTERS: usize = 8;

/// Memo key for reachability: the signature plus the (current, target)
/// length pair it was asked about.
type ReachKey = (Signature, u8, u8);

/// Precomputed graph over the signatures of all 3-to-8-letter dictionary
/// words.
///
/// Built once from a [`Dictionary`]; read-only afterward except for the
/// reachability memo, which populates behind a single lock and is safe to
/// share across concurrent readers.
pub struct SignatureGraph {
    /// Every word sharing a signature, ordered by ascending letter penalty
    /// then alphabetically (most recognizable first).
    words_by_signature: HashMap<Signature, Vec<String>>,
    /// Direct children: signatures one letter longer that remain reachable
    /// by adding a single letter.
    next_by_signature: HashMap<Signature, Vec<Signature>>,
    /// Distinct signatures per rung length, sorted.
    signatures_by_len: HashMap<usize, Vec<Signature>>,
    /// All length-3 signatures with a path to length 8, sorted.
    viable_starts: Vec<Signature>,
    /// Reachability memo. Misses are computed at most once per key.
    reach_memo: Mutex<HashMap<ReachKey, bool>>,
}

impl SignatureGraph {
    /// Build the graph from a dictionary. An empty dictionary yields an
    /// empty graph with no viable starts; that is not an error.
    pub fn build(dictionary: &Dictionary) -> Self {
        let mut words_by_signature: HashMap<Signature, Vec<String>> = HashMap::new();
        let mut signatures_by_len: HashMap<usize, Vec<Signature>> = HashMap::new();

        for signature in dictionary.signatures() {
            let len = signature.len();
            if !(MIN_RUNG_LETTERS..=MAX_RUNG_LETTERS).contains(&len) {
                continue;
            }
            let mut group = dictionary.anagrams_of(signature).to_vec();
            group.sort_by(|a, b| {
                letter_penalty(a)
                    .partial_cmp(&letter_penalty(b))
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.cmp(b))
            });
            words_by_signature.insert(signature.clone(), group);
            signatures_by_len
                .entry(len)
                .or_default()
                .push(signature.clone());
        }
        for group in signatures_by_len.values_mut() {
            group.sort_unstable();
        }

        // For every child signature of length L+1, deleting any single
        // letter instance that lands on a known length-L signature records
        // one parent -> child edge. Deleting different positions of a
        // repeated letter produces the same parent, so edges deduplicate.
        let mut next_by_signature: HashMap<Signature, Vec<Signature>> = HashMap::new();
        for len in MIN_RUNG_LETTERS..MAX_RUNG_LETTERS {
            let Some(children) = signatures_by_len.get(&(len + 1)) else {
                continue;
            };
            for child in children {
                for index in 0..child.len() {
                    let Some(parent) = child.without_index(index) else {
                        continue;
                    };
                    if !words_by_signature.contains_key(&parent) {
                        continue;
                    }
                    let edges = next_by_signature.entry(parent).or_default();
                    if !edges.contains(child) {
                        edges.push(child.clone());
                    }
                }
            }
        }
        for edges in next_by_signature.values_mut() {
            edges.sort_unstable();
        }

        let mut graph = Self {
            words_by_signature,
            next_by_signature,
            signatures_by_len,
            viable_starts: Vec::new(),
            reach_memo: Mutex::new(HashMap::new()),
        };

        let mut starts: Vec<Signature> = graph
            .signatures_of_len(MIN_RUNG_LETTERS)
            .iter()
            .filter(|s| graph.can_reach_length(s, MIN_RUNG_LETTERS, MAX_RUNG_LETTERS))
            .cloned()
            .collect();
        starts.sort_unstable();
        graph.viable_starts = starts;
        graph
    }

    /// Direct children of a signature, or empty if it has none or is
    /// unknown.
    pub fn next_signatures(&self, signature: &Signature) -> &[Signature] {
        self.next_by_signature
            .get(signature)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All words sharing a signature, best-recognizable first. Empty for an
    /// unknown signature.
    pub fn words(&self, signature: &Signature) -> &[String] {
        self.words_by_signature
            .get(signature)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The most recognizable word of a signature, if it has any.
    pub fn representative_word(&self, signature: &Signature) -> Option<&str> {
        self.words(signature).first().map(String::as_str)
    }

    /// Number of words sharing a signature.
    pub fn word_count(&self, signature: &Signature) -> usize {
        self.words(signature).len()
    }

    /// Distinct signatures of a rung length, sorted.
    pub fn signatures_of_len(&self, len: usize) -> &[Signature] {
        self.signatures_by_len
            .get(&len)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct signatures of a rung length.
    pub fn signature_count(&self, len: usize) -> usize {
        self.signatures_of_len(len).len()
    }

    /// All length-3 signatures with at least one path to length 8, sorted.
    pub fn viable_starts(&self) -> &[Signature] {
        &self.viable_starts
    }

    /// Whether `signature` can reach `target_len` via graph edges, counting
    /// itself as being at `current_len`.
    ///
    /// True iff `current_len == target_len`, or some child can reach
    /// `target_len` from `current_len + 1`. Memoized per
    /// `(signature, current, target)`; recursion is bounded by
    /// `target_len - current_len` because edges strictly increase length.
    pub fn can_reach_length(
        &self,
        signature: &Signature,
        current_len: usize,
        target_len: usize,
    ) -> bool {
        if current_len == target_len {
            return true;
        }
        if current_len > target_len {
            return false;
        }

        let key: ReachKey = (signature.clone(), current_len as u8, target_len as u8);
        if let Some(&cached) = self.reach_memo.lock().unwrap().get(&key) {
            return cached;
        }

        // The lock is released while recursing; only the final insert
        // re-acquires it. Racing writers would insert the same value.
        let reachable = self
            .next_signatures(signature)
            .iter()
            .any(|child| self.can_reach_length(child, current_len + 1, target_len));

        self.reach_memo.lock().unwrap().insert(key, reachable);
        reachable
    }

    /// Advisory difficulty of a signature: fewer available words and a less
    /// recognizable representative both raise the score. Never used to
    /// reject a signature.
    pub fn difficulty_score(&self, signature: &Signature) -> f64 {
        let words = self.words(signature);
        let scarcity = 10.0 / (words.len().max(1) as f64);
        let penalty = words.first().map(|w| letter_penalty(w)).unwrap_or(0.0);
        scarcity + penalty
    }
}
