// Word-list ingestion and lookup: membership testing, anagram groups, and
// the bounded subset-word search.

use std::collections::BTreeSet;
use std::io::BufRead;
use std::path::Path;

use hashbrown::{HashMap, HashSet};
use laddergram_core::signature::Signature;

use crate::EngineError;

/// Longest letter input accepted by [`Dictionary::find_valid_words`].
///
/// The permutation search is factorial in the input length; eight letters
/// is the longest rung in this domain, and longer inputs return an empty
/// result rather than attempting the search.
pub const MAX_SEARCH_LETTERS: usize = 8;

/// An immutable-after-load set of uppercase words, organized for membership
/// testing and for enumerating all words that share a signature.
///
/// Built once at startup from a newline-delimited word list; tokens are
/// whitespace-trimmed, uppercased, and deduplicated. Empty tokens are
/// discarded. After construction the dictionary is never mutated and is
/// safe to share across concurrent readers.
pub struct Dictionary {
    /// Membership set over all words.
    words: HashSet<String>,
    /// Anagram groups: every word sharing a signature, alphabetical.
    by_signature: HashMap<Signature, Vec<String>>,
}

impl Dictionary {
    /// Load a dictionary from a word-list file.
    ///
    /// Fails with [`EngineError::SourceUnavailable`] if the file cannot be
    /// opened or read; no partial dictionary is produced.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| EngineError::SourceUnavailable {
            reason: format!("{}: {e}", path.display()),
        })?;
        Self::load_from_reader(std::io::BufReader::new(file))
    }

    /// Load a dictionary from any buffered reader over newline-delimited
    /// UTF-8 tokens.
    pub fn load_from_reader(reader: impl BufRead) -> Result<Self, EngineError> {
        let mut dictionary = Self {
            words: HashSet::new(),
            by_signature: HashMap::new(),
        };
        for line in reader.lines() {
            let line = line.map_err(|e| EngineError::SourceUnavailable {
                reason: e.to_string(),
            })?;
            dictionary.insert(&line);
        }
        dictionary.finish();
        Ok(dictionary)
    }

    /// Build a dictionary from an in-memory word collection.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self {
            words: HashSet::new(),
            by_signature: HashMap::new(),
        };
        for word in words {
            dictionary.insert(word.as_ref());
        }
        dictionary.finish();
        dictionary
    }

    /// Insert one token: trim, uppercase, discard empties, dedup.
    fn insert(&mut self, token: &str) {
        let word = token.trim().to_uppercase();
        if word.is_empty() {
            return;
        }
        if self.words.insert(word.clone()) {
            self.by_signature
                .entry(Signature::of(&word))
                .or_default()
                .push(word);
        }
    }

    /// Sort each anagram group alphabetically for deterministic queries.
    fn finish(&mut self) {
        for group in self.by_signature.values_mut() {
            group.sort_unstable();
        }
    }

    /// Case-insensitive membership test. The empty word is never contained.
    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim().to_uppercase();
        !word.is_empty() && self.words.contains(&word)
    }

    /// Number of distinct words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Every dictionary word that is a rearrangement of **all** of
    /// `letters`, alphabetically sorted. Invariant under permutations of
    /// `letters` (only the letter multiset matters).
    pub fn find_anagrams(&self, letters: &str) -> Vec<String> {
        self.anagrams_of(&Signature::of(letters)).to_vec()
    }

    /// The anagram group of a signature, or empty if none.
    pub fn anagrams_of(&self, signature: &Signature) -> &[String] {
        self.by_signature
            .get(signature)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterate every distinct signature in the dictionary.
    pub fn signatures(&self) -> impl Iterator<Item = &Signature> {
        self.by_signature.keys()
    }

    /// Every dictionary word formable from any subset of `letters`, of
    /// exactly `length` letters if given or any length otherwise. Results
    /// are deduplicated and alphabetically sorted.
    ///
    /// Implemented as a depth-first permutation search with an explicit
    /// stack, skipping duplicate letters at each depth so a repeated input
    /// letter does not multiply the work. The search is factorial in the
    /// input length, so inputs longer than [`MAX_SEARCH_LETTERS`] return
    /// empty.
    pub fn find_valid_words(&self, letters: &str, length: Option<usize>) -> Vec<String> {
        let mut chars: Vec<char> = letters
            .trim()
            .chars()
            .flat_map(char::to_uppercase)
            .collect();
        chars.sort_unstable();

        let n = chars.len();
        if n == 0 || n > MAX_SEARCH_LETTERS {
            return Vec::new();
        }
        let (min_len, max_len) = match length {
            Some(0) => return Vec::new(),
            Some(len) if len > n => return Vec::new(),
            Some(len) => (len, len),
            None => (1, n),
        };

        // One frame per depth: the next candidate position to try, and the
        // position currently chosen at this depth (undone on revisit).
        struct Frame {
            next_index: usize,
            chosen: Option<usize>,
        }

        let mut found: BTreeSet<String> = BTreeSet::new();
        let mut used = vec![false; n];
        let mut prefix = String::with_capacity(n);
        let mut stack = vec![Frame {
            next_index: 0,
            chosen: None,
        }];

        while let Some(frame) = stack.last_mut() {
            if let Some(prev) = frame.chosen.take() {
                used[prev] = false;
                prefix.pop();
            }

            // Next unused position, skipping a letter equal to its unused
            // predecessor (the standard duplicate-permutation cut).
            let mut i = frame.next_index;
            while i < n && (used[i] || (i > 0 && chars[i] == chars[i - 1] && !used[i - 1])) {
                i += 1;
            }
            if i >= n {
                stack.pop();
                continue;
            }

            frame.next_index = i + 1;
            frame.chosen = Some(i);
            used[i] = true;
            prefix.push(chars[i]);

            if prefix.len() >= min_len
                && prefix.len() <= max_len
                && self.words.contains(prefix.as_str())
            {
                found.insert(prefix.clone());
            }
            if prefix.len() < max_len {
                stack.push(Frame {
                    next_index: 0,
                    chosen: None,
                });
            }
        }

        found.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words.iter().copied())
    }

    #[test]
    fn contains_every_inserted_word() {
        let d = dict(&["CAT", "ACT", "CART", "TRACE", "CRATE"]);
        for word in ["CAT", "ACT", "CART", "TRACE", "CRATE"] {
            assert!(d.contains(word), "{word} should be contained");
        }
    }

    #[test]
    fn contains_is_case_insensitive() {
        let d = dict(&["CAT"]);
        assert!(d.contains("cat"));
        assert!(d.contains("Cat"));
    }

    #[test]
    fn absent_permutations_are_not_contained() {
        let d = dict(&["CAT", "ACT"]);
        assert!(!d.contains("TCA"));
        assert!(!d.contains("ATC"));
    }

    #[test]
    fn empty_word_is_never_contained() {
        let d = dict(&["CAT"]);
        assert!(!d.contains(""));
        assert!(!d.contains("   "));
    }

    #[test]
    fn load_normalizes_and_discards_empty_tokens() {
        let list = "  cat \n\nACT\ncart\n   \nCat\n";
        let d = Dictionary::load_from_reader(list.as_bytes()).unwrap();
        assert_eq!(d.word_count(), 3);
        assert!(d.contains("CAT"));
        assert!(d.contains("ACT"));
        assert!(d.contains("CART"));
    }

    #[test]
    fn duplicate_insertions_are_idempotent() {
        let d = dict(&["CAT", "cat", " CAT "]);
        assert_eq!(d.word_count(), 1);
        assert_eq!(d.find_anagrams("CAT"), vec!["CAT"]);
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let result = Dictionary::load_from_path("/nonexistent/laddergram-words.txt");
        assert!(matches!(
            result,
            Err(crate::EngineError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn find_anagrams_returns_the_whole_group_alphabetically() {
        let d = dict(&["CAT", "ACT", "TACO"]);
        assert_eq!(d.find_anagrams("CAT"), vec!["ACT", "CAT"]);
    }

    #[test]
    fn find_anagrams_is_permutation_invariant() {
        let d = dict(&["TRACE", "CRATE", "REACT"]);
        let from_trace = d.find_anagrams("TRACE");
        let from_caret = d.find_anagrams("CARET");
        let from_ecart = d.find_anagrams("ECART");
        assert_eq!(from_trace, vec!["CRATE", "REACT", "TRACE"]);
        assert_eq!(from_trace, from_caret);
        assert_eq!(from_trace, from_ecart);
    }

    #[test]
    fn find_anagrams_of_unknown_letters_is_empty() {
        let d = dict(&["CAT"]);
        assert!(d.find_anagrams("ZZZ").is_empty());
    }

    #[test]
    fn find_valid_words_covers_all_subset_lengths() {
        let d = dict(&["A", "AT", "CAT", "ACT", "TACO"]);
        let words = d.find_valid_words("CAT", None);
        assert_eq!(words, vec!["A", "ACT", "AT", "CAT"]);
    }

    #[test]
    fn find_valid_words_with_length_filter() {
        let d = dict(&["A", "AT", "CAT", "ACT"]);
        assert_eq!(d.find_valid_words("CAT", Some(3)), vec!["ACT", "CAT"]);
        assert_eq!(d.find_valid_words("CAT", Some(2)), vec!["AT"]);
        assert!(d.find_valid_words("CAT", Some(4)).is_empty());
    }

    #[test]
    fn find_valid_words_handles_repeated_letters_once() {
        let d = dict(&["AA", "A"]);
        // "AA" has a repeated letter; the duplicate cut must not drop words
        // nor produce duplicates.
        assert_eq!(d.find_valid_words("AA", None), vec!["A", "AA"]);
    }

    #[test]
    fn find_valid_words_rejects_oversized_input() {
        let d = dict(&["CAT"]);
        assert!(d.find_valid_words("ABCDEFGHI", None).is_empty());
        assert_eq!(d.find_valid_words("ABCDEFGH", Some(9)), Vec::<String>::new());
    }

    #[test]
    fn find_valid_words_of_empty_input_is_empty() {
        let d = dict(&["CAT"]);
        assert!(d.find_valid_words("", None).is_empty());
        assert!(d.find_valid_words("CAT", Some(0)).is_empty());
    }

    #[test]
    fn empty_dictionary_answers_queries_without_failing() {
        let d = Dictionary::from_words(Vec::<&str>::new());
        assert!(d.is_empty());
        assert!(!d.contains("CAT"));
        assert!(d.find_anagrams("CAT").is_empty());
        assert!(d.find_valid_words("CAT", None).is_empty());
    }
}
