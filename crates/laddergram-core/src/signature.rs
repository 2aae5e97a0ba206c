// Canonical sorted-letter signature: the key that groups anagrams together.

use std::fmt;

/// A word's letters sorted into ascending order.
///
/// Two words are anagrams of each other iff they produce the same
/// `Signature`. Signatures are the vertices of the ladder graph; individual
/// words are looked up per signature.
///
/// Construction uppercases the input, so `Signature::of("cat")` and
/// `Signature::of("ACT")` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(String);

impl Signature {
    /// Build the signature of a word: trim, uppercase, sort letters.
    pub fn of(word: &str) -> Self {
        let mut letters: Vec<char> = word
            .trim()
            .chars()
            .flat_map(char::to_uppercase)
            .collect();
        letters.sort_unstable();
        Signature(letters.into_iter().collect())
    }

    /// The canonical letter string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters in the signature.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// `true` for the signature of the empty word.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the letters in canonical order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    /// The signature obtained by adding one letter to this multiset.
    pub fn with_letter(&self, letter: char) -> Signature {
        let mut letters: Vec<char> = self.0.chars().collect();
        letters.extend(letter.to_uppercase());
        letters.sort_unstable();
        Signature(letters.into_iter().collect())
    }

    /// The signature obtained by deleting the letter at `index` (in
    /// canonical order). Returns `None` if `index` is out of range.
    ///
    /// Deleting from a sorted string keeps the result sorted, so no
    /// re-canonicalization is needed.
    pub fn without_index(&self, index: usize) -> Option<Signature> {
        let letters: Vec<char> = self.0.chars().collect();
        if index >= letters.len() {
            return None;
        }
        let mut remaining = String::with_capacity(self.0.len());
        for (i, ch) in letters.into_iter().enumerate() {
            if i != index {
                remaining.push(ch);
            }
        }
        Some(Signature(remaining))
    }

    /// The single letter added going from `self` to `other`, if `other` is
    /// exactly this multiset plus one letter. Returns `None` otherwise.
    pub fn added_letter(&self, other: &Signature) -> Option<char> {
        if other.len() != self.len() + 1 {
            return None;
        }
        let mut mine = self.0.chars().peekable();
        let mut added = None;
        for ch in other.0.chars() {
            if mine.peek() == Some(&ch) {
                mine.next();
            } else if added.is_none() {
                added = Some(ch);
            } else {
                // Second mismatch: more than one letter differs.
                return None;
            }
        }
        added
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anagrams_share_a_signature() {
        assert_eq!(Signature::of("CAT"), Signature::of("ACT"));
        assert_eq!(Signature::of("CAT").as_str(), "ACT");
    }

    #[test]
    fn signature_is_case_insensitive() {
        assert_eq!(Signature::of("cat"), Signature::of("TAC"));
    }

    #[test]
    fn non_anagrams_differ() {
        assert_ne!(Signature::of("CAT"), Signature::of("CART"));
        assert_ne!(Signature::of("CAT"), Signature::of("COT"));
    }

    #[test]
    fn repeated_letters_are_distinct_multisets() {
        assert_ne!(Signature::of("ABA"), Signature::of("AB"));
        assert_eq!(Signature::of("ABA").as_str(), "AAB");
    }

    #[test]
    fn empty_word_gives_empty_signature() {
        let sig = Signature::of("");
        assert!(sig.is_empty());
        assert_eq!(sig.len(), 0);
    }

    #[test]
    fn with_letter_keeps_canonical_order() {
        let sig = Signature::of("ACT").with_letter('B');
        assert_eq!(sig.as_str(), "ABCT");
        let sig = Signature::of("ACT").with_letter('r');
        assert_eq!(sig.as_str(), "ACRT");
    }

    #[test]
    fn without_index_removes_one_letter() {
        let sig = Signature::of("ACRT");
        assert_eq!(sig.without_index(0).unwrap().as_str(), "CRT");
        assert_eq!(sig.without_index(2).unwrap().as_str(), "ACT");
        assert_eq!(sig.without_index(3).unwrap().as_str(), "ACR");
        assert!(sig.without_index(4).is_none());
    }

    #[test]
    fn added_letter_finds_the_difference() {
        let cat = Signature::of("CAT");
        let cart = Signature::of("CART");
        assert_eq!(cat.added_letter(&cart), Some('R'));
    }

    #[test]
    fn added_letter_handles_duplicates() {
        let sig = Signature::of("AAB");
        let bigger = Signature::of("AABA");
        assert_eq!(sig.added_letter(&bigger), Some('A'));
    }

    #[test]
    fn added_letter_rejects_non_supersets() {
        let cat = Signature::of("CAT");
        assert_eq!(cat.added_letter(&Signature::of("DOGS")), None);
        assert_eq!(cat.added_letter(&Signature::of("CAT")), None);
        assert_eq!(cat.added_letter(&Signature::of("CATTLE")), None);
    }

    #[test]
    fn display_matches_as_str() {
        let sig = Signature::of("TRACE");
        assert_eq!(sig.to_string(), "ACERT");
        assert_eq!(sig.to_string(), sig.as_str());
    }
}
