// Ladder chain and level records: the persistence schema shape consumed by
// editor/export tooling, plus structural validation.
//
// Validation problems are reported as a list of human-readable strings,
// never as errors: callers decide whether a malformed chain blocks them.

use serde::{Deserialize, Serialize};

/// Number of rungs in a complete ladder (3 through 8 letters).
pub const CHAIN_LEVELS: usize = 6;

/// Letter count of the first rung.
pub const MIN_LETTER_COUNT: usize = 3;

/// Letter count of the last rung.
pub const MAX_LETTER_COUNT: usize = 8;

/// Author-assigned difficulty of a chain. Serialized lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One rung of a ladder.
///
/// The first rung carries `starting_letters`; every later rung carries the
/// single `added_letter` instead. `suggested_word` is advisory only -- a
/// hint for content authors, never enforced against a dictionary here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnagramLevel {
    /// Number of letters at this rung (3..=8).
    pub letter_count: usize,
    /// The initial letter set; present only on the first rung.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_letters: Option<String>,
    /// The letter added at this rung; present on every rung but the first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_letter: Option<char>,
    /// An advisory solution word for this rung.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_word: Option<String>,
}

impl AnagramLevel {
    /// Build the first rung from its starting letters. Input is uppercased.
    pub fn start(starting_letters: &str, suggested_word: Option<&str>) -> Self {
        Self {
            letter_count: starting_letters.chars().count(),
            starting_letters: Some(starting_letters.to_uppercase()),
            added_letter: None,
            suggested_word: suggested_word.map(str::to_uppercase),
        }
    }

    /// Build a later rung from the letter it adds. Input is uppercased.
    pub fn step(letter_count: usize, added_letter: char, suggested_word: Option<&str>) -> Self {
        Self {
            letter_count,
            starting_letters: None,
            added_letter: added_letter.to_uppercase().next(),
            suggested_word: suggested_word.map(str::to_uppercase),
        }
    }
}

/// A full six-rung ladder with its authoring metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnagramChain {
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub levels: Vec<AnagramLevel>,
}

impl AnagramChain {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        difficulty: Difficulty,
        levels: Vec<AnagramLevel>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            difficulty,
            levels,
        }
    }

    /// `true` iff every structural invariant holds.
    pub fn is_complete(&self) -> bool {
        self.validation_errors().is_empty()
    }

    /// Every violated structural invariant, as human-readable messages.
    ///
    /// Checks: exactly six levels; letter counts run 3,4,5,6,7,8; the first
    /// level carries exactly three starting letters A-Z and no added letter;
    /// every later level carries exactly one added letter A-Z and no
    /// starting letters. `suggested_word` is not checked.
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.levels.len() != CHAIN_LEVELS {
            errors.push(format!(
                "chain must have exactly {CHAIN_LEVELS} levels, found {}",
                self.levels.len()
            ));
        }

        for (i, level) in self.levels.iter().enumerate() {
            let expected_count = MIN_LETTER_COUNT + i;
            if expected_count <= MAX_LETTER_COUNT && level.letter_count != expected_count {
                errors.push(format!(
                    "level {} must have letter count {expected_count}, found {}",
                    i + 1,
                    level.letter_count
                ));
            }

            if i == 0 {
                match &level.starting_letters {
                    None => errors.push("level 1 must carry starting letters".to_string()),
                    Some(letters) => {
                        if letters.chars().count() != MIN_LETTER_COUNT {
                            errors.push(format!(
                                "level 1 starting letters must be exactly {MIN_LETTER_COUNT} \
                                 letters, found {:?}",
                                letters
                            ));
                        } else if !letters.chars().all(|c| c.is_ascii_uppercase()) {
                            errors.push(format!(
                                "level 1 starting letters must be uppercase A-Z, found {:?}",
                                letters
                            ));
                        }
                    }
                }
                if level.added_letter.is_some() {
                    errors.push("level 1 must not carry an added letter".to_string());
                }
            } else {
                match level.added_letter {
                    None => errors.push(format!("level {} must carry an added letter", i + 1)),
                    Some(letter) if !letter.is_ascii_uppercase() => errors.push(format!(
                        "level {} added letter must be uppercase A-Z, found {:?}",
                        i + 1,
                        letter
                    )),
                    Some(_) => {}
                }
                if level.starting_letters.is_some() {
                    errors.push(format!(
                        "level {} must not carry starting letters",
                        i + 1
                    ));
                }
            }
        }

        errors
    }
}
