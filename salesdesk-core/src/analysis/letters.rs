use std::collections::HashMap;

/// How the scanner sees a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterClass {
    Vowel,
    Consonant,
    /// Digits, whitespace, punctuation, non-ASCII letters. Breaks any run.
    Other,
}

/// Lowercases `ch`, returning `None` when the lowercase form is not a single
/// character (e.g. `'İ'`). Such characters never match a vowel or consonant.
pub fn fold_case(ch: char) -> Option<char> {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => Some(folded),
        _ => None,
    }
}

pub fn classify(ch: char) -> LetterClass {
    match fold_case(ch) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => LetterClass::Vowel,
        Some(folded) if folded.is_ascii_lowercase() => LetterClass::Consonant,
        _ => LetterClass::Other,
    }
}

/// Case-insensitive occurrence counts of every character in a string.
#[derive(Debug, Default, Clone)]
pub struct LetterCounts {
    counts: HashMap<char, usize>,
}

impl LetterCounts {
    pub fn tally(input: &str) -> Self {
        let mut counts = HashMap::new();
        for ch in input.chars() {
            if let Some(folded) = fold_case(ch) {
                *counts.entry(folded).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    pub fn count(&self, ch: char) -> usize {
        fold_case(ch)
            .and_then(|folded| self.counts.get(&folded).copied())
            .unwrap_or(0)
    }

    pub fn is_unique(&self, ch: char) -> bool {
        self.count(ch) == 1
    }
}
