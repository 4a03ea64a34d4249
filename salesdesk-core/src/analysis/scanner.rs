use std::time::{Duration, Instant};

use super::letters::{LetterClass, LetterCounts, classify};

/// Two-flag state carried across the walk.
#[derive(Debug, Default, Clone, Copy)]
struct ScanState {
    last_was_vowel: bool,
    saw_vowel_then_consonant: bool,
}

impl ScanState {
    fn on_vowel(&mut self) {
        self.saw_vowel_then_consonant = false;
        self.last_was_vowel = true;
    }

    fn on_consonant(&mut self) {
        self.saw_vowel_then_consonant = self.last_was_vowel;
        self.last_was_vowel = false;
    }

    fn reset(&mut self) {
        *self = ScanState::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanReport {
    pub vowel: Option<char>,
    pub elapsed: Duration,
}

/// Single forward pass over a string, looking for the first vowel that is
/// unique in the whole input and directly follows a vowel-consonant pair.
#[derive(Debug)]
pub struct VowelScanner<'a> {
    input: &'a str,
}

impl<'a> VowelScanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Returns the matching vowel with its original casing.
    pub fn run(&self) -> Option<char> {
        let counts = LetterCounts::tally(self.input);
        let mut state = ScanState::default();

        for ch in self.input.chars() {
            match classify(ch) {
                LetterClass::Vowel => {
                    if state.saw_vowel_then_consonant && counts.is_unique(ch) {
                        return Some(ch);
                    }
                    state.on_vowel();
                }
                LetterClass::Consonant => state.on_consonant(),
                LetterClass::Other => state.reset(),
            }
        }

        None
    }

    pub fn run_timed(&self) -> ScanReport {
        let started = Instant::now();
        let vowel = self.run();
        ScanReport {
            vowel,
            elapsed: started.elapsed(),
        }
    }
}

pub fn find_vowel(input: &str) -> Option<char> {
    VowelScanner::new(input).run()
}

/// Milliseconds rounded to two decimals, suffixed with `ms`. Whole values
/// keep one decimal digit (`"12.0ms"`).
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_secs_f64() * 1000.0;
    let rounded = (millis * 100.0).round() / 100.0;
    format!("{rounded:?}ms")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_vowel_after_vowel_consonant_pair() {
        assert_eq!(find_vowel("aAbBABacafe"), Some('e'));
        assert_eq!(find_vowel("Arizona"), Some('i'));
        assert_eq!(find_vowel("abi"), Some('i'));
    }

    #[test]
    fn no_match_cases() {
        assert_eq!(find_vowel("banana"), None);
        assert_eq!(find_vowel("hello"), None);
        assert_eq!(find_vowel("elephant"), None);
        assert_eq!(find_vowel(""), None);
        assert_eq!(find_vowel("xyz"), None);
        assert_eq!(find_vowel("aeiou"), None);
    }

    #[test]
    fn preserves_original_case() {
        assert_eq!(find_vowel("xAbE"), Some('E'));
    }

    #[test]
    fn uniqueness_is_case_insensitive() {
        assert_eq!(find_vowel("abEe"), None);
        assert_eq!(find_vowel("abaxe"), Some('e'));
    }

    #[test]
    fn returns_first_match_by_position() {
        assert_eq!(find_vowel("abicoxu"), Some('i'));
    }

    #[test]
    fn non_letters_break_the_pattern() {
        assert_eq!(find_vowel("ab-i"), None);
        assert_eq!(find_vowel("a1bi"), None);
        assert_eq!(find_vowel("a bi"), None);
        assert_eq!(find_vowel("ébé"), None);
        assert_eq!(find_vowel("-- abi --"), Some('i'));
    }

    #[test]
    fn consonant_runs_break_the_pattern() {
        assert_eq!(find_vowel("abbi"), None);
    }

    // Window check over explicit triples, used as a reference.
    fn find_vowel_by_windows(input: &str) -> Option<char> {
        let chars: Vec<char> = input.chars().collect();
        let counts = LetterCounts::tally(input);
        (2..chars.len()).map(|i| (chars[i - 2], chars[i - 1], chars[i])).find_map(
            |(first, second, third)| {
                let matches = classify(first) == LetterClass::Vowel
                    && classify(second) == LetterClass::Consonant
                    && classify(third) == LetterClass::Vowel
                    && counts.is_unique(third);
                matches.then_some(third)
            },
        )
    }

    #[test]
    fn agrees_with_window_reference_on_generated_inputs() {
        const ALPHABET: &[char] = &[
            'a', 'E', 'i', 'o', 'U', 'b', 'C', 'd', 'x', 'z', ' ', '1', 'é',
        ];
        let mut seed: u64 = 0x5eed_cafe;
        for _ in 0..2_000 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            let len = (seed >> 59) as usize;
            let mut input = String::new();
            for _ in 0..len {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
                input.push(ALPHABET[(seed >> 33) as usize % ALPHABET.len()]);
            }
            assert_eq!(
                find_vowel(&input),
                find_vowel_by_windows(&input),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn elapsed_is_formatted_in_milliseconds() {
        assert_eq!(format_elapsed(Duration::from_micros(1_234)), "1.23ms");
        assert_eq!(format_elapsed(Duration::from_micros(1_500)), "1.5ms");
        assert_eq!(format_elapsed(Duration::from_millis(12)), "12.0ms");
        assert_eq!(format_elapsed(Duration::from_nanos(4_000)), "0.0ms");
        assert_eq!(format_elapsed(Duration::ZERO), "0.0ms");
    }
}
