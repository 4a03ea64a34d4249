//! Vowel scanner behind `POST /api/analisar-string`.
//!
//! The scanner looks for the first vowel that appears exactly once in the
//! input (ignoring case) and sits right after a vowel-consonant pair of
//! ASCII letters. It reads the input twice: once to count letters, once to
//! walk it with a two-flag state machine. Nothing is ever re-read.

mod letters;
mod scanner;

pub use letters::{LetterClass, LetterCounts, classify, fold_case};
pub use scanner::{ScanReport, VowelScanner, find_vowel, format_elapsed};

use salesdesk_model::{AnalyzeStringResponse, NO_VOWEL_FOUND};

/// Runs the scanner over `input` and builds the endpoint response.
pub fn analyze(input: String) -> AnalyzeStringResponse {
    let report = VowelScanner::new(&input).run_timed();
    let vogal = report
        .vowel
        .map(String::from)
        .unwrap_or_else(|| NO_VOWEL_FOUND.to_string());

    AnalyzeStringResponse {
        string: input,
        vogal,
        total_time: format_elapsed(report.elapsed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_reports_vowel_and_timing() {
        let response = analyze("aAbBABacafe".to_string());
        assert_eq!(response.string, "aAbBABacafe");
        assert_eq!(response.vogal, "e");
        assert!(response.total_time.ends_with("ms"));
        let millis: f64 = response
            .total_time
            .trim_end_matches("ms")
            .parse()
            .expect("numeric duration");
        assert!(millis >= 0.0);
    }

    #[test]
    fn analyze_falls_back_to_sentinel() {
        for input in ["banana", "hello", "elephant", ""] {
            let response = analyze(input.to_string());
            assert_eq!(response.vogal, NO_VOWEL_FOUND, "input {input:?}");
        }
    }
}
