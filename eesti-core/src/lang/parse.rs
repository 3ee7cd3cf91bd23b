//! Words-to-number parser
//!
//! Rewrites Estonian number words (0..=10, any case, ordinals, suffixed
//! forms like "kolmandale") into digits and pulls the first number out of a
//! sentence.

use crate::lang::number::Number;
use crate::lang::tables::lookup_word;

/// Number extractor
pub struct NumberExtractor;

impl NumberExtractor {
    /// Replace every recognised number word with its digits
    ///
    /// Unknown tokens pass through unchanged; whitespace collapses to single
    /// spaces.
    pub fn convert_words_to_numbers(text: &str) -> String {
        text.split_whitespace()
            .map(|word| match lookup_word(word) {
                Some(form) => {
                    tracing::trace!("Number word '{}' -> {} ({:?})", word, form.value, form.case);
                    form.value.to_string()
                }
                None => word.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Find the first number in `text`
    ///
    /// An ordinal date marker ("7.") counts as a number. Returns `None` when
    /// the text holds no number.
    ///
    /// # Example
    /// ```
    /// # use eesti_core::lang::{Number, NumberExtractor};
    /// assert_eq!(NumberExtractor::extract_number("see on 7. test"), Some(Number::Int(7)));
    /// assert_eq!(
    ///     NumberExtractor::extract_number("palun kolmandale korrusele"),
    ///     Some(Number::Int(3))
    /// );
    /// assert_eq!(NumberExtractor::extract_number("ei midagi"), None);
    /// ```
    pub fn extract_number(text: &str) -> Option<Number> {
        let converted = Self::convert_words_to_numbers(text);

        for word in converted.split_whitespace() {
            if let Some(ordinal) = Self::ordinal_marker(word) {
                return Some(ordinal);
            }
            if let Some(value) = Self::parse_numeric(word) {
                return Some(value);
            }
        }

        tracing::debug!("No number found in '{}'", text);
        None
    }

    /// Locale normaliser: number words become digits
    pub fn normalize(text: &str) -> String {
        Self::convert_words_to_numbers(text)
    }

    /// True for tokens that read as a finite number ("12", "3.5", "3,5")
    pub fn is_numeric(word: &str) -> bool {
        Self::parse_numeric(word).is_some()
    }

    /// "7." → 7
    fn ordinal_marker(word: &str) -> Option<Number> {
        let digits = word.strip_suffix('.')?;
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        digits.parse::<i128>().ok().map(Number::Int)
    }

    fn parse_numeric(word: &str) -> Option<Number> {
        if !word.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }

        if word.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(n) = word.parse::<i128>() {
                return Some(Number::Int(n));
            }
        }

        let value: f64 = word.replace(',', ".").parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        Some(Number::from_f64(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_plain_words() {
        assert_eq!(
            NumberExtractor::convert_words_to_numbers("kolm kassi ja kaks koera"),
            "3 kassi ja 2 koera"
        );
        assert_eq!(NumberExtractor::convert_words_to_numbers("kümme"), "10");
    }

    #[test]
    fn test_convert_cases() {
        assert_eq!(NumberExtractor::convert_words_to_numbers("kahe"), "2");
        assert_eq!(NumberExtractor::convert_words_to_numbers("kahte"), "2");
        assert_eq!(NumberExtractor::convert_words_to_numbers("teine"), "2");
        assert_eq!(NumberExtractor::convert_words_to_numbers("teise"), "2");
        assert_eq!(NumberExtractor::convert_words_to_numbers("teist"), "2");
    }

    #[test]
    fn test_convert_suffixed_words() {
        assert_eq!(
            NumberExtractor::convert_words_to_numbers("palun kolmandale korrusele"),
            "palun 3 korrusele"
        );
        assert_eq!(NumberExtractor::convert_words_to_numbers("viiega"), "5");
        assert_eq!(NumberExtractor::convert_words_to_numbers("kümnendast"), "10");
    }

    #[test]
    fn test_unknown_words_pass_through() {
        assert_eq!(
            NumberExtractor::convert_words_to_numbers("tere  maailm"),
            "tere maailm"
        );
    }

    #[test]
    fn test_extract_number() {
        assert_eq!(
            NumberExtractor::extract_number("see on test number 12"),
            Some(Number::Int(12))
        );
        assert_eq!(NumberExtractor::extract_number("see on 7. test"), Some(Number::Int(7)));
        assert_eq!(
            NumberExtractor::extract_number("see on esimene test"),
            Some(Number::Int(1))
        );
        assert_eq!(
            NumberExtractor::extract_number("see test on seitsmes"),
            Some(Number::Int(7))
        );
        assert_eq!(
            NumberExtractor::extract_number("palun kolmandale korrusele"),
            Some(Number::Int(3))
        );
    }

    #[test]
    fn test_extract_first_number_wins() {
        assert_eq!(
            NumberExtractor::extract_number("kaks või kolm"),
            Some(Number::Int(2))
        );
    }

    #[test]
    fn test_extract_float() {
        assert_eq!(
            NumberExtractor::extract_number("temperatuur on 3.5 kraadi"),
            Some(Number::Float(3.5))
        );
        assert_eq!(
            NumberExtractor::extract_number("temperatuur on 3,5 kraadi"),
            Some(Number::Float(3.5))
        );
        assert_eq!(NumberExtractor::extract_number("hind 4.0"), Some(Number::Int(4)));
    }

    #[test]
    fn test_extract_zero_is_found() {
        assert_eq!(NumberExtractor::extract_number("null"), Some(Number::Int(0)));
    }

    #[test]
    fn test_extract_nothing() {
        assert_eq!(NumberExtractor::extract_number("see on test"), None);
        assert_eq!(NumberExtractor::extract_number(""), None);
        assert_eq!(NumberExtractor::extract_number("nan inf"), None);
    }

    #[test]
    fn test_is_numeric() {
        assert!(NumberExtractor::is_numeric("12"));
        assert!(NumberExtractor::is_numeric("-3.25"));
        assert!(NumberExtractor::is_numeric("1,5"));
        assert!(!NumberExtractor::is_numeric("kolm"));
        assert!(!NumberExtractor::is_numeric("inf"));
        assert!(!NumberExtractor::is_numeric("."));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(
            NumberExtractor::normalize("mul on kaks õde"),
            "mul on 2 õde"
        );
    }
}
