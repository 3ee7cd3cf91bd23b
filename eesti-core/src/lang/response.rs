//! Response post-processing
//!
//! Makes assistant replies speakable: "1. jaanuar" → "esimene jaanuar",
//! "2 ^ 3" → "2 astmes 3".

use crate::lang::parse::NumberExtractor;
use crate::lang::pronounce::NumberPronouncer;
use crate::lang::tables::is_month;

/// Spoken "to the power of"
const POWER_WORD: &str = "astmes";

/// Response normaliser
pub struct ResponseNormalizer;

impl ResponseNormalizer {
    /// Prepare a reply for speech
    ///
    /// Ordinal dates are spelled out when the text mentions a month; a `^`
    /// followed by a number becomes "astmes".
    pub fn nice_response(text: &str) -> String {
        let mut words: Vec<String> = if text.split_whitespace().any(is_month) {
            Self::nice_ordinal(text)
                .split_whitespace()
                .map(str::to_string)
                .collect()
        } else {
            text.split_whitespace().map(str::to_string).collect()
        };

        for idx in 0..words.len() {
            if words[idx] != "^" {
                continue;
            }
            let next_is_numeric = words
                .get(idx + 1)
                .map_or(false, |next| NumberExtractor::is_numeric(next));
            if next_is_numeric {
                words[idx] = POWER_WORD.to_string();
            }
        }

        words.join(" ")
    }

    /// Spell out "<digits>." when a month name follows
    pub fn nice_ordinal(text: &str) -> String {
        let words: Vec<&str> = text.split_whitespace().collect();

        words
            .iter()
            .enumerate()
            .map(|(idx, word)| {
                let followed_by_month = words.get(idx + 1).map_or(false, |next| is_month(next));
                match word.strip_suffix('.') {
                    Some(digits) if followed_by_month => match Self::parse_day(digits) {
                        Some(day) => NumberPronouncer::pronounce_ordinal(day),
                        None => word.to_string(),
                    },
                    _ => word.to_string(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn parse_day(digits: &str) -> Option<u64> {
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_ordinal_with_month() {
        assert_eq!(
            ResponseNormalizer::nice_ordinal("täna on 1. jaanuar"),
            "täna on esimene jaanuar"
        );
        assert_eq!(
            ResponseNormalizer::nice_ordinal("24. veebruar on püha"),
            "kahekümne neljas veebruar on püha"
        );
    }

    #[test]
    fn test_nice_ordinal_without_month() {
        assert_eq!(
            ResponseNormalizer::nice_ordinal("see on 7. test"),
            "see on 7. test"
        );
    }

    #[test]
    fn test_nice_response_power() {
        assert_eq!(ResponseNormalizer::nice_response("2 ^ 3"), "2 astmes 3");
        assert_eq!(ResponseNormalizer::nice_response("a ^ b"), "a ^ b");
        assert_eq!(ResponseNormalizer::nice_response("2 ^"), "2 ^");
    }

    #[test]
    fn test_nice_response_month_and_power() {
        assert_eq!(
            ResponseNormalizer::nice_response("3. märts ja 2 ^ 10"),
            "kolmas märts ja 2 astmes 10"
        );
    }

    #[test]
    fn test_nice_response_plain_text() {
        assert_eq!(ResponseNormalizer::nice_response("tere päevast"), "tere päevast");
    }
}
