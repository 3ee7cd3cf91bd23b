//! Number-to-words generator
//!
//! Turns integers and decimals into spoken Estonian, in cardinal or ordinal
//! form.
//!
//! Supported range: |n| < 10^24 (up to "trilljard"). Larger magnitudes are
//! returned as plain digits.

use crate::lang::number::Number;
use crate::lang::tables::{
    DigitTable, DIGITS_GENITIVE, DIGITS_NOMINATIVE, SCALES_GENITIVE, SCALES_NOMINATIVE,
};

/// Word placed before negative numbers
const MINUS_WORD: &str = "miinus";

/// Decimal separator word
const DECIMAL_WORD: &str = "koma";

/// Generic ordinal ending appended to the genitive form
const ORDINAL_SUFFIX: char = 's';

/// The generic "+s" rule gets the first three ordinals wrong
const IRREGULAR_ORDINALS: [(&str, &str); 3] = [
    ("ühes", "esimene"),
    ("kahes", "teine"),
    ("kolmes", "kolmas"),
];

/// Pronunciation mode: which word tables to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Cardinal,
    Ordinal,
}

impl Mode {
    fn digits(self) -> &'static DigitTable {
        match self {
            Mode::Cardinal => &DIGITS_NOMINATIVE,
            Mode::Ordinal => &DIGITS_GENITIVE,
        }
    }

    fn scales(self) -> &'static [&'static str; 8] {
        match self {
            Mode::Cardinal => &SCALES_NOMINATIVE,
            Mode::Ordinal => &SCALES_GENITIVE,
        }
    }
}

/// Number pronouncer
pub struct NumberPronouncer;

impl NumberPronouncer {
    /// Exclusive upper bound on the magnitude that gets spelled out
    pub const MAX_MAGNITUDE: u128 = 1_000_000_000_000_000_000_000_000;

    /// Spell out a number as cardinal words
    ///
    /// # Arguments
    /// - `num`: integer or float
    /// - `places`: number of decimal digits to speak for non-integers
    ///
    /// # Example
    /// ```
    /// # use eesti_core::lang::NumberPronouncer;
    /// assert_eq!(NumberPronouncer::pronounce(5.2, 1), "viis koma kaks");
    /// assert_eq!(NumberPronouncer::pronounce(-10, 2), "miinus kümme");
    /// ```
    pub fn pronounce(num: impl Into<Number>, places: usize) -> String {
        Self::pronounce_impl(num.into(), places, Mode::Cardinal)
    }

    /// Spell out a number as an ordinal ("kolmas", "kahe tuhandes")
    pub fn pronounce_ordinal(num: impl Into<Number>) -> String {
        Self::pronounce_impl(num.into(), 2, Mode::Ordinal)
    }

    fn pronounce_impl(num: Number, places: usize, mode: Mode) -> String {
        if let Number::Float(f) = num {
            if !f.is_finite() {
                return f.to_string();
            }
        }

        if Self::out_of_range(&num) {
            tracing::debug!("Number {} out of pronounceable range, using digits", num);
            return num.to_string();
        }

        if num.is_zero() {
            let zero = mode.digits().zero();
            return match mode {
                Mode::Cardinal => zero.to_string(),
                Mode::Ordinal => format!("{}{}", zero, ORDINAL_SUFFIX),
            };
        }

        if num.is_negative() {
            return format!(
                "{} {}",
                MINUS_WORD,
                Self::pronounce_impl(num.abs(), places, mode)
            );
        }

        match num {
            Number::Int(n) => Self::pronounce_integer(n, mode),
            Number::Float(f) if num.is_integral() => Self::pronounce_integer(f as i128, mode),
            Number::Float(f) => Self::pronounce_decimal(f, places, mode),
        }
    }

    fn out_of_range(num: &Number) -> bool {
        match *num {
            Number::Int(n) => n.unsigned_abs() >= Self::MAX_MAGNITUDE,
            Number::Float(f) => f.abs() >= Self::MAX_MAGNITUDE as f64,
        }
    }

    fn pronounce_integer(n: i128, mode: Mode) -> String {
        let text = Self::whole_number(n, mode);
        match mode {
            Mode::Cardinal => text,
            Mode::Ordinal => {
                Self::apply_irregular_ordinals(format!("{}{}", text, ORDINAL_SUFFIX))
            }
        }
    }

    /// Integer part, then "koma" and one word per decimal digit
    fn pronounce_decimal(num: f64, places: usize, mode: Mode) -> String {
        let digits = mode.digits();
        let whole = num.floor();
        let fraction = num - whole;

        let mut result = if whole == 0.0 {
            digits.zero().to_string()
        } else {
            Self::whole_number(whole as i128, mode)
        };

        if places > 0 {
            result.push(' ');
            result.push_str(DECIMAL_WORD);

            // Scale rather than slice the string so float noise behaves
            // the same for every place count
            let mut place = 10.0_f64;
            for _ in 0..places {
                let digit = ((fraction * place).floor() % 10.0) as u32;
                result.push(' ');
                result.push_str(digits.get(digit).unwrap_or_default());
                place *= 10.0;
            }
        }

        result
    }

    /// Spell a positive integer, most significant triplet first
    fn whole_number(n: i128, mode: Mode) -> String {
        let mut segments: Vec<String> = Vec::new();
        let mut remaining = n.unsigned_abs();
        let mut scale_level = 0usize;

        while remaining > 0 {
            let triplet = (remaining % 1000) as u32;
            if let Some(segment) = Self::scaled_triplet(triplet, scale_level, mode) {
                segments.push(segment);
            }
            remaining /= 1000;
            scale_level += 1;
        }

        segments.reverse();
        segments.join(" ")
    }

    /// One triplet with its scale word, or None for an empty triplet
    fn scaled_triplet(triplet: u32, scale_level: usize, mode: Mode) -> Option<String> {
        let digits = mode.digits();
        let scales = mode.scales();

        match (triplet, scale_level) {
            (0, _) => None,
            (1, 0) => Some(digits.one().to_string()),
            // "tuhat", never "üks tuhat"
            (1, 1) => Some(scales[1].to_string()),
            (1, level) => Some(format!("{} {}", digits.one(), scales[level])),
            (_, 0) => Some(Self::triplet(triplet, digits)),
            (_, 1) => Some(format!("{} {}", Self::triplet(triplet, digits), scales[1])),
            (_, level) => Some(format!(
                "{} {}it",
                Self::triplet(triplet, digits),
                scales[level]
            )),
        }
    }

    /// Spell 1..=999: "kolmsada", "kakskümmend seitse"
    fn triplet(n: u32, digits: &DigitTable) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(3);

        let hundreds = n / 100;
        if hundreds > 0 {
            parts.push(format!(
                "{}{}",
                digits.get(hundreds).unwrap_or_default(),
                digits.hundred()
            ));
        }

        let rest = n % 100;
        match rest {
            0 => {}
            1..=20 => parts.push(digits.get(rest).unwrap_or_default().to_string()),
            _ => {
                let ones = rest % 10;
                parts.push(digits.get(rest - ones).unwrap_or_default().to_string());
                if ones > 0 {
                    parts.push(digits.get(ones).unwrap_or_default().to_string());
                }
            }
        }

        parts.join(" ")
    }

    /// Replace a regular "+s" ending on the last word with its irregular form
    fn apply_irregular_ordinals(text: String) -> String {
        let (head, last) = match text.rsplit_once(' ') {
            Some((head, last)) => (Some(head), last),
            None => (None, text.as_str()),
        };

        let replacement = IRREGULAR_ORDINALS
            .iter()
            .find(|(regular, _)| *regular == last)
            .map(|(_, irregular)| *irregular);

        match (replacement, head) {
            (Some(irregular), Some(head)) => format!("{} {}", head, irregular),
            (Some(irregular), None) => irregular.to_string(),
            (None, _) => text,
        }
    }
}
