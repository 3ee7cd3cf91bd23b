//! Fraction formatter
//!
//! Renders floats as mixed fractions: "4 ja pool" for speech, "4 1/2" for
//! display.

use crate::lang::tables::fraction_name;

/// Accepted distance between `fraction * denominator` and an integer
const FRACTION_TOLERANCE: f64 = 0.01;

/// Denominators tried when the caller passes none
pub const DEFAULT_DENOMINATORS: std::ops::RangeInclusive<u32> = 1..=20;

/// Plural ending for fraction names ("kolmandikku")
const FRACTION_PLURAL_SUFFIX: &str = "ku";

/// Conjunction between whole part and fraction
const AND_WORD: &str = "ja";

/// A number split as `whole + numerator / denominator`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixedFraction {
    pub whole: i128,
    pub numerator: u32,
    pub denominator: u32,
}

/// Fraction formatter
pub struct FractionFormatter;

impl FractionFormatter {
    /// Approximate `number` as a mixed fraction
    ///
    /// Whole numbers come back as `n 0/1`. Otherwise the first denominator
    /// that lands within tolerance wins; `None` if none does.
    pub fn convert_to_mixed_fraction(number: f64, denominators: &[u32]) -> Option<MixedFraction> {
        if !number.is_finite() || number.abs() >= i128::MAX as f64 {
            return None;
        }

        let whole = number.trunc();
        if whole == number {
            return Some(MixedFraction {
                whole: whole as i128,
                numerator: 0,
                denominator: 1,
            });
        }

        let fraction = (number - whole).abs();
        let defaults: Vec<u32>;
        let candidates = if denominators.is_empty() {
            defaults = DEFAULT_DENOMINATORS.collect();
            &defaults[..]
        } else {
            denominators
        };

        candidates.iter().find_map(|&denominator| {
            let numerator = fraction * denominator as f64;
            if (numerator - numerator.round()).abs() < FRACTION_TOLERANCE {
                Some(MixedFraction {
                    whole: whole as i128,
                    numerator: numerator.round() as u32,
                    denominator,
                })
            } else {
                None
            }
        })
    }

    /// Format a float for speech or display
    ///
    /// # Arguments
    /// - `number`: value to format
    /// - `speech`: spoken form ("1 ja 3 neljandikku") or display form ("1 3/4")
    /// - `denominators`: candidates to try; empty means 1..=20
    ///
    /// Falls back to a 3-decimal rendering with a decimal comma when no
    /// denominator fits.
    pub fn nice_number(number: f64, speech: bool, denominators: &[u32]) -> String {
        if number.is_finite() && number.abs() >= i128::MAX as f64 {
            return format!("{:.0}", number.trunc());
        }

        let Some(mixed) = Self::convert_to_mixed_fraction(number, denominators) else {
            tracing::debug!("No fraction fits {}, using decimal form", number);
            return Self::decimal_fallback(number);
        };

        let MixedFraction {
            whole,
            numerator,
            denominator,
        } = mixed;

        if numerator == 0 {
            return whole.to_string();
        }

        if !speech {
            return format!("{} {}/{}", whole, numerator, denominator);
        }

        let Some(name) = fraction_name(denominator) else {
            tracing::debug!("Denominator {} has no spoken name", denominator);
            return Self::decimal_fallback(number);
        };

        let fraction = match (numerator, denominator) {
            (1, 2) => name.to_string(),
            (1, _) => format!("1 {}", name),
            _ => format!("{} {}{}", numerator, name, FRACTION_PLURAL_SUFFIX),
        };

        if whole == 0 {
            fraction
        } else {
            format!("{} {} {}", whole, AND_WORD, fraction)
        }
    }

    /// "1,436": three decimals, trailing zeros dropped, decimal comma
    fn decimal_fallback(number: f64) -> String {
        let rounded = (number * 1000.0).round() / 1000.0;
        rounded.to_string().replace('.', ",")
    }
}
