//! Eesti Core
//!
//! Estonian number, time and text formatting for a voice assistant

#![warn(rust_2018_idioms)]

pub mod lang;
pub mod config;
pub mod error;

// Re-export key types
pub use config::{FormatConfig, NumberConfig};
pub use error::{EestiError, EestiResult};
pub use lang::{EstonianFormatter, Number};

/// Spoken cardinal form, e.g. `pronounce_number(5.2, 2) == "viis koma kaks null"`
pub fn pronounce_number(num: impl Into<Number>, places: usize) -> String {
    lang::NumberPronouncer::pronounce(num, places)
}

/// Spoken ordinal form, e.g. `pronounce_ordinal(3) == "kolmas"`
pub fn pronounce_ordinal(num: impl Into<Number>) -> String {
    lang::NumberPronouncer::pronounce_ordinal(num)
}

pub fn nice_number(number: f64, speech: bool, denominators: &[u32]) -> String {
    lang::FractionFormatter::nice_number(number, speech, denominators)
}

pub fn nice_time<T: chrono::Timelike>(
    dt: &T,
    speech: bool,
    use_24hour: bool,
    use_ampm: bool,
) -> String {
    lang::TimeFormatter::nice_time(dt, speech, use_24hour, use_ampm)
}

/// First number in `text`, or `None`
pub fn extract_number(text: &str) -> Option<Number> {
    lang::NumberExtractor::extract_number(text)
}

pub fn normalize(text: &str) -> String {
    lang::NumberExtractor::normalize(text)
}

pub fn nice_response(text: &str) -> String {
    lang::ResponseNormalizer::nice_response(text)
}

/// Initialise logging
///
/// Only active with `--features debug-logs`; the filter comes from
/// `EESTI_LOG` (default `warn`).
///
/// Safe to call more than once.
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("EESTI_LOG")
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // try_init: a second call finds the subscriber already set
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .try_init();
    }
}
