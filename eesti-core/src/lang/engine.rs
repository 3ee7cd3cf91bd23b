//! EstonianFormatter - entry point
//!
//! Bundles every formatter and parser behind one configured value.

use chrono::Timelike;

use crate::config::FormatConfig;
use crate::error::EestiResult;
use crate::lang::{
    FractionFormatter, Number, NumberExtractor, NumberPronouncer, ResponseNormalizer,
    TimeFormatter,
};

/// Configured Estonian formatter
#[derive(Debug, Clone, Default)]
pub struct EstonianFormatter {
    config: FormatConfig,
}

impl EstonianFormatter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    /// Build from the user configuration file (or defaults)
    pub fn from_config_file() -> EestiResult<Self> {
        Ok(Self::new(FormatConfig::load()?))
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: FormatConfig) {
        self.config = config;
    }

    /// Cardinal words with the configured decimal places
    pub fn pronounce_number(&self, num: impl Into<Number>) -> String {
        NumberPronouncer::pronounce(num, self.config.number.places)
    }

    pub fn pronounce_ordinal(&self, num: impl Into<Number>) -> String {
        NumberPronouncer::pronounce_ordinal(num)
    }

    /// Mixed-fraction form using the configured denominators
    pub fn nice_number(&self, number: f64) -> String {
        FractionFormatter::nice_number(
            number,
            self.config.number.speech,
            &self.config.number.denominators,
        )
    }

    pub fn nice_time<T: Timelike>(&self, dt: &T) -> String {
        TimeFormatter::nice_time_with(dt, self.config.time)
    }

    pub fn extract_number(&self, text: &str) -> Option<Number> {
        NumberExtractor::extract_number(text)
    }

    pub fn normalize(&self, text: &str) -> String {
        NumberExtractor::normalize(text)
    }

    pub fn nice_response(&self, text: &str) -> String {
        ResponseNormalizer::nice_response(text)
    }
}
