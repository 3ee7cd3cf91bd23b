//! Estonian language module
//!
//! Numbers and times to spoken Estonian, and number words back to digits

pub mod tables;
pub mod number;
pub mod pronounce;
pub mod fraction;
pub mod time;
pub mod parse;
pub mod response;
pub mod engine;

pub use number::Number;
pub use tables::{GrammaticalCase, WordForm};
pub use pronounce::NumberPronouncer;
pub use fraction::{FractionFormatter, MixedFraction};
pub use time::{TimeFormatter, TimeStyle};
pub use parse::NumberExtractor;
pub use response::ResponseNormalizer;
pub use engine::EstonianFormatter;
