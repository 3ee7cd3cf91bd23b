//! Time-of-day formatter
//!
//! "viis kolmkümmend" for speech, "05:30" for display.

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::lang::pronounce::NumberPronouncer;

const MIDNIGHT: &str = "kesköö";
const NOON: &str = "keskpäev";

/// Spoken before single-digit minutes ("null kaks")
const ZERO_WORD: &str = "null";

const AFTERNOON: &str = "pärast lõunat";
const EVENING: &str = "õhtul";
const NIGHT: &str = "öösel";
const MORNING: &str = "hommikul";

/// How a time should be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeStyle {
    /// Spoken words instead of digits
    pub speech: bool,
    /// 24-hour clock
    pub use_24hour: bool,
    /// AM/PM marker (display) or period-of-day word (speech); ignored for 24h
    pub use_ampm: bool,
}

impl Default for TimeStyle {
    fn default() -> Self {
        Self {
            speech: true,
            use_24hour: false,
            use_ampm: false,
        }
    }
}

/// Time formatter
pub struct TimeFormatter;

impl TimeFormatter {
    /// Format a time of day
    ///
    /// # Example
    /// ```
    /// # use chrono::NaiveTime;
    /// # use eesti_core::lang::TimeFormatter;
    /// let t = NaiveTime::from_hms_opt(13, 2, 0).unwrap();
    /// assert_eq!(TimeFormatter::nice_time(&t, true, true, false), "kolmteist null kaks");
    /// ```
    pub fn nice_time<T: Timelike>(
        dt: &T,
        speech: bool,
        use_24hour: bool,
        use_ampm: bool,
    ) -> String {
        if !speech {
            return Self::display(dt, use_24hour, use_ampm);
        }

        if use_24hour {
            // am/pm has no meaning here
            let mut speak = NumberPronouncer::pronounce(dt.hour(), 2);
            Self::push_minutes(&mut speak, dt.minute());
            return speak;
        }

        match (dt.hour(), dt.minute()) {
            (0, 0) => return MIDNIGHT.to_string(),
            (12, 0) => return NOON.to_string(),
            _ => {}
        }

        let (_, hour12) = dt.hour12();
        let mut speak = NumberPronouncer::pronounce(hour12, 2);
        Self::push_minutes(&mut speak, dt.minute());

        if use_ampm {
            speak.push(' ');
            speak.push_str(Self::period_of_day(dt.hour()));
        }

        speak
    }

    /// Format using a [`TimeStyle`]
    pub fn nice_time_with<T: Timelike>(dt: &T, style: TimeStyle) -> String {
        Self::nice_time(dt, style.speech, style.use_24hour, style.use_ampm)
    }

    /// "13:22", "01:22", "01:22 PM"
    fn display<T: Timelike>(dt: &T, use_24hour: bool, use_ampm: bool) -> String {
        if use_24hour {
            return format!("{:02}:{:02}", dt.hour(), dt.minute());
        }

        let (is_pm, hour12) = dt.hour12();
        if use_ampm {
            let marker = if is_pm { "PM" } else { "AM" };
            format!("{:02}:{:02} {}", hour12, dt.minute(), marker)
        } else {
            format!("{:02}:{:02}", hour12, dt.minute())
        }
    }

    fn push_minutes(speak: &mut String, minute: u32) {
        if minute == 0 {
            return;
        }
        if minute < 10 {
            speak.push(' ');
            speak.push_str(ZERO_WORD);
        }
        speak.push(' ');
        speak.push_str(&NumberPronouncer::pronounce(minute, 2));
    }

    /// Period-of-day word for a 24h hour
    fn period_of_day(hour: u32) -> &'static str {
        match hour {
            12..=17 => AFTERNOON,
            18..=21 => EVENING,
            0..=2 | 22..=23 => NIGHT,
            _ => MORNING,
        }
    }
}
