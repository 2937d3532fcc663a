//! Relative durations as written in SeqN and FPrime time tags.
//!
//! Two textual forms are recognised:
//! - full: `[+-]DDDThh:mm:ss[.fff]`
//! - simplified: `[+-]hh:mm:ss[.fff]` or a bare second count `[+-]S[.fff]`

use std::fmt;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thiserror::Error;

static RELATIVE_FULL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<sign>[+-]?)(?P<days>\d{3})T(?P<hours>\d{2}):(?P<minutes>\d{2}):(?P<seconds>\d{2})(?P<fraction>\.\d+)?$",
    )
    .expect("full relative time pattern is valid")
});

static RELATIVE_SIMPLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<sign>[+-]?)(?:(?P<hours>\d{2}):(?P<minutes>\d{2}):(?P<seconds>\d{2})|(?P<total>\d+))(?P<fraction>\.\d+)?$",
    )
    .expect("simplified relative time pattern is valid")
});

const MS_PER_SECOND: u128 = 1_000;
const MS_PER_MINUTE: u128 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u128 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u128 = 24 * MS_PER_HOUR;

/// Shape a relative time string is validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeType {
    Relative,
    RelativeSimple,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("not a relative duration: {0:?}")]
    Malformed(String),
    #[error("duration component out of range: {0:?}")]
    OutOfRange(String),
}

/// Whether `text` matches the given relative time shape.
pub fn validate_time(text: &str, time_type: TimeType) -> bool {
    match time_type {
        TimeType::Relative => RELATIVE_FULL.is_match(text),
        TimeType::RelativeSimple => RELATIVE_SIMPLE.is_match(text),
    }
}

/// Signed duration split into non-negative components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Duration {
    pub is_negative: bool,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub milliseconds: u64,
}

impl Duration {
    /// Parse either textual form. Components are kept as written; see [`Duration::balance`].
    pub fn parse(text: &str) -> Result<Self, DurationError> {
        if let Some(captures) = RELATIVE_FULL.captures(text) {
            return Self::from_captures(text, &captures);
        }
        if let Some(captures) = RELATIVE_SIMPLE.captures(text) {
            return Self::from_captures(text, &captures);
        }
        Err(DurationError::Malformed(text.to_string()))
    }

    fn from_captures(text: &str, captures: &Captures<'_>) -> Result<Self, DurationError> {
        let number = |name: &str| -> Result<u64, DurationError> {
            match captures.name(name) {
                Some(value) => value
                    .as_str()
                    .parse()
                    .map_err(|_| DurationError::OutOfRange(text.to_string())),
                None => Ok(0),
            }
        };

        Ok(Duration {
            is_negative: captures.name("sign").map(|m| m.as_str()) == Some("-"),
            days: number("days")?,
            hours: number("hours")?,
            minutes: number("minutes")?,
            seconds: number("seconds")? + number("total")?,
            milliseconds: captures
                .name("fraction")
                .map(|m| fraction_to_millis(m.as_str()))
                .unwrap_or(0),
        })
    }

    pub fn total_milliseconds(&self) -> u128 {
        self.days as u128 * MS_PER_DAY
            + self.hours as u128 * MS_PER_HOUR
            + self.minutes as u128 * MS_PER_MINUTE
            + self.seconds as u128 * MS_PER_SECOND
            + self.milliseconds as u128
    }

    /// Carry overflowing components upwards (1000 ms, 60 s, 60 min, 24 h).
    pub fn balance(&self) -> Duration {
        let total = self.total_milliseconds();
        Duration {
            is_negative: self.is_negative,
            days: u64::try_from(total / MS_PER_DAY).unwrap_or(u64::MAX),
            hours: ((total % MS_PER_DAY) / MS_PER_HOUR) as u64,
            minutes: ((total % MS_PER_HOUR) / MS_PER_MINUTE) as u64,
            seconds: ((total % MS_PER_MINUTE) / MS_PER_SECOND) as u64,
            milliseconds: (total % MS_PER_SECOND) as u64,
        }
    }

    /// Component strings at their canonical widths.
    pub fn components(&self) -> DurationComponents {
        DurationComponents {
            is_negative: if self.is_negative { "-" } else { "" },
            days: if self.days != 0 {
                format!("{:03}", self.days)
            } else {
                String::new()
            },
            hours: format!("{:02}", self.hours),
            minutes: format!("{:02}", self.minutes),
            seconds: format!("{:02}", self.seconds),
            milliseconds: if self.milliseconds != 0 {
                format!(".{:03}", self.milliseconds)
            } else {
                String::new()
            },
        }
    }

    /// Balanced text that always carries milliseconds: `[-][DDDT]hh:mm:ss.mmm`.
    pub fn to_balanced_string(&self) -> String {
        let balanced = self.balance();
        let days = if balanced.days > 0 {
            format!("{:03}T", balanced.days)
        } else {
            String::new()
        };
        format!(
            "{}{}{:02}:{:02}:{:02}.{:03}",
            if balanced.is_negative { "-" } else { "" },
            days,
            balanced.hours,
            balanced.minutes,
            balanced.seconds,
            balanced.milliseconds
        )
    }
}

/// Balance a relative time string, returning `[-][DDDT]hh:mm:ss.mmm`.
pub fn balanced_duration(text: &str) -> Result<String, DurationError> {
    Duration::parse(text).map(|duration| duration.to_balanced_string())
}

/// Textual pieces of a [`Duration`]; empty strings mark omitted parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationComponents {
    pub is_negative: &'static str,
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub milliseconds: String,
}

impl fmt::Display for Duration {
    /// `[-][DDDT]hh:mm:ss[.mmm]`: days and milliseconds only when non-zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.components();
        let separator = if c.days.is_empty() { "" } else { "T" };
        write!(
            f,
            "{}{}{}{}:{}:{}{}",
            c.is_negative, c.days, separator, c.hours, c.minutes, c.seconds, c.milliseconds
        )
    }
}

/// `.5` is 500 ms, `.05` is 50 ms; digits past the third are dropped.
fn fraction_to_millis(fraction: &str) -> u64 {
    let digits: String = fraction
        .trim_start_matches('.')
        .chars()
        .chain(std::iter::repeat('0'))
        .take(3)
        .collect();
    digits.parse().unwrap_or(0)
}
