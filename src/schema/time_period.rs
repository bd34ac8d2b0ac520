//! Time period values as authored in the config ("0s", "300ms", "1min30s")
//!
//! Periods are stored with millisecond resolution. A value is one or more
//! `<integer><unit>` terms; units are ms, s, min, h and d.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimePeriod(u64);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TimePeriodError {
    #[error("empty time period")]
    Empty,
    #[error("'{0}' has no time unit; expected e.g. '30s' or '500ms'")]
    MissingUnit(String),
    #[error("invalid number in time period '{0}'")]
    InvalidNumber(String),
    #[error("unknown time unit '{0}'; expected one of ms, s, min, h, d")]
    UnknownUnit(String),
    #[error("time period '{0}' is out of range")]
    OutOfRange(String),
}

impl TimePeriod {
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    pub const fn as_millis(&self) -> u64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

fn unit_factor(unit: &str) -> Option<u64> {
    match unit {
        "ms" => Some(1),
        "s" => Some(1_000),
        "min" => Some(60_000),
        "h" => Some(3_600_000),
        "d" => Some(86_400_000),
        _ => None,
    }
}

impl FromStr for TimePeriod {
    type Err = TimePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(TimePeriodError::Empty);
        }

        let mut total: u64 = 0;
        let mut rest = input;
        while !rest.is_empty() {
            let digits_end = rest
                .find(|c: char| !c.is_ascii_digit())
                .ok_or_else(|| TimePeriodError::MissingUnit(input.to_string()))?;
            if digits_end == 0 {
                return Err(TimePeriodError::InvalidNumber(input.to_string()));
            }
            let value: u64 = rest[..digits_end]
                .parse()
                .map_err(|_| TimePeriodError::InvalidNumber(input.to_string()))?;

            let unit_end = rest[digits_end..]
                .find(|c: char| c.is_ascii_digit())
                .map(|i| digits_end + i)
                .unwrap_or(rest.len());
            let factor = unit_factor(&rest[digits_end..unit_end])
                .ok_or_else(|| TimePeriodError::UnknownUnit(rest[digits_end..unit_end].to_string()))?;

            total = value
                .checked_mul(factor)
                .and_then(|ms| total.checked_add(ms))
                .ok_or_else(|| TimePeriodError::OutOfRange(input.to_string()))?;
            rest = &rest[unit_end..];
        }
        Ok(Self(total))
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 1_000 == 0 {
            write!(f, "{}s", self.0 / 1_000)
        } else {
            write!(f, "{}ms", self.0)
        }
    }
}

impl<'de> Deserialize<'de> for TimePeriod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
