//! Wall-clock times and inclusive time ranges.
//!
//! Schedules from the club backend carry times as zero-padded 24-hour
//! `HH:MM` strings and compare them lexicographically. [`ClockTime`] parses
//! that form into a minute-of-day so comparisons are numeric, while keeping
//! the same ordering the string form has.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{BookingError, Result};

/// A time of day with minute precision, `00:00` through `23:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    /// Build from hour and minute, rejecting values outside a single day.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self> {
        if hour >= 24 || minute >= 60 {
            return Err(BookingError::InvalidTime(format!(
                "{:02}:{:02} is outside 00:00-23:59",
                hour, minute
            )));
        }
        Ok(Self((hour * 60 + minute) as u16))
    }

    /// Parse a strict `HH:MM` string.
    ///
    /// Only the canonical form is accepted: exactly two hour digits, a colon,
    /// and two minute digits. `9:30`, `09:30:00` and `24:00` are all rejected.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || BookingError::InvalidTime(format!("'{}' is not HH:MM", s));

        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }
        let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(invalid());
        }

        let hour = u32::from((bytes[0] - b'0') * 10 + (bytes[1] - b'0'));
        let minute = u32::from((bytes[3] - b'0') * 10 + (bytes[4] - b'0'));
        Self::from_hm(hour, minute)
    }

    pub fn hour(self) -> u32 {
        u32::from(self.0 / 60)
    }

    pub fn minute(self) -> u32 {
        u32::from(self.0 % 60)
    }

    /// Minutes elapsed since midnight.
    pub fn minute_of_day(self) -> u16 {
        self.0
    }
}

impl FromStr for ClockTime {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = BookingError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// An inclusive `[st_time, et_time]` interval within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    pub st_time: ClockTime,
    pub et_time: ClockTime,
}

impl TimeRange {
    pub fn new(st_time: ClockTime, et_time: ClockTime) -> Self {
        Self { st_time, et_time }
    }

    /// Parse both ends from `HH:MM` strings.
    pub fn parse(st_time: &str, et_time: &str) -> Result<Self> {
        Ok(Self::new(ClockTime::parse(st_time)?, ClockTime::parse(et_time)?))
    }

    /// True when `time` lies within the range, both ends included.
    pub fn contains_time(&self, time: ClockTime) -> bool {
        self.st_time <= time && time <= self.et_time
    }

    /// True when `other` lies entirely inside this range.
    ///
    /// A range that only partially overlaps is not contained.
    pub fn contains_range(&self, other: &TimeRange) -> bool {
        other.st_time >= self.st_time && other.et_time <= self.et_time
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| BookingError::InvalidDate(format!("'{}': {}", s, e)))
}

