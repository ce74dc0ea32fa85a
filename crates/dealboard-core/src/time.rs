//! Time-of-day parsing, formatting, and range containment.
//!
//! The upstream feed mixes two textual forms: 12-hour with a trailing
//! meridiem ("3:00pm", "9:30AM") and 24-hour ("15:00", "3:00"). Both are
//! normalized into minutes since midnight.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for unparseable time text. Carries the original input so the
/// caller can surface it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time format: {input}. Expected format: 'H:MMam/pm' (e.g. '3:00pm') or 'HH:MM' (e.g. '15:00')")]
pub struct TimeParseError {
    /// The offending input text, as received.
    pub input: String,
}

impl TimeParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

/// Matches the hour/minute body of either time form, after any meridiem
/// suffix has been split off.
fn clock_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap())
}

/// Time of day represented as hour and minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    /// Hour (0-23).
    pub hour: u8,
    /// Minute (0-59).
    pub minute: u8,
}

impl TimeOfDay {
    /// Creates a new TimeOfDay.
    ///
    /// # Panics
    /// Panics if hour >= 24 or minute >= 60.
    pub fn new(hour: u8, minute: u8) -> Self {
        assert!(hour < 24, "hour must be 0-23");
        assert!(minute < 60, "minute must be 0-59");
        Self { hour, minute }
    }

    /// Parses time text in either accepted form.
    ///
    /// Disambiguation: if the case-folded text contains "am" or "pm"
    /// anywhere, it is parsed as 12-hour; otherwise as 24-hour (so
    /// "3:00" means 03:00).
    pub fn parse(text: &str) -> Result<Self, TimeParseError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TimeParseError::new(text));
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.contains("am") || lower.contains("pm") {
            Self::parse_twelve_hour(&lower).ok_or_else(|| TimeParseError::new(text))
        } else {
            Self::parse_twenty_four_hour(&lower).ok_or_else(|| TimeParseError::new(text))
        }
    }

    /// 12-hour form: "h:mm" followed immediately by "am" or "pm".
    fn parse_twelve_hour(lower: &str) -> Option<Self> {
        let body = lower.strip_suffix("am").or_else(|| lower.strip_suffix("pm"))?;
        let is_pm = lower.ends_with("pm");

        let (hour, minute) = split_clock(body)?;
        if !(1..=12).contains(&hour) {
            return None;
        }

        // 12am is midnight, 12pm is noon.
        let hour = match (hour, is_pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        };
        Some(Self { hour, minute })
    }

    /// 24-hour form: "H:MM" or "HH:MM".
    fn parse_twenty_four_hour(lower: &str) -> Option<Self> {
        let (hour, minute) = split_clock(lower)?;
        if hour > 23 {
            return None;
        }
        Some(Self { hour, minute })
    }

    /// Converts to minutes since midnight, in [0, 1439].
    pub fn to_minutes(self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    /// Converts minutes since midnight back to a TimeOfDay. Exact inverse
    /// of [`to_minutes`](Self::to_minutes).
    ///
    /// # Panics
    /// Panics if minutes > 1439.
    pub fn from_minutes(minutes: u16) -> Self {
        Self::new((minutes / 60) as u8, (minutes % 60) as u8)
    }

    /// Renders as "h:mma": no leading zero on the hour, zero-padded
    /// minute, lower-case meridiem with no space (e.g. "3:00pm").
    /// Round-trips through [`parse`](Self::parse).
    pub fn format_twelve_hour(self) -> String {
        let meridiem = if self.hour < 12 { "am" } else { "pm" };
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02}{}", hour, self.minute, meridiem)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl PartialOrd for TimeOfDay {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeOfDay {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_minutes().cmp(&other.to_minutes())
    }
}

fn split_clock(body: &str) -> Option<(u8, u8)> {
    let caps = clock_pattern().captures(body)?;
    let hour: u8 = caps[1].parse().ok()?;
    let minute: u8 = caps[2].parse().ok()?;
    if minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// A time range with start and end times.
///
/// Supports wraparound ranges where end < start (e.g. 10pm-2am).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Start time of the range.
    pub start: TimeOfDay,
    /// End time of the range.
    pub end: TimeOfDay,
}

impl TimeRange {
    /// Creates a new time range.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Returns true if this range crosses midnight.
    pub fn is_overnight(&self) -> bool {
        self.end < self.start
    }

    /// Checks if a given time falls within this range, inclusive at both
    /// ends. This is the single containment rule shared by restaurant-open
    /// checks and deal-window checks.
    pub fn contains(&self, time: TimeOfDay) -> bool {
        if self.is_overnight() {
            // 22:00-02:00 contains times >= 22:00 or <= 02:00
            time >= self.start || time <= self.end
        } else {
            time >= self.start && time <= self.end
        }
    }
}
