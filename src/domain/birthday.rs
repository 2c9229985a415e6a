//! Birthday value object and the leap-day policy used for countdowns.

use super::errors::ValidationError;
use super::field::{Field, FieldKind};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Format accepted for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// Where a 29 February birthday lands in a year without that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeapDayPolicy {
    /// Celebrate on 28 February.
    #[default]
    Feb28,

    /// Celebrate on 1 March.
    Mar1,
}

impl LeapDayPolicy {
    /// The substitute date for 29 February in a common year.
    fn substitute(self, year: i32) -> Option<NaiveDate> {
        match self {
            Self::Feb28 => NaiveDate::from_ymd_opt(year, 2, 28),
            Self::Mar1 => NaiveDate::from_ymd_opt(year, 3, 1),
        }
    }
}

impl FromStr for LeapDayPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "feb28" => Ok(Self::Feb28),
            "mar1" => Ok(Self::Mar1),
            other => Err(format!("expected `feb28` or `mar1`, got: {}", other)),
        }
    }
}

impl fmt::Display for LeapDayPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Feb28 => write!(f, "feb28"),
            Self::Mar1 => write!(f, "mar1"),
        }
    }
}

/// A contact's birthday.
///
/// The supplied `YYYY-MM-DD` text is the canonical value; the parsed date is
/// kept alongside it for countdown arithmetic.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("2000-05-15").unwrap();
/// assert_eq!(birthday.as_str(), "2000-05-15");
/// assert!(Birthday::new("2023-02-30").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating the format and the calendar date.
    ///
    /// # Validation Rules
    ///
    /// - Exactly `DDDD-DD-DD`: four-digit year, two-digit month and day
    /// - Month and day must form a real date (leap years included)
    /// - Year must be at least 1
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if any rule fails.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = birthday.into();

        match Self::parse_date(&raw) {
            Some(date) => Ok(Self { raw, date }),
            None => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    fn parse_date(raw: &str) -> Option<NaiveDate> {
        let bytes = raw.as_bytes();
        if bytes.len() != 10 {
            return None;
        }

        // chrono tolerates unpadded fields and signed years; the shape check doesn't
        let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
        if !shape_ok {
            return None;
        }

        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .ok()
            .filter(|date| date.year() >= 1)
    }

    /// Get the birthday as it was supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Get the parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// Returns `None` only when `year` is outside chrono's calendar range.
    pub fn anniversary_in(&self, year: i32, policy: LeapDayPolicy) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day())
            .or_else(|| policy.substitute(year))
    }

    /// The first anniversary falling on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate, policy: LeapDayPolicy) -> Option<NaiveDate> {
        let this_year = self.anniversary_in(today.year(), policy)?;
        if this_year < today {
            self.anniversary_in(today.year() + 1, policy)
        } else {
            Some(this_year)
        }
    }
}

impl Field for Birthday {
    const KIND: FieldKind = FieldKind::Birthday;

    fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(raw)
    }

    fn as_str(&self) -> &str {
        &self.raw
    }
}

// Serde support - serialize as string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
