//! Event — a community activity record, the sole persisted entity.
//!
//! An [`Event`] can only be obtained by validating a [`RawSubmission`] or by
//! deserializing a record that passes the same field rules. Fields are
//! therefore private and exposed through accessors.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationErrors;
use crate::submission::RawSubmission;

/// A validated community event, as persisted.
///
/// Deserializing re-checks every field rule except the "not in the past"
/// date rule, so a hand-edited document holding an invalid record fails to
/// load instead of leaking that record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredEvent")]
pub struct Event {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) date: NaiveDate,
    pub(crate) time: EventTime,
    pub(crate) location: String,
    pub(crate) address: String,
    pub(crate) organizer: String,
    pub(crate) contact_email: String,
    pub(crate) contact_phone: String,
    pub(crate) category: Category,
    pub(crate) capacity: u32,
    pub(crate) free: bool,
    pub(crate) featured: bool,
}

/// On-disk shape of an [`Event`], before its field rules are re-checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredEvent {
    name: String,
    description: String,
    date: NaiveDate,
    time: EventTime,
    location: String,
    address: String,
    organizer: String,
    contact_email: String,
    contact_phone: String,
    category: Category,
    capacity: u32,
    #[serde(default)]
    free: bool,
    #[serde(default)]
    featured: bool,
}

impl TryFrom<StoredEvent> for Event {
    type Error = ValidationErrors;

    fn try_from(stored: StoredEvent) -> Result<Self, Self::Error> {
        let raw = RawSubmission {
            name: stored.name.into(),
            description: stored.description.into(),
            date: stored.date.format("%Y-%m-%d").to_string().into(),
            time: stored.time.to_string().into(),
            location: stored.location.into(),
            address: stored.address.into(),
            organizer: stored.organizer.into(),
            contact_email: stored.contact_email.into(),
            contact_phone: stored.contact_phone.into(),
            category: stored.category.as_str().into(),
            capacity: stored.capacity.into(),
            free: stored.free.into(),
            featured: stored.featured.into(),
        };
        // Stored events may legitimately be in the past.
        raw.validate(NaiveDate::MIN)
    }
}

impl Event {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn time(&self) -> EventTime {
        self.time
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub fn organizer(&self) -> &str {
        &self.organizer
    }

    #[must_use]
    pub fn contact_email(&self) -> &str {
        &self.contact_email
    }

    #[must_use]
    pub fn contact_phone(&self) -> &str {
        &self.contact_phone
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Whether attendance is free of charge.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.free
    }

    /// Whether the organizer asked for the event to be featured.
    ///
    /// This is a request only; approval happens elsewhere.
    #[must_use]
    pub fn is_featured(&self) -> bool {
        self.featured
    }
}

/// Fixed set of event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cultural,
    Sports,
    Educational,
    Social,
    Environmental,
    Health,
    Other,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 7] = [
        Self::Cultural,
        Self::Sports,
        Self::Educational,
        Self::Social,
        Self::Environmental,
        Self::Health,
        Self::Other,
    ];

    /// Canonical (stored) name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cultural => "cultural",
            Self::Sports => "sports",
            Self::Educational => "educational",
            Self::Social => "social",
            Self::Environmental => "environmental",
            Self::Health => "health",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category `{0}`")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Parse a category name, case-insensitively.
    ///
    /// The Spanish option values used by the submission form are accepted as
    /// aliases of the canonical names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cultural" => Ok(Self::Cultural),
            "sports" | "deportivo" => Ok(Self::Sports),
            "educational" | "educativo" => Ok(Self::Educational),
            "social" => Ok(Self::Social),
            "environmental" | "ambiental" => Ok(Self::Environmental),
            "health" | "salud" => Ok(Self::Health),
            "other" | "otro" => Ok(Self::Other),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// Time of day at minute precision, written as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventTime(NaiveTime);

impl EventTime {
    /// Build from an hour (0–23) and minute (0–59).
    #[must_use]
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    #[must_use]
    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    #[must_use]
    pub fn minute(self) -> u32 {
        self.0.minute()
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Returned when a string is not a valid `HH:MM` time of day.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time of day `{0}`, expected HH:MM")]
pub struct InvalidTime(pub String);

impl FromStr for EventTime {
    type Err = InvalidTime;

    /// Parse `H:MM` or `HH:MM` in 24-hour notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidTime(s.to_string());
        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        let digits = |part: &str, min: usize, max: usize| {
            (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !digits(hour, 1, 2) || !digits(minute, 2, 2) {
            return Err(invalid());
        }
        let hour = hour.parse().map_err(|_| invalid())?;
        let minute = minute.parse().map_err(|_| invalid())?;
        Self::from_hm(hour, minute).ok_or_else(invalid)
    }
}

impl Serialize for EventTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EventTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
