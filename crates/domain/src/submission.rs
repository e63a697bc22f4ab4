//! Raw submissions and the validator that turns them into [`Event`]s.
//!
//! [`RawSubmission`] is the loosely-typed shape a submission form collects.
//! The only way to obtain an [`Event`] from it is [`RawSubmission::validate`],
//! which reports every violated constraint at once.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Field, ValidationErrors};
use crate::event::{Category, Event, EventTime};

const NAME_MIN: usize = 5;
const DESCRIPTION_MIN: usize = 20;
const LOCATION_MIN: usize = 5;
const ADDRESS_MIN: usize = 5;
const ORGANIZER_MIN: usize = 3;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email pattern is valid")
});

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{8,15}$").expect("phone pattern is valid"));

/// An unvalidated event submission.
///
/// Every field holds whatever JSON value the client sent, so that a missing
/// or wrongly-typed value surfaces as a field error rather than as a
/// deserialization failure that hides every other violation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSubmission {
    pub name: Value,
    pub description: Value,
    /// `YYYY-MM-DD`, or an RFC 3339 timestamp reduced to its UTC date.
    pub date: Value,
    pub time: Value,
    pub location: Value,
    pub address: Value,
    pub organizer: Value,
    pub contact_email: Value,
    pub contact_phone: Value,
    pub category: Value,
    /// A string (what the form sends) or a JSON integer.
    pub capacity: Value,
    pub free: Value,
    pub featured: Value,
}

impl RawSubmission {
    /// Check every field constraint and build an [`Event`].
    ///
    /// `today` is the earliest accepted event date (a UTC calendar date, see
    /// [`crate::time::today`]).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] listing every violated constraint.
    pub fn validate(self, today: NaiveDate) -> Result<Event, ValidationErrors> {
        let mut v = Validator::default();

        let name = v.text(Field::Name, self.name, NAME_MIN);
        let description = v.text(Field::Description, self.description, DESCRIPTION_MIN);
        let date = v.date(self.date, today);
        let time = v.time(self.time);
        let location = v.text(Field::Location, self.location, LOCATION_MIN);
        let address = v.text(Field::Address, self.address, ADDRESS_MIN);
        let organizer = v.text(Field::Organizer, self.organizer, ORGANIZER_MIN);
        let contact_email = v.email(self.contact_email);
        let contact_phone = v.phone(self.contact_phone);
        let category = v.category(self.category);
        let capacity = v.capacity(self.capacity);
        let free = v.flag(Field::Free, self.free);
        let featured = v.flag(Field::Featured, self.featured);

        let (
            Some(name),
            Some(description),
            Some(date),
            Some(time),
            Some(location),
            Some(address),
            Some(organizer),
            Some(contact_email),
            Some(contact_phone),
            Some(category),
            Some(capacity),
            Some(free),
            Some(featured),
        ) = (
            name,
            description,
            date,
            time,
            location,
            address,
            organizer,
            contact_email,
            contact_phone,
            category,
            capacity,
            free,
            featured,
        )
        else {
            return Err(v.errors);
        };

        Ok(Event {
            name,
            description,
            date,
            time,
            location,
            address,
            organizer,
            contact_email,
            contact_phone,
            category,
            capacity,
            free,
            featured,
        })
    }
}

#[derive(Default)]
struct Validator {
    errors: ValidationErrors,
}

impl Validator {
    fn required(&mut self, field: Field, value: Value) -> Option<String> {
        match value {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Null | Value::String(_) => {
                self.errors.push(field, "is required");
                None
            }
            _ => {
                self.errors.push(field, "must be a string");
                None
            }
        }
    }

    fn text(&mut self, field: Field, value: Value, min: usize) -> Option<String> {
        let value = self.required(field, value)?;
        if value.chars().count() < min {
            self.errors
                .push(field, format!("must be at least {min} characters"));
            return None;
        }
        Some(value)
    }

    fn email(&mut self, value: Value) -> Option<String> {
        let value = self.required(Field::ContactEmail, value)?;
        // The pattern cannot express these without look-around.
        if !EMAIL.is_match(&value) || value.starts_with('.') || value.contains("..") {
            self.errors
                .push(Field::ContactEmail, "invalid email address");
            return None;
        }
        Some(value)
    }

    fn phone(&mut self, value: Value) -> Option<String> {
        let value = self.required(Field::ContactPhone, value)?;
        if !PHONE.is_match(&value) {
            self.errors
                .push(Field::ContactPhone, "invalid phone number");
            return None;
        }
        Some(value)
    }

    fn date(&mut self, value: Value, today: NaiveDate) -> Option<NaiveDate> {
        let value = self.required(Field::Date, value)?;
        let Some(date) = parse_date(&value) else {
            self.errors
                .push(Field::Date, "must be a valid date (YYYY-MM-DD)");
            return None;
        };
        if date < today {
            self.errors.push(Field::Date, "must not be in the past");
            return None;
        }
        Some(date)
    }

    fn time(&mut self, value: Value) -> Option<EventTime> {
        let value = self.required(Field::Time, value)?;
        match value.parse() {
            Ok(time) => Some(time),
            Err(_) => {
                self.errors.push(Field::Time, "invalid time format (HH:MM)");
                None
            }
        }
    }

    fn category(&mut self, value: Value) -> Option<Category> {
        let value = self.required(Field::Category, value)?;
        match value.parse() {
            Ok(category) => Some(category),
            Err(_) => {
                let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
                self.errors.push(
                    Field::Category,
                    format!("must be one of: {}", names.join(", ")),
                );
                None
            }
        }
    }

    fn capacity(&mut self, value: Value) -> Option<u32> {
        let parsed = match value {
            Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
            Value::String(ref text) if !text.trim().is_empty() => text.trim().parse::<u32>().ok(),
            Value::Null | Value::String(_) => {
                self.errors.push(Field::Capacity, "is required");
                return None;
            }
            _ => None,
        };

        match parsed {
            Some(n) if n > 0 => Some(n),
            _ => {
                self.errors
                    .push(Field::Capacity, "must be a positive whole number");
                None
            }
        }
    }

    /// Absent flags default to `false`.
    fn flag(&mut self, field: Field, value: Value) -> Option<bool> {
        match value {
            Value::Null => Some(false),
            Value::Bool(flag) => Some(flag),
            _ => {
                self.errors.push(field, "must be true or false");
                None
            }
        }
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.with_timezone(&Utc).date_naive())
        })
}
