//! Record model representing one contact in the address book.

use crate::domain::{Birthday, FieldValue, LeapDayPolicy, Name, Phone, ValidationError};
use crate::error::{RecordError, RecordResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: one name, an optional birthday and any number of phones.
///
/// Phones keep their insertion order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,

    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a new record.
    ///
    /// A `None` or empty `birthday` leaves the birthday unset.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` for an empty name and
    /// `ValidationError::InvalidBirthday` for a malformed birthday.
    ///
    /// # Example
    ///
    /// ```
    /// use contact_book::Record;
    ///
    /// let mut record = Record::new("John", Some("1990-05-15")).unwrap();
    /// record.add_phone("0671234567").unwrap();
    /// assert_eq!(record.to_string(), "Contact name: John, phones: 0671234567");
    /// ```
    pub fn new(name: impl Into<String>, birthday: Option<&str>) -> Result<Self, ValidationError> {
        let name = Name::new(name)?;
        let birthday = match birthday {
            Some(raw) if !raw.is_empty() => Some(Birthday::new(raw)?),
            _ => None,
        };

        Ok(Self {
            name,
            birthday,
            phones: Vec::new(),
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Every field of the record: name, then birthday if set, then phones.
    pub fn fields(&self) -> Vec<FieldValue> {
        let mut fields = Vec::with_capacity(2 + self.phones.len());
        fields.push(FieldValue::from(self.name.clone()));
        if let Some(birthday) = &self.birthday {
            fields.push(FieldValue::from(birthday.clone()));
        }
        fields.extend(self.phones.iter().cloned().map(FieldValue::from));
        fields
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        tracing::debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `phone`. Absent numbers are ignored.
    pub fn remove_phone(&mut self, phone: &str) {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        tracing::debug!(
            contact = %self.name,
            phone,
            removed = before - self.phones.len(),
            "Removed phone"
        );
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// The replacement is validated like any other phone.
    ///
    /// # Errors
    ///
    /// - `RecordError::PhoneNotFound` if no phone equals `old`
    /// - `RecordError::Validation` if `new` is not a valid phone; the record
    ///   is left unchanged
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> RecordResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;

        let replacement = Phone::new(new)?;
        tracing::debug!(
            contact = %self.name,
            old,
            new = %replacement,
            "Editing phone"
        );
        self.phones[index] = replacement;
        Ok(())
    }

    /// The first phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Days from today until the next birthday, or `-1` without a birthday.
    ///
    /// Uses the local calendar date and the default leap-day policy.
    pub fn days_to_birthday(&self) -> i64 {
        let today = Local::now().date_naive();
        self.days_to_birthday_on(today, LeapDayPolicy::default())
            .unwrap_or(-1)
    }

    /// Days from `today` until the next birthday.
    ///
    /// Returns `None` when no birthday is set. A birthday falling on `today`
    /// yields `Some(0)`.
    pub fn days_to_birthday_on(&self, today: NaiveDate, policy: LeapDayPolicy) -> Option<i64> {
        let next = self.birthday.as_ref()?.next_occurrence(today, policy)?;
        Some((next - today).num_days())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}
