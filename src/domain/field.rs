//! The capability shared by every validated contact field.

use super::birthday::Birthday;
use super::errors::ValidationError;
use super::name::Name;
use super::phone::Phone;
use std::fmt;

/// The kinds of validated field a contact carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Phone,
    Birthday,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Birthday => "birthday",
        };
        f.write_str(label)
    }
}

/// A single validated scalar with a textual form.
///
/// Implementors validate in [`Field::parse`] and never hold an invalid
/// value afterwards. `Display` must render exactly [`Field::as_str`].
pub trait Field: fmt::Display + Sized {
    /// Which kind of field this is.
    const KIND: FieldKind;

    /// Validate `raw` and wrap it.
    fn parse(raw: impl Into<String>) -> Result<Self, ValidationError>;

    /// The stored textual value.
    fn as_str(&self) -> &str;
}

/// Any one of the validated fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Name(Name),
    Phone(Phone),
    Birthday(Birthday),
}

impl FieldValue {
    /// Validate `raw` as a field of the given kind.
    ///
    /// # Example
    ///
    /// ```
    /// use contact_book::domain::{FieldKind, FieldValue};
    ///
    /// let value = FieldValue::parse(FieldKind::Phone, "0671234567").unwrap();
    /// assert_eq!(value.kind(), FieldKind::Phone);
    /// assert!(FieldValue::parse(FieldKind::Birthday, "not a date").is_err());
    /// ```
    pub fn parse(kind: FieldKind, raw: impl Into<String>) -> Result<Self, ValidationError> {
        match kind {
            FieldKind::Name => Name::parse(raw).map(Self::Name),
            FieldKind::Phone => Phone::parse(raw).map(Self::Phone),
            FieldKind::Birthday => Birthday::parse(raw).map(Self::Birthday),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Name(_) => Name::KIND,
            Self::Phone(_) => Phone::KIND,
            Self::Birthday(_) => Birthday::KIND,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Name(name) => name.as_str(),
            Self::Phone(phone) => phone.as_str(),
            Self::Birthday(birthday) => birthday.as_str(),
        }
    }
}

impl From<Name> for FieldValue {
    fn from(name: Name) -> Self {
        Self::Name(name)
    }
}

impl From<Phone> for FieldValue {
    fn from(phone: Phone) -> Self {
        Self::Phone(phone)
    }
}

impl From<Birthday> for FieldValue {
    fn from(birthday: Birthday) -> Self {
        Self::Birthday(birthday)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
