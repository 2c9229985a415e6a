//! Domain value objects and types.
//!
//! This module contains the validated fields of a contact: its name, phone
//! numbers and birthday. Each value object validates at construction time,
//! so an invalid value can never be represented in a record.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, LeapDayPolicy};
pub use errors::ValidationError;
pub use field::{Field, FieldKind, FieldValue};
pub use name::Name;
pub use phone::Phone;
