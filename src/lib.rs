//! Contact Book - an in-memory contact directory.
//!
//! This library models a contact's name, phone numbers and birthday,
//! validates each field on construction, and keeps contacts in a
//! name-keyed address book.
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects (name, phone, birthday)
//! - **models**: The contact record aggregate
//! - **book**: The address book collection
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::AddressBook;
pub use config::Config;
pub use domain::{
    Birthday, Field, FieldKind, FieldValue, LeapDayPolicy, Name, Phone, ValidationError,
};
pub use error::{ConfigError, RecordError};
pub use models::Record;
