//! The address book collection.

pub mod address_book;

pub use address_book::{AddressBook, Iter};
