//! Name-keyed collection of contact records.

use crate::models::Record;
use std::collections::HashMap;

/// An in-memory address book.
///
/// Records are keyed by their name and iterate in insertion order.
/// Re-adding a name replaces the record but keeps its original position.
///
/// # Example
///
/// ```
/// use contact_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// book.add_record(Record::new("John", None).unwrap());
/// book.add_record(Record::new("Jane", None).unwrap());
///
/// let names: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
/// assert_eq!(names, ["John", "Jane"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, replacing any record with that name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_some() {
            tracing::debug!(name = %key, "Replaced record");
        } else {
            tracing::debug!(name = %key, "Added record");
            self.order.push(key);
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        let record = self.records.get(name);
        tracing::trace!(name, found = record.is_some(), "Record lookup");
        record
    }

    /// Look up a record by exact name for in-place updates.
    ///
    /// A record's name can't change through this reference, so the key
    /// stays in sync with the record.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record by name, handing it back if it was present.
    ///
    /// Deleting an absent name is a no-op.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name)?;
        self.order.retain(|key| key != name);
        tracing::debug!(name, "Deleted record");
        Some(removed)
    }

    /// Iterate over the records in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            keys: self.order.iter(),
            records: &self.records,
        }
    }

    /// Contact names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Borrowing iterator over an [`AddressBook`] in insertion order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    keys: std::slice::Iter<'a, String>,
    records: &'a HashMap<String, Record>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        self.records.get(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for AddressBook {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        let Self { mut records, order } = self;
        order
            .iter()
            .filter_map(|key| records.remove(key))
            .collect::<Vec<_>>()
            .into_iter()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        book.extend(iter);
        book
    }
}

impl Extend<Record> for AddressBook {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.add_record(record);
        }
    }
}
