//! End-to-end tests for the address book.
//!
//! These tests drive records through the public API the way a command
//! layer would: build, store, look up, update, iterate and delete.

use chrono::NaiveDate;
use contact_book::{AddressBook, LeapDayPolicy, Record, RecordError, ValidationError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();

    let mut john = Record::new("John", Some("2000-05-15")).unwrap();
    john.add_phone("1234567890").unwrap();
    john.add_phone("5555555555").unwrap();
    book.add_record(john);

    let mut jane = Record::new("Jane", None).unwrap();
    jane.add_phone("9876543210").unwrap();
    book.add_record(jane);

    book
}

#[test]
fn test_contact_lifecycle() {
    let mut book = sample_book();

    let john = book.find("John").expect("John should be stored");
    assert_eq!(
        john.to_string(),
        "Contact name: John, phones: 1234567890; 5555555555"
    );

    let john = book.find_mut("John").unwrap();
    john.edit_phone("1234567890", "1112223333").unwrap();
    assert_eq!(
        john.to_string(),
        "Contact name: John, phones: 1112223333; 5555555555"
    );
    assert_eq!(
        john.find_phone("5555555555").map(|p| p.as_str()),
        Some("5555555555")
    );

    book.delete("Jane");
    assert!(book.find("Jane").is_none());
    assert_eq!(book.len(), 1);
}

#[test]
fn test_find_round_trip_preserves_display() {
    let mut record = Record::new("Alice", Some("1995-11-02")).unwrap();
    record.add_phone("0501112233").unwrap();
    let expected = record.to_string();

    let mut book = AddressBook::new();
    book.add_record(record);

    assert_eq!(book.find("Alice").unwrap().to_string(), expected);
}

#[test]
fn test_delete_twice_is_noop() {
    let mut book = sample_book();

    assert!(book.delete("John").is_some());
    let names_after_first: Vec<String> = book.names().map(str::to_string).collect();

    assert!(book.delete("John").is_none());
    let names_after_second: Vec<String> = book.names().map(str::to_string).collect();

    assert_eq!(names_after_first, names_after_second);
}

#[test]
fn test_iteration_order_follows_insertion() {
    let mut book = AddressBook::new();
    for name in ["A", "B", "C"] {
        book.add_record(Record::new(name, None).unwrap());
    }

    let names: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);

    book.delete("B");
    let names: Vec<&str> = (&book).into_iter().map(|r| r.name().as_str()).collect();
    assert_eq!(names, vec!["A", "C"]);
}

#[test]
fn test_edit_phone_errors() {
    let mut record = Record::new("John", None).unwrap();
    record.add_phone("0671234567").unwrap();

    assert_eq!(
        record.edit_phone("0000000000", "0987654321"),
        Err(RecordError::PhoneNotFound("0000000000".to_string()))
    );
    assert_eq!(
        record.edit_phone("0671234567", "098765432a"),
        Err(RecordError::Validation(ValidationError::InvalidPhone(
            "098765432a".to_string()
        )))
    );

    record.edit_phone("0671234567", "0987654321").unwrap();
    assert!(record.find_phone("0987654321").is_some());
}

#[test]
fn test_birthday_countdown_with_fixed_clock() {
    let book = sample_book();
    let john = book.find("John").unwrap();
    let jane = book.find("Jane").unwrap();
    let policy = LeapDayPolicy::default();

    assert_eq!(john.days_to_birthday_on(date(2024, 5, 10), policy), Some(5));
    assert_eq!(john.days_to_birthday_on(date(2024, 5, 20), policy), Some(360));
    assert_eq!(jane.days_to_birthday_on(date(2024, 5, 10), policy), None);
    assert_eq!(jane.days_to_birthday(), -1);
}

#[test]
fn test_overwrite_replaces_record() {
    let mut book = sample_book();

    let mut new_john = Record::new("John", None).unwrap();
    new_john.add_phone("0000000000").unwrap();
    book.add_record(new_john);

    let john = book.find("John").unwrap();
    assert!(john.birthday().is_none());
    assert_eq!(john.to_string(), "Contact name: John, phones: 0000000000");

    let names: Vec<&str> = book.names().collect();
    assert_eq!(names, vec!["John", "Jane"]);
}

#[test]
fn test_invalid_input_never_enters_the_book() {
    assert_eq!(Record::new("", None), Err(ValidationError::InvalidName));
    assert!(matches!(
        Record::new("Bob", Some("2023-13-01")),
        Err(ValidationError::InvalidBirthday(_))
    ));

    let mut bob = Record::new("Bob", None).unwrap();
    assert!(bob.add_phone("067123456").is_err());
    assert!(bob.phones().is_empty());
}
