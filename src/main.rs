//! Contact Book - demonstration entry point
//!
//! Builds a small address book and prints every contact with its
//! birthday countdown.

use anyhow::Result;
use chrono::Local;
use contact_book::{AddressBook, Config, Record};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let fallback_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut book = AddressBook::new();

    let mut john = Record::new("John", Some("1990-05-15"))?;
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    book.add_record(john);

    let mut jane = Record::new("Jane", None)?;
    jane.add_phone("9876543210")?;
    book.add_record(jane);

    if let Some(john) = book.find_mut("John") {
        john.edit_phone("1234567890", "1112223333")?;
    }

    book.delete("Nobody");

    info!(contacts = book.len(), "Address book ready");

    let today = Local::now().date_naive();
    for record in &book {
        match record.days_to_birthday_on(today, config.leap_day_policy) {
            Some(days) => println!("{} (birthday in {} days)", record, days),
            None => println!("{}", record),
        }
    }

    Ok(())
}
