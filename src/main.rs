//! Contact Manager - Main entry point
//!
//! Reads a JSON array of contacts from stdin, stores every contact that
//! passes validation, and prints the stored contacts as JSON on stdout.
//! Rejected contacts are reported on stderr through the log.

use anyhow::{Context, Result};
use contact_manager::{Config, Contact, ContactManager};
use std::io::{self, Read, Write};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can drive the filter
    let config = Config::from_env()?;

    // Initialize logging (stderr only so stdout carries just the JSON output)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Starting contact manager with initial capacity {}",
        config.initial_capacity
    );

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read contacts from stdin")?;

    let contacts: Vec<Contact> = match serde_json::from_str(&input) {
        Ok(contacts) => contacts,
        Err(e) => {
            error!("Failed to parse contacts: {}", e);
            return Err(e).context("Input must be a JSON array of contacts");
        }
    };

    let mut manager = ContactManager::with_capacity(config.initial_capacity);
    let mut rejected = 0usize;

    for (index, contact) in contacts.into_iter().enumerate() {
        if let Err(e) = manager.add(contact) {
            warn!("Contact #{} rejected: {}", index, e);
            rejected += 1;
        }
    }

    info!("Stored {} contact(s), rejected {}", manager.len(), rejected);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, manager.get_all_contacts())
        .context("Failed to write contacts")?;
    writeln!(out)?;

    Ok(())
}
