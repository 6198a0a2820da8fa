//! Dataset ingestion: comma-separated rows to characters
//!
//! The first physical line is a header and is skipped, even when blank.
//! Each following line is split on `,` without quote handling; rows with
//! fewer than eight fields are dropped silently.

use csv::ReaderBuilder;
use tracing::{debug, trace};

use crate::domain::{Character, FIELD_COUNT};

/// Parse dataset content into characters, preserving row order.
pub fn parse_records(content: &str) -> Vec<Character> {
    let body = content.split_once('\n').map_or("", |(_, rest)| rest);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(body.as_bytes());

    let mut characters = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                debug!("skipping unreadable row: {}", e);
                continue;
            }
        };
        // +1 for the header line stripped above
        let line = record.position().map_or(0, |p| p.line() + 1);
        let fields: Vec<&str> = record.iter().collect();
        match Character::from_fields(&fields) {
            Some(character) => {
                trace!("line {}: {}", line, character.name);
                characters.push(character);
            }
            None => debug!(
                "line {}: skipping row with {} of {} fields",
                line,
                fields.len(),
                FIELD_COUNT
            ),
        }
    }
    characters
}
