use chrono::{DateTime, Utc};

use crate::error::{NotesError, Result};
use crate::models::Note;

const FIXTURES: [(u64, &str, &str); 3] = [
    (1, "HTML is easy", "2022-01-10T17:30:31.098Z"),
    (2, "Browser can execute only Javascript", "2022-01-10T18:39:34.091Z"),
    (
        3,
        "GET and POST are the most important methods of HTTP protocol",
        "2022-01-10T19:20:14.298Z",
    ),
];

/// The three notes a fresh instance starts with when seeding with fixtures.
pub fn fixture_notes() -> Result<Vec<Note>> {
    build_notes(&FIXTURES)
}

fn build_notes(entries: &[(u64, &str, &str)]) -> Result<Vec<Note>> {
    entries
        .iter()
        .map(|(id, content, date)| -> Result<Note> {
            let date = DateTime::parse_from_rfc3339(date)
                .map_err(|e| {
                    NotesError::InvalidInput(format!("fixture note {} has a bad date: {}", id, e))
                })?
                .with_timezone(&Utc);
            Ok(Note::new(*id, *content, date))
        })
        .collect()
}
