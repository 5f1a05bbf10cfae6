//! NoteStore: in-memory ordered note collection
//!
//! Holds the notes in insertion order together with the id counter, both behind
//! one lock so readers never observe a half-applied create or delete.

use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashSet;

use crate::error::{NotesError, Result};
use crate::models::Note;

struct Inner {
    notes: Vec<Note>,
    /// Next id to hand out. Only ever increases.
    next_id: u64,
}

/// NoteStore owning the note collection and id assignment
pub struct NoteStore {
    inner: RwLock<Inner>,
}

impl NoteStore {
    /// Create an empty store. The first note gets id 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                notes: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store pre-populated with `seed`, kept in the given order.
    ///
    /// The counter resumes above the highest seeded id so seeded ids are never
    /// issued again.
    pub fn with_seed(seed: Vec<Note>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(seed.len());
        for note in &seed {
            if note.id == 0 {
                return Err(NotesError::InvalidInput(
                    "seed note ids must be positive".to_string(),
                ));
            }
            if !seen.insert(note.id) {
                return Err(NotesError::InvalidInput(format!(
                    "duplicate seed note id {}",
                    note.id
                )));
            }
        }

        let next_id = match seed.iter().map(|n| n.id).max() {
            Some(max) => max.checked_add(1).ok_or_else(|| {
                NotesError::InvalidInput(format!("seed note id {} leaves no ids to assign", max))
            })?,
            None => 1,
        };
        log::info!("[NOTES] Seeded store with {} notes", seed.len());

        let mut store = Self::new();
        let inner = store.inner.get_mut();
        inner.notes = seed;
        inner.next_id = next_id;
        Ok(store)
    }

    /// All current notes in insertion order
    pub fn list(&self) -> Vec<Note> {
        self.inner.read().notes.clone()
    }

    /// Append a new note with the next id and the current time.
    ///
    /// Fails with `IdsExhausted` rather than wrapping once the counter cannot
    /// advance, so `u64::MAX` itself is never issued.
    pub fn create(&self, content: Option<&str>) -> Result<Note> {
        let content = match content {
            Some(c) if !c.is_empty() => c,
            _ => return Err(NotesError::InvalidInput("content missing".to_string())),
        };

        let mut inner = self.inner.write();
        let following = inner.next_id.checked_add(1).ok_or(NotesError::IdsExhausted)?;
        let note = Note::new(inner.next_id, content, Utc::now());
        inner.next_id = following;
        inner.notes.push(note.clone());

        log::debug!("[NOTES] Created note {}", note.id);
        Ok(note)
    }

    pub fn find_by_id(&self, id: u64) -> Result<Note> {
        self.inner
            .read()
            .notes
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or(NotesError::NotFound(id))
    }

    /// Remove a note. Removing an id that is already gone is `NotFound`.
    pub fn remove_by_id(&self, id: u64) -> Result<()> {
        let mut inner = self.inner.write();
        let pos = inner
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or(NotesError::NotFound(id))?;
        inner.notes.remove(pos);

        log::debug!("[NOTES] Removed note {}", id);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner.read().notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
