//! Notes system: volatile in-memory note collection
//!
//! The store lives for the lifetime of the process. Seeding is explicit:
//! callers pass the initial notes to `NoteStore::with_seed`.

pub mod fixtures;
pub mod store;

pub use store::NoteStore;
