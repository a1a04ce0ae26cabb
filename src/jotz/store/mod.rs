//! # Storage layer
//!
//! The [`StateStore`] trait abstracts how a whole [`NoteBook`] snapshot is
//! persisted. The notebook is small and mutated interactively, so the unit
//! of persistence is the full mapping, loaded once at startup and written
//! back on exit (or on demand).
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON file holding an
//!   ordered array of `{note, tags}` objects. A missing file or a payload
//!   of the wrong shape loads as an empty notebook; write failures
//!   propagate, since silently dropping a save loses data.
//! - [`memory::InMemoryStore`]: no persistence, for tests.

use crate::book::NoteBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for notebook persistence.
pub trait StateStore {
    /// Load the persisted notebook. Absent or unreadable state yields an
    /// empty notebook rather than an error.
    fn load(&self) -> Result<NoteBook>;

    /// Persist the notebook. Errors propagate to the caller.
    fn save(&mut self, book: &NoteBook) -> Result<()>;
}
