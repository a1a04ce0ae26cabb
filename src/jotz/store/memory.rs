use super::StateStore;
use crate::book::NoteBook;
use crate::error::Result;

/// In-memory storage for testing.
/// Holds the last saved snapshot, nothing touches disk.
#[derive(Default)]
pub struct InMemoryStore {
    saved: Option<NoteBook>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: NoteBook) -> Self {
        Self { saved: Some(book) }
    }

    pub fn saved(&self) -> Option<&NoteBook> {
        self.saved.as_ref()
    }
}

impl StateStore for InMemoryStore {
    fn load(&self) -> Result<NoteBook> {
        Ok(self.saved.clone().unwrap_or_default())
    }

    fn save(&mut self, book: &NoteBook) -> Result<()> {
        self.saved = Some(book.clone());
        Ok(())
    }
}
