//! # API facade
//!
//! [`JotzApi`] is the single entry point for all notebook operations,
//! whatever UI sits on top. It owns the in-memory [`NoteBook`] and the
//! [`StateStore`] behind it: construction loads persisted state, commands
//! mutate the book in memory, and [`JotzApi::save`] writes it back.
//!
//! The facade is generic over the store so tests run against
//! `InMemoryStore` without touching the filesystem, exactly as the
//! production binary runs against `FileStore`.

use crate::book::NoteBook;
use crate::commands;
use crate::dispatch::REGISTRY;
use crate::error::Result;
use crate::store::StateStore;

pub struct JotzApi<S: StateStore> {
    book: NoteBook,
    store: S,
}

impl<S: StateStore> JotzApi<S> {
    /// Opens the notebook, loading whatever the store has persisted.
    /// Missing or corrupt state comes back as an empty book.
    pub fn open(store: S) -> Result<Self> {
        let book = store.load()?;
        Ok(Self { book, store })
    }

    pub fn add_note(&mut self, note_text: &str, tag_input: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.book, note_text, tag_input)
    }

    pub fn delete_note(&mut self, selection: commands::Selection) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.book, selection)
    }

    pub fn edit_note(
        &mut self,
        selection: commands::Selection,
        new_text: &str,
        tag_input: &str,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.book, selection, new_text, tag_input)
    }

    pub fn search(
        &self,
        mode: commands::search::SearchMode,
        keyword: &str,
    ) -> Result<commands::CmdResult> {
        commands::search::run(&self.book, mode, keyword)
    }

    pub fn show_all(&self) -> Result<commands::CmdResult> {
        commands::show::run(&self.book)
    }

    pub fn help(&self) -> Result<commands::CmdResult> {
        commands::help::run(REGISTRY)
    }

    /// Persists the current book. The one failure that must stay loud.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.book)
    }

    pub fn book(&self) -> &NoteBook {
        &self.book
    }
}

pub use crate::commands::search::SearchMode;
pub use crate::commands::{CmdMessage, CmdResult, HelpRow, MessageLevel, Outcome, Selection};
