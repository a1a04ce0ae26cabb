//! The in-memory notebook: an insertion-ordered mapping from note text to
//! its tags.
//!
//! Note text doubles as the lookup key, so inserting an existing text
//! overwrites that entry's tags in place (keeping its position) and a new
//! text is appended at the end. Display numbering is 1-based over the
//! current enumeration order and shifts after any mutation; callers take a
//! fresh numbered snapshot whenever they need to show or resolve positions.

use crate::model::{Note, Tags};
use serde::{Deserialize, Serialize};

/// One notebook entry: a note and its tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub note: Note,
    pub tags: Tags,
}

/// An entry paired with its 1-based display position.
#[derive(Debug, Clone)]
pub struct NumberedEntry {
    pub position: usize,
    pub note: Note,
    pub tags: Tags,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteBook {
    entries: Vec<Entry>,
}

impl NoteBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    fn position_of(&self, note: &Note) -> Option<usize> {
        self.entries.iter().position(|e| &e.note == note)
    }

    /// Inserts a note, or overwrites its tags if the text already exists.
    /// An overwrite keeps the entry's position; a new note lands at the end.
    pub fn insert(&mut self, note: Note, tags: Tags) {
        match self.position_of(&note) {
            Some(pos) => self.entries[pos].tags = tags,
            None => self.entries.push(Entry { note, tags }),
        }
    }

    /// Removes and returns the entry at 0-based position `pos`.
    /// Bounds checking is the caller's job.
    pub fn remove_at(&mut self, pos: usize) -> Entry {
        self.entries.remove(pos)
    }

    /// Re-keys the entry at 0-based position `pos` to `new_note` with
    /// `new_tags`. When `new_note` collides with a different existing
    /// entry, that entry is overwritten in place and the one at `pos` is
    /// removed, merging the two. Returns the note text the entry had
    /// before the edit.
    pub fn replace_at(&mut self, pos: usize, new_note: Note, new_tags: Tags) -> Note {
        let old_note = self.entries[pos].note.clone();
        self.insert(new_note.clone(), new_tags);
        if old_note != new_note {
            // insert() cannot have moved the old entry, so its position
            // still holds.
            self.entries.remove(pos);
        }
        old_note
    }

    /// All entries whose note text contains `needle` as a literal,
    /// case-sensitive substring, in enumeration order with their current
    /// display positions.
    pub fn find_by_text(&self, needle: &str) -> Vec<NumberedEntry> {
        self.numbered_where(|e| e.note.as_str().contains(needle))
    }

    /// All entries whose rendered tag list (`", "`-joined) contains
    /// `needle` as a literal substring. The match runs against the joined
    /// string, not per tag, so a needle spanning a delimiter can hit.
    pub fn find_by_tag(&self, needle: &str) -> Vec<NumberedEntry> {
        self.numbered_where(|e| e.tags.to_string().contains(needle))
    }

    /// The full listing with 1-based display positions, read-only.
    pub fn numbered(&self) -> Vec<NumberedEntry> {
        self.numbered_where(|_| true)
    }

    fn numbered_where<F: Fn(&Entry) -> bool>(&self, keep: F) -> Vec<NumberedEntry> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| keep(e))
            .map(|(i, e)| NumberedEntry {
                position: i + 1,
                note: e.note.clone(),
                tags: e.tags.clone(),
            })
            .collect()
    }
}
