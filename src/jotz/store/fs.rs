use super::StateStore;
use crate::book::NoteBook;
use crate::error::{JotzError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(JotzError::Io)?;
            }
        }
        Ok(())
    }
}

impl StateStore for FileStore {
    fn load(&self) -> Result<NoteBook> {
        if !self.path.exists() {
            return Ok(NoteBook::new());
        }
        let content = fs::read_to_string(&self.path).map_err(JotzError::Io)?;

        // A payload that does not decode to the entry-array shape means a
        // stale or corrupt file; start empty instead of failing startup.
        match serde_json::from_str(&content) {
            Ok(book) => Ok(book),
            Err(_) => Ok(NoteBook::new()),
        }
    }

    fn save(&mut self, book: &NoteBook) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(book).map_err(JotzError::Serialization)?;
        fs::write(&self.path, content).map_err(JotzError::Io)?;
        Ok(())
    }
}
