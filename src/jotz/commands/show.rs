use crate::book::NoteBook;
use crate::commands::CmdResult;
use crate::error::Result;

pub fn run(book: &NoteBook) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed(book.numbered()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Note, Tags};

    #[test]
    fn lists_all_entries_in_order() {
        let mut book = NoteBook::new();
        book.insert(Note::new("A"), Tags::parse("x"));
        book.insert(Note::new("B"), Tags::parse("y"));

        let result = run(&book).unwrap();
        assert_eq!(result.listed.len(), 2);
        assert_eq!(result.listed[0].position, 1);
        assert_eq!(result.listed[0].note.as_str(), "A");
        assert_eq!(result.listed[1].position, 2);
        assert_eq!(result.listed[1].note.as_str(), "B");
    }

    #[test]
    fn show_is_idempotent() {
        let mut book = NoteBook::new();
        book.insert(Note::new("A"), Tags::parse(""));

        let first = run(&book).unwrap();
        let second = run(&book).unwrap();
        assert_eq!(first.listed.len(), second.listed.len());
        assert_eq!(
            first.listed[0].note.as_str(),
            second.listed[0].note.as_str()
        );
    }
}
