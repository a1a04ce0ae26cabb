use crate::book::NoteBook;
use crate::commands::{CmdMessage, CmdResult, Outcome, Selection};
use crate::error::Result;

/// Removes the note at a 1-based display position. `Selection::Cancel`
/// leaves the book untouched; an out-of-range position is rejected so the
/// caller can re-prompt.
pub fn run(book: &mut NoteBook, selection: Selection) -> Result<CmdResult> {
    let pos = match selection {
        Selection::Cancel => {
            let mut result = CmdResult::default().with_outcome(Outcome::Cancelled);
            result.add_message(CmdMessage::info("Delete cancelled."));
            return Ok(result);
        }
        Selection::At(n) => n,
    };

    if pos > book.len() {
        let mut result = CmdResult::default().with_outcome(Outcome::Rejected);
        result.add_message(CmdMessage::error(format!(
            "Invalid index: {} (notebook has {} notes).",
            pos,
            book.len()
        )));
        return Ok(result);
    }

    let removed = book.remove_at(pos - 1);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note '{}' has been deleted.",
        removed.note
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Note, Tags};

    fn book_of(notes: &[&str]) -> NoteBook {
        let mut b = NoteBook::new();
        for n in notes {
            b.insert(Note::new(*n), Tags::parse(""));
        }
        b
    }

    #[test]
    fn deletes_entry_at_display_position() {
        let mut book = book_of(&["A", "B", "C"]);
        let result = run(&mut book, Selection::At(2)).unwrap();

        assert_eq!(result.outcome, Outcome::Done);
        assert_eq!(book.len(), 2);
        let notes: Vec<&str> = book.entries().iter().map(|e| e.note.as_str()).collect();
        assert_eq!(notes, vec!["A", "C"]);
    }

    #[test]
    fn every_valid_position_removes_exactly_one() {
        for pos in 1..=3 {
            let mut book = book_of(&["A", "B", "C"]);
            let target = book.numbered()[pos - 1].note.clone();
            run(&mut book, Selection::At(pos)).unwrap();

            assert_eq!(book.len(), 2);
            assert!(book.entries().iter().all(|e| e.note != target));
        }
    }

    #[test]
    fn cancel_never_mutates() {
        let mut book = book_of(&["A"]);
        let result = run(&mut book, Selection::Cancel).unwrap();

        assert_eq!(result.outcome, Outcome::Cancelled);
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut book = book_of(&["A"]);
        let result = run(&mut book, Selection::At(2)).unwrap();

        assert_eq!(result.outcome, Outcome::Rejected);
        assert_eq!(book.len(), 1);
    }
}
