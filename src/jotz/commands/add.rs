use crate::book::NoteBook;
use crate::commands::{CmdMessage, CmdResult, Outcome};
use crate::error::Result;
use crate::model::{Note, Tags};

/// Adds a note with comma-separated tags. An empty body is rejected
/// without touching the book; `"0"` as the body cancels.
pub fn run(book: &mut NoteBook, note_text: &str, tag_input: &str) -> Result<CmdResult> {
    if note_text == "0" {
        let mut result = CmdResult::default().with_outcome(Outcome::Cancelled);
        result.add_message(CmdMessage::info("Add cancelled."));
        return Ok(result);
    }
    if note_text.is_empty() {
        let mut result = CmdResult::default().with_outcome(Outcome::Rejected);
        result.add_message(CmdMessage::error("Empty note not allowed."));
        return Ok(result);
    }

    book.insert(Note::new(note_text), Tags::parse(tag_input));

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Note has been added."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tag;

    #[test]
    fn adds_note_with_parsed_tags() {
        let mut book = NoteBook::new();
        let result = run(&mut book, "Buy milk", "errand, home").unwrap();

        assert_eq!(result.outcome, Outcome::Done);
        assert_eq!(book.len(), 1);
        let tags: Vec<&str> = book.entries()[0].tags.iter().map(Tag::as_str).collect();
        assert_eq!(tags, vec!["errand", "home"]);
    }

    #[test]
    fn empty_note_is_rejected_without_mutation() {
        let mut book = NoteBook::new();
        let result = run(&mut book, "", "whatever").unwrap();

        assert_eq!(result.outcome, Outcome::Rejected);
        assert!(book.is_empty());
    }

    #[test]
    fn zero_body_cancels_without_mutation() {
        let mut book = NoteBook::new();
        let result = run(&mut book, "0", "").unwrap();

        assert_eq!(result.outcome, Outcome::Cancelled);
        assert!(book.is_empty());
    }

    #[test]
    fn adding_existing_text_overwrites_tags() {
        let mut book = NoteBook::new();
        run(&mut book, "A", "x").unwrap();
        run(&mut book, "A", "y").unwrap();

        assert_eq!(book.len(), 1);
        assert_eq!(book.entries()[0].tags.to_string(), "y");
    }
}
