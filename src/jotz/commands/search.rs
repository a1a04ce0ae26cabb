use crate::book::NoteBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Literal substring of the note text, case-sensitive.
    Text,
    /// Literal substring of the rendered `", "`-joined tag list.
    Tag,
}

pub fn run(book: &NoteBook, mode: SearchMode, keyword: &str) -> Result<CmdResult> {
    let hits = match mode {
        SearchMode::Text => book.find_by_text(keyword),
        SearchMode::Tag => book.find_by_tag(keyword),
    };

    if hits.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No matching found."));
        return Ok(result);
    }

    Ok(CmdResult::default().with_listed(hits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Note, Tags};

    fn sample_book() -> NoteBook {
        let mut b = NoteBook::new();
        b.insert(Note::new("Buy milk"), Tags::parse("errand, home"));
        b.insert(Note::new("Call mom"), Tags::parse("family, home"));
        b
    }

    #[test]
    fn text_mode_matches_note_substring() {
        let book = sample_book();
        let result = run(&book, SearchMode::Text, "milk").unwrap();

        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].note.as_str(), "Buy milk");
        assert_eq!(result.listed[0].tags.to_string(), "errand, home");
    }

    #[test]
    fn tag_mode_matches_rendered_tags() {
        let book = sample_book();
        let result = run(&book, SearchMode::Tag, "home").unwrap();

        assert_eq!(result.listed.len(), 2);
    }

    #[test]
    fn no_match_yields_message_not_error() {
        let book = sample_book();
        let result = run(&book, SearchMode::Text, "zzz").unwrap();

        assert!(result.listed.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn search_is_idempotent() {
        let book = sample_book();
        let first = run(&book, SearchMode::Tag, "home").unwrap();
        let second = run(&book, SearchMode::Tag, "home").unwrap();

        let notes = |r: &CmdResult| {
            r.listed
                .iter()
                .map(|e| e.note.as_str().to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(notes(&first), notes(&second));
    }
}
