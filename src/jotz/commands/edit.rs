use crate::book::NoteBook;
use crate::commands::{CmdMessage, CmdResult, Outcome, Selection};
use crate::error::Result;
use crate::model::{Note, Tags};

/// Replaces the text and tags of the note at a 1-based display position.
/// If the new text matches a different existing note, that entry is
/// overwritten and the edited one removed (the two merge).
pub fn run(
    book: &mut NoteBook,
    selection: Selection,
    new_text: &str,
    tag_input: &str,
) -> Result<CmdResult> {
    let pos = match selection {
        Selection::Cancel => {
            let mut result = CmdResult::default().with_outcome(Outcome::Cancelled);
            result.add_message(CmdMessage::info("Edit cancelled."));
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

    let old = book.replace_at(pos - 1, Note::new(new_text), Tags::parse(tag_input));

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note '{}' has been updated.",
        old
    )));
    Ok(result)
}
