use super::styles;
use colored::Colorize;
use jotz::api::{CmdMessage, HelpRow, MessageLevel};
use jotz::book::NumberedEntry;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NOTE_WIDTH: usize = 28;
const COMMAND_WIDTH: usize = 12;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Full numbered listing: #, Note, Tags columns.
pub(super) fn print_listing(entries: &[NumberedEntry]) {
    if entries.is_empty() {
        println!("The notebook is empty.");
        return;
    }

    let num_width = entries.len().to_string().len().max(1);
    println!(
        "{}  {}  {}",
        styles::HEADER.apply_to(format!("{:>width$}", "#", width = num_width)),
        styles::HEADER.apply_to(pad_to_width("Note", NOTE_WIDTH)),
        styles::HEADER.apply_to("Tags"),
    );
    for entry in entries {
        println!(
            "{:>width$}  {}  {}",
            entry.position,
            pad_to_width(entry.note.as_str(), NOTE_WIDTH),
            entry.tags,
            width = num_width
        );
    }
}

/// Search results: Note and Tags only, positions are not meaningful to
/// the reader here.
pub(super) fn print_search_results(entries: &[NumberedEntry]) {
    if entries.is_empty() {
        return;
    }

    println!(
        "{}  {}",
        styles::HEADER.apply_to(pad_to_width("Note", NOTE_WIDTH)),
        styles::HEADER.apply_to("Tags"),
    );
    for entry in entries {
        println!(
            "{}  {}",
            pad_to_width(entry.note.as_str(), NOTE_WIDTH),
            entry.tags
        );
    }
}

pub(super) fn print_help(rows: &[HelpRow]) {
    println!(
        "{}  {}",
        styles::HEADER.apply_to(pad_to_width("Command", COMMAND_WIDTH)),
        styles::HEADER.apply_to("Description"),
    );
    for row in rows {
        println!(
            "{}  {}",
            pad_to_width(&row.command, COMMAND_WIDTH),
            row.description
        );
    }
}

/// Pads or truncates to a fixed display width, ellipsizing long values.
fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_values_pad_to_width() {
        assert_eq!(pad_to_width("ab", 5), "ab   ");
    }

    #[test]
    fn long_values_truncate_with_ellipsis() {
        let padded = pad_to_width("abcdefgh", 5);
        assert_eq!(padded.width(), 5);
        assert!(padded.contains('…'));
    }

    #[test]
    fn wide_chars_count_by_display_width() {
        // CJK characters are two columns wide.
        let padded = pad_to_width("日本語", 8);
        assert_eq!(padded.width(), 8);
    }
}
