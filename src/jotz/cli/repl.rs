//! The interactive shell: reads commands, runs sub-prompts, renders
//! results. All terminal I/O for the application happens here or in
//! `print.rs`; the library layers below never touch it.

use super::print;
use super::styles;
use jotz::api::{JotzApi, Outcome, SearchMode, Selection};
use jotz::dispatch::{self, CommandKind, Resolution};
use jotz::error::{JotzError, Result};
use jotz::store::StateStore;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Attempts allowed when a numeric selection prompt gets bad input
/// before the operation cancels itself.
const MAX_ATTEMPTS: usize = 3;

pub fn run<S: StateStore>(api: &mut JotzApi<S>, input: &mut impl BufRead) -> Result<()> {
    println!();
    println!("{}", styles::BANNER.apply_to("*** Hello, I'm your notebook. ***"));
    println!();
    let help = api.help()?;
    print::print_help(&help.help_rows);

    loop {
        let Some(line) = prompt(input, "\nInput a command:")? else {
            // EOF behaves like exit: the session still saves.
            break;
        };

        match dispatch::resolve(&line) {
            Resolution::Exit => break,
            Resolution::Command(kind) => run_command(api, input, kind)?,
            Resolution::Suggestions(names) => {
                println!("Wrong command. Maybe you meant: {}", names.join(", "));
            }
            Resolution::Unknown => println!("Wrong command."),
        }
    }

    api.save()?;
    println!("Notebook closed.");
    Ok(())
}

fn run_command<S: StateStore>(
    api: &mut JotzApi<S>,
    input: &mut impl BufRead,
    kind: CommandKind,
) -> Result<()> {
    match kind {
        CommandKind::Add => run_add(api, input),
        CommandKind::Delete => run_delete(api, input),
        CommandKind::Edit => run_edit(api, input),
        CommandKind::Search => run_search(api, input),
        CommandKind::ShowAll => {
            let result = api.show_all()?;
            print::print_listing(&result.listed);
            print::print_messages(&result.messages);
            Ok(())
        }
        CommandKind::Help => {
            let result = api.help()?;
            print::print_help(&result.help_rows);
            Ok(())
        }
    }
}

fn run_add<S: StateStore>(api: &mut JotzApi<S>, input: &mut impl BufRead) -> Result<()> {
    let Some(note_text) = prompt(input, "\nInput your note ('0' to cancel):")? else {
        return Ok(());
    };

    // Tags are only worth asking for once the note itself is acceptable.
    let tag_input = if note_text.is_empty() || note_text == "0" {
        String::new()
    } else {
        match prompt(input, "\nInput tags for the note (comma-separated):")? {
            Some(tags) => tags,
            None => String::new(),
        }
    };

    let result = api.add_note(&note_text, &tag_input)?;
    print::print_messages(&result.messages);
    Ok(())
}

fn run_delete<S: StateStore>(api: &mut JotzApi<S>, input: &mut impl BufRead) -> Result<()> {
    let listing = api.show_all()?;
    print::print_listing(&listing.listed);

    for _ in 0..MAX_ATTEMPTS {
        let Some(answer) = prompt(
            input,
            "\nChoose the note to delete by number ('0' to cancel):",
        )?
        else {
            return Ok(());
        };

        let selection = match Selection::from_str(&answer) {
            Ok(sel) => sel,
            Err(_) => {
                println!("Invalid input. Please enter a number.");
                continue;
            }
        };

        let result = api.delete_note(selection)?;
        print::print_messages(&result.messages);
        if result.outcome != Outcome::Rejected {
            return Ok(());
        }
    }

    println!("Too many invalid attempts, delete cancelled.");
    Ok(())
}

fn run_edit<S: StateStore>(api: &mut JotzApi<S>, input: &mut impl BufRead) -> Result<()> {
    let listing = api.show_all()?;
    print::print_listing(&listing.listed);

    for _ in 0..MAX_ATTEMPTS {
        let Some(answer) = prompt(
            input,
            "\nChoose the note to edit by number ('0' to cancel):",
        )?
        else {
            return Ok(());
        };

        let selection = match Selection::from_str(&answer) {
            Ok(sel) => sel,
            Err(_) => {
                println!("Invalid input. Please enter a number.");
                continue;
            }
        };

        let position = match selection {
            Selection::Cancel => {
                let result = api.edit_note(Selection::Cancel, "", "")?;
                print::print_messages(&result.messages);
                return Ok(());
            }
            Selection::At(n) if n > api.book().len() => {
                println!(
                    "Invalid index: {} (notebook has {} notes).",
                    n,
                    api.book().len()
                );
                continue;
            }
            Selection::At(n) => n,
        };

        let current = api.book().numbered()[position - 1].note.clone();
        let Some(new_text) = prompt(
            input,
            &format!("\nEnter the new content for note '{}':", current),
        )?
        else {
            return Ok(());
        };
        let new_tags = prompt(
            input,
            &format!("\nEnter the new tags for note '{}' (comma-separated):", current),
        )?
        .unwrap_or_default();

        let result = api.edit_note(Selection::At(position), &new_text, &new_tags)?;
        print::print_messages(&result.messages);
        return Ok(());
    }

    println!("Too many invalid attempts, edit cancelled.");
    Ok(())
}

fn run_search<S: StateStore>(api: &mut JotzApi<S>, input: &mut impl BufRead) -> Result<()> {
    let Some(choice) = prompt(
        input,
        "\nEnter '1' to search note text, '2' to search tags:",
    )?
    else {
        return Ok(());
    };

    let mode = match choice.trim() {
        "1" => SearchMode::Text,
        "2" => SearchMode::Tag,
        _ => {
            println!("Wrong input.");
            return Ok(());
        }
    };

    let Some(keyword) = prompt(input, "Enter a search keyword:")? else {
        return Ok(());
    };

    let result = api.search(mode, &keyword)?;
    print::print_search_results(&result.listed);
    print::print_messages(&result.messages);
    Ok(())
}

/// Prints a prompt and reads one line. `None` means EOF.
fn prompt(input: &mut impl BufRead, label: &str) -> Result<Option<String>> {
    println!("{}", label);
    print!("{} ", styles::PROMPT.apply_to(">>>"));
    io::stdout().flush().map_err(JotzError::Io)?;

    let mut buf = String::new();
    let read = input.read_line(&mut buf).map_err(JotzError::Io)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\n', '\r']).to_string()))
}
