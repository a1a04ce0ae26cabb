//! Resolution of raw prompt input to a command.
//!
//! Resolution order for one trimmed line:
//! 1. `exit` / `0` end the session (checked before any dispatch).
//! 2. Exact match of the lower-cased input against a registered name.
//! 3. Prefix match: the input must start with a registered name. Ties
//!    break deterministically: longest name wins, then lexicographically
//!    first.
//! 4. Fuzzy fallback: names scoring at least [`SIMILARITY_CUTOFF`] on
//!    normalized edit similarity are offered as suggestions, best first.

/// The operation a registered name stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Add,
    Delete,
    Edit,
    Search,
    ShowAll,
    Help,
}

pub struct CommandSpec {
    pub name: &'static str,
    pub kind: CommandKind,
    pub description: &'static str,
}

pub const REGISTRY: &[CommandSpec] = &[
    CommandSpec {
        name: "add",
        kind: CommandKind::Add,
        description: "add a note",
    },
    CommandSpec {
        name: "delete",
        kind: CommandKind::Delete,
        description: "delete a note",
    },
    CommandSpec {
        name: "edit",
        kind: CommandKind::Edit,
        description: "edit a note",
    },
    CommandSpec {
        name: "search",
        kind: CommandKind::Search,
        description: "search notes by text or tag",
    },
    CommandSpec {
        name: "show all",
        kind: CommandKind::ShowAll,
        description: "output all notes",
    },
    CommandSpec {
        name: "help",
        kind: CommandKind::Help,
        description: "see the list of commands",
    },
];

pub const SIMILARITY_CUTOFF: f64 = 0.5;

/// What a line of input resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// `exit` or `0`: save and leave the shell.
    Exit,
    Command(CommandKind),
    /// No match, but these registered names are close.
    Suggestions(Vec<&'static str>),
    Unknown,
}

pub fn resolve(input: &str) -> Resolution {
    let input = input.trim().to_lowercase();

    if input == "exit" || input == "0" {
        return Resolution::Exit;
    }

    if let Some(spec) = REGISTRY.iter().find(|spec| spec.name == input) {
        return Resolution::Command(spec.kind);
    }

    if let Some(spec) = prefix_match(&input) {
        return Resolution::Command(spec.kind);
    }

    let close = close_matches(&input);
    if close.is_empty() {
        Resolution::Unknown
    } else {
        Resolution::Suggestions(close)
    }
}

/// Longest registered name the input starts with; lexicographically first
/// on equal length.
fn prefix_match(input: &str) -> Option<&'static CommandSpec> {
    REGISTRY
        .iter()
        .filter(|spec| input.starts_with(spec.name))
        .min_by(|a, b| {
            b.name
                .len()
                .cmp(&a.name.len())
                .then(a.name.cmp(b.name))
        })
}

/// Registered names scoring at least the cutoff against the input,
/// best first.
fn close_matches(input: &str) -> Vec<&'static str> {
    let mut scored: Vec<(&'static str, f64)> = REGISTRY
        .iter()
        .map(|spec| (spec.name, similarity(input, spec.name)))
        .filter(|(_, score)| *score >= SIMILARITY_CUTOFF)
        .collect();
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().map(|(name, _)| name).collect()
}

/// Normalized edit similarity: `1 - levenshtein(a, b) / max(len)`.
/// Identical strings score 1.0, fully dissimilar ones 0.0.
fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let max_len = a.len().max(b.len());
    1.0 - levenshtein(&a, &b) as f64 / max_len as f64
}

fn levenshtein(a: &[char], b: &[char]) -> usize {
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_aliases_resolve_before_dispatch() {
        assert_eq!(resolve("exit"), Resolution::Exit);
        assert_eq!(resolve("0"), Resolution::Exit);
        assert_eq!(resolve("  EXIT  "), Resolution::Exit);
    }

    #[test]
    fn exact_match_dispatches() {
        assert_eq!(resolve("add"), Resolution::Command(CommandKind::Add));
        assert_eq!(resolve("show all"), Resolution::Command(CommandKind::ShowAll));
        assert_eq!(resolve("HELP"), Resolution::Command(CommandKind::Help));
    }

    #[test]
    fn prefix_match_dispatches() {
        assert_eq!(
            resolve("add Buy milk"),
            Resolution::Command(CommandKind::Add)
        );
        assert_eq!(
            resolve("delete something"),
            Resolution::Command(CommandKind::Delete)
        );
    }

    #[test]
    fn prefix_tie_break_prefers_longest_name() {
        // "show all notes" starts with "show all"; nothing shorter can
        // steal it even though resolution scans every name.
        assert_eq!(
            resolve("show all notes"),
            Resolution::Command(CommandKind::ShowAll)
        );
    }

    #[test]
    fn exact_beats_prefixing_keys() {
        // "search" must dispatch Search exactly even though it is also a
        // prefix of itself among other candidates.
        assert_eq!(resolve("search"), Resolution::Command(CommandKind::Search));
    }

    #[test]
    fn near_miss_yields_suggestions() {
        match resolve("ad") {
            Resolution::Command(CommandKind::Add) => {}
            Resolution::Suggestions(names) => assert!(names.contains(&"add")),
            other => panic!("expected add or suggestions, got {:?}", other),
        }

        match resolve("serch") {
            Resolution::Suggestions(names) => assert_eq!(names[0], "search"),
            other => panic!("expected suggestions, got {:?}", other),
        }
    }

    #[test]
    fn gibberish_is_unknown() {
        assert_eq!(resolve("qqqqqqqqqq"), Resolution::Unknown);
    }

    #[test]
    fn similarity_bounds() {
        assert_eq!(similarity("add", "add"), 1.0);
        assert_eq!(similarity("abc", "xyz"), 0.0);
        assert_eq!(similarity("", ""), 1.0);
        assert!(similarity("edit", "edt") > 0.5);
    }

    #[test]
    fn levenshtein_known_distances() {
        let d = |a: &str, b: &str| {
            let a: Vec<char> = a.chars().collect();
            let b: Vec<char> = b.chars().collect();
            levenshtein(&a, &b)
        };
        assert_eq!(d("kitten", "sitting"), 3);
        assert_eq!(d("", "abc"), 3);
        assert_eq!(d("abc", ""), 3);
        assert_eq!(d("flaw", "lawn"), 2);
    }
}
