use serde::{Deserialize, Serialize};

/// A single text label attached to a note. The label is trimmed on
/// construction; equality and ordering are by text value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub fn new(value: &str) -> Self {
        Self(value.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered collection of tags. Insertion order is preserved and
/// duplicates are allowed; tag search matches against the rendered
/// `", "`-joined string, so the rendering here is load-bearing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags(Vec<Tag>);

impl Tags {
    /// Parses comma-separated user input into tags, trimming each part.
    /// An empty input yields a single empty tag, matching how splitting
    /// `""` on commas behaves for the interactive prompt.
    pub fn parse(input: &str) -> Self {
        Self(input.trim().split(',').map(Tag::new).collect())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.0.iter()
    }
}

impl std::fmt::Display for Tags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(Tag::as_str)
            .collect::<Vec<&str>>()
            .join(", ");
        write!(f, "{}", joined)
    }
}

/// A stored note. The text is both the content and the notebook's lookup
/// key, so two entries can never share it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Note(String);

impl Note {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
