use std::fmt;

/// The classification of a top-level schema construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Generator,
    Datasource,
    Model,
    Enum,
    /// A standalone `//` comment line.
    Comment,
    /// A non-blank line that does not start any recognized block.
    Other,
}

impl BlockKind {
    /// The schema keyword for the brace-delimited kinds, or a lowercase label
    /// for the rest.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Generator => "generator",
            BlockKind::Datasource => "datasource",
            BlockKind::Model => "model",
            BlockKind::Enum => "enum",
            BlockKind::Comment => "comment",
            BlockKind::Other => "other",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A top-level block of a schema: a keyword declaration with its braced body,
/// a comment line, or an unclassified standalone line.
///
/// `text` holds the verbatim original lines, interior formatting untouched.
/// Blocks are never mutated after the scan; filtering selects a subsequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    /// The identifier following the keyword. Empty for `Comment` and `Other`
    /// blocks.
    pub name: String,
    pub text: String,
    /// Zero-based line index of the first line, inclusive.
    pub start_line: usize,
    /// Zero-based line index of the last line, inclusive.
    pub end_line: usize,
}

impl Block {
    pub(crate) fn single_line(kind: BlockKind, line: &str, idx: usize) -> Self {
        Block {
            kind,
            name: String::new(),
            text: line.to_owned(),
            start_line: idx,
            end_line: idx,
        }
    }
}
