//! Syntax trees for template sources and stored template text.

/// Which store a placeholder pulls its word from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderKind {
    /// `[[id|...]]`: a caller-supplied variable.
    External,
    /// `[{lemma|...}]`: a literal lemma looked up in the dictionary.
    Internal,
}

/// A placeholder as written, split into its segments but not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderSyntax {
    pub kind: PlaceholderKind,
    /// First segment: a variable name or a lemma.
    pub id: String,
    /// Middle segments, in declaration order.
    pub dependencies: Vec<String>,
    /// Comma-separated entries of the trailing segment.
    pub tags: Vec<String>,
    /// The full placeholder text, brackets included.
    pub source: String,
    /// Byte offset of the placeholder in the template source.
    pub offset: usize,
}

/// A piece of a template source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSegment {
    Literal(String),
    Placeholder(PlaceholderSyntax),
}

/// A piece of stored template text, where placeholders became named slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotSegment {
    Literal(String),
    /// `{e_0}`, `{i_3}`, ...
    Slot(String),
}
