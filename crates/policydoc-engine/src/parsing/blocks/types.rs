/// A run of contiguous lines of one kind, before inline conversion.
///
/// Blocks only live for one parse pass; [`Block::to_html`] turns each one
/// into a single content fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A `### heading` line.
    Heading {
        /// Heading level (always 3 inside a section body).
        level: u8,
        text: String,
    },
    /// Consecutive `-` items, with soft-wrapped continuation lines merged.
    List { items: Vec<String> },
    /// Consecutive `>` lines, with soft-wrapped continuation lines merged.
    BlockQuote { lines: Vec<String> },
    /// A single non-empty line outside any container.
    Paragraph { text: String },
}

impl Block {
    /// Returns true for containers without any entries; those render nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Block::List { items } => items.is_empty(),
            Block::BlockQuote { lines } => lines.is_empty(),
            Block::Heading { .. } | Block::Paragraph { .. } => false,
        }
    }
}
