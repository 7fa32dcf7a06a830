use super::kinds::{BlockQuote, Heading, ListItem};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Borrowed text has its markers
/// stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Whitespace only.
    Blank,
    /// `### text`, recognised on the untrimmed line before any other rule.
    Heading(&'a str),
    /// A line starting with `-` once trimmed.
    ListItem(&'a str),
    /// A line starting with `>` once trimmed.
    QuoteLine(&'a str),
    /// Anything else, trimmed.
    Text(&'a str),
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Precedence: heading, blank, list item, blockquote, text.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if let Some(text) = Heading::strip(line) {
            return LineClass::Heading(text);
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineClass::Blank;
        }
        if let Some(text) = ListItem::strip(trimmed) {
            return LineClass::ListItem(text);
        }
        if let Some(text) = BlockQuote::strip(trimmed) {
            return LineClass::QuoteLine(text);
        }
        LineClass::Text(trimmed)
    }
}
