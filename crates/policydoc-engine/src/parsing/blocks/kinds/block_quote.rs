/// Blockquote block type with owned delimiter constant.
///
/// Quotes are flat: `>>` is a single quote line whose text starts with `>`.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips the quote prefix from an already trimmed line.
    pub fn strip(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or_else(|| rest.trim()))
    }
}
