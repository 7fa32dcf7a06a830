/// Sub-heading block type with owned delimiter constant.
///
/// Only the third heading level is a block inside a section body; level two
/// headings delimit sections and are consumed before block parsing.
pub struct Heading;

impl Heading {
    pub const PREFIX: &'static str = "###";
    pub const LEVEL: u8 = 3;

    /// Returns the heading text if `line` is `### text`.
    ///
    /// The prefix must start the line and be followed by whitespace, so
    /// `####` and `###text` are not headings. Trailing whitespace is dropped.
    pub fn strip(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::PREFIX)?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let text = rest.trim();
        (!text.is_empty()).then_some(text)
    }
}
