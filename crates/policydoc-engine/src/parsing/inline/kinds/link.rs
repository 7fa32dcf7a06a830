/// Inline link `[label](url)` delimiters.
///
/// Neither the label nor the url may contain its own closing delimiter;
/// nested brackets and parentheses are not supported.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const LABEL_CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';
}
