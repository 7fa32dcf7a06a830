/// Emphasis and strong delimiters.
///
/// A doubled delimiter (`**`, `__`) opens strong text, a single one (`*`, `_`)
/// opens emphasis. In both cases the first inner byte must not be the
/// delimiter itself, which keeps `***` runs from opening empty spans.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';

    /// Returns true if `b` can open or close emphasis.
    pub fn is_delim(b: u8) -> bool {
        b == Self::STAR || b == Self::UNDERSCORE
    }
}
