/// List item block type with owned marker constant.
///
/// Any trimmed line starting with `-` is a list item, with or without a space
/// after the marker. This greedy rule also captures lines such as `-5 degrees`.
pub struct ListItem;

impl ListItem {
    pub const MARKER: char = '-';

    /// Strips the list marker from an already trimmed line.
    pub fn strip(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::MARKER)?;
        Some(rest.strip_prefix(' ').unwrap_or_else(|| rest.trim()))
    }
}
