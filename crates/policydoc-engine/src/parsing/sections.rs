use std::sync::LazyLock;

use regex::Regex;

use super::blocks;
use crate::models::Section;

static SECTION_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*##[ \t]+(.+?)[ \t\r]*$").expect("invalid section heading regex")
});

/// Splits `text` into level-2 sections and converts each body to fragments.
///
/// A section body is the text strictly between its heading line and the next
/// level-2 heading (or end of document). Content before the first heading
/// belongs to no section. Heading text is kept verbatim.
pub fn parse_sections(text: &str) -> Vec<Section> {
    let matches: Vec<_> = SECTION_HEADING_RE.captures_iter(text).collect();

    matches
        .iter()
        .enumerate()
        .map(|(i, caps)| {
            let whole = caps.get(0).map_or(0..0, |m| m.range());
            let heading = caps.get(1).map_or("", |m| m.as_str()).trim().to_string();
            let end = matches
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map_or(text.len(), |m| m.start());
            let body = text[whole.end..end].trim();
            Section {
                heading,
                content: blocks::convert_body(body),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn headings(sections: &[Section]) -> Vec<&str> {
        sections.iter().map(|s| s.heading.as_str()).collect()
    }

    #[test]
    fn no_headings_yields_no_sections() {
        assert!(parse_sections("# Title\n\nJust text.").is_empty());
    }

    #[test]
    fn sections_follow_document_order() {
        let sections = parse_sections("# T\n## A\nalpha\n## B\nbeta\n");
        assert_eq!(headings(&sections), vec!["A", "B"]);
        assert_eq!(sections[0].content, vec![r#"<p class="mb-4">alpha</p>"#]);
        assert_eq!(sections[1].content, vec![r#"<p class="mb-4">beta</p>"#]);
    }

    #[test]
    fn empty_bodies_are_not_errors() {
        let sections = parse_sections("## First\n## Second");
        assert_eq!(headings(&sections), vec!["First", "Second"]);
        assert!(sections.iter().all(|s| s.content.is_empty()));
    }

    #[test]
    fn deeper_headings_stay_in_body() {
        let sections = parse_sections("## Data\n### Collected\n- email\n");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content.len(), 2);
        assert!(sections[0].content[0].starts_with("<h3"));
        assert!(sections[0].content[1].starts_with("<ul"));
    }

    #[test]
    fn heading_text_is_not_converted() {
        let sections = parse_sections("##   **Contact** us  \nbody");
        assert_eq!(headings(&sections), vec!["**Contact** us"]);
    }

    #[test]
    fn title_is_not_a_section() {
        let sections = parse_sections("# Privacy Policy\nintro\n## Scope\ntext");
        assert_eq!(headings(&sections), vec!["Scope"]);
    }
}
