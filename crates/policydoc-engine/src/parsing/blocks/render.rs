use crate::parsing::{html, inline};

use super::types::Block;

impl Block {
    /// Renders this block as one HTML content fragment.
    ///
    /// Every heading, paragraph, item and quote line passes through inline
    /// conversion exactly once. Multi-line fragments are joined with `\n`.
    pub fn to_html(&self) -> String {
        match self {
            Block::Heading { level, text } => format!(
                r#"<h{level} class="{}">{}</h{level}>"#,
                html::HEADING_CLASS,
                inline::to_html(text)
            ),
            Block::Paragraph { text } => format!(
                r#"<p class="{}">{}</p>"#,
                html::PARAGRAPH_CLASS,
                inline::to_html(text)
            ),
            Block::List { items } => {
                let mut lines = Vec::with_capacity(items.len() + 2);
                lines.push(format!(r#"<ul class="{}">"#, html::LIST_CLASS));
                lines.extend(
                    items
                        .iter()
                        .map(|item| format!("<li>{}</li>", inline::to_html(item))),
                );
                lines.push("</ul>".to_string());
                lines.join("\n")
            }
            Block::BlockQuote { lines: quoted } => {
                let mut lines = vec![
                    format!(r#"<div class="{}">"#, html::CALLOUT_CLASS),
                    r#"<div class="flex items-start">"#.to_string(),
                    r#"<div class="flex-shrink-0 mr-3">"#.to_string(),
                    html::CALLOUT_ICON.to_string(),
                    "</div>".to_string(),
                    r#"<div class="flex-1">"#.to_string(),
                ];
                lines.extend(quoted.iter().map(|line| {
                    format!(
                        r#"<p class="{}">{}</p>"#,
                        html::CALLOUT_LINE_CLASS,
                        inline::to_html(line)
                    )
                }));
                lines.extend(["</div>", "</div>", "</div>"].map(String::from));
                lines.join("\n")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn heading_fragment() {
        let block = Block::Heading {
            level: 3,
            text: "Your *rights*".to_string(),
        };
        assert_eq!(
            block.to_html(),
            r#"<h3 class="text-lg font-medium text-gray-900 mt-4 mb-2">Your <em>rights</em></h3>"#
        );
    }

    #[test]
    fn paragraph_fragment() {
        let block = Block::Paragraph {
            text: "We use **no** trackers.".to_string(),
        };
        assert_eq!(
            block.to_html(),
            r#"<p class="mb-4">We use <strong>no</strong> trackers.</p>"#
        );
    }

    #[test]
    fn list_fragment_keeps_item_order() {
        let block = Block::List {
            items: vec!["`a`".to_string(), "b".to_string()],
        };
        insta::assert_snapshot!(block.to_html(), @r#"
        <ul class="list-disc list-outside mb-4 space-y-1 pl-5">
        <li><code class='bg-gray-100 px-1 py-0.5 rounded text-sm'>a</code></li>
        <li>b</li>
        </ul>
        "#);
    }

    #[test]
    fn blockquote_fragment_wraps_lines_in_callout() {
        let block = Block::BlockQuote {
            lines: vec!["Heads up".to_string(), "Second *line*".to_string()],
        };
        let html = block.to_html();
        assert!(html.starts_with(r#"<div class="bg-gradient-to-r"#));
        assert!(html.contains(
            r#"<p class="text-gray-800 font-medium leading-tight mb-0">Heads up</p>
<p class="text-gray-800 font-medium leading-tight mb-0">Second <em>line</em></p>"#
        ));
        assert!(html.ends_with("</div>\n</div>\n</div>"));
    }
}
