use crate::parsing::html;

use super::types::InlineNode;

/// Renders parsed inline nodes back to HTML, slicing text from `src`.
///
/// `src` must be the same string the nodes were parsed from (with base 0).
/// Text is copied verbatim; no HTML escaping is performed.
pub fn render_html(src: &str, nodes: &[InlineNode]) -> String {
    let mut out = String::with_capacity(src.len());
    render_into(src, nodes, &mut out);
    out
}

fn render_into(src: &str, nodes: &[InlineNode], out: &mut String) {
    for node in nodes {
        match node {
            InlineNode::Text(sp) => out.push_str(sp.slice(src)),
            InlineNode::CodeSpan { inner, .. } => {
                out.push_str("<code class='");
                out.push_str(html::CODE_CLASS);
                out.push_str("'>");
                out.push_str(inner.slice(src));
                out.push_str("</code>");
            }
            InlineNode::Strong { children, .. } => {
                out.push_str("<strong>");
                render_into(src, children, out);
                out.push_str("</strong>");
            }
            InlineNode::Emphasis { children, .. } => {
                out.push_str("<em>");
                render_into(src, children, out);
                out.push_str("</em>");
            }
            InlineNode::Link { label, url, .. } => {
                out.push_str("<a href=\"");
                out.push_str(url.slice(src));
                out.push_str("\" class=\"");
                out.push_str(html::LINK_CLASS);
                out.push_str("\">");
                render_into(src, label, out);
                out.push_str("</a>");
            }
            InlineNode::LineBreak(_) => out.push_str(html::LINE_BREAK),
        }
    }
}
