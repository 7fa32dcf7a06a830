use crate::parsing::span::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, LineBreak, Link},
    types::InlineNode,
};

/// Extent of a delimited construct found by a scanner.
#[derive(Debug, Clone, Copy)]
struct Delimited {
    inner: Span,
    end: usize,
}

#[derive(Debug, Clone, Copy)]
struct LinkExtent {
    label: Span,
    url: Span,
    end: usize,
}

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset in the outer text where `s` begins (for absolute span positions)
/// - `s`: The string content to parse (a list item, quote line, paragraph or heading)
///
/// # Precedence
/// At every position constructs are tried in a fixed order: code span,
/// strong, emphasis, link, hard line break. Code spans are raw zones and
/// strong/emphasis closers are never searched inside them. Emphasis closers
/// also skip over complete strong spans, so `**a *b* c**` nests instead of
/// leaking delimiters.
///
/// # Returns
/// A vector of inline nodes covering the entire input. Text between special
/// constructs is emitted as `InlineNode::Text`; unmatched delimiters stay text.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();
    // Last byte consumed as plain text; a construct end resets it.
    let mut prev_literal: Option<u8> = None;

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        let node = try_parse_code_span(&mut cur)
            .or_else(|| try_parse_strong(&mut cur))
            .or_else(|| try_parse_emphasis(&mut cur, prev_literal))
            .or_else(|| try_parse_link(&mut cur))
            .or_else(|| try_parse_line_break(&mut cur));

        if let Some(node) = node {
            flush_text(&mut out, text_start, start);
            text_start = cur.pos();
            prev_literal = None;
            out.push(node);
            continue;
        }
        prev_literal = cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Parses the children of a container whose content spans `inner`.
fn parse_children(cur: &Cursor<'_>, inner: Span) -> Vec<InlineNode> {
    let local = &cur.s[inner.start - cur.base..inner.end - cur.base];
    parse_inline(inner.start, local)
}

fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let start = cur.pos();
    let found = scan_code_span(cur)?;
    cur.seek(found.end);
    Some(InlineNode::CodeSpan {
        full: Span::new(start, found.end),
        inner: found.inner,
    })
}

fn try_parse_strong(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let start = cur.pos();
    let found = scan_strong(cur)?;
    let children = parse_children(cur, found.inner);
    cur.seek(found.end);
    Some(InlineNode::Strong {
        full: Span::new(start, found.end),
        children,
    })
}

fn try_parse_emphasis(cur: &mut Cursor<'_>, prev_literal: Option<u8>) -> Option<InlineNode> {
    let start = cur.pos();
    let found = scan_emphasis(cur, prev_literal)?;
    let children = parse_children(cur, found.inner);
    cur.seek(found.end);
    Some(InlineNode::Emphasis {
        full: Span::new(start, found.end),
        children,
    })
}

fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let start = cur.pos();
    let found = scan_link(cur)?;
    let label = parse_children(cur, found.label);
    cur.seek(found.end);
    Some(InlineNode::Link {
        full: Span::new(start, found.end),
        label,
        url: found.url,
    })
}

fn try_parse_line_break(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(LineBreak::MARKER) {
        return None;
    }
    let start = cur.pos();
    cur.bump_n(LineBreak::MARKER.len());
    Some(InlineNode::LineBreak(Span::new(start, cur.pos())))
}

/// Finds a closed, non-empty code span starting at the cursor.
fn scan_code_span(cur: &Cursor<'_>) -> Option<Delimited> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }
    let mut c = *cur;
    c.bump(); // `
    let inner_start = c.pos();
    while let Some(b) = c.peek() {
        if b == CodeSpan::TICK {
            break;
        }
        c.bump();
    }
    if c.peek() != Some(CodeSpan::TICK) {
        return None;
    }
    let inner = Span::new(inner_start, c.pos());
    if inner.is_empty() {
        return None;
    }
    c.bump(); // closing `
    Some(Delimited { inner, end: c.pos() })
}

/// Finds `**text**` / `__text__` starting at the cursor, closed by the
/// nearest doubled delimiter outside code spans.
fn scan_strong(cur: &Cursor<'_>) -> Option<Delimited> {
    let d = cur.peek().filter(|b| Emphasis::is_delim(*b))?;
    if cur.peek_at(1) != Some(d) {
        return None;
    }
    match cur.peek_at(2) {
        None => return None,
        Some(b) if b == d => return None,
        Some(_) => {}
    }

    let mut c = *cur;
    c.bump_n(2);
    let inner_start = c.pos();
    while !c.eof() {
        if let Some(code) = scan_code_span(&c) {
            c.seek(code.end);
            continue;
        }
        if c.pos() > inner_start && c.peek() == Some(d) && c.peek_at(1) == Some(d) {
            let inner = Span::new(inner_start, c.pos());
            c.bump_n(2);
            return Some(Delimited { inner, end: c.pos() });
        }
        c.bump();
    }
    None
}

/// Finds `*text*` / `_text_` starting at the cursor.
///
/// The opener must not follow a literal copy of the same delimiter and the
/// closer must not be followed by one, so neither half of a doubled
/// delimiter is read as emphasis. An opener directly followed by a complete
/// strong span is allowed, so `***x***` is emphasis around strong.
fn scan_emphasis(cur: &Cursor<'_>, prev_literal: Option<u8>) -> Option<Delimited> {
    let d = cur.peek().filter(|b| Emphasis::is_delim(*b))?;
    if prev_literal == Some(d) {
        return None;
    }

    let mut c = *cur;
    c.bump();
    match c.peek() {
        None => return None,
        Some(b) if b == d && scan_strong(&c).is_none() => return None,
        Some(_) => {}
    }
    let inner_start = c.pos();
    while !c.eof() {
        if let Some(code) = scan_code_span(&c) {
            c.seek(code.end);
            continue;
        }
        if let Some(strong) = scan_strong(&c) {
            c.seek(strong.end);
            continue;
        }
        if c.pos() > inner_start && c.peek() == Some(d) && c.peek_at(1) != Some(d) {
            let inner = Span::new(inner_start, c.pos());
            c.bump();
            return Some(Delimited { inner, end: c.pos() });
        }
        c.bump();
    }
    None
}

/// Finds `[label](url)` starting at the cursor. Both parts must be non-empty.
fn scan_link(cur: &Cursor<'_>) -> Option<LinkExtent> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }
    let mut c = *cur;
    c.bump(); // [
    let label = scan_until(&mut c, Link::LABEL_CLOSE)?;
    c.bump(); // ]
    if c.peek() != Some(Link::URL_OPEN) {
        return None;
    }
    c.bump(); // (
    let url = scan_until(&mut c, Link::URL_CLOSE)?;
    c.bump(); // )
    Some(LinkExtent {
        label,
        url,
        end: c.pos(),
    })
}

/// Advances to the next `close` byte, returning the non-empty span skipped.
fn scan_until(c: &mut Cursor<'_>, close: u8) -> Option<Span> {
    let start = c.pos();
    while let Some(b) = c.peek() {
        if b == close {
            break;
        }
        c.bump();
    }
    let span = Span::new(start, c.pos());
    (c.peek() == Some(close) && !span.is_empty()).then_some(span)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(start: usize, end: usize) -> InlineNode {
        InlineNode::Text(Span { start, end })
    }

    #[test]
    fn parse_simple_text() {
        let nodes = parse_inline(0, "hello world");
        assert_eq!(nodes, vec![text(0, 11)]);
    }

    #[test]
    fn parse_code_span() {
        let nodes = parse_inline(0, "`code`");
        assert_eq!(
            nodes,
            vec![InlineNode::CodeSpan {
                full: Span { start: 0, end: 6 },
                inner: Span { start: 1, end: 5 },
            }]
        );
    }

    #[test]
    fn empty_code_span_is_text() {
        let nodes = parse_inline(0, "``");
        assert_eq!(nodes, vec![text(0, 2)]);
    }

    #[test]
    fn code_span_suppresses_emphasis() {
        let nodes = parse_inline(0, "`*not em*`");
        assert_eq!(nodes.len(), 1);
        assert!(matches!(nodes[0], InlineNode::CodeSpan { .. }));
    }

    #[test]
    fn strong_contains_nested_emphasis() {
        let nodes = parse_inline(0, "**bold *and* nested**");
        assert_eq!(
            nodes,
            vec![InlineNode::Strong {
                full: Span { start: 0, end: 21 },
                children: vec![
                    text(2, 7),
                    InlineNode::Emphasis {
                        full: Span { start: 7, end: 12 },
                        children: vec![text(8, 11)],
                    },
                    text(12, 19),
                ],
            }]
        );
    }

    #[test]
    fn underscore_strong() {
        let nodes = parse_inline(0, "__x__");
        assert!(matches!(
            &nodes[..],
            [InlineNode::Strong { full: Span { start: 0, end: 5 }, .. }]
        ));
    }

    #[test]
    fn strong_closer_skips_code_spans() {
        let nodes = parse_inline(0, "**a `x**` b**");
        assert_eq!(nodes.len(), 1);
        match &nodes[0] {
            InlineNode::Strong { full, children } => {
                assert_eq!(*full, Span { start: 0, end: 13 });
                assert!(matches!(children[1], InlineNode::CodeSpan { .. }));
            }
            other => panic!("expected Strong, got {other:?}"),
        }
    }

    #[test]
    fn emphasis_skips_inner_strong() {
        let nodes = parse_inline(0, "*a **b** c*");
        assert_eq!(nodes.len(), 1);
        match &nodes[0] {
            InlineNode::Emphasis { children, .. } => {
                assert!(children.iter().any(|n| matches!(n, InlineNode::Strong { .. })));
            }
            other => panic!("expected Emphasis, got {other:?}"),
        }
    }

    #[test]
    fn triple_star_does_not_open_empty_strong() {
        let nodes = parse_inline(0, "***");
        assert_eq!(nodes, vec![text(0, 3)]);
    }

    #[test]
    fn triple_delimiters_wrap_strong_in_emphasis() {
        let nodes = parse_inline(0, "***x***");
        assert_eq!(
            nodes,
            vec![InlineNode::Emphasis {
                full: Span { start: 0, end: 7 },
                children: vec![InlineNode::Strong {
                    full: Span { start: 1, end: 6 },
                    children: vec![text(3, 4)],
                }],
            }]
        );
    }

    #[test]
    fn unmatched_delimiters_become_text() {
        let nodes = parse_inline(0, "2 * 3 and a_b and **open");
        assert_eq!(nodes, vec![text(0, 24)]);
    }

    #[test]
    fn parse_link() {
        let nodes = parse_inline(0, "[site](https://example.com)");
        assert_eq!(
            nodes,
            vec![InlineNode::Link {
                full: Span { start: 0, end: 27 },
                label: vec![text(1, 5)],
                url: Span { start: 7, end: 26 },
            }]
        );
    }

    #[test]
    fn link_without_url_is_text() {
        let nodes = parse_inline(0, "[site] (x)");
        assert_eq!(nodes, vec![text(0, 10)]);
    }

    #[test]
    fn line_break_marker() {
        let nodes = parse_inline(0, "a  \nb");
        assert_eq!(
            nodes,
            vec![
                text(0, 1),
                InlineNode::LineBreak(Span { start: 1, end: 4 }),
                text(4, 5)
            ]
        );
    }

    #[test]
    fn spans_are_offset_by_base() {
        let nodes = parse_inline(10, "*x*");
        assert_eq!(
            nodes,
            vec![InlineNode::Emphasis {
                full: Span { start: 10, end: 13 },
                children: vec![text(11, 12)],
            }]
        );
    }
}
