use crate::parsing::span::Span;

/// A parsed inline node with byte spans into the converted text.
///
/// Container variants (`Strong`, `Emphasis`, `Link`) own their parsed
/// children; leaf variants only store spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// A code span (backtick-delimited). This is a "raw zone" - no parsing inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Inner span (content between backticks).
        inner: Span,
    },
    /// `**text**` or `__text__`.
    Strong {
        full: Span,
        children: Vec<InlineNode>,
    },
    /// `*text*` or `_text_`.
    Emphasis {
        full: Span,
        children: Vec<InlineNode>,
    },
    /// `[label](url)`.
    Link {
        full: Span,
        label: Vec<InlineNode>,
        /// Span of the url between the parentheses, taken literally.
        url: Span,
    },
    /// Two spaces followed by a newline.
    LineBreak(Span),
}

impl InlineNode {
    /// Extracts the full span from any inline node variant.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) | InlineNode::LineBreak(sp) => *sp,
            InlineNode::CodeSpan { full, .. }
            | InlineNode::Strong { full, .. }
            | InlineNode::Emphasis { full, .. }
            | InlineNode::Link { full, .. } => *full,
        }
    }
}
