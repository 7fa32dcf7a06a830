//! # Inline Span Conversion
//!
//! Cursor-based inline parsing with explicit raw zones, followed by HTML
//! rendering of the parsed nodes.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, CodeSpan, Strong, Emphasis, Link, LineBreak)
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//! - **`render`**: `render_html()` turns nodes into HTML spans
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `**not bold**` `` renders as a single code
//! element with its delimiters left untouched.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod render;
pub mod types;

pub use parser::parse_inline;
pub use render::render_html;
pub use types::InlineNode;

/// Converts the inline Markdown spans of a single text unit to HTML.
///
/// Empty input is returned unchanged. The conversion is pure and leaves text
/// without Markdown delimiters byte-for-byte identical.
pub fn to_html(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let nodes = parse_inline(0, s);
    render_html(s, &nodes)
}
