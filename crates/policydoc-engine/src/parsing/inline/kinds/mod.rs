//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters. The parser calls
//! these constants; it never hardcodes `` ` ``, `**` or `](`.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK` - raw zone that suppresses other parsing
//! - **`Emphasis`**: `STAR`, `UNDERSCORE` - single delimiters are emphasis,
//!   doubled delimiters are strong
//! - **`Link`**: `[label](url)` brackets
//! - **`LineBreak`**: two trailing spaces before a newline

pub mod code_span;
pub mod emphasis;
pub mod line_break;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use line_break::LineBreak;
pub use link::Link;
