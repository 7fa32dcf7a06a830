//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing of a section body.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a
//!    `LineClass` from local facts only (heading, blank, list, quote, text)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` tracks the open
//!    container and emits `Block`s as runs close
//!
//! ## Modules
//!
//! - **`types`**: `Block` enum
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, ListItem, BlockQuote)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block grouping
//! - **`render`**: `Block::to_html` fragment rendering
//!
//! ## Key Invariants
//!
//! - Lists and blockquotes are flat; there is never more than one open container
//! - Fragment order follows the order blocks open in the source

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod render;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::Block;

/// Groups the lines of `body` into blocks.
pub fn parse_blocks(body: &str) -> Vec<Block> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in body.lines() {
        builder.push(classifier.classify(line));
    }

    builder.finish()
}

/// Converts a section body into its ordered HTML content fragments.
pub fn convert_body(body: &str) -> Vec<String> {
    parse_blocks(body).iter().map(Block::to_html).collect()
}
