use super::{
    classify::LineClass,
    kinds::Heading,
    types::Block,
};

/// Open container run, with the index in the output where its block belongs.
#[derive(Debug)]
enum ContainerState {
    None,
    List { items: Vec<String>, at: usize },
    Quote { lines: Vec<String>, at: usize },
}

/// Line-driven state machine grouping classified lines into [`Block`]s.
///
/// Containers are flushed on a blank line, on a switch to the other container
/// kind, and at the end of input. Headings are emitted immediately and never
/// close a container; the container's block is placed where its run opened.
pub struct BlockBuilder {
    state: ContainerState,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            state: ContainerState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: LineClass<'_>) {
        match line {
            LineClass::Heading(text) => self.out.push(Block::Heading {
                level: Heading::LEVEL,
                text: text.to_string(),
            }),
            LineClass::Blank => self.flush_container(),
            LineClass::ListItem(text) => self.push_list_item(text),
            LineClass::QuoteLine(text) => self.push_quote_line(text),
            LineClass::Text(text) => self.push_text(text),
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_container();
        self.out
    }

    fn push_list_item(&mut self, text: &str) {
        if let ContainerState::List { items, .. } = &mut self.state {
            items.push(text.to_string());
            return;
        }
        self.flush_container();
        self.state = ContainerState::List {
            items: vec![text.to_string()],
            at: self.out.len(),
        };
    }

    fn push_quote_line(&mut self, text: &str) {
        if let ContainerState::Quote { lines, .. } = &mut self.state {
            lines.push(text.to_string());
            return;
        }
        self.flush_container();
        self.state = ContainerState::Quote {
            lines: vec![text.to_string()],
            at: self.out.len(),
        };
    }

    /// Soft-wraps `text` onto the open container's last entry, or emits a paragraph.
    fn push_text(&mut self, text: &str) {
        match &mut self.state {
            ContainerState::List { items: entries, .. }
            | ContainerState::Quote { lines: entries, .. } => {
                if let Some(last) = entries.last_mut() {
                    last.push(' ');
                    last.push_str(text);
                }
            }
            ContainerState::None => self.out.push(Block::Paragraph {
                text: text.to_string(),
            }),
        }
    }

    fn flush_container(&mut self) {
        let (block, at) = match std::mem::replace(&mut self.state, ContainerState::None) {
            ContainerState::None => return,
            ContainerState::List { items, at } => (Block::List { items }, at),
            ContainerState::Quote { lines, at } => (Block::BlockQuote { lines }, at),
        };
        if !block.is_empty() {
            self.out.insert(at, block);
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
