pub mod blocks;
pub mod html;
pub mod inline;
pub mod sections;
pub mod span;
pub mod title;

pub use blocks::{convert_body, parse_blocks};
pub use sections::parse_sections;
pub use title::{Title, extract_title};
