//! Converts Markdown privacy-policy drafts into structured documents: a
//! title, level-2 sections holding HTML fragments, and an effective date.
//!
//! The engine is pure; reading drafts and writing JSON belong to the caller.

mod convert;
pub mod dates;
pub mod error;
pub mod identity;
pub mod models;
pub mod parsing;

pub use convert::{build_policy, convert};
pub use error::{ConvertError, DateMiss, DateOrigin};
pub use models::{ConvertedDocument, DocumentMetadata, MetadataOptions, PolicyDocument, Section};
