pub mod document;

pub use document::{ConvertedDocument, DocumentMetadata, MetadataOptions, PolicyDocument, Section};
