use std::path::Path;

use crate::{
    dates,
    error::ConvertError,
    identity,
    models::{ConvertedDocument, MetadataOptions, PolicyDocument},
    parsing,
};

/// Converts one Markdown policy draft.
///
/// The title is resolved first, then the effective date, then sections; the
/// first failure is returned and nothing partial is produced.
pub fn convert(text: &str) -> Result<ConvertedDocument, ConvertError> {
    let title = parsing::extract_title(text)?;
    let date_found = dates::extract_date(text)?;
    let sections = parsing::parse_sections(text);
    log::debug!(
        "converted {:?}: {} sections, dated {}",
        title.text,
        sections.len(),
        date_found
    );

    Ok(ConvertedDocument {
        title: title.text,
        app_name: title.app_name,
        sections,
        date_found,
    })
}

/// Converts `text` and attaches the identifier derived from `draft_path`
/// plus caller-supplied metadata.
pub fn build_policy(
    text: &str,
    draft_path: &Path,
    options: &MetadataOptions,
) -> Result<PolicyDocument, ConvertError> {
    let converted = convert(text)?;
    let app_id = identity::derive_app_id(converted.app_name.as_deref(), draft_path);
    Ok(PolicyDocument::new(converted, app_id, options))
}
