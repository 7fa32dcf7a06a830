//! Application identifiers used as the `appId` of a converted policy.

use std::path::{Component, Path};

const APPS_DIR: &str = "apps";
const FALLBACK_SLUG: &str = "app";

/// Lowercases `text` and collapses every run of characters outside
/// `[a-z0-9]` into a single `-`, trimming dashes from both ends.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for ch in text.trim().to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Picks the identifier for a draft.
///
/// 1. the app name from the title's parentheses
/// 2. the directory following the first `apps` component (`apps/<id>/...`)
/// 3. the draft's parent directory name, or its file stem at the root
pub fn derive_app_id(app_name: Option<&str>, draft_path: &Path) -> String {
    if let Some(name) = app_name {
        return slugify(name);
    }

    let parts: Vec<&str> = draft_path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect();
    if let Some(id) = parts
        .iter()
        .position(|part| *part == APPS_DIR)
        .and_then(|idx| parts.get(idx + 1))
    {
        return slugify(id);
    }

    let fallback = draft_path
        .parent()
        .and_then(Path::file_name)
        .or_else(|| draft_path.file_stem())
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    slugify(fallback)
}
