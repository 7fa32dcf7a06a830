use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConvertError;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*#\s+(.+?)\s*$").expect("invalid title regex"));
static APP_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").expect("invalid app name regex"));

/// The document's level-1 heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    /// Full heading text, trimmed.
    pub text: String,
    /// Contents of the first parenthesised group in the heading, if any.
    pub app_name: Option<String>,
}

/// Finds the first `# ` heading in `text`.
pub fn extract_title(text: &str) -> Result<Title, ConvertError> {
    let caps = TITLE_RE.captures(text).ok_or(ConvertError::MissingTitle)?;
    let title = caps.get(1).map_or("", |m| m.as_str()).trim().to_string();
    let app_name = APP_NAME_RE
        .captures(&title)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|name| !name.is_empty());

    Ok(Title {
        text: title,
        app_name,
    })
}
