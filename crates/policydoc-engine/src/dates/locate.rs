use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::DateOrigin;

static LAST_UPDATED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^\s*last\s*updated\s*[:\-]?\s*(.+?)\s*$")
        .expect("invalid last-updated regex")
});
static UPDATED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^\s*updated\s*[:\-]?\s*(.+?)\s*$").expect("invalid updated regex")
});
static EFFECTIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^\s*effective\s*(?:date|as\s*of)\s*[:\-]?\s*(.+?)\s*$")
        .expect("invalid effective-date regex")
});
static NUMERIC_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{1,2}[./-][0-9]{1,2}[./-][0-9]{4}").expect("invalid numeric date regex")
});

/// A located date string and the rule that found it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateCandidate {
    pub origin: DateOrigin,
    pub raw: String,
}

/// Replaces em dashes, en dashes and full-width colons with ASCII.
pub fn normalize_punctuation(text: &str) -> Cow<'_, str> {
    if !text.contains(['\u{2014}', '\u{2013}', '\u{FF1A}']) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.replace(['\u{2014}', '\u{2013}'], "-")
            .replace('\u{FF1A}', ":"),
    )
}

/// Finds the date string of `text`, first match wins.
///
/// Label lines are searched in priority order (`Last Updated`, `Updated`,
/// `Effective Date` / `Effective as of`); each label may be followed by `:`
/// or `-` and the rest of the line is captured. Without a label, the first
/// `d[d]/m[m]/yyyy`-shaped substring anywhere is used (`.` and `-` separators
/// too).
pub fn locate_date(text: &str) -> Option<DateCandidate> {
    let text = normalize_punctuation(text);
    let labels: [(DateOrigin, &Regex); 3] = [
        (DateOrigin::LastUpdated, &LAST_UPDATED_RE),
        (DateOrigin::Updated, &UPDATED_RE),
        (DateOrigin::EffectiveDate, &EFFECTIVE_RE),
    ];

    for (origin, re) in labels {
        if let Some(raw) = re.captures(&text).and_then(|c| c.get(1)) {
            return Some(DateCandidate {
                origin,
                raw: raw.as_str().trim().to_string(),
            });
        }
    }

    NUMERIC_DATE_RE.find(&text).map(|m| DateCandidate {
        origin: DateOrigin::NumericFallback,
        raw: m.as_str().to_string(),
    })
}
