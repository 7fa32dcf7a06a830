use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

static DIGIT_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("invalid digit run regex"));

/// Day-month-year grammars, tried in order, as `(shape, chrono format)`.
///
/// A candidate must match the shape before chrono parses it; chrono on its
/// own accepts signed or five-digit years and unseparated fields. Month
/// names match case-insensitively.
pub const UK_GRAMMARS: [(&str, &str); 5] = [
    (r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}$", "%d/%m/%Y"),
    (r"^[0-9]{1,2}-[0-9]{1,2}-[0-9]{4}$", "%d-%m-%Y"),
    (r"^[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4}$", "%d.%m.%Y"),
    (r"^[0-9]{1,2}\s+[A-Za-z]{3}\s+[0-9]{4}$", "%d %b %Y"),
    (r"^[0-9]{1,2}\s+[A-Za-z]+\s+[0-9]{4}$", "%d %B %Y"),
];

static GRAMMARS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    UK_GRAMMARS
        .iter()
        .map(|(shape, fmt)| (Regex::new(shape).expect("invalid date shape regex"), *fmt))
        .collect()
});

/// Years a calendar date may carry.
const YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarError {
    /// No grammar matched and fewer than three digit runs were present.
    TooFewNumbers,
    /// The numbers found do not form a calendar date.
    OutOfRange,
}

/// Parses a UK-ordered date string.
///
/// Grammars in [`UK_GRAMMARS`] are tried first; if none matches, the first
/// three runs of digits are read as day, month and year. Extra numbers on the
/// line (a version, an ordinal suffix's number) are not filtered out.
pub fn parse_uk_date(raw: &str) -> Result<NaiveDate, GrammarError> {
    let raw = raw.trim();
    if let Some(date) = GRAMMARS
        .iter()
        .filter(|(shape, _)| shape.is_match(raw))
        .find_map(|(_, fmt)| NaiveDate::parse_from_str(raw, fmt).ok())
        .filter(|date| YEARS.contains(&date.year()))
    {
        return Ok(date);
    }
    date_from_digit_runs(raw)
}

fn date_from_digit_runs(raw: &str) -> Result<NaiveDate, GrammarError> {
    let runs: Vec<&str> = DIGIT_RUN_RE
        .find_iter(raw)
        .take(3)
        .map(|m| m.as_str())
        .collect();
    let [day, month, year] = runs.as_slice() else {
        return Err(GrammarError::TooFewNumbers);
    };

    let day: u32 = day.parse().map_err(|_| GrammarError::OutOfRange)?;
    let month: u32 = month.parse().map_err(|_| GrammarError::OutOfRange)?;
    let year: i32 = year.parse().map_err(|_| GrammarError::OutOfRange)?;
    if !YEARS.contains(&year) {
        return Err(GrammarError::OutOfRange);
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or(GrammarError::OutOfRange)
}
