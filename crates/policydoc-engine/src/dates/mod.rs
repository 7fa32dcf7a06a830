//! Effective-date extraction: locate a date string, then parse it with UK
//! day-month-year grammars.

pub mod grammar;
pub mod locate;

use chrono::NaiveDate;

use crate::error::{ConvertError, DateMiss};
pub use grammar::{GrammarError, parse_uk_date};
pub use locate::{DateCandidate, locate_date, normalize_punctuation};

/// Finds and parses the document's effective date.
///
/// The first located candidate is final: if it cannot be parsed, lower
/// priority labels and the numeric fallback are not consulted.
pub fn extract_date(text: &str) -> Result<NaiveDate, ConvertError> {
    let DateCandidate { origin, raw } = locate_date(text).ok_or(DateMiss::NoCandidate)?;
    log::debug!("date candidate {raw:?} from {origin}");

    parse_uk_date(&raw).map_err(|err| match err {
        GrammarError::TooFewNumbers => DateMiss::Unrecognised { origin, raw }.into(),
        GrammarError::OutOfRange => ConvertError::InvalidDate { origin, raw },
    })
}
