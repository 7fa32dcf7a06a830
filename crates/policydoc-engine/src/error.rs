use std::fmt;

use thiserror::Error;

/// Which rule located the date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrigin {
    /// A `Last Updated` line.
    LastUpdated,
    /// An `Updated` line.
    Updated,
    /// An `Effective Date` / `Effective as of` line.
    EffectiveDate,
    /// The first `dd/mm/yyyy`-shaped substring anywhere in the document.
    NumericFallback,
}

impl fmt::Display for DateOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DateOrigin::LastUpdated => "'Last Updated' line",
            DateOrigin::Updated => "'Updated' line",
            DateOrigin::EffectiveDate => "'Effective Date' line",
            DateOrigin::NumericFallback => "first dd/mm/yyyy date in document",
        };
        f.write_str(label)
    }
}

/// Why no date could be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateMiss {
    #[error(
        "could not find a UK-style 'Last Updated' / 'Updated' / 'Effective Date' line or dd/mm/yyyy date"
    )]
    NoCandidate,

    #[error("unrecognised UK date format {raw:?} (from {origin})")]
    Unrecognised { origin: DateOrigin, raw: String },
}

/// Terminal failure converting one document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("could not find a top-level '# ' title in the markdown")]
    MissingTitle,

    #[error(transparent)]
    MissingDate(#[from] DateMiss),

    #[error("{raw:?} is not a valid calendar date (from {origin})")]
    InvalidDate { origin: DateOrigin, raw: String },
}
