//! Parse errors and per-line issues.
//!
//! Errors are local to one completion line or date marker; the pipeline never
//! aborts the rest of the deck over them. Instead the offending record is
//! dropped whole and an [`Issue`] is recorded on the resulting
//! [`Schedule`](crate::Schedule). Queries never produce errors on a miss.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Date text could not be parsed into day/month/year.
    #[error("malformed date {0:?}")]
    MalformedDate(String),

    /// A line inside a keyword block matched none of the known patterns.
    ///
    /// Only reported under [`UnrecognizedLinePolicy::Report`](crate::UnrecognizedLinePolicy);
    /// the default policy drops such lines silently.
    #[error("unrecognized line inside keyword block: {0:?}")]
    UnrecognizedLine(String),

    /// A completion line did not tokenize to the 14-field (`COMPDAT`) or
    /// 15-field (`COMPDATL`) layout.
    #[error("expected {expected} fields, found {found}")]
    FieldCountMismatch { expected: usize, found: usize },

    /// A `N*` default run with a missing or non-positive count.
    #[error("invalid default run {0:?}")]
    UnknownDefaultRun(String),

    /// A default placeholder landed on a field with no declared default
    /// (well name, grid coordinates, layer range, local grid name).
    #[error("field {position} has no default and must be supplied")]
    MissingRequiredField { position: usize },

    /// A token was type-incompatible with its field position.
    #[error("field {position}: unusable value {token:?}")]
    InvalidField { position: usize, token: String },

    /// A completion line followed a malformed date marker; rather than guess
    /// an effective date, the record is dropped.
    #[error("no effective date: preceding DATES entry was malformed")]
    NoEffectiveDate,
}

/// A per-line problem encountered while parsing a deck.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    /// 1-based physical line number in the input deck.
    pub line: usize,
    pub error: ParseError,
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.error)
    }
}
