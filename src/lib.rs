extern crate self as welldeck;

use bitflags::bitflags;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod record;

pub use api::{
    DateIndex, Options, Schedule, UnrecognizedLinePolicy, normalize_query_arguments, parse,
    parse_with, query,
};
pub use error::{Issue, ParseError};
pub use record::{CompletionData, CompletionRecord, Direction, WellStatus};

// --- Internal types ---------------------------------------------------------

bitflags! {
    /// Set of keyword blocks the classifier recognizes.
    ///
    /// `COMPDAT` is a textual prefix of `COMPDATL`, so membership checks must
    /// test the longer keyword first (see [`KeywordSet::starts_block`]).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct KeywordSet: u8 {
        const COMPDAT = 1 << 0;
        const COMPDATL = 1 << 1;
        const DATES = 1 << 2;
    }
}

impl KeywordSet {
    /// Does `line` open a block for a keyword in this set?
    pub(crate) fn starts_block(&self, line: &str) -> bool {
        if line.starts_with("COMPDATL") {
            return self.contains(Self::COMPDATL);
        }
        if line.starts_with("COMPDAT") {
            return self.contains(Self::COMPDAT);
        }
        if line.starts_with("DATES") {
            return self.contains(Self::DATES);
        }
        false
    }
}

/// Which completion keyword a classified line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SectionKind {
    /// A `COMPDAT` entry (14 fields).
    Simple,
    /// A `COMPDATL` entry (15 fields, scoped to a named local grid).
    LocalGrid,
}

impl SectionKind {
    pub(crate) fn field_count(&self) -> usize {
        match self {
            SectionKind::Simple => 14,
            SectionKind::LocalGrid => 15,
        }
    }
}

/// A completion entry after partitioning: kind tag plus the raw, untokenized
/// data portion (name, positional data and the trailing terminator).
#[derive(Debug, Clone)]
pub(crate) struct RawCompletion {
    pub kind: SectionKind,
    pub raw: String,
    /// 1-based physical line where the entry started, for diagnostics.
    pub line: usize,
}

/// A positional token after normalization.
///
/// `Default` is the placeholder produced by `N*` run-length expansion; it never
/// survives record construction (the builder substitutes the field's declared
/// default or rejects the line).
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Int(i32),
    Num(f64),
    Text(String),
    Default,
}
