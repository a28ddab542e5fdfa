//! Date/section partitioning.
//!
//! Second pipeline stage: walk the classified lines with a sticky
//! "current date" cursor and attach each completion entry, tagged with its
//! keyword kind, to the date in effect (or to the undated bucket when no date
//! marker has been seen yet).
//!
//! ```text
//! classified lines ──┬─ date marker   -> set cursor (or poison it if malformed)
//!                    ├─ COMPDAT line  -> emit (Simple, raw) under cursor
//!                    ├─ COMPDATL line -> emit (LocalGrid, raw) under cursor
//!                    └─ anything else -> drop / report per policy
//! ```
//!
//! Pattern precedence matters: a `COMPDATL` line also begins with a quoted
//! token followed by positional data, so the `COMPDAT` pattern explicitly
//! excludes a quote as the first character of its second token. The date
//! pattern is tried first, as a marker line can never start with a quote.
//!
//! A completion entry may span physical lines; lines opening with a quote but
//! missing the `/` terminator are buffered and joined until one arrives.
//!
//! The cursor never resets on block terminators: once a date is in effect it
//! applies to every subsequent completion until the next marker. A marker
//! whose day or month fails validation poisons the cursor instead, and
//! completions under a poisoned cursor are dropped with an issue rather than
//! grouped under a guessed date.

use crate::error::{Issue, ParseError};
use crate::{KeywordSet, Options, RawCompletion, SectionKind, UnrecognizedLinePolicy};

use super::classify::ClassifiedLine;

/// Output of partitioning: raw completion entries grouped by effective date
/// (insertion order, unique keys) plus the undated bucket and any issues.
#[derive(Debug, Default)]
pub(crate) struct Partitioned {
    pub dated: Vec<(String, Vec<RawCompletion>)>,
    pub undated: Vec<RawCompletion>,
    pub issues: Vec<Issue>,
}

impl Partitioned {
    fn emit(&mut self, cursor: &Cursor, entry: RawCompletion) {
        match cursor {
            Cursor::Unset => self.undated.push(entry),
            Cursor::Set(date) => match self.dated.iter_mut().find(|(key, _)| key == date) {
                Some((_, group)) => group.push(entry),
                None => self.dated.push((date.clone(), vec![entry])),
            },
            Cursor::Poisoned => {
                self.issues.push(Issue { line: entry.line, error: ParseError::NoEffectiveDate });
            }
        }
    }
}

#[derive(Debug)]
enum Cursor {
    Unset,
    Set(String),
    /// A malformed date marker was seen; date scoping is suspended until the
    /// next well-formed marker.
    Poisoned,
}

const MONTHS: &[&str] = &[
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "JLY", "AUG", "SEP", "OCT", "NOV", "DEC",
    "JANUARY", "FEBRUARY", "MARCH", "APRIL", "JUNE", "JULY", "AUGUST", "SEPTEMBER", "OCTOBER",
    "NOVEMBER", "DECEMBER",
];

fn valid_marker(day: &str, month: &str) -> bool {
    let day: u32 = match day.parse() {
        Ok(d) => d,
        Err(_) => return false,
    };
    (1..=31).contains(&day) && MONTHS.contains(&month.to_ascii_uppercase().as_str())
}

fn debug_enabled() -> bool {
    std::env::var_os("WELLDECK_DEBUG_PARSE").is_some()
}

/// Partition classified lines into (dated groups, undated list).
pub(crate) fn partition(lines: &[ClassifiedLine<'_>], options: &Options) -> Partitioned {
    // Anchored: a completion tail like "... 10 Z 1000 /" is date-shaped, and
    // markers only ever open their line. Completion lines open with a quote
    // and can never reach the marker branch.
    let date_re = regex!(r"^\s*(?P<date>(?P<day>\d{2})\s(?P<month>\w+)\s(?P<year>\d{4}))\s+/");
    let compdat_re = regex!(r"^\s*(?P<body>'\w+'\s+[^'].*?\s/)");
    let compdatl_re = regex!(r"^\s*(?P<body>'\w+'\s+'.*?\s/)");

    let mut out = Partitioned::default();
    let mut cursor = Cursor::Unset;
    // In-flight multi-line completion entry: joined text + start line.
    let mut pending: Option<(String, usize)> = None;

    for classified in lines {
        let (text, number) = match pending.take() {
            Some((mut buffered, start)) => {
                buffered.push(' ');
                buffered.push_str(classified.text);
                if !classified.text.contains('/') {
                    pending = Some((buffered, start));
                    continue;
                }
                (buffered, start)
            }
            None => {
                let trimmed = classified.text.trim_start();
                if trimmed.starts_with('\'') && !classified.text.contains('/') {
                    pending = Some((classified.text.to_string(), classified.number));
                    continue;
                }
                (classified.text.to_string(), classified.number)
            }
        };

        if let Some(caps) = date_re.captures(&text) {
            let date = caps["date"].to_string();
            if valid_marker(&caps["day"], &caps["month"]) {
                if debug_enabled() {
                    eprintln!("[partition] line {number}: effective date -> {date:?}");
                }
                cursor = Cursor::Set(date);
            } else {
                if debug_enabled() {
                    eprintln!("[partition] line {number}: malformed date marker {date:?}, poisoning cursor");
                }
                out.issues.push(Issue { line: number, error: ParseError::MalformedDate(date) });
                cursor = Cursor::Poisoned;
            }
        } else if let Some(caps) = compdat_re.captures(&text) {
            out.emit(
                &cursor,
                RawCompletion { kind: SectionKind::Simple, raw: caps["body"].to_string(), line: number },
            );
        } else if let Some(caps) = compdatl_re.captures(&text) {
            out.emit(
                &cursor,
                RawCompletion { kind: SectionKind::LocalGrid, raw: caps["body"].to_string(), line: number },
            );
        } else {
            let trimmed = text.trim();
            let structural = trimmed.is_empty()
                || trimmed.starts_with('/')
                || KeywordSet::all().starts_block(trimmed);
            if !structural && options.unrecognized_lines == UnrecognizedLinePolicy::Report {
                out.issues.push(Issue {
                    line: number,
                    error: ParseError::UnrecognizedLine(text.clone()),
                });
            }
        }
    }

    if let Some((buffered, start)) = pending {
        // An unterminated completion at end of input never matched anything.
        if options.unrecognized_lines == UnrecognizedLinePolicy::Report {
            out.issues.push(Issue { line: start, error: ParseError::UnrecognizedLine(buffered) });
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::classify::classify_lines;

    fn run(deck: &str) -> Partitioned {
        run_with(deck, &Options::default())
    }

    fn run_with(deck: &str, options: &Options) -> Partitioned {
        partition(&classify_lines(deck, KeywordSet::all()), options)
    }

    #[test]
    fn undated_entries_precede_the_first_marker() {
        let deck = "COMPDAT\n'W1' 10 10 1 3 OPEN 1* 1 2 1 3* 1.0 /\n/\n";
        let out = run(deck);
        assert!(out.dated.is_empty());
        assert_eq!(out.undated.len(), 1);
        assert_eq!(out.undated[0].kind, SectionKind::Simple);
        assert_eq!(out.undated[0].raw, "'W1' 10 10 1 3 OPEN 1* 1 2 1 3* 1.0 /");
    }

    #[test]
    fn cursor_is_sticky_across_blocks() {
        let deck = "DATES\n01 OCT 2018 /\n/\nCOMPDAT\n'W3' 10 10 1 3 OPEN 1* 1 2 1 3* 1.0 /\n/\nCOMPDATL\n'W6' 'LGR1' 10 10 2 2 OPEN 1* 1 2 1 3* 1.0918 /\n/\n";
        let out = run(deck);
        assert!(out.undated.is_empty());
        assert_eq!(out.dated.len(), 1);
        let (date, group) = &out.dated[0];
        assert_eq!(date, "01 OCT 2018");
        assert_eq!(group.len(), 2);
        assert_eq!(group[0].kind, SectionKind::Simple);
        assert_eq!(group[1].kind, SectionKind::LocalGrid);
    }

    #[test]
    fn compdatl_never_matches_the_simple_pattern() {
        let deck = "COMPDATL\n'W6' 'LGR1' 10 10 2 2 OPEN 1* 1.0 /\n/\n";
        let out = run(deck);
        assert_eq!(out.undated[0].kind, SectionKind::LocalGrid);
    }

    #[test]
    fn repeated_date_markers_share_one_key() {
        let deck = "DATES\n01 OCT 2018 /\n/\nCOMPDAT\n'W1' 10 10 1 3 OPEN 1* 1 2 1 3* 1.0 /\n/\nDATES\n01 OCT 2018 /\n/\nCOMPDAT\n'W2' 11 11 1 3 OPEN 1* 1 2 1 3* 1.0 /\n/\n";
        let out = run(deck);
        assert_eq!(out.dated.len(), 1);
        assert_eq!(out.dated[0].1.len(), 2);
    }

    #[test]
    fn date_only_blocks_produce_no_keys() {
        let deck = "DATES\n01 OCT 2018 /\n/\n";
        let out = run(deck);
        assert!(out.dated.is_empty());
        assert!(out.undated.is_empty());
        assert!(out.issues.is_empty());
    }

    #[test]
    fn malformed_marker_poisons_subsequent_completions() {
        let deck = "DATES\n99 QQQ 2018 /\n/\nCOMPDAT\n'W1' 10 10 1 3 OPEN 1* 1 2 1 3* 1.0 /\n/\nDATES\n01 OCT 2018 /\n/\nCOMPDAT\n'W2' 10 10 1 3 OPEN 1* 1 2 1 3* 1.0 /\n/\n";
        let out = run(deck);
        assert_eq!(out.issues.len(), 2);
        assert_eq!(out.issues[0].error, ParseError::MalformedDate("99 QQQ 2018".to_string()));
        assert_eq!(out.issues[1].error, ParseError::NoEffectiveDate);
        // A valid marker re-arms date scoping.
        assert_eq!(out.dated.len(), 1);
        assert_eq!(out.dated[0].0, "01 OCT 2018");
        assert_eq!(out.dated[0].1.len(), 1);
    }

    #[test]
    fn date_shaped_completion_tails_stay_completions() {
        // "10 Z 1000 /" (d-factor, direction, radius) has the marker shape;
        // it must not poison the cursor or drop the neighboring records.
        let deck = "COMPDAT\n'W1' 10 10 1 3 OPEN 1 1 2 1 1 10 Z 1000 /\n'W2' 10 10 1 3 OPEN 1* 1 2 1 3* 1.0 /\n/\n";
        let out = run(deck);
        assert!(out.issues.is_empty());
        assert_eq!(out.undated.len(), 2);
        assert_eq!(out.undated[0].raw, "'W1' 10 10 1 3 OPEN 1 1 2 1 1 10 Z 1000 /");
        assert_eq!(out.undated[1].kind, SectionKind::Simple);
    }

    #[test]
    fn completion_may_span_physical_lines() {
        let deck = "COMPDAT\n'W1' 10 10 1 3\n   OPEN 1* 1 2 1\n   3* 1.0 /\n/\n";
        let out = run(deck);
        assert_eq!(out.undated.len(), 1);
        assert_eq!(out.undated[0].raw, "'W1' 10 10 1 3    OPEN 1* 1 2 1    3* 1.0 /");
        assert_eq!(out.undated[0].line, 2);
    }

    #[test]
    fn unrecognized_lines_are_silent_by_default_and_reported_on_request() {
        let deck = "COMPDAT\nW1 10 10 1 3 OPEN /\n/\n";
        assert!(run(deck).issues.is_empty());

        let options = Options { unrecognized_lines: UnrecognizedLinePolicy::Report };
        let out = run_with(deck, &options);
        assert_eq!(out.issues.len(), 1);
        assert_eq!(out.issues[0].line, 2);
        assert!(matches!(out.issues[0].error, ParseError::UnrecognizedLine(_)));
    }
}
