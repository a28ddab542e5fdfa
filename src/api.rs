use crate::engine;
use crate::error::{Issue, ParseError};
use crate::record::CompletionRecord;
use crate::{KeywordSet, RawCompletion};

/// What to do with a line inside a recognized block that matches none of the
/// known patterns.
///
/// Real decks carry plenty of keywords this parser does not model, so the
/// permissive default drops them without a trace; `Report` records each one
/// as an [`Issue`] instead. Neither aborts the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnrecognizedLinePolicy {
    #[default]
    Ignore,
    Report,
}

/// Options that affect parsing behavior.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub unrecognized_lines: UnrecognizedLinePolicy,
}

/// Completion records grouped by effective date.
///
/// Keys are unique, normalized date strings (`"01 OCT 2018"`) in deck order;
/// each group keeps its records in file order. A date never seen in the deck
/// is never a key, and a key always holds at least one record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateIndex {
    groups: Vec<(String, Vec<CompletionRecord>)>,
}

impl DateIndex {
    /// Records under `date`, if the deck defined any.
    pub fn get(&self, date: &str) -> Option<&[CompletionRecord]> {
        self.groups.iter().find(|(key, _)| key == date).map(|(_, group)| group.as_slice())
    }

    /// Date keys in deck order.
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CompletionRecord])> {
        self.groups.iter().map(|(key, group)| (key.as_str(), group.as_slice()))
    }

    /// Number of distinct dates.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn push(&mut self, date: &str, record: CompletionRecord) {
        match self.groups.iter_mut().find(|(key, _)| key == date) {
            Some((_, group)) => group.push(record),
            None => self.groups.push((date.to_string(), vec![record])),
        }
    }
}

/// Result of parsing a deck: records grouped by effective date, records seen
/// before any date marker, and the per-line problems encountered on the way.
///
/// Records are built once and read-only thereafter; there is no update or
/// delete surface.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    pub dated: DateIndex,
    pub undated: Vec<CompletionRecord>,
    pub issues: Vec<Issue>,
}

/// Parse a schedule deck with default [`Options`].
///
/// # Example
/// ```
/// let schedule = welldeck::parse("COMPDAT\n'W1' 10 10 1 3 OPEN 1* 1 2 1 3* 1.0 /\n/\n");
/// assert_eq!(schedule.undated.len(), 1);
/// assert_eq!(schedule.undated[0].name(), "'W1'");
/// ```
pub fn parse(text: &str) -> Schedule {
    parse_with(text, &Options::default())
}

/// Parse a schedule deck.
///
/// Per-line problems (malformed dates, bad default runs, field count or type
/// mismatches) drop the affected record whole and land in
/// [`Schedule::issues`]; the rest of the deck still parses.
pub fn parse_with(text: &str, options: &Options) -> Schedule {
    let classified = engine::classify_lines(text, KeywordSet::all());
    let partitioned = engine::partition(&classified, options);

    let mut schedule = Schedule { issues: partitioned.issues, ..Schedule::default() };
    for (date, group) in &partitioned.dated {
        for raw in group {
            match build_one(raw) {
                Ok(record) => schedule.dated.push(date, record),
                Err(issue) => schedule.issues.push(issue),
            }
        }
    }
    for raw in &partitioned.undated {
        match build_one(raw) {
            Ok(record) => schedule.undated.push(record),
            Err(issue) => schedule.issues.push(issue),
        }
    }
    schedule.issues.sort_by_key(|issue| issue.line);
    schedule
}

fn build_one(raw: &RawCompletion) -> Result<CompletionRecord, Issue> {
    engine::normalize_tokens(&raw.raw)
        .and_then(|tokens| engine::build_record(raw.kind, tokens))
        .map_err(|error| Issue { line: raw.line, error })
}

/// Look up the first completion matching `(date, well, status)`.
///
/// Arguments arrive in arbitrary user casing and date-separator style; they
/// are normalized first (see [`normalize_query_arguments`]), so callers never
/// deal with the internal date format. A miss — unknown date key or no
/// matching record under it — is `Ok(None)`, never an error; only an
/// unparseable date fails.
///
/// # Example
/// ```
/// let deck = "DATES\n01 OCT 2018 /\n/\nCOMPDAT\n'W3' 10 10 1 3 OPEN 1* 1 2 1 3* 1.0 /\n/\n";
/// let schedule = welldeck::parse(deck);
/// let hit = welldeck::query(&schedule, "01/10.2018", "w3", "OPeN").unwrap();
/// assert_eq!(hit.unwrap().name(), "'W3'");
/// ```
pub fn query<'a>(
    schedule: &'a Schedule,
    date: &str,
    well: &str,
    status: &str,
) -> Result<Option<&'a CompletionRecord>, ParseError> {
    let (date, well, status) = normalize_query_arguments(date, well, status)?;
    Ok(engine::find_completion(schedule, &date, &well, &status))
}

/// Normalize query arguments to the canonical `(date, name, status)` triple.
///
/// Pure formatting, no lookup: `("01/10.2018", "w3", "OPeN")` becomes
/// `("01 OCT 2018", "W3", "OPEN")`.
pub fn normalize_query_arguments(
    date: &str,
    well: &str,
    status: &str,
) -> Result<(String, String, String), ParseError> {
    engine::normalize_query_arguments(date, well, status)
}
