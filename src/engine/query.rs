//! Date-scoped record lookup and query-argument normalization.
//!
//! Lookup is exact-equality, first-match-wins in file order, and scoped to a
//! single date key — it never searches the undated list or other dates. A
//! miss is a plain `None`, never an error.
//!
//! The argument normalizer is a pure formatting step: it accepts a loosely
//! separated numeric date plus arbitrary-case well/status text and renders
//! the canonical triple the index stores (`"01 OCT 2018"`, `"W3"`, `"OPEN"`).

use chrono::NaiveDate;

use crate::api::Schedule;
use crate::error::ParseError;
use crate::record::CompletionRecord;

/// Find the first record under `date` matching `name` and `status`.
///
/// `date`/`name`/`status` must already be canonical (see
/// [`normalize_query_arguments`]); `name` is unquoted — the deck quoting is
/// applied here so callers never deal with it.
pub(crate) fn find_completion<'a>(
    schedule: &'a Schedule,
    date: &str,
    name: &str,
    status: &str,
) -> Option<&'a CompletionRecord> {
    let quoted = format!("'{name}'");
    schedule
        .dated
        .get(date)?
        .iter()
        .find(|record| record.status().as_str() == status && record.name() == quoted)
}

/// Render `(date, name, status)` in canonical form.
///
/// The date may use any non-alphanumeric separators between numeric
/// day/month/year (`"01/10.2018"`, `"01-10-2018"`, ...); it is re-rendered as
/// `DD MON YYYY` with a 3-letter upper-case month. Name and status are
/// upper-cased. Fails only with [`ParseError::MalformedDate`].
pub(crate) fn normalize_query_arguments(
    date: &str,
    name: &str,
    status: &str,
) -> Result<(String, String, String), ParseError> {
    let numeric = date
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let parsed = NaiveDate::parse_from_str(&numeric, "%d %m %Y")
        .map_err(|_| ParseError::MalformedDate(date.to_string()))?;
    let canonical = parsed.format("%d %b %Y").to_string().to_uppercase();
    Ok((canonical, name.to_uppercase(), status.to_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_normalize_to_canonical_triples() {
        // (date, name, status) -> canonical, across separator styles.
        let cases = vec![
            (("01/10.2018", "w3", "OPeN"), ("01 OCT 2018", "W3", "OPEN")),
            (("01.09.2018", "w2", "open"), ("01 SEP 2018", "W2", "OPEN")),
            (("01-07-2018", "w3", "shut"), ("01 JUL 2018", "W3", "SHUT")),
            (("15 02 2020", "lgr_w6", "auto"), ("15 FEB 2020", "LGR_W6", "AUTO")),
        ];
        for ((date, name, status), (want_date, want_name, want_status)) in cases {
            let (d, n, s) = normalize_query_arguments(date, name, status).unwrap();
            assert_eq!((d.as_str(), n.as_str(), s.as_str()), (want_date, want_name, want_status));
        }
    }

    #[test]
    fn unparseable_dates_are_malformed() {
        for date in ["", "2018", "32/01/2018", "01/13/2018", "first of october"] {
            let err = normalize_query_arguments(date, "w1", "open").unwrap_err();
            assert_eq!(err, ParseError::MalformedDate(date.to_string()), "input {date:?}");
        }
    }
}
