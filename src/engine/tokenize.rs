//! Token normalization.
//!
//! Third pipeline stage: turn one raw completion substring into positional
//! tokens matching record field order (before the local-grid reordering).
//! Two transforms run in sequence:
//!
//! - **Default run-length expansion**: a `N*` token is not a value; it stands
//!   for N consecutive defaulted fields and is replaced by N placeholder
//!   entries, shifting later tokens accordingly. `/` terminators and empty
//!   splits are discarded. A `*` with a missing or non-positive count is a
//!   fatal error for the line.
//! - **Type coercion**: indices are counted against the raw positional layout
//!   (name, [local-grid-name], i, j, k-upper, k-lower, status, ...). Tokens at
//!   index <= 5 made solely of decimal digits become integers; numeric tokens
//!   past index 5 (at most one decimal point) become floats; everything else
//!   stays text.

use crate::Token;
use crate::error::ParseError;

/// Normalize one raw completion substring into typed positional tokens.
pub(crate) fn normalize_tokens(raw: &str) -> Result<Vec<Token>, ParseError> {
    let mut expanded: Vec<&str> = Vec::new();
    for word in raw.split_whitespace() {
        if word == "/" {
            continue;
        }
        match word.strip_suffix('*') {
            Some(count) => {
                let count: usize = count
                    .parse()
                    .ok()
                    .filter(|n| *n >= 1)
                    .ok_or_else(|| ParseError::UnknownDefaultRun(word.to_string()))?;
                expanded.extend(std::iter::repeat_n("*", count));
            }
            None => expanded.push(word),
        }
    }

    Ok(expanded.iter().enumerate().map(|(idx, word)| coerce(idx, word)).collect())
}

fn coerce(idx: usize, word: &str) -> Token {
    if word == "*" {
        return Token::Default;
    }
    if idx <= 5 {
        if let Ok(value) = word.parse::<i32>() {
            if word.bytes().all(|b| b.is_ascii_digit()) {
                return Token::Int(value);
            }
        }
    } else if is_numeric(word) {
        if let Ok(value) = word.parse::<f64>() {
            return Token::Num(value);
        }
    }
    Token::Text(word.to_string())
}

/// Decimal digits with at most one `.` (no sign, no exponent). Matches the
/// deck's numeric field grammar.
fn is_numeric(word: &str) -> bool {
    let mut dots = 0;
    let mut digits = 0;
    for b in word.bytes() {
        match b {
            b'.' => dots += 1,
            b'0'..=b'9' => digits += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Token::{Default, Int, Num, Text};

    fn text(s: &str) -> Token {
        Text(s.to_string())
    }

    #[test]
    fn simple_line_expands_to_fourteen_tokens() {
        let raw = "'W1' 10 10  1   3 \tOPEN \t1* \t1\t2 \t1 \t3* \t\t\t1.0 /";
        let tokens = normalize_tokens(raw).unwrap();
        assert_eq!(
            tokens,
            vec![
                text("'W1'"),
                Int(10),
                Int(10),
                Int(1),
                Int(3),
                text("OPEN"),
                Default,
                Num(1.0),
                Num(2.0),
                Num(1.0),
                Default,
                Default,
                Default,
                Num(1.0),
            ]
        );
    }

    #[test]
    fn local_grid_line_expands_to_fifteen_tokens() {
        let raw = "'W6' 'LGR1' 10 10  2   2 \tOPEN \t1* \t1\t2 \t1 \t3* \t\t\t1.0918 /";
        let tokens = normalize_tokens(raw).unwrap();
        assert_eq!(tokens.len(), 15);
        assert_eq!(tokens[0], text("'W6'"));
        assert_eq!(tokens[1], text("'LGR1'"));
        // Geometry still coerces to integers: the boundary index counts the
        // raw layout, local-grid name included.
        assert_eq!(&tokens[2..6], &[Int(10), Int(10), Int(2), Int(2)]);
        assert_eq!(tokens[14], Num(1.0918));
    }

    #[test]
    fn run_length_markers_insert_and_shift() {
        // (input, expected) pairs exercising expansion at several positions.
        let cases: Vec<(&str, Vec<Token>)> = vec![
            ("2* 1.0", vec![Default, Default, text("1.0")]),
            ("1.0 2*", vec![text("1.0"), Default, Default]),
            ("5 1* 7", vec![Int(5), Default, Int(7)]),
            ("10*", vec![Default; 10]),
        ];
        for (raw, expected) in cases {
            assert_eq!(normalize_tokens(raw).unwrap(), expected, "input {raw:?}");
        }
    }

    #[test]
    fn bad_default_runs_are_fatal_for_the_line() {
        for raw in ["*", "0*", "x* 1 2", "'W1' 10 -3* 1"] {
            let err = normalize_tokens(raw).unwrap_err();
            assert!(matches!(err, ParseError::UnknownDefaultRun(_)), "input {raw:?}");
        }
    }

    #[test]
    fn coercion_boundary_splits_ints_and_floats() {
        // "10" past index 5 becomes a float, not an int.
        let tokens = normalize_tokens("'W' 1 2 3 4 OPEN 10 10.5").unwrap();
        assert_eq!(tokens[6], Num(10.0));
        assert_eq!(tokens[7], Num(10.5));
        // A decimal inside the integer region stays textual.
        let tokens = normalize_tokens("'W' 1.5 2 3 4 OPEN").unwrap();
        assert_eq!(tokens[1], text("1.5"));
    }

    #[test]
    fn non_numeric_tokens_stay_textual() {
        let tokens = normalize_tokens("'W' 1 2 3 4 SHUT 1.2.3 Z 12a").unwrap();
        assert_eq!(tokens[5], text("SHUT"));
        assert_eq!(tokens[6], text("1.2.3"));
        assert_eq!(tokens[7], text("Z"));
        assert_eq!(tokens[8], text("12a"));
    }

    #[test]
    fn terminators_and_blank_splits_are_discarded() {
        let tokens = normalize_tokens("  'W2'   5  /  ").unwrap();
        assert_eq!(tokens, vec![text("'W2'"), Int(5)]);
    }
}
