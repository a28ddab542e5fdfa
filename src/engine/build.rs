//! Record construction.
//!
//! Fourth pipeline stage: map a coerced token tuple plus its kind tag onto a
//! [`CompletionRecord`]. The local-grid name, second token in raw input, is
//! moved to the final field position first; every remaining placeholder is
//! then resolved through the static per-variant default table. A placeholder
//! on a field without a declared default, a type-incompatible token, or a
//! wrong field count all reject the line whole — a partially populated record
//! is never produced.

use crate::error::ParseError;
use crate::record::{
    CompletionData, CompletionRecord, Direction, FieldDefault, WellStatus, defaults_for,
};
use crate::{SectionKind, Token};

/// Build one record from normalized tokens.
pub(crate) fn build_record(
    kind: SectionKind,
    mut tokens: Vec<Token>,
) -> Result<CompletionRecord, ParseError> {
    if tokens.len() != kind.field_count() {
        return Err(ParseError::FieldCountMismatch {
            expected: kind.field_count(),
            found: tokens.len(),
        });
    }
    if kind == SectionKind::LocalGrid {
        // Grid region name: second raw token, last record field.
        let name = tokens.remove(1);
        tokens.push(name);
    }

    let defaults = defaults_for(kind);
    let data = CompletionData {
        name: name_field(&tokens, 0, defaults)?,
        i: int_field(&tokens, 1, defaults)?,
        j: int_field(&tokens, 2, defaults)?,
        k_upper: int_field(&tokens, 3, defaults)?,
        k_lower: int_field(&tokens, 4, defaults)?,
        status: status_field(&tokens, 5, defaults)?,
        saturation_table: num_field(&tokens, 6, defaults)?,
        transmissibility_factor: num_field(&tokens, 7, defaults)?,
        well_bore_diameter: num_field(&tokens, 8, defaults)?,
        kh: num_field(&tokens, 9, defaults)?,
        skin_factor: num_field(&tokens, 10, defaults)?,
        d_factor: num_field(&tokens, 11, defaults)?,
        direction: direction_field(&tokens, 12, defaults)?,
        pressure_equivalent_radius: num_field(&tokens, 13, defaults)?,
    };

    match kind {
        SectionKind::Simple => Ok(CompletionRecord::Simple(data)),
        SectionKind::LocalGrid => {
            let local_grid_name = name_field(&tokens, 14, defaults)?;
            Ok(CompletionRecord::LocalGrid { data, local_grid_name })
        }
    }
}

fn invalid(position: usize, token: &Token) -> ParseError {
    ParseError::InvalidField { position, token: format!("{token:?}") }
}

/// Placeholder resolution shared by the typed accessors below: `Ok(Some(_))`
/// carries the default, `Ok(None)` means a real token is present.
fn resolve_default(
    tokens: &[Token],
    position: usize,
    defaults: &[FieldDefault],
) -> Result<Option<FieldDefault>, ParseError> {
    match &tokens[position] {
        Token::Default => match defaults[position] {
            FieldDefault::Required => Err(ParseError::MissingRequiredField { position }),
            default => Ok(Some(default)),
        },
        _ => Ok(None),
    }
}

fn name_field(
    tokens: &[Token],
    position: usize,
    defaults: &[FieldDefault],
) -> Result<String, ParseError> {
    resolve_default(tokens, position, defaults)?;
    match &tokens[position] {
        Token::Text(s) if s.starts_with('\'') && s.ends_with('\'') && s.len() > 2 => Ok(s.clone()),
        other => Err(invalid(position, other)),
    }
}

fn int_field(
    tokens: &[Token],
    position: usize,
    defaults: &[FieldDefault],
) -> Result<i32, ParseError> {
    resolve_default(tokens, position, defaults)?;
    match &tokens[position] {
        Token::Int(v) => Ok(*v),
        other => Err(invalid(position, other)),
    }
}

fn num_field(
    tokens: &[Token],
    position: usize,
    defaults: &[FieldDefault],
) -> Result<f64, ParseError> {
    if let Some(FieldDefault::Num(v)) = resolve_default(tokens, position, defaults)? {
        return Ok(v);
    }
    match &tokens[position] {
        Token::Num(v) => Ok(*v),
        other => Err(invalid(position, other)),
    }
}

fn status_field(
    tokens: &[Token],
    position: usize,
    defaults: &[FieldDefault],
) -> Result<WellStatus, ParseError> {
    if let Some(FieldDefault::Status(v)) = resolve_default(tokens, position, defaults)? {
        return Ok(v);
    }
    match &tokens[position] {
        Token::Text(s) => WellStatus::from_token(s).ok_or_else(|| invalid(position, &tokens[position])),
        other => Err(invalid(position, other)),
    }
}

fn direction_field(
    tokens: &[Token],
    position: usize,
    defaults: &[FieldDefault],
) -> Result<Direction, ParseError> {
    if let Some(FieldDefault::Direction(v)) = resolve_default(tokens, position, defaults)? {
        return Ok(v);
    }
    match &tokens[position] {
        Token::Text(s) => Direction::from_token(s).ok_or_else(|| invalid(position, &tokens[position])),
        other => Err(invalid(position, other)),
    }
}
