//! Completion record types and their declared field defaults.
//!
//! The deck format allows any non-geometry field to be omitted via the `N*`
//! default marker. The defaults live in static per-variant tables keyed by
//! field index ([`SIMPLE_DEFAULTS`], [`LOCAL_GRID_DEFAULTS`]); the builder
//! resolves placeholders through them with no runtime introspection. The
//! tables must stay in exact sync with the field order of [`CompletionData`].

use crate::SectionKind;

/// Open/shut flag class of a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WellStatus {
    Open,
    Shut,
    Auto,
    Stop,
}

impl WellStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WellStatus::Open => "OPEN",
            WellStatus::Shut => "SHUT",
            WellStatus::Auto => "AUTO",
            WellStatus::Stop => "STOP",
        }
    }

    /// Parse a deck status token. Deck tokens are already upper-case; anything
    /// else is not a status.
    pub(crate) fn from_token(token: &str) -> Option<Self> {
        match token {
            "OPEN" => Some(WellStatus::Open),
            "SHUT" => Some(WellStatus::Shut),
            "AUTO" => Some(WellStatus::Auto),
            "STOP" => Some(WellStatus::Stop),
            _ => None,
        }
    }
}

/// Flow direction of a completion segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    X,
    Y,
    Z,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::X => "X",
            Direction::Y => "Y",
            Direction::Z => "Z",
        }
    }

    /// Parse a deck direction token, quoted (`'Z'`) or bare (`Z`).
    pub(crate) fn from_token(token: &str) -> Option<Self> {
        match token.trim_matches('\'') {
            "X" => Some(Direction::X),
            "Y" => Some(Direction::Y),
            "Z" => Some(Direction::Z),
            _ => None,
        }
    }
}

/// Field layout shared by both completion variants, in declared (deck) order
/// after the local-grid reordering of the builder.
///
/// The well name keeps its deck quoting (`'W1'`): queries compare names
/// including the quoting convention.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionData {
    pub name: String,
    pub i: i32,
    pub j: i32,
    pub k_upper: i32,
    pub k_lower: i32,
    pub status: WellStatus,
    pub saturation_table: f64,
    pub transmissibility_factor: f64,
    pub well_bore_diameter: f64,
    pub kh: f64,
    pub skin_factor: f64,
    pub d_factor: f64,
    pub direction: Direction,
    pub pressure_equivalent_radius: f64,
}

/// A fully built completion record.
///
/// The two variants share the 14-field common layout; `LocalGrid` carries the
/// grid region name as its final field. In raw input that name appears as the
/// *second* token, but moving it to the end is a construction-time transform
/// performed by the builder, not a property of the deck format.
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionRecord {
    Simple(CompletionData),
    LocalGrid {
        data: CompletionData,
        local_grid_name: String,
    },
}

impl CompletionRecord {
    /// The common field layout, whichever the variant.
    pub fn data(&self) -> &CompletionData {
        match self {
            CompletionRecord::Simple(data) => data,
            CompletionRecord::LocalGrid { data, .. } => data,
        }
    }

    /// The quoted well name, e.g. `'W1'`.
    pub fn name(&self) -> &str {
        &self.data().name
    }

    pub fn status(&self) -> WellStatus {
        self.data().status
    }

    /// The quoted local grid region name, for `LocalGrid` records.
    pub fn local_grid_name(&self) -> Option<&str> {
        match self {
            CompletionRecord::Simple(_) => None,
            CompletionRecord::LocalGrid { local_grid_name, .. } => Some(local_grid_name),
        }
    }

    /// 14 for `Simple`, 15 for `LocalGrid`.
    pub fn field_count(&self) -> usize {
        match self {
            CompletionRecord::Simple(_) => 14,
            CompletionRecord::LocalGrid { .. } => 15,
        }
    }
}

// --- Declared defaults -------------------------------------------------------

/// Declared default for one field position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum FieldDefault {
    /// No sensible default; a placeholder here is an error.
    Required,
    Status(WellStatus),
    Direction(Direction),
    Num(f64),
}

/// Defaults for the `Simple` variant, keyed by field index in declared order.
pub(crate) const SIMPLE_DEFAULTS: [FieldDefault; 14] = [
    FieldDefault::Required,                      // name
    FieldDefault::Required,                      // i
    FieldDefault::Required,                      // j
    FieldDefault::Required,                      // k_upper
    FieldDefault::Required,                      // k_lower
    FieldDefault::Status(WellStatus::Open),      // status
    FieldDefault::Num(0.0),                      // saturation_table
    FieldDefault::Num(0.0),                      // transmissibility_factor
    FieldDefault::Num(0.3048),                   // well_bore_diameter
    FieldDefault::Num(-0.1),                     // kh
    FieldDefault::Num(0.0),                      // skin_factor
    FieldDefault::Num(-0.1),                     // d_factor
    FieldDefault::Direction(Direction::Z),       // direction
    FieldDefault::Num(0.0),                      // pressure_equivalent_radius
];

/// Defaults for the `LocalGrid` variant: the common layout plus the grid
/// region name, which can never be defaulted (a `COMPDATL` line without its
/// second quoted token would not have matched the pattern).
pub(crate) const LOCAL_GRID_DEFAULTS: [FieldDefault; 15] = [
    SIMPLE_DEFAULTS[0],
    SIMPLE_DEFAULTS[1],
    SIMPLE_DEFAULTS[2],
    SIMPLE_DEFAULTS[3],
    SIMPLE_DEFAULTS[4],
    SIMPLE_DEFAULTS[5],
    SIMPLE_DEFAULTS[6],
    SIMPLE_DEFAULTS[7],
    SIMPLE_DEFAULTS[8],
    SIMPLE_DEFAULTS[9],
    SIMPLE_DEFAULTS[10],
    SIMPLE_DEFAULTS[11],
    SIMPLE_DEFAULTS[12],
    SIMPLE_DEFAULTS[13],
    FieldDefault::Required, // local_grid_name
];

/// Defaults table for `kind`, keyed by field index after the local-grid
/// reordering (grid name last).
pub(crate) fn defaults_for(kind: SectionKind) -> &'static [FieldDefault] {
    match kind {
        SectionKind::Simple => &SIMPLE_DEFAULTS,
        SectionKind::LocalGrid => &LOCAL_GRID_DEFAULTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_text() {
        for status in [WellStatus::Open, WellStatus::Shut, WellStatus::Auto, WellStatus::Stop] {
            assert_eq!(WellStatus::from_token(status.as_str()), Some(status));
        }
        assert_eq!(WellStatus::from_token("open"), None);
        assert_eq!(WellStatus::from_token("CLOSED"), None);
    }

    #[test]
    fn direction_accepts_quoted_and_bare() {
        assert_eq!(Direction::from_token("Z"), Some(Direction::Z));
        assert_eq!(Direction::from_token("'X'"), Some(Direction::X));
        assert_eq!(Direction::from_token("'Q'"), None);
    }

    #[test]
    fn defaults_tables_agree_on_common_layout() {
        assert_eq!(&LOCAL_GRID_DEFAULTS[..14], &SIMPLE_DEFAULTS[..]);
        assert_eq!(LOCAL_GRID_DEFAULTS[14], FieldDefault::Required);
        // Geometry has no defaults; everything from status on does.
        for default in &SIMPLE_DEFAULTS[..5] {
            assert_eq!(*default, FieldDefault::Required);
        }
        for default in &SIMPLE_DEFAULTS[5..] {
            assert_ne!(*default, FieldDefault::Required);
        }
    }
}
