//! Heuristic header resolution for measurement CSV exports
//!
//! Real-world exports of the same data arrive with varying, bilingual header
//! names (`"Datum Meting"`, `"Verlies (MJ)"`, `"location"`). Instead of an
//! exact schema, each canonical field carries a keyword group and claims the
//! first header token containing any of its keywords.

use tracing::debug;

/// The eight canonical fields a raw CSV column may map to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    Date,
    Location,
    DoorWidth,
    TempInside,
    TempOutside,
    HeatLossMj,
    GasSavedM3,
    CostSavedEur,
}

impl CanonicalField {
    /// All canonical fields in resolution order
    pub const ALL: [CanonicalField; 8] = [
        CanonicalField::Date,
        CanonicalField::Location,
        CanonicalField::DoorWidth,
        CanonicalField::TempInside,
        CanonicalField::TempOutside,
        CanonicalField::HeatLossMj,
        CanonicalField::GasSavedM3,
        CanonicalField::CostSavedEur,
    ];

    /// Keyword group matched against header tokens (Dutch and English variants)
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            CanonicalField::Date => &["datum", "date"],
            CanonicalField::Location => &["locatie", "location", "deur", "door"],
            CanonicalField::DoorWidth => &["deurbreedte", "breedte", "width"],
            CanonicalField::TempInside => &["tempbinnen", "binnen", "inside"],
            CanonicalField::TempOutside => &["tempbuiten", "buiten", "outside"],
            CanonicalField::HeatLossMj => &["warmteverlies", "mj", "verliesmj"],
            CanonicalField::GasSavedM3 => &["gas", "m3", "besparingm3"],
            CanonicalField::CostSavedEur => &["kosten", "euro", "eur", "besparing"],
        }
    }

    fn ordinal(&self) -> usize {
        *self as usize
    }
}

/// Resolved column positions for the canonical fields
///
/// An unresolved field is not an error: downstream coercion substitutes the
/// documented default for every cell read through it.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    indices: [Option<usize>; 8],
}

impl ColumnMap {
    /// Resolve canonical fields against header tokens
    ///
    /// Tokens must already be trimmed and lowercased by the caller. Resolution
    /// walks tokens in header order, so the first matching column wins when a
    /// header is ambiguous between keywords of the same group.
    pub fn resolve(headers: &[String]) -> Self {
        let mut indices = [None; 8];

        for field in CanonicalField::ALL {
            let keywords = field.keywords();
            indices[field.ordinal()] = headers
                .iter()
                .position(|token| keywords.iter().any(|keyword| token.contains(keyword)));
        }

        let map = Self { indices };
        debug!(
            "Resolved {} of {} canonical fields from {} header tokens",
            map.resolved_count(),
            CanonicalField::ALL.len(),
            headers.len()
        );
        map
    }

    /// Get the resolved column index for a canonical field
    pub fn index_of(&self, field: CanonicalField) -> Option<usize> {
        self.indices[field.ordinal()]
    }

    /// Number of canonical fields that resolved to a column
    pub fn resolved_count(&self) -> usize {
        self.indices.iter().filter(|index| index.is_some()).count()
    }

    /// Check whether no canonical field resolved at all
    pub fn is_empty(&self) -> bool {
        self.resolved_count() == 0
    }
}
