//! Categorical feature encoding.
//!
//! Each match attribute is looked up in a fixed [`CategoryTable`]. Lookups are
//! exact; only the toss decision is trimmed and lowercased first. Anything
//! missing or unknown encodes to [`SENTINEL`] rather than failing, so the
//! caller can report every bad field at once.

pub mod tables;

use serde::Serialize;
use std::fmt;

pub use tables::TABLE_VERSION;

/// Code reserved for "unrecognized category value".
pub const SENTINEL: i64 = -1;

/// Number of entries in a [`FeatureVector`].
pub const FEATURE_COUNT: usize = 6;

/// One categorical feature dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Team,
    Venue,
    City,
    TossDecision,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Team,
        Dimension::Venue,
        Dimension::City,
        Dimension::TossDecision,
    ];

    pub fn table(&self) -> CategoryTable {
        match self {
            Dimension::Team => CategoryTable::new(*self, tables::TEAMS),
            Dimension::Venue => CategoryTable::new(*self, tables::VENUES),
            Dimension::City => CategoryTable::new(*self, tables::CITIES),
            Dimension::TossDecision => CategoryTable::new(*self, tables::TOSS_DECISIONS),
        }
    }

    /// Whether raw input is trimmed and lowercased before lookup.
    fn normalizes(&self) -> bool {
        matches!(self, Dimension::TossDecision)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Team => write!(f, "team"),
            Dimension::Venue => write!(f, "venue"),
            Dimension::City => write!(f, "city"),
            Dimension::TossDecision => write!(f, "toss decision"),
        }
    }
}

/// Immutable label → code mapping for one dimension.
#[derive(Debug, Clone, Copy)]
pub struct CategoryTable {
    dimension: Dimension,
    entries: &'static [(&'static str, i64)],
}

impl CategoryTable {
    const fn new(dimension: Dimension, entries: &'static [(&'static str, i64)]) -> Self {
        CategoryTable { dimension, entries }
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Exact-match lookup of a canonical label.
    pub fn code(&self, label: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, code)| *code)
    }

    /// Reverse lookup of a code.
    pub fn label(&self, code: i64) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(name, _)| *name)
    }

    /// Labels in code order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Encode a raw field value, returning [`SENTINEL`] when it is absent or not in
/// the dimension's table.
pub fn encode(dimension: Dimension, raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return SENTINEL;
    };
    let table = dimension.table();
    let code = if dimension.normalizes() {
        table.code(&raw.trim().to_lowercase())
    } else {
        table.code(raw)
    };
    code.unwrap_or(SENTINEL)
}

/// Reverse lookup through a dimension's table.
pub fn decode(dimension: Dimension, code: i64) -> Option<&'static str> {
    dimension.table().label(code)
}

/// `[team1, team2, venue, city, toss_winner, toss_decision]`, every entry a
/// valid code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector([i64; FEATURE_COUNT]);

impl FeatureVector {
    /// Returns `None` if any code is negative; partial vectors never exist.
    pub fn new(codes: [i64; FEATURE_COUNT]) -> Option<Self> {
        if codes.iter().any(|c| *c < 0) {
            return None;
        }
        Some(FeatureVector(codes))
    }

    pub fn codes(&self) -> &[i64; FEATURE_COUNT] {
        &self.0
    }

    /// The vector as model input.
    pub fn as_f64(&self) -> [f64; FEATURE_COUNT] {
        self.0.map(|c| c as f64)
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_key_encodes_to_its_stored_code() {
        for dim in Dimension::ALL {
            let table = dim.table();
            for (label, code) in table.entries {
                assert_eq!(encode(dim, Some(*label)), *code, "{dim}: {label}");
            }
        }
    }

    #[test]
    fn test_unknown_values_encode_to_sentinel() {
        assert_eq!(encode(Dimension::Team, Some("Deccan Chargers")), SENTINEL);
        assert_eq!(encode(Dimension::Venue, Some("Lord's")), SENTINEL);
        assert_eq!(encode(Dimension::City, Some("")), SENTINEL);
        assert_eq!(encode(Dimension::TossDecision, Some("bowl")), SENTINEL);
    }

    #[test]
    fn test_missing_value_encodes_to_sentinel() {
        for dim in Dimension::ALL {
            assert_eq!(encode(dim, None), SENTINEL);
        }
    }

    #[test]
    fn test_team_lookup_is_case_sensitive() {
        assert_eq!(encode(Dimension::Team, Some("mumbai indians")), SENTINEL);
        assert_eq!(encode(Dimension::Team, Some(" Mumbai Indians")), SENTINEL);
    }

    #[test]
    fn test_toss_decision_is_normalized() {
        let bat = encode(Dimension::TossDecision, Some("bat"));
        assert_eq!(bat, 0);
        assert_eq!(encode(Dimension::TossDecision, Some("Bat")), bat);
        assert_eq!(encode(Dimension::TossDecision, Some("  BAT \n")), bat);
        assert_eq!(encode(Dimension::TossDecision, Some("Field")), 1);
    }

    #[test]
    fn test_team_round_trip() {
        for label in Dimension::Team.table().labels() {
            let code = encode(Dimension::Team, Some(label));
            assert_eq!(decode(Dimension::Team, code), Some(label));
        }
    }

    #[test]
    fn test_codes_are_unique_and_non_negative() {
        for dim in Dimension::ALL {
            let table = dim.table();
            let codes: HashSet<i64> = table.entries.iter().map(|(_, c)| *c).collect();
            let labels: HashSet<&str> = table.labels().collect();
            assert_eq!(codes.len(), table.len(), "duplicate code in {dim}");
            assert_eq!(labels.len(), table.len(), "duplicate label in {dim}");
            assert!(codes.iter().all(|c| *c >= 0));
        }
    }

    #[test]
    fn test_decode_out_of_range() {
        assert_eq!(decode(Dimension::Team, 14), None);
        assert_eq!(decode(Dimension::Team, SENTINEL), None);
    }

    #[test]
    fn test_feature_vector_rejects_sentinel() {
        assert!(FeatureVector::new([7, 0, 55, 26, 7, 0]).is_some());
        assert!(FeatureVector::new([7, 0, 55, SENTINEL, 7, 0]).is_none());
    }

    #[test]
    fn test_feature_vector_as_f64() {
        let v = FeatureVector::new([7, 0, 55, 26, 7, 1]).expect("valid codes");
        assert_eq!(v.as_f64(), [7.0, 0.0, 55.0, 26.0, 7.0, 1.0]);
        assert_eq!(v.to_string(), "[7, 0, 55, 26, 7, 1]");
    }
}
