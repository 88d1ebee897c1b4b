//! Type-safe race taxonomies.
//!
//! Two label sets are in play: the 8-value vendor taxonomy carried by the
//! code-map table, and the collapsed 5-value taxonomy the surname/geography
//! predictor reports posteriors over. The collapse between them is a fixed,
//! documented policy table, not an inference.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Race label in the full 8-value taxonomy used by the vendor code map.
///
/// Single-letter race codes in the code-map table map as:
/// A, B, H, M (two or more), N (American Indian / Alaska Native),
/// P (Pacific Islander), W, Z (unknown).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RaceLabel {
    White,
    Black,
    Hispanic,
    Asian,
    PacificIslander,
    AmericanIndian,
    TwoOrMore,
    Unknown,
}

impl RaceLabel {
    /// All labels in stable reporting order.
    pub const ALL: [RaceLabel; 8] = [
        RaceLabel::White,
        RaceLabel::Black,
        RaceLabel::Hispanic,
        RaceLabel::Asian,
        RaceLabel::PacificIslander,
        RaceLabel::AmericanIndian,
        RaceLabel::TwoOrMore,
        RaceLabel::Unknown,
    ];

    /// Returns the single-letter race code as it appears in the code-map table.
    pub fn as_code(&self) -> &'static str {
        match self {
            RaceLabel::White => "W",
            RaceLabel::Black => "B",
            RaceLabel::Hispanic => "H",
            RaceLabel::Asian => "A",
            RaceLabel::PacificIslander => "P",
            RaceLabel::AmericanIndian => "N",
            RaceLabel::TwoOrMore => "M",
            RaceLabel::Unknown => "Z",
        }
    }

    /// Returns the human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RaceLabel::White => "White",
            RaceLabel::Black => "Black",
            RaceLabel::Hispanic => "Hispanic",
            RaceLabel::Asian => "Asian",
            RaceLabel::PacificIslander => "Pacific Islander",
            RaceLabel::AmericanIndian => "American Indian",
            RaceLabel::TwoOrMore => "Two or More",
            RaceLabel::Unknown => "Unknown",
        }
    }

    /// Collapse into the 5-value taxonomy the predictor reports over.
    ///
    /// This is the source policy preserved verbatim: Pacific Islander folds
    /// into Asian; Two or More and American Indian fold into Other. The
    /// table is total and deterministic.
    pub fn collapse(&self) -> CollapsedRace {
        match self {
            RaceLabel::White => CollapsedRace::White,
            RaceLabel::Black => CollapsedRace::Black,
            RaceLabel::Hispanic => CollapsedRace::Hispanic,
            RaceLabel::Asian => CollapsedRace::Asian,
            RaceLabel::PacificIslander => CollapsedRace::Asian,
            RaceLabel::AmericanIndian => CollapsedRace::Other,
            RaceLabel::TwoOrMore => CollapsedRace::Other,
            RaceLabel::Unknown => CollapsedRace::Other,
        }
    }
}

impl fmt::Display for RaceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RaceLabel {
    type Err = String;

    /// Parse a single-letter race code from the code-map table.
    /// Codes are matched exactly after one trim pass; no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "W" => Ok(RaceLabel::White),
            "B" => Ok(RaceLabel::Black),
            "H" => Ok(RaceLabel::Hispanic),
            "A" => Ok(RaceLabel::Asian),
            "P" => Ok(RaceLabel::PacificIslander),
            "N" => Ok(RaceLabel::AmericanIndian),
            "M" => Ok(RaceLabel::TwoOrMore),
            "Z" => Ok(RaceLabel::Unknown),
            other => Err(format!("Unknown race code: {other}")),
        }
    }
}

/// Race label in the collapsed 5-value taxonomy.
///
/// The variant order doubles as the posterior column order (White = index 0
/// through Other = index 4) and as the tie-break priority: when two or more
/// posterior entries tie for the maximum, the lowest index wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CollapsedRace {
    White,
    Black,
    Hispanic,
    Asian,
    Other,
}

impl CollapsedRace {
    /// All collapsed labels in posterior-column / tie-break-priority order.
    pub const ALL: [CollapsedRace; 5] = [
        CollapsedRace::White,
        CollapsedRace::Black,
        CollapsedRace::Hispanic,
        CollapsedRace::Asian,
        CollapsedRace::Other,
    ];

    /// Position of this label in the posterior column order.
    pub fn index(&self) -> usize {
        match self {
            CollapsedRace::White => 0,
            CollapsedRace::Black => 1,
            CollapsedRace::Hispanic => 2,
            CollapsedRace::Asian => 3,
            CollapsedRace::Other => 4,
        }
    }

    /// Label at the given posterior column index.
    pub fn from_index(index: usize) -> Option<CollapsedRace> {
        CollapsedRace::ALL.get(index).copied()
    }

    /// Returns the human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CollapsedRace::White => "White",
            CollapsedRace::Black => "Black",
            CollapsedRace::Hispanic => "Hispanic",
            CollapsedRace::Asian => "Asian",
            CollapsedRace::Other => "Other",
        }
    }

    /// Embed back into the 8-value taxonomy (Other widens to Unknown).
    ///
    /// Composing `widen` then [`RaceLabel::collapse`] is the identity on
    /// collapsed labels, which makes the collapse idempotent.
    pub fn widen(&self) -> RaceLabel {
        match self {
            CollapsedRace::White => RaceLabel::White,
            CollapsedRace::Black => RaceLabel::Black,
            CollapsedRace::Hispanic => RaceLabel::Hispanic,
            CollapsedRace::Asian => RaceLabel::Asian,
            CollapsedRace::Other => RaceLabel::Unknown,
        }
    }
}

impl fmt::Display for CollapsedRace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn race_code_round_trip() {
        for label in RaceLabel::ALL {
            assert_eq!(label.as_code().parse::<RaceLabel>().unwrap(), label);
        }
    }

    #[test]
    fn unknown_race_code_is_rejected() {
        assert!("Q".parse::<RaceLabel>().is_err());
        assert!("".parse::<RaceLabel>().is_err());
    }

    #[test]
    fn collapse_is_idempotent() {
        for label in RaceLabel::ALL {
            let collapsed = label.collapse();
            assert_eq!(collapsed.widen().collapse(), collapsed);
        }
    }

    #[test]
    fn collapse_policy_table() {
        assert_eq!(RaceLabel::PacificIslander.collapse(), CollapsedRace::Asian);
        assert_eq!(RaceLabel::TwoOrMore.collapse(), CollapsedRace::Other);
        assert_eq!(RaceLabel::AmericanIndian.collapse(), CollapsedRace::Other);
        assert_eq!(RaceLabel::Unknown.collapse(), CollapsedRace::Other);
        assert_eq!(RaceLabel::White.collapse(), CollapsedRace::White);
    }

    #[test]
    fn collapsed_index_round_trip() {
        for (position, label) in CollapsedRace::ALL.iter().enumerate() {
            assert_eq!(label.index(), position);
            assert_eq!(CollapsedRace::from_index(position), Some(*label));
        }
        assert_eq!(CollapsedRace::from_index(5), None);
    }
}
