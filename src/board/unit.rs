//! Unit types and occupancy.
//!
//! Represents armies and fleets and the record stored for each occupied
//! location of a gamestate snapshot.

use serde::{Deserialize, Serialize};

/// The type of a military unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    Army,
    Fleet,
}

impl UnitType {
    /// Returns the id of the symbol the background map defines for this unit.
    pub const fn symbol_id(self) -> &'static str {
        match self {
            UnitType::Army => "army",
            UnitType::Fleet => "fleet",
        }
    }

    /// Returns the uppercase abbreviation used in standard order notation.
    pub const fn notation_char(self) -> char {
        match self {
            UnitType::Army => 'A',
            UnitType::Fleet => 'F',
        }
    }

    /// Parses a unit type from its standard notation abbreviation.
    pub fn from_notation(s: &str) -> Option<UnitType> {
        match s {
            "A" => Some(UnitType::Army),
            "F" => Some(UnitType::Fleet),
            _ => None,
        }
    }
}

/// What occupies a location: the unit's type and the country that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Unit {
    pub unit_type: UnitType,
    pub country: String,
}

impl Unit {
    pub fn new(unit_type: UnitType, country: impl Into<String>) -> Self {
        Self {
            unit_type,
            country: country.into(),
        }
    }
}
