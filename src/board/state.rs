//! Gamestate snapshot: unit positions, supply center ownership and the
//! current game time.
//!
//! Maps are ordered so every render of the same snapshot walks the entries in
//! the same order.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::unit::Unit;

/// An opaque board location identifier such as `par` or `spa-nc`.
pub type Location = String;

/// Occupied locations and the unit in each.
pub type UnitPositions = BTreeMap<Location, Unit>;

/// Supply centers owned by each country.
pub type SupplyCenterOwnership = BTreeMap<String, BTreeSet<Location>>;

/// The year and season of a snapshot. Seasons are lower-case tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTime {
    pub year: i32,
    pub season: String,
}

impl GameTime {
    pub fn new(year: i32, season: &str) -> Self {
        Self {
            year,
            season: season.to_string(),
        }
    }

    /// Display text for the time marker, e.g. `Fall 1901`.
    pub fn label(&self) -> String {
        format!("{} {}", capitalize(&self.season), self.year)
    }
}

/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Everything the gamestate renderer draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gamestate {
    #[serde(default)]
    pub unit_positions: UnitPositions,
    #[serde(default)]
    pub supply_center_ownership: SupplyCenterOwnership,
    pub game_time: GameTime,
}

impl Gamestate {
    /// An empty board at the given time.
    pub fn new(game_time: GameTime) -> Self {
        Self {
            unit_positions: UnitPositions::new(),
            supply_center_ownership: SupplyCenterOwnership::new(),
            game_time,
        }
    }

    /// Number of supply centers across all countries.
    pub fn supply_center_count(&self) -> usize {
        self.supply_center_ownership.values().map(BTreeSet::len).sum()
    }
}
