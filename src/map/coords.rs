//! Anchor points for units and supply centers on the background map.
//!
//! The tables are coupled to one hand-authored SVG map: every location that
//! can hold a unit has a unit anchor (coastal variants included), and the 34
//! supply-center provinces additionally have a supply-center anchor. Split
//! coasts share their province's supply-center anchor, so `stp-nc` has no
//! entry in the supply-center table.

use std::fmt;

use thiserror::Error;

use super::geometry::Point;

/// The number of unit anchors, including Switzerland and six coastal variants.
pub const UNIT_ANCHOR_COUNT: usize = 82;

/// The number of supply-center anchors.
pub const SUPPLY_CENTER_ANCHOR_COUNT: usize = 34;

/// Which anchor table a lookup went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorTable {
    Unit,
    SupplyCenter,
}

impl fmt::Display for AnchorTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnchorTable::Unit => f.write_str("unit"),
            AnchorTable::SupplyCenter => f.write_str("supply center"),
        }
    }
}

/// A location missing from an anchor table. Well-formed input never
/// produces this, so callers propagate it rather than recover.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no {table} anchor for location '{location}'")]
pub struct UnknownLocation {
    pub table: AnchorTable,
    pub location: String,
}

/// Unit anchors, sorted by location id.
pub const UNIT_ANCHORS: [(&str, Point); UNIT_ANCHOR_COUNT] = [
    ("adr", Point::new(296.0, 441.0)),
    ("aeg", Point::new(403.0, 524.0)),
    ("alb", Point::new(339.0, 469.0)),
    ("ank", Point::new(500.0, 460.0)),
    ("apu", Point::new(302.0, 472.0)),
    ("arm", Point::new(576.0, 456.0)),
    ("bal", Point::new(323.0, 250.0)),
    ("bar", Point::new(445.0, 41.0)),
    ("bel", Point::new(197.0, 317.0)),
    ("ber", Point::new(279.0, 283.0)),
    ("bla", Point::new(484.0, 420.0)),
    ("boh", Point::new(289.0, 336.0)),
    ("bot", Point::new(348.0, 199.0)),
    ("bre", Point::new(125.0, 334.0)),
    ("bud", Point::new(353.0, 378.0)),
    ("bul", Point::new(395.0, 443.0)),
    ("bul-ec", Point::new(410.0, 440.0)),
    ("bul-sc", Point::new(399.0, 462.0)),
    ("bur", Point::new(191.0, 360.0)),
    ("cly", Point::new(139.0, 188.0)),
    ("con", Point::new(439.0, 473.0)),
    ("den", Point::new(256.0, 245.0)),
    ("eas", Point::new(474.0, 546.0)),
    ("edi", Point::new(157.0, 210.0)),
    ("eng", Point::new(119.0, 307.0)),
    ("fin", Point::new(385.0, 143.0)),
    ("gal", Point::new(377.0, 343.0)),
    ("gas", Point::new(137.0, 388.0)),
    ("gol", Point::new(180.0, 444.0)),
    ("gre", Point::new(366.0, 515.0)),
    ("hel", Point::new(226.0, 252.0)),
    ("hol", Point::new(205.0, 297.0)),
    ("ion", Point::new(324.0, 540.0)),
    ("iri", Point::new(90.0, 276.0)),
    ("kie", Point::new(243.0, 295.0)),
    ("lon", Point::new(162.0, 281.0)),
    ("lvn", Point::new(382.0, 245.0)),
    ("lvp", Point::new(142.0, 241.0)),
    ("mao", Point::new(23.0, 355.0)),
    ("mar", Point::new(184.0, 402.0)),
    ("mos", Point::new(505.0, 226.0)),
    ("mun", Point::new(243.0, 347.0)),
    ("naf", Point::new(100.0, 536.0)),
    ("nao", Point::new(65.0, 140.0)),
    ("nap", Point::new(299.0, 505.0)),
    ("nor", Point::new(264.0, 160.0)),
    ("nth", Point::new(204.0, 215.0)),
    ("nwg", Point::new(220.0, 90.0)),
    ("par", Point::new(162.0, 346.0)),
    ("pic", Point::new(168.0, 319.0)),
    ("pie", Point::new(220.0, 399.0)),
    ("por", Point::new(34.0, 417.0)),
    ("pru", Point::new(315.0, 283.0)),
    ("rom", Point::new(264.0, 452.0)),
    ("ruh", Point::new(223.0, 320.0)),
    ("rum", Point::new(415.0, 405.0)),
    ("ser", Point::new(351.0, 438.0)),
    ("sev", Point::new(515.0, 330.0)),
    ("sil", Point::new(304.0, 314.0)),
    ("ska", Point::new(260.0, 212.0)),
    ("smy", Point::new(490.0, 505.0)),
    ("spa", Point::new(64.0, 439.0)),
    ("spa-nc", Point::new(80.0, 404.0)),
    ("spa-sc", Point::new(52.0, 475.0)),
    ("stp", Point::new(500.0, 140.0)),
    ("stp-nc", Point::new(472.0, 122.0)),
    ("stp-sc", Point::new(418.0, 205.0)),
    ("swe", Point::new(315.0, 140.0)),
    ("swi", Point::new(219.0, 376.0)),
    ("syr", Point::new(570.0, 520.0)),
    ("tri", Point::new(305.0, 412.0)),
    ("tun", Point::new(212.0, 542.0)),
    ("tus", Point::new(247.0, 430.0)),
    ("tyr", Point::new(277.0, 378.0)),
    ("tys", Point::new(246.0, 483.0)),
    ("ukr", Point::new(427.0, 327.0)),
    ("ven", Point::new(250.0, 408.0)),
    ("vie", Point::new(314.0, 360.0)),
    ("wal", Point::new(125.0, 285.0)),
    ("war", Point::new(361.0, 315.0)),
    ("wes", Point::new(140.0, 492.0)),
    ("yor", Point::new(161.0, 254.0)),
];

/// Supply-center anchors, sorted by location id.
pub const SUPPLY_CENTER_ANCHORS: [(&str, Point); SUPPLY_CENTER_ANCHOR_COUNT] = [
    ("ank", Point::new(482.0, 469.0)),
    ("bel", Point::new(186.0, 305.0)),
    ("ber", Point::new(281.0, 298.0)),
    ("bre", Point::new(106.0, 322.0)),
    ("bud", Point::new(326.0, 376.0)),
    ("bul", Point::new(377.0, 444.0)),
    ("con", Point::new(429.0, 460.0)),
    ("den", Point::new(272.0, 252.0)),
    ("edi", Point::new(154.0, 219.0)),
    ("gre", Point::new(378.0, 507.0)),
    ("hol", Point::new(205.0, 284.0)),
    ("kie", Point::new(254.0, 278.0)),
    ("lon", Point::new(162.0, 290.0)),
    ("lvp", Point::new(144.0, 257.0)),
    ("mar", Point::new(186.0, 417.0)),
    ("mos", Point::new(481.0, 234.0)),
    ("mun", Point::new(258.0, 359.0)),
    ("nap", Point::new(278.0, 469.0)),
    ("nor", Point::new(270.0, 187.0)),
    ("par", Point::new(173.0, 334.0)),
    ("por", Point::new(15.0, 434.0)),
    ("rom", Point::new(252.0, 443.0)),
    ("rum", Point::new(402.0, 413.0)),
    ("ser", Point::new(343.0, 419.0)),
    ("sev", Point::new(483.0, 396.0)),
    ("smy", Point::new(424.0, 502.0)),
    ("spa", Point::new(80.0, 432.0)),
    ("stp", Point::new(418.0, 187.0)),
    ("swe", Point::new(323.0, 196.0)),
    ("tri", Point::new(284.0, 396.0)),
    ("tun", Point::new(220.0, 529.0)),
    ("ven", Point::new(261.0, 397.0)),
    ("vie", Point::new(301.0, 363.0)),
    ("war", Point::new(346.0, 302.0)),
];

fn lookup(table: &[(&str, Point)], location: &str) -> Option<Point> {
    table
        .binary_search_by(|(id, _)| (*id).cmp(location))
        .ok()
        .map(|i| table[i].1)
}

/// Where a unit at `location` is drawn.
pub fn unit_anchor(location: &str) -> Result<Point, UnknownLocation> {
    lookup(&UNIT_ANCHORS, location).ok_or_else(|| UnknownLocation {
        table: AnchorTable::Unit,
        location: location.to_string(),
    })
}

/// Where the supply-center marker of `location` is drawn.
pub fn supply_center_anchor(location: &str) -> Result<Point, UnknownLocation> {
    lookup(&SUPPLY_CENTER_ANCHORS, location).ok_or_else(|| UnknownLocation {
        table: AnchorTable::SupplyCenter,
        location: location.to_string(),
    })
}

/// Returns true if a unit can be drawn at `location`.
pub fn has_unit_anchor(location: &str) -> bool {
    lookup(&UNIT_ANCHORS, location).is_some()
}

/// All location ids that have a unit anchor, in table order.
pub fn unit_locations() -> impl Iterator<Item = &'static str> {
    UNIT_ANCHORS.iter().map(|(id, _)| *id)
}
