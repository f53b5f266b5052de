//! Map coordinate space: anchor tables, geometry, and the background map.

pub mod background;
pub mod coords;
pub mod geometry;

pub use background::{BackgroundError, BackgroundMap};
pub use coords::{
    supply_center_anchor, unit_anchor, AnchorTable, UnknownLocation, SUPPLY_CENTER_ANCHORS,
    UNIT_ANCHORS,
};
pub use geometry::{cubic_path, format_point, line_path, midpoint, translate, Point};
