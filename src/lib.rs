//! Diplomap library.
//!
//! Renders Diplomacy gamestates and orders as an SVG overlay on a fixed
//! background map. Exposes the snapshot types, the anchor tables, the
//! renderers, and the session and batch drivers used by the binary.

pub mod batch;
pub mod board;
pub mod config;
pub mod map;
pub mod protocol;
pub mod render;
pub mod session;
pub mod svg;
