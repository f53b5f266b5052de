//! Overlay rendering: lifecycle of the overlay container, the gamestate
//! renderer, and the order renderer.

pub mod gamestate;
pub mod orders;
pub mod overlay;

use thiserror::Error;

use crate::board::OrderType;
use crate::map::UnknownLocation;

/// Errors that abort a render call. Both indicate malformed upstream data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error(transparent)]
    UnknownLocation(#[from] UnknownLocation),

    #[error("invalid {order_type} order from '{location}': {reason}")]
    InvalidOrder {
        location: String,
        order_type: OrderType,
        reason: String,
    },
}

pub use gamestate::render_gamestate;
pub use orders::{
    order_arrow, render_order, render_order_results, render_orders, render_resolution_results,
    Arrow, ArrowKind, ArrowPath,
};
pub use overlay::{clear_overlay, ensure_overlay, overlay};
