//! Board snapshot types.
//!
//! Contains the data the renderer consumes: units, orders with their
//! adjudication results, and the overall gamestate.

pub mod order;
pub mod state;
pub mod unit;

pub use order::{AssistedOrder, Order, OrderResult, OrderType};
pub use state::{
    capitalize, GameTime, Gamestate, Location, SupplyCenterOwnership, UnitPositions,
};
pub use unit::{Unit, UnitType};
