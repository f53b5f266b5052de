//! Input formats.
//!
//! - **payload**: gamestate, order list, and orders-phase test JSON
//! - **notation**: DATC standard order notation
//! - **parser**: line commands read by the binary

pub mod notation;
pub mod parser;
pub mod payload;

pub use notation::{format_order, parse_standard_orders, NotationError};
pub use parser::{parse_command, Command};
pub use payload::{
    load_gamestate, load_orders, load_orders_test, load_text, parse_gamestate, parse_orders,
    parse_orders_test, OrdersPhaseTest, ProtocolError,
};
