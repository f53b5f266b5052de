//! JSON payloads produced by the adjudicator: bare gamestates, order lists,
//! and orders-phase test cases.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{GameTime, Gamestate, Order, OrderResult, SupplyCenterOwnership, UnitPositions};

/// Errors raised while loading a payload.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {what} JSON: {source}")]
    Json {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// One orders-phase test case: the board before adjudication plus the
/// validation and resolution results of the submitted orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OrdersPhaseTest {
    #[serde(default)]
    pub long_name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub unit_positions_before: UnitPositions,
    #[serde(default)]
    pub supply_center_ownership_before: SupplyCenterOwnership,
    pub game_time_before: GameTime,
    #[serde(default)]
    pub validation_results: Vec<OrderResult>,
    #[serde(default)]
    pub resolution_results: Vec<OrderResult>,
}

impl OrdersPhaseTest {
    /// The board as it stood before the orders were adjudicated.
    pub fn gamestate_before(&self) -> Gamestate {
        Gamestate {
            unit_positions: self.unit_positions_before.clone(),
            supply_center_ownership: self.supply_center_ownership_before.clone(),
            game_time: self.game_time_before.clone(),
        }
    }
}

fn parse<T: DeserializeOwned>(json: &str, what: &'static str) -> Result<T, ProtocolError> {
    serde_json::from_str(json).map_err(|source| ProtocolError::Json { what, source })
}

fn read(path: &Path) -> Result<String, ProtocolError> {
    fs::read_to_string(path).map_err(|source| ProtocolError::Io {
        path: path.display().to_string(),
        source,
    })
}

pub fn parse_gamestate(json: &str) -> Result<Gamestate, ProtocolError> {
    parse(json, "gamestate")
}

pub fn load_gamestate(path: &Path) -> Result<Gamestate, ProtocolError> {
    parse_gamestate(&read(path)?)
}

pub fn parse_orders_test(json: &str) -> Result<OrdersPhaseTest, ProtocolError> {
    parse(json, "orders-phase test")
}

pub fn load_orders_test(path: &Path) -> Result<OrdersPhaseTest, ProtocolError> {
    parse_orders_test(&read(path)?)
}

/// Parses a JSON array of orders.
pub fn parse_orders(json: &str) -> Result<Vec<Order>, ProtocolError> {
    parse(json, "orders")
}

pub fn load_orders(path: &Path) -> Result<Vec<Order>, ProtocolError> {
    parse_orders(&read(path)?)
}

/// Reads a text file, for callers that parse formats other than JSON.
pub fn load_text(path: &Path) -> Result<String, ProtocolError> {
    read(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::OrderType;

    const TEST_CASE: &str = r#"{
        "long-name": "6.A.5. MOVE TO OWN SECTOR WITH CONVOY",
        "summary": "attack into own location",
        "explanation": "",
        "unit-positions-before": {
            "par": {"unit-type": "army", "country": "france"},
            "mar": {"unit-type": "army", "country": "france"}
        },
        "supply-center-ownership-before": {"france": ["par", "mar"]},
        "game-time-before": {"year": 1901, "season": "spring"},
        "validation-results": [],
        "resolution-results": [
            [{"country": "france", "unit-type": "army", "location": "par",
              "order-type": "attack", "destination": "bur"},
             [{"interfered?": false, "interferer": null, "rule": null}]],
            [{"country": "france", "unit-type": "army", "location": "mar",
              "order-type": "support",
              "assisted-order": {"location": "par", "order-type": "attack",
                                 "destination": "bur"}},
             []]
        ]
    }"#;

    #[test]
    fn orders_test_decodes() {
        let test = parse_orders_test(TEST_CASE).unwrap();
        assert_eq!(test.resolution_results.len(), 2);
        assert_eq!(test.resolution_results[1].order().order_type, OrderType::Support);
        let gs = test.gamestate_before();
        assert_eq!(gs.unit_positions.len(), 2);
        assert_eq!(gs.game_time.label(), "Spring 1901");
    }

    #[test]
    fn bad_json_names_the_payload() {
        let err = parse_gamestate("[]").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse gamestate JSON"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_orders(Path::new("/nonexistent/orders.json")).unwrap_err();
        assert!(matches!(err, ProtocolError::Io { .. }));
    }

    #[test]
    fn orders_list_decodes() {
        let orders = parse_orders(
            r#"[{"country": "england", "unit-type": "fleet", "location": "lon",
                 "order-type": "hold"}]"#,
        )
        .unwrap();
        assert_eq!(orders.len(), 1);
    }
}
