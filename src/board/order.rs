//! Order types for the movement phase.
//!
//! Orders arrive from the adjudicator as kebab-case JSON records. A support
//! order embeds the order it assists; that embedded record only has to carry
//! the supported unit's location, its order type and (for attacks) its
//! destination.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::state::Location;
use super::unit::UnitType;

/// The kind of an order. Unknown kinds are rejected while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Hold,
    Attack,
    Support,
}

impl OrderType {
    pub const fn as_str(self) -> &'static str {
        match self {
            OrderType::Hold => "hold",
            OrderType::Attack => "attack",
            OrderType::Support => "support",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A submitted order.
///
/// `destination` is only meaningful for attacks and `assisted_order` only for
/// supports; neither is checked against `order_type` until the order is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Order {
    pub country: String,
    pub unit_type: UnitType,
    pub location: Location,
    pub order_type: OrderType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assisted_order: Option<Box<AssistedOrder>>,
}

impl Order {
    /// Hold: `A ven H`
    pub fn hold(country: &str, unit_type: UnitType, location: &str) -> Self {
        Self {
            country: country.to_string(),
            unit_type,
            location: location.to_string(),
            order_type: OrderType::Hold,
            destination: None,
            assisted_order: None,
        }
    }

    /// Attack: `A bre - lon`
    pub fn attack(country: &str, unit_type: UnitType, location: &str, destination: &str) -> Self {
        Self {
            destination: Some(destination.to_string()),
            order_type: OrderType::Attack,
            ..Self::hold(country, unit_type, location)
        }
    }

    /// Support: `F rom S A apu - ven`
    pub fn support(
        country: &str,
        unit_type: UnitType,
        location: &str,
        assisted: AssistedOrder,
    ) -> Self {
        Self {
            order_type: OrderType::Support,
            assisted_order: Some(Box::new(assisted)),
            ..Self::hold(country, unit_type, location)
        }
    }
}

/// The order a support order assists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AssistedOrder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<UnitType>,
    pub location: Location,
    pub order_type: OrderType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<Location>,
}

impl AssistedOrder {
    /// A supported unit that stays where it is.
    pub fn hold(location: &str) -> Self {
        Self {
            country: None,
            unit_type: None,
            location: location.to_string(),
            order_type: OrderType::Hold,
            destination: None,
        }
    }

    /// A supported attack from `location` into `destination`.
    pub fn attack(location: &str, destination: &str) -> Self {
        Self {
            order_type: OrderType::Attack,
            destination: Some(destination.to_string()),
            ..Self::hold(location)
        }
    }
}

/// An order paired with its adjudication outcome.
///
/// Decodes from a two-element JSON array `[order, outcome]`. The outcome is
/// kept opaque; nothing in the renderer inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResult(pub Order, pub Value);

impl OrderResult {
    pub fn order(&self) -> &Order {
        &self.0
    }
}
