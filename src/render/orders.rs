//! Draws order arrows.
//!
//! Every arrow is painted as two primitives sharing one path: a wide border
//! first, then the narrower country-styled line with its arrowhead on top.
//! Attacks are straight lines between unit anchors. A support of a hold is a
//! straight line to the supported unit; a support of an attack is a cubic
//! curve ending at the midpoint of the supported attack and pulled toward
//! the attacking unit.

use tracing::debug;

use crate::board::{AssistedOrder, Order, OrderResult, OrderType};
use crate::config::{url_ref, RenderConfig};
use crate::map::{cubic_path, line_path, midpoint, unit_anchor, Point};
use crate::svg::{emit, Element, PrimitiveKind};

use super::RenderError;

/// Which arrow style an order is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowKind {
    Attack,
    Support,
}

/// Arrow geometry in map coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArrowPath {
    Straight {
        from: Point,
        to: Point,
    },
    Curve {
        start: Point,
        c1: Point,
        c2: Point,
        end: Point,
    },
}

impl ArrowPath {
    /// SVG path data for this geometry.
    pub fn path_data(&self) -> String {
        match *self {
            ArrowPath::Straight { from, to } => line_path(from, to),
            ArrowPath::Curve { start, c1, c2, end } => cubic_path(start, c1, c2, end),
        }
    }
}

/// A fully resolved arrow, ready to be emitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub kind: ArrowKind,
    pub path: ArrowPath,
}

fn invalid(order: &Order, reason: &str) -> RenderError {
    RenderError::InvalidOrder {
        location: order.location.clone(),
        order_type: order.order_type,
        reason: reason.to_string(),
    }
}

/// Computes the arrow for `order`, or `None` for a plain hold.
///
/// All lookups happen here, before anything is emitted, so an order that
/// fails leaves the container untouched.
pub fn order_arrow(order: &Order) -> Result<Option<Arrow>, RenderError> {
    match order.order_type {
        OrderType::Hold => Ok(None),
        OrderType::Attack => {
            let destination = order
                .destination
                .as_deref()
                .ok_or_else(|| invalid(order, "attack has no destination"))?;
            Ok(Some(Arrow {
                kind: ArrowKind::Attack,
                path: ArrowPath::Straight {
                    from: unit_anchor(&order.location)?,
                    to: unit_anchor(destination)?,
                },
            }))
        }
        OrderType::Support => {
            let assisted = order
                .assisted_order
                .as_deref()
                .ok_or_else(|| invalid(order, "support has no assisted order"))?;
            let path = support_path(order, assisted)?;
            Ok(Some(Arrow {
                kind: ArrowKind::Support,
                path,
            }))
        }
    }
}

fn support_path(order: &Order, assisted: &AssistedOrder) -> Result<ArrowPath, RenderError> {
    let start = unit_anchor(&order.location)?;
    match assisted.order_type {
        OrderType::Hold => Ok(ArrowPath::Straight {
            from: start,
            to: unit_anchor(&assisted.location)?,
        }),
        OrderType::Attack => {
            let destination = assisted
                .destination
                .as_deref()
                .ok_or_else(|| invalid(order, "supported attack has no destination"))?;
            let attacker = unit_anchor(&assisted.location)?;
            let end = midpoint(attacker, unit_anchor(destination)?);
            Ok(ArrowPath::Curve {
                start,
                c1: midpoint(start, end),
                c2: attacker,
                end,
            })
        }
        OrderType::Support => Err(invalid(
            order,
            "a support can only assist a hold or an attack",
        )),
    }
}

fn draw_arrow(container: &mut Element, country: &str, arrow: &Arrow, config: &RenderConfig) {
    let d = arrow.path.path_data();
    let (class, marker) = match arrow.kind {
        ArrowKind::Attack => (config.attack_class(country), &config.attack_marker),
        ArrowKind::Support => (config.support_class(country), &config.support_marker),
    };
    emit(
        container,
        PrimitiveKind::Path,
        [("class", config.border_class.clone()), ("d", d.clone())],
    );
    emit(
        container,
        PrimitiveKind::Path,
        [
            ("class", class),
            ("d", d),
            ("marker-end", url_ref(marker)),
        ],
    );
}

/// Draws a single order. Holds draw nothing.
pub fn render_order(
    container: &mut Element,
    order: &Order,
    config: &RenderConfig,
) -> Result<(), RenderError> {
    if let Some(arrow) = order_arrow(order)? {
        draw_arrow(container, &order.country, &arrow, config);
    }
    Ok(())
}

/// Draws each order in sequence. Every arrow is resolved first, so one
/// invalid order means nothing is drawn.
pub fn render_orders<'a, I>(
    container: &mut Element,
    orders: I,
    config: &RenderConfig,
) -> Result<(), RenderError>
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut arrows = Vec::new();
    let mut count = 0usize;
    for order in orders {
        if let Some(arrow) = order_arrow(order)? {
            arrows.push((order.country.as_str(), arrow));
        }
        count += 1;
    }
    for (country, arrow) in &arrows {
        draw_arrow(container, country, arrow, config);
    }
    debug!(orders = count, arrows = arrows.len(), "rendered orders");
    Ok(())
}

/// Draws the order half of each adjudicated pair. Outcomes are not
/// consulted.
pub fn render_order_results(
    container: &mut Element,
    results: &[OrderResult],
    config: &RenderConfig,
) -> Result<(), RenderError> {
    render_orders(container, results.iter().map(OrderResult::order), config)
}

/// Draws only the attack orders among adjudicated pairs.
pub fn render_resolution_results(
    container: &mut Element,
    results: &[OrderResult],
    config: &RenderConfig,
) -> Result<(), RenderError> {
    render_orders(
        container,
        results
            .iter()
            .map(OrderResult::order)
            .filter(|order| order.order_type == OrderType::Attack),
        config,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::UnitType;
    use serde_json::Value;

    fn render(orders: &[Order]) -> Result<Element, RenderError> {
        let mut g = Element::new("g");
        render_orders(&mut g, orders, &RenderConfig::default())?;
        Ok(g)
    }

    #[test]
    fn attack_draws_border_then_line() {
        let g = render(&[Order::attack("france", UnitType::Army, "par", "bur")]).unwrap();
        assert_eq!(g.children().len(), 2);

        let border = &g.children()[0];
        assert_eq!(border.attr("class"), Some("border"));
        assert_eq!(border.attr("d"), Some("M162,346L191,360"));
        assert_eq!(border.attr("marker-end"), None);

        let line = &g.children()[1];
        assert_eq!(line.attr("class"), Some("france-attack"));
        assert_eq!(line.attr("d"), border.attr("d"));
        assert_eq!(line.attr("marker-end"), Some("url(#arrow)"));
    }

    #[test]
    fn hold_draws_nothing() {
        let g = render(&[Order::hold("germany", UnitType::Army, "mun")]).unwrap();
        assert!(g.children().is_empty());
    }

    #[test]
    fn invalid_order_later_in_batch_draws_nothing() {
        let mut g = Element::new("g");
        let result = render_orders(
            &mut g,
            &[
                Order::attack("france", UnitType::Army, "par", "bur"),
                Order::attack("france", UnitType::Army, "mar", "xyz"),
            ],
            &RenderConfig::default(),
        );
        assert!(matches!(result, Err(RenderError::UnknownLocation(_))));
        assert!(g.children().is_empty());
    }

    #[test]
    fn support_of_hold_is_straight() {
        let order = Order::support(
            "germany",
            UnitType::Army,
            "mun",
            AssistedOrder::hold("ber"),
        );
        let arrow = order_arrow(&order).unwrap().unwrap();
        assert_eq!(arrow.kind, ArrowKind::Support);
        assert_eq!(
            arrow.path,
            ArrowPath::Straight {
                from: Point::new(243.0, 347.0),
                to: Point::new(279.0, 283.0),
            }
        );

        let g = render(&[order]).unwrap();
        assert_eq!(g.children()[1].attr("class"), Some("germany-order support"));
        assert_eq!(g.children()[1].attr("marker-end"), Some("url(#support-arrow)"));
    }

    #[test]
    fn support_of_attack_curves_to_midpoint() {
        // A mar S A par - bur
        let order = Order::support(
            "france",
            UnitType::Army,
            "mar",
            AssistedOrder::attack("par", "bur"),
        );
        let arrow = order_arrow(&order).unwrap().unwrap();
        let start = Point::new(184.0, 402.0);
        let end = Point::new(176.5, 353.0);
        assert_eq!(
            arrow.path,
            ArrowPath::Curve {
                start,
                c1: midpoint(start, end),
                c2: Point::new(162.0, 346.0),
                end,
            }
        );
        assert_eq!(arrow.path.path_data(), "M184,402C180.25,377.5 162,346 176.5,353");
    }

    #[test]
    fn support_of_support_is_invalid_and_draws_nothing() {
        let mut assisted = AssistedOrder::hold("bur");
        assisted.order_type = OrderType::Support;
        let order = Order::support("france", UnitType::Army, "par", assisted);

        let mut g = Element::new("g");
        let err = render_order(&mut g, &order, &RenderConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            RenderError::InvalidOrder {
                order_type: OrderType::Support,
                ..
            }
        ));
        assert!(g.children().is_empty());
    }

    #[test]
    fn attack_without_destination_is_invalid() {
        let mut order = Order::attack("france", UnitType::Army, "par", "bur");
        order.destination = None;
        assert!(matches!(
            order_arrow(&order),
            Err(RenderError::InvalidOrder { .. })
        ));
    }

    #[test]
    fn unknown_destination_leaves_container_untouched() {
        let mut g = Element::new("g");
        let order = Order::attack("france", UnitType::Army, "par", "xyz");
        assert!(render_order(&mut g, &order, &RenderConfig::default()).is_err());
        assert!(g.children().is_empty());
    }

    #[test]
    fn resolution_results_draw_only_attacks() {
        let results = vec![
            OrderResult(
                Order::attack("france", UnitType::Army, "par", "bur"),
                Value::Null,
            ),
            OrderResult(
                Order::support(
                    "france",
                    UnitType::Army,
                    "mar",
                    AssistedOrder::attack("par", "bur"),
                ),
                Value::Null,
            ),
            OrderResult(Order::hold("germany", UnitType::Army, "mun"), Value::Null),
        ];

        let mut attacks = Element::new("g");
        render_resolution_results(&mut attacks, &results, &RenderConfig::default()).unwrap();
        assert_eq!(attacks.children().len(), 2);

        let mut all = Element::new("g");
        render_order_results(&mut all, &results, &RenderConfig::default()).unwrap();
        assert_eq!(all.children().len(), 4);
    }
}
