//! Draws a gamestate snapshot: the time label, unit markers and
//! supply-center markers.

use tracing::debug;

use crate::board::Gamestate;
use crate::config::{href, RenderConfig};
use crate::map::{supply_center_anchor, translate, unit_anchor};
use crate::svg::{emit, emit_text, Element, PrimitiveKind};

use super::RenderError;

/// Draws `gamestate` into `container`.
///
/// The time label is drawn exactly once. Units and supply centers are drawn
/// in location order. Fails only when a location has no anchor.
pub fn render_gamestate(
    container: &mut Element,
    gamestate: &Gamestate,
    config: &RenderConfig,
) -> Result<(), RenderError> {
    emit_text(
        container,
        [
            ("x", config.time_label_x.to_string()),
            ("y", config.time_label_y.to_string()),
            ("style", config.time_label_style()),
        ],
        &gamestate.game_time.label(),
    );

    for (location, unit) in &gamestate.unit_positions {
        let anchor = unit_anchor(location)?;
        emit(
            container,
            PrimitiveKind::Use,
            [
                ("xlink:href", href(unit.unit_type.symbol_id())),
                ("class", unit.country.clone()),
                ("transform", translate(anchor)),
            ],
        );
    }

    for (country, locations) in &gamestate.supply_center_ownership {
        for location in locations {
            let anchor = supply_center_anchor(location)?;
            emit(
                container,
                PrimitiveKind::Use,
                [
                    ("xlink:href", href(&config.supply_center_symbol)),
                    ("class", country.clone()),
                    ("transform", translate(anchor)),
                ],
            );
        }
    }

    debug!(
        units = gamestate.unit_positions.len(),
        supply_centers = gamestate.supply_center_count(),
        "rendered gamestate"
    );
    Ok(())
}
