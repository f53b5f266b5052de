//! Render session state.
//!
//! Owns the map root and drives each render cycle: a trigger registers a
//! request and clears the overlay, and when the data for that request
//! arrives the overlay is redrawn from scratch. Requests are numbered; data
//! that arrives for anything but the newest request is dropped, so a slow
//! load can never paint over a newer one.

use std::fmt::Display;

use tracing::{info, warn};

use crate::board::{Gamestate, Order};
use crate::config::RenderConfig;
use crate::map::BackgroundMap;
use crate::protocol::OrdersPhaseTest;
use crate::render::{
    clear_overlay, ensure_overlay, overlay, render_gamestate, render_order_results, render_orders,
    render_resolution_results, RenderError,
};
use crate::svg::{map_root, to_svg_string, Element};

/// Identifies one render trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

/// What happened to a completed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The overlay now holds this many primitives.
    Rendered { primitives: usize },
    /// A newer request was made; nothing was drawn.
    Stale,
}

/// Holds the map root and the request counter between render cycles.
#[derive(Debug)]
pub struct Session {
    config: RenderConfig,
    root: Element,
    latest: u64,
}

impl Session {
    /// Creates a session with an empty map root.
    pub fn new(config: RenderConfig) -> Self {
        let root = map_root(&config.map_root_id);
        Session {
            config,
            root,
            latest: 0,
        }
    }

    pub fn map_root(&self) -> &Element {
        &self.root
    }

    /// The overlay container, if anything has been drawn.
    pub fn overlay(&self) -> Option<&Element> {
        overlay(&self.root, &self.config.overlay_id)
    }

    /// Number of primitives currently drawn.
    pub fn primitive_count(&self) -> usize {
        self.overlay().map_or(0, |g| g.children().len())
    }

    /// Registers a new render trigger. The overlay is cleared right away so
    /// only the newest state is ever shown.
    pub fn request(&mut self) -> RequestId {
        self.latest += 1;
        self.clear();
        RequestId(self.latest)
    }

    /// Returns true if `id` is the newest request.
    pub fn is_current(&self, id: RequestId) -> bool {
        id.0 == self.latest
    }

    /// Removes all drawn content.
    pub fn clear(&mut self) {
        clear_overlay(&mut self.root, &self.config.overlay_id);
    }

    /// Draws a gamestate for request `id`.
    pub fn complete_gamestate(
        &mut self,
        id: RequestId,
        gamestate: &Gamestate,
    ) -> Result<RenderOutcome, RenderError> {
        self.complete(id, |container, config| {
            render_gamestate(container, gamestate, config)
        })
    }

    /// Draws an orders-phase test case for request `id`: the starting board,
    /// then its adjudicated orders.
    pub fn complete_orders_test(
        &mut self,
        id: RequestId,
        test: &OrdersPhaseTest,
    ) -> Result<RenderOutcome, RenderError> {
        let gamestate = test.gamestate_before();
        self.complete(id, |container, config| {
            render_gamestate(container, &gamestate, config)?;
            if config.attacks_only {
                render_resolution_results(container, &test.resolution_results, config)
            } else {
                render_order_results(container, &test.resolution_results, config)
            }
        })
    }

    /// Records that the data for request `id` could not be loaded. Nothing
    /// is drawn for this cycle.
    pub fn fail(&mut self, id: RequestId, err: &dyn Display) {
        if self.is_current(id) {
            self.clear();
            warn!(request = id.0, error = %err, "render request failed, overlay left empty");
        } else {
            warn!(request = id.0, error = %err, "stale render request failed");
        }
    }

    /// Draws `orders` on top of whatever is already drawn. If any order is
    /// invalid, none of them are drawn.
    pub fn draw_orders(&mut self, orders: &[Order]) -> Result<usize, RenderError> {
        let had_overlay = self.overlay().is_some();
        let container = ensure_overlay(&mut self.root, &self.config.overlay_id);
        if let Err(e) = render_orders(container, orders, &self.config) {
            if !had_overlay {
                self.clear();
            }
            warn!(error = %e, "orders not drawn");
            return Err(e);
        }
        Ok(self.primitive_count())
    }

    fn complete<F>(&mut self, id: RequestId, draw: F) -> Result<RenderOutcome, RenderError>
    where
        F: FnOnce(&mut Element, &RenderConfig) -> Result<(), RenderError>,
    {
        if !self.is_current(id) {
            warn!(request = id.0, latest = self.latest, "dropping stale render response");
            return Ok(RenderOutcome::Stale);
        }

        self.clear();
        let container = ensure_overlay(&mut self.root, &self.config.overlay_id);
        if let Err(e) = draw(container, &self.config) {
            self.clear();
            return Err(e);
        }

        let primitives = self.primitive_count();
        info!(request = id.0, primitives, "rendered");
        Ok(RenderOutcome::Rendered { primitives })
    }

    /// The map root serialized as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        to_svg_string(&self.root)
    }

    /// The background map with the current overlay spliced in.
    pub fn composite(&self, background: &BackgroundMap) -> String {
        let overlay = self.overlay().map(to_svg_string).unwrap_or_default();
        background.composite(&overlay)
    }

    /// The document to write out: composited onto `background` if there is
    /// one, standalone otherwise.
    pub fn document(&self, background: Option<&BackgroundMap>) -> String {
        match background {
            Some(bg) => self.composite(bg),
            None => self.to_svg(),
        }
    }
}
