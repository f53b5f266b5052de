//! Library-level rendering tests.
//!
//! Exercises the overlay lifecycle and both renderers together against a
//! map root, the way a render cycle drives them.

use std::path::Path;

use diplomap::board::{AssistedOrder, GameTime, Gamestate, Order, OrderType, Unit, UnitType};
use diplomap::config::RenderConfig;
use diplomap::map::{format_point, midpoint, supply_center_anchor, unit_anchor, Point};
use diplomap::protocol::{load_gamestate, load_orders_test};
use diplomap::render::{
    clear_overlay, ensure_overlay, overlay, render_gamestate, render_orders,
    render_resolution_results, RenderError,
};
use diplomap::svg::{map_root, to_svg_string, Element};

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn render_cycle(root: &mut Element, gamestate: &Gamestate, config: &RenderConfig) {
    clear_overlay(root, &config.overlay_id);
    let container = ensure_overlay(root, &config.overlay_id);
    render_gamestate(container, gamestate, config).unwrap();
}

fn drawn(root: &Element, config: &RenderConfig) -> Vec<String> {
    overlay(root, &config.overlay_id)
        .map(|g| g.children().iter().map(to_svg_string).collect())
        .unwrap_or_default()
}

#[test]
fn clear_twice_matches_clear_once() {
    let config = RenderConfig::default();
    let mut root = map_root(&config.map_root_id);
    let gs = load_gamestate(&fixture("gamestate_1901.json")).unwrap();
    render_cycle(&mut root, &gs, &config);

    clear_overlay(&mut root, &config.overlay_id);
    let once = root.clone();
    clear_overlay(&mut root, &config.overlay_id);
    assert_eq!(root, once);
    assert!(overlay(&root, &config.overlay_id).is_none());
}

#[test]
fn render_clear_render_keeps_only_the_second_state() {
    let config = RenderConfig::default();
    let mut root = map_root(&config.map_root_id);

    let a = load_gamestate(&fixture("gamestate_1901.json")).unwrap();
    let mut b = Gamestate::new(GameTime::new(1902, "fall"));
    b.unit_positions
        .insert("bur".to_string(), Unit::new(UnitType::Army, "france"));
    b.supply_center_ownership
        .entry("france".to_string())
        .or_default()
        .insert("par".to_string());

    render_cycle(&mut root, &a, &config);
    assert_eq!(drawn(&root, &config).len(), 45);

    render_cycle(&mut root, &b, &config);
    let mut fresh = map_root(&config.map_root_id);
    render_cycle(&mut fresh, &b, &config);

    assert_eq!(drawn(&root, &config), drawn(&fresh, &config));
    assert_eq!(drawn(&root, &config).len(), 3);
    assert_eq!(root.children().len(), 1);
}

#[test]
fn anchors_are_deterministic() {
    for _ in 0..3 {
        assert_eq!(unit_anchor("par").unwrap(), Point::new(162.0, 346.0));
        assert_eq!(supply_center_anchor("par").unwrap(), Point::new(173.0, 334.0));
    }
}

#[test]
fn fall_1901_label() {
    let config = RenderConfig::default();
    let mut root = map_root(&config.map_root_id);
    render_cycle(&mut root, &Gamestate::new(GameTime::new(1901, "fall")), &config);
    let label = &overlay(&root, &config.overlay_id).unwrap().children()[0];
    assert_eq!(label.name(), "text");
    assert_eq!(label.text(), Some("Fall 1901"));
}

#[test]
fn attack_path_runs_between_unit_anchors() {
    let config = RenderConfig::default();
    let mut g = Element::new("g");
    render_orders(
        &mut g,
        &[Order::attack("france", UnitType::Army, "par", "bur")],
        &config,
    )
    .unwrap();

    assert_eq!(g.children().len(), 2);
    let d = g.children()[1].attr("d").unwrap();
    assert!(d.starts_with(&format!("M{}", format_point(unit_anchor("par").unwrap()))));
    assert!(d.ends_with(&format_point(unit_anchor("bur").unwrap())));
    assert_eq!(g.children()[0].attr("class"), Some("border"));
    assert_eq!(g.children()[1].attr("class"), Some("france-attack"));
}

#[test]
fn support_branches_on_assisted_order_type() {
    let config = RenderConfig::default();

    let mut hold = Element::new("g");
    render_orders(
        &mut hold,
        &[Order::support(
            "italy",
            UnitType::Army,
            "tyr",
            AssistedOrder::hold("ven"),
        )],
        &config,
    )
    .unwrap();
    let d = hold.children()[1].attr("d").unwrap();
    assert_eq!(d, "M277,378L250,408");

    let mut attack = Element::new("g");
    render_orders(
        &mut attack,
        &[Order::support(
            "austria",
            UnitType::Fleet,
            "adr",
            AssistedOrder::attack("tri", "ven"),
        )],
        &config,
    )
    .unwrap();
    let d = attack.children()[1].attr("d").unwrap();
    let tri = unit_anchor("tri").unwrap();
    let end = midpoint(tri, unit_anchor("ven").unwrap());
    let (_, curve) = d.split_once('C').unwrap();
    let points: Vec<&str> = curve.split(' ').collect();
    assert_eq!(points.len(), 3);
    assert_eq!(points[1], format_point(tri));
    assert_eq!(points[2], format_point(end));
}

#[test]
fn support_of_support_fails_without_output() {
    let config = RenderConfig::default();
    let mut assisted = AssistedOrder::hold("bur");
    assisted.order_type = OrderType::Support;
    let mut g = Element::new("g");
    let result = render_orders(
        &mut g,
        &[Order::support("france", UnitType::Army, "par", assisted)],
        &config,
    );
    assert!(matches!(result, Err(RenderError::InvalidOrder { .. })));
    assert!(g.children().is_empty());
}

#[test]
fn hold_orders_emit_nothing() {
    let mut g = Element::new("g");
    render_orders(
        &mut g,
        &[Order::hold("england", UnitType::Fleet, "lon")],
        &RenderConfig::default(),
    )
    .unwrap();
    assert!(g.children().is_empty());
}

#[test]
fn orders_test_fixture_renders_attacks() {
    let test = load_orders_test(&fixture("support_move.json")).unwrap();
    let mut g = Element::new("g");
    render_resolution_results(&mut g, &test.resolution_results, &RenderConfig::default())
        .unwrap();
    assert_eq!(g.children().len(), 2);
    assert_eq!(g.children()[1].attr("class"), Some("austria-attack"));
}

#[test]
fn custom_config_changes_tokens() {
    let config = RenderConfig::from_json(
        r#"{"overlay-id": "orders", "border-class": "edge", "attack-marker": "head"}"#,
    )
    .unwrap();
    let mut root = map_root(&config.map_root_id);
    let container = ensure_overlay(&mut root, &config.overlay_id);
    render_orders(
        container,
        &[Order::attack("turkey", UnitType::Army, "con", "bul")],
        &config,
    )
    .unwrap();
    let svg = to_svg_string(&root);
    assert!(svg.contains(r#"<g id="orders">"#));
    assert!(svg.contains(r#"class="edge""#));
    assert!(svg.contains(r#"marker-end="url(#head)""#));
}
