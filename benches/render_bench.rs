use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use diplomap::board::{AssistedOrder, Order, UnitType};
use diplomap::config::RenderConfig;
use diplomap::map::unit_locations;
use diplomap::protocol::{parse_gamestate, parse_orders_test};
use diplomap::render::{render_gamestate, render_order_results, render_orders};
use diplomap::svg::{to_svg_string, Element};

const GAMESTATE_1901: &str = include_str!("../tests/fixtures/gamestate_1901.json");
const SUPPORT_MOVE: &str = include_str!("../tests/fixtures/support_move.json");

/// Random attacks and supports between registry locations.
fn random_orders(rng: &mut SmallRng, n: usize) -> Vec<Order> {
    let locations: Vec<&str> = unit_locations().collect();
    (0..n)
        .map(|i| {
            let picks: Vec<&&str> = locations.choose_multiple(rng, 3).collect();
            if i % 3 == 0 {
                Order::support(
                    "england",
                    UnitType::Fleet,
                    *picks[0],
                    AssistedOrder::attack(*picks[1], *picks[2]),
                )
            } else {
                Order::attack("france", UnitType::Army, *picks[0], *picks[1])
            }
        })
        .collect()
}

fn bench_render_gamestate(c: &mut Criterion) {
    let gamestate = parse_gamestate(GAMESTATE_1901).unwrap();
    let config = RenderConfig::default();
    c.bench_function("render_gamestate_1901", |b| {
        b.iter(|| {
            let mut g = Element::new("g");
            render_gamestate(&mut g, black_box(&gamestate), &config).unwrap();
            g
        })
    });
}

fn bench_render_random_orders(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(1901);
    let orders = random_orders(&mut rng, 34);
    let config = RenderConfig::default();
    c.bench_function("render_34_random_orders", |b| {
        b.iter(|| {
            let mut g = Element::new("g");
            render_orders(&mut g, black_box(&orders), &config).unwrap();
            g
        })
    });
}

fn bench_render_orders_test(c: &mut Criterion) {
    let test = parse_orders_test(SUPPORT_MOVE).unwrap();
    let gamestate = test.gamestate_before();
    let config = RenderConfig::default();
    c.bench_function("render_orders_test_case", |b| {
        b.iter(|| {
            let mut g = Element::new("g");
            render_gamestate(&mut g, black_box(&gamestate), &config).unwrap();
            render_order_results(&mut g, black_box(&test.resolution_results), &config).unwrap();
            g
        })
    });
}

fn bench_serialize_overlay(c: &mut Criterion) {
    let gamestate = parse_gamestate(GAMESTATE_1901).unwrap();
    let config = RenderConfig::default();
    let mut rng = SmallRng::seed_from_u64(7);
    let orders = random_orders(&mut rng, 34);
    let mut g = Element::new("g");
    render_gamestate(&mut g, &gamestate, &config).unwrap();
    render_orders(&mut g, &orders, &config).unwrap();
    c.bench_function("serialize_full_overlay", |b| {
        b.iter(|| to_svg_string(black_box(&g)))
    });
}

criterion_group!(
    benches,
    bench_render_gamestate,
    bench_render_random_orders,
    bench_render_orders_test,
    bench_serialize_overlay,
);
criterion_main!(benches);
