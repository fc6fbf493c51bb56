// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;
use stardust_core::DemoKind;

#[test]
fn pointer_reports_drag_only_while_pressed() {
    let mut p = PointerState::default();
    assert_eq!(p.move_to(10.0, 10.0), None);
    p.press(10.0, 10.0);
    assert_eq!(p.move_to(15.0, 7.0), Some(Vec2::new(5.0, -3.0)));
    assert_eq!(p.move_to(15.0, 7.0), Some(Vec2::ZERO));
    p.release();
    assert_eq!(p.move_to(20.0, 20.0), None);
    assert_eq!((p.x, p.y), (20.0, 20.0));
}

#[test]
fn client_coords_scale_to_backing_pixels() {
    // 400x300 CSS canvas at (100, 50) with a 2x backing store
    let px = client_to_canvas_px(
        Vec2::new(300.0, 200.0),
        Vec2::new(100.0, 50.0),
        Vec2::new(400.0, 300.0),
        (800, 600),
    );
    assert_eq!(px, Vec2::new(400.0, 300.0));
}

#[test]
fn client_coords_handle_collapsed_canvas() {
    let px = client_to_canvas_px(Vec2::new(5.0, 5.0), Vec2::ZERO, Vec2::ZERO, (800, 600));
    assert_eq!(px, Vec2::ZERO);
}

#[test]
fn cursor_is_centered_and_clamped() {
    assert_eq!(cursor_centered(400.0, 300.0, 800.0, 600.0), (0.0, 0.0));
    assert_eq!(cursor_centered(0.0, 600.0, 800.0, 600.0), (-0.5, 0.5));
    assert_eq!(cursor_centered(-50.0, 900.0, 800.0, 600.0), (-0.5, 0.5));
    assert_eq!(cursor_centered(10.0, 10.0, 0.0, 600.0), (0.0, 0.0));
}

#[test]
fn wheel_up_zooms_in() {
    assert!(wheel_steps(-100.0, 0) > 0.0);
    assert!(wheel_steps(100.0, 0) < 0.0);
    assert_eq!(wheel_steps(-100.0, 0), 1.0);
    assert_eq!(wheel_steps(-3.0, 1), 1.0);
}

#[test]
fn query_pairs_decode_values() {
    let pairs = query_pairs("?demo=galaxy&insideColor=%23ff6030&count=5000&flag&=x");
    assert_eq!(
        pairs,
        vec![
            ("demo".to_string(), "galaxy".to_string()),
            ("insideColor".to_string(), "#ff6030".to_string()),
            ("count".to_string(), "5000".to_string()),
        ]
    );
}

#[test]
fn query_pairs_keep_malformed_escapes() {
    let pairs = query_pairs("a=100%&b=%zz&c=one+two");
    assert_eq!(pairs[0].1, "100%");
    assert_eq!(pairs[1].1, "%zz");
    assert_eq!(pairs[2].1, "one two");
}

#[test]
fn empty_query_has_no_pairs() {
    assert!(query_pairs("").is_empty());
    assert!(query_pairs("?").is_empty());
}

#[test]
fn query_demo_wins_over_canvas_attribute() {
    assert_eq!(pick_demo(Some("lights"), Some("scroll")), DemoKind::Lights);
    assert_eq!(pick_demo(None, Some("scroll")), DemoKind::Scroll);
    assert_eq!(pick_demo(Some("nope"), Some("haunted")), DemoKind::HauntedHouse);
    assert_eq!(pick_demo(None, None), DemoKind::Galaxy);
}

#[test]
fn reserved_keys_are_not_overrides() {
    assert!(!is_override("demo"));
    assert!(!is_override("seed"));
    assert!(is_override("count"));
}
