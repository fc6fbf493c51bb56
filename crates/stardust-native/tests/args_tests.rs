// The native crate is a binary, so the pure argument helpers are included directly.

#![allow(dead_code)]
mod args {
    include!("../src/args.rs");
}

use args::*;
use stardust_core::DemoKind;

#[test]
fn no_arguments_gives_defaults() {
    let cli = parse_args(Vec::<String>::new());
    assert_eq!(cli, CliArgs::default());
    assert_eq!(cli.kind, DemoKind::Galaxy);
}

#[test]
fn demo_seed_and_overrides_are_separated() {
    let cli = parse_args(["lights", "seed=42", "count=5000", "insideColor=#ff0000"]);
    assert_eq!(cli.kind, DemoKind::Lights);
    assert_eq!(cli.seed, Some(42));
    assert_eq!(
        cli.overrides,
        vec![
            ("count".to_string(), "5000".to_string()),
            ("insideColor".to_string(), "#ff0000".to_string()),
        ]
    );
}

#[test]
fn bad_demo_and_seed_are_ignored() {
    let cli = parse_args(["nebula", "seed=abc"]);
    assert_eq!(cli.kind, DemoKind::Galaxy);
    assert_eq!(cli.seed, None);
    assert!(cli.overrides.is_empty());
}

#[test]
fn cursor_normalizes_to_centre() {
    assert_eq!(normalized_cursor(640.0, 400.0, 1280.0, 800.0), (0.0, 0.0));
    assert_eq!(normalized_cursor(1280.0, 0.0, 1280.0, 800.0), (0.5, -0.5));
    assert_eq!(normalized_cursor(5.0, 5.0, 0.0, 0.0), (0.0, 0.0));
}

#[test]
fn wheel_scroll_stays_on_page() {
    let mut s = VirtualScroll::default();
    // wheel up at the top goes nowhere
    assert_eq!(s.scroll_lines(1.0, 800.0, 3), 0.0);
    assert_eq!(s.scroll_lines(-2.0, 800.0, 3), 2.0 * LINE_PX);
    // two viewports of travel for three sections
    assert_eq!(s.scroll_px(10_000.0, 800.0, 3), 1600.0);
    assert_eq!(s.offset(), 1600.0);
    // shrinking the window pulls the offset back in range
    assert_eq!(s.scroll_px(0.0, 400.0, 3), 800.0);
}
