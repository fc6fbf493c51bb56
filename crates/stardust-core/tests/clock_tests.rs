use stardust_core::*;
use std::time::Duration;

#[test]
fn first_tick_has_zero_delta() {
    let mut clock = FrameClock::new();
    let t = clock.tick_at(instant::Instant::now());
    assert_eq!(t.delta, 0.0);
    assert_eq!(t.elapsed, 0.0);
}

#[test]
fn advance_accumulates_elapsed() {
    let mut clock = FrameClock::new();
    clock.advance(Duration::from_millis(100));
    let t = clock.advance(Duration::from_millis(50));
    assert!((t.delta - 0.05).abs() < 1e-6);
    assert!((t.elapsed - 0.15).abs() < 1e-6);
}

#[test]
fn long_stalls_are_capped() {
    let mut clock = FrameClock::new();
    let t = clock.advance(Duration::from_secs(5));
    assert_eq!(t.delta, MAX_FRAME_DELTA_SEC);
}

#[test]
fn paused_clock_stands_still() {
    let mut clock = FrameClock::new();
    clock.advance(Duration::from_millis(200));
    assert!(clock.toggle_pause());
    let t = clock.advance(Duration::from_millis(200));
    assert_eq!(t.delta, 0.0);
    assert!((clock.elapsed() - 0.2).abs() < 1e-6);
    clock.set_paused(false);
    assert!(!clock.is_paused());
    assert!(clock.advance(Duration::from_millis(10)).delta > 0.0);
}
