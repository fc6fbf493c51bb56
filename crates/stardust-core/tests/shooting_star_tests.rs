use stardust_core::shooting_star::*;
use stardust_core::*;

#[test]
fn spawned_star_starts_on_the_shell_heading_inward() {
    let mut rng = seeded(21);
    for _ in 0..50 {
        let star = ShootingStar::spawn(&mut rng);
        assert!(star.active);
        assert!((star.position.length() - SHOOTING_STAR_SPAWN_RADIUS).abs() < 1e-3);
        assert!((star.direction.length() - 1.0).abs() < 1e-4);
        assert!(star.position.dot(star.direction) < 0.0);
    }
}

#[test]
fn stars_deactivate_after_crossing_the_centre() {
    let mut rng = seeded(22);
    let mut star = ShootingStar::spawn(&mut rng);
    let mut frames = 0;
    while star.active && frames < 1_000 {
        star.advance(1.0 / 60.0);
        frames += 1;
    }
    assert!(!star.active);
    // 20 units at 30 per second, plus a little slack for jittered paths
    assert!(frames <= 60);
}

#[test]
fn trail_follows_behind_the_head() {
    let mut rng = seeded(23);
    let star = ShootingStar::spawn(&mut rng);
    let trail: Vec<_> = star.trail().collect();
    assert_eq!(trail.len(), SHOOTING_STAR_TRAIL_POINTS);
    assert_eq!(trail[0], star.position);
    let last = trail[trail.len() - 1];
    let expected = (SHOOTING_STAR_TRAIL_POINTS - 1) as f32 * SHOOTING_STAR_TRAIL_SPACING;
    assert!(((last - star.position).length() - expected).abs() < 1e-4);
}

#[test]
fn field_rolls_once_per_interval() {
    let mut field = ShootingStarField::new();
    // first roll spawns (0.9 > 0.7) and five spawn draws follow; the second
    // roll fails
    let mut rng = ScriptedRandom::new(vec![0.9, 0.25, 0.5, 0.5, 0.5, 0.5, 0.1]);
    field.update(1.5, &mut rng);
    assert!(field.stars().is_empty());
    assert_eq!(rng.draws(), 0);
    field.update(0.5, &mut rng);
    assert_eq!(field.stars().len(), 1);
    assert_eq!(rng.draws(), 6);
    field.update(SHOOTING_STAR_INTERVAL_SEC, &mut rng);
    assert_eq!(rng.draws(), 7);
}

#[test]
fn finished_stars_are_dropped() {
    let mut field = ShootingStarField::new();
    let mut rng = ScriptedRandom::new(vec![0.99, 0.3, 0.4, 0.5, 0.5, 0.5, 0.0]);
    field.update(1.5, &mut rng);
    field.update(0.5, &mut rng);
    assert_eq!(field.stars().len(), 1);
    for _ in 0..120 {
        field.update(1.0 / 60.0, &mut rng);
    }
    assert!(field.stars().is_empty());
}
