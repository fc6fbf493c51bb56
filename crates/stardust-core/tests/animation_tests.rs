use stardust_core::animation::*;
use stardust_core::*;

#[test]
fn pulse_scale_stays_within_intensity() {
    for i in 0..200 {
        let t = i as f32 * 0.173;
        let s = pulse_scale(t, 0.5, 0.2);
        assert!((0.8 - 1e-6..=1.2 + 1e-6).contains(&s), "scale {s} at {t}");
    }
    assert_eq!(pulse_scale(0.0, 0.5, 0.2), 1.0);
}

#[test]
fn drift_rotation_wraps_to_one_turn() {
    let yaw = drift_rotation(6.2, 1.0, 0.1);
    assert!(yaw >= 0.0 && yaw < std::f32::consts::TAU);
    assert!((yaw - (6.3 - std::f32::consts::TAU)).abs() < 1e-5);
    assert_eq!(drift_rotation(1.0, 0.0, 0.1), 1.0);
}

#[test]
fn spin_drift_preserves_axis_distance_and_height() {
    let params = GenerationParams {
        count: 500,
        ..GenerationParams::default()
    };
    let mut cloud = generate_spiral(&params, &mut seeded(9));
    let before: Vec<_> = cloud.positions().to_vec();
    // t chosen so the variation is far from zero
    apply_spin_drift(&mut cloud, params.radius, 7.5, 0.25);
    let mut moved = 0;
    for (a, b) in before.iter().zip(cloud.positions()) {
        let da = (a.x * a.x + a.z * a.z).sqrt();
        let db = (b.x * b.x + b.z * b.z).sqrt();
        assert!((da - db).abs() < 1e-4);
        assert_eq!(a.y, b.y);
        if (a.x - b.x).abs() > 1e-6 {
            moved += 1;
        }
    }
    assert!(moved > 0);
}

#[test]
fn outer_points_wind_faster() {
    let near = Rgb::WHITE;
    let mut cloud = PointCloud::with_capacity(2);
    cloud.push(glam::Vec3::new(1.0, 0.0, 0.0), near, 1.0);
    cloud.push(glam::Vec3::new(4.0, 0.0, 0.0), near, 4.0);
    apply_spin_drift(&mut cloud, 5.0, 7.5, 0.5);
    let p = cloud.positions();
    let a0 = p[0].z.atan2(p[0].x).abs();
    let a1 = p[1].z.atan2(p[1].x).abs();
    assert!(a1 > a0 * 3.9 && a1 < a0 * 4.1);
}

#[test]
fn ripple_height_is_bounded() {
    for i in 0..100 {
        for j in 0..20 {
            let h = ripple_height(j as f32 * 0.5, i as f32 * 0.07);
            assert!(h.abs() <= 0.5 + 1e-6);
        }
    }
    let mut cloud = generate_spiral(&GenerationParams::ripple_field(), &mut seeded(10));
    apply_ripple(&mut cloud, 3.0);
    for p in cloud.positions() {
        let d = (p.x * p.x + p.z * p.z).sqrt();
        assert_eq!(p.y, ripple_height(d, 3.0));
    }
}

#[test]
fn hue_cycling_keeps_colors_in_range() {
    let params = GenerationParams {
        count: 1_000,
        ..GenerationParams::default()
    };
    let mut cloud = generate_spiral(&params, &mut seeded(11));
    for step in 0..30 {
        let t = step as f32 * 0.9;
        let (inside, outside) = cycled_gradient(params.inside_color, params.outside_color, t);
        apply_radial_gradient(&mut cloud, inside, outside, params.radius);
        for c in cloud.colors() {
            for ch in c.to_array() {
                assert!((-1e-5..=1.0 + 1e-5).contains(&ch));
            }
        }
    }
}

#[test]
fn cycled_gradient_runs_outside_half_a_turn_ahead() {
    let red = Rgb::from_hex(0xff0000);
    let (inside, outside) = cycled_gradient(red, red, 0.0);
    assert_eq!(inside.to_hex(), 0xff0000);
    assert_eq!(outside.to_hex(), 0x00ffff);
    assert!((hue_offset(12.0) - 0.2).abs() < 1e-5);
}

#[test]
fn eases_start_at_zero_and_end_at_one() {
    for ease in [Ease::Linear, Ease::Power3Out, Ease::Power4Out] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(2.0), 1.0);
    }
    assert!(Ease::Power4Out.apply(0.2) > Ease::Power3Out.apply(0.2));
    assert!(Ease::Power3Out.apply(0.2) > Ease::Linear.apply(0.2));
}

#[test]
fn tween_reaches_its_target_and_stops() {
    let mut t = Tween::new(1.0, 2.5, 1.5, Ease::Power4Out);
    assert_eq!(t.value(), 1.0);
    let mid = t.step(0.5);
    assert!(mid > 1.0 && mid < 2.5);
    assert!(!t.finished());
    t.step(2.0);
    assert!(t.finished());
    assert_eq!(t.value(), 2.5);
}

#[test]
fn ease_toward_converges_without_overshoot() {
    let mut x = 0.0;
    for _ in 0..120 {
        x = ease_toward(x, 1.0, 5.0, 1.0 / 60.0);
        assert!(x <= 1.0);
    }
    assert!((x - 1.0).abs() < 1e-3);
    // a huge step lands on the target instead of passing it
    assert_eq!(ease_toward(0.0, 1.0, 5.0, 1.0), 1.0);
}
