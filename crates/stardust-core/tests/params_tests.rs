use stardust_core::*;

#[test]
fn galaxy_defaults() {
    let p = GenerationParams::default();
    assert_eq!(p.count, 100_000);
    assert_eq!(p.radius, 5.0);
    assert_eq!(p.branches, 6);
    assert_eq!(p.spin, 1.0);
    assert_eq!(p.randomness, 0.2);
    assert_eq!(p.randomness_power, 2.2);
    assert_eq!(p.inside_color, Rgb::from_hex(0xffff00));
    assert_eq!(p.outside_color, Rgb::from_hex(0x0000ff));
    assert_eq!(p.scatter, Scatter::Proportional);
    assert!(p.validate().is_ok());

    let a = AnimationParams::default();
    assert_eq!(a.rotation_speed, 0.1);
    assert_eq!(a.pulse_speed, 0.5);
    assert_eq!(a.pulse_intensity, 0.2);
    assert!(!a.animate_colors);
    assert!(a.animate_spin);
}

#[test]
fn ripple_field_uses_fixed_scatter() {
    let p = GenerationParams::ripple_field();
    assert_eq!(p.count, 5_000);
    assert_eq!(p.radius, 10.0);
    assert_eq!(p.branches, 5);
    assert_eq!(p.scatter, Scatter::Fixed);
    assert_eq!(p.randomness, 0.8);
    assert_eq!(p.randomness_power, 3.0);
}

#[test]
fn overrides_accept_both_key_styles() {
    let mut g = GenerationParams::default();
    let mut a = AnimationParams::default();
    let rejected = apply_overrides(
        &mut g,
        &mut a,
        [
            ("count", "50000"),
            ("branches", "4"),
            ("randomnessPower", "3"),
            ("inside_color", "#ff0000"),
            ("rotationSpeed", "0.5"),
            ("animate_colors", "true"),
        ],
    );
    assert!(rejected.is_empty(), "{rejected:?}");
    assert_eq!(g.count, 50_000);
    assert_eq!(g.branches, 4);
    assert_eq!(g.randomness_power, 3.0);
    assert_eq!(g.inside_color, Rgb::from_hex(0xff0000));
    assert_eq!(a.rotation_speed, 0.5);
    assert!(a.animate_colors);
}

#[test]
fn overrides_report_bad_pairs_and_keep_going() {
    let mut g = GenerationParams::default();
    let mut a = AnimationParams::default();
    let rejected = apply_overrides(
        &mut g,
        &mut a,
        [("warp", "9"), ("count", "lots"), ("spin", "2"), ("outsideColor", "#zz")],
    );
    assert_eq!(rejected.len(), 3);
    assert_eq!(rejected[0], ParamError::UnknownKey("warp".into()));
    assert!(matches!(rejected[1], ParamError::InvalidValue { .. }));
    assert!(matches!(rejected[2], ParamError::Color(_)));
    assert_eq!(g.spin, 2.0);
}

#[test]
fn overrides_are_clamped_to_slider_ranges() {
    let mut g = GenerationParams::default();
    let mut a = AnimationParams::default();
    let rejected = apply_overrides(
        &mut g,
        &mut a,
        [("count", "5000000"), ("branches", "1"), ("spin", "-9"), ("pulseIntensity", "3")],
    );
    assert!(rejected.is_empty());
    assert_eq!(g.count, 1_000_000);
    assert_eq!(g.branches, 2);
    assert_eq!(g.spin, -5.0);
    assert_eq!(a.pulse_intensity, 1.0);
}

#[test]
fn validate_flags_out_of_range_fields() {
    let p = GenerationParams {
        radius: 50.0,
        ..GenerationParams::default()
    };
    match p.validate() {
        Err(ParamError::OutOfRange { key, max, .. }) => {
            assert_eq!(key, "radius");
            assert_eq!(max, 20.0);
        }
        other => panic!("expected out of range, got {other:?}"),
    }
}

#[test]
fn slider_clamp_snaps_to_step() {
    assert_eq!(BRANCHES_RANGE.clamp(4.4), 4.0);
    assert_eq!(BRANCHES_RANGE.clamp(4.6), 5.0);
    assert_eq!(COUNT_RANGE.clamp(149.0), 100.0);
    assert_eq!(COUNT_RANGE.clamp(151.0), 200.0);
    assert!(RANDOMNESS_RANGE.contains(0.0));
    assert!(!RANDOMNESS_RANGE.contains(2.5));
}

#[test]
fn split_pair_trims_and_skips_bare_words() {
    assert_eq!(split_pair("count=500"), Some(("count", "500")));
    assert_eq!(split_pair(" spin = -1.5 "), Some(("spin", "-1.5")));
    assert_eq!(split_pair("galaxy"), None);
    assert_eq!(split_pair("=3"), None);
}

#[test]
fn non_finite_overrides_are_rejected() {
    let mut g = GenerationParams::default();
    let mut a = AnimationParams::default();
    let rejected = apply_overrides(
        &mut g,
        &mut a,
        [("radius", "NaN"), ("pulseSpeed", "inf"), ("spin", "-infinity")],
    );
    assert_eq!(rejected.len(), 3);
    assert!(rejected
        .iter()
        .all(|e| matches!(e, ParamError::InvalidValue { .. })));
    assert_eq!(g.radius, 5.0);
    assert_eq!(g.spin, 1.0);
    assert_eq!(a.pulse_speed, 0.5);

    let cloud = generate_spiral(&g, &mut seeded(1));
    assert!(cloud.positions().iter().all(|p| p.is_finite()));
}

#[test]
fn clamping_pulls_nan_to_the_slider_minimum() {
    let g = GenerationParams {
        radius: f32::NAN,
        ..GenerationParams::default()
    }
    .clamped();
    assert_eq!(g.radius, RADIUS_RANGE.min as f32);
    assert!(g.radius.is_finite());
}
