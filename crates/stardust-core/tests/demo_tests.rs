use glam::Vec3;
use stardust_core::demos::*;
use stardust_core::*;

fn frame(elapsed: f32, delta: f32) -> FrameTime {
    FrameTime { elapsed, delta }
}

fn small_galaxy(rng: &mut dyn UnitRandom) -> GalaxyDemo {
    let params = GenerationParams {
        count: 1_000,
        ..GenerationParams::default()
    };
    GalaxyDemo::new(params, AnimationParams::default(), rng)
}

#[test]
fn demo_names_parse_and_display() {
    for kind in DemoKind::ALL {
        assert_eq!(kind.name().parse::<DemoKind>().unwrap(), kind);
        assert_eq!(kind.to_string(), kind.name());
    }
    assert_eq!("Haunted-House".parse::<DemoKind>().unwrap(), DemoKind::HauntedHouse);
    assert_eq!(
        "nebula".parse::<DemoKind>(),
        Err(DemoParseError("nebula".into()))
    );
    assert_eq!(DemoKind::default(), DemoKind::Galaxy);
}

#[test]
fn every_demo_builds_and_draws() {
    let mut rng = seeded(1);
    let params = GenerationParams {
        count: 2_000,
        ..GenerationParams::default()
    };
    let mut out = Vec::new();
    for kind in DemoKind::ALL {
        let mut demo = build_demo(kind, params.clone(), AnimationParams::default(), &mut rng);
        assert_eq!(demo.kind(), kind);
        demo.update(frame(0.5, 1.0 / 60.0), &mut rng);
        fill_instances(&*demo, &mut out);
        assert!(!out.is_empty(), "{kind} drew nothing");
        for inst in &out {
            assert!(inst.size > 0.0);
            assert!(inst.position.iter().all(|v| v.is_finite()));
            assert!(inst.color.iter().all(|v| v.is_finite() && *v >= 0.0));
        }
    }
}

#[test]
fn point_instance_layout_matches_the_vertex_buffer() {
    assert_eq!(std::mem::size_of::<PointInstance>(), 32);
    assert_eq!(std::mem::size_of::<PointUniforms>(), 80);
    let inst = PointInstance::new(Vec3::new(1.0, 2.0, 3.0), 0.5, [0.1, 0.2, 0.3, 1.0]);
    let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&inst));
    assert_eq!(floats, &[1.0, 2.0, 3.0, 0.5, 0.1, 0.2, 0.3, 1.0]);
}

#[test]
fn key_labels_map_to_actions() {
    assert_eq!(key_action("r"), Some(KeyAction::Regenerate));
    assert_eq!(key_action("C"), Some(KeyAction::ToggleColors));
    assert_eq!(key_action("]"), Some(KeyAction::MoreBranches));
    assert_eq!(key_action("["), Some(KeyAction::FewerBranches));
    assert_eq!(key_action("="), Some(KeyAction::SpinUp));
    assert_eq!(key_action("-"), Some(KeyAction::SpinDown));
    assert_eq!(key_action(" "), Some(KeyAction::Pause));
    assert_eq!(key_action("1"), Some(KeyAction::ToggleLight(0)));
    assert_eq!(key_action("6"), Some(KeyAction::ToggleLight(5)));
    assert_eq!(key_action("7"), None);
    assert_eq!(key_action("Shift"), None);
}

#[test]
fn galaxy_group_rotates_and_pulses() {
    let mut rng = seeded(2);
    let mut g = small_galaxy(&mut rng);
    g.update(frame(1.0, 0.5), &mut rng);
    assert!((g.yaw() - 0.05).abs() < 1e-6);
    let expected = 1.0 + (1.0f32 * 0.5).sin() * 0.2;
    assert!((g.scale() - expected).abs() < 1e-6);
}

#[test]
fn galaxy_keys_edit_parameters_and_regenerate() {
    let mut rng = seeded(3);
    let mut g = small_galaxy(&mut rng);
    let before = g.cloud().clone();

    g.handle_input(&InputEvent::Key(KeyAction::MoreBranches), &mut rng);
    assert_eq!(g.params().branches, 7);
    assert_ne!(g.cloud(), &before);
    assert_eq!(g.cloud().len(), 1_000);

    g.handle_input(&InputEvent::Key(KeyAction::SpinDown), &mut rng);
    assert!((g.params().spin - 0.9).abs() < 1e-4);

    for _ in 0..30 {
        g.handle_input(&InputEvent::Key(KeyAction::FewerBranches), &mut rng);
    }
    assert_eq!(g.params().branches, 2);

    assert!(!g.animation().animate_colors);
    g.handle_input(&InputEvent::Key(KeyAction::ToggleColors), &mut rng);
    assert!(g.animation().animate_colors);
    g.handle_input(&InputEvent::Key(KeyAction::ToggleSpin), &mut rng);
    assert!(!g.animation().animate_spin);
}

#[test]
fn galaxy_draws_cloud_shell_and_live_stars() {
    let mut rng = seeded(4);
    let g = small_galaxy(&mut rng);
    let mut out = Vec::new();
    g.write_instances(&mut out);
    let stars: usize = g
        .shooting_stars()
        .stars()
        .iter()
        .map(|_| 1 + SHOOTING_STAR_TRAIL_POINTS)
        .sum();
    assert_eq!(out.len(), 1_000 + AMBIENT_STAR_COUNT + stars);
}

#[test]
fn ripple_demo_sets_heights_from_distance() {
    let mut rng = seeded(5);
    let mut demo = ParticlesDemo::new(&mut rng);
    demo.update(frame(2.0, 0.016), &mut rng);
    for p in demo.cloud().positions() {
        let d = (p.x * p.x + p.z * p.z).sqrt();
        assert!((p.y - (2.0f32 * 4.0 - d * 3.0).sin() * 0.5).abs() < 1e-5);
    }
}

#[test]
fn ghosts_orbit_at_their_radius() {
    for ghost in GHOSTS {
        for i in 0..50 {
            let p = ghost_position(&ghost, i as f32 * 0.37);
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!((r - ghost.radius).abs() < 1e-4);
            assert!(p.y.abs() <= 1.0);
        }
    }
    let mut rng = seeded(6);
    let mut house = HauntedHouseDemo::new(&mut rng);
    house.update(frame(3.0, 0.016), &mut rng);
    assert_eq!(house.ghosts()[1], ghost_position(&GHOSTS[1], 3.0));
    assert_eq!(house.blend_mode(), BlendMode::Opaque);
}

#[test]
fn second_ghost_orbits_backwards() {
    let a = ghost_position(&GHOSTS[1], 0.0);
    let b = ghost_position(&GHOSTS[1], 0.1);
    // clockwise seen from above: z decreases from the +x axis
    assert!(a.z.abs() < 1e-6);
    assert!(b.z < 0.0);
}

#[test]
fn lights_start_with_only_the_spot() {
    let mut rng = seeded(7);
    let mut demo = LightsDemo::new(&mut rng);
    let enabled: Vec<_> = demo.lights().iter().map(|l| l.enabled).collect();
    assert_eq!(enabled, [false, false, false, false, false, true]);

    demo.handle_input(&InputEvent::Key(KeyAction::ToggleLight(0)), &mut rng);
    assert!(demo.lights()[0].enabled);
    demo.handle_input(&InputEvent::Key(KeyAction::ToggleLight(5)), &mut rng);
    assert!(!demo.lights()[5].enabled);
    // out-of-range slots are ignored
    demo.handle_input(&InputEvent::Key(KeyAction::ToggleLight(9)), &mut rng);
    assert_eq!(demo.lights().len(), 6);
}

#[test]
fn lights_off_means_black_surfaces() {
    let mut rng = seeded(8);
    let mut demo = LightsDemo::new(&mut rng);
    demo.handle_input(&InputEvent::Key(KeyAction::ToggleLight(5)), &mut rng);
    demo.update(frame(1.0, 0.016), &mut rng);
    let mut out = Vec::new();
    demo.write_instances(&mut out);
    assert!(out.iter().all(|i| i.color[..3] == [0.0, 0.0, 0.0]));

    demo.handle_input(&InputEvent::Key(KeyAction::ToggleLight(0)), &mut rng);
    demo.update(frame(1.1, 0.016), &mut rng);
    out.clear();
    demo.write_instances(&mut out);
    assert!(out.iter().all(|i| i.color[0] > 0.0));
}

#[test]
fn scroll_section_change_starts_a_spin_burst() {
    let mut rng = seeded(9);
    let mut demo = ScrollDemo::new(&mut rng);
    assert!(!demo.orbit_enabled());
    assert_eq!(demo.section(), 0);

    demo.handle_input(
        &InputEvent::Scroll {
            offset: 820.0,
            viewport_height: 800.0,
        },
        &mut rng,
    );
    assert_eq!(demo.section(), 1);
    assert!(demo.is_bursting(1));
    assert!(!demo.is_bursting(0));
    assert!(demo.is_shaking());

    let mut t = 0.0;
    while t < 2.0 {
        t += 0.1;
        demo.update(frame(t, 0.1), &mut rng);
    }
    assert!(!demo.is_bursting(1));
    assert!(!demo.is_shaking());
    assert!((demo.mesh_spin_z(1).unwrap() - SECTION_SPIN_TURN).abs() < 1e-5);
    assert_eq!(demo.mesh_spin_z(0), Some(0.0));
}

#[test]
fn scrolling_within_a_section_does_not_burst() {
    let mut rng = seeded(10);
    let mut demo = ScrollDemo::new(&mut rng);
    demo.handle_input(
        &InputEvent::Scroll {
            offset: 300.0,
            viewport_height: 800.0,
        },
        &mut rng,
    );
    assert_eq!(demo.section(), 0);
    assert!(!demo.is_bursting(0));
    assert!((demo.scroll_camera_y() + 1.5).abs() < 1e-5);
}

#[test]
fn scrolling_past_the_last_section_is_harmless() {
    let mut rng = seeded(11);
    let mut demo = ScrollDemo::new(&mut rng);
    demo.handle_input(
        &InputEvent::Scroll {
            offset: 8_000.0,
            viewport_height: 800.0,
        },
        &mut rng,
    );
    assert_eq!(demo.section(), 10);
    assert!((0..demo.section_count()).all(|i| !demo.is_bursting(i)));
    assert!(!demo.is_shaking());
}

#[test]
fn page_height_matches_scroll_sections() {
    let mut rng = seeded(13);
    assert_eq!(ScrollDemo::new(&mut rng).section_count(), SCROLL_SECTION_COUNT);
}

#[test]
fn cursor_parallax_eases_toward_the_pointer() {
    let mut rng = seeded(12);
    let mut demo = ScrollDemo::new(&mut rng);
    demo.handle_input(&InputEvent::Cursor { x: 0.5, y: -0.5 }, &mut rng);
    let mut t = 0.0;
    for _ in 0..240 {
        t += 1.0 / 60.0;
        demo.update(frame(t, 1.0 / 60.0), &mut rng);
    }
    let p = demo.parallax();
    assert!((p.x - 0.25).abs() < 1e-3);
    assert!((p.y - 0.25).abs() < 1e-3);
    let pose = demo.camera_pose();
    assert_eq!(pose.fov_degrees, SCROLL_FOV_DEG);
    assert!((pose.eye.z - SCROLL_CAMERA_Z).abs() < 1e-5);
}

#[test]
fn section_index_rounds_to_the_nearest_viewport() {
    assert_eq!(section_for(0.0, 800.0), 0);
    assert_eq!(section_for(399.0, 800.0), 0);
    assert_eq!(section_for(401.0, 800.0), 1);
    assert_eq!(section_for(1_600.0, 800.0), 2);
}
