use glam::{Vec2, Vec3};
use stardust_core::demos::showcase_lights;
use stardust_core::lighting::*;
use stardust_core::shapes::*;
use stardust_core::*;
use std::f32::consts::PI;

#[test]
fn sphere_samples_have_outward_normals() {
    let pts = sphere(2.0, 300, &mut seeded(1));
    assert_eq!(pts.len(), 300);
    for p in pts {
        assert!((p.position.length() - 2.0).abs() < 1e-4);
        assert!((p.normal - p.position / 2.0).length() < 1e-4);
    }
}

#[test]
fn cuboid_samples_lie_on_faces() {
    let size = Vec3::new(4.0, 2.5, 4.0);
    for p in cuboid(size, 500, &mut seeded(2)) {
        let h = size * 0.5;
        let on_face = (p.position.x.abs() - h.x).abs() < 1e-5
            || (p.position.y.abs() - h.y).abs() < 1e-5
            || (p.position.z.abs() - h.z).abs() < 1e-5;
        assert!(on_face, "{:?} not on a face", p.position);
        assert!((p.normal.length() - 1.0).abs() < 1e-6);
        assert!(p.position.dot(p.normal) > 0.0);
    }
}

#[test]
fn torus_samples_sit_on_the_tube() {
    for p in torus(1.0, 0.4, 400, &mut seeded(3)) {
        let ring = Vec2::new(p.position.x, p.position.y).length();
        let tube = Vec2::new(ring - 1.0, p.position.z).length();
        assert!((tube - 0.4).abs() < 1e-4);
    }
}

#[test]
fn cone_samples_stay_under_the_apex() {
    for p in cone(3.5, 1.5, 400, &mut seeded(4)) {
        assert!(p.position.y >= -1e-6 && p.position.y <= 1.5 + 1e-6);
        let r = Vec2::new(p.position.x, p.position.z).length();
        let allowed = 3.5 * (1.0 - p.position.y / 1.5);
        assert!((r - allowed).abs() < 1e-3);
        assert!(p.normal.y > 0.0);
    }
}

#[test]
fn plane_faces_up() {
    for p in plane(Vec2::new(5.0, 5.0), 100, &mut seeded(5)) {
        assert_eq!(p.position.y, 0.0);
        assert_eq!(p.normal, Vec3::Y);
        assert!(p.position.x.abs() <= 2.5 && p.position.z.abs() <= 2.5);
    }
}

#[test]
fn distance_falloff_follows_decay_and_cutoff() {
    assert!((distance_falloff(2.0, 0.0, 2.0) - 0.25).abs() < 1e-6);
    assert!((distance_falloff(2.0, 0.0, 1.0) - 0.5).abs() < 1e-6);
    assert_eq!(distance_falloff(10.0, 10.0, 1.0), 0.0);
    assert_eq!(distance_falloff(12.0, 10.0, 1.0), 0.0);
}

#[test]
fn spot_cone_is_full_inside_and_dark_outside() {
    let angle = PI * 0.1;
    assert_eq!(spot_falloff(1.0, angle, 0.25), 1.0);
    assert_eq!(spot_falloff((angle * 1.2).cos(), angle, 0.25), 0.0);
    let edge = spot_falloff((angle * 0.9).cos(), angle, 0.25);
    assert!(edge > 0.0 && edge < 1.0);
}

#[test]
fn lambert_ignores_back_faces_and_disabled_lights() {
    let sun = Light::new(
        "sun",
        Rgb::WHITE,
        PI,
        LightKind::Directional {
            position: Vec3::Y * 5.0,
        },
    );
    let lit = shade(Rgb::WHITE, Vec3::ZERO, Vec3::Y, &[sun]);
    assert!((lit.r - 1.0).abs() < 1e-5);
    let back = shade(Rgb::WHITE, Vec3::ZERO, -Vec3::Y, &[sun]);
    assert_eq!(back, Rgb::BLACK);
    let off = shade(Rgb::WHITE, Vec3::ZERO, Vec3::Y, &[sun.disabled()]);
    assert_eq!(off, Rgb::BLACK);
}

#[test]
fn hemisphere_blends_sky_and_ground() {
    let hemi = Light::new(
        "hemi",
        Rgb::from_hex(0xff0000),
        1.0,
        LightKind::Hemisphere {
            ground: Rgb::from_hex(0x0000ff),
        },
    );
    let up = hemi.irradiance(Vec3::ZERO, Vec3::Y);
    let down = hemi.irradiance(Vec3::ZERO, -Vec3::Y);
    assert_eq!(up, Rgb::new(1.0, 0.0, 0.0));
    assert_eq!(down, Rgb::new(0.0, 0.0, 1.0));
}

#[test]
fn spot_lights_the_floor_under_its_axis_only() {
    let lights = showcase_lights();
    let spot = lights[5];
    let centre = spot.irradiance(Vec3::ZERO, Vec3::new(0.0, 0.6, 0.8));
    let aside = spot.irradiance(Vec3::new(3.0, 0.0, 0.0), Vec3::Y);
    assert!(centre.g > 0.0);
    assert_eq!(aside, Rgb::BLACK);
}

#[test]
fn lit_points_follow_surface_placement() {
    let surface = Surface::new(plane(Vec2::splat(1.0), 10, &mut seeded(6)), Rgb::WHITE, 0.1)
        .at(Vec3::new(0.0, -0.65, 0.0));
    let mut lit = LitPoints::new();
    lit.push_surface(&surface);
    assert_eq!(lit.len(), 10);
    assert!(lit
        .instances()
        .iter()
        .all(|i| (i.position[1] + 0.65).abs() < 1e-6 && i.size == 0.1));

    let ambient = Light::new("amb", Rgb::WHITE, PI, LightKind::Ambient);
    lit.relight(&[ambient]);
    assert!(lit.instances().iter().all(|i| (i.color[0] - 1.0).abs() < 1e-5));
}

#[test]
fn splat_size_shrinks_with_density() {
    assert!(splat_size(1.0, 100) > splat_size(1.0, 400));
    assert!((splat_size(1.0, 100) / splat_size(1.0, 400) - 2.0).abs() < 1e-5);
}
