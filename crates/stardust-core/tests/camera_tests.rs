use glam::Vec3;
use stardust_core::*;

fn galaxy_pose() -> CameraPose {
    CameraPose {
        eye: Vec3::new(3.0, 3.0, 3.0),
        target: Vec3::ZERO,
        fov_degrees: 75.0,
    }
}

#[test]
fn orbit_rig_reproduces_the_initial_eye() {
    let pose = galaxy_pose();
    let rig = OrbitRig::from_pose(&pose);
    assert!((rig.eye() - pose.eye).length() < 1e-4);
    assert!((rig.distance - 27f32.sqrt()).abs() < 1e-5);
    assert!(rig.is_settled());
}

#[test]
fn orbit_damping_converges() {
    let mut rig = OrbitRig::from_pose(&galaxy_pose());
    let start_yaw = rig.yaw;
    rig.rotate_by_pixels(100.0, 0.0, 800.0);
    let total = -std::f32::consts::TAU * 100.0 / 800.0;

    let mut last_step = f32::MAX;
    let mut prev = rig.yaw;
    for _ in 0..400 {
        rig.update();
        let step = (rig.yaw - prev).abs();
        assert!(step <= last_step + 1e-7);
        last_step = step;
        prev = rig.yaw;
    }
    assert!(rig.is_settled());
    assert!((rig.yaw - start_yaw - total).abs() < 1e-3);
}

#[test]
fn pitch_is_clamped_away_from_the_poles() {
    let mut rig = OrbitRig::from_pose(&galaxy_pose());
    rig.rotate_by_pixels(0.0, -10_000.0, 100.0);
    for _ in 0..400 {
        rig.update();
    }
    assert!(rig.pitch > 0.0 && rig.pitch < std::f32::consts::PI);
    assert!(rig.eye().is_finite());
}

#[test]
fn zoom_moves_closer_within_limits() {
    let mut rig = OrbitRig::from_pose(&galaxy_pose());
    let d0 = rig.distance;
    rig.zoom(3.0);
    for _ in 0..400 {
        rig.update();
    }
    assert!(rig.distance < d0);
    rig.zoom(-10_000.0);
    for _ in 0..400 {
        rig.update();
    }
    assert!(rig.distance <= 60.0);
}

#[test]
fn view_projection_maps_the_target_to_screen_centre() {
    let cam = Camera::from_pose(&galaxy_pose(), 16.0 / 9.0);
    let clip = cam.view_proj() * Vec3::ZERO.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}
