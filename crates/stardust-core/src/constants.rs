use crate::params::SliderRange;
use glam::Vec3;

// Shared tuning constants used by both web and native frontends.

// Galaxy generation defaults
pub const GALAXY_COUNT: usize = 100_000;
pub const GALAXY_POINT_SIZE: f32 = 0.01;
pub const GALAXY_RADIUS: f32 = 5.0;
pub const GALAXY_BRANCHES: u32 = 6;
pub const GALAXY_SPIN: f32 = 1.0;
pub const GALAXY_RANDOMNESS: f32 = 0.2;
pub const GALAXY_RANDOMNESS_POWER: f32 = 2.2;
pub const GALAXY_INSIDE_HEX: u32 = 0xffff00;
pub const GALAXY_OUTSIDE_HEX: u32 = 0x0000ff;

// Galaxy animation defaults
pub const ROTATION_SPEED: f32 = 0.1; // radians per second of group yaw
pub const PULSE_SPEED: f32 = 0.5;
pub const PULSE_INTENSITY: f32 = 0.2;
pub const HUE_CYCLE_RATE: f32 = 0.1; // full hue turns per second
pub const OUTSIDE_HUE_OFFSET: f32 = 0.5;
pub const SPIN_DRIFT_RATE: f32 = 0.2;
pub const SPIN_DRIFT_AMPLITUDE: f32 = 0.5;

// Debug slider ranges (min, max, step)
pub const COUNT_RANGE: SliderRange = SliderRange::new(100.0, 1_000_000.0, 100.0);
pub const POINT_SIZE_RANGE: SliderRange = SliderRange::new(0.001, 0.1, 0.001);
pub const RADIUS_RANGE: SliderRange = SliderRange::new(0.01, 20.0, 0.01);
pub const BRANCHES_RANGE: SliderRange = SliderRange::new(2.0, 20.0, 1.0);
pub const SPIN_RANGE: SliderRange = SliderRange::new(-5.0, 5.0, 0.001);
pub const RANDOMNESS_RANGE: SliderRange = SliderRange::new(0.0, 2.0, 0.001);
pub const RANDOMNESS_POWER_RANGE: SliderRange = SliderRange::new(1.0, 10.0, 0.001);
pub const ROTATION_SPEED_RANGE: SliderRange = SliderRange::new(0.0, 1.0, 0.01);
pub const PULSE_SPEED_RANGE: SliderRange = SliderRange::new(0.0, 2.0, 0.01);
pub const PULSE_INTENSITY_RANGE: SliderRange = SliderRange::new(0.0, 1.0, 0.01);

// Ambient star shell
pub const AMBIENT_STAR_COUNT: usize = 5_000;
pub const AMBIENT_STAR_RADIUS: f32 = 50.0;
pub const AMBIENT_STAR_SIZE: f32 = 0.1;
pub const AMBIENT_STAR_ALPHA: f32 = 0.8;

// Shooting stars
pub const SHOOTING_STAR_INTERVAL_SEC: f32 = 2.0;
pub const SHOOTING_STAR_SPAWN_THRESHOLD: f32 = 0.7; // spawn when a draw exceeds this
pub const SHOOTING_STAR_SPAWN_RADIUS: f32 = 20.0;
pub const SHOOTING_STAR_AIM_JITTER: f32 = 10.0;
pub const SHOOTING_STAR_SPEED: f32 = 30.0;
pub const SHOOTING_STAR_ARRIVAL_RADIUS: f32 = 1.0;
pub const SHOOTING_STAR_TRAIL_POINTS: usize = 20;
pub const SHOOTING_STAR_TRAIL_SPACING: f32 = 0.1;

// Particle ripple demo
pub const RIPPLE_COUNT: usize = 5_000;
pub const RIPPLE_RADIUS: f32 = 10.0;
pub const RIPPLE_BRANCHES: u32 = 5;
pub const RIPPLE_SCATTER: f32 = 0.8;
pub const RIPPLE_SCATTER_POWER: f32 = 3.0;
pub const RIPPLE_POINT_SIZE: f32 = 0.2;
pub const RIPPLE_TIME_FREQ: f32 = 4.0;
pub const RIPPLE_DISTANCE_FREQ: f32 = 3.0;
pub const RIPPLE_AMPLITUDE: f32 = 0.5;

// Scroll demo layout
pub const SECTION_SPACING: f32 = 4.0;
pub const SCROLL_SECTION_COUNT: usize = 3;
pub const SCROLL_PARTICLE_COUNT: usize = 2_000;
pub const PARALLAX_STRENGTH: f32 = 0.5;
pub const PARALLAX_EASE_PER_SEC: f32 = 5.0;
pub const SECTION_SPIN_TURN: f32 = 1.5;
pub const SECTION_SPIN_SEC: f32 = 1.5;
pub const CAMERA_SHAKE_RANGE: f32 = 0.2;
pub const CAMERA_SHAKE_SEC: f32 = 0.5;

// Frame clock
pub const MAX_FRAME_DELTA_SEC: f32 = 0.25;

// Default camera placements (eye, fov in degrees)
pub const GALAXY_CAMERA_EYE: [f32; 3] = [3.0, 3.0, 3.0];
pub const RIPPLE_CAMERA_EYE: [f32; 3] = [0.0, 0.0, 3.0];
pub const HOUSE_CAMERA_EYE: [f32; 3] = [4.0, 2.0, 5.0];
pub const LIGHTS_CAMERA_EYE: [f32; 3] = [1.0, 1.0, 2.0];
pub const SCROLL_CAMERA_Z: f32 = 6.0;
pub const WIDE_FOV_DEG: f32 = 75.0;
pub const SCROLL_FOV_DEG: f32 = 35.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

#[inline]
pub fn vec3_of(v: [f32; 3]) -> Vec3 {
    Vec3::new(v[0], v[1], v[2])
}
