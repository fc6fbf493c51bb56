//! Closed-form per-frame updates.
//!
//! Each function recomputes one scalar per point (height, color or angle)
//! from elapsed time and the point's own data; there is no cross-point state.

use crate::color::Rgb;
use crate::constants::*;
use crate::point_cloud::PointCloud;

/// Uniform group scale: `1 + sin(t * speed) * intensity`.
#[inline]
pub fn pulse_scale(elapsed: f32, speed: f32, intensity: f32) -> f32 {
    1.0 + (elapsed * speed).sin() * intensity
}

/// Advance a group yaw by `delta * speed`, wrapped to one turn.
#[inline]
pub fn drift_rotation(current: f32, delta: f32, speed: f32) -> f32 {
    (current + delta * speed).rem_euclid(std::f32::consts::TAU)
}

/// Hue offset in turns for the color-cycling effect.
#[inline]
pub fn hue_offset(elapsed: f32) -> f32 {
    (elapsed * HUE_CYCLE_RATE).rem_euclid(1.0)
}

/// Gradient endpoints with their hues rotated; the outer color runs half a
/// turn ahead of the inner one.
pub fn cycled_gradient(inside: Rgb, outside: Rgb, elapsed: f32) -> (Rgb, Rgb) {
    let hue = hue_offset(elapsed);
    (
        inside.shift_hue(hue),
        outside.shift_hue(hue + OUTSIDE_HUE_OFFSET),
    )
}

/// Recolor every point by its seeded radius fraction.
pub fn apply_radial_gradient(cloud: &mut PointCloud, inside: Rgb, outside: Rgb, radius: f32) {
    let inv = if radius > 0.0 { 1.0 / radius } else { 0.0 };
    let (colors, radii) = cloud.colors_mut_with_radii();
    for (c, r) in colors.iter_mut().zip(radii) {
        *c = inside.lerp(outside, r * inv);
    }
}

/// Angular velocity factor of the spin drift at time `t`.
#[inline]
pub fn spin_variation(elapsed: f32) -> f32 {
    (elapsed * SPIN_DRIFT_RATE).sin() * SPIN_DRIFT_AMPLITUDE
}

/// Rotate every point in the XZ plane by an angle proportional to its
/// distance from the axis, so outer points wind faster.
pub fn apply_spin_drift(cloud: &mut PointCloud, radius: f32, elapsed: f32, delta: f32) {
    let variation = spin_variation(elapsed);
    let inv = if radius > 0.0 { 1.0 / radius } else { 0.0 };
    for p in cloud.positions_mut() {
        let distance = (p.x * p.x + p.z * p.z).sqrt();
        let angle = variation * distance * inv * delta;
        let (s, c) = angle.sin_cos();
        let (x, z) = (p.x, p.z);
        p.x = x * c - z * s;
        p.z = x * s + z * c;
    }
}

/// Height of an outward-travelling ripple at XZ distance `d`.
#[inline]
pub fn ripple_height(distance: f32, elapsed: f32) -> f32 {
    (elapsed * RIPPLE_TIME_FREQ - distance * RIPPLE_DISTANCE_FREQ).sin() * RIPPLE_AMPLITUDE
}

pub fn apply_ripple(cloud: &mut PointCloud, elapsed: f32) {
    for p in cloud.positions_mut() {
        let d = (p.x * p.x + p.z * p.z).sqrt();
        p.y = ripple_height(d, elapsed);
    }
}

/// Easing curves for one-shot tweens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// `1 - (1 - t)^4`
    Power3Out,
    /// `1 - (1 - t)^5`
    Power4Out,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::Power4Out => 1.0 - (1.0 - t).powi(5),
        }
    }
}

/// Scalar tween from `from` to `to` over `duration` seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub ease: Ease,
    age: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration,
            ease,
            age: 0.0,
        }
    }

    /// Advance by `delta` seconds and return the current value.
    pub fn step(&mut self, delta: f32) -> f32 {
        self.age = (self.age + delta).min(self.duration);
        self.value()
    }

    pub fn value(&self) -> f32 {
        let t = if self.duration > 0.0 {
            self.age / self.duration
        } else {
            1.0
        };
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    pub fn finished(&self) -> bool {
        self.age >= self.duration
    }
}

/// Exponential approach of `current` toward `target` at `rate` per second.
#[inline]
pub fn ease_toward(current: f32, target: f32, rate: f32, delta: f32) -> f32 {
    current + (target - current) * (rate * delta).min(1.0)
}
