//! Surface samplers for rendering solid shapes as point sprites.
//!
//! Every sampler returns points in the shape's local frame, centred on the
//! origin, together with outward unit normals for lighting.

use crate::point_cloud::point_on_sphere;
use crate::random::UnitRandom;
use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfacePoint {
    pub position: Vec3,
    pub normal: Vec3,
}

pub fn sphere(radius: f32, count: usize, rng: &mut dyn UnitRandom) -> Vec<SurfacePoint> {
    (0..count)
        .map(|_| {
            let p = point_on_sphere(radius, rng);
            SurfacePoint {
                position: p,
                normal: p.normalize_or_zero(),
            }
        })
        .collect()
}

/// Axis-aligned box surface; faces are picked in proportion to their area.
pub fn cuboid(size: Vec3, count: usize, rng: &mut dyn UnitRandom) -> Vec<SurfacePoint> {
    let half = size * 0.5;
    let areas = [size.y * size.z, size.x * size.z, size.x * size.y];
    let total = 2.0 * (areas[0] + areas[1] + areas[2]);
    (0..count)
        .map(|_| {
            let mut pick = rng.next_unit() * total;
            let sign = rng.next_sign();
            let u = rng.next_centered();
            let v = rng.next_centered();
            let mut axis = 2;
            for (i, a) in areas.iter().enumerate() {
                if pick < 2.0 * a {
                    axis = i;
                    break;
                }
                pick -= 2.0 * a;
            }
            let (position, normal) = match axis {
                0 => (
                    Vec3::new(sign * half.x, u * size.y, v * size.z),
                    Vec3::X * sign,
                ),
                1 => (
                    Vec3::new(u * size.x, sign * half.y, v * size.z),
                    Vec3::Y * sign,
                ),
                _ => (
                    Vec3::new(u * size.x, v * size.y, sign * half.z),
                    Vec3::Z * sign,
                ),
            };
            SurfacePoint { position, normal }
        })
        .collect()
}

/// Torus around the Z axis (ring in the XY plane).
pub fn torus(
    ring_radius: f32,
    tube_radius: f32,
    count: usize,
    rng: &mut dyn UnitRandom,
) -> Vec<SurfacePoint> {
    (0..count)
        .map(|_| {
            let u = rng.next_unit() * TAU;
            let v = rng.next_unit() * TAU;
            let ring = Vec3::new(u.cos(), u.sin(), 0.0);
            let normal = ring * v.cos() + Vec3::Z * v.sin();
            SurfacePoint {
                position: ring * ring_radius + normal * tube_radius,
                normal,
            }
        })
        .collect()
}

/// Horizontal rectangle facing +Y.
pub fn plane(size: Vec2, count: usize, rng: &mut dyn UnitRandom) -> Vec<SurfacePoint> {
    (0..count)
        .map(|_| SurfacePoint {
            position: Vec3::new(rng.next_centered() * size.x, 0.0, rng.next_centered() * size.y),
            normal: Vec3::Y,
        })
        .collect()
}

/// Side surface of a cone with its base at y = 0 and apex at `height`.
pub fn cone(radius: f32, height: f32, count: usize, rng: &mut dyn UnitRandom) -> Vec<SurfacePoint> {
    let slant = (radius * radius + height * height).sqrt().max(f32::EPSILON);
    (0..count)
        .map(|_| {
            let a = rng.next_unit() * TAU;
            // sqrt keeps density even toward the wide base
            let t = rng.next_unit().sqrt();
            let (s, c) = a.sin_cos();
            let r = radius * t;
            SurfacePoint {
                position: Vec3::new(c * r, height * (1.0 - t), s * r),
                normal: Vec3::new(c * height / slant, radius / slant, s * height / slant),
            }
        })
        .collect()
}

/// Sprite size that roughly closes the gaps between `count` samples spread
/// over `area`.
pub fn splat_size(area: f32, count: usize) -> f32 {
    (area / count.max(1) as f32).sqrt() * 2.0
}
