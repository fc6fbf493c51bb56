//! Procedural point-cloud generation.
//!
//! A `PointCloud` is rebuilt from scratch whenever its parameters change;
//! per-frame animation only rewrites elements in place.

use crate::color::Rgb;
use crate::params::{GenerationParams, Scatter};
use crate::random::UnitRandom;
use glam::Vec3;
use std::f32::consts::TAU;

/// Parallel position / color / radius buffers of equal length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointCloud {
    positions: Vec<Vec3>,
    colors: Vec<Rgb>,
    radii: Vec<f32>,
}

impl PointCloud {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            positions: Vec::with_capacity(n),
            colors: Vec::with_capacity(n),
            radii: Vec::with_capacity(n),
        }
    }

    /// Single-color cloud; radii are distances from the origin.
    pub fn uniform(positions: Vec<Vec3>, color: Rgb) -> Self {
        let radii = positions.iter().map(|p| p.length()).collect();
        let colors = vec![color; positions.len()];
        Self {
            positions,
            colors,
            radii,
        }
    }

    pub fn push(&mut self, position: Vec3, color: Rgb, radius: f32) {
        self.positions.push(position);
        self.colors.push(color);
        self.radii.push(radius);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Radial distance each point was seeded at.
    pub fn radii(&self) -> &[f32] {
        &self.radii
    }

    pub fn positions_mut(&mut self) -> &mut [Vec3] {
        &mut self.positions
    }

    /// Colors for rewriting alongside the radii they are derived from.
    pub fn colors_mut_with_radii(&mut self) -> (&mut [Rgb], &[f32]) {
        (&mut self.colors, &self.radii)
    }

    /// Positions and colors as flat `xyz` / `rgb` arrays, the layout GPU
    /// vertex buffers and typed arrays expect.
    pub fn to_flat_buffers(&self) -> (Vec<f32>, Vec<f32>) {
        let mut pos = Vec::with_capacity(self.len() * 3);
        let mut col = Vec::with_capacity(self.len() * 3);
        for (p, c) in self.positions.iter().zip(&self.colors) {
            pos.extend_from_slice(&p.to_array());
            col.extend_from_slice(&c.to_array());
        }
        (pos, col)
    }
}

/// Angle of the branch that point `index` is assigned to, round-robin.
#[inline]
pub fn branch_angle(index: usize, branches: u32) -> f32 {
    let b = branches as usize;
    (index % b) as f32 / b as f32 * TAU
}

/// Signed perturbation whose magnitude clusters near zero as `power` grows.
#[inline]
fn scatter_axis(rng: &mut dyn UnitRandom, power: f32, amplitude: f32) -> f32 {
    let sign = rng.next_sign();
    rng.next_unit().powf(power) * sign * amplitude
}

/// Place `count` points along evenly spaced spiral arms with a radial color
/// gradient from `inside_color` (centre) to `outside_color` (rim).
///
/// Draw order per point: radius, then sign and magnitude for x, y and z.
/// Parameters are not validated; `branches` must be at least 1.
pub fn generate_spiral(params: &GenerationParams, rng: &mut dyn UnitRandom) -> PointCloud {
    debug_assert!(params.branches >= 1, "spiral needs at least one branch");
    let mut cloud = PointCloud::with_capacity(params.count);
    for i in 0..params.count {
        let r = rng.next_unit() * params.radius;
        let theta = branch_angle(i, params.branches);
        let spin_angle = r * params.spin;

        let amplitude = match params.scatter {
            Scatter::Proportional => params.randomness * r,
            Scatter::Fixed => params.randomness,
        };
        let px = scatter_axis(rng, params.randomness_power, amplitude);
        let py = scatter_axis(rng, params.randomness_power, amplitude);
        let pz = scatter_axis(rng, params.randomness_power, amplitude);

        let angle = theta + spin_angle;
        let position = Vec3::new(angle.cos() * r + px, py, angle.sin() * r + pz);
        let color = params
            .inside_color
            .lerp(params.outside_color, r / params.radius);
        cloud.push(position, color, r);
    }
    cloud
}

/// Points uniformly distributed on a sphere shell.
pub fn generate_sphere_shell(
    count: usize,
    radius: f32,
    color: Rgb,
    rng: &mut dyn UnitRandom,
) -> PointCloud {
    let positions = (0..count)
        .map(|_| point_on_sphere(radius, rng))
        .collect::<Vec<_>>();
    PointCloud::uniform(positions, color)
}

/// Uniform point on a sphere of `radius` (area-preserving in `phi`).
pub fn point_on_sphere(radius: f32, rng: &mut dyn UnitRandom) -> Vec3 {
    let theta = rng.next_unit() * TAU;
    let phi = (2.0 * rng.next_unit() - 1.0).acos();
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

/// Box of points: x and z within `±half_width`, y within `[top - depth, top]`.
pub fn generate_slab(
    count: usize,
    half_width: f32,
    top: f32,
    depth: f32,
    color: Rgb,
    rng: &mut dyn UnitRandom,
) -> PointCloud {
    let positions = (0..count)
        .map(|_| {
            let x = rng.next_centered() * 2.0 * half_width;
            let y = top - rng.next_unit() * depth;
            let z = rng.next_centered() * 2.0 * half_width;
            Vec3::new(x, y, z)
        })
        .collect::<Vec<_>>();
    PointCloud::uniform(positions, color)
}
