//! CPU Lambert shading for surfaces rendered as point sprites.
//!
//! Attenuation follows the usual physically based punctual-light model:
//! inverse power falloff with a smooth window when a cutoff distance is set,
//! and a smoothstep cone for spot lights. Diffuse response is `albedo / pi`.

use crate::color::Rgb;
use crate::scene::PointInstance;
use crate::shapes::SurfacePoint;
use glam::{Quat, Vec3};
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightKind {
    Ambient,
    /// Shines from `position` toward the origin.
    Directional { position: Vec3 },
    /// Sky color is the light color; normals facing down see `ground`.
    Hemisphere { ground: Rgb },
    Point { position: Vec3, distance: f32, decay: f32 },
    /// Shaded as a one-sided emitter of the given area facing the origin.
    RectArea { position: Vec3, area: f32 },
    Spot {
        position: Vec3,
        target: Vec3,
        distance: f32,
        angle: f32,
        penumbra: f32,
        decay: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub name: &'static str,
    pub color: Rgb,
    pub intensity: f32,
    pub kind: LightKind,
    pub enabled: bool,
}

impl Light {
    pub fn new(name: &'static str, color: Rgb, intensity: f32, kind: LightKind) -> Self {
        Self {
            name,
            color,
            intensity,
            kind,
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Incoming light at a surface point, before the diffuse BRDF.
    pub fn irradiance(&self, position: Vec3, normal: Vec3) -> Rgb {
        if !self.enabled {
            return Rgb::BLACK;
        }
        let radiance = self.color.scale(self.intensity);
        match self.kind {
            LightKind::Ambient => radiance,
            LightKind::Directional { position: from } => {
                let l = from.normalize_or_zero();
                radiance.scale(normal.dot(l).max(0.0))
            }
            LightKind::Hemisphere { ground } => {
                let w = 0.5 * normal.y + 0.5;
                ground.lerp(self.color, w).scale(self.intensity)
            }
            LightKind::Point {
                position: from,
                distance,
                decay,
            } => {
                let to_light = from - position;
                let d = to_light.length();
                let l = to_light / d.max(f32::EPSILON);
                radiance.scale(normal.dot(l).max(0.0) * distance_falloff(d, distance, decay))
            }
            LightKind::RectArea { position: from, area } => {
                let to_light = from - position;
                let d = to_light.length().max(f32::EPSILON);
                let l = to_light / d;
                let facing = (-from).normalize_or_zero();
                let emit = (-l).dot(facing).max(0.0);
                radiance.scale(normal.dot(l).max(0.0) * emit * area / (d * d).max(0.01))
            }
            LightKind::Spot {
                position: from,
                target,
                distance,
                angle,
                penumbra,
                decay,
            } => {
                let to_light = from - position;
                let d = to_light.length();
                let l = to_light / d.max(f32::EPSILON);
                let axis = (target - from).normalize_or_zero();
                let cone = spot_falloff((-l).dot(axis), angle, penumbra);
                radiance
                    .scale(normal.dot(l).max(0.0) * cone * distance_falloff(d, distance, decay))
            }
        }
    }
}

/// `1 / d^decay`, windowed to zero at `cutoff` when `cutoff > 0`.
pub fn distance_falloff(d: f32, cutoff: f32, decay: f32) -> f32 {
    let mut falloff = 1.0 / d.powf(decay).max(0.01);
    if cutoff > 0.0 {
        let window = (1.0 - (d / cutoff).powi(4)).clamp(0.0, 1.0);
        falloff *= window * window;
    }
    falloff
}

/// Smooth cone edge: full inside `angle * (1 - penumbra)`, zero past `angle`.
pub fn spot_falloff(cos_to_axis: f32, angle: f32, penumbra: f32) -> f32 {
    let outer = angle.cos();
    let inner = (angle * (1.0 - penumbra)).cos();
    smoothstep(outer, inner, cos_to_axis)
}

fn smoothstep(e0: f32, e1: f32, x: f32) -> f32 {
    if e1 <= e0 {
        return if x >= e0 { 1.0 } else { 0.0 };
    }
    let t = ((x - e0) / (e1 - e0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Diffuse color of a surface point under all enabled lights.
pub fn shade(albedo: Rgb, position: Vec3, normal: Vec3, lights: &[Light]) -> Rgb {
    let total = lights
        .iter()
        .fold(Rgb::BLACK, |acc, l| acc.add(l.irradiance(position, normal)));
    albedo.mul(total).scale(1.0 / PI)
}

/// Surface sample set with one material color and a rigid placement.
#[derive(Clone, Debug)]
pub struct Surface {
    pub points: Vec<SurfacePoint>,
    pub albedo: Rgb,
    pub size: f32,
    pub offset: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl Surface {
    pub fn new(points: Vec<SurfacePoint>, albedo: Rgb, size: f32) -> Self {
        Self {
            points,
            albedo,
            size,
            offset: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }

    pub fn at(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    pub fn rotated(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// World position and normal of every sample.
    pub fn world_points(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.points.iter().map(move |p| {
            (
                self.offset + self.rotation * (p.position * self.scale),
                self.rotation * p.normal,
            )
        })
    }
}

/// Lit sprites built from surfaces: instance positions and sizes are fixed
/// when pushed, colors are recomputed by `relight`.
#[derive(Clone, Debug, Default)]
pub struct LitPoints {
    instances: Vec<PointInstance>,
    normals: Vec<Vec3>,
    albedo: Vec<Rgb>,
}

impl LitPoints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.normals.clear();
        self.albedo.clear();
    }

    pub fn push_surface(&mut self, surface: &Surface) {
        let size = surface.size * surface.scale;
        for (position, normal) in surface.world_points() {
            self.instances
                .push(PointInstance::new(position, size, [0.0, 0.0, 0.0, 1.0]));
            self.normals.push(normal);
            self.albedo.push(surface.albedo);
        }
    }

    pub fn relight(&mut self, lights: &[Light]) {
        for ((inst, n), albedo) in self
            .instances
            .iter_mut()
            .zip(&self.normals)
            .zip(&self.albedo)
        {
            let c = shade(*albedo, Vec3::from_array(inst.position), *n, lights);
            inst.color = c.with_alpha(1.0);
        }
    }

    pub fn instances(&self) -> &[PointInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
