use crate::animation::{ease_toward, Ease, Tween};
use crate::camera::CameraPose;
use crate::clock::FrameTime;
use crate::color::Rgb;
use crate::constants::*;
use crate::demos::DemoKind;
use crate::point_cloud::{generate_slab, PointCloud};
use crate::random::UnitRandom;
use crate::scene::{BlendMode, Demo, InputEvent, PointInstance};
use crate::shapes::{self, splat_size, SurfacePoint};
use glam::{EulerRot, Quat, Vec3};
use std::f32::consts::PI;

const MATERIAL_HEX: u32 = 0xffd500;
const BACKGROUND_HEX: u32 = 0x1e1a20;
const PARTICLE_SIZE: f32 = 0.03;
const PARTICLE_ALPHA: f32 = 0.8;
const PARTICLE_DRIFT_PER_SEC: f32 = 0.12;
const BOB_PER_SEC: f32 = 0.3;
const SCALE_WOBBLE: f32 = 0.05;
const SPIN_X_PER_SEC: f32 = 0.1;
const SPIN_Y_PER_SEC: f32 = 0.12;
const MESH_SAMPLES: usize = 3_500;
const KEY_LIGHT: Vec3 = Vec3::new(2.0, 3.0, 4.0);

/// Section index for a scroll offset: the nearest whole viewport.
pub fn section_for(scroll_offset: f32, viewport_height: f32) -> i32 {
    (scroll_offset / viewport_height.max(1.0)).round() as i32
}

struct SectionMesh {
    points: Vec<SurfacePoint>,
    size: f32,
    base: Vec3,
    bob: f32,
    scale: f32,
    spin_x: f32,
    spin_y: f32,
    spin_z: f32,
    burst: Option<Tween>,
}

impl SectionMesh {
    fn new(points: Vec<SurfacePoint>, size: f32, base: Vec3) -> Self {
        Self {
            points,
            size,
            base,
            bob: 0.0,
            scale: 1.0,
            spin_x: 0.0,
            spin_y: 0.0,
            spin_z: 0.0,
            burst: None,
        }
    }

    fn update(&mut self, elapsed: f32, delta: f32) {
        let wave = (elapsed + self.base.x).sin();
        self.spin_x += delta * SPIN_X_PER_SEC;
        self.spin_y += delta * SPIN_Y_PER_SEC;
        self.bob += wave * BOB_PER_SEC * delta;
        self.scale = 1.0 + wave * SCALE_WOBBLE;
        if let Some(tween) = self.burst.as_mut() {
            self.spin_z = tween.step(delta);
            if tween.finished() {
                self.burst = None;
            }
        }
    }

    fn start_burst(&mut self) {
        self.burst = Some(Tween::new(
            self.spin_z,
            self.spin_z + SECTION_SPIN_TURN,
            SECTION_SPIN_SEC,
            Ease::Power4Out,
        ));
    }

    fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.spin_x, self.spin_y, self.spin_z)
    }

    fn position(&self) -> Vec3 {
        self.base + Vec3::Y * self.bob
    }
}

/// Three stacked objects revealed by scrolling, with cursor parallax and a
/// spin burst each time a new section comes into view.
pub struct ScrollDemo {
    meshes: Vec<SectionMesh>,
    particles: PointCloud,
    /// Per-particle phase so neighbours drift out of step.
    phases: Vec<f32>,
    scroll_offset: f32,
    viewport_height: f32,
    section: i32,
    cursor: (f32, f32),
    parallax: Vec3,
    shake: Vec3,
    shake_tweens: Option<[Tween; 3]>,
    lit: Vec<PointInstance>,
}

impl ScrollDemo {
    pub fn new(rng: &mut dyn UnitRandom) -> Self {
        let torus_area = 4.0 * PI * PI * 1.0 * 0.4;
        let sphere_area = 4.0 * PI;
        let cube = 1.6;
        let meshes = vec![
            SectionMesh::new(
                shapes::torus(1.0, 0.4, MESH_SAMPLES, rng),
                splat_size(torus_area, MESH_SAMPLES),
                Vec3::new(2.0, 0.0, 0.0),
            ),
            SectionMesh::new(
                shapes::sphere(1.0, MESH_SAMPLES, rng),
                splat_size(sphere_area, MESH_SAMPLES),
                Vec3::new(-2.0, -SECTION_SPACING, 0.0),
            ),
            SectionMesh::new(
                shapes::cuboid(Vec3::splat(cube), MESH_SAMPLES, rng),
                splat_size(6.0 * cube * cube, MESH_SAMPLES),
                Vec3::new(2.0, -SECTION_SPACING * 2.0, 0.0),
            ),
        ];
        let particles = generate_slab(
            SCROLL_PARTICLE_COUNT,
            5.0,
            SECTION_SPACING * 0.5,
            SECTION_SPACING * SCROLL_SECTION_COUNT as f32,
            Rgb::WHITE,
            rng,
        );
        let phases = (0..particles.len()).map(|i| i as f32).collect();
        let mut demo = Self {
            meshes,
            particles,
            phases,
            scroll_offset: 0.0,
            viewport_height: 1.0,
            section: 0,
            cursor: (0.0, 0.0),
            parallax: Vec3::ZERO,
            shake: Vec3::ZERO,
            shake_tweens: None,
            lit: Vec::new(),
        };
        demo.relight();
        demo
    }

    pub fn section(&self) -> i32 {
        self.section
    }

    pub fn section_count(&self) -> usize {
        self.meshes.len()
    }

    /// Current z spin of section `i`, if it exists.
    pub fn mesh_spin_z(&self, i: usize) -> Option<f32> {
        self.meshes.get(i).map(|m| m.spin_z)
    }

    pub fn is_bursting(&self, i: usize) -> bool {
        self.meshes.get(i).is_some_and(|m| m.burst.is_some())
    }

    pub fn is_shaking(&self) -> bool {
        self.shake_tweens.is_some()
    }

    pub fn parallax(&self) -> Vec3 {
        self.parallax
    }

    pub fn particles(&self) -> &PointCloud {
        &self.particles
    }

    /// Camera height before parallax and shake.
    pub fn scroll_camera_y(&self) -> f32 {
        -self.scroll_offset / self.viewport_height.max(1.0) * SECTION_SPACING
    }

    fn on_scroll(&mut self, offset: f32, viewport_height: f32, rng: &mut dyn UnitRandom) {
        self.scroll_offset = offset;
        self.viewport_height = viewport_height.max(1.0);
        let next = section_for(offset, self.viewport_height);
        if next == self.section {
            return;
        }
        self.section = next;
        let Some(mesh) = usize::try_from(next)
            .ok()
            .and_then(|i| self.meshes.get_mut(i))
        else {
            return;
        };
        mesh.start_burst();
        let target = Vec3::new(
            rng.next_centered() * CAMERA_SHAKE_RANGE,
            rng.next_centered() * CAMERA_SHAKE_RANGE,
            rng.next_centered() * CAMERA_SHAKE_RANGE,
        );
        let tween = |from: f32, to: f32| Tween::new(from, to, CAMERA_SHAKE_SEC, Ease::Power3Out);
        self.shake_tweens = Some([
            tween(self.shake.x, target.x),
            tween(self.shake.y, target.y),
            tween(self.shake.z, target.z),
        ]);
        log::debug!("scroll section {}", next);
    }

    /// Three-band toon shading under a fixed key light plus ambient.
    fn relight(&mut self) {
        let material = Rgb::from_hex(MATERIAL_HEX);
        self.lit.clear();
        for mesh in &self.meshes {
            let rot = mesh.rotation();
            let at = mesh.position();
            let size = mesh.size * mesh.scale;
            for p in &mesh.points {
                let world = at + rot * (p.position * mesh.scale);
                let n = rot * p.normal;
                let l = (KEY_LIGHT - world).normalize_or_zero();
                let band = toon_band(n.dot(l));
                self.lit
                    .push(PointInstance::new(world, size, material.scale(band).with_alpha(1.0)));
            }
        }
    }
}

fn toon_band(lambert: f32) -> f32 {
    if lambert > 0.6 {
        1.0
    } else if lambert > 0.2 {
        0.7
    } else {
        0.4
    }
}

impl Demo for ScrollDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Scroll
    }

    fn camera_pose(&self) -> CameraPose {
        let group = self.parallax + self.shake;
        let eye = group + Vec3::new(0.0, self.scroll_camera_y(), SCROLL_CAMERA_Z);
        CameraPose {
            eye,
            target: eye - Vec3::Z * SCROLL_CAMERA_Z,
            fov_degrees: SCROLL_FOV_DEG,
        }
    }

    fn orbit_enabled(&self) -> bool {
        false
    }

    fn update(&mut self, time: FrameTime, _rng: &mut dyn UnitRandom) {
        let FrameTime { elapsed, delta } = time;

        let (cx, cy) = self.cursor;
        let target_x = cx * PARALLAX_STRENGTH;
        let target_y = -cy * PARALLAX_STRENGTH;
        self.parallax.x = ease_toward(self.parallax.x, target_x, PARALLAX_EASE_PER_SEC, delta);
        self.parallax.y = ease_toward(self.parallax.y, target_y, PARALLAX_EASE_PER_SEC, delta);

        if let Some(tweens) = self.shake_tweens.as_mut() {
            self.shake = Vec3::new(
                tweens[0].step(delta),
                tweens[1].step(delta),
                tweens[2].step(delta),
            );
            if tweens.iter().all(Tween::finished) {
                self.shake_tweens = None;
            }
        }

        for mesh in &mut self.meshes {
            mesh.update(elapsed, delta);
        }

        for (p, phase) in self.particles.positions_mut().iter_mut().zip(&self.phases) {
            p.y += (elapsed + phase).sin() * PARTICLE_DRIFT_PER_SEC * delta;
        }

        self.relight();
    }

    fn handle_input(&mut self, event: &InputEvent, rng: &mut dyn UnitRandom) {
        match *event {
            InputEvent::Scroll {
                offset,
                viewport_height,
            } => self.on_scroll(offset, viewport_height, rng),
            InputEvent::Resize { height, .. } => self.viewport_height = height.max(1.0),
            InputEvent::Cursor { x, y } => self.cursor = (x, y),
            InputEvent::Key(_) => {}
        }
    }

    fn write_instances(&self, out: &mut Vec<PointInstance>) {
        out.extend_from_slice(&self.lit);
        let dust = Rgb::WHITE.with_alpha(PARTICLE_ALPHA);
        out.extend(
            self.particles
                .positions()
                .iter()
                .map(|p| PointInstance::new(*p, PARTICLE_SIZE, dust)),
        );
    }

    fn clear_color(&self) -> Rgb {
        Rgb::from_hex(BACKGROUND_HEX)
    }

    fn blend_mode(&self) -> BlendMode {
        BlendMode::Opaque
    }

    fn hint(&self) -> &'static str {
        "scroll to move between sections · move the pointer for parallax · space pause"
    }
}
