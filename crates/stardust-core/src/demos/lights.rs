use crate::camera::CameraPose;
use crate::clock::FrameTime;
use crate::color::Rgb;
use crate::constants::*;
use crate::demos::DemoKind;
use crate::lighting::{Light, LightKind, LitPoints, Surface};
use crate::random::UnitRandom;
use crate::scene::{BlendMode, Demo, InputEvent, KeyAction, PointInstance};
use crate::shapes::{self, splat_size};
use glam::{EulerRot, Quat, Vec2, Vec3};
use std::f32::consts::PI;

const SPIN_X: f32 = 0.15;
const SPIN_Y: f32 = 0.1;
const OBJECT_SAMPLES: usize = 3_000;
const PLANE_SAMPLES: usize = 10_000;

/// The six light types in toggle order. Only the spot starts enabled.
pub fn showcase_lights() -> Vec<Light> {
    vec![
        Light::new("ambient", Rgb::WHITE, 1.5, LightKind::Ambient).disabled(),
        Light::new(
            "directional",
            Rgb::from_hex(0x00fffc),
            0.9,
            LightKind::Directional {
                position: Vec3::new(1.0, 0.25, 0.0),
            },
        )
        .disabled(),
        Light::new(
            "hemisphere",
            Rgb::from_hex(0xff0000),
            0.9,
            LightKind::Hemisphere {
                ground: Rgb::from_hex(0x0000ff),
            },
        )
        .disabled(),
        Light::new(
            "point",
            Rgb::from_hex(0xff9000),
            1.5,
            LightKind::Point {
                position: Vec3::new(1.0, -0.5, 1.0),
                distance: 0.0,
                decay: 2.0,
            },
        )
        .disabled(),
        Light::new(
            "rect area",
            Rgb::from_hex(0x4e00ff),
            6.0,
            LightKind::RectArea {
                position: Vec3::new(-1.5, 0.0, 1.5),
                area: 1.0,
            },
        )
        .disabled(),
        Light::new(
            "spot",
            Rgb::from_hex(0x78ff00),
            4.5,
            LightKind::Spot {
                position: Vec3::new(0.0, 2.0, 3.0),
                target: Vec3::ZERO,
                distance: 10.0,
                angle: PI * 0.1,
                penumbra: 0.25,
                decay: 1.0,
            },
        ),
    ]
}

/// Sphere, cube and torus over a floor, shaded by switchable lights.
pub struct LightsDemo {
    /// Rotating objects first, the static floor last.
    surfaces: Vec<Surface>,
    lights: Vec<Light>,
    lit: LitPoints,
}

impl LightsDemo {
    pub fn new(rng: &mut dyn UnitRandom) -> Self {
        let white = Rgb::WHITE;
        let sphere_r = 0.5;
        let cube = 0.75;
        let (ring, tube) = (0.3, 0.2);
        let surfaces = vec![
            Surface::new(
                shapes::sphere(sphere_r, OBJECT_SAMPLES, rng),
                white,
                splat_size(4.0 * PI * sphere_r * sphere_r, OBJECT_SAMPLES),
            )
            .at(Vec3::new(-1.5, 0.0, 0.0)),
            Surface::new(
                shapes::cuboid(Vec3::splat(cube), OBJECT_SAMPLES, rng),
                white,
                splat_size(6.0 * cube * cube, OBJECT_SAMPLES),
            ),
            Surface::new(
                shapes::torus(ring, tube, OBJECT_SAMPLES, rng),
                white,
                splat_size(4.0 * PI * PI * ring * tube, OBJECT_SAMPLES),
            )
            .at(Vec3::new(1.5, 0.0, 0.0)),
            Surface::new(
                shapes::plane(Vec2::splat(5.0), PLANE_SAMPLES, rng),
                white,
                splat_size(25.0, PLANE_SAMPLES),
            )
            .at(Vec3::new(0.0, -0.65, 0.0)),
        ];
        let mut demo = Self {
            surfaces,
            lights: showcase_lights(),
            lit: LitPoints::new(),
        };
        demo.rebuild();
        demo
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn toggle_light(&mut self, slot: usize) -> Option<bool> {
        let light = self.lights.get_mut(slot)?;
        light.enabled = !light.enabled;
        log::info!(
            "{} light {}",
            light.name,
            if light.enabled { "on" } else { "off" }
        );
        Some(light.enabled)
    }

    fn rebuild(&mut self) {
        self.lit.clear();
        for s in &self.surfaces {
            self.lit.push_surface(s);
        }
        self.lit.relight(&self.lights);
    }
}

impl Demo for LightsDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Lights
    }

    fn camera_pose(&self) -> CameraPose {
        CameraPose {
            eye: vec3_of(LIGHTS_CAMERA_EYE),
            target: Vec3::ZERO,
            fov_degrees: WIDE_FOV_DEG,
        }
    }

    fn update(&mut self, time: FrameTime, _rng: &mut dyn UnitRandom) {
        let t = time.elapsed;
        let spin = Quat::from_euler(EulerRot::XYZ, SPIN_X * t, SPIN_Y * t, 0.0);
        let objects = self.surfaces.len().saturating_sub(1);
        for s in &mut self.surfaces[..objects] {
            s.rotation = spin;
        }
        self.rebuild();
    }

    fn handle_input(&mut self, event: &InputEvent, _rng: &mut dyn UnitRandom) {
        if let InputEvent::Key(KeyAction::ToggleLight(slot)) = *event {
            if self.toggle_light(slot).is_some() {
                self.lit.relight(&self.lights);
            }
        }
    }

    fn write_instances(&self, out: &mut Vec<PointInstance>) {
        out.extend_from_slice(self.lit.instances());
    }

    fn blend_mode(&self) -> BlendMode {
        BlendMode::Opaque
    }

    fn hint(&self) -> &'static str {
        "drag orbit · wheel zoom · 1 ambient · 2 directional · 3 hemisphere · 4 point · 5 rect area · 6 spot"
    }
}
