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
use std::f32::consts::{FRAC_PI_2, TAU};

/// An orbiting point light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ghost {
    /// Angular speed in radians per second; negative orbits clockwise.
    pub speed: f32,
    pub radius: f32,
    pub color: u32,
}

pub const GHOSTS: [Ghost; 3] = [
    Ghost {
        speed: 0.5,
        radius: 4.0,
        color: 0x8800ff,
    },
    Ghost {
        speed: -0.38,
        radius: 5.0,
        color: 0xff0088,
    },
    Ghost {
        speed: 0.23,
        radius: 6.0,
        color: 0xff0000,
    },
];

const GHOST_INTENSITY: f32 = 6.0;
const GHOST_SPRITE_SIZE: f32 = 0.35;
const GHOST_GLOW: f32 = 4.0;

const GRAVE_COUNT: usize = 30;
const GRAVE_SIZE: Vec3 = Vec3::new(0.6, 0.8, 0.2);
const GRAVE_RING_MIN: f32 = 3.0;
const GRAVE_RING_WIDTH: f32 = 4.0;
const GRAVE_MAX_LIFT: f32 = 0.4;
const GRAVE_TILT: f32 = 0.4;

const FLOOR_SIZE: f32 = 20.0;
const FLOOR_FADE_RADIUS: f32 = 9.5;
const WALLS: Vec3 = Vec3::new(4.0, 2.5, 4.0);
const ROOF_RADIUS: f32 = 3.5;
const ROOF_HEIGHT: f32 = 1.5;

/// Ghost position at `elapsed`: a circle of the ghost's radius with a
/// wandering height.
pub fn ghost_position(ghost: &Ghost, elapsed: f32) -> Vec3 {
    let a = elapsed * ghost.speed;
    Vec3::new(
        a.cos() * ghost.radius,
        a.sin() * (a * 2.34).sin() * (a * 3.45).sin(),
        a.sin() * ghost.radius,
    )
}

/// House, graves and floor lit by moonlight, a door lamp and three ghosts.
pub struct HauntedHouseDemo {
    lit: LitPoints,
    lights: Vec<Light>,
    ghosts: [Vec3; 3],
}

impl HauntedHouseDemo {
    pub fn new(rng: &mut dyn UnitRandom) -> Self {
        let mut lit = LitPoints::new();
        for surface in build_scene(rng) {
            lit.push_surface(&surface);
        }
        log::info!("haunted house: {} lit points", lit.len());

        let mut lights = vec![
            Light::new("ambient", Rgb::from_hex(0x86cdff), 0.275, LightKind::Ambient),
            Light::new(
                "moon",
                Rgb::from_hex(0x86cdff),
                1.0,
                LightKind::Directional {
                    position: Vec3::new(3.0, 2.0, -8.0),
                },
            ),
            Light::new(
                "door",
                Rgb::from_hex(0x9aaaea),
                5.0,
                LightKind::Point {
                    position: Vec3::new(0.0, 2.2, 2.5),
                    distance: 0.0,
                    decay: 2.0,
                },
            ),
        ];
        let ghosts = GHOSTS.map(|g| ghost_position(&g, 0.0));
        for (g, p) in GHOSTS.iter().zip(ghosts) {
            lights.push(Light::new(
                "ghost",
                Rgb::from_hex(g.color),
                GHOST_INTENSITY,
                LightKind::Point {
                    position: p,
                    distance: 0.0,
                    decay: 2.0,
                },
            ));
        }
        let mut demo = Self { lit, lights, ghosts };
        demo.lit.relight(&demo.lights);
        demo
    }

    pub fn ghosts(&self) -> &[Vec3; 3] {
        &self.ghosts
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }
}

fn build_scene(rng: &mut dyn UnitRandom) -> Vec<Surface> {
    let mut surfaces = Vec::new();

    let floor_n = 16_000;
    let mut floor = shapes::plane(Vec2::splat(FLOOR_SIZE), floor_n, rng);
    floor.retain(|p| Vec2::new(p.position.x, p.position.z).length() < FLOOR_FADE_RADIUS);
    surfaces.push(Surface::new(
        floor,
        Rgb::from_hex(0x5c5346),
        splat_size(FLOOR_SIZE * FLOOR_SIZE, floor_n),
    ));

    let walls_area = 2.0 * (WALLS.x * WALLS.y + WALLS.y * WALLS.z + WALLS.x * WALLS.z);
    let walls_n = 6_000;
    surfaces.push(
        Surface::new(
            shapes::cuboid(WALLS, walls_n, rng),
            Rgb::from_hex(0xa07a5f),
            splat_size(walls_area, walls_n),
        )
        .at(Vec3::new(0.0, WALLS.y * 0.5, 0.0)),
    );

    let slant = (ROOF_RADIUS * ROOF_RADIUS + ROOF_HEIGHT * ROOF_HEIGHT).sqrt();
    let roof_n = 4_000;
    surfaces.push(
        Surface::new(
            shapes::cone(ROOF_RADIUS, ROOF_HEIGHT, roof_n, rng),
            Rgb::from_hex(0x7a3b2e),
            splat_size(std::f32::consts::PI * ROOF_RADIUS * slant, roof_n),
        )
        .at(Vec3::new(0.0, WALLS.y, 0.0)),
    );

    let door = Vec2::new(1.4, 2.0);
    let door_n = 600;
    surfaces.push(
        Surface::new(
            shapes::plane(door, door_n, rng),
            Rgb::from_hex(0x6b4a2f),
            splat_size(door.x * door.y, door_n),
        )
        .rotated(Quat::from_rotation_x(FRAC_PI_2))
        .at(Vec3::new(0.0, 1.0, WALLS.z * 0.5 + 0.01)),
    );

    let bushes = [
        (0.5, Vec3::new(0.8, 0.2, 2.2)),
        (0.25, Vec3::new(1.4, 0.1, 2.1)),
        (0.4, Vec3::new(-0.8, 0.1, 2.2)),
        (0.15, Vec3::new(-1.0, 0.05, 2.6)),
    ];
    for (radius, at) in bushes {
        let n = (2_000.0 * radius) as usize;
        let area = 4.0 * std::f32::consts::PI * radius * radius;
        surfaces.push(
            Surface::new(
                shapes::sphere(radius, n, rng),
                Rgb::from_hex(0x5f8f45),
                splat_size(area, n),
            )
            .at(at),
        );
    }

    let grave_area =
        2.0 * (GRAVE_SIZE.x * GRAVE_SIZE.y + GRAVE_SIZE.y * GRAVE_SIZE.z + GRAVE_SIZE.x * GRAVE_SIZE.z);
    let grave_n = 150;
    for _ in 0..GRAVE_COUNT {
        let angle = rng.next_unit() * TAU;
        let radius = GRAVE_RING_MIN + rng.next_unit() * GRAVE_RING_WIDTH;
        let at = Vec3::new(
            angle.sin() * radius,
            rng.next_unit() * GRAVE_MAX_LIFT,
            angle.cos() * radius,
        );
        let rx = rng.next_centered() * GRAVE_TILT;
        let ry = rng.next_centered() * GRAVE_TILT;
        let rz = rng.next_centered() * GRAVE_TILT;
        surfaces.push(
            Surface::new(
                shapes::cuboid(GRAVE_SIZE, grave_n, rng),
                Rgb::from_hex(0x9a9a96),
                splat_size(grave_area, grave_n),
            )
            .rotated(Quat::from_euler(EulerRot::XYZ, rx, ry, rz))
            .at(at),
        );
    }

    surfaces
}

impl Demo for HauntedHouseDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::HauntedHouse
    }

    fn camera_pose(&self) -> CameraPose {
        CameraPose {
            eye: vec3_of(HOUSE_CAMERA_EYE),
            target: Vec3::ZERO,
            fov_degrees: WIDE_FOV_DEG,
        }
    }

    fn update(&mut self, time: FrameTime, _rng: &mut dyn UnitRandom) {
        for (i, ghost) in GHOSTS.iter().enumerate() {
            let p = ghost_position(ghost, time.elapsed);
            self.ghosts[i] = p;
            if let LightKind::Point { position, .. } = &mut self.lights[3 + i].kind {
                *position = p;
            }
        }
        self.lit.relight(&self.lights);
    }

    fn handle_input(&mut self, event: &InputEvent, rng: &mut dyn UnitRandom) {
        if let InputEvent::Key(KeyAction::Regenerate) = event {
            // new grave layout
            self.lit.clear();
            for surface in build_scene(rng) {
                self.lit.push_surface(&surface);
            }
            self.lit.relight(&self.lights);
        }
    }

    fn write_instances(&self, out: &mut Vec<PointInstance>) {
        out.extend_from_slice(self.lit.instances());
        for (g, p) in GHOSTS.iter().zip(self.ghosts) {
            let glow = Rgb::from_hex(g.color).scale(GHOST_GLOW).with_alpha(1.0);
            out.push(PointInstance::new(p, GHOST_SPRITE_SIZE, glow));
        }
    }

    fn blend_mode(&self) -> BlendMode {
        BlendMode::Opaque
    }

    fn hint(&self) -> &'static str {
        "drag orbit · wheel zoom · r new graveyard · space pause"
    }
}
