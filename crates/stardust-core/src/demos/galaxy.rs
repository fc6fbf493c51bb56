use crate::animation::{
    apply_radial_gradient, apply_spin_drift, cycled_gradient, drift_rotation, pulse_scale,
};
use crate::camera::CameraPose;
use crate::clock::FrameTime;
use crate::color::Rgb;
use crate::constants::*;
use crate::demos::DemoKind;
use crate::params::{AnimationParams, GenerationParams};
use crate::point_cloud::{generate_sphere_shell, generate_spiral, PointCloud};
use crate::random::UnitRandom;
use crate::scene::{Demo, InputEvent, KeyAction, PointInstance};
use crate::shooting_star::ShootingStarField;
use glam::{Quat, Vec3};

const SPIN_KEY_STEP: f32 = 0.1;
const SHOOTING_STAR_HEAD_SIZE: f32 = 0.15;
const SHOOTING_STAR_TRAIL_SIZE: f32 = 0.1;
const SHOOTING_STAR_TRAIL_ALPHA: f32 = 0.6;

/// Spiral galaxy with a rotating, pulsing group, a static star shell and
/// the occasional shooting star.
pub struct GalaxyDemo {
    params: GenerationParams,
    anim: AnimationParams,
    cloud: PointCloud,
    ambient: PointCloud,
    shooting: ShootingStarField,
    yaw: f32,
    scale: f32,
}

impl GalaxyDemo {
    pub fn new(params: GenerationParams, anim: AnimationParams, rng: &mut dyn UnitRandom) -> Self {
        let cloud = generate_spiral(&params, rng);
        let ambient = generate_sphere_shell(
            AMBIENT_STAR_COUNT,
            AMBIENT_STAR_RADIUS,
            Rgb::WHITE,
            rng,
        );
        log::info!(
            "galaxy: {} points, {} branches, spin {}",
            params.count,
            params.branches,
            params.spin
        );
        Self {
            params,
            anim,
            cloud,
            ambient,
            shooting: ShootingStarField::new(),
            yaw: 0.0,
            scale: 1.0,
        }
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub fn animation(&self) -> &AnimationParams {
        &self.anim
    }

    pub fn cloud(&self) -> &PointCloud {
        &self.cloud
    }

    pub fn shooting_stars(&self) -> &ShootingStarField {
        &self.shooting
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Replace parameters and rebuild the cloud. The ambient shell is kept.
    pub fn set_params(&mut self, params: GenerationParams, rng: &mut dyn UnitRandom) {
        self.params = params;
        self.regenerate(rng);
    }

    pub fn regenerate(&mut self, rng: &mut dyn UnitRandom) {
        self.cloud = generate_spiral(&self.params, rng);
        log::info!(
            "galaxy regenerated: {} points, {} branches, spin {:.3}",
            self.params.count,
            self.params.branches,
            self.params.spin
        );
    }

    fn adjust(&mut self, rng: &mut dyn UnitRandom, edit: impl FnOnce(&mut GenerationParams)) {
        let mut next = self.params.clone();
        edit(&mut next);
        let next = next.clamped();
        if next != self.params {
            self.set_params(next, rng);
        }
    }
}

impl Demo for GalaxyDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Galaxy
    }

    fn camera_pose(&self) -> CameraPose {
        CameraPose {
            eye: vec3_of(GALAXY_CAMERA_EYE),
            target: Vec3::ZERO,
            fov_degrees: WIDE_FOV_DEG,
        }
    }

    fn update(&mut self, time: FrameTime, rng: &mut dyn UnitRandom) {
        let FrameTime { elapsed, delta } = time;
        self.yaw = drift_rotation(self.yaw, delta, self.anim.rotation_speed);
        self.scale = pulse_scale(elapsed, self.anim.pulse_speed, self.anim.pulse_intensity);

        if self.anim.animate_colors {
            let (inside, outside) =
                cycled_gradient(self.params.inside_color, self.params.outside_color, elapsed);
            apply_radial_gradient(&mut self.cloud, inside, outside, self.params.radius);
        }
        if self.anim.animate_spin {
            apply_spin_drift(&mut self.cloud, self.params.radius, elapsed, delta);
        }
        self.shooting.update(delta, rng);
    }

    fn handle_input(&mut self, event: &InputEvent, rng: &mut dyn UnitRandom) {
        let InputEvent::Key(action) = event else {
            return;
        };
        match *action {
            KeyAction::Regenerate => self.regenerate(rng),
            KeyAction::ToggleColors => {
                self.anim.animate_colors = !self.anim.animate_colors;
                log::info!("color animation {}", on_off(self.anim.animate_colors));
            }
            KeyAction::ToggleSpin => {
                self.anim.animate_spin = !self.anim.animate_spin;
                log::info!("spin animation {}", on_off(self.anim.animate_spin));
            }
            KeyAction::MoreBranches => self.adjust(rng, |p| p.branches += 1),
            KeyAction::FewerBranches => {
                self.adjust(rng, |p| p.branches = p.branches.saturating_sub(1))
            }
            KeyAction::SpinUp => self.adjust(rng, |p| p.spin += SPIN_KEY_STEP),
            KeyAction::SpinDown => self.adjust(rng, |p| p.spin -= SPIN_KEY_STEP),
            _ => {}
        }
    }

    fn write_instances(&self, out: &mut Vec<PointInstance>) {
        let group = Quat::from_rotation_y(self.yaw);
        let s = self.scale;
        out.reserve(self.cloud.len() + self.ambient.len());

        let size = self.params.point_size;
        for (p, c) in self.cloud.positions().iter().zip(self.cloud.colors()) {
            out.push(PointInstance::new(group * (*p * s), size, c.with_alpha(1.0)));
        }

        let star = Rgb::WHITE.scale(AMBIENT_STAR_ALPHA).with_alpha(AMBIENT_STAR_ALPHA);
        for p in self.ambient.positions() {
            out.push(PointInstance::new(group * (*p * s), AMBIENT_STAR_SIZE, star));
        }

        let trail = Rgb::WHITE
            .scale(SHOOTING_STAR_TRAIL_ALPHA)
            .with_alpha(SHOOTING_STAR_TRAIL_ALPHA);
        for shooting in self.shooting.stars() {
            out.push(PointInstance::new(
                shooting.position,
                SHOOTING_STAR_HEAD_SIZE,
                Rgb::WHITE.with_alpha(1.0),
            ));
            for p in shooting.trail() {
                out.push(PointInstance::new(p, SHOOTING_STAR_TRAIL_SIZE, trail));
            }
        }
    }

    fn hint(&self) -> &'static str {
        "drag orbit · wheel zoom · r regenerate · c colors · s spin · [ ] branches · - = spin · space pause"
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
