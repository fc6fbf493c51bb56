use crate::animation::apply_ripple;
use crate::camera::CameraPose;
use crate::clock::FrameTime;
use crate::constants::*;
use crate::demos::DemoKind;
use crate::params::GenerationParams;
use crate::point_cloud::{generate_spiral, PointCloud};
use crate::random::UnitRandom;
use crate::scene::{Demo, InputEvent, KeyAction, PointInstance};
use glam::Vec3;

/// Five-armed field whose heights follow an outward ripple.
pub struct ParticlesDemo {
    params: GenerationParams,
    cloud: PointCloud,
}

impl ParticlesDemo {
    pub fn new(rng: &mut dyn UnitRandom) -> Self {
        let params = GenerationParams::ripple_field();
        let cloud = generate_spiral(&params, rng);
        Self { params, cloud }
    }

    pub fn cloud(&self) -> &PointCloud {
        &self.cloud
    }
}

impl Demo for ParticlesDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Particles
    }

    fn camera_pose(&self) -> CameraPose {
        CameraPose {
            eye: vec3_of(RIPPLE_CAMERA_EYE),
            target: Vec3::ZERO,
            fov_degrees: WIDE_FOV_DEG,
        }
    }

    fn update(&mut self, time: FrameTime, _rng: &mut dyn UnitRandom) {
        apply_ripple(&mut self.cloud, time.elapsed);
    }

    fn handle_input(&mut self, event: &InputEvent, rng: &mut dyn UnitRandom) {
        if let InputEvent::Key(KeyAction::Regenerate) = event {
            self.cloud = generate_spiral(&self.params, rng);
            log::info!("ripple field regenerated: {} points", self.cloud.len());
        }
    }

    fn write_instances(&self, out: &mut Vec<PointInstance>) {
        let size = self.params.point_size;
        out.extend(
            self.cloud
                .positions()
                .iter()
                .zip(self.cloud.colors())
                .map(|(p, c)| PointInstance::new(*p, size, c.with_alpha(1.0))),
        );
    }

    fn hint(&self) -> &'static str {
        "drag orbit · wheel zoom · r regenerate · space pause"
    }
}
