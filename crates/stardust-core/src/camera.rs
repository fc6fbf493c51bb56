//! Perspective camera and a damped orbit rig.
//!
//! These types avoid platform APIs; the frontends feed pointer deltas into
//! `OrbitRig` and read a `Camera` back each frame.

use crate::constants::{Z_FAR, Z_NEAR};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(eye: Vec3, target: Vec3, fovy_degrees: f32, aspect: f32) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            aspect,
            fovy_radians: fovy_degrees.to_radians(),
            znear: Z_NEAR,
            zfar: Z_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn from_pose(pose: &CameraPose, aspect: f32) -> Self {
        Self::new(pose.eye, pose.target, pose.fov_degrees, aspect)
    }
}

/// Where a demo wants the camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
    pub fov_degrees: f32,
}

/// Orbit controller with damped rotation and zoom.
///
/// Input adds to pending deltas; every `update` applies a `damping` fraction
/// of what is pending and decays the rest, so motion glides to a stop.
#[derive(Clone, Debug)]
pub struct OrbitRig {
    pub target: Vec3,
    /// Azimuth around +Y, radians.
    pub yaw: f32,
    /// Polar angle from +Y, radians.
    pub pitch: f32,
    pub distance: f32,
    pub damping: f32,
    pending_yaw: f32,
    pending_pitch: f32,
    pending_zoom: f32,
}

const MIN_PITCH: f32 = 0.01;
const MAX_PITCH: f32 = std::f32::consts::PI - 0.01;
const MIN_DISTANCE: f32 = 0.2;
const MAX_DISTANCE: f32 = 60.0;
const ZOOM_STEP: f32 = 0.95;

impl OrbitRig {
    pub fn from_pose(pose: &CameraPose) -> Self {
        let offset = pose.eye - pose.target;
        let distance = offset.length().max(MIN_DISTANCE);
        let pitch = (offset.y / distance).clamp(-1.0, 1.0).acos();
        let yaw = offset.x.atan2(offset.z);
        Self {
            target: pose.target,
            yaw,
            pitch: pitch.clamp(MIN_PITCH, MAX_PITCH),
            distance,
            damping: 0.05,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            pending_zoom: 0.0,
        }
    }

    /// Drag by a pixel delta; a drag across the full viewport height turns
    /// the camera once around.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.pending_yaw -= std::f32::consts::TAU * dx / h;
        self.pending_pitch -= std::f32::consts::TAU * dy / h;
    }

    /// Positive steps zoom in.
    pub fn zoom(&mut self, steps: f32) {
        self.pending_zoom += steps;
    }

    pub fn update(&mut self) {
        let k = self.damping.clamp(0.0, 1.0);
        self.yaw += self.pending_yaw * k;
        self.pitch = (self.pitch + self.pending_pitch * k).clamp(MIN_PITCH, MAX_PITCH);
        self.distance = (self.distance * ZOOM_STEP.powf(self.pending_zoom * k))
            .clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.pending_yaw *= 1.0 - k;
        self.pending_pitch *= 1.0 - k;
        self.pending_zoom *= 1.0 - k;
    }

    pub fn eye(&self) -> Vec3 {
        let (sp, cp) = self.pitch.sin_cos();
        let (sy, cy) = self.yaw.sin_cos();
        self.target + Vec3::new(sp * sy, cp, sp * cy) * self.distance
    }

    pub fn is_settled(&self) -> bool {
        self.pending_yaw.abs() < 1e-5
            && self.pending_pitch.abs() < 1e-5
            && self.pending_zoom.abs() < 1e-5
    }
}
