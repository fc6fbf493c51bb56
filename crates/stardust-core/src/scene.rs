//! The seam between demos and the frontends: input events, per-point GPU
//! instances and the `Demo` trait every scene implements.

use crate::camera::CameraPose;
use crate::clock::FrameTime;
use crate::color::Rgb;
use crate::demos::DemoKind;
use crate::random::UnitRandom;
use glam::{Mat4, Vec3};

/// One sprite as laid out in the instance vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointInstance {
    pub position: [f32; 3],
    /// Attenuated size: on-screen pixels are `size * viewport_height / 2 / depth`.
    pub size: f32,
    pub color: [f32; 4],
}

impl PointInstance {
    #[inline]
    pub fn new(position: Vec3, size: f32, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            size,
            color,
        }
    }
}

/// Two triangles covering the sprite quad, in sprite-local units.
pub const QUAD_CORNERS: [[f32; 2]; 6] = [
    [-1.0, -1.0],
    [1.0, -1.0],
    [1.0, 1.0],
    [-1.0, -1.0],
    [1.0, 1.0],
    [-1.0, 1.0],
];

/// Uniforms for the point pipeline, shared by both renderers.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub viewport: [f32; 2],
    pub min_size_px: f32,
    pub _pad: f32,
}

impl PointUniforms {
    pub fn new(view_proj: Mat4, width: f32, height: f32) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            viewport: [width.max(1.0), height.max(1.0)],
            min_size_px: 1.0,
            _pad: 0.0,
        }
    }
}

/// Actions bound to keys in both frontends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Regenerate,
    ToggleColors,
    ToggleSpin,
    MoreBranches,
    FewerBranches,
    SpinUp,
    SpinDown,
    /// Zero-based light slot.
    ToggleLight(usize),
    Pause,
    ToggleHint,
}

/// Map a key label (DOM `KeyboardEvent.key` or a winit logical key) to an
/// action. Letters are case-insensitive.
pub fn key_action(key: &str) -> Option<KeyAction> {
    let action = match key {
        "r" | "R" => KeyAction::Regenerate,
        "c" | "C" => KeyAction::ToggleColors,
        "s" | "S" => KeyAction::ToggleSpin,
        "]" => KeyAction::MoreBranches,
        "[" => KeyAction::FewerBranches,
        "=" | "+" => KeyAction::SpinUp,
        "-" | "_" => KeyAction::SpinDown,
        " " | "Space" => KeyAction::Pause,
        "h" | "H" => KeyAction::ToggleHint,
        "1" | "2" | "3" | "4" | "5" | "6" => {
            let slot = key.parse::<usize>().ok()?;
            KeyAction::ToggleLight(slot - 1)
        }
        _ => return None,
    };
    Some(action)
}

/// Input forwarded from the frontends after platform translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Resize { width: f32, height: f32 },
    /// Vertical scroll offset in pixels together with the viewport height.
    Scroll { offset: f32, viewport_height: f32 },
    /// Cursor position normalized to -0.5..0.5 on both axes, y down.
    Cursor { x: f32, y: f32 },
    Key(KeyAction),
}

/// How sprites combine with what is already drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    /// Soft glowing sprites summed without depth writes.
    Additive,
    /// Hard-edged discs with depth testing, for surfaces.
    Opaque,
}

/// A self-contained scene driven one frame at a time.
///
/// Frontends own a `Box<dyn Demo>`, tick it once per frame and upload what
/// `write_instances` produces. Group transforms (rotation, scale) are
/// applied on the CPU while writing instances.
pub trait Demo {
    fn kind(&self) -> DemoKind;

    fn camera_pose(&self) -> CameraPose;

    /// Whether pointer drags orbit the camera. Demos that steer the camera
    /// themselves return false.
    fn orbit_enabled(&self) -> bool {
        true
    }

    fn update(&mut self, time: FrameTime, rng: &mut dyn UnitRandom);

    fn handle_input(&mut self, _event: &InputEvent, _rng: &mut dyn UnitRandom) {}

    /// Append this frame's sprites to `out`.
    fn write_instances(&self, out: &mut Vec<PointInstance>);

    fn clear_color(&self) -> Rgb {
        Rgb::BLACK
    }

    fn blend_mode(&self) -> BlendMode {
        BlendMode::Additive
    }

    /// One-line key help for the overlay.
    fn hint(&self) -> &'static str;
}

/// Collect a demo's instances into a reused buffer.
pub fn fill_instances(demo: &dyn Demo, out: &mut Vec<PointInstance>) {
    out.clear();
    demo.write_instances(out);
}
