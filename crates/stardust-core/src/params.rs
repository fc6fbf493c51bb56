//! Generation and animation parameters, their debug-slider ranges and
//! `key=value` overrides coming from query strings or the command line.

use crate::color::Rgb;
use crate::constants::*;
use crate::error::ParamError;

/// Inclusive numeric range with a step, matching a debug slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Clamp into range and snap to the nearest step from `min`. NaN
    /// lands on `min`.
    pub fn clamp(&self, v: f64) -> f64 {
        if v.is_nan() {
            return self.min;
        }
        let v = v.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return v;
        }
        let snapped = self.min + ((v - self.min) / self.step).round() * self.step;
        snapped.clamp(self.min, self.max)
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    fn check(&self, key: &'static str, v: f64) -> Result<(), ParamError> {
        if self.contains(v) {
            Ok(())
        } else {
            Err(ParamError::OutOfRange {
                key,
                value: v,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// How per-axis scatter scales with the sampled radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scatter {
    /// Perturbation is `randomness * r`, so arms widen toward the rim.
    Proportional,
    /// Perturbation is `randomness` regardless of radius.
    Fixed,
}

/// Inputs to the spiral point-cloud generator.
///
/// Fields:
/// - `count`: number of points (>= 1)
/// - `radius`: outer radius of the disk
/// - `branches`: number of spiral arms (>= 1)
/// - `spin`: extra angle per unit radius; the sign sets the winding
/// - `randomness` / `randomness_power`: scatter amplitude and falloff
/// - `inside_color` / `outside_color`: radial gradient endpoints
/// - `point_size`: world-space sprite size used by the renderer
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationParams {
    pub count: usize,
    pub radius: f32,
    pub branches: u32,
    pub spin: f32,
    pub randomness: f32,
    pub randomness_power: f32,
    pub inside_color: Rgb,
    pub outside_color: Rgb,
    pub point_size: f32,
    pub scatter: Scatter,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            count: GALAXY_COUNT,
            radius: GALAXY_RADIUS,
            branches: GALAXY_BRANCHES,
            spin: GALAXY_SPIN,
            randomness: GALAXY_RANDOMNESS,
            randomness_power: GALAXY_RANDOMNESS_POWER,
            inside_color: Rgb::from_hex(GALAXY_INSIDE_HEX),
            outside_color: Rgb::from_hex(GALAXY_OUTSIDE_HEX),
            point_size: GALAXY_POINT_SIZE,
            scatter: Scatter::Proportional,
        }
    }
}

impl GenerationParams {
    /// Particle-ripple field: five arms with fixed, tightly clustered scatter.
    pub fn ripple_field() -> Self {
        Self {
            count: RIPPLE_COUNT,
            radius: RIPPLE_RADIUS,
            branches: RIPPLE_BRANCHES,
            spin: 1.0,
            randomness: RIPPLE_SCATTER,
            randomness_power: RIPPLE_SCATTER_POWER,
            inside_color: Rgb::from_hex(0xffff00),
            outside_color: Rgb::from_hex(0x0000ff),
            point_size: RIPPLE_POINT_SIZE,
            scatter: Scatter::Fixed,
        }
    }

    /// Copy with every numeric field pulled into its slider range.
    pub fn clamped(&self) -> Self {
        Self {
            count: COUNT_RANGE.clamp(self.count as f64) as usize,
            radius: RADIUS_RANGE.clamp(self.radius as f64) as f32,
            branches: BRANCHES_RANGE.clamp(self.branches as f64) as u32,
            spin: SPIN_RANGE.clamp(self.spin as f64) as f32,
            randomness: RANDOMNESS_RANGE.clamp(self.randomness as f64) as f32,
            randomness_power: RANDOMNESS_POWER_RANGE.clamp(self.randomness_power as f64) as f32,
            point_size: POINT_SIZE_RANGE.clamp(self.point_size as f64) as f32,
            inside_color: self.inside_color.clamped(),
            outside_color: self.outside_color.clamped(),
            scatter: self.scatter,
        }
    }

    pub fn validate(&self) -> Result<(), ParamError> {
        COUNT_RANGE.check("count", self.count as f64)?;
        RADIUS_RANGE.check("radius", self.radius as f64)?;
        BRANCHES_RANGE.check("branches", self.branches as f64)?;
        SPIN_RANGE.check("spin", self.spin as f64)?;
        RANDOMNESS_RANGE.check("randomness", self.randomness as f64)?;
        RANDOMNESS_POWER_RANGE.check("randomnessPower", self.randomness_power as f64)?;
        POINT_SIZE_RANGE.check("size", self.point_size as f64)?;
        Ok(())
    }

    /// Apply a single override. Keys accept the camelCase names used by the
    /// debug panel as well as snake_case. Values are not clamped here.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ParamError> {
        match key {
            "count" => self.count = parse_num::<usize>(key, value)?,
            "size" | "point_size" => self.point_size = parse_float(key, value)?,
            "radius" => self.radius = parse_float(key, value)?,
            "branches" => self.branches = parse_num(key, value)?,
            "spin" => self.spin = parse_float(key, value)?,
            "randomness" => self.randomness = parse_float(key, value)?,
            "randomnessPower" | "randomness_power" => {
                self.randomness_power = parse_float(key, value)?
            }
            "insideColor" | "inside_color" => self.inside_color = value.parse()?,
            "outsideColor" | "outside_color" => self.outside_color = value.parse()?,
            _ => return Err(ParamError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

/// Per-frame animation coefficients for the galaxy demo.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationParams {
    pub rotation_speed: f32,
    pub pulse_speed: f32,
    pub pulse_intensity: f32,
    pub animate_colors: bool,
    pub animate_spin: bool,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            rotation_speed: ROTATION_SPEED,
            pulse_speed: PULSE_SPEED,
            pulse_intensity: PULSE_INTENSITY,
            animate_colors: false,
            animate_spin: true,
        }
    }
}

impl AnimationParams {
    pub fn clamped(&self) -> Self {
        Self {
            rotation_speed: ROTATION_SPEED_RANGE.clamp(self.rotation_speed as f64) as f32,
            pulse_speed: PULSE_SPEED_RANGE.clamp(self.pulse_speed as f64) as f32,
            pulse_intensity: PULSE_INTENSITY_RANGE.clamp(self.pulse_intensity as f64) as f32,
            ..self.clone()
        }
    }

    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ParamError> {
        match key {
            "rotationSpeed" | "rotation_speed" => self.rotation_speed = parse_float(key, value)?,
            "pulseSpeed" | "pulse_speed" => self.pulse_speed = parse_float(key, value)?,
            "pulseIntensity" | "pulse_intensity" => self.pulse_intensity = parse_float(key, value)?,
            "animateColors" | "animate_colors" => self.animate_colors = parse_flag(key, value)?,
            "animateSpin" | "animate_spin" => self.animate_spin = parse_flag(key, value)?,
            _ => return Err(ParamError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

/// Route `key=value` pairs to generation or animation parameters, clamping
/// both afterwards. Returns the pairs that were rejected with their errors so
/// the caller can log them and carry on.
pub fn apply_overrides<'a, I>(
    generation: &mut GenerationParams,
    animation: &mut AnimationParams,
    pairs: I,
) -> Vec<ParamError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut rejected = Vec::new();
    for (key, value) in pairs {
        let result = match generation.apply_override(key, value) {
            Err(ParamError::UnknownKey(_)) => animation.apply_override(key, value),
            other => other,
        };
        if let Err(e) = result {
            rejected.push(e);
        }
    }
    *generation = generation.clamped();
    *animation = animation.clamped();
    rejected
}

/// Split `a=1` style arguments; entries without `=` are skipped.
pub fn split_pair(arg: &str) -> Option<(&str, &str)> {
    let (k, v) = arg.split_once('=')?;
    let k = k.trim();
    (!k.is_empty()).then_some((k, v.trim()))
}

fn parse_num<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ParamError> {
    value.trim().parse::<T>().map_err(|_| ParamError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Floats must be finite; `nan` and `inf` parse but poison every point.
fn parse_float(key: &str, value: &str) -> Result<f32, ParamError> {
    let v: f32 = parse_num(key, value)?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ParamError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ParamError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ParamError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
