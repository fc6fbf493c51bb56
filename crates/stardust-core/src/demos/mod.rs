//! The five scenes and the name-based registry frontends select them by.

mod galaxy;
mod haunted;
mod lights;
mod particles;
mod scroll;

pub use galaxy::GalaxyDemo;
pub use haunted::{ghost_position, HauntedHouseDemo, GHOSTS};
pub use lights::{showcase_lights, LightsDemo};
pub use particles::ParticlesDemo;
pub use scroll::{section_for, ScrollDemo};

use crate::error::DemoParseError;
use crate::params::{AnimationParams, GenerationParams};
use crate::random::UnitRandom;
use crate::scene::Demo;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DemoKind {
    #[default]
    Galaxy,
    Particles,
    HauntedHouse,
    Lights,
    Scroll,
}

impl DemoKind {
    pub const ALL: [DemoKind; 5] = [
        DemoKind::Galaxy,
        DemoKind::Particles,
        DemoKind::HauntedHouse,
        DemoKind::Lights,
        DemoKind::Scroll,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DemoKind::Galaxy => "galaxy",
            DemoKind::Particles => "particles",
            DemoKind::HauntedHouse => "house",
            DemoKind::Lights => "lights",
            DemoKind::Scroll => "scroll",
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DemoKind {
    type Err = DemoParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        match key.as_str() {
            "galaxy" | "galaxy-generator" => Ok(DemoKind::Galaxy),
            "particles" | "ripple" => Ok(DemoKind::Particles),
            "house" | "haunted" | "haunted-house" => Ok(DemoKind::HauntedHouse),
            "lights" => Ok(DemoKind::Lights),
            "scroll" | "scroll-animation" => Ok(DemoKind::Scroll),
            _ => Err(DemoParseError(s.to_string())),
        }
    }
}

/// Build a demo. `params` and `anim` only affect the galaxy; the other
/// scenes have fixed layouts.
pub fn build_demo(
    kind: DemoKind,
    params: GenerationParams,
    anim: AnimationParams,
    rng: &mut dyn UnitRandom,
) -> Box<dyn Demo> {
    log::info!("building demo `{}`", kind);
    match kind {
        DemoKind::Galaxy => Box::new(GalaxyDemo::new(params, anim, rng)),
        DemoKind::Particles => Box::new(ParticlesDemo::new(rng)),
        DemoKind::HauntedHouse => Box::new(HauntedHouseDemo::new(rng)),
        DemoKind::Lights => Box::new(LightsDemo::new(rng)),
        DemoKind::Scroll => Box::new(ScrollDemo::new(rng)),
    }
}
