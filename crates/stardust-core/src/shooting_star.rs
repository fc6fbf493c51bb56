//! Shooting stars streaking from a distant shell toward the galaxy centre.

use crate::constants::*;
use crate::point_cloud::point_on_sphere;
use crate::random::UnitRandom;
use glam::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct ShootingStar {
    pub position: Vec3,
    pub direction: Vec3,
    pub active: bool,
}

impl ShootingStar {
    /// Spawn on the outer shell, aimed roughly at the origin.
    pub fn spawn(rng: &mut dyn UnitRandom) -> Self {
        let position = point_on_sphere(SHOOTING_STAR_SPAWN_RADIUS, rng);
        let jitter = Vec3::new(
            rng.next_centered() * SHOOTING_STAR_AIM_JITTER,
            rng.next_centered() * SHOOTING_STAR_AIM_JITTER,
            rng.next_centered() * SHOOTING_STAR_AIM_JITTER,
        );
        let direction = (-position + jitter)
            .try_normalize()
            .unwrap_or_else(|| -position.normalize_or_zero());
        Self {
            position,
            direction,
            active: true,
        }
    }

    /// Move along the heading. A star retires once it reaches the centre or
    /// starts moving away from it (a jittered heading can miss the centre).
    pub fn advance(&mut self, delta: f32) {
        if !self.active {
            return;
        }
        self.position += self.direction * SHOOTING_STAR_SPEED * delta;
        let arrived = self.position.length() < SHOOTING_STAR_ARRIVAL_RADIUS;
        let receding = self.position.dot(self.direction) > 0.0;
        if arrived || receding {
            self.active = false;
        }
    }

    /// Head first, then points trailing behind it.
    pub fn trail(&self) -> impl Iterator<Item = Vec3> + '_ {
        (0..SHOOTING_STAR_TRAIL_POINTS)
            .map(move |i| self.position - self.direction * (i as f32 * SHOOTING_STAR_TRAIL_SPACING))
    }
}

/// Periodic spawner plus the live set of stars.
#[derive(Clone, Debug, Default)]
pub struct ShootingStarField {
    stars: Vec<ShootingStar>,
    since_roll: f32,
}

impl ShootingStarField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stars(&self) -> &[ShootingStar] {
        &self.stars
    }

    pub fn update(&mut self, delta: f32, rng: &mut dyn UnitRandom) {
        self.since_roll += delta;
        while self.since_roll >= SHOOTING_STAR_INTERVAL_SEC {
            self.since_roll -= SHOOTING_STAR_INTERVAL_SEC;
            if rng.next_unit() > SHOOTING_STAR_SPAWN_THRESHOLD {
                self.stars.push(ShootingStar::spawn(rng));
            }
        }
        for star in &mut self.stars {
            star.advance(delta);
        }
        self.stars.retain(|s| s.active);
    }
}
