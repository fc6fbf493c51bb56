use crate::constants::MAX_FRAME_DELTA_SEC;
use instant::Instant;
use std::time::Duration;

/// Seconds since the clock started and since the previous frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    pub elapsed: f32,
    pub delta: f32,
}

/// Frame clock driving every demo. Deltas are capped so a backgrounded tab
/// does not produce one enormous step, and a paused clock stops `elapsed`.
#[derive(Clone, Debug)]
pub struct FrameClock {
    last: Option<Instant>,
    elapsed: f32,
    paused: bool,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: None,
            elapsed: 0.0,
            paused: false,
        }
    }

    /// Sample the wall clock.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = match self.last {
            Some(prev) => now.duration_since(prev),
            None => Duration::ZERO,
        };
        self.last = Some(now);
        self.advance(dt)
    }

    /// Advance by an explicit duration.
    pub fn advance(&mut self, dt: Duration) -> FrameTime {
        let delta = if self.paused {
            0.0
        } else {
            dt.as_secs_f32().min(MAX_FRAME_DELTA_SEC)
        };
        self.elapsed += delta;
        FrameTime {
            elapsed: self.elapsed,
            delta,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }
}
