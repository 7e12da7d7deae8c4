//! Per-particle confetti physics
//!
//! Frame-based rather than dt-based: lifetimes are counted in ticks so a
//! burst's feel is tied to the host's paint cadence, matching the engine's
//! `ticks` option.

use glam::Vec2;

/// Downward pull per tick
pub const GRAVITY: f32 = 3.0;
/// Velocity retained per tick
pub const DECAY: f32 = 0.9;

/// A single piece of confetti
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    /// Half-width of the drawn quad
    pub size: f32,
    /// Palette index
    pub color: usize,
    /// Flutter state
    pub wobble_phase: f32,
    pub wobble_speed: f32,
    /// Age in ticks; expires at `ticks`
    pub age: u32,
    pub ticks: u32,
}

impl Particle {
    /// Advance one frame. Returns false when expired.
    pub fn tick(&mut self) -> bool {
        self.age += 1;
        if self.age >= self.ticks {
            return false;
        }

        self.pos += self.vel;
        self.vel.y += GRAVITY;
        self.vel *= DECAY;
        self.wobble_phase += self.wobble_speed;

        true
    }

    /// Remaining-life fade, 1.0 at spawn down to 0.0 at expiry
    pub fn opacity(&self) -> f32 {
        1.0 - self.age as f32 / self.ticks as f32
    }

    /// Draw position with the flutter offset applied
    pub fn render_pos(&self) -> Vec2 {
        self.pos
            + Vec2::new(self.wobble_phase.cos(), self.wobble_phase.sin()) * self.size * 0.5
    }
}
