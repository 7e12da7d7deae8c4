//! Particle-effect engine
//!
//! A small confetti engine bound to one drawing surface: `emit` spawns a
//! burst described by `EmitOptions`, `tick` advances the pool one frame.
//! The pool is bounded; when full, the oldest particles make room. All
//! randomness comes from the seeded RNG handed in at creation, so two
//! engines with the same seed produce identical streams.

pub mod particle;

pub use particle::Particle;

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

/// Confetti palette (CSS colors, indexed by `Particle::color`)
pub const PALETTE: [&str; 6] = [
    "#ff4d7d", "#ff1f68", "#ffa62d", "#fcff42", "#a25afd", "#26ccff",
];

/// One burst request, the engine's `emit` contract
#[derive(Debug, Clone, PartialEq)]
pub struct EmitOptions {
    pub particle_count: u32,
    /// Full cone width in degrees, centered straight up
    pub spread: f32,
    /// Launch speed scale in pixels per tick
    pub start_velocity: f32,
    /// Lifetime in ticks
    pub ticks: u32,
    /// Spawn point as fractions of the surface, (0,0) top-left
    pub origin: Vec2,
}

/// Engine configuration fixed at bind time
#[derive(Debug, Clone, Copy)]
pub struct CreateOptions {
    /// When false (the card's setting) the engine never resizes its own
    /// buffer; the host drives `set_buffer_size`
    pub resize: bool,
    /// Prefer worker-backed rendering where the host can provide it
    pub use_worker: bool,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            resize: false,
            use_worker: true,
        }
    }
}

/// The engine: a bounded particle pool bound to one surface
pub struct Confetti {
    particles: Vec<Particle>,
    buffer: Vec2,
    rng: Pcg32,
    max_particles: usize,
    options: CreateOptions,
}

impl Confetti {
    pub fn new(
        width: u32,
        height: u32,
        rng: Pcg32,
        max_particles: usize,
        options: CreateOptions,
    ) -> Self {
        if options.resize {
            log::warn!("engine-managed resize not supported; host must drive set_buffer_size");
        }
        Self {
            particles: Vec::new(),
            buffer: Vec2::new(width as f32, height as f32),
            rng,
            max_particles,
            options,
        }
    }

    /// Host-managed buffer update (the `resize: false` contract)
    pub fn set_buffer_size(&mut self, width: u32, height: u32) {
        self.buffer = Vec2::new(width as f32, height as f32);
    }

    pub fn buffer_size(&self) -> Vec2 {
        self.buffer
    }

    pub fn use_worker(&self) -> bool {
        self.options.use_worker
    }

    /// Spawn one burst into the pool
    pub fn emit(&mut self, opts: &EmitOptions) {
        if self.max_particles == 0 {
            // Particles disabled in settings
            return;
        }

        let origin = opts.origin * self.buffer;
        let spread_rad = opts.spread.to_radians();

        for _ in 0..opts.particle_count {
            if self.particles.len() >= self.max_particles {
                // Oldest particle makes room
                self.particles.remove(0);
            }

            // Straight up, jittered uniformly within the cone
            let angle = -FRAC_PI_2 + (self.rng.random::<f32>() - 0.5) * spread_rad;
            let speed = opts.start_velocity * (0.5 + self.rng.random::<f32>());

            self.particles.push(Particle {
                pos: origin,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                size: 4.0 + self.rng.random::<f32>() * 4.0,
                color: self.rng.random_range(0..PALETTE.len()),
                wobble_phase: self.rng.random::<f32>() * std::f32::consts::TAU,
                wobble_speed: 0.05 + self.rng.random::<f32>() * 0.1,
                age: 0,
                ticks: opts.ticks.max(1),
            });
        }
    }

    /// Advance the pool one frame, dropping expired particles
    pub fn tick(&mut self) {
        self.particles.retain_mut(|p| p.tick());
    }

    pub fn is_idle(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn engine(max: usize) -> Confetti {
        Confetti::new(
            800,
            600,
            Pcg32::seed_from_u64(7),
            max,
            CreateOptions::default(),
        )
    }

    fn burst(count: u32, spread: f32) -> EmitOptions {
        EmitOptions {
            particle_count: count,
            spread,
            start_velocity: 45.0,
            ticks: 180,
            origin: Vec2::new(0.5, 0.25),
        }
    }

    #[test]
    fn test_emit_spawns_exact_count_at_origin() {
        let mut engine = engine(1000);
        engine.emit(&burst(12, 90.0));
        assert_eq!(engine.particles().len(), 12);
        for p in engine.particles() {
            // 0.5 x 800, 0.25 x 600
            assert_eq!(p.pos, Vec2::new(400.0, 150.0));
        }
    }

    #[test]
    fn test_launch_stays_inside_spread_cone() {
        let mut engine = engine(1000);
        engine.emit(&burst(300, 140.0));
        for p in engine.particles() {
            // Angle measured from straight up
            let off_vertical = p.vel.x.atan2(-p.vel.y).abs().to_degrees();
            assert!(off_vertical <= 70.0 + 0.01);
            // Speed within [0.5, 1.5] x start_velocity
            let speed = p.vel.length();
            assert!((22.5..=67.5).contains(&speed));
        }
    }

    #[test]
    fn test_pool_cap_evicts_oldest() {
        let mut engine = engine(20);
        engine.emit(&burst(12, 90.0));
        let survivor = engine.particles()[11].clone();
        engine.emit(&burst(12, 90.0));
        assert_eq!(engine.particles().len(), 20);
        // Four of the first batch were evicted; the rest lead the pool
        assert_eq!(engine.particles()[7].vel, survivor.vel);
    }

    #[test]
    fn test_zero_cap_spawns_nothing() {
        let mut engine = engine(0);
        engine.emit(&burst(12, 90.0));
        assert!(engine.is_idle());
    }

    #[test]
    fn test_pool_drains_to_idle() {
        let mut engine = engine(1000);
        engine.emit(&EmitOptions {
            ticks: 5,
            ..burst(12, 90.0)
        });
        assert!(!engine.is_idle());
        for _ in 0..5 {
            engine.tick();
        }
        assert!(engine.is_idle());
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = engine(1000);
        let mut b = engine(1000);
        a.emit(&burst(30, 140.0));
        b.emit(&burst(30, 140.0));
        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.vel, pb.vel);
            assert_eq!(pa.color, pb.color);
        }
    }
}
