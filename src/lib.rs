//! Pop the Question - an interactive proposal card
//!
//! Core modules:
//! - `sim`: Deterministic card logic (evasion geometry, state machine, celebration schedule)
//! - `confetti`: Particle-effect engine with a bounded pool
//! - `renderer`: Canvas drawing surface management
//! - `settings`: Internal quality/motion settings from the page URL
//! - `tuning`: Data-driven burst parameters

pub mod confetti;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{QualityPreset, Settings};
pub use tuning::Tuning;

use glam::Vec2;

/// Card behavior constants
pub mod consts {
    /// Pointer distance below which the decline button starts evading
    pub const EVADE_TRIGGER_DIST: f32 = 140.0;
    /// How far the decline button jumps per evasion step
    pub const EVADE_PUSH_DIST: f32 = 150.0;

    /// Accept button scale at rest
    pub const ACCEPT_SCALE_START: f32 = 1.0;
    /// Scale growth per evasion step
    pub const ACCEPT_SCALE_STEP: f32 = 0.1;
    /// Scale ceiling - the button stops growing here
    pub const ACCEPT_SCALE_MAX: f32 = 2.2;

    /// Celebration session length (ms) - frame bursts stop after this
    pub const CELEBRATION_MS: f64 = 1600.0;
    /// Delay before the single finale burst (ms)
    pub const FINALE_DELAY_MS: f64 = 300.0;
    /// Settle delay after an orientation change before resizing the surface (ms)
    pub const ORIENTATION_SETTLE_MS: i32 = 150;
}

/// Unit vector pointing from `pointer` toward `center`.
///
/// A zero-length offset divides by a substituted magnitude of 1 instead,
/// so a pointer dead on the center yields a zero push rather than NaN.
#[inline]
pub fn unit_away(pointer: Vec2, center: Vec2) -> Vec2 {
    let offset = center - pointer;
    let mag = offset.length();
    offset / if mag == 0.0 { 1.0 } else { mag }
}
