//! Data-driven celebration tuning
//!
//! Burst parameters and session timings live in plain data so they can be
//! tweaked without touching the schedule logic. Defaults match the card's
//! shipped feel; a page can override them with an inline JSON block.

use serde::Deserialize;

use crate::consts::{CELEBRATION_MS, FINALE_DELAY_MS};

/// Parameters for the small per-frame bursts
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FrameBurstTuning {
    pub particle_count: u32,
    /// Full cone width in degrees
    pub spread: f32,
    /// Launch speed in pixels per tick
    pub start_velocity: f32,
    /// Particle lifetime in ticks
    pub ticks: u32,
    /// Burst origins are sampled across the full width and the top
    /// `origin_y_max` fraction of the surface
    pub origin_y_max: f32,
}

impl Default for FrameBurstTuning {
    fn default() -> Self {
        Self {
            particle_count: 12,
            spread: 90.0,
            start_velocity: 45.0,
            ticks: 180,
            origin_y_max: 0.3,
        }
    }
}

/// Parameters for the single finale burst
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FinaleBurstTuning {
    pub particle_count: u32,
    pub spread: f32,
    pub start_velocity: f32,
    pub ticks: u32,
    pub origin_x: f32,
    pub origin_y: f32,
}

impl Default for FinaleBurstTuning {
    fn default() -> Self {
        Self {
            particle_count: 300,
            spread: 140.0,
            start_velocity: 60.0,
            ticks: 220,
            origin_x: 0.5,
            origin_y: 0.55,
        }
    }
}

/// Complete celebration tuning
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// How long frame bursts keep firing after the trigger (ms)
    pub session_ms: f64,
    /// Delay from trigger to the finale burst (ms)
    pub finale_delay_ms: f64,
    pub frame_burst: FrameBurstTuning,
    pub finale_burst: FinaleBurstTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            session_ms: CELEBRATION_MS,
            finale_delay_ms: FINALE_DELAY_MS,
            frame_burst: FrameBurstTuning::default(),
            finale_burst: FinaleBurstTuning::default(),
        }
    }
}

impl Tuning {
    /// Parse a tuning override block. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_card_feel() {
        let t = Tuning::default();
        assert_eq!(t.session_ms, 1600.0);
        assert_eq!(t.finale_delay_ms, 300.0);
        assert_eq!(t.frame_burst.particle_count, 12);
        assert_eq!(t.finale_burst.particle_count, 300);
        assert_eq!(t.finale_burst.origin_y, 0.55);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let t = Tuning::from_json(r#"{"session_ms": 800, "frame_burst": {"particle_count": 6}}"#)
            .expect("valid override");
        assert_eq!(t.session_ms, 800.0);
        assert_eq!(t.frame_burst.particle_count, 6);
        // Untouched fields fall back
        assert_eq!(t.frame_burst.spread, 90.0);
        assert_eq!(t.finale_delay_ms, 300.0);
    }

    #[test]
    fn test_malformed_override_is_an_error() {
        assert!(Tuning::from_json("{not json").is_err());
    }
}
