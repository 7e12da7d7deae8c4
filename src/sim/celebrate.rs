//! Celebration schedule
//!
//! The accept click starts a time-boxed emission schedule: a small burst
//! every animation frame for the length of the session, plus a single big
//! finale shortly after the trigger. The schedule never touches the wall
//! clock itself - the caller polls it with a timestamp once per frame, so
//! tests can drive it without a display loop. Non-restartable by design.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::confetti::EmitOptions;
use crate::tuning::Tuning;

/// One running celebration, created per accepted proposal
#[derive(Debug, Clone)]
pub struct CelebrationSchedule {
    /// Frame bursts stop at this timestamp (ms)
    frame_until: f64,
    /// The finale fires at the first poll at or past this timestamp (ms)
    finale_at: f64,
    finale_fired: bool,
}

impl CelebrationSchedule {
    pub fn start(now_ms: f64, tuning: &Tuning) -> Self {
        Self {
            frame_until: now_ms + tuning.session_ms,
            finale_at: now_ms + tuning.finale_delay_ms,
            finale_fired: false,
        }
    }

    /// Poll once per animation frame. Returns the bursts due this frame:
    /// a frame burst while the session window is open, and the finale
    /// exactly once when its delay has elapsed.
    pub fn poll(&mut self, now_ms: f64, tuning: &Tuning, rng: &mut Pcg32) -> Vec<EmitOptions> {
        let mut bursts = Vec::new();

        if now_ms < self.frame_until {
            let fb = &tuning.frame_burst;
            bursts.push(EmitOptions {
                particle_count: fb.particle_count,
                spread: fb.spread,
                start_velocity: fb.start_velocity,
                ticks: fb.ticks,
                // Random origin near the top of the surface
                origin: Vec2::new(rng.random::<f32>(), rng.random::<f32>() * fb.origin_y_max),
            });
        }

        if !self.finale_fired && now_ms >= self.finale_at {
            self.finale_fired = true;
            let fin = &tuning.finale_burst;
            bursts.push(EmitOptions {
                particle_count: fin.particle_count,
                spread: fin.spread,
                start_velocity: fin.start_velocity,
                ticks: fin.ticks,
                origin: Vec2::new(fin.origin_x, fin.origin_y),
            });
        }

        bursts
    }

    /// True once the session window has elapsed and the finale has fired.
    /// Particles already in flight outlive the schedule.
    pub fn is_done(&self, now_ms: f64) -> bool {
        self.finale_fired && now_ms >= self.frame_until
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    #[test]
    fn test_frame_bursts_cover_the_session_window() {
        let tuning = Tuning::default();
        let mut schedule = CelebrationSchedule::start(0.0, &tuning);
        let mut rng = rng();

        // Sampled at a 16 ms cadence, every poll inside [0, 1600) emits a
        // frame burst with the fixed parameters
        let mut now = 0.0;
        while now < tuning.session_ms {
            let bursts = schedule.poll(now, &tuning, &mut rng);
            let frame = bursts
                .iter()
                .find(|b| b.particle_count == tuning.frame_burst.particle_count)
                .expect("frame burst due inside the session window");
            assert_eq!(frame.spread, 90.0);
            assert_eq!(frame.start_velocity, 45.0);
            assert_eq!(frame.ticks, 180);
            assert!((0.0..=1.0).contains(&frame.origin.x));
            assert!((0.0..=0.3).contains(&frame.origin.y));
            now += 16.0;
        }

        // Window closed: no more frame bursts
        assert!(schedule.poll(now, &tuning, &mut rng).is_empty());
        assert!(schedule.is_done(now));
    }

    #[test]
    fn test_finale_fires_exactly_once() {
        let tuning = Tuning::default();
        let mut schedule = CelebrationSchedule::start(0.0, &tuning);
        let mut rng = rng();

        let mut finales = 0;
        let mut now = 0.0;
        while now < 3000.0 {
            for burst in schedule.poll(now, &tuning, &mut rng) {
                if burst.particle_count == tuning.finale_burst.particle_count {
                    // First frame at or past the 300 ms delay
                    assert!(now >= tuning.finale_delay_ms);
                    assert!(now < tuning.finale_delay_ms + 16.0);
                    assert_eq!(burst.spread, 140.0);
                    assert_eq!(burst.start_velocity, 60.0);
                    assert_eq!(burst.ticks, 220);
                    assert_eq!(burst.origin, Vec2::new(0.5, 0.55));
                    finales += 1;
                }
            }
            now += 16.0;
        }
        assert_eq!(finales, 1);
    }

    #[test]
    fn test_no_bursts_before_start_catches_up() {
        // A first poll long after start still fires the finale once and
        // nothing else keeps the schedule alive
        let tuning = Tuning::default();
        let mut schedule = CelebrationSchedule::start(0.0, &tuning);
        let mut rng = rng();

        let bursts = schedule.poll(5000.0, &tuning, &mut rng);
        assert_eq!(bursts.len(), 1);
        assert_eq!(
            bursts[0].particle_count,
            tuning.finale_burst.particle_count
        );
        assert!(schedule.is_done(5000.0));
    }

    #[test]
    fn test_deterministic_origins() {
        let tuning = Tuning::default();
        let mut a = CelebrationSchedule::start(0.0, &tuning);
        let mut b = CelebrationSchedule::start(0.0, &tuning);
        let mut rng_a = rng();
        let mut rng_b = rng();

        for step in 0..20 {
            let now = step as f64 * 16.0;
            let ba = a.poll(now, &tuning, &mut rng_a);
            let bb = b.poll(now, &tuning, &mut rng_b);
            assert_eq!(ba.len(), bb.len());
            for (x, y) in ba.iter().zip(&bb) {
                assert_eq!(x.origin, y.origin);
            }
        }
    }
}
