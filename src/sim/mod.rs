//! Deterministic card logic
//!
//! All behavior decisions live here. This module must be pure and deterministic:
//! - Geometry resolved from caller-supplied rects, never cached layout
//! - Time injected as timestamps, never read from a clock
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod celebrate;
pub mod evade;
pub mod rect;
pub mod state;

pub use celebrate::CelebrationSchedule;
pub use evade::{AcceptScale, evade_step};
pub use rect::Rect;
pub use state::{CardPhase, CardState, DeclinePlacement};
