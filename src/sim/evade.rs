//! Pointer evasion for the decline button
//!
//! The tricky part of the card: on every pointer move we measure the
//! distance to the button's center from live layout, and when the pointer
//! gets close the button is pushed away inside the zone while the accept
//! button grows.

use glam::Vec2;

use super::rect::Rect;
use crate::consts::*;
use crate::unit_away;

/// One evasion step for the decline button.
///
/// `zone` and `button` are the current bounding rects in viewport space,
/// resolved fresh by the caller. Returns the new zone-relative offset for
/// the button, or `None` when the pointer is not close enough to react.
///
/// The offset is clamped per axis to `[0, zone_dim - button_dim]` so the
/// button always lands fully inside the zone; the clamp ceiling floors at
/// zero for a zone smaller than the button.
pub fn evade_step(pointer: Vec2, zone: &Rect, button: &Rect) -> Option<Vec2> {
    let center = button.center();
    if pointer.distance(center) >= EVADE_TRIGGER_DIST {
        return None;
    }

    let dir = unit_away(pointer, center);
    let candidate = button.offset_within(zone) + dir * EVADE_PUSH_DIST;

    let max_x = (zone.width - button.width).max(0.0);
    let max_y = (zone.height - button.height).max(0.0);
    Some(Vec2::new(
        candidate.x.clamp(0.0, max_x),
        candidate.y.clamp(0.0, max_y),
    ))
}

/// Visual scale of the accept button, grown as a side effect of evasion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcceptScale(f32);

impl Default for AcceptScale {
    fn default() -> Self {
        Self(ACCEPT_SCALE_START)
    }
}

impl AcceptScale {
    /// Grow by one step, capped at the ceiling
    pub fn grow(&mut self) {
        self.0 = (self.0 + ACCEPT_SCALE_STEP).min(ACCEPT_SCALE_MAX);
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.0
    }
}
