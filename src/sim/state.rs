//! Card state and core types
//!
//! Everything the page needs to decide what to render lives here: the
//! one-way prompt/completed state machine, the decline button placement,
//! and the accept button scale.

use glam::Vec2;

use super::evade::{AcceptScale, evade_step};
use super::rect::Rect;

/// Current phase of the card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPhase {
    /// Prompt visible, buttons live
    Prompting,
    /// Accepted - celebration branch visible. Terminal.
    Completed,
}

/// Where the decline button currently sits
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeclinePlacement {
    /// Initial sentinel - the stylesheet centers the button, no inline offset
    Centered,
    /// Free placement as a zone-relative offset in pixels
    At(Vec2),
}

/// Complete card state
#[derive(Debug, Clone, PartialEq)]
pub struct CardState {
    pub phase: CardPhase,
    pub decline: DeclinePlacement,
    pub accept_scale: AcceptScale,
}

impl Default for CardState {
    fn default() -> Self {
        Self {
            phase: CardPhase::Prompting,
            decline: DeclinePlacement::Centered,
            accept_scale: AcceptScale::default(),
        }
    }
}

impl CardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a pointer move over the button zone.
    ///
    /// `zone` and `button` are resolved from live layout by the caller on
    /// every event. Returns the new zone-relative offset when the button
    /// evaded (the caller commits it to the element's styles), `None` when
    /// nothing changed. Growing the accept scale is a side effect of any
    /// displacement. Ignored entirely once the card is completed.
    pub fn pointer_moved(&mut self, pointer: Vec2, zone: &Rect, button: &Rect) -> Option<Vec2> {
        if self.phase != CardPhase::Prompting {
            return None;
        }

        let offset = evade_step(pointer, zone, button)?;
        self.decline = DeclinePlacement::At(offset);
        self.accept_scale.grow();
        Some(offset)
    }

    /// Accept the proposal. Returns `true` only on the single
    /// `Prompting -> Completed` transition; later calls are no-ops, so a
    /// celebration can never be triggered twice even if a stray activation
    /// reaches a torn-down button.
    pub fn accept(&mut self) -> bool {
        match self.phase {
            CardPhase::Prompting => {
                self.phase = CardPhase::Completed;
                true
            }
            CardPhase::Completed => false,
        }
    }

    /// A direct activation attempt on the decline button. Always refused.
    pub fn decline_rejected(&self) {
        log::debug!("decline click intercepted - the No button cannot be accepted");
    }
}
