//! Axis-aligned rectangle geometry for the button zone
//!
//! Rects arrive in viewport coordinates from live layout queries
//! (`getBoundingClientRect` on the web side) and are never cached:
//! the zone and button can both be resized between pointer events.

use glam::Vec2;

/// An axis-aligned rectangle in viewport space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Center point in viewport coordinates
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// This rect's top-left corner expressed relative to `outer`'s top-left
    #[inline]
    pub fn offset_within(&self, outer: &Rect) -> Vec2 {
        Vec2::new(self.left - outer.left, self.top - outer.top)
    }

    /// Check that a rect of this size placed at `offset` (relative to this
    /// rect's top-left) lies fully inside this rect
    pub fn contains_placed(&self, offset: Vec2, size: Vec2) -> bool {
        offset.x >= 0.0
            && offset.y >= 0.0
            && offset.x + size.x <= self.width
            && offset.y + size.y <= self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let r = Rect::new(10.0, 20.0, 40.0, 30.0);
        assert_eq!(r.center(), Vec2::new(30.0, 35.0));
    }

    #[test]
    fn test_offset_within() {
        let zone = Rect::new(100.0, 50.0, 400.0, 300.0);
        let button = Rect::new(200.0, 150.0, 40.0, 30.0);
        assert_eq!(button.offset_within(&zone), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_contains_placed() {
        let zone = Rect::new(0.0, 0.0, 400.0, 300.0);
        let size = Vec2::new(40.0, 30.0);
        assert!(zone.contains_placed(Vec2::new(0.0, 0.0), size));
        assert!(zone.contains_placed(Vec2::new(360.0, 270.0), size));
        assert!(!zone.contains_placed(Vec2::new(361.0, 0.0), size));
        assert!(!zone.contains_placed(Vec2::new(0.0, -1.0), size));
    }
}
