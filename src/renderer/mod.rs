//! Drawing surface management and confetti rendering
//!
//! The pixel buffer tracks the viewport size times the device pixel ratio
//! so confetti stays crisp on high-density screens. The sizing rule is
//! pure and platform-free; the canvas drawing itself is wasm-only.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

/// Pixel buffer dimension for one viewport axis.
///
/// The device pixel ratio floors at 1 so a zoomed-out page never
/// under-allocates the surface.
pub fn buffer_size(viewport: f64, device_pixel_ratio: f64) -> u32 {
    (viewport * device_pixel_ratio.max(1.0)).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_size_scales_by_ratio() {
        assert_eq!(buffer_size(800.0, 2.0), 1600);
        assert_eq!(buffer_size(1024.0, 1.5), 1536);
    }

    #[test]
    fn test_buffer_size_floors_fractions() {
        assert_eq!(buffer_size(333.0, 1.25), 416); // 416.25
    }

    #[test]
    fn test_ratio_never_below_one() {
        assert_eq!(buffer_size(800.0, 0.5), 800);
        assert_eq!(buffer_size(800.0, 0.0), 800);
    }
}
