//! Window viewport tracking with platform quirks normalized.
//!
//! Wayland reports zero-size windows before the compositor assigns a
//! size, and DPI changes on macOS/Windows alter physical dimensions
//! without a logical resize. The viewport clamps and dedupes so the rest
//! of the renderer only ever sees valid, changed dimensions.

/// Minimum surface dimension (prevents zero-size panics).
pub const MIN_SURFACE_DIMENSION: u32 = 1;

/// Tracks the physical pixel size and scale factor of the widget's
/// window.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    width: u32,
    height: u32,
    scale_factor: f64,
}

impl Viewport {
    /// Creates a viewport from initial physical dimensions, clamping
    /// zero sizes to 1x1.
    #[must_use]
    pub fn new(width: u32, height: u32, scale_factor: f64) -> Self {
        Self {
            width: width.max(MIN_SURFACE_DIMENSION),
            height: height.max(MIN_SURFACE_DIMENSION),
            scale_factor,
        }
    }

    /// Handles a window resize. Returns the new clamped dimensions if
    /// they actually changed, `None` for duplicate events.
    pub fn handle_resize(&mut self, width: u32, height: u32) -> Option<(u32, u32)> {
        let width = width.max(MIN_SURFACE_DIMENSION);
        let height = height.max(MIN_SURFACE_DIMENSION);
        if width == self.width && height == self.height {
            return None;
        }
        self.width = width;
        self.height = height;
        Some((width, height))
    }

    /// Handles a scale factor change. The physical size changes even
    /// when the logical size stays the same, so this is a resize too.
    pub fn handle_scale_factor_changed(
        &mut self,
        scale_factor: f64,
        width: u32,
        height: u32,
    ) -> Option<(u32, u32)> {
        self.scale_factor = scale_factor;
        self.handle_resize(width, height)
    }

    /// Physical pixel width, always at least 1.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Physical pixel height, always at least 1.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width over height, for the projection matrix.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Physical pixels per logical pixel.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_window_clamped_to_one() {
        let viewport = Viewport::new(0, 0, 1.0);
        assert_eq!(viewport.width(), 1);
        assert_eq!(viewport.height(), 1);
    }

    #[test]
    fn test_resize_reports_new_dimensions() {
        let mut viewport = Viewport::new(1, 1, 1.0);
        assert_eq!(viewport.handle_resize(1920, 1080), Some((1920, 1080)));
        assert_eq!(viewport.width(), 1920);
        assert_eq!(viewport.height(), 1080);
    }

    #[test]
    fn test_duplicate_resize_is_swallowed() {
        let mut viewport = Viewport::new(800, 600, 1.0);
        assert_eq!(viewport.handle_resize(800, 600), None);
    }

    #[test]
    fn test_resize_to_zero_clamps() {
        let mut viewport = Viewport::new(800, 600, 1.0);
        assert_eq!(viewport.handle_resize(0, 0), Some((1, 1)));
    }

    #[test]
    fn test_scale_factor_change_is_a_resize() {
        let mut viewport = Viewport::new(1920, 1080, 1.0);
        let changed = viewport.handle_scale_factor_changed(2.0, 3840, 2160);
        assert_eq!(changed, Some((3840, 2160)));
        assert_eq!(viewport.scale_factor(), 2.0);
    }

    #[test]
    fn test_aspect_ratio() {
        let viewport = Viewport::new(1920, 1080, 1.0);
        assert!((viewport.aspect_ratio() - 16.0 / 9.0).abs() < 1e-6);
    }
}
