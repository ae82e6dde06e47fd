//! Frame-coherent pointer state.
//!
//! [`PointerState`] accumulates winit cursor and button events during a
//! frame and exposes the position and a click edge for picking.

use glam::Vec2;
use winit::event::{ElementState, MouseButton};

/// Frame-coherent pointer state.
///
/// # Usage
///
/// 1. Forward winit events via the `on_*` methods during event collection.
/// 2. Query state with the public accessors.
/// 3. Call [`clear_transients`](Self::clear_transients) at end of frame.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    position: Vec2,
    just_clicked: bool,
    cursor_in_window: bool,
}

impl PointerState {
    /// Creates a pointer state with all fields zeroed/false.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a `CursorMoved` event (physical pixel coordinates).
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
        self.position = Vec2::new(x as f32, y as f32);
        self.cursor_in_window = true;
    }

    /// Process a `CursorLeft` event.
    pub fn on_cursor_left(&mut self) {
        self.cursor_in_window = false;
    }

    /// Process a `MouseInput` event. Only left-button presses register
    /// as clicks.
    pub fn on_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left && state == ElementState::Pressed {
            self.just_clicked = true;
        }
    }

    /// Clears the per-frame click edge.
    pub fn clear_transients(&mut self) {
        self.just_clicked = false;
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Whether the left button was pressed this frame while the cursor
    /// was inside the window.
    #[must_use]
    pub fn just_clicked(&self) -> bool {
        self.just_clicked && self.cursor_in_window
    }

    /// Cursor position in normalized device coordinates for the given
    /// surface size: x right, y up, both in [-1, 1] inside the window.
    #[must_use]
    pub fn ndc(&self, width: u32, height: u32) -> Vec2 {
        Vec2::new(
            2.0 * self.position.x / width.max(1) as f32 - 1.0,
            1.0 - 2.0 * self.position.y / height.max(1) as f32,
        )
    }
}
