use glam::Vec2;
use parking_lot::RwLock;

/// Pixels represented by one wheel "line" tick.
pub const LINE_HEIGHT_PX: f32 = 40.0;

/// Thread-safe snapshot of pointer and scroll input.
///
/// The window event handler writes into it; the orbit controls and the
/// scroll handler read from it once per trigger. The scroll offset follows
/// the page-top convention: it decreases as the user scrolls down.
#[derive(Debug, Default)]
pub struct PointerState {
    dragging: RwLock<bool>,
    position: RwLock<Vec2>,
    drag_delta: RwLock<Vec2>,
    scroll_offset: RwLock<f32>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a primary-button press or release.
    pub fn set_dragging(&self, dragging: bool) {
        *self.dragging.write() = dragging;
    }

    pub fn is_dragging(&self) -> bool {
        *self.dragging.read()
    }

    /// Records a pointer move; while the button is held the motion is
    /// accumulated for the orbit controls to consume.
    pub fn move_to(&self, position: Vec2) {
        let previous = {
            let mut guard = self.position.write();
            let previous = *guard;
            *guard = position;
            previous
        };
        if self.is_dragging() {
            *self.drag_delta.write() += position - previous;
        }
    }

    pub fn position(&self) -> Vec2 {
        *self.position.read()
    }

    /// Returns and clears the drag motion accumulated since the last call.
    pub fn take_drag_delta(&self) -> Vec2 {
        std::mem::take(&mut *self.drag_delta.write())
    }

    /// Applies a wheel movement in pixels and returns the new offset.
    pub fn add_scroll(&self, delta_px: f32) -> f32 {
        let mut guard = self.scroll_offset.write();
        *guard += delta_px;
        *guard
    }

    pub fn scroll_offset(&self) -> f32 {
        *self.scroll_offset.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_delta_accumulates_only_while_dragging() {
        let state = PointerState::new();
        state.move_to(Vec2::new(10.0, 10.0));
        assert_eq!(state.take_drag_delta(), Vec2::ZERO);

        state.set_dragging(true);
        state.move_to(Vec2::new(15.0, 12.0));
        state.move_to(Vec2::new(20.0, 12.0));
        assert_eq!(state.take_drag_delta(), Vec2::new(10.0, 2.0));
        // Consumed.
        assert_eq!(state.take_drag_delta(), Vec2::ZERO);
    }

    #[test]
    fn scroll_offset_accumulates_in_both_directions() {
        let state = PointerState::new();
        assert_eq!(state.add_scroll(-120.0), -120.0);
        assert_eq!(state.add_scroll(200.0), 80.0);
        assert_eq!(state.scroll_offset(), 80.0);
    }
}
