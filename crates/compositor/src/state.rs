//! Interactive photo transform state

/// Lower zoom bound.
pub const MIN_SCALE: f32 = 0.3;
/// Upper zoom bound.
pub const MAX_SCALE: f32 = 3.0;

const WHEEL_STEP: f32 = 0.05;
const PINCH_SENSITIVITY: f32 = 0.005;

#[derive(Debug, Clone, Copy)]
struct DragSession {
    start_x: f32,
    start_y: f32,
    base_offset_x: f32,
    base_offset_y: f32,
}

/// Zoom and pan state of the uploaded photo, plus gesture scratch.
///
/// Scale and offsets are only meaningful while a photo is loaded; the
/// compositor resets them to identity on every new upload. Drag and
/// pinch scratch state lives only between gesture start and release.
#[derive(Debug, Clone)]
pub struct InteractionState {
    scale: f32,
    offset_x: f32,
    offset_y: f32,
    drag: Option<DragSession>,
    last_pinch_dist: Option<f32>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            drag: None,
            last_pinch_dist: None,
        }
    }

    /// Restore identity transform and drop any open gesture.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Pan offset in template pixels.
    pub fn offset(&self) -> (f32, f32) {
        (self.offset_x, self.offset_y)
    }

    /// Open a drag session at the given cursor position (template pixels).
    pub fn begin_drag(&mut self, x: f32, y: f32) {
        self.drag = Some(DragSession {
            start_x: x,
            start_y: y,
            base_offset_x: self.offset_x,
            base_offset_y: self.offset_y,
        });
    }

    /// Update the pan offset from the current cursor position.
    ///
    /// Returns false (and does nothing) when no drag session is open.
    pub fn drag_to(&mut self, x: f32, y: f32) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        self.offset_x = drag.base_offset_x + (x - drag.start_x);
        self.offset_y = drag.base_offset_y + (y - drag.start_y);
        true
    }

    /// Close the drag session (pointer up or leave).
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Apply one wheel notch: scroll up zooms in, down zooms out.
    pub fn wheel_zoom(&mut self, delta_y: f32) {
        let step = if delta_y < 0.0 { WHEEL_STEP } else { -WHEEL_STEP };
        self.set_scale(self.scale + step);
    }

    /// Feed the current two-finger distance of an open pinch gesture.
    ///
    /// The first sample of a gesture only primes the reference distance.
    pub fn pinch(&mut self, dist: f32) {
        if let Some(last) = self.last_pinch_dist {
            self.set_scale(self.scale + (dist - last) * PINCH_SENSITIVITY);
        }
        self.last_pinch_dist = Some(dist);
    }

    /// Close the pinch gesture (a finger lifted).
    pub fn end_pinch(&mut self) {
        self.last_pinch_dist = None;
    }

    fn set_scale(&mut self, scale: f32) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scale_is_clamped_under_repeated_wheel_events() {
        let mut state = InteractionState::new();
        for _ in 0..200 {
            state.wheel_zoom(-120.0);
        }
        assert_eq!(state.scale(), MAX_SCALE);

        for _ in 0..200 {
            state.wheel_zoom(120.0);
        }
        assert_eq!(state.scale(), MIN_SCALE);
    }

    #[test]
    fn drag_moves_offset_relative_to_session_origin() {
        let mut state = InteractionState::new();
        state.begin_drag(100.0, 100.0);
        assert!(state.drag_to(130.0, 90.0));
        assert_eq!(state.offset(), (30.0, -10.0));

        // A second drag builds on the offset left by the first.
        state.end_drag();
        state.begin_drag(0.0, 0.0);
        assert!(state.drag_to(5.0, 5.0));
        assert_eq!(state.offset(), (35.0, -5.0));
    }

    #[test]
    fn drag_without_session_is_ignored() {
        let mut state = InteractionState::new();
        assert!(!state.drag_to(50.0, 50.0));
        assert_eq!(state.offset(), (0.0, 0.0));
    }

    #[test]
    fn pinch_first_sample_only_primes() {
        let mut state = InteractionState::new();
        state.pinch(100.0);
        assert_eq!(state.scale(), 1.0);
        state.pinch(200.0);
        assert!((state.scale() - 1.5).abs() < 1e-6);
        state.end_pinch();

        // A fresh gesture primes again instead of jumping.
        state.pinch(100.0);
        assert!((state.scale() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn reset_restores_identity_exactly() {
        let mut state = InteractionState::new();
        state.begin_drag(0.0, 0.0);
        state.drag_to(42.0, -17.0);
        state.wheel_zoom(-1.0);
        state.reset();

        assert_eq!(state.scale(), 1.0);
        assert_eq!(state.offset(), (0.0, 0.0));
        assert!(!state.is_dragging());
    }
}
