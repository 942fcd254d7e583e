//! Swipe recognition
//!
//! A press records where the drag started; the matching release turns the
//! horizontal displacement into a [`SwipeDirection`] once it clears the threshold.
//! Touch and mouse share one dragging flag, so a drag may start with either.

use crate::types::SwipeDirection;

/// Minimum horizontal travel, in pixels, for a release to count as a swipe
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GestureRecognizer {
    threshold: f32,
    drag_start_pos: f32,
    is_dragging: bool,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl GestureRecognizer {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            drag_start_pos: 0.0,
            is_dragging: false,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Touch-start or mouse-down
    pub fn begin_drag(&mut self, x: f32) {
        self.is_dragging = true;
        self.drag_start_pos = x;
    }

    /// Touch-end or mouse-up. Ends the drag whether or not it was a swipe.
    pub fn end_drag(&mut self, x: f32) -> Option<SwipeDirection> {
        if !self.is_dragging {
            return None;
        }
        self.is_dragging = false;
        let diff = self.drag_start_pos - x;
        if diff.abs() <= self.threshold {
            return None;
        }
        if diff > 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Previous)
        }
    }
}
