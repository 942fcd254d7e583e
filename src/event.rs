//! Browser-style input events routed to sliders

use crate::dom::ElementId;

/// Input event, in document pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    Click { target: ElementId },
    TouchStart { target: ElementId, x: f32 },
    /// Delivered to whichever slider has a drag in progress
    TouchEnd { x: f32 },
    MouseDown { target: ElementId, x: f32 },
    /// Document-level; ends a drag even outside the track
    MouseUp { x: f32 },
    /// New viewport width
    Resize { width: f32 },
}

