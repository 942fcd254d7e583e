//! Pure view-state computation
//!
//! Everything a slider shows is a function of its mode, its index and a snapshot
//! of layout measurements. Nothing here touches the element tree.

use serde::Serialize;

use crate::dom::{StyleWidth, Translation};
use crate::types::SliderMode;

/// Layout measurements a render depends on
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutMetrics {
    /// Rendered width of every card, in order
    pub card_widths: Vec<f32>,
    /// Gap between adjacent cards on the track
    pub gap: f32,
    /// Width of the element the track scrolls inside
    pub container_width: f32,
}

/// What the slider should look like for one index
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub mode: SliderMode,
    pub index: usize,
    pub card_count: usize,
    /// Inline width the track must carry, if any
    pub track_width: Option<StyleWidth>,
    pub transform: Translation,
    pub active_card: usize,
    /// `None` when the slider has no dots
    pub active_dot: Option<usize>,
}

impl ViewState {
    /// Pretty-printed JSON, as the headless `render` command prints it
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// CSS `transform` text for the track
    pub fn transform_css(&self) -> String {
        self.transform.to_string()
    }

    pub fn is_card_active(&self, position: usize) -> bool {
        position == self.active_card
    }

    pub fn is_dot_active(&self, position: usize) -> bool {
        self.active_dot == Some(position)
    }
}

/// Leftward shift that centers card `index` inside the container.
///
/// Never negative: the track does not scroll past its first card.
pub fn carousel_offset(index: usize, metrics: &LayoutMetrics) -> f32 {
    let Some(active_width) = metrics.card_widths.get(index) else {
        return 0.0;
    };
    let preceding: f32 = metrics.card_widths[..index]
        .iter()
        .map(|w| w + metrics.gap)
        .sum();
    let center = preceding + active_width / 2.0;
    let offset = center - metrics.container_width / 2.0;
    if offset < 0.0 { 0.0 } else { offset }
}

/// Simple-mode shift, as a percentage of the track width
pub fn simple_offset(index: usize) -> f32 {
    index as f32 * 100.0
}

/// Compute the view for `index`. Returns `None` for an empty slider or an
/// index past the last card.
pub fn compute(
    mode: SliderMode,
    index: usize,
    metrics: &LayoutMetrics,
    dot_count: usize,
) -> Option<ViewState> {
    let card_count = metrics.card_widths.len();
    if index >= card_count {
        return None;
    }

    let (track_width, transform) = match mode {
        SliderMode::Carousel => (
            Some(StyleWidth::MaxContent),
            Translation::Px(carousel_offset(index, metrics)),
        ),
        SliderMode::Simple => (None, Translation::Percent(simple_offset(index))),
    };

    Some(ViewState {
        mode,
        index,
        card_count,
        track_width,
        transform,
        active_card: index,
        active_dot: (index < dot_count).then_some(index),
    })
}
