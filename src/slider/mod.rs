//! Carousel controller
//!
//! A [`Slider`] binds to a track, its cards, optional prev/next buttons and an
//! optional dot container, and owns the one index they all agree on.
//!
//! # Module Structure
//! - `view` - pure mapping from index + measurements to a [`ViewState`]
//! - `gesture` - swipe recognition for touch and mouse drags
//! - Main module - `Slider` and its options
//!
//! Rendering happens in two steps: [`Slider::view`] computes what the slider should
//! look like, then the result is written back onto the element tree (classes and
//! inline styles). Buttons wrap around; swipes clamp at either end.

pub mod gesture;
pub mod view;

pub use gesture::{GestureRecognizer, DEFAULT_SWIPE_THRESHOLD};
pub use view::{LayoutMetrics, ViewState};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::dom::{Document, ElementId, StyleWidth};
use crate::event::UiEvent;
use crate::types::{Cursor, PointerKind, SliderMode, SwipeDirection};

fn default_dot_class() -> String {
    "dot".to_string()
}

fn default_active_class() -> String {
    "active".to_string()
}

fn default_swipe_threshold() -> f32 {
    DEFAULT_SWIPE_THRESHOLD
}

/// Which elements a slider binds to and how it behaves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderOptions {
    pub track_selector: String,
    pub card_selector: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_button_selector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_button_selector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dots_container_selector: Option<String>,
    #[serde(default = "default_dot_class")]
    pub dot_class: String,
    #[serde(default = "default_active_class")]
    pub active_class: String,
    #[serde(default)]
    pub mode: SliderMode,
    /// Enable drag/swipe navigation on the track
    #[serde(default)]
    pub swipe: bool,
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f32,
}

impl SliderOptions {
    pub fn new(track_selector: impl Into<String>, card_selector: impl Into<String>) -> Self {
        Self {
            track_selector: track_selector.into(),
            card_selector: card_selector.into(),
            next_button_selector: None,
            prev_button_selector: None,
            dots_container_selector: None,
            dot_class: default_dot_class(),
            active_class: default_active_class(),
            mode: SliderMode::default(),
            swipe: false,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }

    pub fn with_buttons(mut self, next: impl Into<String>, prev: impl Into<String>) -> Self {
        self.next_button_selector = Some(next.into());
        self.prev_button_selector = Some(prev.into());
        self
    }

    pub fn with_dots(mut self, container: impl Into<String>) -> Self {
        self.dots_container_selector = Some(container.into());
        self
    }

    pub fn with_dot_class(mut self, class: impl Into<String>) -> Self {
        self.dot_class = class.into();
        self
    }

    pub fn with_mode(mut self, mode: SliderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_swipe(mut self, threshold: f32) -> Self {
        self.swipe = true;
        self.swipe_threshold = threshold;
        self
    }

    /// Testimonials: centered carousel with buttons and dots
    pub fn testimonials() -> Self {
        Self::new(".slider-track", ".testimonial-card")
            .with_buttons(".slider-btn.next", ".slider-btn.prev")
            .with_dots(".slider-dots")
            .with_mode(SliderMode::Carousel)
    }

    /// Case studies: full-width panels, swipeable
    pub fn case_studies() -> Self {
        Self::new(".case-track", ".case-card")
            .with_buttons(".case-slider-btn.next", ".case-slider-btn.prev")
            .with_dots(".case-slider-dots")
            .with_dot_class("case-dot")
            .with_mode(SliderMode::Simple)
            .with_swipe(DEFAULT_SWIPE_THRESHOLD)
    }

    /// Every selector the options reference, labelled by role
    pub fn selectors(&self) -> Vec<(&'static str, &str)> {
        let mut out = vec![
            ("track", self.track_selector.as_str()),
            ("card", self.card_selector.as_str()),
        ];
        if let Some(s) = &self.next_button_selector {
            out.push(("next button", s));
        }
        if let Some(s) = &self.prev_button_selector {
            out.push(("prev button", s));
        }
        if let Some(s) = &self.dots_container_selector {
            out.push(("dots container", s));
        }
        out
    }
}

fn resolve(doc: &Document, selector: Option<&str>) -> Option<ElementId> {
    selector.and_then(|s| doc.query_selector(s))
}

/// One carousel instance bound to its own subtree
#[derive(Debug, Clone)]
pub struct Slider {
    options: SliderOptions,
    track: ElementId,
    cards: Vec<ElementId>,
    next_button: Option<ElementId>,
    prev_button: Option<ElementId>,
    dots_container: Option<ElementId>,
    dots: Vec<ElementId>,
    current_index: usize,
    gesture: Option<GestureRecognizer>,
}

impl Slider {
    /// Bind to the document, build the dots and render index 0.
    ///
    /// Returns `None` when the track is not on the page.
    pub fn initialize(doc: &mut Document, options: SliderOptions) -> Option<Self> {
        let Some(track) = doc.query_selector(&options.track_selector) else {
            debug!(track = %options.track_selector, "track not found, skipping slider");
            return None;
        };

        let cards = doc.query_selector_all(&options.card_selector);
        let next_button = resolve(doc, options.next_button_selector.as_deref());
        let prev_button = resolve(doc, options.prev_button_selector.as_deref());
        let dots_container = resolve(doc, options.dots_container_selector.as_deref());

        let mut dots = Vec::new();
        if let Some(container) = dots_container {
            for position in 0..cards.len() {
                let dot = doc.create_element("div");
                doc.add_class(dot, &options.dot_class);
                if position == 0 {
                    doc.add_class(dot, &options.active_class);
                }
                doc.append_child(container, dot);
            }
            dots = doc.query_selector_all_within(container, &format!(".{}", options.dot_class));
        }

        let gesture = options.swipe.then(|| {
            if let Some(style) = doc.style_mut(track) {
                style.cursor = Some(Cursor::Grab);
            }
            GestureRecognizer::new(options.swipe_threshold)
        });

        info!(
            track = %options.track_selector,
            mode = %options.mode,
            cards = cards.len(),
            dots = dots.len(),
            swipe = options.swipe,
            "slider initialized"
        );

        let slider = Self {
            options,
            track,
            cards,
            next_button,
            prev_button,
            dots_container,
            dots,
            current_index: 0,
            gesture,
        };
        slider.render(doc);
        Some(slider)
    }

    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    pub fn mode(&self) -> SliderMode {
        self.options.mode
    }

    pub fn track(&self) -> ElementId {
        self.track
    }

    pub fn cards(&self) -> &[ElementId] {
        &self.cards
    }

    pub fn dots(&self) -> &[ElementId] {
        &self.dots
    }

    pub fn next_button(&self) -> Option<ElementId> {
        self.next_button
    }

    pub fn prev_button(&self) -> Option<ElementId> {
        self.prev_button
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.as_ref().is_some_and(|g| g.is_dragging())
    }

    /// Jump to `index` and re-render. Out-of-range indices are ignored.
    pub fn go_to(&mut self, doc: &mut Document, index: usize) -> usize {
        if index >= self.cards.len() {
            debug!(index, cards = self.cards.len(), "ignoring out-of-range index");
            return self.current_index;
        }
        self.current_index = index;
        self.render(doc);
        self.current_index
    }

    /// Advance one card, wrapping from the last to the first
    pub fn next(&mut self, doc: &mut Document) -> usize {
        let count = self.cards.len();
        if count == 0 {
            return self.current_index;
        }
        self.go_to(doc, (self.current_index + 1) % count)
    }

    /// Go back one card, wrapping from the first to the last
    pub fn prev(&mut self, doc: &mut Document) -> usize {
        let count = self.cards.len();
        if count == 0 {
            return self.current_index;
        }
        self.go_to(doc, (self.current_index + count - 1) % count)
    }

    /// Step in response to a swipe. Stops at either end instead of wrapping.
    pub fn swipe(&mut self, doc: &mut Document, direction: SwipeDirection) -> usize {
        if self.cards.is_empty() {
            return self.current_index;
        }
        let last = self.cards.len() - 1;
        let target = match direction {
            SwipeDirection::Next => (self.current_index + 1).min(last),
            SwipeDirection::Previous => self.current_index.saturating_sub(1),
        };
        debug!(%direction, from = self.current_index, to = target, "swipe");
        self.go_to(doc, target)
    }

    /// Snapshot the measurements the current mode needs
    pub fn metrics(&self, doc: &Document) -> LayoutMetrics {
        let container_width = match doc.parent(self.track) {
            Some(container) => doc.offset_width(container),
            None => doc.viewport_width(),
        };
        LayoutMetrics {
            card_widths: self.cards.iter().map(|c| doc.offset_width(*c)).collect(),
            gap: doc.computed_gap(self.track),
            container_width,
        }
    }

    /// What the slider currently looks like; `None` without cards
    pub fn view(&self, doc: &Document) -> Option<ViewState> {
        view::compute(
            self.options.mode,
            self.current_index,
            &self.metrics(doc),
            self.dots.len(),
        )
    }

    /// Recompute layout-dependent state and write it onto the element tree
    pub fn render(&self, doc: &mut Document) {
        if self.cards.is_empty() {
            return;
        }
        // Cards are measured against the shrink-wrapped track.
        if self.options.mode == SliderMode::Carousel {
            if let Some(style) = doc.style_mut(self.track) {
                style.width = Some(StyleWidth::MaxContent);
            }
        }
        if let Some(state) = self.view(doc) {
            self.apply(doc, &state);
        }
    }

    fn apply(&self, doc: &mut Document, state: &ViewState) {
        if let Some(style) = doc.style_mut(self.track) {
            if state.track_width.is_some() {
                style.width = state.track_width;
            }
            style.transform = Some(state.transform);
        }

        let active = self.options.active_class.as_str();
        for (position, card) in self.cards.iter().enumerate() {
            if state.is_card_active(position) {
                doc.add_class(*card, active);
            } else {
                doc.remove_class(*card, active);
            }
        }
        for (position, dot) in self.dots.iter().enumerate() {
            if state.is_dot_active(position) {
                doc.add_class(*dot, active);
            } else {
                doc.remove_class(*dot, active);
            }
        }
    }

    /// Whether `target` belongs to this slider's subtree or controls
    pub fn owns(&self, doc: &Document, target: ElementId) -> bool {
        let inside = |root: ElementId| doc.is_inclusive_descendant(target, root);
        inside(self.track)
            || self.next_button.is_some_and(inside)
            || self.prev_button.is_some_and(inside)
            || self.dots_container.is_some_and(inside)
    }

    fn handle_click(&mut self, doc: &mut Document, target: ElementId) -> bool {
        if let Some(position) = self.dots.iter().position(|d| *d == target) {
            self.go_to(doc, position);
            return true;
        }
        if self
            .next_button
            .is_some_and(|b| doc.is_inclusive_descendant(target, b))
        {
            self.next(doc);
            return true;
        }
        if self
            .prev_button
            .is_some_and(|b| doc.is_inclusive_descendant(target, b))
        {
            self.prev(doc);
            return true;
        }
        if self.options.mode.selects_on_card_click() {
            let hit = self
                .cards
                .iter()
                .position(|c| doc.is_inclusive_descendant(target, *c));
            if let Some(position) = hit {
                self.go_to(doc, position);
                return true;
            }
        }
        false
    }

    fn begin_drag(
        &mut self,
        doc: &mut Document,
        target: ElementId,
        x: f32,
        pointer: PointerKind,
    ) -> bool {
        if !doc.is_inclusive_descendant(target, self.track) {
            return false;
        }
        let Some(gesture) = self.gesture.as_mut() else {
            return false;
        };
        gesture.begin_drag(x);
        if pointer == PointerKind::Mouse {
            if let Some(style) = doc.style_mut(self.track) {
                style.cursor = Some(Cursor::Grabbing);
            }
        }
        true
    }

    /// Finish a drag in progress. Returns the swipe it amounted to, if any;
    /// a drag shorter than the threshold ends without navigating.
    pub fn end_drag(
        &mut self,
        doc: &mut Document,
        x: f32,
        pointer: PointerKind,
    ) -> Option<SwipeDirection> {
        let gesture = self.gesture.as_mut()?;
        if !gesture.is_dragging() {
            return None;
        }
        let direction = gesture.end_drag(x);
        if pointer == PointerKind::Mouse {
            if let Some(style) = doc.style_mut(self.track) {
                style.cursor = Some(Cursor::Grab);
            }
        }
        if let Some(direction) = direction {
            self.swipe(doc, direction);
        }
        direction
    }

    /// React to one input event. Returns whether the event concerned this slider.
    pub fn handle_event(&mut self, doc: &mut Document, event: &UiEvent) -> bool {
        match *event {
            UiEvent::Click { target } => self.handle_click(doc, target),
            UiEvent::TouchStart { target, x } => {
                self.begin_drag(doc, target, x, PointerKind::Touch)
            }
            UiEvent::MouseDown { target, x } => {
                self.begin_drag(doc, target, x, PointerKind::Mouse)
            }
            UiEvent::TouchEnd { x } => {
                let dragging = self.is_dragging();
                self.end_drag(doc, x, PointerKind::Touch);
                dragging
            }
            UiEvent::MouseUp { x } => {
                let dragging = self.is_dragging();
                self.end_drag(doc, x, PointerKind::Mouse);
                dragging
            }
            UiEvent::Resize { .. } => {
                self.render(doc);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Length, Translation};

    /// container(800) > track(gap 24) > cards, plus buttons and a dot container
    fn page(card_widths: &[Option<f32>]) -> Document {
        let mut doc = Document::new(800.0);
        let container = doc.create_element("div");
        doc.set_width(container, Length::Px(800.0));
        doc.append_to_body(container);

        let track = doc.create_element("div");
        doc.add_class(track, "track");
        doc.style_mut(track).unwrap().gap = Some(24.0);
        doc.append_child(container, track);

        for w in card_widths {
            let card = doc.create_element("div");
            doc.add_class(card, "card");
            doc.set_width(card, w.map(Length::Px).unwrap_or(Length::Fill));
            doc.append_child(track, card);
        }

        for class in ["next", "prev"] {
            let btn = doc.create_element("button");
            doc.add_class(btn, "btn");
            doc.add_class(btn, class);
            doc.append_to_body(btn);
        }

        let dots = doc.create_element("div");
        doc.add_class(dots, "dots");
        doc.append_to_body(dots);
        doc
    }

    fn options(mode: SliderMode) -> SliderOptions {
        SliderOptions::new(".track", ".card")
            .with_buttons(".btn.next", ".btn.prev")
            .with_dots(".dots")
            .with_mode(mode)
    }

    fn active_positions(doc: &Document, ids: &[ElementId]) -> Vec<usize> {
        ids.iter()
            .enumerate()
            .filter(|(_, id)| doc.has_class(**id, "active"))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn missing_track_is_a_no_op() {
        let mut doc = page(&[Some(300.0)]);
        let opts = SliderOptions::new(".nowhere", ".card").with_dots(".dots");
        assert!(Slider::initialize(&mut doc, opts).is_none());
        assert!(doc.query_selector(".dot").is_none());
    }

    #[test]
    fn initialize_builds_one_dot_per_card() {
        let mut doc = page(&[Some(300.0); 3]);
        let slider = Slider::initialize(&mut doc, options(SliderMode::Carousel)).unwrap();
        assert_eq!(slider.dots().len(), 3);
        assert_eq!(active_positions(&doc, slider.dots()), vec![0]);
        assert_eq!(active_positions(&doc, slider.cards()), vec![0]);
    }

    #[test]
    fn dots_skipped_without_container() {
        let mut doc = page(&[Some(300.0); 2]);
        let opts = SliderOptions::new(".track", ".card").with_dots(".missing");
        let slider = Slider::initialize(&mut doc, opts).unwrap();
        assert!(slider.dots().is_empty());
    }

    #[test]
    fn empty_slider_renders_nothing() {
        let mut doc = page(&[]);
        let mut slider = Slider::initialize(&mut doc, options(SliderMode::Carousel)).unwrap();
        assert!(slider.is_empty());
        assert!(slider.view(&doc).is_none());
        assert_eq!(slider.next(&mut doc), 0);
        assert_eq!(slider.prev(&mut doc), 0);
        let track = slider.track();
        assert_eq!(doc.style(track).unwrap().transform, None);
    }

    #[test]
    fn carousel_centers_active_card() {
        let mut doc = page(&[Some(300.0); 3]);
        let mut slider = Slider::initialize(&mut doc, options(SliderMode::Carousel)).unwrap();
        let track = slider.track();
        assert_eq!(doc.style(track).unwrap().transform, Some(Translation::Px(0.0)));
        assert_eq!(doc.style(track).unwrap().width, Some(StyleWidth::MaxContent));

        slider.go_to(&mut doc, 2);
        assert_eq!(doc.style(track).unwrap().transform, Some(Translation::Px(398.0)));
    }

    #[test]
    fn simple_mode_moves_by_whole_panels() {
        let mut doc = page(&[None; 4]);
        let mut slider = Slider::initialize(&mut doc, options(SliderMode::Simple)).unwrap();
        slider.go_to(&mut doc, 3);
        let track = slider.track();
        assert_eq!(
            doc.style(track).unwrap().transform,
            Some(Translation::Percent(300.0))
        );
        assert_eq!(doc.style(track).unwrap().width, None);
    }

    #[test]
    fn out_of_range_go_to_keeps_index() {
        let mut doc = page(&[Some(300.0); 2]);
        let mut slider = Slider::initialize(&mut doc, options(SliderMode::Carousel)).unwrap();
        slider.go_to(&mut doc, 1);
        assert_eq!(slider.go_to(&mut doc, 5), 1);
    }

    #[test]
    fn card_click_only_selects_in_carousel_mode() {
        let mut doc = page(&[Some(300.0); 3]);
        let mut slider = Slider::initialize(&mut doc, options(SliderMode::Carousel)).unwrap();
        let target = slider.cards()[2];
        assert!(slider.handle_event(&mut doc, &UiEvent::Click { target }));
        assert_eq!(slider.current_index(), 2);

        let mut doc = page(&[None; 3]);
        let mut slider = Slider::initialize(&mut doc, options(SliderMode::Simple)).unwrap();
        let target = slider.cards()[2];
        assert!(!slider.handle_event(&mut doc, &UiEvent::Click { target }));
        assert_eq!(slider.current_index(), 0);
    }

    #[test]
    fn swipe_requires_gesture_support() {
        let mut doc = page(&[None; 3]);
        let mut slider = Slider::initialize(&mut doc, options(SliderMode::Simple)).unwrap();
        let target = slider.track();
        assert!(!slider.handle_event(&mut doc, &UiEvent::MouseDown { target, x: 300.0 }));
        assert!(!slider.handle_event(&mut doc, &UiEvent::MouseUp { x: 0.0 }));
        assert_eq!(slider.current_index(), 0);
    }

    #[test]
    fn mouse_drag_toggles_cursor() {
        let mut doc = page(&[None; 3]);
        let opts = options(SliderMode::Simple).with_swipe(DEFAULT_SWIPE_THRESHOLD);
        let mut slider = Slider::initialize(&mut doc, opts).unwrap();
        let track = slider.track();
        assert_eq!(doc.style(track).unwrap().cursor, Some(Cursor::Grab));

        slider.handle_event(&mut doc, &UiEvent::MouseDown { target: track, x: 400.0 });
        assert_eq!(doc.style(track).unwrap().cursor, Some(Cursor::Grabbing));
        assert!(slider.is_dragging());

        slider.handle_event(&mut doc, &UiEvent::MouseUp { x: 300.0 });
        assert_eq!(doc.style(track).unwrap().cursor, Some(Cursor::Grab));
        assert_eq!(slider.current_index(), 1);
    }

    #[test]
    fn press_outside_track_does_not_start_drag() {
        let mut doc = page(&[None; 3]);
        let opts = options(SliderMode::Simple).with_swipe(DEFAULT_SWIPE_THRESHOLD);
        let mut slider = Slider::initialize(&mut doc, opts).unwrap();
        let outside = slider.next_button().unwrap();
        slider.handle_event(&mut doc, &UiEvent::TouchStart { target: outside, x: 400.0 });
        assert!(!slider.is_dragging());
    }
}
