//! Page wiring
//!
//! Owns the element tree and every slider bound to it, initializes the sliders
//! once the content is loaded, and routes input events to whichever slider they
//! concern.

use tracing::{debug, info, trace};

use crate::dom::{Document, ElementId};
use crate::error::{Result, ShowcaseError};
use crate::event::UiEvent;
use crate::slider::{Slider, SliderOptions, ViewState};
use crate::types::{PointerKind, SwipeDirection};

/// A document plus its sliders
#[derive(Debug, Clone)]
pub struct Page {
    document: Document,
    options: Vec<SliderOptions>,
    sliders: Vec<Slider>,
    loaded: bool,
}

impl Page {
    pub fn new(document: Document, options: Vec<SliderOptions>) -> Self {
        Self {
            document,
            options,
            sliders: Vec::new(),
            loaded: false,
        }
    }

    /// Initialize every configured slider. Sliders whose track is missing are
    /// skipped. Calling this twice has no further effect.
    pub fn content_loaded(&mut self) {
        if self.loaded {
            return;
        }
        self.loaded = true;
        for options in &self.options {
            if let Some(slider) = Slider::initialize(&mut self.document, options.clone()) {
                self.sliders.push(slider);
            }
        }
        info!(
            configured = self.options.len(),
            active = self.sliders.len(),
            "page loaded"
        );
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn sliders(&self) -> &[Slider] {
        &self.sliders
    }

    pub fn slider(&self, position: usize) -> Option<&Slider> {
        self.sliders.get(position)
    }

    /// Slider bound to the given track selector
    pub fn slider_by_track(&self, track_selector: &str) -> Option<usize> {
        self.sliders
            .iter()
            .position(|s| s.options().track_selector == track_selector)
    }

    pub fn view(&self, position: usize) -> Option<ViewState> {
        self.sliders.get(position)?.view(&self.document)
    }

    /// Slider whose subtree or controls contain `target`
    pub fn slider_for(&self, target: ElementId) -> Option<usize> {
        self.sliders
            .iter()
            .position(|s| s.owns(&self.document, target))
    }

    pub fn go_to(&mut self, position: usize, index: usize) -> Option<usize> {
        let slider = self.sliders.get_mut(position)?;
        Some(slider.go_to(&mut self.document, index))
    }

    pub fn next(&mut self, position: usize) -> Option<usize> {
        let slider = self.sliders.get_mut(position)?;
        Some(slider.next(&mut self.document))
    }

    pub fn prev(&mut self, position: usize) -> Option<usize> {
        let slider = self.sliders.get_mut(position)?;
        Some(slider.prev(&mut self.document))
    }

    /// End whichever drag is in progress. Returns the swipe it amounted to, if any.
    pub fn end_drag(&mut self, x: f32, pointer: PointerKind) -> Option<SwipeDirection> {
        let mut swiped = None;
        for slider in &mut self.sliders {
            let direction = slider.end_drag(&mut self.document, x, pointer);
            swiped = swiped.or(direction);
        }
        swiped
    }

    /// Navigate the slider on `track_selector` to `index` and report its view
    pub fn snapshot(&mut self, track_selector: &str, index: usize) -> Result<ViewState> {
        let position = self
            .slider_by_track(track_selector)
            .ok_or_else(|| ShowcaseError::selector(track_selector, "no slider on this track"))?;
        let len = self.sliders[position].len();
        if index >= len {
            return Err(ShowcaseError::state(format!(
                "index {} out of range for {} cards",
                index, len
            )));
        }
        self.go_to(position, index);
        self.view(position)
            .ok_or_else(|| ShowcaseError::state("slider has no view"))
    }

    /// Deliver one event. Returns whether any slider reacted.
    pub fn dispatch(&mut self, event: UiEvent) -> bool {
        trace!(?event, "dispatch");
        match event {
            UiEvent::Resize { width } => {
                self.document.set_viewport_width(width);
                for slider in &mut self.sliders {
                    slider.handle_event(&mut self.document, &event);
                }
                debug!(width, "re-rendered sliders after resize");
                !self.sliders.is_empty()
            }
            UiEvent::Click { target }
            | UiEvent::TouchStart { target, .. }
            | UiEvent::MouseDown { target, .. } => match self.slider_for(target) {
                Some(position) => self.sliders[position].handle_event(&mut self.document, &event),
                None => false,
            },
            // Releases go to every slider; only one with a drag in progress reacts.
            UiEvent::TouchEnd { .. } | UiEvent::MouseUp { .. } => {
                let mut handled = false;
                for slider in &mut self.sliders {
                    handled |= slider.handle_event(&mut self.document, &event);
                }
                handled
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_file::ShowcaseConfig;

    fn loaded_default() -> Page {
        let mut page = ShowcaseConfig::default().build_page();
        page.content_loaded();
        page
    }

    #[test]
    fn default_page_has_both_sliders() {
        let page = loaded_default();
        assert_eq!(page.sliders().len(), 2);
        assert_eq!(page.slider_by_track(".slider-track"), Some(0));
        assert_eq!(page.slider_by_track(".case-track"), Some(1));
    }

    #[test]
    fn content_loaded_is_idempotent() {
        let mut page = loaded_default();
        let dots_before = page.document().query_selector_all(".dot").len();
        page.content_loaded();
        assert_eq!(page.sliders().len(), 2);
        assert_eq!(page.document().query_selector_all(".dot").len(), dots_before);
    }

    #[test]
    fn click_routes_to_owning_slider() {
        let mut page = loaded_default();
        let next = page.slider(1).unwrap().next_button().unwrap();
        assert!(page.dispatch(UiEvent::Click { target: next }));
        assert_eq!(page.slider(1).unwrap().current_index(), 1);
        assert_eq!(page.slider(0).unwrap().current_index(), 0);
    }

    #[test]
    fn unknown_target_is_ignored() {
        let mut page = loaded_default();
        let stray = page.document().query_selector(".page-header").unwrap();
        assert!(!page.dispatch(UiEvent::Click { target: stray }));
        assert!(!page.dispatch(UiEvent::MouseUp { x: 0.0 }));
    }

    #[test]
    fn snapshot_navigates_and_reports() {
        let mut page = loaded_default();
        let view = page.snapshot(".case-track", 2).unwrap();
        assert_eq!(view.index, 2);
        assert_eq!(view.transform_css(), "translateX(-200%)");
        assert_eq!(page.slider(1).unwrap().current_index(), 2);

        assert!(page.snapshot(".case-track", 9).is_err());
        assert!(matches!(
            page.snapshot(".missing", 0),
            Err(ShowcaseError::Selector { .. })
        ));
    }
}
