//! User interface rendering module
//!
//! - `header` - title bar, navigation hints and status line
//! - `slider_panel` - one bordered panel per slider
//!
//! Rendering produces a [`HitMap`] that the application uses to turn mouse
//! positions back into elements of the page.

mod header;
pub mod slider_panel;

use crate::app::{AppMode, AppState};
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::dom::ElementId;
use crate::page::Page;
use crate::theme::UiConstants;
use header::HeaderRenderer;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

/// Screen rectangles and the elements drawn in them, in paint order
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, ElementId)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rect: Rect, element: ElementId) {
        self.regions.push((rect, element));
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Topmost element painted at the given cell
    pub fn element_at(&self, column: u16, row: u16) -> Option<ElementId> {
        self.regions
            .iter()
            .rev()
            .find(|(r, _)| {
                column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
            })
            .map(|(_, id)| *id)
    }

    /// Where an element was painted, if it was
    pub fn rect_of(&self, element: ElementId) -> Option<Rect> {
        self.regions
            .iter()
            .rev()
            .find(|(_, id)| *id == element)
            .map(|(r, _)| *r)
    }
}

/// Terminal columns available to a slider's track, given the full terminal width
pub fn track_columns(terminal_width: u16) -> u16 {
    // Panel borders take one column on each side.
    terminal_width.saturating_sub(2)
}

/// UI renderer for the application
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::default(),
        }
    }

    /// Render the complete UI; returns where each element ended up
    pub fn render(
        &self,
        f: &mut Frame,
        state: &AppState,
        page: &Page,
        keybinding_ctx: &KeybindingContext,
    ) -> HitMap {
        let mut hits = HitMap::new();

        let [header_area, content_area, nav_area, status_area] = Layout::vertical([
            Constraint::Length(UiConstants::HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(UiConstants::FOOTER_HEIGHT - 1),
        ])
        .areas(f.area());

        self.header.render_header(f, header_area);

        let sliders = page.sliders();
        if !sliders.is_empty() {
            let constraints = vec![Constraint::Ratio(1, sliders.len() as u32); sliders.len()];
            let panels = Layout::vertical(constraints).split(content_area);
            for (position, (slider, area)) in sliders.iter().zip(panels.iter()).enumerate() {
                slider_panel::render_slider(
                    f,
                    page.document(),
                    slider,
                    position == state.focused,
                    *area,
                    &mut hits,
                );
            }
        }

        header::render_nav_bar(f, state, keybinding_ctx, nav_area);
        header::render_status(f, state, status_area);

        if state.mode == AppMode::Help {
            HelpOverlay::new(&state.mode, keybinding_ctx).render(f, f.area());
            // Nothing under the overlay is clickable.
            hits.clear();
        }

        hits
    }
}
