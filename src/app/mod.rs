//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode)
//! - Main module - App struct and event loop
//!
//! Terminal input is translated into page events here: keys click the focused
//! slider's controls, mouse presses and releases become mouse-down/mouse-up (and a
//! click when both land on the same element), terminal resizes become resizes.

mod state;

pub use state::{AppMode, AppState, PendingPress};

use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::error::{self, ShowcaseError};
use crate::event::UiEvent;
use crate::page::Page;
use crate::theme::UiConstants;
use crate::types::PointerKind;
use crate::ui::{track_columns, HitMap, UiRenderer};
use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tracing::{debug, info};

/// Document pixel at the left edge of a terminal column
fn column_to_px(column: u16) -> f32 {
    f32::from(column) * UiConstants::CELL_WIDTH_PX
}

/// Main application struct
pub struct App {
    page: Page,
    state: AppState,
    ui_renderer: UiRenderer,
    /// Keybinding context for navigation hints
    keybinding_context: KeybindingContext,
    /// Where elements were drawn in the last frame
    hit_map: HitMap,
}

impl App {
    /// Create a new application instance around a page; loads the page content
    pub fn new(mut page: Page) -> Self {
        info!("Creating new App instance");
        page.content_loaded();
        Self {
            page,
            state: AppState::default(),
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            hit_map: HitMap::new(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.mode = match self.state.mode {
            AppMode::Browsing => AppMode::Help,
            AppMode::Help => AppMode::Browsing,
        };
    }

    /// Size the page to the terminal
    pub fn resize(&mut self, width: u16) {
        let px = column_to_px(track_columns(width));
        self.page.dispatch(UiEvent::Resize { width: px });
        debug!(columns = width, px, "resized page");
    }

    /// Main event loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> error::Result<()> {
        info!("Starting main application loop");
        let size = terminal
            .size()
            .map_err(|e| ShowcaseError::terminal(format!("Failed to read terminal size: {}", e)))?;
        self.resize(size.width);

        loop {
            terminal
                .draw(|f| {
                    self.hit_map =
                        self.ui_renderer
                            .render(f, &self.state, &self.page, &self.keybinding_context);
                })
                .map_err(|e| ShowcaseError::terminal(format!("Failed to draw: {}", e)))?;

            if crossterm::event::poll(Duration::from_millis(50))? {
                let event = crossterm::event::read()?;
                if self.handle_event(event) {
                    break;
                }
            }
        }

        info!("Main loop finished");
        Ok(())
    }

    /// Handle one terminal event. Returns true when the user asked to quit.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Mouse(mouse) => {
                self.handle_mouse_event(mouse);
                false
            }
            Event::Resize(width, _) => {
                self.resize(width);
                false
            }
            _ => false,
        }
    }

    /// Handle keyboard input events
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }
        let Some(action) =
            self.keybinding_context
                .action_for(&self.state.mode, key.code, key.modifiers)
        else {
            return false;
        };
        debug!(?action, "key action");

        let count = self.page.sliders().len();
        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.toggle_help(),
            KeyAction::Dismiss => self.state.mode = AppMode::Browsing,
            KeyAction::FocusNext => self.state.focus_next(count),
            KeyAction::FocusPrev => self.state.focus_prev(count),
            KeyAction::Next => self.click_control(|s| s.next_button(), Page::next),
            KeyAction::Prev => self.click_control(|s| s.prev_button(), Page::prev),
            KeyAction::GoToDot(position) => {
                let dot = self
                    .page
                    .slider(self.state.focused)
                    .and_then(|s| s.dots().get(position).copied());
                match dot {
                    Some(target) => {
                        self.page.dispatch(UiEvent::Click { target });
                    }
                    None => {
                        self.page.go_to(self.state.focused, position);
                    }
                }
            }
        }
        self.update_status();
        false
    }

    /// Click a control of the focused slider, or navigate directly when it has none
    fn click_control(
        &mut self,
        control: impl Fn(&crate::slider::Slider) -> Option<crate::dom::ElementId>,
        fallback: fn(&mut Page, usize) -> Option<usize>,
    ) {
        let focused = self.state.focused;
        match self.page.slider(focused).and_then(control) {
            Some(target) => {
                self.page.dispatch(UiEvent::Click { target });
            }
            None => {
                fallback(&mut self.page, focused);
            }
        }
    }

    /// Handle mouse input events
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let x = column_to_px(mouse.column);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if self.state.mode == AppMode::Browsing => {
                let Some(target) = self.hit_map.element_at(mouse.column, mouse.row) else {
                    return;
                };
                if let Some(position) = self.page.slider_for(target) {
                    self.state.focused = position;
                }
                self.page.dispatch(UiEvent::MouseDown { target, x });
                self.state.pending_press = Some(PendingPress { target });
            }
            // Releases always reach the page so a drag never outlives the overlay.
            MouseEventKind::Up(MouseButton::Left) => {
                let swiped = self.page.end_drag(x, PointerKind::Mouse).is_some();
                let press = self.state.pending_press.take();
                if self.state.mode != AppMode::Browsing {
                    return;
                }
                let released_on = self.hit_map.element_at(mouse.column, mouse.row);
                if let Some(press) = press {
                    if !swiped && released_on == Some(press.target) {
                        self.page.dispatch(UiEvent::Click {
                            target: press.target,
                        });
                    }
                }
                self.update_status();
            }
            _ => {}
        }
    }

    fn update_status(&mut self) {
        let Some(slider) = self.page.slider(self.state.focused) else {
            return;
        };
        self.state.status_message = match self.page.view(self.state.focused) {
            Some(view) => format!(
                "{} · card {}/{} · {}",
                slider.options().track_selector,
                view.index + 1,
                view.card_count,
                view.transform_css()
            ),
            None => format!("{} · no cards", slider.options().track_selector),
        };
    }
}
