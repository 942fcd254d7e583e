//! Application state definitions
//!
//! Contains the state the terminal front end keeps next to the page: which
//! slider has keyboard focus, which overlay is open, and the status line.

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Sliders on screen, navigation keys active
    Browsing,
    /// Help overlay open
    Help,
}

/// A press that has not been released yet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingPress {
    pub target: crate::dom::ElementId,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Slider that receives keyboard navigation
    pub focused: usize,
    /// Status message for user feedback
    pub status_message: String,
    /// Mouse press waiting for its release
    pub pending_press: Option<PendingPress>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Browsing,
            focused: 0,
            status_message: "Use Left/Right to browse, ? for help".to_string(),
            pending_press: None,
        }
    }
}

impl AppState {
    /// Move focus forward, wrapping over `count` sliders
    pub fn focus_next(&mut self, count: usize) {
        if count > 0 {
            self.focused = (self.focused + 1) % count;
        }
    }

    /// Move focus backward, wrapping over `count` sliders
    pub fn focus_prev(&mut self, count: usize) {
        if count > 0 {
            self.focused = (self.focused + count - 1) % count;
        }
    }
}
