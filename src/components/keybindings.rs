//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current application mode.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Click the focused slider's next button
    Next,
    /// Click the focused slider's prev button
    Prev,
    /// Move keyboard focus to the next slider
    FocusNext,
    /// Move keyboard focus to the previous slider
    FocusPrev,
    /// Click dot N (zero-based) of the focused slider
    GoToDot(usize),
    Help,
    Dismiss,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    fn matches(&self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        // Shift is implied by some characters (e.g. '?'), so it never blocks a match.
        self.key == key && modifiers.difference(KeyModifiers::SHIFT) == self.modifiers
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        let mut browsing = vec![
            Keybinding::new(KeyCode::Right, KeyAction::Next, "Right", "Next card"),
            Keybinding::new(KeyCode::Char('l'), KeyAction::Next, "L", "Next card"),
            Keybinding::new(KeyCode::Left, KeyAction::Prev, "Left", "Previous card"),
            Keybinding::new(KeyCode::Char('h'), KeyAction::Prev, "H", "Previous card"),
            Keybinding::new(KeyCode::Tab, KeyAction::FocusNext, "Tab", "Next slider"),
            Keybinding::with_modifiers(
                KeyCode::BackTab,
                KeyModifiers::NONE,
                KeyAction::FocusPrev,
                "Shift+Tab",
                "Previous slider",
            ),
            Keybinding::new(KeyCode::Esc, KeyAction::Quit, "Esc", "Quit"),
        ];
        for digit in 1..=9u8 {
            let c = char::from(b'0' + digit);
            browsing.push(Keybinding::new(
                KeyCode::Char(c),
                KeyAction::GoToDot(usize::from(digit - 1)),
                "1-9",
                "Jump to card",
            ));
        }
        self.mode_bindings.insert(AppMode::Browsing, browsing);

        self.mode_bindings.insert(
            AppMode::Help,
            vec![
                Keybinding::new(KeyCode::Esc, KeyAction::Dismiss, "Esc", "Close help"),
                Keybinding::new(KeyCode::Enter, KeyAction::Dismiss, "Enter", "Close help"),
            ],
        );
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Resolve a key press to an action in the given mode
    pub fn action_for(
        &self,
        mode: &AppMode,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) -> Option<KeyAction> {
        self.get_bindings(mode)
            .into_iter()
            .find(|b| b.matches(key, modifiers))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        let items: &[(&str, &str)] = match mode {
            AppMode::Browsing => &[
                ("Left/Right", "Prev/Next"),
                ("1-9", "Jump"),
                ("Tab", "Switch slider"),
                ("Drag", "Swipe"),
                ("?", "Help"),
                ("Q", "Quit"),
            ],
            AppMode::Help => &[("Esc", "Close help"), ("Q", "Quit")],
        };
        items
            .iter()
            .map(|(key, label)| NavBarItem {
                key_display: key.to_string(),
                action_label: label.to_string(),
            })
            .collect()
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let mut sections = Vec::new();

        let nav: Vec<(String, String)> = dedup_display(
            self.get_bindings(mode)
                .into_iter()
                .filter(|b| {
                    matches!(
                        b.action,
                        KeyAction::Next
                            | KeyAction::Prev
                            | KeyAction::GoToDot(_)
                            | KeyAction::FocusNext
                            | KeyAction::FocusPrev
                    )
                })
                .collect(),
        );
        if !nav.is_empty() {
            sections.push(HelpSection {
                title: "Navigation".to_string(),
                items: nav,
            });
        }

        if *mode == AppMode::Browsing {
            sections.push(HelpSection {
                title: "Mouse".to_string(),
                items: vec![
                    ("Click".to_string(), "Press a button, dot or card".to_string()),
                    ("Drag".to_string(), "Swipe a swipeable track".to_string()),
                ],
            });
        }

        let general = dedup_display(
            self.get_bindings(mode)
                .into_iter()
                .filter(|b| matches!(b.action, KeyAction::Help | KeyAction::Dismiss | KeyAction::Quit))
                .collect(),
        );
        if !general.is_empty() {
            sections.push(HelpSection {
                title: "General".to_string(),
                items: general,
            });
        }

        sections
    }
}

/// Collapse bindings that share a display label (the nine digit keys)
fn dedup_display(bindings: Vec<&Keybinding>) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = Vec::new();
    for b in bindings {
        if !out.iter().any(|(key, _)| *key == b.display) {
            out.push((b.display.clone(), b.description.clone()));
        }
    }
    out
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}
