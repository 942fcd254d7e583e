//! Centralized theme and styling for the TUI
//!
//! This module provides a single source of truth for all colors, styles,
//! and visual constants used by the slider panels, the help overlay and the
//! status line.
//!
//! # Usage
//! ```rust
//! use showcase::theme::{Colors, Styles};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let card = Styles::card(true);
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors (backgrounds, foregrounds)
    // -------------------------------------------------------------------------

    /// Primary dark background
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Background of the card that is currently active
    pub const BG_ACTIVE_CARD: Color = Color::Rgb(30, 30, 48);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Primary accent color - used for borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - active card and dot
    pub const SECONDARY: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Focused panel border
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Unfocused panel border
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Inactive dot
    pub const DOT: Color = Color::DarkGray;

    /// Active dot
    pub const DOT_ACTIVE: Color = Color::Yellow;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;

    /// Track while a drag is in progress
    pub const DRAGGING: Color = Color::LightMagenta;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Panel border, depending on keyboard focus
    pub fn border(focused: bool) -> Style {
        if focused {
            Style::default().fg(Colors::BORDER_ACTIVE)
        } else {
            Style::default().fg(Colors::BORDER_INACTIVE)
        }
    }

    /// Card frame and text
    pub fn card(active: bool) -> Style {
        if active {
            Style::default()
                .fg(Colors::SECONDARY)
                .bg(Colors::BG_ACTIVE_CARD)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Colors::FG_SECONDARY)
        }
    }

    /// Dot indicator
    pub fn dot(active: bool) -> Style {
        if active {
            Style::default()
                .fg(Colors::DOT_ACTIVE)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Colors::DOT)
        }
    }

    /// Prev/next button
    pub fn button() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Track border during a drag
    pub fn dragging() -> Style {
        Style::default().fg(Colors::DRAGGING)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Document pixels per terminal column
    pub const CELL_WIDTH_PX: f32 = 8.0;

    /// Title bar height
    pub const HEADER_HEIGHT: u16 = 3;

    /// Nav bar plus status line
    pub const FOOTER_HEIGHT: u16 = 2;

    /// Help overlay width percentage
    pub const HELP_WIDTH_PCT: u16 = 60;

    /// Help overlay height percentage
    pub const HELP_HEIGHT_PCT: u16 = 60;
}
