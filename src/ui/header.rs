//! Header and common widget rendering
//!
//! Title bar at the top, navigation hints and status line at the bottom.

use crate::app::AppState;
use crate::components::keybindings::KeybindingContext;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header renderer containing the page title
pub struct HeaderRenderer {
    title: Line<'static>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new("Showcase")
    }
}

impl HeaderRenderer {
    pub fn new(title: &str) -> Self {
        Self {
            title: Line::from(vec![Span::styled(title.to_string(), Styles::title())]),
        }
    }

    /// Render the title bar
    pub fn render_header(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let header = Paragraph::new(self.title.clone())
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(Colors::BORDER_INACTIVE)),
            )
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }
}

/// Render the navigation bar
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let mut spans = Vec::new();
    for (i, item) in keybinding_ctx.get_nav_items(&state.mode).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Styles::nav_hint()));
        }
        spans.push(Span::styled(item.key_display.clone(), Styles::button()));
        spans.push(Span::styled(format!(" {}", item.action_label), Styles::nav_hint()));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

/// Render the status line
pub fn render_status(f: &mut Frame, state: &AppState, area: Rect) {
    let status = Paragraph::new(state.status_message.as_str())
        .style(Styles::text_muted())
        .alignment(Alignment::Left);
    f.render_widget(status, area);
}
