//! Slider panel rendering
//!
//! Draws one slider: its cards laid out along the track and shifted by the
//! track's current translation, then a control row with the prev/next buttons
//! and the dots. Every drawn element is recorded in the [`HitMap`] so mouse
//! input can be turned back into page events.

use crate::dom::{Document, ElementId};
use crate::slider::{Slider, ViewState};
use crate::theme::{Styles, UiConstants};
use crate::types::Cursor;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::HitMap;

/// Document pixels to terminal columns
pub fn px_to_columns(px: f32) -> i32 {
    (px / UiConstants::CELL_WIDTH_PX).round() as i32
}

/// Where one card lands on the track, in columns relative to the track's left edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardPlacement {
    pub position: usize,
    pub element: ElementId,
    pub x: i32,
    pub width: i32,
    pub active: bool,
}

impl CardPlacement {
    /// Visible column span inside a track `track_width` columns wide
    pub fn clip(&self, track_width: u16) -> Option<(u16, u16)> {
        let start = self.x.max(0);
        let end = (self.x + self.width).min(i32::from(track_width));
        (end > start).then(|| (start as u16, (end - start) as u16))
    }
}

/// Lay the cards out along the track as the current view has translated it
pub fn card_placements(doc: &Document, slider: &Slider, view: &ViewState) -> Vec<CardPlacement> {
    let track = slider.track();
    let shift = view.transform.to_px(doc.offset_width(track));
    let gap = doc.computed_gap(track);

    let mut left = -shift;
    let mut placements = Vec::with_capacity(slider.len());
    for (position, card) in slider.cards().iter().enumerate() {
        let width = doc.offset_width(*card);
        placements.push(CardPlacement {
            position,
            element: *card,
            x: px_to_columns(left),
            width: px_to_columns(width).max(1),
            active: view.is_card_active(position),
        });
        left += width + gap;
    }
    placements
}

fn section_heading(doc: &Document, slider: &Slider) -> String {
    doc.parent(slider.track())
        .and_then(|container| doc.parent(container))
        .and_then(|section| doc.element(section))
        .map(|section| section.text.clone())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| slider.options().track_selector.clone())
}

fn card_lines(doc: &Document, card: ElementId, active: bool) -> Vec<Line<'static>> {
    let Some(element) = doc.element(card) else {
        return Vec::new();
    };
    let title = element
        .children()
        .first()
        .and_then(|c| doc.element(*c))
        .map(|c| c.text.clone())
        .unwrap_or_default();
    vec![
        Line::from(Span::styled(title, Styles::card(active))),
        Line::from(""),
        Line::from(Span::styled(element.text.clone(), Styles::text())),
    ]
}

/// Render one slider into `area`
pub fn render_slider(
    f: &mut Frame,
    doc: &Document,
    slider: &Slider,
    focused: bool,
    area: Rect,
    hits: &mut HitMap,
) {
    let dragging = doc
        .style(slider.track())
        .is_some_and(|s| s.cursor == Some(Cursor::Grabbing));
    let border = if dragging {
        Styles::dragging()
    } else {
        Styles::border(focused)
    };

    let counter = if slider.is_empty() {
        "empty".to_string()
    } else {
        format!("{}/{}", slider.current_index() + 1, slider.len())
    };
    let block = Block::default()
        .title(format!(
            " {} · {} · {} ",
            section_heading(doc, slider),
            slider.mode(),
            counter
        ))
        .borders(Borders::ALL)
        .border_style(border);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height < 2 {
        return;
    }

    let [track_area, controls_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
    hits.push(track_area, slider.track());

    if let Some(view) = slider.view(doc) {
        for placement in card_placements(doc, slider, &view) {
            let Some((start, width)) = placement.clip(track_area.width) else {
                continue;
            };
            let rect = Rect::new(track_area.x + start, track_area.y, width, track_area.height);

            let mut borders = Borders::TOP | Borders::BOTTOM;
            if placement.x >= 0 {
                borders |= Borders::LEFT;
            }
            if placement.x + placement.width <= i32::from(track_area.width) {
                borders |= Borders::RIGHT;
            }
            let card = Paragraph::new(card_lines(doc, placement.element, placement.active))
                .block(
                    Block::default()
                        .borders(borders)
                        .border_style(Styles::card(placement.active)),
                )
                .style(if placement.active {
                    Styles::card(true)
                } else {
                    Style::default()
                })
                .wrap(Wrap { trim: true });
            f.render_widget(card, rect);
            hits.push(rect, placement.element);
        }
    }

    render_controls(f, doc, slider, controls_area, hits);
}

fn render_controls(f: &mut Frame, doc: &Document, slider: &Slider, area: Rect, hits: &mut HitMap) {
    if let Some(prev) = slider.prev_button() {
        let rect = Rect::new(area.x, area.y, 3.min(area.width), 1);
        f.render_widget(Paragraph::new(" ◀ ").style(Styles::button()), rect);
        hits.push(rect, prev);
    }
    if let Some(next) = slider.next_button() {
        if area.width >= 3 {
            let rect = Rect::new(area.x + area.width - 3, area.y, 3, 1);
            f.render_widget(
                Paragraph::new(" ▶ ")
                    .style(Styles::button())
                    .alignment(Alignment::Right),
                rect,
            );
            hits.push(rect, next);
        }
    }

    let dots = slider.dots();
    if dots.is_empty() {
        return;
    }
    // "● ○ ○": one column per dot plus a separating space
    let row_width = (dots.len() * 2 - 1) as u16;
    if row_width + 8 > area.width {
        return;
    }
    let start = area.x + (area.width - row_width) / 2;
    for (position, dot) in dots.iter().enumerate() {
        let active = doc.has_class(*dot, &slider.options().active_class);
        let rect = Rect::new(start + (position as u16) * 2, area.y, 1, 1);
        let glyph = if active { "●" } else { "○" };
        f.render_widget(Paragraph::new(glyph).style(Styles::dot(active)), rect);
        hits.push(rect, *dot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_file::ShowcaseConfig;

    fn page() -> crate::page::Page {
        let mut page = ShowcaseConfig::default().build_page();
        page.content_loaded();
        page
    }

    #[test]
    fn first_testimonial_starts_at_track_edge() {
        let page = page();
        let slider = page.slider(0).unwrap();
        let view = slider.view(page.document()).unwrap();
        let placements = card_placements(page.document(), slider, &view);
        assert_eq!(placements[0].x, 0);
        // 360px cards, 24px gap, 8px columns
        assert_eq!(placements[0].width, 45);
        assert_eq!(placements[1].x, 48);
        assert!(placements[0].active);
    }

    #[test]
    fn case_study_shift_moves_whole_panels() {
        let mut page = page();
        page.go_to(1, 2);
        let slider = page.slider(1).unwrap();
        let view = slider.view(page.document()).unwrap();
        let placements = card_placements(page.document(), slider, &view);
        // viewport 1024px = 128 columns per panel
        assert_eq!(placements[2].x, 0);
        assert_eq!(placements[0].x, -256);
        assert!(placements[2].active);
    }

    #[test]
    fn clip_cuts_to_track() {
        let p = CardPlacement {
            position: 0,
            element: page().slider(0).unwrap().cards()[0],
            x: -5,
            width: 20,
            active: false,
        };
        assert_eq!(p.clip(100), Some((0, 15)));
        assert_eq!(p.clip(10), Some((0, 10)));

        let off = CardPlacement { x: 120, ..p };
        assert_eq!(off.clip(100), None);
    }
}
