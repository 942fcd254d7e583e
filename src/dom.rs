//! Element tree the sliders bind to
//!
//! A deliberately small document model: elements carry a tag, a class list, a
//! measured width and the handful of inline style properties the sliders write.
//! Widths are in CSS pixels. The terminal front end maps pixels onto columns.
//!
//! Only compound selectors are supported (`div`, `.slider-btn.next`, `div.case-card`),
//! which is everything the page markup uses.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShowcaseError};
use crate::types::Cursor;

/// Handle to an element inside a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(usize);

impl ElementId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Declared width of an element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    /// Fixed width in pixels
    Px(f32),
    /// 100% of the containing block
    Fill,
}

/// Inline `width` override written by a slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleWidth {
    /// Shrink-wrap to the children (`width: max-content`)
    MaxContent,
}

impl fmt::Display for StyleWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxContent => write!(f, "max-content"),
        }
    }
}

/// Horizontal translation of a track, always towards the left
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "lowercase")]
pub enum Translation {
    /// Shift left by a number of pixels
    Px(f32),
    /// Shift left by a percentage of the element's own width
    Percent(f32),
}

impl Translation {
    /// Resolve to pixels given the translated element's own width
    pub fn to_px(&self, own_width: f32) -> f32 {
        match *self {
            Self::Px(px) => px,
            Self::Percent(pct) => own_width * pct / 100.0,
        }
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(px) => write!(f, "translateX(-{}px)", px),
            Self::Percent(pct) => write!(f, "translateX(-{}%)", pct),
        }
    }
}

/// Inline style properties
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    /// Flex gap between children, in pixels
    pub gap: Option<f32>,
    pub width: Option<StyleWidth>,
    pub transform: Option<Translation>,
    pub cursor: Option<Cursor>,
}

/// A single node of the tree
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    pub text: String,
    pub width: Length,
    pub style: InlineStyle,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            text: String::new(),
            width: Length::Fill,
            style: InlineStyle::default(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }
}

/// Parsed compound selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    classes: Vec<String>,
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl Selector {
    /// Parse `tag`, `.class`, `tag.class.other` and similar compounds
    pub fn parse(source: &str) -> Result<Self> {
        let trimmed = source.trim();
        if trimmed.is_empty() {
            return Err(ShowcaseError::selector(source, "selector is empty"));
        }
        if let Some(bad) = trimmed.chars().find(|c| !is_ident_char(*c) && *c != '.') {
            return Err(ShowcaseError::selector(
                source,
                format!("unsupported character '{}'", bad),
            ));
        }

        let mut parts = trimmed.split('.');
        let tag = match parts.next() {
            Some("") | None => None,
            Some(tag) => Some(tag.to_ascii_lowercase()),
        };

        let mut classes = Vec::new();
        for class in parts {
            if class.is_empty() {
                return Err(ShowcaseError::selector(source, "empty class name"));
            }
            classes.push(class.to_string());
        }

        Ok(Self { tag, classes })
    }

    pub fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if !element.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        self.classes.iter().all(|c| element.has_class(c))
    }
}

/// The element tree plus the viewport it is laid out in
#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<Element>,
    body: Vec<ElementId>,
    viewport_width: f32,
}

impl Document {
    pub fn new(viewport_width: f32) -> Self {
        Self {
            elements: Vec::new(),
            body: Vec::new(),
            viewport_width,
        }
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width.max(0.0);
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        self.elements.push(Element::new(tag));
        ElementId(self.elements.len() - 1)
    }

    /// Attach an element at the top level of the document
    pub fn append_to_body(&mut self, child: ElementId) {
        if self.elements.get(child.0).is_none() {
            return;
        }
        self.detach(child);
        self.body.push(child);
    }

    /// Move `child` under `parent`. Ignored if it would put an element inside itself.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if self.element(parent).is_none()
            || self.element(child).is_none()
            || self.is_inclusive_descendant(parent, child)
        {
            return;
        }
        self.detach(child);
        self.elements[child.0].parent = Some(parent);
        self.elements[parent.0].children.push(child);
    }

    fn detach(&mut self, child: ElementId) {
        if let Some(old) = self.elements[child.0].parent.take() {
            self.elements[old.0].children.retain(|c| *c != child);
        }
        self.body.retain(|c| *c != child);
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0)
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.element(id).and_then(|e| e.parent)
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(el) = self.element_mut(id) {
            if !el.has_class(class) {
                el.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(el) = self.element_mut(id) {
            el.classes.retain(|c| c != class);
        }
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_class(class))
    }

    pub fn set_width(&mut self, id: ElementId, width: Length) {
        if let Some(el) = self.element_mut(id) {
            el.width = width;
        }
    }

    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) {
        if let Some(el) = self.element_mut(id) {
            el.text = text.into();
        }
    }

    pub fn style(&self, id: ElementId) -> Option<&InlineStyle> {
        self.element(id).map(|e| &e.style)
    }

    pub fn style_mut(&mut self, id: ElementId) -> Option<&mut InlineStyle> {
        self.element_mut(id).map(|e| &mut e.style)
    }

    /// Gap as a browser's `parseInt(getComputedStyle(el).gap) || 0` would report it
    pub fn computed_gap(&self, id: ElementId) -> f32 {
        match self.style(id).and_then(|s| s.gap) {
            Some(gap) if gap.is_finite() => gap.trunc(),
            _ => 0.0,
        }
    }

    /// Rendered width in pixels; unknown elements measure 0
    pub fn offset_width(&self, id: ElementId) -> f32 {
        let Some(el) = self.element(id) else {
            return 0.0;
        };
        if el.style.width == Some(StyleWidth::MaxContent) {
            return self.max_content_width(id);
        }
        match el.width {
            Length::Px(px) => px.max(0.0),
            Length::Fill => self.containing_width(id),
        }
    }

    /// Width a `Fill` child of `id` resolves against
    fn containing_width(&self, id: ElementId) -> f32 {
        let mut cursor = self.parent(id);
        while let Some(parent) = cursor {
            let shrink_wraps = self
                .style(parent)
                .is_some_and(|s| s.width == Some(StyleWidth::MaxContent));
            if !shrink_wraps {
                return self.offset_width(parent);
            }
            cursor = self.parent(parent);
        }
        self.viewport_width
    }

    fn max_content_width(&self, id: ElementId) -> f32 {
        let Some(el) = self.element(id) else {
            return 0.0;
        };
        if el.children.is_empty() {
            return 0.0;
        }
        let gap = self.computed_gap(id);
        let widths: f32 = el.children.iter().map(|c| self.offset_width(*c)).sum();
        widths + gap * (el.children.len() - 1) as f32
    }

    /// All attached elements in document (pre-)order
    pub fn descendants(&self) -> Vec<ElementId> {
        let mut out = Vec::new();
        for root in &self.body {
            self.collect_subtree(*root, &mut out);
        }
        out
    }

    fn collect_subtree(&self, id: ElementId, out: &mut Vec<ElementId>) {
        out.push(id);
        if let Some(el) = self.element(id) {
            for child in &el.children {
                self.collect_subtree(*child, out);
            }
        }
    }

    /// Whether `id` is `ancestor` or sits somewhere below it
    pub fn is_inclusive_descendant(&self, id: ElementId, ancestor: ElementId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    /// First attached element matching `selector`; malformed selectors match nothing
    pub fn query_selector(&self, selector: &str) -> Option<ElementId> {
        self.query_selector_all(selector).into_iter().next()
    }

    pub fn query_selector_all(&self, selector: &str) -> Vec<ElementId> {
        let Ok(parsed) = Selector::parse(selector) else {
            tracing::debug!(selector, "ignoring malformed selector");
            return Vec::new();
        };
        self.descendants()
            .into_iter()
            .filter(|id| self.element(*id).is_some_and(|e| parsed.matches(e)))
            .collect()
    }

    /// Matches strictly below `root`
    pub fn query_selector_all_within(&self, root: ElementId, selector: &str) -> Vec<ElementId> {
        let Ok(parsed) = Selector::parse(selector) else {
            return Vec::new();
        };
        let mut subtree = Vec::new();
        self.collect_subtree(root, &mut subtree);
        subtree
            .into_iter()
            .skip(1)
            .filter(|id| self.element(*id).is_some_and(|e| parsed.matches(e)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn div(doc: &mut Document, classes: &[&str]) -> ElementId {
        let id = doc.create_element("div");
        for c in classes {
            doc.add_class(id, c);
        }
        id
    }

    #[test]
    fn append_child_refuses_cycles() {
        let mut doc = Document::new(800.0);
        let outer = div(&mut doc, &["outer"]);
        let inner = div(&mut doc, &["inner"]);
        let stray = div(&mut doc, &["stray"]);
        doc.append_to_body(outer);
        doc.append_child(outer, inner);

        doc.append_child(inner, outer);
        doc.append_child(inner, inner);
        assert_eq!(doc.parent(inner), Some(outer));
        assert_eq!(doc.parent(outer), None);
        assert!(!doc.is_inclusive_descendant(inner, stray));
        assert_eq!(doc.offset_width(inner), 800.0);
    }

    #[test]
    fn selector_parse_compound() {
        let sel = Selector::parse(".slider-btn.next").unwrap();
        assert_eq!(sel.tag, None);
        assert_eq!(sel.classes, vec!["slider-btn", "next"]);

        let sel = Selector::parse("DIV.case-card").unwrap();
        assert_eq!(sel.tag.as_deref(), Some("div"));
    }

    #[test]
    fn selector_parse_rejects_malformed() {
        assert!(Selector::parse("").is_err());
        assert!(Selector::parse(".a..b").is_err());
        assert!(Selector::parse(".a > .b").is_err());
        assert!(Selector::parse("#hero").is_err());
        assert!(Selector::parse(".trailing.").is_err());
    }

    #[test]
    fn query_selector_requires_all_classes() {
        let mut doc = Document::new(800.0);
        let prev = div(&mut doc, &["slider-btn", "prev"]);
        let next = div(&mut doc, &["slider-btn", "next"]);
        doc.append_to_body(prev);
        doc.append_to_body(next);

        assert_eq!(doc.query_selector(".slider-btn.next"), Some(next));
        assert_eq!(doc.query_selector(".slider-btn"), Some(prev));
        assert_eq!(doc.query_selector_all(".slider-btn").len(), 2);
        assert_eq!(doc.query_selector(".case-slider-btn.next"), None);
    }

    #[test]
    fn detached_elements_are_not_found() {
        let mut doc = Document::new(800.0);
        div(&mut doc, &["orphan"]);
        assert_eq!(doc.query_selector(".orphan"), None);
    }

    #[test]
    fn query_in_document_order() {
        let mut doc = Document::new(800.0);
        let outer = div(&mut doc, &["card"]);
        let inner = div(&mut doc, &["card"]);
        let later = div(&mut doc, &["card"]);
        doc.append_to_body(outer);
        doc.append_child(outer, inner);
        doc.append_to_body(later);

        assert_eq!(doc.query_selector_all(".card"), vec![outer, inner, later]);
        assert_eq!(doc.query_selector_all_within(outer, ".card"), vec![inner]);
    }

    #[test]
    fn fill_width_resolves_against_parent_or_viewport() {
        let mut doc = Document::new(1200.0);
        let container = div(&mut doc, &["container"]);
        doc.set_width(container, Length::Px(600.0));
        let child = div(&mut doc, &[]);
        doc.append_to_body(container);
        doc.append_child(container, child);

        assert_eq!(doc.offset_width(child), 600.0);

        let root = div(&mut doc, &[]);
        doc.append_to_body(root);
        assert_eq!(doc.offset_width(root), 1200.0);
        doc.set_viewport_width(900.0);
        assert_eq!(doc.offset_width(root), 900.0);
    }

    #[test]
    fn max_content_sums_children_and_gaps() {
        let mut doc = Document::new(1000.0);
        let container = div(&mut doc, &[]);
        let track = div(&mut doc, &[]);
        doc.append_to_body(container);
        doc.append_child(container, track);
        doc.style_mut(track).unwrap().gap = Some(20.0);
        for w in [100.0, 150.0, 200.0] {
            let card = div(&mut doc, &[]);
            doc.set_width(card, Length::Px(w));
            doc.append_child(track, card);
        }

        assert_eq!(doc.offset_width(track), 1000.0);
        doc.style_mut(track).unwrap().width = Some(StyleWidth::MaxContent);
        assert_eq!(doc.offset_width(track), 490.0);
    }

    #[test]
    fn computed_gap_truncates_like_parse_int() {
        let mut doc = Document::new(100.0);
        let track = div(&mut doc, &[]);
        assert_eq!(doc.computed_gap(track), 0.0);
        doc.style_mut(track).unwrap().gap = Some(24.9);
        assert_eq!(doc.computed_gap(track), 24.0);
        doc.style_mut(track).unwrap().gap = Some(f32::NAN);
        assert_eq!(doc.computed_gap(track), 0.0);
    }

    #[test]
    fn translation_css_text() {
        assert_eq!(Translation::Px(0.0).to_string(), "translateX(-0px)");
        assert_eq!(Translation::Px(37.5).to_string(), "translateX(-37.5px)");
        assert_eq!(Translation::Percent(200.0).to_string(), "translateX(-200%)");
        assert_eq!(Translation::Percent(50.0).to_px(800.0), 400.0);
    }

    #[test]
    fn reparenting_moves_child() {
        let mut doc = Document::new(100.0);
        let a = div(&mut doc, &[]);
        let b = div(&mut doc, &[]);
        let c = div(&mut doc, &[]);
        doc.append_to_body(a);
        doc.append_to_body(b);
        doc.append_child(a, c);
        doc.append_child(b, c);

        assert!(doc.element(a).unwrap().children().is_empty());
        assert_eq!(doc.parent(c), Some(b));
        assert!(doc.is_inclusive_descendant(c, b));
        assert!(!doc.is_inclusive_descendant(c, a));
    }
}
