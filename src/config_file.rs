//! Showcase configuration files.
//!
//! A config file describes the page markup (sections of cards) together with the
//! sliders that bind to it. The built-in default reproduces the marketing page:
//! a testimonials carousel and a swipeable case-studies slider.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::dom::{Document, ElementId, Length, Selector};
use crate::page::Page;
use crate::slider::SliderOptions;

/// One card's content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSpec {
    pub title: String,
    pub body: String,
    /// Fixed width in pixels; absent means full container width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
}

impl CardSpec {
    fn new(title: &str, body: &str, width: Option<f32>) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            width,
        }
    }
}

/// Markup for one slider section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub heading: String,
    pub container_class: String,
    pub track_class: String,
    pub card_class: String,
    /// Base class of the prev/next buttons; they also get `prev` / `next`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dots_class: Option<String>,
    #[serde(default)]
    pub gap: f32,
    /// Fixed container width; absent means it fills the viewport
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_width: Option<f32>,
    pub cards: Vec<CardSpec>,
}

/// Whole-page configuration that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowcaseConfig {
    pub viewport_width: f32,
    pub sections: Vec<SectionSpec>,
    pub sliders: Vec<SliderOptions>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        let testimonials = SectionSpec {
            heading: "What our clients say".to_string(),
            container_class: "slider-container".to_string(),
            track_class: "slider-track".to_string(),
            card_class: "testimonial-card".to_string(),
            button_class: Some("slider-btn".to_string()),
            dots_class: Some("slider-dots".to_string()),
            gap: 24.0,
            container_width: None,
            cards: vec![
                CardSpec::new(
                    "Maya R., Founder",
                    "Our inbound leads doubled within two months of the relaunch.",
                    Some(360.0),
                ),
                CardSpec::new(
                    "Jonas K., Head of Growth",
                    "Clear reporting, fast turnaround and zero hand-holding needed.",
                    Some(360.0),
                ),
                CardSpec::new(
                    "Priya S., CMO",
                    "The ad creative finally sounds like us. Cost per lead is down 40%.",
                    Some(360.0),
                ),
                CardSpec::new(
                    "Leo M., Owner",
                    "They handled everything from landing pages to follow-up emails.",
                    Some(360.0),
                ),
                CardSpec::new(
                    "Ana T., Marketing Lead",
                    "Best agency call we ever booked.",
                    Some(360.0),
                ),
            ],
        };

        let case_studies = SectionSpec {
            heading: "Case studies".to_string(),
            container_class: "case-slider".to_string(),
            track_class: "case-track".to_string(),
            card_class: "case-card".to_string(),
            button_class: Some("case-slider-btn".to_string()),
            dots_class: Some("case-slider-dots".to_string()),
            gap: 0.0,
            container_width: None,
            cards: vec![
                CardSpec::new(
                    "Regional dental group",
                    "312 booked consultations in 90 days from paid social.",
                    None,
                ),
                CardSpec::new(
                    "Boutique fitness studio",
                    "Membership sign-ups up 3x after funnel rebuild.",
                    None,
                ),
                CardSpec::new(
                    "Home services franchise",
                    "Cost per qualified lead cut from $84 to $29.",
                    None,
                ),
                CardSpec::new(
                    "Online course creator",
                    "Webinar show-up rate raised from 22% to 51%.",
                    None,
                ),
            ],
        };

        Self {
            viewport_width: 1024.0,
            sections: vec![testimonials, case_studies],
            sliders: vec![SliderOptions::testimonials(), SliderOptions::case_studies()],
        }
    }
}

fn check_class(kind: &str, class: &str) -> Result<()> {
    if class.is_empty() || class.contains('.') {
        anyhow::bail!("{} class '{}' must be a single class name", kind, class);
    }
    Selector::parse(&format!(".{}", class))
        .with_context(|| format!("Invalid {} class '{}'", kind, class))?;
    Ok(())
}

impl ShowcaseConfig {
    /// Create a new configuration with the built-in page
    pub fn new() -> Self {
        Self::default()
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.viewport_width.is_finite() || self.viewport_width <= 0.0 {
            anyhow::bail!("Viewport width must be positive, got {}", self.viewport_width);
        }

        if self.sliders.is_empty() {
            anyhow::bail!("At least one slider must be configured");
        }

        let mut tracks = HashSet::new();
        for slider in &self.sliders {
            for (role, selector) in slider.selectors() {
                Selector::parse(selector)
                    .with_context(|| format!("Invalid {} selector", role))?;
            }
            check_class("dot", &slider.dot_class)?;
            check_class("active", &slider.active_class)?;
            if !slider.swipe_threshold.is_finite() || slider.swipe_threshold <= 0.0 {
                anyhow::bail!(
                    "Swipe threshold for '{}' must be positive, got {}",
                    slider.track_selector,
                    slider.swipe_threshold
                );
            }
            if !tracks.insert(slider.track_selector.as_str()) {
                anyhow::bail!("Duplicate slider for track '{}'", slider.track_selector);
            }
        }

        for section in &self.sections {
            check_class("container", &section.container_class)?;
            check_class("track", &section.track_class)?;
            check_class("card", &section.card_class)?;
            if let Some(class) = &section.button_class {
                check_class("button", class)?;
            }
            if let Some(class) = &section.dots_class {
                check_class("dots", class)?;
            }
            if !section.gap.is_finite() || section.gap < 0.0 {
                anyhow::bail!("Gap in '{}' must not be negative", section.heading);
            }
            if let Some(width) = section.container_width {
                if !width.is_finite() || width <= 0.0 {
                    anyhow::bail!("Container width in '{}' must be positive", section.heading);
                }
            }
            for card in &section.cards {
                if let Some(width) = card.width {
                    if !width.is_finite() || width <= 0.0 {
                        anyhow::bail!(
                            "Card '{}' in '{}' must have a positive width",
                            card.title,
                            section.heading
                        );
                    }
                }
            }
        }

        Ok(())
    }

    /// Build the element tree the sections describe
    pub fn build_document(&self) -> Document {
        let mut doc = Document::new(self.viewport_width);

        let header = doc.create_element("header");
        doc.add_class(header, "page-header");
        doc.set_text(header, "Grow with predictable lead flow");
        doc.append_to_body(header);

        for section in &self.sections {
            build_section(&mut doc, section);
        }
        doc
    }

    /// Page ready for `content_loaded`
    pub fn build_page(&self) -> Page {
        Page::new(self.build_document(), self.sliders.clone())
    }
}

fn build_section(doc: &mut Document, spec: &SectionSpec) -> ElementId {
    let section = doc.create_element("section");
    doc.set_text(section, spec.heading.as_str());
    doc.append_to_body(section);

    let container = doc.create_element("div");
    doc.add_class(container, &spec.container_class);
    doc.set_width(container, spec.container_width.map(Length::Px).unwrap_or(Length::Fill));
    doc.append_child(section, container);

    let track = doc.create_element("div");
    doc.add_class(track, &spec.track_class);
    if let Some(style) = doc.style_mut(track) {
        style.gap = Some(spec.gap);
    }
    doc.append_child(container, track);

    for card in &spec.cards {
        let el = doc.create_element("div");
        doc.add_class(el, &spec.card_class);
        doc.set_width(el, card.width.map(Length::Px).unwrap_or(Length::Fill));
        doc.set_text(el, card.body.as_str());
        let title = doc.create_element("h3");
        doc.set_text(title, card.title.as_str());
        doc.append_child(el, title);
        doc.append_child(track, el);
    }

    if let Some(base) = &spec.button_class {
        for direction in ["prev", "next"] {
            let button = doc.create_element("button");
            doc.add_class(button, base);
            doc.add_class(button, direction);
            doc.append_child(section, button);
        }
    }

    if let Some(class) = &spec.dots_class {
        let dots = doc.create_element("div");
        doc.add_class(dots, class);
        doc.append_child(section, dots);
    }

    section
}
