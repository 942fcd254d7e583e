//! Type-safe configuration types for the showcase
//!
//! Small closed vocabularies used by the slider, the element tree and the config
//! file. Strum provides the string forms so they round-trip through JSON and the CLI.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// How a slider positions its track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SliderMode {
    /// Cards narrower than the viewport; the active card is centered
    Carousel,
    /// Full-width panels; the track moves by whole panel widths
    #[default]
    Simple,
}

impl SliderMode {
    /// Whether clicking a card selects it
    pub fn selects_on_card_click(&self) -> bool {
        matches!(self, Self::Carousel)
    }
}

/// Input device that produced a press or release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PointerKind {
    Touch,
    Mouse,
}

/// Outcome of a recognized swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum SwipeDirection {
    /// Finger or pointer moved left; show the next card
    Next,
    /// Finger or pointer moved right; show the previous card
    Previous,
}

/// Pointer cursor shown over an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Cursor {
    Grab,
    Grabbing,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn slider_mode_parses_lowercase() {
        assert_eq!("carousel".parse::<SliderMode>().ok(), Some(SliderMode::Carousel));
        assert_eq!("simple".parse::<SliderMode>().ok(), Some(SliderMode::Simple));
        assert!("Slideshow".parse::<SliderMode>().is_err());
    }

    #[test]
    fn only_carousel_selects_on_card_click() {
        let selecting: Vec<_> = SliderMode::iter()
            .filter(|m| m.selects_on_card_click())
            .collect();
        assert_eq!(selecting, vec![SliderMode::Carousel]);
    }

    #[test]
    fn slider_mode_serde_matches_display() {
        for mode in SliderMode::iter() {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode));
        }
    }
}
