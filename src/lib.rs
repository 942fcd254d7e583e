//! Showcase TUI Library
//!
//! Testimonial and case-study sliders over a small element tree, plus the
//! terminal front end that draws them and feeds them keyboard and mouse input.

pub mod app;
pub mod cli;
pub mod components;
pub mod config_file;
pub mod dom;
pub mod error;
pub mod event;
pub mod page;
pub mod slider;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use config_file::{CardSpec, SectionSpec, ShowcaseConfig};
pub use dom::{Document, ElementId, Length, Selector, StyleWidth, Translation};
pub use error::ShowcaseError;
pub use event::UiEvent;
pub use page::Page;
pub use slider::gesture::{DEFAULT_SWIPE_THRESHOLD, GestureRecognizer};
pub use slider::view::{LayoutMetrics, ViewState};
pub use slider::{Slider, SliderOptions};
pub use types::{Cursor, PointerKind, SliderMode, SwipeDirection};
