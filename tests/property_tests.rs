//! Property-Based Tests for the sliders
//!
//! These tests verify:
//! - Button navigation wraps modulo the card count
//! - Swipes never leave the valid index range
//! - Exactly one card and one dot carry the active class
//! - Carousel offsets are never negative; simple offsets are index × 100%
//! - Enum string round-trips

use proptest::prelude::*;

use showcase::slider::view::{self, carousel_offset, simple_offset};
use showcase::{
    Document, Length, LayoutMetrics, Slider, SliderMode, SliderOptions, SwipeDirection,
    Translation,
};

// =============================================================================
// Strategies
// =============================================================================

fn mode_strategy() -> impl Strategy<Value = SliderMode> {
    prop_oneof![Just(SliderMode::Carousel), Just(SliderMode::Simple)]
}

fn swipe_strategy() -> impl Strategy<Value = SwipeDirection> {
    prop_oneof![Just(SwipeDirection::Next), Just(SwipeDirection::Previous)]
}

fn metrics_strategy() -> impl Strategy<Value = LayoutMetrics> {
    (
        prop::collection::vec(10.0f32..800.0, 1..12),
        0.0f32..64.0,
        100.0f32..2000.0,
    )
        .prop_map(|(card_widths, gap, container_width)| LayoutMetrics {
            card_widths,
            gap,
            container_width,
        })
}

/// A slider with `count` cards and a dot container
fn slider_page(count: usize, mode: SliderMode) -> (Document, Slider) {
    let mut doc = Document::new(900.0);
    let track = doc.create_element("div");
    doc.add_class(track, "track");
    doc.append_to_body(track);
    for _ in 0..count {
        let card = doc.create_element("div");
        doc.add_class(card, "card");
        doc.set_width(card, Length::Px(250.0));
        doc.append_child(track, card);
    }
    let dots = doc.create_element("div");
    doc.add_class(dots, "dots");
    doc.append_to_body(dots);

    let options = SliderOptions::new(".track", ".card")
        .with_dots(".dots")
        .with_mode(mode);
    let slider = Slider::initialize(&mut doc, options).expect("track exists");
    (doc, slider)
}

fn count_active(doc: &Document, ids: &[showcase::ElementId]) -> usize {
    ids.iter().filter(|id| doc.has_class(**id, "active")).count()
}

// =============================================================================
// Navigation
// =============================================================================

proptest! {
    /// k presses of next from 0 land on k mod n
    #[test]
    fn next_wraps_modulo_count(count in 1usize..10, presses in 0usize..40, mode in mode_strategy()) {
        let (mut doc, mut slider) = slider_page(count, mode);
        for _ in 0..presses {
            slider.next(&mut doc);
        }
        prop_assert_eq!(slider.current_index(), presses % count);
    }

    /// prev undoes next
    #[test]
    fn prev_inverts_next(count in 1usize..10, start in 0usize..10, mode in mode_strategy()) {
        let (mut doc, mut slider) = slider_page(count, mode);
        slider.go_to(&mut doc, start % count);
        let before = slider.current_index();
        slider.next(&mut doc);
        slider.prev(&mut doc);
        prop_assert_eq!(slider.current_index(), before);
    }

    /// Any swipe sequence stays within 0..n
    #[test]
    fn swipes_stay_in_range(count in 1usize..8, swipes in prop::collection::vec(swipe_strategy(), 0..30)) {
        let (mut doc, mut slider) = slider_page(count, SliderMode::Simple);
        let mut expected = 0usize;
        for direction in swipes {
            slider.swipe(&mut doc, direction);
            expected = match direction {
                SwipeDirection::Next => (expected + 1).min(count - 1),
                SwipeDirection::Previous => expected.saturating_sub(1),
            };
            prop_assert_eq!(slider.current_index(), expected);
        }
    }

    /// After any navigation exactly one card and one dot are active, both at the index
    #[test]
    fn single_active_card_and_dot(count in 1usize..10, targets in prop::collection::vec(0usize..12, 1..20), mode in mode_strategy()) {
        let (mut doc, mut slider) = slider_page(count, mode);
        for target in targets {
            slider.go_to(&mut doc, target);
            let index = slider.current_index();
            prop_assert!(index < count);
            prop_assert_eq!(count_active(&doc, slider.cards()), 1);
            prop_assert_eq!(count_active(&doc, slider.dots()), 1);
            prop_assert!(doc.has_class(slider.cards()[index], "active"));
            prop_assert!(doc.has_class(slider.dots()[index], "active"));
        }
    }
}

// =============================================================================
// Offsets
// =============================================================================

proptest! {
    /// Carousel offsets are never negative; a first card that fits is never shifted
    #[test]
    fn carousel_offset_non_negative(metrics in metrics_strategy(), index in 0usize..12) {
        let index = index % metrics.card_widths.len();
        prop_assert!(carousel_offset(index, &metrics) >= 0.0);
        if metrics.card_widths[0] <= metrics.container_width {
            prop_assert_eq!(carousel_offset(0, &metrics), 0.0);
        }
    }

    /// Simple mode translates by exactly index × 100%
    #[test]
    fn simple_translation_is_whole_panels(metrics in metrics_strategy(), index in 0usize..12) {
        let index = index % metrics.card_widths.len();
        let state = view::compute(SliderMode::Simple, index, &metrics, 0).expect("index in range");
        prop_assert_eq!(state.transform, Translation::Percent(index as f32 * 100.0));
        prop_assert_eq!(simple_offset(index), index as f32 * 100.0);
        prop_assert_eq!(state.active_dot, None);
    }

    /// compute refuses indices past the last card
    #[test]
    fn compute_rejects_out_of_range(metrics in metrics_strategy(), extra in 0usize..5, mode in mode_strategy()) {
        let index = metrics.card_widths.len() + extra;
        prop_assert!(view::compute(mode, index, &metrics, 3).is_none());
    }
}

// =============================================================================
// Enum round-trips
// =============================================================================

proptest! {
    /// SliderMode: to_string → parse round-trip is identity
    #[test]
    fn slider_mode_roundtrip(mode in mode_strategy()) {
        let s = mode.to_string();
        let parsed: SliderMode = s.parse().expect("Should parse");
        prop_assert_eq!(mode, parsed);
        prop_assert_eq!(s.clone(), s.to_lowercase());
    }
}
