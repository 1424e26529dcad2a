// Host-side tests for constants and their relationships.
// The web constants are wasm-only, so we include the files directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_factors_are_fractions() {
    for ease in [EASE_DESKTOP, EASE_MOBILE, TILE_SCALE_EASE] {
        assert!(ease > 0.0 && ease < 1.0);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn durations_and_sizes_are_positive() {
    assert!(SLIDE_DURATION_SEC > 0.0);
    assert!(FADE_DURATION_SEC > 0.0);
    assert!(MAX_FRAME_DT_SEC > 0.0);
    assert!(IMAGE_LOAD_TIMEOUT_MS > 0);
    assert!(TILE_SIZE_VW_DESKTOP > 0.0 && TILE_SIZE_VW_MOBILE <= 100.0);
    assert!(WHEEL_STEP_PX * WHEEL_SCALE_MOBILE > 0.0);
    assert!(DISPLACEMENT_INTENSITY > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // mobile tiles fill more of a narrow screen
    assert!(TILE_SIZE_VW_MOBILE > TILE_SIZE_VW_DESKTOP);
    // a click must stay inside the tile it started on
    assert!(CLICK_MAX_DISTANCE_PX < TILE_SPACING_PX);
    // the axis is decided before a press stops counting as a click
    assert!(AXIS_LOCK_SLOP_PX < CLICK_MAX_DISTANCE_PX);
    // hover focus comes before the description fade
    assert!(HOVER_DELAY_MS > FADE_DELAY_MS);
    assert!(HOVER_SCALE > 1.0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
    // a long-stalled frame never skips a whole fade
    assert!(MAX_FRAME_DT_SEC < FADE_DURATION_SEC);
    assert!(DISPLACEMENT_MAX_PX >= HERO_DISPLACEMENT_SCALE[1]);
}

#[test]
fn clear_colour_is_normalised() {
    assert!(CLEAR_RGB.iter().all(|c| (0.0..=1.0).contains(c)));
}

#[test]
fn selectors_are_class_selectors() {
    for s in [
        selectors::SLIDER,
        selectors::DRAG_AREA,
        selectors::SLIDE,
        selectors::SLIDE_IMG,
        selectors::CANVAS_HOST,
        selectors::STAGE,
        selectors::PROJECT_ITEM,
        selectors::PROJECT_DESCRIPTION,
        selectors::PROJECT_HERO_IMAGE,
        selectors::PROGRESS_LINE,
    ] {
        assert!(s.starts_with('.') && !s.contains(' '), "{}", s);
    }
}
