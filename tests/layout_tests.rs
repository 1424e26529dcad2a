// Host-side tests for the modulo-wrap tile layout.

use folio_web::core::{cover_crop, TileLayout};

fn wide() -> TileLayout {
    // 7 tiles of 300px with 50px gaps: span 2450 on a 1920px viewport
    TileLayout::new(7, 300.0, 50.0, 1920.0)
}

#[test]
fn span_and_pitch() {
    let l = wide();
    assert_eq!(l.pitch(), 350.0);
    assert_eq!(l.total_span(), 2450.0);
    assert_eq!(l.base_offset(3), 1050.0);
}

#[test]
fn wrap_is_periodic_in_span() {
    let l = wide();
    for slot in 0..7 {
        let a = l.wrapped(slot, 0.0);
        let b = l.wrapped(slot, -2450.0);
        let c = l.wrapped(slot, 2450.0 * 3.0);
        assert!((a - b).abs() < 1e-3, "slot {}", slot);
        assert!((a - c).abs() < 1e-3, "slot {}", slot);
    }
}

#[test]
fn wrapped_stays_in_range_for_negative_offsets() {
    let l = wide();
    for k in -200..200 {
        let current = k as f32 * 37.3;
        for slot in 0..7 {
            let w = l.wrapped(slot, current);
            assert!((0.0..=2450.0).contains(&w), "slot {} current {} -> {}", slot, current, w);
        }
    }
}

#[test]
fn positions_stay_within_one_tile_of_viewport() {
    let l = wide();
    for k in -500..500 {
        let current = k as f32 * 13.7;
        for p in l.placements(current) {
            assert!(
                p.position >= -300.0 && p.position <= 1920.0 + 300.0,
                "slot {} at {} for current {}",
                p.slot,
                p.position,
                current
            );
        }
    }
}

#[test]
fn layout_is_pure() {
    let l = wide();
    for slot in 0..7 {
        assert_eq!(l.screen_position(slot, 123.4), l.screen_position(slot, 123.4));
    }
}

#[test]
fn neighbours_keep_pitch_apart_unless_wrapping() {
    let l = wide();
    let a = l.screen_position(1, 0.0);
    let b = l.screen_position(2, 0.0);
    assert!((b - a - 350.0).abs() < 1e-3);
}

#[test]
fn offset_for_slot_centres_that_slot() {
    let l = wide();
    for slot in 0..7 {
        let offset = l.offset_for_slot(slot, 0.0);
        let pos = l.screen_position(slot, offset);
        assert!((pos - 960.0).abs() < 1e-2, "slot {} at {}", slot, pos);
        assert_eq!(l.focused_slot(offset), Some(slot));
    }
}

#[test]
fn offset_for_slot_takes_the_short_way_round() {
    let l = wide();
    let near = 10.0 * 2450.0;
    let offset = l.offset_for_slot(2, near);
    assert!((offset - near).abs() <= 2450.0 / 2.0 + 1e-3);
    assert!((l.screen_position(2, offset) - 960.0).abs() < 1e-2);
}

#[test]
fn hit_test_finds_tile_under_point() {
    let l = wide();
    let offset = l.offset_for_slot(4, 0.0);
    assert_eq!(l.hit_test(offset, 960.0), Some(4));
    assert_eq!(l.hit_test(offset, 960.0 + 350.0), Some(5));
    // in the gap between two tiles
    assert_eq!(l.hit_test(offset, 960.0 + 175.0), None);
}

#[test]
fn visibility_uses_tile_extent() {
    let l = wide();
    assert!(l.is_visible(-149.0));
    assert!(!l.is_visible(-151.0));
    assert!(l.is_visible(1920.0 + 149.0));
    assert!(!l.is_visible(1920.0 + 151.0));
}

#[test]
fn progress_runs_through_one_loop() {
    let l = wide();
    assert_eq!(l.progress(0.0), 0.0);
    assert!((l.progress(-1225.0) - 0.5).abs() < 1e-6);
    assert!((l.progress(1225.0) - 0.5).abs() < 1e-6);
    assert!((l.progress(-2450.0 * 4.0 - 245.0) - 0.1).abs() < 1e-4);
}

#[test]
fn empty_layout_is_inert() {
    let l = TileLayout::new(0, 300.0, 50.0, 1920.0);
    assert_eq!(l.total_span(), 0.0);
    assert_eq!(l.wrapped(0, 55.0), 0.0);
    assert_eq!(l.focused_slot(0.0), None);
    assert_eq!(l.progress(100.0), 0.0);
}

#[test]
fn cover_crop_trims_the_long_side() {
    // wide image into a square: crop left and right
    let [u0, v0, du, dv] = cover_crop((2000.0, 1000.0), (300.0, 300.0));
    assert!((du - 0.5).abs() < 1e-6);
    assert!((u0 - 0.25).abs() < 1e-6);
    assert_eq!((v0, dv), (0.0, 1.0));

    // tall image into a square: crop top and bottom
    let [u0, v0, du, dv] = cover_crop((600.0, 1200.0), (300.0, 300.0));
    assert_eq!((u0, du), (0.0, 1.0));
    assert!((dv - 0.5).abs() < 1e-6);
    assert!((v0 - 0.25).abs() < 1e-6);

    assert_eq!(cover_crop((0.0, 10.0), (300.0, 300.0)), [0.0, 0.0, 1.0, 1.0]);
}
