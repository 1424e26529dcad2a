// Host-side tests for the smoothing integrator.

use folio_web::core::{ease_toward, Direction, ScrollState};

#[test]
fn first_step_closes_ease_fraction() {
    let mut s = ScrollState::new(0.0);
    s.target = 450.0;
    let step = s.step(0.06);
    assert!((s.current - 27.0).abs() < 1e-4);
    assert!((step.delta - 27.0).abs() < 1e-4);
    assert_eq!(step.direction, Direction::Forward);
}

#[test]
fn converges_geometrically() {
    let mut s = ScrollState::new(0.0);
    s.target = 450.0;
    for _ in 0..50 {
        s.step(0.06);
    }
    // 450 * (1 - 0.94^50)
    let expected = 450.0 * (1.0 - 0.94f32.powi(50));
    assert!((s.current - expected).abs() < 0.01);
    assert!(s.current > 429.0);
    for _ in 50..62 {
        s.step(0.06);
    }
    assert!(s.current > 440.0);
    for _ in 0..2000 {
        s.step(0.06);
    }
    assert!((s.current - 450.0).abs() < 1e-3);
}

#[test]
fn remaining_distance_shrinks_every_step() {
    for &ease in &[0.01f32, 0.06, 0.08, 0.5, 0.99] {
        for &target in &[-3000.0f32, -1.0, 0.5, 2450.0] {
            let mut s = ScrollState::new(0.0);
            s.target = target;
            let mut last = s.remaining().abs();
            for _ in 0..200 {
                s.step(ease);
                let now = s.remaining().abs();
                assert!(now <= last, "ease {} target {}", ease, target);
                last = now;
            }
        }
    }
}

#[test]
fn never_overshoots() {
    let mut s = ScrollState::new(100.0);
    s.target = -250.0;
    for _ in 0..500 {
        s.step(0.3);
        assert!(s.current >= -250.0);
    }
}

#[test]
fn direction_follows_delta_sign_and_holds_when_settled() {
    let mut s = ScrollState::new(0.0);
    s.target = -100.0;
    assert_eq!(s.step(0.5).direction, Direction::Backward);
    s.current = s.target;
    let step = s.step(0.5);
    assert_eq!(step.delta, 0.0);
    assert_eq!(step.velocity, 0.0);
    assert_eq!(step.direction, Direction::Backward);
    s.target = 0.0;
    assert_eq!(s.step(0.5).direction, Direction::Forward);
    assert_eq!(Direction::Forward.sign(), 1.0);
    assert_eq!(Direction::Backward.sign(), -1.0);
}

#[test]
fn reset_snaps_and_drops_drag() {
    let mut s = ScrollState::new(0.0);
    s.target = 80.0;
    s.is_dragging = true;
    s.step(0.1);
    s.reset(12.0);
    assert_eq!(s.current, 12.0);
    assert_eq!(s.target, 12.0);
    assert!(!s.is_dragging);
}

#[test]
fn ease_toward_is_linear_interpolation() {
    assert_eq!(ease_toward(0.0, 10.0, 0.5), 5.0);
    assert_eq!(ease_toward(10.0, 10.0, 0.2), 10.0);
    assert_eq!(ease_toward(-4.0, 4.0, 0.25), -2.0);
}
