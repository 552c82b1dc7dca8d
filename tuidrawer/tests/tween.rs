use std::time::{Duration, Instant};

use tuidrawer::{Easing, Tween};

// =============================================================================
// Easing Function Tests
// =============================================================================

#[test]
fn test_easing_linear() {
    assert_eq!(Easing::Linear.apply(0.0), 0.0);
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::Linear.apply(1.0), 1.0);
}

#[test]
fn test_easing_ease_in() {
    assert_eq!(Easing::EaseIn.apply(0.0), 0.0);
    assert_eq!(Easing::EaseIn.apply(1.0), 1.0);
    // Quadratic: slower start
    assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
}

#[test]
fn test_easing_ease_out() {
    assert_eq!(Easing::EaseOut.apply(0.0), 0.0);
    assert_eq!(Easing::EaseOut.apply(1.0), 1.0);
    // Quadratic: faster start
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
}

#[test]
fn test_easing_ease_in_out() {
    assert_eq!(Easing::EaseInOut.apply(0.0), 0.0);
    assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    assert_eq!(Easing::EaseInOut.apply(1.0), 1.0);
    assert!(Easing::EaseInOut.apply(0.25) < 0.25);
    assert!(Easing::EaseInOut.apply(0.75) > 0.75);
}

#[test]
fn test_easing_monotonic() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        let mut prev = 0.0;
        for i in 1..=10 {
            let t = i as f32 / 10.0;
            let val = easing.apply(t);
            assert!(val >= prev, "{:?} not monotonic at t={}", easing, t);
            prev = val;
        }
    }
}

// =============================================================================
// Tween Tests
// =============================================================================

#[test]
fn test_tween_endpoints() {
    let t0 = Instant::now();
    let tween = Tween::new(300.0, 0.0, t0, Duration::from_millis(250), Easing::Linear);

    assert_eq!(tween.value_at(t0), 300.0);
    assert!(!tween.is_finished_at(t0));

    let end = t0 + Duration::from_millis(250);
    assert_eq!(tween.value_at(end), 0.0);
    assert!(tween.is_finished_at(end));
}

#[test]
fn test_tween_midpoint_linear() {
    let t0 = Instant::now();
    let tween = Tween::new(300.0, 0.0, t0, Duration::from_millis(250), Easing::Linear);

    let mid = t0 + Duration::from_millis(125);
    assert!((tween.value_at(mid) - 150.0).abs() < 0.01);
    assert!((tween.progress_at(mid) - 0.5).abs() < 1e-6);
}

#[test]
fn test_tween_clamps_past_end() {
    let t0 = Instant::now();
    let tween = Tween::new(0.0, 0.5, t0, Duration::from_millis(100), Easing::EaseOut);

    let late = t0 + Duration::from_secs(10);
    assert_eq!(tween.value_at(late), 0.5);
    assert!(tween.is_finished_at(late));
}

#[test]
fn test_tween_before_start() {
    let t0 = Instant::now() + Duration::from_secs(1);
    let tween = Tween::new(10.0, 20.0, t0, Duration::from_millis(250), Easing::Linear);

    // Evaluating before the start instant saturates to zero progress
    assert_eq!(tween.value_at(t0 - Duration::from_millis(500)), 10.0);
}

#[test]
fn test_tween_zero_duration_completes_instantly() {
    let t0 = Instant::now();
    let tween = Tween::new(5.0, 9.0, t0, Duration::ZERO, Easing::EaseInOut);

    assert_eq!(tween.progress_at(t0), 1.0);
    assert_eq!(tween.value_at(t0), 9.0);
    assert!(tween.is_finished_at(t0));
}

#[test]
fn test_tween_applies_easing() {
    let t0 = Instant::now();
    let tween = Tween::new(0.0, 100.0, t0, Duration::from_millis(200), Easing::EaseIn);

    // Halfway through, eased progress is 0.25
    let mid = t0 + Duration::from_millis(100);
    assert!((tween.value_at(mid) - 25.0).abs() < 0.01);
}
