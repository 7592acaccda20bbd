// Host-side tests for the scroll-to-translation math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod parallax {
        include!("../src/core/parallax.rs");
    }
}

use crate::core::config::ParallaxConfig;
use crate::core::parallax::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn viewport(scroll_y: f64, height: f64, width: f64) -> Viewport {
    Viewport {
        scroll_y,
        height,
        width,
    }
}

#[test]
fn gallery_below_the_fold_is_inactive() {
    // top 3000 > scroll 1000 + height 800
    let vp = viewport(1000.0, 800.0, 1440.0);
    assert_eq!(activation_threshold(3000.0, &vp), 2200.0);
    assert_eq!(scroll_delta(3000.0, &vp), None);
}

#[test]
fn activation_starts_at_the_viewport_bottom() {
    let vp = viewport(2200.0, 800.0, 1440.0);
    assert_eq!(scroll_delta(3000.0, &vp), Some(0.0));
    let vp = viewport(2350.0, 800.0, 1440.0);
    assert_eq!(scroll_delta(3000.0, &vp), Some(150.0));
}

#[test]
fn direction_flags() {
    assert_eq!(Direction::from_flags(true, false), Direction::Left);
    assert_eq!(Direction::from_flags(false, true), Direction::Right);
    assert_eq!(Direction::from_flags(false, false), Direction::Neutral);
    assert_eq!(Direction::from_flags(true, true), Direction::Right);
}

#[test]
fn moving_right_adds_nine_tenths_at_any_width() {
    let cfg = ParallaxConfig::default();
    for width in [320.0, 800.0, 1200.0, 3000.0] {
        for slot in StripSlot::ALL {
            let s = speed(slot, Direction::Right, width, &cfg);
            assert!(approx(translate_x(40.0, s, 200.0), 220.0), "{slot:?} @ {width}");
        }
    }
}

#[test]
fn moving_left_subtracts_nine_tenths() {
    let cfg = ParallaxConfig::default();
    let s = speed(StripSlot::Second, Direction::Left, 1024.0, &cfg);
    assert!(approx(translate_x(0.0, s, 200.0), -180.0));
}

#[test]
fn neutral_speed_at_1024_follows_slot_sign() {
    let cfg = ParallaxConfig::default();
    let x1 = translate_x(10.0, speed(StripSlot::First, Direction::Neutral, 1024.0, &cfg), 100.0);
    let x2 = translate_x(10.0, speed(StripSlot::Second, Direction::Neutral, 1024.0, &cfg), 100.0);
    let x3 = translate_x(10.0, speed(StripSlot::Third, Direction::Neutral, 1024.0, &cfg), 100.0);
    assert!(approx(x1, 55.0));
    assert!(approx(x2, -35.0));
    assert!(approx(x3, 55.0));
}

#[test]
fn neutral_breakpoints() {
    let cfg = ParallaxConfig::default();
    let cases = [
        (3840.0, 0.9),
        (2560.0, 0.9),
        (2559.0, 0.55),
        (1440.0, 0.55),
        (1280.0, 0.45),
        (1024.0, 0.45),
        (800.0, 0.35),
        (768.0, 0.35),
        (767.0, 0.25),
        (320.0, 0.25),
        (300.0, 0.25),
    ];
    for (width, factor) in cases {
        assert!(
            approx(speed(StripSlot::First, Direction::Neutral, width, &cfg), factor),
            "width {width}"
        );
        assert!(approx(
            speed(StripSlot::Second, Direction::Neutral, width, &cfg),
            -factor
        ));
    }
}

#[test]
fn short_strips_keep_the_captured_baseline() {
    let cfg = ParallaxConfig::default();
    for slot in StripSlot::ALL {
        for dir in [Direction::Left, Direction::Right, Direction::Neutral] {
            assert_eq!(baseline_x(slot, dir, 7, -120.0, 1920.0, &cfg), -120.0);
            assert_eq!(baseline_x(slot, dir, 7, -120.0, 800.0, &cfg), -120.0);
        }
    }
}

#[test]
fn outer_strips_preroll_unless_moving_left() {
    let cfg = ParallaxConfig::default();
    for slot in [StripSlot::First, StripSlot::Third] {
        assert_eq!(baseline_x(slot, Direction::Neutral, 8, 0.0, 1920.0, &cfg), -2000.0);
        assert_eq!(baseline_x(slot, Direction::Right, 12, 0.0, 1920.0, &cfg), -2000.0);
        assert_eq!(baseline_x(slot, Direction::Neutral, 8, 0.0, 1199.0, &cfg), -900.0);
        assert_eq!(baseline_x(slot, Direction::Neutral, 8, 0.0, 1200.0, &cfg), -2000.0);
        assert_eq!(baseline_x(slot, Direction::Left, 8, -75.0, 1920.0, &cfg), -75.0);
        assert_eq!(baseline_x(slot, Direction::Left, 8, -75.0, 900.0, &cfg), -75.0);
    }
}

#[test]
fn middle_strip_preroll() {
    let cfg = ParallaxConfig::default();
    let slot = StripSlot::Second;
    assert_eq!(baseline_x(slot, Direction::Left, 8, -75.0, 1920.0, &cfg), -2000.0);
    assert_eq!(baseline_x(slot, Direction::Left, 8, -75.0, 900.0, &cfg), -2000.0);
    assert_eq!(baseline_x(slot, Direction::Neutral, 8, -75.0, 900.0, &cfg), 0.0);
    assert_eq!(baseline_x(slot, Direction::Right, 8, -75.0, 900.0, &cfg), 0.0);
    assert_eq!(baseline_x(slot, Direction::Neutral, 8, -75.0, 1920.0, &cfg), -75.0);
}
