//! Assertion utilities for robot testing

use swipeable_ui_graphics::Color;

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that every channel of a color is within `tolerance`.
pub fn assert_color_approx_eq(actual: Color, expected: Color, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.r(), expected.r(), tolerance, &format!("{} - r", msg));
    assert_approx_eq(actual.g(), expected.g(), tolerance, &format!("{} - g", msg));
    assert_approx_eq(actual.b(), expected.b(), tolerance, &format!("{} - b", msg));
    assert_approx_eq(actual.a(), expected.a(), tolerance, &format!("{} - a", msg));
}

pub fn assert_transparent(actual: Color, msg: &str) {
    assert!(
        actual.is_transparent(),
        "{}: expected transparent, got {:?}",
        msg,
        actual
    );
}
