use crate::{interpolate_color, Color, Rect, Size};

fn assert_color_near(actual: Color, expected: Color) {
    let channels = [
        (actual.r(), expected.r()),
        (actual.g(), expected.g()),
        (actual.b(), expected.b()),
        (actual.a(), expected.a()),
    ];
    for (a, e) in channels {
        assert!((a - e).abs() < 1e-4, "expected {expected:?}, got {actual:?}");
    }
}

#[test]
fn lerp_clamps_fraction() {
    assert_eq!(Color::BLACK.lerp(&Color::WHITE, -1.0), Color::BLACK);
    assert_eq!(Color::BLACK.lerp(&Color::WHITE, 2.0), Color::WHITE);
    assert_color_near(
        Color::TRANSPARENT.lerp(&Color::BLUE, 0.5),
        Color::rgba(0.0, 0.0, 0.5, 0.5),
    );
}

#[test]
fn two_stop_interpolation_fades_in() {
    let range = [0.0, 40.0];
    let colors = [Color::TRANSPARENT, Color::BLUE];

    assert_eq!(interpolate_color(0.0, &range, &colors), Color::TRANSPARENT);
    assert_color_near(
        interpolate_color(20.0, &range, &colors),
        Color::rgba(0.0, 0.0, 0.5, 0.5),
    );
    assert_eq!(interpolate_color(40.0, &range, &colors), Color::BLUE);
    assert_eq!(interpolate_color(400.0, &range, &colors), Color::BLUE);
    assert_eq!(interpolate_color(-5.0, &range, &colors), Color::TRANSPARENT);
}

#[test]
fn four_stop_interpolation_holds_then_blends() {
    let range = [0.0, 40.0, 108.0, 150.0];
    let colors = [Color::TRANSPARENT, Color::BLUE, Color::BLUE, Color::RED];

    assert_eq!(interpolate_color(60.0, &range, &colors), Color::BLUE);
    assert_eq!(interpolate_color(108.0, &range, &colors), Color::BLUE);
    assert_color_near(
        interpolate_color(129.0, &range, &colors),
        Color::rgba(0.5, 0.0, 0.5, 1.0),
    );
    assert_eq!(interpolate_color(150.0, &range, &colors), Color::RED);
}

#[test]
fn zero_width_segment_jumps_between_colors() {
    let range = [0.0, 10.0, 10.0, 20.0];
    let colors = [Color::TRANSPARENT, Color::GREEN, Color::RED, Color::WHITE];
    assert_eq!(interpolate_color(10.0, &range, &colors), Color::GREEN);
    assert_color_near(
        interpolate_color(15.0, &range, &colors),
        Color::rgba(1.0, 0.5, 0.5, 1.0),
    );
}

#[test]
fn rect_translation_keeps_size() {
    let rect = Rect::from_size(Size::new(320.0, 100.0));
    let moved = rect.translate_x(-85.0);
    assert_eq!(moved.x, -85.0);
    assert_eq!(moved.size(), rect.size());
    assert!(rect.contains(10.0, 50.0));
    assert!(!moved.contains(300.0, 50.0));
}

#[test]
fn rect_outset_widens_horizontally() {
    let rect = Rect::from_size(Size::new(320.0, 100.0));
    let wide = rect.outset_x(20.0, 30.0);
    assert_eq!(wide.x, -20.0);
    assert_eq!(wide.width, 370.0);
    assert_eq!(wide.height, rect.height);
    assert!(wide.contains(-20.0, 50.0));
    assert!(wide.contains(350.0, 50.0));
    assert!(!wide.contains(351.0, 50.0));
}
