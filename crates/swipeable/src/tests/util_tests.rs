use crate::util::{clamp, color_input_range, color_output_range};
use crate::{ActionGroup, ActionStep, Color, Icon};

fn step(threshold: f32, color: Color) -> ActionStep {
    ActionStep::new(threshold, color, || Icon::named("dot"))
}

#[test]
fn clamp_stays_in_range() {
    let ranges = [(-400.0, 0.0), (0.0, 400.0), (-400.0, 400.0), (0.0, 0.0)];
    let values = [-1_000.0, -400.0, -85.0, 0.0, 12.5, 400.0, 1_000.0];
    for (min, max) in ranges {
        for value in values {
            let clamped = clamp(value, min, max);
            assert!((min..=max).contains(&clamped), "{value} in [{min}, {max}]");
            if (min..=max).contains(&value) {
                assert_eq!(clamped, value);
            }
        }
    }
}

#[test]
fn clamp_is_total_for_nan() {
    let clamped = clamp(f32::NAN, -10.0, 10.0);
    assert!((-10.0..=10.0).contains(&clamped));
}

#[test]
fn single_step_breakpoints() {
    let group = ActionGroup::new(step(80.0, Color::BLUE));
    assert_eq!(color_input_range(&group).as_slice(), &[0.0, 40.0]);
    assert_eq!(
        color_output_range(&group).as_slice(),
        &[Color::TRANSPARENT, Color::BLUE]
    );
}

#[test]
fn two_step_breakpoints() {
    let group =
        ActionGroup::new(step(80.0, Color::BLUE)).with_second_step(step(150.0, Color::RED));
    let range = color_input_range(&group);
    let expected = [0.0, 40.0, 108.0, 150.0];
    assert_eq!(range.len(), expected.len());
    for (actual, expected) in range.iter().zip(expected) {
        assert!((actual - expected).abs() < 1e-4, "{actual} vs {expected}");
    }
    assert_eq!(
        color_output_range(&group).as_slice(),
        &[Color::TRANSPARENT, Color::BLUE, Color::BLUE, Color::RED]
    );
}
