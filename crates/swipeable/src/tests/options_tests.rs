use swipeable_core::Runtime;

use crate::{
    ActionGroup, ActionStep, Color, ConfigError, FixedScreen, Icon, SpringOverrides, StepIndex,
    SwipeSide, Swipeable, SwipeableOptions, DEFAULT_SPRING,
};

fn step(threshold: f32) -> ActionStep {
    ActionStep::new(threshold, Color::BLUE, || Icon::named("dot"))
}

fn build_with(
    right: ActionGroup,
    options: SwipeableOptions,
) -> Result<Swipeable<()>, ConfigError> {
    let runtime = Runtime::default();
    Swipeable::builder()
        .right_action_group(right)
        .options(options)
        .build(runtime.handle(), &FixedScreen::new(400.0, 800.0))
}

#[test]
fn default_spring_is_clamped_and_soft() {
    let spring = SwipeableOptions::default().spring_spec();
    assert_eq!(spring, DEFAULT_SPRING);
    assert_eq!(spring.mass, 1.0);
    assert_eq!(spring.damping, 5.0);
    assert_eq!(spring.stiffness, 100.0);
    assert!(spring.overshoot_clamping);
    assert_eq!(spring.rest_displacement_threshold, 0.01);
    assert_eq!(spring.rest_speed_threshold, 0.01);
}

#[test]
fn overrides_merge_over_defaults() {
    let options = SwipeableOptions::default()
        .overshoot_clamping(false)
        .spring_config(SpringOverrides::default().stiffness(250.0));
    let spring = options.spring_spec();
    assert_eq!(spring.stiffness, 250.0);
    assert_eq!(spring.damping, 5.0);
    assert!(!spring.overshoot_clamping, "option-level clamping applies");

    let options = options.spring_config(SpringOverrides::default().overshoot_clamping(true));
    assert!(options.spring_spec().overshoot_clamping, "spring override wins");
}

#[test]
fn pan_config_mirrors_options() {
    let options = SwipeableOptions::default()
        .active_offset_range(-10.0, 30.0)
        .max_pointers(2);
    let pan = options.pan_config();
    assert_eq!(pan.active_offset_x, (-10.0, 30.0));
    assert_eq!(pan.max_pointers, 2);
    assert_eq!(pan.hit_slop, options.hit_slop);
}

#[test]
fn rejects_invalid_thresholds() {
    let err = build_with(ActionGroup::new(step(0.0)), SwipeableOptions::default()).err();
    assert_eq!(
        err,
        Some(ConfigError::InvalidThreshold {
            side: SwipeSide::Right,
            step: StepIndex::First,
            value: 0.0,
        })
    );

    let err = build_with(
        ActionGroup::new(step(80.0)).with_second_step(step(f32::INFINITY)),
        SwipeableOptions::default(),
    )
    .err();
    assert!(matches!(
        err,
        Some(ConfigError::InvalidThreshold {
            step: StepIndex::Second,
            ..
        })
    ));
}

#[test]
fn rejects_steps_out_of_order() {
    let err = build_with(
        ActionGroup::new(step(150.0)).with_second_step(step(80.0)),
        SwipeableOptions::default(),
    )
    .err();
    assert_eq!(
        err,
        Some(ConfigError::StepsOutOfOrder {
            side: SwipeSide::Right,
            first: 150.0,
            second: 80.0,
        })
    );
}

#[test]
fn rejects_second_step_inside_hold_band() {
    let err = build_with(
        ActionGroup::new(step(80.0)).with_second_step(step(100.0)),
        SwipeableOptions::default(),
    )
    .err();
    match err {
        Some(ConfigError::ColorBreakpointsOutOfOrder {
            side,
            hold_end,
            second,
        }) => {
            assert_eq!(side, SwipeSide::Right);
            assert!((hold_end - 108.0).abs() < 1e-3);
            assert_eq!(second, 100.0);
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn rejects_invalid_options() {
    let group = || ActionGroup::new(step(80.0));
    let cases = [
        (
            SwipeableOptions::default().active_offset_range(5.0, 20.0),
            ConfigError::InvalidActiveOffsetRange(5.0, 20.0),
        ),
        (
            SwipeableOptions::default().max_pointers(0),
            ConfigError::InvalidMaxPointers(0),
        ),
        (
            SwipeableOptions::default().icon_pop_scale(-1.0),
            ConfigError::InvalidPopScale(-1.0),
        ),
        (
            SwipeableOptions::default().spring_config(SpringOverrides::default().mass(0.0)),
            ConfigError::InvalidSpring {
                field: "mass",
                value: 0.0,
            },
        ),
    ];
    for (options, expected) in cases {
        assert_eq!(build_with(group(), options).err(), Some(expected));
    }
}

#[test]
fn rejects_degenerate_screen() {
    let runtime = Runtime::default();
    let err = Swipeable::builder()
        .left_action_group(ActionGroup::new(step(80.0)))
        .build(runtime.handle(), &FixedScreen::new(0.0, 800.0))
        .err();
    assert_eq!(err, Some(ConfigError::InvalidScreenWidth(0.0)));
}

#[test]
fn errors_describe_the_problem() {
    let message = ConfigError::StepsOutOfOrder {
        side: SwipeSide::Left,
        first: 150.0,
        second: 80.0,
    }
    .to_string();
    assert!(message.contains("left"));
    assert!(message.contains("150"));
}
