use super::*;

use swipeable_core::Runtime;

const FRAME_NANOS: u64 = 16_666_667;

fn linear(duration_millis: u64) -> TweenSpec {
    TweenSpec::tween(duration_millis, Easing::Linear)
}

fn under_damped(damping: f32, stiffness: f32) -> SpringSpec {
    SpringSpec {
        damping,
        stiffness,
        ..SpringSpec::default()
    }
}

/// Pumps frames until the runtime goes idle; returns every published value.
fn run_frames(runtime: &Runtime, state: &State<f32>, max_frames: usize) -> Vec<f32> {
    let handle = runtime.handle();
    let mut samples = Vec::new();
    let mut frame_time = 0u64;
    for _ in 0..max_frames {
        if !handle.has_frame_callbacks() {
            break;
        }
        frame_time += FRAME_NANOS;
        handle.drain_frame_callbacks(frame_time);
        samples.push(state.get());
    }
    samples
}

#[test]
fn tween_interpolates_over_time() {
    let runtime = Runtime::default();
    let mut animatable = Animatable::new(0.0f32, runtime.handle());
    let state = animatable.state();

    animatable.animate_to(1.0, AnimationType::Tween(linear(100)));
    assert!(animatable.is_running());
    assert_eq!(state.get(), 0.0, "value does not move before the first frame");

    let samples = run_frames(&runtime, &state, 32);
    assert!(samples.iter().any(|value| *value > 0.0 && *value < 1.0));
    assert_eq!(samples.last().copied(), Some(1.0));
    assert!(!animatable.is_running());
    assert!(runtime.handle().is_idle());
}

#[test]
fn clamped_spring_never_passes_target() {
    let runtime = Runtime::default();
    let mut animatable = Animatable::new(-150.0f32, runtime.handle());
    let state = animatable.state();
    let spec = SpringSpec {
        mass: 1.0,
        damping: 5.0,
        stiffness: 100.0,
        overshoot_clamping: true,
        rest_displacement_threshold: 0.01,
        rest_speed_threshold: 0.01,
        initial_velocity: 0.0,
    };

    animatable.animate_to(0.0, AnimationType::Spring(spec));
    let samples = run_frames(&runtime, &state, 600);

    assert!(samples.iter().all(|value| *value <= 0.0));
    assert_eq!(samples.last().copied(), Some(0.0));
    assert!(!animatable.is_running());
}

#[test]
fn unclamped_spring_overshoots_then_settles() {
    let runtime = Runtime::default();
    let mut animatable = Animatable::new(100.0f32, runtime.handle());
    let state = animatable.state();

    animatable.animate_to(0.0, AnimationType::Spring(under_damped(8.0, 200.0)));
    let samples = run_frames(&runtime, &state, 2_000);

    assert!(samples.iter().any(|value| *value < 0.0), "under-damped spring bounces");
    assert_eq!(samples.last().copied(), Some(0.0));
}

#[test]
fn bounds_stop_a_spring() {
    let runtime = Runtime::default();
    let mut animatable = Animatable::new(-120.0f32, runtime.handle());
    animatable.update_bounds(Some(-300.0), Some(0.0));
    let state = animatable.state();

    animatable.animate_to(0.0, AnimationType::Spring(under_damped(7.0, 300.0)));
    let samples = run_frames(&runtime, &state, 600);

    assert!(samples.iter().all(|value| *value <= 0.0));
    assert_eq!(samples.last().copied(), Some(0.0));
    assert!(!animatable.is_running());
}

#[test]
fn snap_to_cancels_running_animation_and_respects_bounds() {
    let runtime = Runtime::default();
    let mut animatable = Animatable::new(50.0f32, runtime.handle());
    animatable.update_bounds(Some(0.0), Some(100.0));
    let state = animatable.state();

    animatable.animate_to(0.0, AnimationType::Spring(SpringSpec::default()));
    animatable.snap_to(250.0);

    assert_eq!(state.get(), 100.0);
    assert!(!animatable.is_running());
    assert!(runtime.handle().is_idle());
}

#[test]
fn sequence_runs_segments_back_to_back() {
    let runtime = Runtime::default();
    let mut scale = Animatable::new(1.0f32, runtime.handle());
    let state = scale.state();

    scale.animate_sequence([
        (1.2, AnimationType::Tween(linear(100))),
        (1.0, AnimationType::Tween(linear(100))),
    ]);
    let samples = run_frames(&runtime, &state, 64);

    let peak = samples.iter().copied().fold(f32::MIN, f32::max);
    assert!((peak - 1.2).abs() < 1e-4, "peak was {peak}");
    assert_eq!(samples.last().copied(), Some(1.0));
    // Two 100ms phases at ~60fps finish in roughly a dozen frames.
    assert!(samples.len() <= 16, "took {} frames", samples.len());
}

#[test]
fn animate_to_replaces_queued_segments() {
    let runtime = Runtime::default();
    let mut value = Animatable::new(0.0f32, runtime.handle());
    let state = value.state();

    value.animate_sequence([
        (10.0, AnimationType::Tween(linear(50))),
        (20.0, AnimationType::Tween(linear(50))),
    ]);
    value.animate_to(-5.0, AnimationType::Tween(linear(50)));
    let samples = run_frames(&runtime, &state, 32);

    assert!(samples.iter().all(|sample| *sample <= 0.0));
    assert_eq!(samples.last().copied(), Some(-5.0));
}

#[test]
fn easing_endpoints_are_fixed() {
    for easing in [Easing::Linear, Easing::QuadInOut] {
        assert!(easing.transform(0.0).abs() < 0.01, "start of {easing:?}");
        assert!((easing.transform(1.0) - 1.0).abs() < 0.01, "end of {easing:?}");
        assert!((easing.transform(0.5) - 0.5).abs() < 0.2, "middle of {easing:?}");
    }
}

#[test]
fn huge_tween_duration_saturates() {
    let runtime = Runtime::default();
    let mut animatable = Animatable::new(0.0f32, runtime.handle());
    let state = animatable.state();

    let endless = TweenSpec::tween(u64::MAX, Easing::QuadInOut);
    animatable.animate_to(1.0, AnimationType::Tween(endless));
    let samples = run_frames(&runtime, &state, 4);

    assert_eq!(samples.len(), 4);
    assert!(samples.iter().all(|value| *value >= 0.0 && *value < 1e-6));
    assert!(animatable.is_running());
}
