use std::cell::Cell;
use std::rc::Rc;

use swipeable_core::Runtime;

use crate::{
    ActionGroup, ActionStep, Color, GestureSample, Icon, SidePresenter, StepIndex, SwipeSide,
    SwipeableOptions,
};

fn group() -> ActionGroup {
    ActionGroup::new(ActionStep::new(80.0, Color::BLUE, || Icon::named("archive")))
        .with_second_step(ActionStep::new(150.0, Color::RED, || Icon::named("trash")))
}

fn dragging(offset_x: f32) -> GestureSample {
    GestureSample {
        offset_x,
        is_dragging: true,
    }
}

fn released(offset_x: f32) -> GestureSample {
    GestureSample {
        offset_x,
        is_dragging: false,
    }
}

#[test]
fn held_drag_pulses_once() {
    let runtime = Runtime::default();
    let mut right = SidePresenter::new(
        SwipeSide::Right,
        group(),
        &SwipeableOptions::default(),
        runtime.handle(),
    );

    for offset in [0.0, -40.0, -90.0, -90.0, -90.0] {
        right.evaluate(dragging(offset));
    }
    assert_eq!(right.pulse_count(), 1);
    assert_eq!(right.active_step(), StepIndex::First);
}

#[test]
fn second_threshold_switches_icon_both_ways() {
    let runtime = Runtime::default();
    let mut right = SidePresenter::new(
        SwipeSide::Right,
        group(),
        &SwipeableOptions::default(),
        runtime.handle(),
    );

    right.evaluate(dragging(-90.0));
    let frame = right.evaluate(dragging(-160.0));
    assert_eq!(frame.active_step, StepIndex::Second);
    assert_eq!(frame.icon, Icon::named("trash"));

    let frame = right.evaluate(dragging(-100.0));
    assert_eq!(frame.active_step, StepIndex::First);
    assert_eq!(frame.icon, Icon::named("archive"));
    assert_eq!(right.pulse_count(), 3);
}

#[test]
fn other_side_stays_transparent_and_frozen() {
    let runtime = Runtime::default();
    let mut right = SidePresenter::new(
        SwipeSide::Right,
        group(),
        &SwipeableOptions::default(),
        runtime.handle(),
    );

    for offset in [30.0, 90.0, 200.0] {
        let frame = right.evaluate(dragging(offset));
        assert!(frame.background.is_transparent());
        assert_eq!(frame.active_step, StepIndex::First);
    }
    assert_eq!(right.pulse_count(), 0);
}

#[test]
fn color_follows_breakpoints_and_holds_after_release() {
    let runtime = Runtime::default();
    let mut left = SidePresenter::new(
        SwipeSide::Left,
        group(),
        &SwipeableOptions::default(),
        runtime.handle(),
    );

    assert_eq!(left.evaluate(dragging(0.0)).background, Color::TRANSPARENT);
    let half = left.evaluate(dragging(20.0)).background;
    assert!((half.a() - 0.5).abs() < 1e-4);
    assert_eq!(left.evaluate(dragging(100.0)).background, Color::BLUE);
    assert_eq!(left.evaluate(dragging(150.0)).background, Color::RED);
    assert_eq!(left.evaluate(dragging(60.0)).background, Color::BLUE);

    // Released: the color holds while the row springs back.
    assert_eq!(left.evaluate(released(45.0)).background, Color::BLUE);
    assert_eq!(left.evaluate(released(3.0)).background, Color::BLUE);
    assert_eq!(left.evaluate(released(0.0)).background, Color::TRANSPARENT);
}

#[test]
fn return_to_rest_resets_step() {
    let runtime = Runtime::default();
    let mut left = SidePresenter::new(
        SwipeSide::Left,
        group(),
        &SwipeableOptions::default(),
        runtime.handle(),
    );

    left.evaluate(dragging(170.0));
    assert_eq!(left.active_step(), StepIndex::Second);

    left.evaluate(released(120.0));
    assert_eq!(left.active_step(), StepIndex::Second, "no reset mid spring-back");

    let frame = left.evaluate(released(0.4));
    assert_eq!(frame.active_step, StepIndex::First);
    assert_eq!(frame.icon_scale, 1.0);
    assert!(frame.background.is_transparent());
}

#[test]
fn pulse_pops_icon_and_queues_step_hit() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    let options = SwipeableOptions::default()
        .icon_pop_scale(1.5)
        .on_each_step_hit(move || counter.set(counter.get() + 1));
    let mut left = SidePresenter::new(SwipeSide::Left, group(), &options, handle.clone());

    left.evaluate(dragging(85.0));
    assert_eq!(hits.get(), 0, "step hit runs from the UI queue");
    assert_eq!(handle.drain_ui(), 1);
    assert_eq!(hits.get(), 1);

    let mut peak = 1.0f32;
    let mut time = 0;
    while handle.has_frame_callbacks() {
        time += 16_666_667;
        handle.drain_frame_callbacks(time);
        peak = peak.max(left.icon_scale());
    }
    assert!((peak - 1.5).abs() < 1e-4, "peak was {peak}");
    assert_eq!(left.icon_scale(), 1.0);
}
