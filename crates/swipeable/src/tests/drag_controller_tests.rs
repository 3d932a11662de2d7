use std::cell::RefCell;
use std::rc::Rc;

use swipeable_core::Runtime;
use swipeable_foundation::PanEvent;

use crate::{
    resolve_release, ActionGroup, ActionStep, Color, DragController, DragPhase, Icon, StepIndex,
    SwipeSide, DEFAULT_SPRING,
};

const SCREEN_WIDTH: f32 = 400.0;

type Log = Rc<RefCell<Vec<String>>>;

fn recording_step(threshold: f32, name: &'static str, log: &Log) -> ActionStep {
    let log = Rc::clone(log);
    ActionStep::new(threshold, Color::BLUE, move || Icon::named(name))
        .on_action(move |_| log.borrow_mut().push(name.to_string()))
}

fn two_step_group(log: &Log, prefix: &'static str) -> ActionGroup {
    let (first, second) = match prefix {
        "left" => ("left-first", "left-second"),
        _ => ("right-first", "right-second"),
    };
    ActionGroup::new(recording_step(80.0, first, log))
        .with_second_step(recording_step(150.0, second, log))
}

#[test]
fn second_step_takes_precedence() {
    let log = Log::default();
    let group = two_step_group(&log, "right");

    assert_eq!(
        resolve_release(-160.0, None, Some(&group)),
        Some((SwipeSide::Right, StepIndex::Second))
    );
    assert_eq!(
        resolve_release(-100.0, None, Some(&group)),
        Some((SwipeSide::Right, StepIndex::First))
    );
    assert_eq!(resolve_release(-50.0, None, Some(&group)), None);
    assert_eq!(resolve_release(0.0, Some(&group), Some(&group)), None);
    assert_eq!(resolve_release(160.0, None, Some(&group)), None);
    assert_eq!(
        resolve_release(150.0, Some(&group), None),
        Some((SwipeSide::Left, StepIndex::Second))
    );
}

#[test]
fn offset_is_clamped_to_configured_sides() {
    let runtime = Runtime::default();
    let log = Log::default();
    let mut controller = DragController::new(
        runtime.handle(),
        None,
        Some(two_step_group(&log, "right")),
        SCREEN_WIDTH,
        DEFAULT_SPRING,
    );
    assert_eq!(controller.bounds(), (-SCREEN_WIDTH, 0.0));

    controller.on_begin();
    controller.on_update(75.0);
    assert_eq!(controller.sample().offset_x, 0.0);
    controller.on_update(-1_000.0);
    assert_eq!(controller.sample().offset_x, -SCREEN_WIDTH);
    controller.on_update(-42.0);
    assert_eq!(controller.sample().offset_x, -42.0);
}

#[test]
fn release_queues_action_after_spring_back() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let log = Log::default();
    let mut controller = DragController::new(
        handle.clone(),
        Some(two_step_group(&log, "left")),
        Some(two_step_group(&log, "right")),
        SCREEN_WIDTH,
        DEFAULT_SPRING,
    );

    controller.handle_pan_event(PanEvent::Begin);
    assert_eq!(controller.phase(), DragPhase::Dragging);
    assert!(controller.sample().is_dragging);
    controller.handle_pan_event(PanEvent::Update {
        translation_x: -85.0,
    });
    controller.handle_pan_event(PanEvent::End {
        translation_x: -85.0,
    });

    assert!(controller.is_settling(), "spring-back scheduled at release");
    assert!(log.borrow().is_empty(), "action must not run in place");
    assert!(controller.sample().is_dragging, "dragging until finalize");

    controller.handle_pan_event(PanEvent::Finalize { success: true });
    assert_eq!(controller.phase(), DragPhase::Idle);
    assert!(!controller.sample().is_dragging);

    assert_eq!(handle.drain_ui(), 1);
    assert_eq!(*log.borrow(), vec!["right-first".to_string()]);
}

#[test]
fn action_receives_its_params() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let received = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&received);
    let group = ActionGroup::new(
        ActionStep::new(80.0, Color::GREEN, || Icon::named("archive"))
            .action_params(42u32)
            .on_action(move |params| {
                *sink.borrow_mut() = params.and_then(|p| p.downcast_ref::<u32>()).copied();
            }),
    );
    let mut controller =
        DragController::new(handle.clone(), Some(group), None, SCREEN_WIDTH, DEFAULT_SPRING);

    controller.on_begin();
    controller.on_update(120.0);
    controller.on_end(120.0);
    controller.on_finalize();
    handle.drain_ui();

    assert_eq!(*received.borrow(), Some(42));
}

#[test]
fn step_without_action_is_a_no_op() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let group = ActionGroup::new(ActionStep::new(80.0, Color::GREEN, || Icon::named("info")));
    let mut controller =
        DragController::new(handle.clone(), Some(group), None, SCREEN_WIDTH, DEFAULT_SPRING);

    controller.on_begin();
    controller.on_update(120.0);
    controller.on_end(120.0);
    controller.on_finalize();

    assert!(!handle.has_pending_ui());
}

#[test]
fn cancelled_gesture_springs_back_without_action() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let log = Log::default();
    let mut controller = DragController::new(
        handle.clone(),
        Some(two_step_group(&log, "left")),
        None,
        SCREEN_WIDTH,
        DEFAULT_SPRING,
    );

    controller.on_begin();
    controller.on_update(170.0);
    controller.on_finalize();

    assert!(!controller.sample().is_dragging);
    assert!(controller.is_settling());
    assert_eq!(handle.drain_ui(), 0);

    let mut time = 0;
    while handle.has_frame_callbacks() && time < 10_000_000_000 {
        time += 16_666_667;
        handle.drain_frame_callbacks(time);
        assert!(controller.sample().offset_x >= 0.0);
    }
    assert_eq!(controller.sample().offset_x, 0.0);
    assert!(log.borrow().is_empty());
}

#[test]
fn update_interrupts_spring_back() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let log = Log::default();
    let mut controller = DragController::new(
        handle.clone(),
        Some(two_step_group(&log, "left")),
        None,
        SCREEN_WIDTH,
        DEFAULT_SPRING,
    );

    controller.on_begin();
    controller.on_update(60.0);
    controller.on_end(60.0);
    controller.on_finalize();
    assert!(controller.is_settling());

    controller.on_begin();
    controller.on_update(30.0);
    assert!(!controller.is_settling());
    assert_eq!(controller.sample().offset_x, 30.0);
}
