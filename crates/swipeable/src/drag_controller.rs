//! Maps pan gesture callbacks onto the row's drag state.

use swipeable_animation::SpringSpec;
use swipeable_core::RuntimeHandle;
use swipeable_foundation::PanEvent;

use crate::action::{ActionGroup, StepIndex, SwipeSide};
use crate::gesture_state::{GestureSample, GestureState, GestureStateStore};
use crate::util::clamp;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// Offset limits for a row: `0` on a side without a group, the screen width
/// otherwise.
pub fn offset_bounds(has_left: bool, has_right: bool, screen_width: f32) -> (f32, f32) {
    (
        if has_right { -screen_width } else { 0.0 },
        if has_left { screen_width } else { 0.0 },
    )
}

/// Picks the step committed by a release at `final_dx`.
///
/// Positive travel selects the left group and negative the right; zero
/// selects nothing. Within the group the second step wins when reached.
pub fn resolve_release(
    final_dx: f32,
    left: Option<&ActionGroup>,
    right: Option<&ActionGroup>,
) -> Option<(SwipeSide, StepIndex)> {
    let side = SwipeSide::from_offset(final_dx)?;
    let group = match side {
        SwipeSide::Left => left?,
        SwipeSide::Right => right?,
    };
    group
        .step_for_distance(final_dx.abs())
        .map(|index| (side, index))
}

pub struct DragController {
    runtime: RuntimeHandle,
    store: GestureStateStore,
    left: Option<ActionGroup>,
    right: Option<ActionGroup>,
    bounds: (f32, f32),
    spring: SpringSpec,
    phase: DragPhase,
    ended: bool,
}

impl DragController {
    pub fn new(
        runtime: RuntimeHandle,
        left: Option<ActionGroup>,
        right: Option<ActionGroup>,
        screen_width: f32,
        spring: SpringSpec,
    ) -> Self {
        let bounds = offset_bounds(left.is_some(), right.is_some(), screen_width);
        Self {
            store: GestureStateStore::new(runtime.clone(), bounds),
            runtime,
            left,
            right,
            bounds,
            spring,
            phase: DragPhase::Idle,
            ended: false,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn bounds(&self) -> (f32, f32) {
        self.bounds
    }

    pub fn spring(&self) -> SpringSpec {
        self.spring
    }

    pub fn gesture_state(&self) -> GestureState {
        self.store.handle()
    }

    pub fn sample(&self) -> GestureSample {
        self.store.sample()
    }

    pub fn is_settling(&self) -> bool {
        self.store.is_settling()
    }

    pub fn on_begin(&mut self) {
        self.phase = DragPhase::Dragging;
        self.ended = false;
        self.store.set_dragging(true);
    }

    /// Writes the clamped offset; a running spring-back is cancelled.
    pub fn on_update(&mut self, raw_dx: f32) {
        let offset_x = clamp(raw_dx, self.bounds.0, self.bounds.1);
        log::trace!("drag update raw={raw_dx} offset={offset_x}");
        self.store.set_offset(offset_x);
    }

    /// Schedules the spring-back, then queues at most one step action.
    pub fn on_end(&mut self, final_dx: f32) {
        self.ended = true;
        self.phase = DragPhase::Idle;
        self.store.spring_back(self.spring);

        let Some((side, index)) =
            resolve_release(final_dx, self.left.as_ref(), self.right.as_ref())
        else {
            log::debug!("release at {final_dx} below every threshold");
            return;
        };
        let group = match side {
            SwipeSide::Left => self.left.as_ref(),
            SwipeSide::Right => self.right.as_ref(),
        };
        let Some(step) = group.map(|group| group.step(index)) else {
            return;
        };
        log::debug!("release at {final_dx} commits {side} {index} step");
        if let Some(invoke) = step.invocation() {
            self.runtime.enqueue_ui_task(invoke);
        }
    }

    /// Leaves the dragging state. A gesture that never reached `on_end` was
    /// cancelled; its offset springs back without committing anything.
    pub fn on_finalize(&mut self) {
        if !self.ended && !self.store.is_settling() && self.store.offset_x() != 0.0 {
            log::debug!("drag cancelled at {}; springing back", self.store.offset_x());
            self.store.spring_back(self.spring);
        }
        self.ended = false;
        self.phase = DragPhase::Idle;
        self.store.set_dragging(false);
    }

    pub fn handle_pan_event(&mut self, event: PanEvent) {
        match event {
            PanEvent::Begin => self.on_begin(),
            PanEvent::Update { translation_x } => self.on_update(translation_x),
            PanEvent::End { translation_x } => self.on_end(translation_x),
            PanEvent::Finalize { .. } => self.on_finalize(),
        }
    }
}
