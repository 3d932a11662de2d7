//! Per-row drag state shared between the controller and its readers.
//!
//! [`GestureStateStore`] is the single writer of `offset_x` and
//! `is_dragging`. It is owned by the drag controller and cannot be cloned.
//! Presenters and the foreground read through [`GestureState`] handles and
//! sample once per frame.

use swipeable_animation::{Animatable, AnimationType, SpringSpec};
use swipeable_core::{MutableState, RuntimeHandle, State};

/// One consistent read of the shared drag state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSample {
    pub offset_x: f32,
    pub is_dragging: bool,
}

pub struct GestureStateStore {
    offset_x: Animatable<f32>,
    is_dragging: MutableState<bool>,
}

impl GestureStateStore {
    /// Creates a store at rest with `offset_x` limited to `[min, max]`.
    pub fn new(runtime: RuntimeHandle, (min, max): (f32, f32)) -> Self {
        let mut offset_x = Animatable::new(0.0, runtime.clone());
        offset_x.update_bounds(Some(min), Some(max));
        Self {
            offset_x,
            is_dragging: MutableState::with_runtime(false, runtime),
        }
    }

    pub fn offset_x(&self) -> f32 {
        self.offset_x.value()
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging.get()
    }

    /// Whether the spring-back is still moving the offset.
    pub fn is_settling(&self) -> bool {
        self.offset_x.is_running()
    }

    pub fn sample(&self) -> GestureSample {
        GestureSample {
            offset_x: self.offset_x(),
            is_dragging: self.is_dragging(),
        }
    }

    pub fn handle(&self) -> GestureState {
        GestureState {
            offset_x: self.offset_x.state(),
            is_dragging: self.is_dragging.as_state(),
        }
    }

    pub(crate) fn set_dragging(&mut self, dragging: bool) {
        if self.is_dragging.get() != dragging {
            self.is_dragging.set_value(dragging);
        }
    }

    /// Moves the offset immediately, cancelling a running spring-back.
    pub(crate) fn set_offset(&mut self, offset_x: f32) {
        self.offset_x.snap_to(offset_x);
    }

    pub(crate) fn spring_back(&mut self, spring: SpringSpec) {
        self.offset_x.animate_to(0.0, AnimationType::Spring(spring));
    }
}

/// Read-only view of a row's drag state.
#[derive(Clone, Debug)]
pub struct GestureState {
    offset_x: State<f32>,
    is_dragging: State<bool>,
}

impl GestureState {
    pub fn offset_x(&self) -> f32 {
        self.offset_x.get()
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging.get()
    }

    pub fn sample(&self) -> GestureSample {
        GestureSample {
            offset_x: self.offset_x(),
            is_dragging: self.is_dragging(),
        }
    }

    /// Combined write counters; changes whenever either value is written.
    pub fn version(&self) -> (u64, u64) {
        (self.offset_x.version(), self.is_dragging.version())
    }
}
