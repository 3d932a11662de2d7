//! Pointer input plumbing and gesture recognizers.

pub mod gesture_constants;
pub mod nodes;

pub use nodes::input::gestures::{HitSlop, PanEvent, PanEvents, PanGesture, PanGestureConfig};
pub use nodes::input::{PointerEvent, PointerEventKind, PointerId, PointerPhase};

pub mod prelude {
    pub use crate::nodes::input::gestures::{PanEvent, PanGesture, PanGestureConfig};
    pub use crate::nodes::input::prelude::*;
}

#[cfg(test)]
#[path = "tests/pan_gesture_tests.rs"]
mod pan_gesture_tests;
