//! Swipeable list-row control
//!
//! A row whose content can be dragged horizontally to reveal up to two
//! action steps per side. The drag offset is clamped to the configured
//! sides, each side tracks which of its steps is showing, pulses its icon
//! when a threshold is crossed and tints its background by drag distance.
//! Releasing past a threshold commits that step's action; the row then
//! springs back to rest.
//!
//! Caller callbacks never run inside [`Swipeable::on_pointer_event`]. They
//! are queued on the runtime's UI task queue and run from
//! [`swipeable_core::RuntimeHandle::drain_ui`].

mod action;
mod drag_controller;
mod error;
mod gesture_state;
mod options;
mod scene;
mod screen;
mod side;
mod swipeable;
pub mod util;

pub use action::{
    ActionGroup, ActionParams, ActionStep, Icon, IconFactory, StepAction, StepHitCallback,
    StepIndex, SwipeSide, DEFAULT_ICON_SIZE,
};
pub use drag_controller::{offset_bounds, resolve_release, DragController, DragPhase};
pub use error::ConfigError;
pub use gesture_state::{GestureSample, GestureState, GestureStateStore};
pub use options::{
    validate_group, SpringOverrides, SwipeableOptions, DEFAULT_ICON_POP_PHASE_MILLIS,
    DEFAULT_ICON_POP_SCALE, DEFAULT_SPRING,
};
pub use scene::{ForegroundLayer, IconAlignment, RowScene, SideLayer, ICON_INSET};
pub use screen::{FixedScreen, ScreenMetrics};
pub use side::{SideFrame, SidePresenter, REST_EPSILON};
pub use swipeable::{Swipeable, SwipeableBuilder, DEFAULT_ROW_HEIGHT};

pub use swipeable_foundation::{HitSlop, PointerEvent, PointerEventKind};
pub use swipeable_ui_graphics::Color;

pub mod prelude {
    pub use crate::action::{ActionGroup, ActionStep, Icon, StepIndex, SwipeSide};
    pub use crate::options::{SpringOverrides, SwipeableOptions};
    pub use crate::scene::RowScene;
    pub use crate::screen::{FixedScreen, ScreenMetrics};
    pub use crate::swipeable::Swipeable;
    pub use swipeable_ui_graphics::Color;
}

#[cfg(test)]
#[path = "tests/util_tests.rs"]
mod util_tests;

#[cfg(test)]
#[path = "tests/drag_controller_tests.rs"]
mod drag_controller_tests;

#[cfg(test)]
#[path = "tests/side_tests.rs"]
mod side_tests;

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod options_tests;
