//! Core runtime for the swipeable row control.
//!
//! The runtime owns two queues: frame callbacks, drained once per display
//! frame with the frame timestamp, and UI tasks, the standard execution
//! context where caller-supplied callbacks run. State shared between the
//! gesture context and frame readers lives in single-writer cells.

mod frame_clock;
mod platform;
mod runtime;
mod state;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::{Clock, RuntimeScheduler};
pub use runtime::{DefaultScheduler, Runtime, RuntimeHandle};
pub use state::{MutableState, State};

pub type FrameCallbackId = u64;

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod runtime_tests;

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod state_tests;
