//! Gesture recognizers built on raw pointer events.

pub mod pan;

pub use pan::{HitSlop, PanEvent, PanEvents, PanGesture, PanGestureConfig};
