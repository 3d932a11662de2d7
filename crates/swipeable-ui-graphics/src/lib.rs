//! Pure math/data for drawing the swipeable row control
//!
//! Geometry primitives, colors and the breakpoint color interpolation used to
//! tint the action backgrounds.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::{interpolate_color, Color};
    pub use crate::geometry::{Point, Rect, Size};
}

#[cfg(test)]
#[path = "tests/color_tests.rs"]
mod color_tests;
