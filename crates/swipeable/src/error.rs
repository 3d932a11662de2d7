use std::fmt;

use crate::action::{StepIndex, SwipeSide};

/// Configuration rejected when a row is built.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Threshold is not finite or not positive.
    InvalidThreshold {
        side: SwipeSide,
        step: StepIndex,
        value: f32,
    },
    /// Second threshold does not exceed the first.
    StepsOutOfOrder {
        side: SwipeSide,
        first: f32,
        second: f32,
    },
    /// Second threshold falls inside the first color's hold band.
    ColorBreakpointsOutOfOrder {
        side: SwipeSide,
        hold_end: f32,
        second: f32,
    },
    InvalidPopScale(f32),
    InvalidActiveOffsetRange(f32, f32),
    InvalidMaxPointers(usize),
    InvalidSpring {
        field: &'static str,
        value: f32,
    },
    InvalidScreenWidth(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidThreshold { side, step, value } => write!(
                f,
                "{side} {step} step has invalid trigger threshold {value}; expected a finite value > 0"
            ),
            ConfigError::StepsOutOfOrder {
                side,
                first,
                second,
            } => write!(
                f,
                "{side} second step threshold {second} must be greater than first step threshold {first}"
            ),
            ConfigError::ColorBreakpointsOutOfOrder {
                side,
                hold_end,
                second,
            } => write!(
                f,
                "{side} second step threshold {second} is below the first color hold end {hold_end}"
            ),
            ConfigError::InvalidPopScale(scale) => {
                write!(f, "icon pop scale {scale} must be finite and > 0")
            }
            ConfigError::InvalidActiveOffsetRange(low, high) => write!(
                f,
                "active offset range ({low}, {high}) must satisfy low <= 0 <= high"
            ),
            ConfigError::InvalidMaxPointers(count) => {
                write!(f, "max pointers must be at least 1, got {count}")
            }
            ConfigError::InvalidSpring { field, value } => {
                write!(f, "spring {field} has invalid value {value}")
            }
            ConfigError::InvalidScreenWidth(width) => {
                write!(f, "screen width {width} must be finite and > 0")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
