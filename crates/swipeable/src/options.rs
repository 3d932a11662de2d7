//! Row options merged over defaults.

use std::fmt;
use std::rc::Rc;

use swipeable_animation::SpringSpec;
use swipeable_foundation::gesture_constants::{DEFAULT_ACTIVE_OFFSET_X, DEFAULT_MAX_POINTERS};
use swipeable_foundation::{HitSlop, PanGestureConfig};

use crate::action::{ActionGroup, StepHitCallback, StepIndex, SwipeSide};
use crate::error::ConfigError;
use crate::util::COLOR_HOLD_FACTOR;

pub const DEFAULT_ICON_POP_SCALE: f32 = 1.2;
pub const DEFAULT_ICON_POP_PHASE_MILLIS: u64 = 100;

/// Spring used for the release spring-back unless overridden.
pub const DEFAULT_SPRING: SpringSpec = SpringSpec {
    mass: 1.0,
    damping: 5.0,
    stiffness: 100.0,
    overshoot_clamping: true,
    rest_displacement_threshold: 0.01,
    rest_speed_threshold: 0.01,
    initial_velocity: 0.0,
};

/// Partial spring parameters; unset fields keep their defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringOverrides {
    pub mass: Option<f32>,
    pub damping: Option<f32>,
    pub stiffness: Option<f32>,
    pub overshoot_clamping: Option<bool>,
    pub rest_displacement_threshold: Option<f32>,
    pub rest_speed_threshold: Option<f32>,
    pub velocity: Option<f32>,
}

impl SpringOverrides {
    pub fn mass(mut self, mass: f32) -> Self {
        self.mass = Some(mass);
        self
    }

    pub fn damping(mut self, damping: f32) -> Self {
        self.damping = Some(damping);
        self
    }

    pub fn stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = Some(stiffness);
        self
    }

    pub fn overshoot_clamping(mut self, clamp: bool) -> Self {
        self.overshoot_clamping = Some(clamp);
        self
    }

    pub fn rest_displacement_threshold(mut self, threshold: f32) -> Self {
        self.rest_displacement_threshold = Some(threshold);
        self
    }

    pub fn rest_speed_threshold(mut self, threshold: f32) -> Self {
        self.rest_speed_threshold = Some(threshold);
        self
    }

    pub fn velocity(mut self, velocity: f32) -> Self {
        self.velocity = Some(velocity);
        self
    }

    /// Applies the overrides on top of `base`.
    pub fn merge_over(&self, base: SpringSpec) -> SpringSpec {
        SpringSpec {
            mass: self.mass.unwrap_or(base.mass),
            damping: self.damping.unwrap_or(base.damping),
            stiffness: self.stiffness.unwrap_or(base.stiffness),
            overshoot_clamping: self.overshoot_clamping.unwrap_or(base.overshoot_clamping),
            rest_displacement_threshold: self
                .rest_displacement_threshold
                .unwrap_or(base.rest_displacement_threshold),
            rest_speed_threshold: self
                .rest_speed_threshold
                .unwrap_or(base.rest_speed_threshold),
            initial_velocity: self.velocity.unwrap_or(base.initial_velocity),
        }
    }
}

#[derive(Clone)]
pub struct SwipeableOptions {
    /// Horizontal travel range inside which a press has not yet become a
    /// swipe.
    pub active_offset_range: (f32, f32),
    pub max_pointers: usize,
    pub overshoot_clamping: bool,
    pub icon_pop_scale: f32,
    /// Length of each of the two pulse phases.
    pub icon_pop_phase_millis: u64,
    /// Touch area beyond the row's left and right edges that still starts a
    /// swipe.
    pub hit_slop: HitSlop,
    pub on_each_step_hit: Option<StepHitCallback>,
    pub spring_config: SpringOverrides,
}

impl Default for SwipeableOptions {
    fn default() -> Self {
        Self {
            active_offset_range: (-DEFAULT_ACTIVE_OFFSET_X, DEFAULT_ACTIVE_OFFSET_X),
            max_pointers: DEFAULT_MAX_POINTERS,
            overshoot_clamping: true,
            icon_pop_scale: DEFAULT_ICON_POP_SCALE,
            icon_pop_phase_millis: DEFAULT_ICON_POP_PHASE_MILLIS,
            hit_slop: HitSlop::default(),
            on_each_step_hit: None,
            spring_config: SpringOverrides::default(),
        }
    }
}

impl SwipeableOptions {
    pub fn active_offset_range(mut self, low: f32, high: f32) -> Self {
        self.active_offset_range = (low, high);
        self
    }

    pub fn max_pointers(mut self, max_pointers: usize) -> Self {
        self.max_pointers = max_pointers;
        self
    }

    pub fn overshoot_clamping(mut self, clamp: bool) -> Self {
        self.overshoot_clamping = clamp;
        self
    }

    pub fn icon_pop_scale(mut self, scale: f32) -> Self {
        self.icon_pop_scale = scale;
        self
    }

    pub fn icon_pop_phase_millis(mut self, millis: u64) -> Self {
        self.icon_pop_phase_millis = millis;
        self
    }

    pub fn hit_slop(mut self, hit_slop: HitSlop) -> Self {
        self.hit_slop = hit_slop;
        self
    }

    pub fn on_each_step_hit(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_each_step_hit = Some(Rc::new(callback));
        self
    }

    pub fn spring_config(mut self, overrides: SpringOverrides) -> Self {
        self.spring_config = overrides;
        self
    }

    /// Spring-back parameters: defaults, then the option-level overshoot
    /// clamping, then explicit spring overrides.
    pub fn spring_spec(&self) -> SpringSpec {
        let base = DEFAULT_SPRING.with_overshoot_clamping(self.overshoot_clamping);
        self.spring_config.merge_over(base)
    }

    pub fn pan_config(&self) -> PanGestureConfig {
        PanGestureConfig {
            active_offset_x: self.active_offset_range,
            max_pointers: self.max_pointers,
            hit_slop: self.hit_slop,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (low, high) = self.active_offset_range;
        if !(low.is_finite() && high.is_finite() && low <= 0.0 && high >= 0.0) {
            return Err(ConfigError::InvalidActiveOffsetRange(low, high));
        }
        if self.max_pointers == 0 {
            return Err(ConfigError::InvalidMaxPointers(self.max_pointers));
        }
        if !(self.icon_pop_scale.is_finite() && self.icon_pop_scale > 0.0) {
            return Err(ConfigError::InvalidPopScale(self.icon_pop_scale));
        }

        let spring = self.spring_spec();
        let checks = [
            ("mass", spring.mass, spring.mass > 0.0),
            ("stiffness", spring.stiffness, spring.stiffness > 0.0),
            ("damping", spring.damping, spring.damping >= 0.0),
            (
                "rest_displacement_threshold",
                spring.rest_displacement_threshold,
                spring.rest_displacement_threshold >= 0.0,
            ),
            (
                "rest_speed_threshold",
                spring.rest_speed_threshold,
                spring.rest_speed_threshold >= 0.0,
            ),
            ("velocity", spring.initial_velocity, true),
        ];
        for (field, value, in_range) in checks {
            if !value.is_finite() || !in_range {
                return Err(ConfigError::InvalidSpring { field, value });
            }
        }
        Ok(())
    }
}

impl fmt::Debug for SwipeableOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeableOptions")
            .field("active_offset_range", &self.active_offset_range)
            .field("max_pointers", &self.max_pointers)
            .field("overshoot_clamping", &self.overshoot_clamping)
            .field("icon_pop_scale", &self.icon_pop_scale)
            .field("icon_pop_phase_millis", &self.icon_pop_phase_millis)
            .field("hit_slop", &self.hit_slop)
            .field("on_each_step_hit", &self.on_each_step_hit.is_some())
            .field("spring_config", &self.spring_config)
            .finish()
    }
}

/// Checks thresholds and breakpoint ordering of the group on `side`.
pub fn validate_group(side: SwipeSide, group: &ActionGroup) -> Result<(), ConfigError> {
    let first = group.first_step.trigger_threshold();
    check_threshold(side, StepIndex::First, first)?;

    let Some(second) = &group.second_step else {
        return Ok(());
    };
    let second = second.trigger_threshold();
    check_threshold(side, StepIndex::Second, second)?;
    if second <= first {
        return Err(ConfigError::StepsOutOfOrder {
            side,
            first,
            second,
        });
    }
    let hold_end = first * COLOR_HOLD_FACTOR;
    if second < hold_end {
        return Err(ConfigError::ColorBreakpointsOutOfOrder {
            side,
            hold_end,
            second,
        });
    }
    Ok(())
}

fn check_threshold(side: SwipeSide, step: StepIndex, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold { side, step, value })
    }
}
