//! Per-side presentation derived from the shared drag state.
//!
//! A presenter is pulled once per frame with a [`GestureSample`]. It keeps
//! the step index with hysteresis (it only changes when `|offset_x|` crosses
//! a threshold), pulses the icon at each crossing and blends the background
//! color over the breakpoints of its action group.

use smallvec::SmallVec;
use swipeable_animation::{Animatable, AnimationType, Easing, TweenSpec};
use swipeable_core::RuntimeHandle;
use swipeable_ui_graphics::{interpolate_color, Color};

use crate::action::{ActionGroup, Icon, StepHitCallback, StepIndex, SwipeSide};
use crate::gesture_state::GestureSample;
use crate::options::SwipeableOptions;
use crate::util::{color_input_range, color_output_range};

/// Below this `|offset_x|` a released row counts as back at rest.
pub const REST_EPSILON: f32 = 1.0;

/// What a side shows for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SideFrame {
    pub side: SwipeSide,
    pub background: Color,
    pub icon: Icon,
    pub icon_scale: f32,
    pub active_step: StepIndex,
}

pub struct SidePresenter {
    side: SwipeSide,
    group: ActionGroup,
    input_range: SmallVec<[f32; 4]>,
    output_range: SmallVec<[Color; 4]>,
    runtime: RuntimeHandle,
    icon_scale: Animatable<f32>,
    pop_scale: f32,
    pop_phase_millis: u64,
    on_each_step_hit: Option<StepHitCallback>,
    active_step: StepIndex,
    icon: Icon,
    color: Color,
    previous: Option<GestureSample>,
    pulses: u64,
}

impl SidePresenter {
    pub fn new(
        side: SwipeSide,
        group: ActionGroup,
        options: &SwipeableOptions,
        runtime: RuntimeHandle,
    ) -> Self {
        Self {
            side,
            input_range: color_input_range(&group),
            output_range: color_output_range(&group),
            icon: group.first_step.icon(),
            group,
            icon_scale: Animatable::new(1.0, runtime.clone()),
            runtime,
            pop_scale: options.icon_pop_scale,
            pop_phase_millis: options.icon_pop_phase_millis,
            on_each_step_hit: options.on_each_step_hit.clone(),
            active_step: StepIndex::First,
            color: Color::TRANSPARENT,
            previous: None,
            pulses: 0,
        }
    }

    pub fn side(&self) -> SwipeSide {
        self.side
    }

    pub fn group(&self) -> &ActionGroup {
        &self.group
    }

    pub fn active_step(&self) -> StepIndex {
        self.active_step
    }

    pub fn icon_scale(&self) -> f32 {
        self.icon_scale.value()
    }

    pub fn background_color(&self) -> Color {
        self.color
    }

    /// Pulses triggered since the presenter was created.
    pub fn pulse_count(&self) -> u64 {
        self.pulses
    }

    /// Re-derives this side from `sample`. A sample equal to the previous
    /// one changes nothing, so a held drag never re-triggers a pulse.
    pub fn evaluate(&mut self, sample: GestureSample) -> SideFrame {
        if self.previous != Some(sample) {
            let prev = self.previous.map_or(0.0, |previous| previous.offset_x.abs());
            self.previous = Some(sample);
            self.apply(sample, prev);
        }
        self.frame()
    }

    pub fn frame(&self) -> SideFrame {
        SideFrame {
            side: self.side,
            background: self.color,
            icon: self.icon.clone(),
            icon_scale: self.icon_scale(),
            active_step: self.active_step,
        }
    }

    fn apply(&mut self, sample: GestureSample, prev: f32) {
        let curr = sample.offset_x.abs();
        if !sample.is_dragging {
            if curr < REST_EPSILON {
                self.reset();
            }
        } else if self.side.is_biased(sample.offset_x) {
            self.apply_crossings(curr, prev);
        }
        self.update_color(sample, curr);
    }

    fn apply_crossings(&mut self, curr: f32, prev: f32) {
        let first = self.group.first_step.trigger_threshold();
        let second = self
            .group
            .second_step
            .as_ref()
            .map(|step| step.trigger_threshold());

        match second {
            Some(second) if curr >= second && prev < second => {
                log::trace!("{} side crossed second threshold outward", self.side);
                self.set_active_step(StepIndex::Second);
                self.pulse();
            }
            Some(second) if curr < second && prev > second => {
                log::trace!("{} side crossed second threshold inward", self.side);
                self.set_active_step(StepIndex::First);
                self.pulse();
            }
            _ if curr >= first && prev <= first => {
                log::trace!("{} side crossed first threshold", self.side);
                self.pulse();
            }
            _ => {}
        }
    }

    fn update_color(&mut self, sample: GestureSample, curr: f32) {
        if !self.side.is_biased(sample.offset_x) {
            self.color = Color::TRANSPARENT;
        } else if sample.is_dragging {
            self.color = interpolate_color(curr, &self.input_range, &self.output_range);
        }
    }

    fn set_active_step(&mut self, index: StepIndex) {
        if self.active_step != index {
            self.active_step = index;
            self.icon = self.group.step(index).icon();
        }
    }

    fn reset(&mut self) {
        self.set_active_step(StepIndex::First);
        if self.icon_scale.value() != 1.0 || self.icon_scale.is_running() {
            self.icon_scale.snap_to(1.0);
        }
        self.color = Color::TRANSPARENT;
    }

    fn pulse(&mut self) {
        self.pulses += 1;
        let phase = AnimationType::Tween(TweenSpec::tween(
            self.pop_phase_millis,
            Easing::QuadInOut,
        ));
        self.icon_scale
            .animate_sequence([(self.pop_scale, phase), (1.0, phase)]);
        if let Some(callback) = &self.on_each_step_hit {
            let callback = StepHitCallback::clone(callback);
            self.runtime.enqueue_ui_task(move || callback());
        }
    }
}
