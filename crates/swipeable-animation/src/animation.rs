//! Animation system for the swipeable row control
//!
//! Provides time-based tweens with easing curves, spring physics expressed as
//! mass, damping and stiffness, and sequences of either. Every animation is
//! stepped from the runtime frame clock.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use swipeable_core::{FrameCallbackRegistration, MutableState, RuntimeHandle, State};

/// Integration step for spring physics, in seconds.
const SPRING_TIMESTEP: f32 = 1.0 / 240.0;

/// Longest frame gap simulated in one go; longer stalls are truncated.
const MAX_FRAME_DELTA: f32 = 0.25;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Scalar values that spring physics can integrate.
pub trait SpringScalar: Lerp + Clone {
    fn to_f32(&self) -> f32;

    fn from_f32(value: f32) -> Self;
}

impl SpringScalar for f32 {
    fn to_f32(&self) -> f32 {
        *self
    }

    fn from_f32(value: f32) -> Self {
        value
    }
}

/// Easing curves applied to the linear progress of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Quadratic in-out; the default curve of timed transitions on mobile
    /// animation runtimes.
    QuadInOut,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        let t = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (2.0 - 2.0 * t).powi(2) / 2.0
                }
            }
        }
    }
}

/// Duration-based animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    pub duration_millis: u64,
    pub easing: Easing,
}

impl TweenSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self::tween(300, Easing::QuadInOut)
    }
}

/// Damped harmonic oscillator parameters.
///
/// `damping` is the viscous coefficient, not a ratio. Thresholds are in
/// value units and value units per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    pub mass: f32,
    pub damping: f32,
    pub stiffness: f32,
    /// Finish as soon as the value reaches the target instead of bouncing
    /// past it.
    pub overshoot_clamping: bool,
    pub rest_displacement_threshold: f32,
    pub rest_speed_threshold: f32,
    /// Velocity at the start of the animation, in value units per second.
    pub initial_velocity: f32,
}

impl SpringSpec {
    pub fn with_overshoot_clamping(mut self, clamp: bool) -> Self {
        self.overshoot_clamping = clamp;
        self
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self {
            mass: 1.0,
            damping: 10.0,
            stiffness: 100.0,
            overshoot_clamping: false,
            rest_displacement_threshold: 0.01,
            rest_speed_threshold: 2.0,
            initial_velocity: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    Tween(TweenSpec),
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Tween(TweenSpec::default())
    }
}

struct Segment<T> {
    target: T,
    animation: AnimationType,
}

/// Animated value with a single owner.
///
/// The animatable is the only writer of its [`State`]; readers take
/// [`Animatable::state`] handles. It is intentionally not `Clone`.
pub struct Animatable<T: SpringScalar + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: SpringScalar + 'static> {
    state: MutableState<T>,
    runtime: RuntimeHandle,
    current: T,
    velocity: f32,
    start: T,
    target: T,
    animation: AnimationType,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    queue: VecDeque<Segment<T>>,
    lower_bound: Option<f32>,
    upper_bound: Option<f32>,
    running: bool,
    registration: Option<FrameCallbackRegistration>,
}

impl<T: SpringScalar + 'static> AnimatableInner<T> {
    fn begin(&mut self, target: T, animation: AnimationType) {
        if let Some(registration) = self.registration.take() {
            registration.cancel();
        }
        self.start = self.current.clone();
        self.target = target;
        self.animation = animation;
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
        self.velocity = match animation {
            AnimationType::Spring(spec) => spec.initial_velocity,
            AnimationType::Tween(_) => 0.0,
        };
        self.running = true;
    }

    fn clamp_to_bounds(&self, value: f32) -> f32 {
        let value = self.lower_bound.map_or(value, |lower| value.max(lower));
        self.upper_bound.map_or(value, |upper| value.min(upper))
    }

    fn publish(&mut self) {
        let value = self.current.clone();
        self.state.set_value(value);
    }

    /// Advances a tween; returns true once the segment is complete.
    fn step_tween(&mut self, spec: TweenSpec, frame_time_nanos: u64) -> bool {
        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed = frame_time_nanos.saturating_sub(start_time);
        let duration = spec.duration_millis.saturating_mul(1_000_000).max(1);
        let linear = (elapsed as f64 / duration as f64).min(1.0) as f32;
        if linear >= 1.0 {
            self.current = self.target.clone();
            self.start = self.target.clone();
            return true;
        }
        self.current = self
            .start
            .lerp(&self.target, spec.easing.transform(linear));
        false
    }

    /// Advances a spring; returns true once it has settled.
    fn step_spring(&mut self, spec: SpringSpec, frame_time_nanos: u64) -> bool {
        let Some(last_frame) = self.last_frame_nanos.replace(frame_time_nanos) else {
            return false;
        };
        let dt = (frame_time_nanos.saturating_sub(last_frame) as f32 / 1_000_000_000.0)
            .min(MAX_FRAME_DELTA);

        let start = self.start.to_f32();
        let target = self.target.to_f32();
        let mut position = self.current.to_f32();
        let mut velocity = self.velocity;
        let mut settled = false;
        let mut elapsed = 0.0f32;

        while elapsed < dt {
            let step = SPRING_TIMESTEP.min(dt - elapsed);
            let displacement = position - target;
            let acceleration =
                (-spec.stiffness * displacement - spec.damping * velocity) / spec.mass;
            velocity += acceleration * step;
            position += velocity * step;
            elapsed += step;

            if spec.overshoot_clamping && reached(start, target, position) {
                position = target;
                velocity = 0.0;
                settled = true;
                break;
            }

            let bounded = self.clamp_to_bounds(position);
            if bounded != position {
                position = bounded;
                velocity = 0.0;
                settled = true;
                break;
            }

            if velocity.abs() < spec.rest_speed_threshold
                && (position - target).abs() < spec.rest_displacement_threshold
            {
                position = target;
                velocity = 0.0;
                settled = true;
                break;
            }
        }

        self.velocity = velocity;
        self.current = if position == target {
            self.target.clone()
        } else {
            T::from_f32(position)
        };
        if settled {
            self.start = self.current.clone();
        }
        settled
    }
}

/// Whether `position` is at or past `target` when travelling from `start`.
fn reached(start: f32, target: f32, position: f32) -> bool {
    if start < target {
        position >= target
    } else if start > target {
        position <= target
    } else {
        true
    }
}

impl<T: SpringScalar + 'static> Animatable<T> {
    pub fn new(initial: T, runtime: RuntimeHandle) -> Self {
        let inner = AnimatableInner {
            state: MutableState::with_runtime(initial.clone(), runtime.clone()),
            runtime,
            current: initial.clone(),
            velocity: 0.0,
            start: initial.clone(),
            target: initial,
            animation: AnimationType::default(),
            start_time_nanos: None,
            last_frame_nanos: None,
            queue: VecDeque::new(),
            lower_bound: None,
            upper_bound: None,
            running: false,
            registration: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Animate from the current value to `target`, replacing any running or
    /// queued animation.
    pub fn animate_to(&mut self, target: T, animation: AnimationType) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.queue.clear();
            inner.begin(target, animation);
        }
        Self::schedule_frame(&self.inner);
    }

    /// Run `steps` back to back; each starts from where the previous ended.
    pub fn animate_sequence(&mut self, steps: impl IntoIterator<Item = (T, AnimationType)>) {
        let mut steps = steps.into_iter();
        let Some((target, animation)) = steps.next() else {
            return;
        };
        {
            let mut inner = self.inner.borrow_mut();
            inner.queue = steps
                .map(|(target, animation)| Segment { target, animation })
                .collect();
            inner.begin(target, animation);
        }
        Self::schedule_frame(&self.inner);
    }

    /// Jump to `target` (clamped to the bounds) and cancel any animation.
    pub fn snap_to(&mut self, target: T) {
        let mut inner = self.inner.borrow_mut();
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
        let raw = target.to_f32();
        let bounded = inner.clamp_to_bounds(raw);
        let value = if bounded == raw {
            target
        } else {
            T::from_f32(bounded)
        };
        inner.queue.clear();
        inner.running = false;
        inner.velocity = 0.0;
        inner.current = value.clone();
        inner.start = value.clone();
        inner.target = value;
        inner.start_time_nanos = None;
        inner.last_frame_nanos = None;
        inner.publish();
    }

    /// Limit the value range. Springs stop when they hit a bound.
    pub fn update_bounds(&mut self, lower: Option<T>, upper: Option<T>) {
        let mut inner = self.inner.borrow_mut();
        inner.lower_bound = lower.map(|value| value.to_f32());
        inner.upper_bound = upper.map(|value| value.to_f32());
    }

    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    /// Read-only handle to the animated value.
    pub fn state(&self) -> State<T> {
        self.inner.borrow().state.as_state()
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let runtime = {
            let inner = this.borrow();
            if inner.registration.is_some() || !inner.running {
                return;
            }
            inner.runtime.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = runtime.frame_clock().with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let schedule_next = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            if !inner.running {
                return;
            }

            let animation = inner.animation;
            let finished = match animation {
                AnimationType::Tween(spec) => inner.step_tween(spec, frame_time_nanos),
                AnimationType::Spring(spec) => inner.step_spring(spec, frame_time_nanos),
            };
            inner.publish();

            if !finished {
                true
            } else if let Some(next) = inner.queue.pop_front() {
                inner.begin(next.target, next.animation);
                inner.start_time_nanos = Some(frame_time_nanos);
                inner.last_frame_nanos = Some(frame_time_nanos);
                true
            } else {
                inner.running = false;
                false
            }
        };

        if schedule_next {
            Self::schedule_frame(this);
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
