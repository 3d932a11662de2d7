//! Action steps revealed behind a row.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use swipeable_ui_graphics::Color;

/// Default glyph size in logical pixels.
pub const DEFAULT_ICON_SIZE: f32 = 24.0;

/// Descriptor of an icon glyph. Rendering the glyph is up to the host.
#[derive(Clone, Debug, PartialEq)]
pub struct Icon {
    pub name: Cow<'static, str>,
    pub size: f32,
}

impl Icon {
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            size: DEFAULT_ICON_SIZE,
        }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

pub type IconFactory = Rc<dyn Fn() -> Icon>;
pub type StepAction = Rc<dyn Fn(Option<&dyn Any>)>;
pub type ActionParams = Rc<dyn Any>;
pub type StepHitCallback = Rc<dyn Fn()>;

/// One swipe-reveal action: a color, an icon, a trigger distance and an
/// optional callback.
#[derive(Clone)]
pub struct ActionStep {
    on_action: Option<StepAction>,
    action_params: Option<ActionParams>,
    icon: IconFactory,
    background_color: Color,
    trigger_threshold: f32,
}

impl ActionStep {
    pub fn new(
        trigger_threshold: f32,
        background_color: Color,
        icon: impl Fn() -> Icon + 'static,
    ) -> Self {
        Self {
            on_action: None,
            action_params: None,
            icon: Rc::new(icon),
            background_color,
            trigger_threshold,
        }
    }

    /// Invoked with the step's params when a release commits this step.
    pub fn on_action(mut self, action: impl Fn(Option<&dyn Any>) + 'static) -> Self {
        self.on_action = Some(Rc::new(action));
        self
    }

    pub fn action_params<P: Any>(mut self, params: P) -> Self {
        self.action_params = Some(Rc::new(params));
        self
    }

    pub fn trigger_threshold(&self) -> f32 {
        self.trigger_threshold
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn icon(&self) -> Icon {
        (self.icon)()
    }

    pub fn has_action(&self) -> bool {
        self.on_action.is_some()
    }

    /// Packages the callback and its params so they can run later, off the
    /// gesture context. `None` when the step has no callback.
    pub(crate) fn invocation(&self) -> Option<impl FnOnce() + 'static> {
        let action = self.on_action.clone()?;
        let params = self.action_params.clone();
        Some(move || action(params.as_deref()))
    }
}

impl fmt::Debug for ActionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionStep")
            .field("trigger_threshold", &self.trigger_threshold)
            .field("background_color", &self.background_color)
            .field("has_action", &self.on_action.is_some())
            .field("has_params", &self.action_params.is_some())
            .finish()
    }
}

/// The one or two steps configured for one side of a row.
#[derive(Clone, Debug)]
pub struct ActionGroup {
    pub first_step: ActionStep,
    pub second_step: Option<ActionStep>,
}

impl ActionGroup {
    pub fn new(first_step: ActionStep) -> Self {
        Self {
            first_step,
            second_step: None,
        }
    }

    pub fn with_second_step(mut self, second_step: ActionStep) -> Self {
        self.second_step = Some(second_step);
        self
    }

    /// The step shown for `index`; falls back to the first step when the
    /// group has no second one.
    pub fn step(&self, index: StepIndex) -> &ActionStep {
        match (index, &self.second_step) {
            (StepIndex::Second, Some(second)) => second,
            _ => &self.first_step,
        }
    }

    /// Second-step-first precedence over the absolute release distance.
    pub fn step_for_distance(&self, distance: f32) -> Option<StepIndex> {
        if let Some(second) = &self.second_step {
            if distance >= second.trigger_threshold {
                return Some(StepIndex::Second);
            }
        }
        if distance >= self.first_step.trigger_threshold {
            Some(StepIndex::First)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeSide {
    /// Revealed by dragging the content to the right.
    Left,
    /// Revealed by dragging the content to the left.
    Right,
}

impl SwipeSide {
    /// Whether a drag at `offset_x` is opening this side.
    pub fn is_biased(self, offset_x: f32) -> bool {
        match self {
            SwipeSide::Left => offset_x > 0.0,
            SwipeSide::Right => offset_x < 0.0,
        }
    }

    /// The side a non-zero offset opens.
    pub fn from_offset(offset_x: f32) -> Option<SwipeSide> {
        if offset_x > 0.0 {
            Some(SwipeSide::Left)
        } else if offset_x < 0.0 {
            Some(SwipeSide::Right)
        } else {
            None
        }
    }
}

impl fmt::Display for SwipeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwipeSide::Left => f.write_str("left"),
            SwipeSide::Right => f.write_str("right"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StepIndex {
    #[default]
    First,
    Second,
}

impl fmt::Display for StepIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepIndex::First => f.write_str("first"),
            StepIndex::Second => f.write_str("second"),
        }
    }
}
