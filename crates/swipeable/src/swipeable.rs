//! Row container wiring the pan recognizer, drag controller and presenters.

use smallvec::SmallVec;
use swipeable_core::RuntimeHandle;
use swipeable_foundation::{PanGesture, PointerEvent};
use swipeable_ui_graphics::{Rect, Size};

use crate::action::{ActionGroup, SwipeSide};
use crate::drag_controller::{DragController, DragPhase};
use crate::error::ConfigError;
use crate::gesture_state::{GestureSample, GestureState};
use crate::options::{validate_group, SwipeableOptions};
use crate::scene::{ForegroundLayer, RowScene, SideLayer};
use crate::screen::ScreenMetrics;
use crate::side::SidePresenter;

pub const DEFAULT_ROW_HEIGHT: f32 = 64.0;

/// A horizontally swipeable row revealing action steps on either side.
///
/// Feed pointer input through [`Swipeable::on_pointer_event`] and call
/// [`Swipeable::frame`] once per display frame, after the runtime's frame
/// callbacks and before its UI tasks are drained.
pub struct Swipeable<C> {
    content: C,
    options: SwipeableOptions,
    bounds: Rect,
    pan: PanGesture,
    controller: DragController,
    left: Option<SidePresenter>,
    right: Option<SidePresenter>,
}

impl Swipeable<()> {
    pub fn builder() -> SwipeableBuilder<()> {
        SwipeableBuilder::default()
    }
}

impl<C> Swipeable<C> {
    /// Routes one pointer event into the pan recognizer. Returns whether the
    /// row took part in the gesture.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        let events = self.pan.on_pointer_event(event);
        let handled = !events.is_empty();
        for pan_event in events {
            self.controller.handle_pan_event(pan_event);
        }
        handled
    }

    /// Samples the drag state once and derives this frame's layers.
    pub fn frame(&mut self) -> RowScene<'_, C> {
        let sample = self.controller.sample();
        let bounds = self.bounds;
        let layers: SmallVec<[SideLayer; 2]> = [self.left.as_mut(), self.right.as_mut()]
            .into_iter()
            .flatten()
            .map(|presenter| SideLayer::from_frame(presenter.evaluate(sample), bounds))
            .collect();
        RowScene {
            layers,
            foreground: ForegroundLayer {
                content: &self.content,
                bounds: bounds.translate_x(sample.offset_x),
                translation_x: sample.offset_x,
            },
        }
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn options(&self) -> &SwipeableOptions {
        &self.options
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn gesture_state(&self) -> GestureState {
        self.controller.gesture_state()
    }

    pub fn sample(&self) -> GestureSample {
        self.controller.sample()
    }

    pub fn phase(&self) -> DragPhase {
        self.controller.phase()
    }

    pub fn offset_bounds(&self) -> (f32, f32) {
        self.controller.bounds()
    }

    /// Whether the row is at rest: no gesture tracked and no spring-back.
    pub fn is_at_rest(&self) -> bool {
        !self.pan.is_tracking() && !self.controller.is_settling()
    }

    pub fn presenter(&self, side: SwipeSide) -> Option<&SidePresenter> {
        match side {
            SwipeSide::Left => self.left.as_ref(),
            SwipeSide::Right => self.right.as_ref(),
        }
    }
}

pub struct SwipeableBuilder<C> {
    left: Option<ActionGroup>,
    right: Option<ActionGroup>,
    options: SwipeableOptions,
    row_height: f32,
    content: C,
}

impl Default for SwipeableBuilder<()> {
    fn default() -> Self {
        Self {
            left: None,
            right: None,
            options: SwipeableOptions::default(),
            row_height: DEFAULT_ROW_HEIGHT,
            content: (),
        }
    }
}

impl<C> SwipeableBuilder<C> {
    /// Group revealed when the content is dragged to the right.
    pub fn left_action_group(mut self, group: ActionGroup) -> Self {
        self.left = Some(group);
        self
    }

    /// Group revealed when the content is dragged to the left.
    pub fn right_action_group(mut self, group: ActionGroup) -> Self {
        self.right = Some(group);
        self
    }

    pub fn options(mut self, options: SwipeableOptions) -> Self {
        self.options = options;
        self
    }

    pub fn row_height(mut self, height: f32) -> Self {
        self.row_height = height;
        self
    }

    pub fn content<T>(self, content: T) -> SwipeableBuilder<T> {
        SwipeableBuilder {
            left: self.left,
            right: self.right,
            options: self.options,
            row_height: self.row_height,
            content,
        }
    }

    pub fn build(
        self,
        runtime: RuntimeHandle,
        screen: &dyn ScreenMetrics,
    ) -> Result<Swipeable<C>, ConfigError> {
        let screen_width = screen.screen_width();
        if !(screen_width.is_finite() && screen_width > 0.0) {
            return Err(ConfigError::InvalidScreenWidth(screen_width));
        }
        self.options.validate()?;
        if let Some(group) = &self.left {
            validate_group(SwipeSide::Left, group)?;
        }
        if let Some(group) = &self.right {
            validate_group(SwipeSide::Right, group)?;
        }

        let options = self.options;
        let presenter = |side, group: &Option<ActionGroup>| {
            group
                .clone()
                .map(|group| SidePresenter::new(side, group, &options, runtime.clone()))
        };
        let left = presenter(SwipeSide::Left, &self.left);
        let right = presenter(SwipeSide::Right, &self.right);
        let controller = DragController::new(
            runtime.clone(),
            self.left,
            self.right,
            screen_width,
            options.spring_spec(),
        );
        let bounds = Rect::from_size(Size::new(screen_width, self.row_height));
        let pan = PanGesture::new(options.pan_config(), bounds);

        log::debug!(
            "built swipeable row: width={screen_width} bounds={:?} left={} right={}",
            controller.bounds(),
            left.is_some(),
            right.is_some()
        );

        Ok(Swipeable {
            content: self.content,
            options,
            bounds,
            pan,
            controller,
            left,
            right,
        })
    }
}
