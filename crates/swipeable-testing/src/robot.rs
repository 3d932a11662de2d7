//! Robot testing framework for swipeable rows
//!
//! A [`SwipeRobot`] owns a runtime and one row, feeds it pointer input and
//! pumps frames the way a host event loop would: frame callbacks first, then
//! the row's presenters, then the UI task queue.
//!
//! # Example
//!
//! ```
//! use swipeable::{ActionGroup, ActionStep, Color, Icon, Swipeable};
//! use swipeable_testing::SwipeRobot;
//!
//! let builder = Swipeable::builder().right_action_group(ActionGroup::new(
//!     ActionStep::new(80.0, Color::BLUE, || Icon::named("archive")),
//! ));
//! let mut robot = SwipeRobot::build(builder, 400.0).unwrap();
//!
//! robot.drag_horizontally(300.0, 200.0, 10);
//! robot.release();
//! robot.wait_for_idle();
//! assert_eq!(robot.scene().translation_x, 0.0);
//! ```

use swipeable::{
    ConfigError, FixedScreen, PointerEvent, PointerEventKind, SideLayer, SwipeSide, Swipeable,
    SwipeableBuilder,
};
use swipeable_core::{Runtime, RuntimeHandle};

/// Frame interval of a 60 Hz display.
pub const FRAME_NANOS: u64 = 16_666_667;

/// Upper bound on frames pumped by [`SwipeRobot::wait_for_idle`].
pub const MAX_IDLE_FRAMES: usize = 600;

const ROW_CENTER_Y: f32 = 24.0;
const SCREEN_HEIGHT: f32 = 800.0;

/// Owned copy of a row's last frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneSnapshot {
    pub layers: Vec<SideLayer>,
    pub translation_x: f32,
}

impl SceneSnapshot {
    pub fn layer(&self, side: SwipeSide) -> Option<&SideLayer> {
        self.layers.iter().find(|layer| layer.side == side)
    }
}

pub struct SwipeRobot<C> {
    runtime: Runtime,
    row: Swipeable<C>,
    frame_time_nanos: u64,
    frames: u64,
    pointer: Option<(f32, f32)>,
    scene: SceneSnapshot,
}

impl<C> SwipeRobot<C> {
    /// Wraps a row already built on `runtime`.
    pub fn new(runtime: Runtime, row: Swipeable<C>) -> Self {
        Self {
            runtime,
            row,
            frame_time_nanos: 0,
            frames: 0,
            pointer: None,
            scene: SceneSnapshot::default(),
        }
    }

    /// Builds the row on a fresh runtime with a screen `screen_width` wide.
    pub fn build(builder: SwipeableBuilder<C>, screen_width: f32) -> Result<Self, ConfigError> {
        let runtime = Runtime::default();
        let screen = FixedScreen::new(screen_width, SCREEN_HEIGHT);
        let row = builder.build(runtime.handle(), &screen)?;
        Ok(Self::new(runtime, row))
    }

    pub fn row(&self) -> &Swipeable<C> {
        &self.row
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    /// Last scene produced by [`SwipeRobot::advance_frame`].
    pub fn scene(&self) -> &SceneSnapshot {
        &self.scene
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    /// Sends a raw pointer event to the row.
    pub fn send(&mut self, event: &PointerEvent) -> bool {
        self.row.on_pointer_event(event)
    }

    pub fn press(&mut self, x: f32) -> bool {
        self.pointer = Some((x, ROW_CENTER_Y));
        self.send(&PointerEvent::at(PointerEventKind::Down, x, ROW_CENTER_Y))
    }

    pub fn move_to(&mut self, x: f32) -> bool {
        let y = self.pointer.map_or(ROW_CENTER_Y, |(_, y)| y);
        self.pointer = Some((x, y));
        self.send(&PointerEvent::at(PointerEventKind::Move, x, y))
    }

    pub fn release(&mut self) -> bool {
        let (x, y) = self.pointer.take().unwrap_or((0.0, ROW_CENTER_Y));
        self.send(&PointerEvent::at(PointerEventKind::Up, x, y))
    }

    pub fn cancel(&mut self) -> bool {
        let (x, y) = self.pointer.take().unwrap_or((0.0, ROW_CENTER_Y));
        self.send(&PointerEvent::at(PointerEventKind::Cancel, x, y))
    }

    /// Presses at `from_x` and moves to `to_x` in `steps` moves, one frame
    /// per move. The pointer stays down.
    pub fn drag_horizontally(&mut self, from_x: f32, to_x: f32, steps: usize) {
        self.press(from_x);
        self.advance_frame();
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.move_to(from_x + (to_x - from_x) * t);
            self.advance_frame();
        }
    }

    /// Pumps one frame: animations, presenters, then queued callbacks.
    pub fn advance_frame(&mut self) -> &SceneSnapshot {
        self.frame_time_nanos += FRAME_NANOS;
        self.frames += 1;
        let handle = self.runtime.handle();
        handle.drain_frame_callbacks(self.frame_time_nanos);
        let scene = self.row.frame();
        self.scene = SceneSnapshot {
            layers: scene.layers.to_vec(),
            translation_x: scene.foreground.translation_x,
        };
        handle.drain_ui();
        &self.scene
    }

    pub fn advance_frames(&mut self, count: usize) -> &SceneSnapshot {
        for _ in 0..count {
            self.advance_frame();
        }
        &self.scene
    }

    /// Pumps frames until no animation is running and nothing is queued.
    /// Returns the number of frames pumped.
    pub fn wait_for_idle(&mut self) -> usize {
        let handle = self.runtime.handle();
        let mut pumped = 0;
        loop {
            self.advance_frame();
            pumped += 1;
            if handle.is_idle() && self.row.is_at_rest() {
                break;
            }
            assert!(
                pumped < MAX_IDLE_FRAMES,
                "row did not settle within {MAX_IDLE_FRAMES} frames"
            );
        }
        pumped
    }
}
