//! A list of twelve swipeable rows driven by scripted swipes.
//!
//! Every row reveals two steps when dragged to the left: "arrow-up" in blue
//! at 80 px and "arrow-down" in red at 150 px. Rows are independent; each
//! owns its drag state and commits at most one step per release.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use swipeable::{
    ActionGroup, ActionStep, Color, ConfigError, Icon, PointerEvent, PointerEventKind, RowScene,
    ScreenMetrics, SwipeSide, Swipeable, SwipeableOptions,
};
use swipeable_core::RuntimeHandle;
use swipeable_runtime_std::StdRuntime;
use web_time::Instant;

pub const ROW_COUNT: usize = 12;
pub const ROW_HEIGHT: f32 = 100.0;
pub const ICON_SIZE: f32 = 40.0;

const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
const ORANGE: Color = Color::rgb(1.0, 0.65, 0.0);
const FRAME_INTERVAL: Duration = Duration::from_nanos(16_666_667);
const MAX_SETTLE_FRAMES: usize = 600;

/// Foreground of one demo row.
#[derive(Clone, Debug, PartialEq)]
pub struct RowContent {
    pub index: usize,
    pub label: String,
    pub background: Color,
}

impl RowContent {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            label: "Hi, I'm a row!".to_string(),
            background: if index % 2 == 0 { YELLOW } else { ORANGE },
        }
    }
}

/// Messages written by step actions, in order.
#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    entries: Rc<RefCell<Vec<String>>>,
}

impl ActivityLog {
    pub fn push(&self, entry: impl Into<String>) {
        let entry = entry.into();
        log::info!("{entry}");
        self.entries.borrow_mut().push(entry);
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

fn logging_step(
    threshold: f32,
    color: Color,
    icon: &'static str,
    message: &'static str,
    activity: &ActivityLog,
) -> ActionStep {
    let activity = activity.clone();
    ActionStep::new(threshold, color, move || Icon::named(icon).with_size(ICON_SIZE))
    .action_params(message)
    .on_action(move |params| {
        let message = params
            .and_then(|params| params.downcast_ref::<&'static str>())
            .copied()
            .unwrap_or("step action");
        activity.push(message);
    })
}

pub fn right_action_group(activity: &ActivityLog) -> ActionGroup {
    ActionGroup::new(logging_step(
        80.0,
        Color::BLUE,
        "arrow-up-outline",
        "First Step Right",
        activity,
    ))
    .with_second_step(logging_step(
        150.0,
        Color::RED,
        "arrow-down-outline",
        "Second Step Right",
        activity,
    ))
}

pub fn demo_row(
    index: usize,
    runtime: RuntimeHandle,
    screen: &dyn ScreenMetrics,
    activity: &ActivityLog,
) -> Result<Swipeable<RowContent>, ConfigError> {
    let haptics = activity.clone();
    Swipeable::builder()
        .right_action_group(right_action_group(activity))
        .options(
            SwipeableOptions::default()
                .on_each_step_hit(move || haptics.push("step hit")),
        )
        .row_height(ROW_HEIGHT)
        .content(RowContent::new(index))
        .build(runtime, screen)
}

/// One-line description of a row's frame.
pub fn describe_scene(scene: &RowScene<'_, RowContent>) -> String {
    let mut line = format!(
        "[row {:>2}] offset={:>7.1}",
        scene.foreground.content.index, scene.foreground.translation_x
    );
    if let Some(layer) = scene.layer(SwipeSide::Right) {
        let bg = layer.background;
        line.push_str(&format!(
            " right: step={} icon={} scale={:.2} bg=rgba({:.2}, {:.2}, {:.2}, {:.2})",
            layer.active_step,
            layer.icon.name,
            layer.icon_scale,
            bg.r(),
            bg.g(),
            bg.b(),
            bg.a()
        ));
    }
    line
}

/// A scripted horizontal swipe on one row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gesture {
    pub row: usize,
    pub from_x: f32,
    pub to_x: f32,
    pub steps: usize,
    /// End with a platform cancel instead of a release.
    pub cancel: bool,
}

impl Gesture {
    pub const fn swipe(row: usize, from_x: f32, to_x: f32) -> Self {
        Self {
            row,
            from_x,
            to_x,
            steps: 12,
            cancel: false,
        }
    }

    pub fn cancelled(mut self) -> Self {
        self.cancel = true;
        self
    }
}

pub fn script() -> Vec<Gesture> {
    vec![
        Gesture::swipe(0, 300.0, 215.0),
        Gesture::swipe(1, 300.0, 120.0),
        Gesture::swipe(2, 300.0, 260.0),
        Gesture::swipe(3, 300.0, 100.0).cancelled(),
        Gesture::swipe(4, 100.0, 250.0),
    ]
}

/// Sleeps until the next frame deadline.
#[derive(Debug)]
pub struct FramePacer {
    next_frame: Instant,
}

impl FramePacer {
    pub fn new() -> Self {
        Self {
            next_frame: Instant::now(),
        }
    }

    pub fn wait(&mut self) {
        let now = Instant::now();
        if let Some(remaining) = self.next_frame.checked_duration_since(now) {
            std::thread::sleep(remaining);
        }
        self.next_frame = self.next_frame.max(now) + FRAME_INTERVAL;
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new()
    }
}

pub struct DemoList {
    runtime: StdRuntime,
    rows: Vec<Swipeable<RowContent>>,
    activity: ActivityLog,
    pacer: FramePacer,
    frames: u64,
}

impl DemoList {
    pub fn new(screen: &dyn ScreenMetrics) -> Result<Self, ConfigError> {
        let runtime = StdRuntime::new();
        let activity = ActivityLog::default();
        let rows = (0..ROW_COUNT)
            .map(|index| demo_row(index, runtime.runtime_handle(), screen, &activity))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            runtime,
            rows,
            activity,
            pacer: FramePacer::new(),
            frames: 0,
        })
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn rows(&self) -> &[Swipeable<RowContent>] {
        &self.rows
    }

    /// Plays `gesture`, then pumps frames until the row is back at rest.
    /// Returns the description of the row's last dragged frame.
    pub fn play(&mut self, gesture: &Gesture) -> Option<String> {
        if gesture.row >= self.rows.len() {
            log::warn!("gesture targets missing row {}", gesture.row);
            return None;
        }
        let y = ROW_HEIGHT / 2.0;
        self.send(gesture.row, PointerEventKind::Down, gesture.from_x, y);
        self.pump_frame();

        let steps = gesture.steps.max(1);
        let mut last = None;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let x = gesture.from_x + (gesture.to_x - gesture.from_x) * t;
            self.send(gesture.row, PointerEventKind::Move, x, y);
            last = self.pump_frame().into_iter().nth(gesture.row);
        }

        let end = if gesture.cancel {
            PointerEventKind::Cancel
        } else {
            PointerEventKind::Up
        };
        self.send(gesture.row, end, gesture.to_x, y);
        self.settle();
        last
    }

    fn send(&mut self, row: usize, kind: PointerEventKind, x: f32, y: f32) {
        if let Some(row) = self.rows.get_mut(row) {
            row.on_pointer_event(&PointerEvent::at(kind, x, y));
        }
    }

    /// Runs one frame over every row; returns each row's description.
    pub fn pump_frame(&mut self) -> Vec<String> {
        self.pacer.wait();
        self.frames += 1;
        let rows = &mut self.rows;
        self.runtime.run_frame_with(|_| {
            rows.iter_mut()
                .map(|row| describe_scene(&row.frame()))
                .collect()
        })
    }

    /// Pumps frames until every row is at rest and nothing is queued.
    pub fn settle(&mut self) -> usize {
        let mut pumped = 0;
        while pumped < MAX_SETTLE_FRAMES {
            self.pump_frame();
            pumped += 1;
            let idle = self.runtime.runtime_handle().is_idle();
            if idle && self.rows.iter().all(|row| row.is_at_rest()) {
                break;
            }
        }
        pumped
    }
}

#[cfg(test)]
#[path = "tests/demo_tests.rs"]
mod tests;
