//! Horizontal pan recognizer.
//!
//! Mirrors the lifecycle of a platform pan handler: `Begin` on press,
//! `Update` for every move once horizontal travel leaves the active offset
//! range, `End` on a release of an activated pan and `Finalize` whenever the
//! gesture is over, whether it succeeded, failed or was cancelled.

use smallvec::SmallVec;
use swipeable_ui_graphics::Rect;

use super::super::types::{PointerEvent, PointerEventKind, PointerId};
use crate::gesture_constants::{
    DEFAULT_ACTIVE_OFFSET_X, DEFAULT_EDGE_HIT_SLOP, DEFAULT_MAX_POINTERS,
};

/// Touch area added outside the target's left and right edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitSlop {
    pub left: f32,
    pub right: f32,
}

impl HitSlop {
    pub fn horizontal(left: f32, right: f32) -> Self {
        Self { left, right }
    }
}

impl Default for HitSlop {
    fn default() -> Self {
        Self::horizontal(DEFAULT_EDGE_HIT_SLOP, DEFAULT_EDGE_HIT_SLOP)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanGestureConfig {
    /// The pan activates once translation is below `.0` or above `.1`.
    pub active_offset_x: (f32, f32),
    pub max_pointers: usize,
    pub hit_slop: HitSlop,
}

impl Default for PanGestureConfig {
    fn default() -> Self {
        Self {
            active_offset_x: (-DEFAULT_ACTIVE_OFFSET_X, DEFAULT_ACTIVE_OFFSET_X),
            max_pointers: DEFAULT_MAX_POINTERS,
            hit_slop: HitSlop::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanEvent {
    Begin,
    /// Horizontal translation since the press.
    Update {
        translation_x: f32,
    },
    End {
        translation_x: f32,
    },
    Finalize {
        success: bool,
    },
}

pub type PanEvents = SmallVec<[PanEvent; 2]>;

#[derive(Clone, Copy, Debug, PartialEq)]
enum PanState {
    Idle,
    Began { pointer: PointerId, start_x: f32 },
    Active { pointer: PointerId, start_x: f32 },
}

#[derive(Debug)]
pub struct PanGesture {
    config: PanGestureConfig,
    hit_area: Rect,
    state: PanState,
    pointers: SmallVec<[PointerId; 4]>,
}

impl PanGesture {
    /// Creates a recognizer for a target occupying `bounds`.
    pub fn new(config: PanGestureConfig, bounds: Rect) -> Self {
        let hit_area = bounds.outset_x(config.hit_slop.left, config.hit_slop.right);
        Self {
            config,
            hit_area,
            state: PanState::Idle,
            pointers: SmallVec::new(),
        }
    }

    pub fn config(&self) -> &PanGestureConfig {
        &self.config
    }

    /// A press is being tracked, activated or not.
    pub fn is_tracking(&self) -> bool {
        self.state != PanState::Idle
    }

    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> PanEvents {
        match event.kind {
            PointerEventKind::Down => self.on_down(event),
            PointerEventKind::Move => self.on_move(event),
            PointerEventKind::Up => self.on_up(event),
            PointerEventKind::Cancel => self.cancel(),
        }
    }

    /// Abandons the gesture, as when another handler claims the pointer.
    pub fn cancel(&mut self) -> PanEvents {
        let mut events = PanEvents::new();
        if self.is_tracking() {
            events.push(PanEvent::Finalize { success: false });
        }
        self.reset();
        events
    }

    pub fn reset(&mut self) {
        self.state = PanState::Idle;
        self.pointers.clear();
    }

    /// Whether a press at `(x, y)` may start a pan.
    pub fn hit_test(&self, x: f32, y: f32) -> bool {
        self.hit_area.contains(x, y)
    }

    fn on_down(&mut self, event: &PointerEvent) -> PanEvents {
        let mut events = PanEvents::new();
        if self.state == PanState::Idle {
            if event.is_consumed() || !self.hit_test(event.position.x, event.position.y) {
                log::trace!(
                    "pan ignores press at ({}, {})",
                    event.position.x,
                    event.position.y
                );
                return events;
            }
            self.pointers.push(event.id);
            self.state = PanState::Began {
                pointer: event.id,
                start_x: event.position.x,
            };
            events.push(PanEvent::Begin);
            return events;
        }

        if !self.pointers.contains(&event.id) {
            self.pointers.push(event.id);
        }
        if self.pointers.len() > self.config.max_pointers {
            log::warn!(
                "pan cancelled: {} pointers exceed max_pointers={}",
                self.pointers.len(),
                self.config.max_pointers
            );
            return self.cancel();
        }
        events
    }

    fn on_move(&mut self, event: &PointerEvent) -> PanEvents {
        let mut events = PanEvents::new();
        match self.state {
            PanState::Began { pointer, start_x } if pointer == event.id => {
                let translation_x = event.position.x - start_x;
                let (low, high) = self.config.active_offset_x;
                if translation_x < low || translation_x > high {
                    self.state = PanState::Active { pointer, start_x };
                    event.consume();
                    events.push(PanEvent::Update { translation_x });
                }
            }
            PanState::Active { pointer, start_x } if pointer == event.id => {
                event.consume();
                events.push(PanEvent::Update {
                    translation_x: event.position.x - start_x,
                });
            }
            _ => {}
        }
        events
    }

    fn on_up(&mut self, event: &PointerEvent) -> PanEvents {
        let mut events = PanEvents::new();
        match self.state {
            PanState::Began { pointer, .. } if pointer == event.id => {
                events.push(PanEvent::Finalize { success: false });
                self.reset();
            }
            PanState::Active { pointer, start_x } if pointer == event.id => {
                event.consume();
                events.push(PanEvent::End {
                    translation_x: event.position.x - start_x,
                });
                events.push(PanEvent::Finalize { success: true });
                self.reset();
            }
            PanState::Idle => {}
            _ => self.pointers.retain(|id| *id != event.id),
        }
        events
    }
}
