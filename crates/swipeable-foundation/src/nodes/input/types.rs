use std::cell::Cell;
use std::rc::Rc;
use swipeable_ui_graphics::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

impl PointerEventKind {
    pub fn phase(self) -> PointerPhase {
        match self {
            PointerEventKind::Down => PointerPhase::Start,
            PointerEventKind::Move => PointerPhase::Move,
            PointerEventKind::Up => PointerPhase::End,
            PointerEventKind::Cancel => PointerPhase::Cancel,
        }
    }
}

/// Pointer event with consumption tracking for gesture disambiguation.
///
/// A recognizer that claims a gesture consumes its events so enclosing
/// handlers (a scrolling list, say) can skip them.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub phase: PointerPhase,
    /// Position relative to the receiving row.
    pub position: Point,
    pub global_position: Point,
    /// Shared so consumption is visible across copies.
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, global_position: Point) -> Self {
        Self {
            id: 0,
            kind,
            phase: kind.phase(),
            position,
            global_position,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    /// Event whose local and global positions coincide.
    pub fn at(kind: PointerEventKind, x: f32, y: f32) -> Self {
        let position = Point::new(x, y);
        Self::new(kind, position, position)
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
