//! Per-frame output of a row, ready for a renderer.

use smallvec::SmallVec;
use swipeable_ui_graphics::{Color, Rect};

use crate::action::{Icon, StepIndex, SwipeSide};
use crate::side::SideFrame;

/// Horizontal padding between a side's icon and the row edge.
pub const ICON_INSET: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconAlignment {
    Start,
    End,
}

impl IconAlignment {
    pub fn for_side(side: SwipeSide) -> Self {
        match side {
            SwipeSide::Left => IconAlignment::Start,
            SwipeSide::Right => IconAlignment::End,
        }
    }
}

/// Background layer for one side. Fills the row behind the foreground.
#[derive(Clone, Debug, PartialEq)]
pub struct SideLayer {
    pub side: SwipeSide,
    pub bounds: Rect,
    pub background: Color,
    pub icon: Icon,
    pub icon_scale: f32,
    pub alignment: IconAlignment,
    pub inset: f32,
    pub active_step: StepIndex,
}

impl SideLayer {
    pub(crate) fn from_frame(frame: SideFrame, bounds: Rect) -> Self {
        Self {
            side: frame.side,
            bounds,
            background: frame.background,
            icon: frame.icon,
            icon_scale: frame.icon_scale,
            alignment: IconAlignment::for_side(frame.side),
            inset: ICON_INSET,
            active_step: frame.active_step,
        }
    }
}

/// The caller's content, moved horizontally by the drag offset.
#[derive(Debug)]
pub struct ForegroundLayer<'a, C> {
    pub content: &'a C,
    pub bounds: Rect,
    pub translation_x: f32,
}

/// Layers of a row in paint order: sides first, foreground last.
#[derive(Debug)]
pub struct RowScene<'a, C> {
    pub layers: SmallVec<[SideLayer; 2]>,
    pub foreground: ForegroundLayer<'a, C>,
}

impl<C> RowScene<'_, C> {
    pub fn layer(&self, side: SwipeSide) -> Option<&SideLayer> {
        self.layers.iter().find(|layer| layer.side == side)
    }

    pub fn translation_x(&self) -> f32 {
        self.foreground.translation_x
    }
}
