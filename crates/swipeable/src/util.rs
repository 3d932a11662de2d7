use smallvec::{smallvec, SmallVec};
use swipeable_ui_graphics::Color;

use crate::action::ActionGroup;

/// Fraction of the first threshold at which the first color is fully opaque.
pub const COLOR_FILL_FRACTION: f32 = 0.5;

/// Multiple of the first threshold up to which the first color is held
/// before blending toward the second.
pub const COLOR_HOLD_FACTOR: f32 = 1.35;

pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    min.max(value.min(max))
}

/// Breakpoints mapping `|offset_x|` onto the background colors.
///
/// One step gives `[0, t1 * 0.5]`; two steps give
/// `[0, t1 * 0.5, t1 * 1.35, t2]`. Breakpoints are never reordered; the row
/// builder rejects groups where they would decrease.
pub fn color_input_range(group: &ActionGroup) -> SmallVec<[f32; 4]> {
    let first = group.first_step.trigger_threshold();
    let fill = first * COLOR_FILL_FRACTION;
    match &group.second_step {
        None => smallvec![0.0, fill],
        Some(second) => smallvec![
            0.0,
            fill,
            first * COLOR_HOLD_FACTOR,
            second.trigger_threshold()
        ],
    }
}

/// Colors paired with [`color_input_range`].
pub fn color_output_range(group: &ActionGroup) -> SmallVec<[Color; 4]> {
    let first = group.first_step.background_color();
    match &group.second_step {
        None => smallvec![Color::TRANSPARENT, first],
        Some(second) => smallvec![
            Color::TRANSPARENT,
            first,
            first,
            second.background_color()
        ],
    }
}
