//! Color representation and interpolation

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self(r, g, b, 1.0)
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(r, g, b, a)
    }

    pub fn r(&self) -> f32 {
        self.0
    }

    pub fn g(&self) -> f32 {
        self.1
    }

    pub fn b(&self) -> f32 {
        self.2
    }

    pub fn a(&self) -> f32 {
        self.3
    }

    pub fn is_transparent(&self) -> bool {
        self.3 <= f32::EPSILON
    }

    /// Channel-wise linear blend; `fraction` is clamped to `[0, 1]`.
    pub fn lerp(&self, target: &Color, fraction: f32) -> Color {
        let t = fraction.clamp(0.0, 1.0);
        let mix = |from: f32, to: f32| from + (to - from) * t;
        Color(
            mix(self.0, target.0),
            mix(self.1, target.1),
            mix(self.2, target.2),
            mix(self.3, target.3),
        )
    }

    // Common color constants
    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color = Color(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Color = Color(0.0, 0.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color(0.0, 0.0, 0.0, 0.0);
}

/// Maps `value` through piecewise-linear color stops.
///
/// `input_range` must be non-decreasing and as long as `output_range`.
/// Values outside the range clamp to the first or last color. A zero-width
/// segment resolves to its upper color.
pub fn interpolate_color(value: f32, input_range: &[f32], output_range: &[Color]) -> Color {
    debug_assert_eq!(input_range.len(), output_range.len());
    let len = input_range.len().min(output_range.len());
    match len {
        0 => return Color::TRANSPARENT,
        1 => return output_range[0],
        _ => {}
    }

    if value.is_nan() || value <= input_range[0] {
        return output_range[0];
    }
    if value >= input_range[len - 1] {
        return output_range[len - 1];
    }

    for index in 1..len {
        let upper = input_range[index];
        if value <= upper {
            let lower = input_range[index - 1];
            let span = upper - lower;
            if span <= f32::EPSILON {
                return output_range[index];
            }
            return output_range[index - 1].lerp(&output_range[index], (value - lower) / span);
        }
    }

    output_range[len - 1]
}
