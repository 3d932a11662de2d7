/// Source of the screen dimensions that bound the drag offset.
pub trait ScreenMetrics {
    fn screen_width(&self) -> f32;
}

/// Screen with fixed dimensions, for headless hosts and tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedScreen {
    pub width: f32,
    pub height: f32,
}

impl FixedScreen {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl ScreenMetrics for FixedScreen {
    fn screen_width(&self) -> f32 {
        self.width
    }
}
