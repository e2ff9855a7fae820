// File: crates/board-core/src/types.rs
// Summary: Shared layout types (frame size, margins, plot rectangle).

use crate::geometry::Rect;

/// Default frame width in pixels.
pub const WIDTH: u32 = 600;
/// Default frame height in pixels.
pub const HEIGHT: u32 = 400;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(80, 30, 50, 90)
    }
}

/// Frame size plus the margins reserved for axes and titles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
}

impl Layout {
    pub const fn new(width: u32, height: u32, insets: Insets) -> Self {
        Self { width, height, insets }
    }

    /// Area left for data shapes once margins are removed. Never inverted:
    /// a layout smaller than its insets collapses to a zero-sized rect.
    pub fn plot(&self) -> Rect {
        let left = self.insets.left as f64;
        let top = self.insets.top as f64;
        let right = (self.width.saturating_sub(self.insets.right) as f64).max(left);
        let bottom = (self.height.saturating_sub(self.insets.bottom) as f64).max(top);
        Rect::from_ltrb(left, top, right, bottom)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, Insets::default())
    }
}
