// File: crates/board-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use std::f64::consts::{FRAC_PI_2, TAU};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { left: x, top: y, right: x + width, bottom: y + height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
    pub fn area(&self) -> f64 { self.width().max(0.0) * self.height().max(0.0) }
    pub fn center(&self) -> (f64, f64) {
        ((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// Shrink by `pad` on every side; never produces a negative size.
    pub fn inset(&self, pad: f64) -> Rect {
        let (cx, cy) = self.center();
        Rect {
            left: (self.left + pad).min(cx),
            top: (self.top + pad).min(cy),
            right: (self.right - pad).max(cx),
            bottom: (self.bottom - pad).max(cy),
        }
    }

    pub fn rounded(&self) -> Rect {
        Rect::from_ltrb(self.left.round(), self.top.round(), self.right.round(), self.bottom.round())
    }
}

/// Point on a circle for an angle measured clockwise from 12 o'clock
/// (the convention pie layouts use), in a y-down pixel space.
#[inline]
pub fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    let a = angle - FRAC_PI_2;
    (cx + r * a.cos(), cy + r * a.sin())
}

/// Inverse of [`polar`]: distance and clockwise-from-top angle in `[0, TAU)`.
pub fn to_polar(cx: f64, cy: f64, x: f64, y: f64) -> (f64, f64) {
    let dx = x - cx;
    let dy = y - cy;
    let r = (dx * dx + dy * dy).sqrt();
    let a = (dy.atan2(dx) + FRAC_PI_2).rem_euclid(TAU);
    (r, a)
}
