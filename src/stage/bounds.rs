//! Screen-space rectangle used as the single source of truth for all
//! gameplay geometry. Coordinates are logical pixels with the origin at
//! the top-left of the window and +y pointing down; presentation maps
//! them to world space at the end of each tick.

use bevy::prelude::*;

#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }

    /// Shift horizontally, keeping the width intact.
    pub fn translate_x(&mut self, dx: f32) {
        self.left += dx;
        self.right += dx;
    }

    /// Shift vertically, keeping the height intact.
    pub fn translate_y(&mut self, dy: f32) {
        self.top += dy;
        self.bottom += dy;
    }

    /// A rect that cannot take part in collision: non-finite, inverted,
    /// or zero-area.
    pub fn is_degenerate(&self) -> bool {
        let finite = self.left.is_finite()
            && self.right.is_finite()
            && self.top.is_finite()
            && self.bottom.is_finite();
        !finite || self.right <= self.left || self.bottom <= self.top
    }

    /// Horizontal span shrunk inward by `margin`. The interval is
    /// clamped so a rect narrower than twice the margin never inverts.
    pub fn shrunk_x(&self, margin: f32) -> (f32, f32) {
        let lo = self.left + margin;
        let hi = (self.right - margin).max(lo);
        (lo, hi)
    }

    /// Vertical span shrunk inward by `margin`, clamped the same way.
    pub fn shrunk_y(&self, margin: f32) -> (f32, f32) {
        let lo = self.top + margin;
        let hi = (self.bottom - margin).max(lo);
        (lo, hi)
    }

    /// Does this rect's margin-shrunk horizontal span intersect the
    /// other rect's full span?
    pub fn overlaps_x(&self, other: &Bounds, margin: f32) -> bool {
        let (lo, hi) = self.shrunk_x(margin);
        lo <= other.right && hi >= other.left
    }

    /// Does this rect's margin-shrunk vertical span intersect the other
    /// rect's full span?
    pub fn overlaps_y(&self, other: &Bounds, margin: f32) -> bool {
        let (lo, hi) = self.shrunk_y(margin);
        lo <= other.bottom && hi >= other.top
    }
}
