// File: crates/physviz-core/src/geometry.rs
// Summary: Lightweight rectangle helpers for panel and plot-area layout.

use skia_safe as skia;

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// Shrink by `insets`; never inverts.
    pub fn inset(&self, insets: &Insets) -> Self {
        let left = self.left + insets.left;
        let top = self.top + insets.top;
        Self {
            left,
            top,
            right: (self.right - insets.right).max(left + 1.0),
            bottom: (self.bottom - insets.bottom).max(top + 1.0),
        }
    }

    /// Sub-rectangle from fractions `[left, bottom, width, height]` with a
    /// bottom-left origin, the way figure-relative axes are placed.
    pub fn fraction(&self, frac: [f32; 4]) -> Self {
        let [fl, fb, fw, fh] = frac;
        let left = self.left + fl * self.width();
        let bottom = self.bottom - fb * self.height();
        Self { left, top: bottom - fh * self.height(), right: left + fw * self.width(), bottom }
    }

    pub fn to_skia(&self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}
