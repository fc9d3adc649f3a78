// File: crates/physviz-core/src/types.rs
// Summary: Shared types and constants (sizes, resolution, paddings).

/// Default surface width in logical units.
pub const WIDTH: i32 = 1000;
/// Default surface height in logical units.
pub const HEIGHT: i32 = 600;
/// Logical units per inch of figure size.
pub const UNITS_PER_INCH: f32 = 100.0;
/// Default output resolution.
pub const DEFAULT_DPI: f32 = 300.0;

/// Panel margins around the plot area, in logical units.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(80.0, 24.0, 44.0, 60.0)
    }
}
