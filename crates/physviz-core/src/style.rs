// File: crates/physviz-core/src/style.rs
// Summary: Stroke/fill styling shared by series and overlays.

use skia_safe as skia;

use crate::theme::{palette, with_alpha};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineDash {
    Solid,
    Dashed,
    Dotted,
}

impl LineDash {
    /// Dash intervals in logical units for a stroke of `width`.
    pub fn intervals(self, width: f32) -> Option<[f32; 2]> {
        let w = width.max(1.0);
        match self {
            LineDash::Solid => None,
            LineDash::Dashed => Some([3.7 * w, 1.6 * w]),
            LineDash::Dotted => Some([1.0 * w, 1.65 * w]),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Star,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub color: skia::Color,
    /// Opacity in `[0, 1]`, applied on top of `color`.
    pub alpha: f32,
    /// Stroke width in logical units.
    pub width: f32,
    pub dash: LineDash,
    /// Marker area in points², as scatter plots size markers.
    pub marker_size: f32,
    pub marker: MarkerShape,
    /// Text size for labels attached to the element.
    pub font_size: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: palette::blue(),
            alpha: 1.0,
            width: 1.5,
            dash: LineDash::Solid,
            marker_size: 36.0,
            marker: MarkerShape::Circle,
            font_size: 12.0,
        }
    }
}

impl Style {
    pub fn color(color: skia::Color) -> Self {
        Self { color, ..Self::default() }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_dash(mut self, dash: LineDash) -> Self {
        self.dash = dash;
        self
    }

    pub fn with_marker(mut self, marker: MarkerShape, size: f32) -> Self {
        self.marker = marker;
        self.marker_size = size;
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Colour with the style's opacity folded into the alpha channel.
    pub fn resolved_color(&self) -> skia::Color {
        let base = self.color.a() as f32 / 255.0;
        with_alpha(self.color, base * self.alpha)
    }

    /// Marker radius in logical units from the point² area.
    pub fn marker_radius(&self) -> f32 {
        self.marker_size.max(0.0).sqrt() * 0.5
    }

    pub(crate) fn stroke_paint(&self) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(self.width);
        paint.set_color(self.resolved_color());
        if let Some(intervals) = self.dash.intervals(self.width) {
            paint.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
        }
        paint
    }

    pub(crate) fn fill_paint(&self) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(self.resolved_color());
        paint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_has_no_dash() {
        assert!(LineDash::Solid.intervals(2.0).is_none());
        assert!(LineDash::Dashed.intervals(2.0).is_some());
    }

    #[test]
    fn alpha_folds_into_color() {
        let s = Style::color(palette::blue()).with_alpha(0.5);
        assert_eq!(s.resolved_color().a(), 128);
    }
}
