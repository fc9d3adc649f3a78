// File: crates/physviz-core/src/bounds.rs
// Summary: Data extents across series and overlays, used to autoscale chart axes.

use crate::annotate::{Orientation, OverlayKind};
use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

struct Extent {
    min: f64,
    max: f64,
    any: bool,
    positive_only: bool,
}

impl Extent {
    fn new(positive_only: bool) -> Self {
        Self { min: f64::INFINITY, max: f64::NEG_INFINITY, any: false, positive_only }
    }

    fn push(&mut self, v: f64) {
        if !v.is_finite() || (self.positive_only && v <= 0.0) {
            return;
        }
        self.min = self.min.min(v);
        self.max = self.max.max(v);
        self.any = true;
    }

    /// Observed range, or a unit box (one decade on log axes) when nothing was pushed.
    fn range_or_default(&self) -> (f64, f64) {
        match (self.any, self.positive_only) {
            (true, _) => (self.min, self.max),
            (false, true) => (1.0, 10.0),
            (false, false) => (0.0, 1.0),
        }
    }
}

impl DataBounds {
    /// Extents of everything plotted on `chart`. Log axes ignore non-positive
    /// values. Text and text boxes do not contribute.
    pub fn from_chart(chart: &Chart) -> Self {
        let mut xs = Extent::new(chart.x_axis.is_log());
        let mut ys = Extent::new(chart.y_axis.is_log());

        for s in &chart.series {
            for &(x, y) in &s.data_xy {
                xs.push(x);
                ys.push(y);
            }
        }
        for o in &chart.overlays {
            match &o.kind {
                OverlayKind::Threshold { orientation: Orientation::Horizontal, value } => ys.push(*value),
                OverlayKind::Threshold { orientation: Orientation::Vertical, value } => xs.push(*value),
                OverlayKind::Span { orientation: Orientation::Horizontal, lo, hi } => {
                    ys.push(*lo);
                    ys.push(*hi);
                }
                OverlayKind::Span { orientation: Orientation::Vertical, lo, hi } => {
                    xs.push(*lo);
                    xs.push(*hi);
                }
                OverlayKind::Band { xs: bx, lower, upper } => {
                    bx.iter().for_each(|&x| xs.push(x));
                    lower.iter().chain(upper).for_each(|&y| ys.push(y));
                }
                OverlayKind::Contour { segments, .. } => {
                    for &(x, y) in segments.iter().flatten() {
                        xs.push(x);
                        ys.push(y);
                    }
                }
                OverlayKind::Cells { rects } => {
                    for r in rects {
                        xs.push(r[0]);
                        xs.push(r[2]);
                        ys.push(r[1]);
                        ys.push(r[3]);
                    }
                }
                OverlayKind::Scatter { points } => {
                    for &(x, y) in points {
                        xs.push(x);
                        ys.push(y);
                    }
                }
                OverlayKind::Marker { x, y } => {
                    xs.push(*x);
                    ys.push(*y);
                }
                OverlayKind::Text { .. } | OverlayKind::TextBox { .. } => {}
            }
        }

        let (x_min, mut x_max) = xs.range_or_default();
        let (y_min, mut y_max) = ys.range_or_default();
        if x_max - x_min <= 0.0 { x_max = x_min + 1.0; }
        if y_max - y_min <= 0.0 { y_max = y_min + 1.0; }
        Self { x_min, x_max, y_min, y_max }
    }

    /// Pad the y range by `margin` of its span (in log10 space on log axes).
    pub fn pad_y(mut self, margin: f64, log: bool) -> Self {
        if log {
            let (lo, hi) = (self.y_min.log10(), self.y_max.log10());
            let m = (hi - lo) * margin;
            self.y_min = 10f64.powf(lo - m);
            self.y_max = 10f64.powf(hi + m);
        } else {
            let m = (self.y_max - self.y_min) * margin;
            self.y_min -= m;
            self.y_max += m;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::{span, threshold};
    use crate::{Axis, Series, SeriesType};

    #[test]
    fn overlays_extend_bounds() {
        let mut chart = Chart::new();
        chart.x_axis = Axis::auto("x");
        chart.y_axis = Axis::auto("y");
        chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 1.0), (1.0, 2.0)]));
        chart.add_overlay(threshold(Orientation::Horizontal, 5.0));
        chart.add_overlay(span(Orientation::Vertical, -1.0, 0.5));
        let b = DataBounds::from_chart(&chart);
        assert_eq!((b.x_min, b.x_max, b.y_min, b.y_max), (-1.0, 1.0, 1.0, 5.0));
    }

    #[test]
    fn empty_chart_defaults_to_unit_box() {
        let b = DataBounds::from_chart(&Chart::new());
        assert_eq!((b.x_min, b.x_max, b.y_min, b.y_max), (0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn log_axis_without_positive_data_spans_one_decade() {
        let mut chart = Chart::new();
        chart.x_axis = Axis::auto("x");
        chart.y_axis = Axis::auto("y").log10();
        chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 0.0), (1.0, -2.0)]));
        let b = DataBounds::from_chart(&chart).pad_y(0.05, true);
        assert!(b.y_min > 0.0 && b.y_min < 1.0);
        assert!(b.y_max > 10.0 && b.y_max < 20.0);

        let (_, y) = chart.resolved_axes();
        assert!(y.ticks().len() <= 3, "{:?}", y.ticks());
    }
}
