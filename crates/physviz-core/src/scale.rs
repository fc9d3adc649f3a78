// File: crates/physviz-core/src/scale.rs
// Summary: Data-to-screen transforms for linear and log10 axes.

use crate::axis::Axis;

/// Maps an axis range onto a pixel interval. `start_px` receives `axis.min`,
/// so vertical scales pass the bottom edge first.
#[derive(Clone, Copy, Debug)]
pub struct AxisScale {
    pub start_px: f32,
    pub end_px: f32,
    pub vmin: f64,
    pub vmax: f64,
    pub log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl AxisScale {
    pub fn new_linear(start_px: f32, end_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { start_px, end_px, vmin, vmax, log: false, log_min: 0.0, log_max: 0.0 };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    pub fn new_log10(start_px: f32, end_px: f32, mut vmin: f64, mut vmax: f64) -> Self {
        // Ensure strictly positive range for log scale
        let eps = 1e-300;
        vmin = if vmin <= eps { eps } else { vmin };
        vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        Self { start_px, end_px, vmin, vmax, log: true, log_min: vmin.log10(), log_max: vmax.log10() }
    }

    pub fn for_axis(axis: &Axis, start_px: f32, end_px: f32) -> Self {
        if axis.is_log() {
            Self::new_log10(start_px, end_px, axis.min, axis.max)
        } else {
            Self::new_linear(start_px, end_px, axis.min, axis.max)
        }
    }

    /// Fraction of the way from `vmin` to `vmax`, in the axis' own metric.
    #[inline]
    pub fn fraction(&self, v: f64) -> f64 {
        if self.log {
            let span = (self.log_max - self.log_min).max(1e-12);
            (v.max(1e-300).log10() - self.log_min) / span
        } else {
            (v - self.vmin) / (self.vmax - self.vmin)
        }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.start_px + self.fraction(v) as f32 * (self.end_px - self.start_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_linear_is_inverted() {
        let s = AxisScale::new_linear(500.0, 100.0, 0.0, 4.0);
        assert_eq!(s.to_px(0.0), 500.0);
        assert_eq!(s.to_px(4.0), 100.0);
        assert_eq!(s.to_px(2.0), 300.0);
    }

    #[test]
    fn log_decades_evenly_spaced() {
        let s = AxisScale::new_log10(0.0, 400.0, 1e8, 1e12);
        assert!((s.to_px(1e9) - 100.0).abs() < 1e-3);
        assert!((s.to_px(1e11) - 300.0).abs() < 1e-3);
        assert!((s.to_px(1e10) - 200.0).abs() < 1e-3);
    }
}
