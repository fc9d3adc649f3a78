// File: crates/physviz-core/src/axis.rs
// Summary: Axis model with labels, ranges, scale kind and tick layout.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
    /// Recompute `min`/`max` from the chart's data at render time.
    pub auto: bool,
}

impl Axis {
    /// Fixed linear range.
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Linear, auto: false }
    }

    /// Linear range taken from the data.
    pub fn auto(label: impl Into<String>) -> Self {
        Self { label: label.into(), min: 0.0, max: 1.0, kind: ScaleKind::Linear, auto: true }
    }

    pub fn log10(mut self) -> Self {
        self.kind = ScaleKind::Log10;
        self
    }

    pub fn is_log(&self) -> bool {
        self.kind == ScaleKind::Log10
    }

    /// Tick positions inside `[min, max]`: decades on log axes, 1/2/2.5/5 steps otherwise.
    pub fn ticks(&self) -> Vec<f64> {
        let (lo, hi) = (self.min.min(self.max), self.min.max(self.max));
        match self.kind {
            ScaleKind::Log10 => {
                let lo = lo.max(1e-300);
                let first = lo.log10().ceil() as i32;
                let last = hi.log10().floor() as i32;
                (first..=last).map(|e| 10f64.powi(e)).collect()
            }
            ScaleKind::Linear => {
                let step = nice_step((hi - lo) / 6.0);
                if !step.is_finite() || step <= 0.0 {
                    return vec![lo];
                }
                let start = (lo / step - 1e-9).ceil() as i64;
                let end = (hi / step + 1e-9).floor() as i64;
                (start..=end).map(|k| k as f64 * step).collect()
            }
        }
    }

    /// Label text for a tick produced by [`Axis::ticks`].
    pub fn tick_label(&self, value: f64) -> String {
        match self.kind {
            ScaleKind::Log10 => format!("10{}", superscript(value.log10().round() as i32)),
            ScaleKind::Linear => {
                let (lo, hi) = (self.min.min(self.max), self.min.max(self.max));
                let step = nice_step((hi - lo) / 6.0);
                let v = if value.abs() < step * 1e-9 { 0.0 } else { value };
                if step >= 1e5 || (step > 0.0 && step < 1e-4) {
                    return format!("{:.2e}", v);
                }
                format!("{:.*}", decimals_for(step), v)
            }
        }
    }
}

/// Round `raw` up to 1, 2, 2.5, 5 or 10 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !(raw.is_finite() && raw > 0.0) {
        return 0.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let factor = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * mag
}

fn decimals_for(step: f64) -> usize {
    if step <= 0.0 {
        return 0;
    }
    let mut decimals = (-step.log10().floor()).max(0.0) as usize;
    // 0.25, 0.025, ... need one more digit
    let scaled = step * 10f64.powi(decimals as i32);
    if (scaled - scaled.round()).abs() > 1e-9 {
        decimals += 1;
    }
    decimals
}

fn superscript(n: i32) -> String {
    n.to_string()
        .chars()
        .map(|c| match c {
            '-' => '⁻',
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_steps() {
        for (raw, want) in [(0.07, 0.1), (0.18, 0.2), (0.24, 0.25), (3.0, 5.0)] {
            assert!((nice_step(raw) - want).abs() < 1e-12, "{raw} -> {}", nice_step(raw));
        }
    }

    #[test]
    fn linear_ticks_inside_range() {
        let a = Axis::new("M", 2.0, 5.0);
        let t = a.ticks();
        assert!((t[0] - 2.0).abs() < 1e-12);
        assert!(t.iter().all(|&v| (2.0..=5.0 + 1e-9).contains(&v)));
        assert_eq!(a.tick_label(2.5), "2.5");
    }

    #[test]
    fn huge_ranges_switch_to_exponent_labels() {
        let a = Axis::new("phi", 0.0, 2e19);
        assert_eq!(a.tick_label(1e19), "1.00e19");
        assert_eq!(a.tick_label(0.0), "0.00e0");
    }

    #[test]
    fn log_ticks_are_decades() {
        let a = Axis::new("nu", 1e8, 1e12).log10();
        assert_eq!(a.ticks().len(), 5);
        assert_eq!(a.tick_label(1e-2), "10⁻²");
    }
}
