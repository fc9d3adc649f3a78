// File: crates/physviz-core/src/grid.rs
// Summary: Sample spacing helpers shared by parameter axes and tick layout.

/// Evenly spaced samples over `[start, end]`, endpoints included.
/// `steps == 1` yields `[start]`; the last sample is pinned to `end`.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            let mut out: Vec<f64> = (0..steps).map(|i| start + step * i as f64).collect();
            out[steps - 1] = end;
            out
        }
    }
}

/// Samples evenly spaced in log10 between two positive values.
pub fn logspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    linspace(start.log10(), end.log10(), steps)
        .into_iter()
        .map(|e| 10f64.powf(e))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_pins_endpoints() {
        let v = linspace(0.5, 1.2, 100);
        assert_eq!(v.len(), 100);
        assert_eq!(v[0], 0.5);
        assert_eq!(v[99], 1.2);
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
    }

    #[test]
    fn logspace_decades() {
        let v = logspace(1e8, 1e12, 5);
        for (got, want) in v.iter().zip([1e8, 1e9, 1e10, 1e11, 1e12]) {
            assert!((got / want - 1.0).abs() < 1e-12);
        }
    }
}
