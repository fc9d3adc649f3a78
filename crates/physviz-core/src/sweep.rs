// File: crates/physviz-core/src/sweep.rs
// Summary: Parameter axes, 1-D/2-D grids, evaluated fields and the fixed-point solver.

use tracing::debug;

use crate::error::{Result, VizError};
use crate::grid::{linspace, logspace};
use crate::model::{evaluate, evaluate_grid};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Spacing {
    Linear,
    /// Uniform in log10; bounds are values, not exponents.
    Logarithmic,
}

/// A named, immutable sweep range.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterAxis {
    name: String,
    lower: f64,
    upper: f64,
    count: usize,
    spacing: Spacing,
}

impl ParameterAxis {
    pub fn new(
        name: impl Into<String>,
        lower: f64,
        upper: f64,
        count: usize,
        spacing: Spacing,
    ) -> Result<Self> {
        let name = name.into();
        if count == 0 {
            return Err(VizError::EmptyAxis { name });
        }
        if !lower.is_finite() || !upper.is_finite() {
            return Err(VizError::NonFiniteBound { name, lower, upper });
        }
        if lower > upper || (lower == upper && count > 1) {
            return Err(VizError::ReversedBounds { name, lower, upper });
        }
        if spacing == Spacing::Logarithmic && (lower <= 0.0 || upper <= 0.0) {
            return Err(VizError::NonPositiveLogBound { name, lower, upper });
        }
        Ok(Self { name, lower, upper, count, spacing })
    }

    pub fn linear(name: impl Into<String>, lower: f64, upper: f64, count: usize) -> Result<Self> {
        Self::new(name, lower, upper, count, Spacing::Linear)
    }

    pub fn logarithmic(name: impl Into<String>, lower: f64, upper: f64, count: usize) -> Result<Self> {
        Self::new(name, lower, upper, count, Spacing::Logarithmic)
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn lower(&self) -> f64 { self.lower }
    pub fn upper(&self) -> f64 { self.upper }
    pub fn count(&self) -> usize { self.count }
    pub fn spacing(&self) -> Spacing { self.spacing }

    /// Ordered samples, strictly increasing in value.
    pub fn samples(&self) -> Vec<f64> {
        match self.spacing {
            Spacing::Linear => linspace(self.lower, self.upper, self.count),
            Spacing::Logarithmic => logspace(self.lower, self.upper, self.count),
        }
    }
}

/// Sample positions of a 1-D sweep or the Cartesian product of two axes.
#[derive(Clone, Debug, PartialEq)]
pub enum ParameterGrid {
    OneD(Vec<f64>),
    /// Rows follow `ys`, columns follow `xs`.
    TwoD { xs: Vec<f64>, ys: Vec<f64> },
}

impl ParameterGrid {
    pub fn one_d(axis: &ParameterAxis) -> Self {
        Self::OneD(axis.samples())
    }

    pub fn two_d(x_axis: &ParameterAxis, y_axis: &ParameterAxis) -> Self {
        Self::TwoD { xs: x_axis.samples(), ys: y_axis.samples() }
    }

    /// `(rows, cols)`; a 1-D grid is a single row.
    pub fn shape(&self) -> (usize, usize) {
        match self {
            Self::OneD(xs) => (1, xs.len()),
            Self::TwoD { xs, ys } => (ys.len(), xs.len()),
        }
    }

    pub fn len(&self) -> usize {
        let (r, c) = self.shape();
        r * c
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

/// Model output aligned 1:1 with a 1-D sample sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Field1 {
    pub xs: Vec<f64>,
    pub values: Vec<f64>,
}

impl Field1 {
    pub fn new(xs: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        if xs.len() != values.len() {
            return Err(VizError::ShapeMismatch { expected: xs.len(), actual: values.len() });
        }
        Ok(Self { xs, values })
    }

    pub fn len(&self) -> usize { self.xs.len() }
    pub fn is_empty(&self) -> bool { self.xs.is_empty() }

    pub fn points(&self) -> Vec<(f64, f64)> {
        self.xs.iter().copied().zip(self.values.iter().copied()).collect()
    }

    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        Self { xs: self.xs.clone(), values: evaluate(f, &self.values) }
    }

    /// Combine two fields sampled on the same positions.
    pub fn zip_with<F: Fn(f64, f64) -> f64>(&self, other: &Field1, f: F) -> Result<Self> {
        if other.len() != self.len() {
            return Err(VizError::ShapeMismatch { expected: self.len(), actual: other.len() });
        }
        let values = self
            .values
            .iter()
            .zip(&other.values)
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Self { xs: self.xs.clone(), values })
    }

    /// Trapezoidal integral over the sample positions.
    pub fn trapezoid(&self) -> f64 {
        self.xs
            .windows(2)
            .zip(self.values.windows(2))
            .map(|(x, y)| 0.5 * (x[1] - x[0]) * (y[0] + y[1]))
            .sum()
    }

    /// Scale so the trapezoidal integral is one.
    pub fn normalized(&self) -> Self {
        let area = self.trapezoid();
        self.map(|v| v / area)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Value at the sample closest to `x`.
    pub fn value_at(&self, x: f64) -> Option<f64> {
        nearest_index(&self.xs, x).map(|i| self.values[i])
    }
}

/// Model output over `xs × ys`, row-major with `values[row * xs.len() + col]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Field2 {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub values: Vec<f64>,
}

impl Field2 {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        let expected = xs.len() * ys.len();
        if values.len() != expected {
            return Err(VizError::ShapeMismatch { expected, actual: values.len() });
        }
        Ok(Self { xs, ys, values })
    }

    /// `(rows, cols)` = `(ys.len(), xs.len())`.
    pub fn shape(&self) -> (usize, usize) {
        (self.ys.len(), self.xs.len())
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.xs.len() + col]
    }

    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        Self { xs: self.xs.clone(), ys: self.ys.clone(), values: evaluate(f, &self.values) }
    }

    /// `(row, col, x, y, value)` for every node in row-major order.
    pub fn iter_nodes(&self) -> impl Iterator<Item = (usize, usize, f64, f64, f64)> + '_ {
        let cols = self.xs.len();
        self.values.iter().enumerate().map(move |(i, &v)| {
            let (row, col) = (i / cols, i % cols);
            (row, col, self.xs[col], self.ys[row], v)
        })
    }

    /// Value at the node closest to `(x, y)`.
    pub fn nearest(&self, x: f64, y: f64) -> Option<f64> {
        let col = nearest_index(&self.xs, x)?;
        let row = nearest_index(&self.ys, y)?;
        Some(self.get(row, col))
    }
}

fn nearest_index(samples: &[f64], x: f64) -> Option<usize> {
    samples
        .iter()
        .enumerate()
        .min_by(|a, b| (a.1 - x).abs().total_cmp(&(b.1 - x).abs()))
        .map(|(i, _)| i)
}

/// Evaluate `model` once across the axis samples.
pub fn sweep_1d<F: Fn(f64) -> f64>(model: F, axis: &ParameterAxis) -> Field1 {
    let xs = axis.samples();
    let values = evaluate(model, &xs);
    debug!(axis = axis.name(), samples = xs.len(), "1-D sweep");
    Field1 { xs, values }
}

/// Evaluate `model(x, y)` at every node of `x_axis × y_axis`.
pub fn sweep_2d<F: Fn(f64, f64) -> f64>(
    model: F,
    x_axis: &ParameterAxis,
    y_axis: &ParameterAxis,
) -> Field2 {
    let xs = x_axis.samples();
    let ys = y_axis.samples();
    let values = evaluate_grid(model, &xs, &ys);
    debug!(x = x_axis.name(), y = y_axis.name(), rows = ys.len(), cols = xs.len(), "2-D sweep");
    Field2 { xs, ys, values }
}

/// Apply `x <- g(x)` exactly `iterations` times from `initial`.
/// No tolerance and no divergence check; the result is whatever the last step gives.
pub fn fixed_point<G: Fn(f64) -> f64>(g: G, initial: f64, iterations: usize) -> f64 {
    (0..iterations).fold(initial, |x, _| g(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_rejects_bad_bounds() {
        assert!(matches!(
            ParameterAxis::linear("a", 0.0, 1.0, 0),
            Err(VizError::EmptyAxis { .. })
        ));
        assert!(matches!(
            ParameterAxis::linear("a", f64::NAN, 1.0, 3),
            Err(VizError::NonFiniteBound { .. })
        ));
        assert!(matches!(
            ParameterAxis::logarithmic("nu", 0.0, 1e12, 3),
            Err(VizError::NonPositiveLogBound { .. })
        ));
        assert!(matches!(
            ParameterAxis::linear("M", 5.0, 2.0, 4),
            Err(VizError::ReversedBounds { .. })
        ));
        assert!(matches!(
            ParameterAxis::linear("M", 3.2, 3.2, 2),
            Err(VizError::ReversedBounds { .. })
        ));
        assert!(ParameterAxis::linear("M", 3.2, 3.2, 1).is_ok());
    }

    #[test]
    fn grid_shape_follows_axes() {
        let x = ParameterAxis::linear("M", 2.0, 5.0, 7).unwrap();
        let y = ParameterAxis::linear("alpha", 0.5, 1.5, 4).unwrap();
        assert_eq!(ParameterGrid::two_d(&x, &y).shape(), (4, 7));
        assert_eq!(ParameterGrid::one_d(&x).shape(), (1, 7));
        let f = sweep_2d(|m, a| m * 10.0 + a, &x, &y);
        assert_eq!(f.shape(), (4, 7));
        assert_eq!(f.get(2, 3), f.xs[3] * 10.0 + f.ys[2]);
    }

    #[test]
    fn fixed_point_counts_iterations() {
        assert_eq!(fixed_point(|x| x + 1.0, 20.0, 10), 30.0);
        assert_eq!(fixed_point(|x| x * 2.0, 3.0, 0), 3.0);
    }

    #[test]
    fn trapezoid_of_line() {
        let f = Field1::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0]).unwrap();
        assert!((f.trapezoid() - 2.0).abs() < 1e-12);
        assert!((f.normalized().trapezoid() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zip_with_rejects_mismatch() {
        let a = Field1::new(vec![0.0, 1.0], vec![1.0, 1.0]).unwrap();
        let b = Field1::new(vec![0.0], vec![1.0]).unwrap();
        assert!(a.zip_with(&b, |x, y| x + y).is_err());
    }

    #[test]
    fn nearest_lookup() {
        let x = ParameterAxis::linear("M", 2.0, 5.0, 31).unwrap();
        let y = ParameterAxis::linear("alpha", 0.5, 1.5, 11).unwrap();
        let f = sweep_2d(|m, a| m * a, &x, &y);
        let v = f.nearest(3.2, 0.8).unwrap();
        assert!((v - 3.2 * 0.8).abs() < 1e-9);
    }
}
