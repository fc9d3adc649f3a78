// File: crates/physviz-core/src/error.rs
// Summary: Typed construction errors for axes and fields.

use thiserror::Error;

/// Invalid-domain signal raised while building grids and fields.
///
/// Model functions themselves never fail; these errors only guard the inputs
/// that decide where a model is evaluated.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VizError {
    #[error("axis `{name}` has no samples")]
    EmptyAxis { name: String },

    #[error("axis `{name}` has a non-finite bound ({lower}, {upper})")]
    NonFiniteBound { name: String, lower: f64, upper: f64 },

    #[error("logarithmic axis `{name}` needs positive bounds, got ({lower}, {upper})")]
    NonPositiveLogBound { name: String, lower: f64, upper: f64 },

    #[error("axis `{name}` needs lower < upper, got ({lower}, {upper})")]
    ReversedBounds { name: String, lower: f64, upper: f64 },

    #[error("field shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, VizError>;
