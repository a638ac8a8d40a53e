use std::{error::Error, fmt::Display};

/// Errors returned by the solvers, the evaluator and [CubicSpline](crate::CubicSpline).
#[derive(Debug, Clone, PartialEq)]
pub enum SplineError {
    /// `x` and `y` have different lengths.
    DimensionMismatch { x_len: usize, y_len: usize },
    /// A spline needs at least two nodes.
    TooFewNodes { got: usize },
    /// One of the `b`, `c`, `d` sequences does not have one entry per node.
    CoefficientMismatch {
        name: &'static str,
        expected: usize,
        got: usize,
    },
    /// Node set rejected by [CubicSpline](crate::CubicSpline) validation.
    InvalidNodeSet { index: usize, reason: String },
    /// Query point outside `[x[0], x[n]]` for a range checked operation.
    OutOfRange { t: f64, min: f64, max: f64 },
}

impl Display for SplineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in Spline: ")?;
        match self {
            SplineError::DimensionMismatch { x_len, y_len } => {
                write!(f, "incompatible dimensions, x has {} values and y has {}", x_len, y_len)
            }
            SplineError::TooFewNodes { got } => {
                write!(f, "spline must have at least 2 nodes, got {}", got)
            }
            SplineError::CoefficientMismatch { name, expected, got } => {
                write!(f, "coefficients {} must have {} values, got {}", name, expected, got)
            }
            SplineError::InvalidNodeSet { index, reason } => {
                write!(f, "invalid node at index {}: {}", index, reason)
            }
            SplineError::OutOfRange { t, min, max } => {
                write!(f, "x = {} is out of range [{}, {}]", t, min, max)
            }
        }
    }
}

impl Error for SplineError {}
