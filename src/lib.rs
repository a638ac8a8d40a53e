//! Natural and clamped cubic spline interpolation.
//!
//! Coefficients come from a tridiagonal system solved in linear time, and the resulting
//! piecewise cubic is evaluated in Horner form. Points outside the nodes are extrapolated
//! with the first or the last interval's cubic.
//!
//! # Example
//! ```
//! use cubic_spline::{evaluate, solve_clamped, CubicSpline};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let x = [0.0, 1.0, 2.0, 3.0];
//! let y = [0.0, 1.0, 8.0, 27.0];
//!
//! let (b, c, d) = solve_clamped(&x, &y, 0.0, 27.0).unwrap().into_parts();
//! let values = evaluate(&x, &y, &b, &c, &d, &[0.5, 2.5]).unwrap();
//! assert_approx_eq!(0.125, values[0], 1e-9);
//! assert_approx_eq!(15.625, values[1], 1e-9);
//!
//! let spline = CubicSpline::clamped(x.to_vec(), y.to_vec(), 0.0, 27.0).unwrap();
//! assert_approx_eq!(27.0, spline.derivative(3.0), 1e-9);
//! assert!(spline.interpolate(4.0).is_err());
//! assert_approx_eq!(64.0, spline.extrapolate(4.0), 1e-9);
//! ```

mod boundary;
mod error;
mod evaluator;
mod polynomial;
mod solver;
mod spline;
mod tridiagonal;

pub use boundary::BoundaryCondition;
pub use error::SplineError;
pub use evaluator::evaluate;
pub use solver::{build_system, solve_clamped, solve_coefficients, solve_natural, SplineCoefficients};
pub use spline::CubicSpline;
pub use tridiagonal::TridiagonalSystem;
