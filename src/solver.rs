use crate::{boundary::BoundaryCondition, error::SplineError, tridiagonal::TridiagonalSystem};

/// Coefficients of a cubic spline, one entry per node.
///
/// On interval `i` the spline is `y[i] + b[i]*s + c[i]*s^2 + d[i]*s^3` with `s = t - x[i]`.
/// Entries at index `n` are auxiliary: `c[n]` is the end curvature term and `b[n]`, `d[n]`
/// stay zero.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineCoefficients {
    pub b: Vec<f64>,
    pub c: Vec<f64>,
    pub d: Vec<f64>,
}

impl SplineCoefficients {

    pub fn len(&self) -> usize {
        self.b.len()
    }

    pub fn is_empty(&self) -> bool {
        self.b.is_empty()
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.b, self.c, self.d)
    }
}

/// Natural cubic spline coefficients (zero second derivative at both ends).
///
/// Only the lengths of `x` and `y` are checked. Abscissas must be strictly increasing,
/// repeated or unordered values produce non-finite coefficients.
///
/// # Example
/// ```
/// use cubic_spline::solve_natural;
///
/// let coefficients = solve_natural(&[0.0, 1.0, 2.0, 5.0], &[0.0, 2.0, 4.0, 10.0]).unwrap();
/// assert_eq!(0.0, coefficients.c[0]);
/// assert_eq!(0.0, coefficients.c[3]);
/// ```
/// # Errors
/// [SplineError::DimensionMismatch] when `x` and `y` lengths differ and
/// [SplineError::TooFewNodes] for less than two nodes.
pub fn solve_natural(x: &[f64], y: &[f64]) -> Result<SplineCoefficients, SplineError> {
    solve_coefficients(x, y, BoundaryCondition::Natural)
}

/// Clamped cubic spline coefficients with first derivative `slope_start` at `x[0]` and
/// `slope_end` at `x[n]`. Same checks as [solve_natural].
pub fn solve_clamped(
    x: &[f64],
    y: &[f64],
    slope_start: f64,
    slope_end: f64,
) -> Result<SplineCoefficients, SplineError> {
    solve_coefficients(x, y, BoundaryCondition::Clamped { slope_start, slope_end })
}

pub fn solve_coefficients(
    x: &[f64],
    y: &[f64],
    boundary: BoundaryCondition,
) -> Result<SplineCoefficients, SplineError> {
    let system = build_system(x, y, boundary)?;
    let n = x.len() - 1;

    let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
    let delta: Vec<f64> = y.windows(2).map(|w| w[1] - w[0]).collect();

    let c = system.solve();
    let mut b = vec![0.0; n + 1];
    let mut d = vec![0.0; n + 1];

    for i in 0..n {
        b[i] = delta[i] / h[i] - h[i] * (c[i + 1] + 2.0 * c[i]) / 3.0;
        d[i] = (c[i + 1] - c[i]) / (3.0 * h[i]);
    }

    Ok(SplineCoefficients { b, c, d })
}

/// Tridiagonal system for the quadratic coefficients `c[0..=n]`.
pub fn build_system(
    x: &[f64],
    y: &[f64],
    boundary: BoundaryCondition,
) -> Result<TridiagonalSystem, SplineError> {
    check_dimensions(x, y)?;
    let n = x.len() - 1;

    let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
    let secants: Vec<f64> = y
        .windows(2)
        .zip(h.iter())
        .map(|(w, width)| (w[1] - w[0]) / width)
        .collect();

    let mut system = TridiagonalSystem::zeros(n + 1);
    for i in 1..n {
        system.set_row(
            i,
            h[i - 1],
            2.0 * (h[i - 1] + h[i]),
            h[i],
            3.0 * (secants[i] - secants[i - 1]),
        );
    }
    boundary.close_system(&mut system, &h, &secants);

    Ok(system)
}

fn check_dimensions(x: &[f64], y: &[f64]) -> Result<(), SplineError> {
    if x.len() != y.len() {
        return Err(SplineError::DimensionMismatch { x_len: x.len(), y_len: y.len() });
    }
    if x.len() < 2 {
        return Err(SplineError::TooFewNodes { got: x.len() });
    }
    Ok(())
}
