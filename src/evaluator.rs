use crate::{error::SplineError, polynomial::Cubic};

/// Evaluates the piecewise cubic given by nodes `x`, `y` and coefficients `b`, `c`, `d` at every
/// query point of `t`. Output keeps the order of `t`.
///
/// Interval selection, with `n = x.len() - 1`:
/// - `t >= x[n-1]` uses the last interval, also beyond `x[n]`,
/// - `t < x[1]` uses the first interval, also before `x[0]`,
/// - any other `t` uses the interval `k` with `x[k] <= t < x[k+1]`.
///
/// # Example
/// ```
/// use cubic_spline::{evaluate, solve_natural};
///
/// let x = [0.0, 1.0, 2.0, 5.0];
/// let y = [0.0, 2.0, 4.0, 10.0];
/// let (b, c, d) = solve_natural(&x, &y).unwrap().into_parts();
///
/// let values = evaluate(&x, &y, &b, &c, &d, &[5.0, 0.0, 2.0, 1.0]).unwrap();
/// for (value, expected) in values.iter().zip([10.0, 0.0, 4.0, 2.0]) {
///     assert!((value - expected).abs() < 1e-12);
/// }
/// ```
/// # Errors
/// Returned before any evaluation when the inputs do not describe a spline:
/// [SplineError::TooFewNodes], [SplineError::DimensionMismatch] for `y` and
/// [SplineError::CoefficientMismatch] when `b`, `c` or `d` has not one entry per node.
pub fn evaluate(
    x: &[f64],
    y: &[f64],
    b: &[f64],
    c: &[f64],
    d: &[f64],
    t: &[f64],
) -> Result<Vec<f64>, SplineError> {
    check_shape(x, y, b, c, d)?;

    let results = t
        .iter()
        .map(|t| {
            let k = interval_index(x, *t);
            Cubic::new(x[k], y[k], b[k], c[k], d[k]).evaluate(*t)
        })
        .collect();
    Ok(results)
}

fn check_shape(x: &[f64], y: &[f64], b: &[f64], c: &[f64], d: &[f64]) -> Result<(), SplineError> {
    if x.len() < 2 {
        return Err(SplineError::TooFewNodes { got: x.len() });
    }
    if y.len() != x.len() {
        return Err(SplineError::DimensionMismatch { x_len: x.len(), y_len: y.len() });
    }
    for (name, coefficients) in [("b", b), ("c", c), ("d", d)] {
        if coefficients.len() != x.len() {
            return Err(SplineError::CoefficientMismatch {
                name,
                expected: x.len(),
                got: coefficients.len(),
            });
        }
    }
    Ok(())
}

/// Index of the interval whose cubic is used at `t`. `x` must hold at least two nodes.
///
/// NaN fails every comparison and lands on interval 0.
pub(crate) fn interval_index(x: &[f64], t: f64) -> usize {
    let last = x.len() - 2;
    if t >= x[last] {
        return last;
    }
    if t < x[1] || last < 2 {
        return 0;
    }
    // x[1] <= t < x[last], count of x[1..last] not above t is the interval index
    x[1..last].partition_point(|knot| *knot <= t)
}

/// Whether interval `k` is the one selected for `t`. The first interval is open to the left and
/// the last one to the right.
pub(crate) fn interval_contains(x: &[f64], k: usize, t: f64) -> bool {
    let last = x.len() - 2;
    let above_start = k == 0 || x[k] <= t;
    let below_end = k == last || t < x[k + 1];
    above_start && below_end
}
