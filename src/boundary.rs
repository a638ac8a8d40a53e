use crate::tridiagonal::TridiagonalSystem;

/// End conditions closing the spline system.
///
/// Both variants share the interior equations, only the first and the last rows differ.
///
/// # Example
/// ```
/// use cubic_spline::{solve_coefficients, BoundaryCondition};
///
/// let x = [0.0, 1.0, 2.0, 3.0];
/// let y = [0.0, 1.0, 8.0, 27.0];
///
/// let natural = solve_coefficients(&x, &y, BoundaryCondition::Natural).unwrap();
/// assert_eq!(0.0, natural.c[0]);
///
/// let clamped = BoundaryCondition::Clamped { slope_start: 0.0, slope_end: 27.0 };
/// let clamped = solve_coefficients(&x, &y, clamped).unwrap();
/// assert!(clamped.b[0].abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum BoundaryCondition {
    /// Zero second derivative at both ends.
    #[default]
    Natural,
    /// Prescribed first derivative at `x[0]` and at `x[n]`.
    Clamped { slope_start: f64, slope_end: f64 },
}

impl BoundaryCondition {

    /// Writes row 0 and row n of `system`. `h` holds interval widths and `secants` the
    /// slopes `Δy[i]/h[i]`, both of length n.
    pub(crate) fn close_system(&self, system: &mut TridiagonalSystem, h: &[f64], secants: &[f64]) {
        let n = h.len();
        match *self {
            BoundaryCondition::Natural => {
                system.set_row(0, 0.0, 1.0, 0.0, 0.0);
                system.set_row(n, 0.0, 1.0, 0.0, 0.0);
            }
            BoundaryCondition::Clamped { slope_start, slope_end } => {
                system.set_row(
                    0,
                    0.0,
                    2.0 * h[0],
                    h[0],
                    3.0 * secants[0] - 3.0 * slope_start,
                );
                system.set_row(
                    n,
                    h[n - 1],
                    2.0 * h[n - 1],
                    0.0,
                    3.0 * slope_end - 3.0 * secants[n - 1],
                );
            }
        }
    }

    /// Prescribed end slopes, `None` for the natural condition.
    pub fn slopes(&self) -> Option<(f64, f64)> {
        match *self {
            BoundaryCondition::Natural => None,
            BoundaryCondition::Clamped { slope_start, slope_end } => Some((slope_start, slope_end)),
        }
    }
}
