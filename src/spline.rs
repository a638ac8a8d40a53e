use crate::{
    boundary::BoundaryCondition,
    error::SplineError,
    evaluator::{interval_contains, interval_index},
    polynomial::Cubic,
    solver::{solve_coefficients, SplineCoefficients},
};

/// Cubic spline owning its nodes and coefficients.
///
/// Unlike the free [solve_natural](crate::solve_natural) and [solve_clamped](crate::solve_clamped)
/// functions, construction rejects node sets that would produce non-finite coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    boundary: BoundaryCondition,
    coefficients: SplineCoefficients,
    polynomials: Vec<Cubic>,
}

impl CubicSpline {
    pub fn new(x: Vec<f64>, y: Vec<f64>, boundary: BoundaryCondition) -> Result<Self, SplineError> {

        check_nodes(&x, &y)?;
        check_boundary(&x, boundary)?;

        let coefficients = solve_coefficients(&x, &y, boundary)?;
        let polynomials = (0..x.len() - 1)
            .map(|i| Cubic::new(x[i], y[i], coefficients.b[i], coefficients.c[i], coefficients.d[i]))
            .collect();

        Ok(CubicSpline { x, y, boundary, coefficients, polynomials })
    }

    pub fn natural(x: Vec<f64>, y: Vec<f64>) -> Result<Self, SplineError> {
        CubicSpline::new(x, y, BoundaryCondition::Natural)
    }

    pub fn clamped(x: Vec<f64>, y: Vec<f64>, slope_start: f64, slope_end: f64) -> Result<Self, SplineError> {
        CubicSpline::new(x, y, BoundaryCondition::Clamped { slope_start, slope_end })
    }

    /// Value at `t`, which must lie within `[x[0], x[n]]`.
    pub fn interpolate(&self, t: f64) -> Result<f64, SplineError> {
        self.check_range(t)?;
        Ok(self.extrapolate(t))
    }

    pub fn batch_interpolate(&self, t_vector: &[f64]) -> Result<Vec<f64>, SplineError> {
        if let Some(t) = t_vector.iter().find(|t| !self.is_in_range(**t)) {
            return Err(self.out_of_range(*t));
        }
        Ok(self.batch_extrapolate(t_vector))
    }

    /// Value at any `t`. Points left of `x[1]` use the first cubic and points from `x[n-1]`
    /// onwards use the last one.
    pub fn extrapolate(&self, t: f64) -> f64 {
        self.polynomials[interval_index(&self.x, t)].evaluate(t)
    }

    /// Same values as [CubicSpline::extrapolate] for every point. Consecutive queries reuse the
    /// previous interval, so sorted input avoids most searches.
    pub fn batch_extrapolate(&self, t_vector: &[f64]) -> Vec<f64> {

        let mut results = Vec::with_capacity(t_vector.len());
        let mut index = 0;

        for t in t_vector {
            index = self.find_interval_index_with_hint(index, *t);
            results.push(self.polynomials[index].evaluate(*t));
        }
        results
    }

    pub fn derivative(&self, t: f64) -> f64 {
        self.polynomials[interval_index(&self.x, t)].derivative(t)
    }

    pub fn second_derivative(&self, t: f64) -> f64 {
        self.polynomials[interval_index(&self.x, t)].second_derivative(t)
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn coefficients(&self) -> &SplineCoefficients {
        &self.coefficients
    }

    pub fn boundary(&self) -> BoundaryCondition {
        self.boundary
    }

    pub fn number_of_intervals(&self) -> usize {
        self.polynomials.len()
    }

    pub fn min_x(&self) -> f64 {
        self.x[0]
    }

    pub fn max_x(&self) -> f64 {
        self.x[self.x.len() - 1]
    }

    fn is_in_range(&self, t: f64) -> bool {
        self.min_x() <= t && t <= self.max_x()
    }

    fn check_range(&self, t: f64) -> Result<(), SplineError> {
        if self.is_in_range(t) {
            Ok(())
        } else {
            Err(self.out_of_range(t))
        }
    }

    fn out_of_range(&self, t: f64) -> SplineError {
        SplineError::OutOfRange { t, min: self.min_x(), max: self.max_x() }
    }

    fn find_interval_index_with_hint(&self, index_hint: usize, t: f64) -> usize {

        if interval_contains(&self.x, index_hint, t) {
            return index_hint;
        }
        if index_hint + 1 < self.polynomials.len() && interval_contains(&self.x, index_hint + 1, t) {
            return index_hint + 1;
        }
        interval_index(&self.x, t)
    }
}

fn check_nodes(x: &[f64], y: &[f64]) -> Result<(), SplineError> {
    if x.len() != y.len() {
        return Err(SplineError::DimensionMismatch { x_len: x.len(), y_len: y.len() });
    }
    if x.len() < 2 {
        return Err(SplineError::TooFewNodes { got: x.len() });
    }

    for (index, (x_value, y_value)) in x.iter().zip(y.iter()).enumerate() {
        if !x_value.is_finite() || !y_value.is_finite() {
            return Err(SplineError::InvalidNodeSet {
                index,
                reason: format!("node ({}, {}) is not finite", x_value, y_value),
            });
        }
    }

    // widths may overflow even for finite abscissas
    if let Some(index) = x.windows(2).position(|w| !(w[1] - w[0] > 0.0 && (w[1] - w[0]).is_finite())) {
        return Err(SplineError::InvalidNodeSet {
            index: index + 1,
            reason: format!(
                "abscissas must be strictly increasing with finite spacing, got {} after {}",
                x[index + 1],
                x[index]
            ),
        });
    }
    Ok(())
}

fn check_boundary(x: &[f64], boundary: BoundaryCondition) -> Result<(), SplineError> {
    if let Some((slope_start, slope_end)) = boundary.slopes() {
        if !slope_start.is_finite() {
            return Err(SplineError::InvalidNodeSet {
                index: 0,
                reason: format!("start slope {} is not finite", slope_start),
            });
        }
        if !slope_end.is_finite() {
            return Err(SplineError::InvalidNodeSet {
                index: x.len() - 1,
                reason: format!("end slope {} is not finite", slope_end),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::evaluator::evaluate;

    #[test]
    fn natural_over_linear_data() {
        let eps = 1e-12;
        let spline = CubicSpline::natural(vec![0.0, 1.0, 2.0, 5.0], vec![0.0, 2.0, 4.0, 10.0]).unwrap();

        assert_eq!(3, spline.number_of_intervals());
        assert_eq!(BoundaryCondition::Natural, spline.boundary());
        assert_eq!(0.0, spline.coefficients().c[0]);
        assert_eq!(0.0, spline.coefficients().c[3]);

        assert_approx_eq!(spline.interpolate(0.0).unwrap(), 0.0, eps);
        assert_approx_eq!(spline.interpolate(1.0).unwrap(), 2.0, eps);
        assert_approx_eq!(spline.interpolate(2.0).unwrap(), 4.0, eps);
        assert_approx_eq!(spline.interpolate(5.0).unwrap(), 10.0, eps);
        assert_approx_eq!(spline.interpolate(3.3).unwrap(), 6.6, eps);

        assert_approx_eq!(spline.second_derivative(0.0), 0.0, eps);
        assert_approx_eq!(spline.second_derivative(5.0), 0.0, eps);
    }

    #[test]
    fn clamped_over_x_cubed() {
        let eps = 1e-9;
        let spline = CubicSpline::clamped(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 8.0, 27.0], 0.0, 27.0).unwrap();

        assert_approx_eq!(spline.coefficients().b[0], 0.0, eps);
        assert_approx_eq!(spline.derivative(0.0), 0.0, eps);
        assert_approx_eq!(spline.derivative(3.0), 27.0, eps);

        assert_approx_eq!(spline.interpolate(0.13).unwrap(), 0.13_f64.powi(3), eps);
        assert_approx_eq!(spline.interpolate(1.8643128).unwrap(), 1.8643128_f64.powi(3), eps);
        assert_approx_eq!(spline.interpolate(2.5).unwrap(), 15.625, eps);

        assert!(spline.interpolate(3.5).is_err());

        assert_approx_eq!(spline.extrapolate(-1.0), -1.0, eps);
        assert_approx_eq!(spline.extrapolate(-0.2), (-0.2_f64).powi(3), eps);
        assert_approx_eq!(spline.extrapolate(3.5), 3.5_f64.powi(3), eps);
        assert_approx_eq!(spline.second_derivative(1.5), 9.0, eps);
    }

    #[test]
    fn natural_over_x_cubed_extrapolation() {
        let eps = 1e-12;
        let spline = CubicSpline::natural(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 8.0, 27.0]).unwrap();

        assert_approx_eq!(spline.extrapolate(-1.0), -1.0, eps);
        assert_approx_eq!(spline.extrapolate(4.0), 46.0, eps);
        assert_approx_eq!(spline.interpolate(1.5).unwrap(), 3.15, eps);

        // derivative is continuous across nodes
        assert_approx_eq!(spline.derivative(1.0), 2.6, eps);
        assert_approx_eq!(spline.derivative(2.0), 13.4, eps);
        assert_approx_eq!(spline.derivative(1.0 - 1e-12), 2.6, 1e-9);
    }

    #[test]
    fn batch_matches_evaluate_on_unsorted_queries() {
        let x = vec![0.0, 0.9, 1.1, 1.7, 2.0];
        let y: Vec<f64> = x.iter().map(|v: &f64| v.sin()).collect();
        let spline = CubicSpline::clamped(x.clone(), y.clone(), 1.0, 2.0_f64.cos()).unwrap();

        let t = vec![2.5, 0.0, 0.0001, 1.11, -1.0, 1.1, 0.9, 1.7, 1.69, 2.0, -0.2, 1.0];
        let coefficients = spline.coefficients();
        let expected = evaluate(&x, &y, &coefficients.b, &coefficients.c, &coefficients.d, &t).unwrap();
        let result = spline.batch_extrapolate(&t);

        assert_eq!(expected, result);
        for i in 0..t.len() {
            assert_eq!(spline.extrapolate(t[i]), result[i]);
        }
    }

    #[test]
    fn batch_interpolate() {
        let eps = 1e-6;
        let x = vec![0.0, 0.9, 1.1, 1.7, 2.0];
        let y = x.iter().map(|v| v * v).collect();
        let spline = CubicSpline::clamped(x, y, 0.0, 4.0).unwrap();

        // a clamped spline reproduces x^2 exactly
        let t_vector = vec![0.0, 0.13, 0.69, 1.0, 1.13, 1.8643128, 2.0];
        let result = spline.batch_interpolate(&t_vector).unwrap();

        assert_eq!(t_vector.len(), result.len());
        for i in 0..t_vector.len() {
            assert_approx_eq!(result[i], t_vector[i].powi(2), eps);
        }

        let t_vector = vec![0.0, 0.13, 0.69, 1.0, 3.0];
        assert_eq!(
            Err(SplineError::OutOfRange { t: 3.0, min: 0.0, max: 2.0 }),
            spline.batch_interpolate(&t_vector)
        );
    }

    #[test]
    fn single_interval() {
        let spline = CubicSpline::natural(vec![0.0, 1.0], vec![0.0, 1.0]).unwrap();

        assert_eq!(1, spline.number_of_intervals());
        assert_eq!(vec![-2.0, 0.5, 3.0], spline.batch_extrapolate(&[-2.0, 0.5, 3.0]));
        assert_eq!(0.0, spline.min_x());
        assert_eq!(1.0, spline.max_x());
    }

    #[test]
    fn dimension_mismatch() {
        let spline = CubicSpline::natural(vec![0.0, 1.0, 2.0], vec![1.0, 2.0]);
        assert_eq!(Err(SplineError::DimensionMismatch { x_len: 3, y_len: 2 }), spline);
    }

    #[test]
    fn test_one_node_error() {
        let spline = CubicSpline::natural(vec![0.0], vec![2.0]);
        assert_eq!(Err(SplineError::TooFewNodes { got: 1 }), spline);
    }

    #[test]
    fn test_equal_x_values() {
        let spline = CubicSpline::natural(vec![0.0, 0.0, 1.0], vec![2.0, 1.0, 4.0]);

        match spline {
            Err(SplineError::InvalidNodeSet { index, .. }) => assert_eq!(1, index),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_decreasing_x_values() {
        let spline = CubicSpline::natural(vec![0.0, 2.0, 1.0], vec![2.0, 1.0, 4.0]);
        assert!(matches!(spline, Err(SplineError::InvalidNodeSet { index: 2, .. })));
    }

    #[test]
    fn test_non_finite_values() {
        let spline = CubicSpline::natural(vec![0.0, 1.0, 2.0], vec![2.0, f64::NAN, 4.0]);
        assert!(matches!(spline, Err(SplineError::InvalidNodeSet { index: 1, .. })));

        let spline = CubicSpline::natural(vec![-f64::MAX, f64::MAX], vec![0.0, 1.0]);
        assert!(matches!(spline, Err(SplineError::InvalidNodeSet { index: 1, .. })));

        let spline = CubicSpline::clamped(vec![0.0, 1.0, 2.0], vec![2.0, 1.0, 4.0], 0.0, f64::INFINITY);
        assert!(matches!(spline, Err(SplineError::InvalidNodeSet { index: 2, .. })));
    }

    #[test]
    fn spline_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CubicSpline>();
    }

    #[ignore]
    #[test]
    fn perfomance() {
        use std::time::Instant;
        use rand::Rng;

        let x_min = 0.0;
        let x_max = 6.0;
        let mut rng = rand::thread_rng();

        let nodes_number = 30;
        let node_step = (x_max - x_min) / nodes_number as f64;

        let x: Vec<f64> = (0..=nodes_number).map(|i| x_min + node_step * i as f64).collect();
        let y: Vec<f64> = x.iter().map(|_| rng.gen_range(0.0..10.0)).collect();

        let spline = CubicSpline::clamped(x, y, 0.0, 0.0).unwrap();

        let number_of_points = 300_000;
        let step = (x_max - x_min) / number_of_points as f64;
        let t_vector: Vec<f64> = (0..=number_of_points).map(|i| x_min + step * i as f64).collect();

        let now = Instant::now();
        for t in t_vector.iter() {
            assert!(spline.interpolate(*t).unwrap().is_finite());
        }
        let elapsed = now.elapsed();
        println!("interpolate time: {:.2?}", elapsed);

        let now = Instant::now();
        let result = spline.batch_interpolate(&t_vector).unwrap();
        assert!(result.len() == t_vector.len());
        let elapsed = now.elapsed();
        println!("batch_interpolate time: {:.2?}", elapsed);
    }
}
