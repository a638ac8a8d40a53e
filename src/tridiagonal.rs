use nalgebra::{DMatrix, DVector};

/// Tridiagonal linear system of size `n+1`. Row `i` reads
/// `lower[i]*c[i-1] + diagonal[i]*c[i] + upper[i]*c[i+1] = rhs[i]`,
/// with `lower[0]` and `upper[n]` ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalSystem {
    lower: Vec<f64>,
    diagonal: Vec<f64>,
    upper: Vec<f64>,
    rhs: Vec<f64>,
}

impl TridiagonalSystem {

    /// System of `size` rows with every coefficient set to zero.
    pub fn zeros(size: usize) -> Self {
        TridiagonalSystem {
            lower: vec![0.0; size],
            diagonal: vec![0.0; size],
            upper: vec![0.0; size],
            rhs: vec![0.0; size],
        }
    }

    pub fn size(&self) -> usize {
        self.diagonal.len()
    }

    /// Overwrites row `i`. `lower` is dropped on the first row and `upper` on the last one.
    pub fn set_row(&mut self, i: usize, lower: f64, diagonal: f64, upper: f64, rhs: f64) {
        let last = self.size() - 1;
        self.lower[i] = if i == 0 { 0.0 } else { lower };
        self.diagonal[i] = diagonal;
        self.upper[i] = if i == last { 0.0 } else { upper };
        self.rhs[i] = rhs;
    }

    /// Solves the system by forward elimination and back substitution, without pivoting.
    ///
    /// Forward pass computes the pivots `l[i] = diagonal[i] - lower[i]*u[i-1]`, the
    /// multipliers `u[i] = upper[i]/l[i]` and the reduced right hand side
    /// `z[i] = (rhs[i] - lower[i]*z[i-1])/l[i]`. The last unknown is `z[n]` and the
    /// others follow from `c[i] = z[i] - u[i]*c[i+1]`.
    ///
    /// Diagonally dominant systems never hit a zero pivot. Anything else divides by zero
    /// and returns non-finite values instead of failing.
    pub fn solve(&self) -> Vec<f64> {
        let size = self.size();
        if size == 0 {
            return Vec::new();
        }

        let mut u = vec![0.0; size];
        let mut z = vec![0.0; size];

        let l = self.diagonal[0];
        u[0] = self.upper[0] / l;
        z[0] = self.rhs[0] / l;

        for i in 1..size {
            let l = self.diagonal[i] - self.lower[i] * u[i - 1];
            u[i] = self.upper[i] / l;
            z[i] = (self.rhs[i] - self.lower[i] * z[i - 1]) / l;
        }

        let mut solution = vec![0.0; size];
        solution[size - 1] = z[size - 1];
        for i in (0..size - 1).rev() {
            solution[i] = z[i] - u[i] * solution[i + 1];
        }
        solution
    }

    /// Dense copy of the coefficient matrix.
    pub fn to_dense(&self) -> DMatrix<f64> {
        let size = self.size();
        let mut matrix = DMatrix::<f64>::zeros(size, size);
        for i in 0..size {
            matrix[(i, i)] = self.diagonal[i];
            if i > 0 {
                matrix[(i, i - 1)] = self.lower[i];
            }
            if i + 1 < size {
                matrix[(i, i + 1)] = self.upper[i];
            }
        }
        matrix
    }

    pub fn rhs_vector(&self) -> DVector<f64> {
        DVector::from_column_slice(&self.rhs)
    }

    /// Largest absolute row residual `|A*c - rhs|` of a candidate solution.
    pub fn max_residual(&self, solution: &[f64]) -> f64 {
        let product = self.to_dense() * DVector::from_column_slice(solution);
        (product - self.rhs_vector()).amax()
    }
}
