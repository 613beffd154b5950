//! Dense linear solve backing the cell fit.
//!
//! Bridges the crate's generic `Float` code to a concrete nalgebra backend
//! through the [`FloatLinalg`] trait, implemented for `f32` and `f64`.
//!
//! The backend performs a full-pivot LU factorization with a pivot-magnitude
//! rank guard and no approximate fallback: a singular or ill-conditioned
//! system returns `None` rather than least-squares coefficients. Callers are
//! expected to row-equilibrate badly scaled systems first via
//! [`equilibrate_rows`].
use num_traits::Float;

/// Bridges generic `Float` scalar code to the nalgebra solve backend.
pub trait FloatLinalg: Float + 'static {
    /// Solve the square system `A * x = b` for `x`.
    ///
    /// `a` is the `n x n` matrix flattened row-major. Returns `None` when the
    /// factorization finds the system singular or numerically unstable.
    fn solve_dense(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn solve_dense(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_dense_f64(a, b, n)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn solve_dense(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_dense_f32(a, b, n)
    }
}

/// Scale each row of the system `[A | b]` by the largest magnitude entry of
/// that row of `A`, leaving all-zero rows untouched.
///
/// The solution of the scaled system equals the solution of the original;
/// scaling evens out rows whose magnitudes differ by orders of magnitude
/// (high-order monomials evaluated at large coordinates) before pivot
/// magnitudes are compared.
pub(crate) fn equilibrate_rows<T: Float>(a: &mut [T], b: &mut [T], n: usize) {
    for i in 0..n {
        let row = &mut a[i * n..(i + 1) * n];
        let mut scale = T::zero();
        for v in row.iter() {
            scale = scale.max(v.abs());
        }
        if scale > T::zero() {
            for v in row.iter_mut() {
                *v = *v / scale;
            }
            b[i] = b[i] / scale;
        }
    }
}

/// Nalgebra-based direct solvers.
pub mod nalgebra_backend {
    use nalgebra::{DMatrix, DVector};

    /// Solve `A * x = b` by full-pivot LU using f64 precision.
    ///
    /// Rejects the system when the smallest pivot falls below
    /// `n * epsilon` relative to the largest, the usual rank tolerance for a
    /// pivoted factorization.
    pub fn solve_dense_f64(a: &[f64], b: &[f64], n: usize) -> Option<Vec<f64>> {
        let matrix = DMatrix::from_row_slice(n, n, a);
        let rhs = DVector::from_column_slice(b);

        let lu = matrix.full_piv_lu();
        let diag = lu.u().diagonal();
        let dmax = diag.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
        let dmin = diag.iter().fold(f64::INFINITY, |acc, x| acc.min(x.abs()));
        // Written so that NaN pivots also fail the guard
        if !(dmin > dmax * f64::EPSILON * n as f64) {
            return None;
        }

        lu.solve(&rhs).map(|s: DVector<f64>| s.as_slice().to_vec())
    }

    /// Solve `A * x = b` by full-pivot LU using f32 precision.
    pub fn solve_dense_f32(a: &[f32], b: &[f32], n: usize) -> Option<Vec<f32>> {
        let matrix = DMatrix::from_row_slice(n, n, a);
        let rhs = DVector::from_column_slice(b);

        let lu = matrix.full_piv_lu();
        let diag = lu.u().diagonal();
        let dmax = diag.iter().fold(0.0_f32, |acc, x| acc.max(x.abs()));
        let dmin = diag.iter().fold(f32::INFINITY, |acc, x| acc.min(x.abs()));
        if !(dmin > dmax * f32::EPSILON * n as f32) {
            return None;
        }

        lu.solve(&rhs).map(|s: DVector<f32>| s.as_slice().to_vec())
    }
}
