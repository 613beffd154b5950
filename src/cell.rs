//! Multilinear polynomial fit and evaluation for a single axis-aligned cell.
//!
//! Construction builds the `2^N x 2^N` design matrix of basis monomials
//! evaluated at the cell's corners and solves it directly for the polynomial
//! coefficients; evaluation is a pure sum of coefficient-weighted monomials
//! and is valid inside, on, and outside the cell.
//!
//! ```rust
//! use cellfit::cell;
//!
//! // Unit square with values increasing along x
//! let limits = [(0.0_f64, 1.0), (0.0, 1.0)];
//! let values = [0.0, 0.0, 1.0, 1.0];
//!
//! // Observation points, one slice per axis
//! let xobs = [0.25_f64, 0.75];
//! let yobs = [0.5_f64, 0.5];
//! let obs = [&xobs[..], &yobs[..]];
//!
//! let out = cell::interpn_alloc(&limits, &values, &obs).unwrap();
//! assert!((out[0] - 0.25).abs() < 1e-12);
//! assert!((out[1] - 0.75).abs() < 1e-12);
//! ```
use std::sync::Arc;

use num_traits::Float;

use crate::basis::{power_of_two, BasisMask};
use crate::corners::corner_points;
use crate::error::FitError;
use crate::linalg::{equilibrate_rows, FloatLinalg};

/// Largest supported dimension count.
///
/// The fit solves a dense system of side `2^N`, so dimension counts are
/// validated up front instead of letting `2^N` sizing grow without bound.
pub const MAX_NDIMS: usize = 10;

/// Fit a cell and evaluate it at a list of observation points.
///
/// `obs` holds one coordinate slice per axis; `out` receives one value per
/// observation point.
///
/// This is a convenience function; it re-fits the cell on every call. When
/// evaluating many points against one cell, build a [`MultilinearCell`] once
/// and reuse it.
///
/// # Errors
/// * Any construction error of [`MultilinearCell::new`]
/// * If the observation slices do not match the cell's dimension count or
///   the output length
pub fn interpn<T: FloatLinalg>(
    limits: &[(T, T)],
    values: &[T],
    obs: &[&[T]],
    out: &mut [T],
) -> Result<(), FitError> {
    MultilinearCell::new(limits, values)?.interp(obs, out)
}

/// Evaluate a cell fit, allocating a new Vec for the output.
///
/// For best results, use the `interpn` function with preallocated output;
/// allocation has a significant performance cost, and should be used
/// sparingly.
pub fn interpn_alloc<T: FloatLinalg>(
    limits: &[(T, T)],
    values: &[T],
    obs: &[&[T]],
) -> Result<Vec<T>, FitError> {
    let mut out = vec![T::zero(); obs.first().map(|x| x.len()).unwrap_or(0)];
    interpn(limits, values, obs, &mut out)?;
    Ok(out)
}

/// Check whether a list of observation points are inside the cell within
/// some absolute tolerance.
///
/// Output slice entry `j` is set to `false` if no points on axis `j` are out
/// of bounds, and set to `true` if there is a bounds violation on that axis.
///
/// Purely advisory; evaluation does not require containment, and off-cell
/// points extrapolate along the fitted polynomial.
///
/// # Errors
/// * If the number of observation slices or the output length does not match
///   the number of axes
pub fn check_bounds<T: Float>(
    limits: &[(T, T)],
    obs: &[&[T]],
    atol: T,
    out: &mut [bool],
) -> Result<(), FitError> {
    let ndims = limits.len();
    if obs.len() != ndims {
        return Err(FitError::DimensionMismatch {
            expected: ndims,
            actual: obs.len(),
        });
    }
    if out.len() != ndims {
        return Err(FitError::DimensionMismatch {
            expected: ndims,
            actual: out.len(),
        });
    }

    for j in 0..ndims {
        let (lo, hi) = limits[j];
        let bad = obs[j]
            .iter()
            .any(|&x| (x - lo) <= -atol || (x - hi) >= atol);
        out[j] = bad;
    }
    Ok(())
}

/// The multilinear interpolant of one axis-aligned N-dimensional cell.
///
/// Consumes per-axis `(min, max)` limits and the `2^N` corner values (ordered
/// per the crate-level corner convention), fits the unique multilinear
/// polynomial through them once at construction, and evaluates that
/// polynomial at arbitrary points thereafter.
///
/// Operation Complexity
/// * Construction is dominated by a direct solve of side `2^N`, O(8^N).
/// * Evaluation is O(N * 2^N).
///
/// After construction the cell is immutable; evaluation touches only the
/// coefficient vector and the shared basis mask, so one instance can be
/// queried from any number of threads without locking.
#[derive(Debug)]
pub struct MultilinearCell<T> {
    /// Number of axes
    ndims: usize,

    /// Monomial inclusion table; depends only on ndims and may be shared
    /// across cells
    basis: Arc<BasisMask>,

    /// Fitted polynomial coefficients, one per basis monomial
    coeffs: Vec<T>,
}

impl<T: FloatLinalg> MultilinearCell<T> {
    /// Fit a new cell from per-axis limits and corner values.
    ///
    /// `values` must hold exactly `2^N` entries in corner-index order (axis 0
    /// most significant; see the crate-level docs). The fit is the only
    /// mutating phase: the design matrix and right-hand side are local to
    /// this call and discarded once the coefficients are solved.
    ///
    /// # Errors
    /// * [`FitError::UnsupportedDimension`] if `limits.len()` is outside `1..=MAX_NDIMS`
    /// * [`FitError::DimensionMismatch`] if `values.len() != 2^N`
    /// * [`FitError::InvalidBounds`] if any axis has non-finite bounds or `min >= max`
    /// * [`FitError::SingularSystem`] if the corner system cannot be solved
    ///   exactly; never returns approximate coefficients
    pub fn new(limits: &[(T, T)], values: &[T]) -> Result<Self, FitError> {
        let ndims = limits.len();
        if ndims == 0 || ndims > MAX_NDIMS {
            return Err(FitError::UnsupportedDimension { ndims });
        }
        Self::with_basis(Arc::new(BasisMask::new(ndims)), limits, values)
    }

    /// Fit a new cell against a caller-supplied basis mask.
    ///
    /// Lets a caller constructing many cells of the same dimension build the
    /// mask table once and share it; the table is immutable, so the sharing
    /// is race-free.
    ///
    /// # Errors
    /// * All errors of [`MultilinearCell::new`]
    /// * [`FitError::DimensionMismatch`] if `basis.ndims() != limits.len()`
    pub fn with_basis(
        basis: Arc<BasisMask>,
        limits: &[(T, T)],
        values: &[T],
    ) -> Result<Self, FitError> {
        let ndims = limits.len();
        if ndims == 0 || ndims > MAX_NDIMS {
            return Err(FitError::UnsupportedDimension { ndims });
        }
        if basis.ndims() != ndims {
            return Err(FitError::DimensionMismatch {
                expected: ndims,
                actual: basis.ndims(),
            });
        }
        let ncorners = power_of_two(ndims);
        if values.len() != ncorners {
            return Err(FitError::DimensionMismatch {
                expected: ncorners,
                actual: values.len(),
            });
        }
        for (axis, &(lo, hi)) in limits.iter().enumerate() {
            if !(lo.is_finite() && hi.is_finite() && lo < hi) {
                return Err(FitError::InvalidBounds { axis });
            }
        }

        let points = corner_points(limits);

        // Design matrix: row i holds every basis monomial evaluated at
        // corner i, so solving A * a = values forces the polynomial through
        // all corner values exactly.
        let mut a = vec![T::zero(); ncorners * ncorners];
        for i in 0..ncorners {
            for j in 0..ncorners {
                let mut v = T::one();
                for k in 0..ndims {
                    if basis.includes(j, k) {
                        v = v * points[i * ndims + k];
                    }
                }
                a[i * ncorners + j] = v;
            }
        }
        let mut b = values.to_vec();

        equilibrate_rows(&mut a, &mut b, ncorners);
        let coeffs = T::solve_dense(&a, &b, ncorners).ok_or(FitError::SingularSystem)?;

        Ok(Self {
            ndims,
            basis,
            coeffs,
        })
    }

    /// Evaluate the fitted polynomial at a point.
    ///
    /// No containment check is applied; points outside the cell extrapolate
    /// along the same polynomial. Pure and side-effect free.
    ///
    /// # Errors
    /// * If the dimensionality of the point does not match the cell
    #[inline]
    pub fn interp_one(&self, x: &[T]) -> Result<T, FitError> {
        if x.len() != self.ndims {
            return Err(FitError::DimensionMismatch {
                expected: self.ndims,
                actual: x.len(),
            });
        }

        let mut acc = T::zero();
        for i in 0..self.coeffs.len() {
            let mut v = self.coeffs[i];
            for j in 0..self.ndims {
                if self.basis.includes(i, j) {
                    v = v * x[j];
                }
            }
            acc = acc + v;
        }
        Ok(acc)
    }

    /// Evaluate the fitted polynomial on a contiguous list of observation
    /// points, one coordinate slice per axis.
    ///
    /// # Errors
    /// * If the number of observation slices does not match the cell's
    ///   dimension count
    /// * If any observation slice length does not match the output length
    pub fn interp(&self, x: &[&[T]], out: &mut [T]) -> Result<(), FitError> {
        if x.len() != self.ndims {
            return Err(FitError::DimensionMismatch {
                expected: self.ndims,
                actual: x.len(),
            });
        }
        if let Some(bad) = x.iter().find(|xx| xx.len() != out.len()) {
            return Err(FitError::DimensionMismatch {
                expected: out.len(),
                actual: bad.len(),
            });
        }

        let mut point = vec![T::zero(); self.ndims];
        for i in 0..out.len() {
            (0..self.ndims).for_each(|j| point[j] = x[j][i]);
            out[i] = self.interp_one(&point)?;
        }
        Ok(())
    }

    /// Number of axes.
    pub fn ndims(&self) -> usize {
        self.ndims
    }

    /// The fitted polynomial coefficients, one per basis monomial.
    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    /// The monomial inclusion table backing this cell.
    pub fn basis(&self) -> &Arc<BasisMask> {
        &self.basis
    }
}
