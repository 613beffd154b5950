//! The multilinear monomial basis and its per-axis inclusion masks.
//!
//! A multilinear polynomial in N variables has `2^N` basis monomials: the
//! products of every subset of the axis coordinates
//! (`1, x, y, xy, ..., z, xz, ..., xyz`). Monomial `i` includes axis `j`
//! exactly when bit `j` of `i` is set, with axis 0 owning the most
//! significant of the N bits, the same convention that orders the cell's
//! corners (see the crate-level docs).

/// Compute `2^exponent`, used to size every corner- or monomial-indexed
/// container.
pub const fn power_of_two(exponent: usize) -> usize {
    1 << exponent
}

/// Immutable `2^N x N` table of per-axis monomial inclusion flags.
///
/// The table depends only on the dimension count, so one instance can back
/// any number of same-dimension cells; see
/// [`MultilinearCell::with_basis`](crate::MultilinearCell::with_basis).
/// It is never mutated after construction, which keeps that sharing
/// race-free.
#[derive(Debug)]
pub struct BasisMask {
    /// Number of axes
    ndims: usize,

    /// Inclusion flags, one row per monomial, flattened row-major
    rows: Vec<bool>,
}

impl BasisMask {
    /// Build the inclusion table for a given dimension count.
    ///
    /// Pure function of `ndims`; row `i` is the bit pattern of `i` itself
    /// under the axis-0-is-most-significant convention.
    pub fn new(ndims: usize) -> Self {
        let nmonomials = power_of_two(ndims);
        let mut rows = vec![false; nmonomials * ndims];
        for i in 0..nmonomials {
            for j in 0..ndims {
                rows[i * ndims + j] = i & power_of_two(ndims - 1 - j) != 0;
            }
        }
        Self { ndims, rows }
    }

    /// Number of axes.
    pub fn ndims(&self) -> usize {
        self.ndims
    }

    /// Number of basis monomials, `2^ndims`.
    pub fn num_monomials(&self) -> usize {
        power_of_two(self.ndims)
    }

    /// Whether basis monomial `monomial` includes axis `axis` as a factor.
    #[inline]
    pub fn includes(&self, monomial: usize, axis: usize) -> bool {
        self.rows[monomial * self.ndims + axis]
    }
}
