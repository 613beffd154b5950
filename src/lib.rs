//! Multilinear (tensor-product) interpolation on a single axis-aligned
//! N-dimensional cell.
//!
//! A cell is described by per-axis `(min, max)` limits and one sampled value
//! at each of its `2^N` corners. Construction fits the unique multilinear
//! polynomial through the corner values by solving the corner system
//! directly; evaluation computes that polynomial at arbitrary query points.
//! Points outside the cell extrapolate along the same polynomial, with no
//! special casing and no containment check.
//!
//! | Phase        | Cost        | State                                    |
//! |--------------|-------------|------------------------------------------|
//! | Construction | O(8^N) solve| local to the call, discarded after       |
//! | Evaluation   | O(N * 2^N)  | immutable; thread-safe without locking   |
//!
//! # Corner Ordering
//!
//! Corner `i` of the cell selects the min or max bound on each axis from the
//! binary representation of `i`, with axis 0 owning the most significant of
//! the N bits. Corner values must be supplied in this order.
//!
//! 1D:
//!
//! ```text
//!   x0 ---------- x1        values = [f(x0), f(x1)]
//! ```
//!
//! 2D (axis 0 = x, axis 1 = y):
//!
//! ```text
//!   x0,y1 ------ x1,y1
//!     |            |        values = [f(x0,y0), f(x0,y1),
//!     |            |                  f(x1,y0), f(x1,y1)]
//!   x0,y0 ------ x1,y0
//! ```
//!
//! 3D (axis 0 = x, axis 1 = y, axis 2 = z), the z index varying fastest:
//!
//! ```text
//!          x0,y1,z1 ---------- x1,y1,z1
//!            /|                  /|
//!     x0,y0,z1 ---------- x1,y0,z1|       values = [f(x0,y0,z0), f(x0,y0,z1),
//!           | x0,y1,z0 ----------|x1,y1,z0           f(x0,y1,z0), f(x0,y1,z1),
//!           |/                   |/                  f(x1,y0,z0), f(x1,y0,z1),
//!     x0,y0,z0 ---------- x1,y0,z0                   f(x1,y1,z0), f(x1,y1,z1)]
//! ```
//!
//! And so on for higher dimensions.
//!
//! # Example
//!
//! ```rust
//! use cellfit::MultilinearCell;
//!
//! // A 3D cell and its eight corner samples, ordered per the convention above
//! let limits = [(0.2_f64, 1.0), (0.4, 2.0), (0.8, 3.0)];
//! let values = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
//!
//! let cell = MultilinearCell::new(&limits, &values).unwrap();
//!
//! // The query point sits below the cell's z extent, so the value there is
//! // extrapolated along the fitted polynomial
//! let v = cell.interp_one(&[0.5, 0.5, 0.5]).unwrap();
//! assert!((v - 1.4886).abs() < 1e-3);
//! ```
//!
//! References
//! * <https://en.wikipedia.org/wiki/Bilinear_interpolation#Polynomial_fit>
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

pub mod basis;
pub mod cell;
pub mod corners;
pub mod error;
pub mod linalg;
pub mod utils;

pub use basis::BasisMask;
pub use cell::{MultilinearCell, MAX_NDIMS};
pub use error::FitError;

#[cfg(test)]
pub(crate) mod testing;
