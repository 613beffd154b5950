//! Corner-point generation from per-axis cell limits.
use num_traits::Float;

use crate::basis::power_of_two;

/// Enumerate the `2^N` corner coordinates of the cell described by `limits`.
///
/// Corner `i` takes the max bound on axis `j` when bit `j` of `i` is set
/// (axis 0 most significant), and the min bound otherwise, so the corners
/// come back in the same order the cell's corner values are supplied in.
///
/// The output is flattened corner-major: corner `i` occupies
/// `[i * ndims, (i + 1) * ndims)`.
///
/// Pure function of `limits`; the `min < max` invariant is the cell
/// constructor's responsibility, not checked here.
pub fn corner_points<T: Float>(limits: &[(T, T)]) -> Vec<T> {
    let ndims = limits.len();
    let ncorners = power_of_two(ndims);

    let mut points = Vec::with_capacity(ncorners * ndims);
    for i in 0..ncorners {
        for (j, &(lo, hi)) in limits.iter().enumerate() {
            let high = i & power_of_two(ndims - 1 - j) != 0;
            points.push(if high { hi } else { lo });
        }
    }
    points
}
