//! Test-only helpers: a fixed-seed rng for repeatable randomized tests, and
//! an independent reference implementation of the classical weighted-corner
//! (tensor-product) multilinear form used as the correctness oracle for the
//! coefficient-based evaluation.
use num_traits::Float;
use rand::Rng;
use rand::SeedableRng;
use rand::distr::StandardUniform;
use rand::rngs::StdRng;

use crate::basis::power_of_two;

/// Fixed random seed to support repeatable testing
const SEED: [u8; 32] = [
    7, 3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9, 3, 2, 3, 8, 4, 6, 2, 6, 4, 3, 3, 8, 3, 2, 7,
    9,
];

/// Get a random number generator with a const seed for repeatable testing
pub fn rng_fixed_seed() -> StdRng {
    StdRng::from_seed(SEED)
}

/// Generate `n` random numbers using provided generator
pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
where
    StandardUniform: rand::distr::Distribution<T>,
{
    std::iter::repeat_with(|| rng.random::<T>())
        .take(n)
        .collect()
}

/// Random `(min, max)` pairs with strictly positive extent on every axis.
pub fn rand_limits(rng: &mut StdRng, ndims: usize) -> Vec<(f64, f64)> {
    (0..ndims)
        .map(|_| {
            let lo = 2.0 * rng.random::<f64>() - 1.0;
            let width = 0.5 + 2.0 * rng.random::<f64>();
            (lo, lo + width)
        })
        .collect()
}

/// Per-corner weights of the tensor-product form at point `x`:
/// for each axis, the normalized parameter `t = (x - min) / (max - min)`
/// weights the max-side corners and `1 - t` the min-side corners. The
/// weights sum to one at any point, inside or outside the cell.
pub fn corner_weights<T: Float>(limits: &[(T, T)], x: &[T]) -> Vec<T> {
    let ndims = limits.len();
    let ncorners = power_of_two(ndims);

    let mut weights = Vec::with_capacity(ncorners);
    for c in 0..ncorners {
        let mut w = T::one();
        for (j, &(lo, hi)) in limits.iter().enumerate() {
            let t = (x[j] - lo) / (hi - lo);
            let high = c & power_of_two(ndims - 1 - j) != 0;
            w = w * if high { t } else { T::one() - t };
        }
        weights.push(w);
    }
    weights
}

/// Classical tensor-product multilinear interpolation: the corner values
/// averaged under [`corner_weights`]. Agrees with the fitted-polynomial
/// evaluation everywhere, which is what the equivalence tests assert.
pub fn tensor_product<T: Float>(limits: &[(T, T)], values: &[T], x: &[T]) -> T {
    corner_weights(limits, x)
        .iter()
        .zip(values.iter())
        .fold(T::zero(), |acc, (&w, &v)| acc + w * v)
}
