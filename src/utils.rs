//! Grid-construction helpers used by the tests and benchmarks.
use itertools::Itertools;
use num_traits::Float;

/// Evenly spaced values from `start` to `stop`, endpoint included.
pub fn linspace<T: Float>(start: T, stop: T, n: usize) -> Vec<T> {
    let step = (stop - start) / T::from(n - 1).unwrap();
    (0..n).map(|i| start + step * T::from(i).unwrap()).collect()
}

/// Cartesian product of the input axes in C ordering
/// (the last axis varies fastest).
pub fn meshgrid<T: Float>(axes: Vec<&Vec<T>>) -> Vec<Vec<T>> {
    axes.into_iter()
        .multi_cartesian_product()
        .map(|point| point.into_iter().copied().collect())
        .collect()
}
