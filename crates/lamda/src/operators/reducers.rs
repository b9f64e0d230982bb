//! Scalar reducers for one example's marginal adequacies.
//!
//! T-norms reduce an empty row to 1 and t-conorms to 0, their neutral
//! elements.

use ndarray::ArrayView1;

/// A single-example reducer usable by `TNorm` and `Compensatory`.
pub type Reducer = for<'a> fn(ArrayView1<'a, f64>) -> f64;

/// Minimum (Gödel) t-norm.
pub fn minimum(x: ArrayView1<'_, f64>) -> f64 {
    x.iter().copied().fold(1.0, f64::min)
}

/// Product t-norm.
pub fn product(x: ArrayView1<'_, f64>) -> f64 {
    x.iter().product()
}

/// Łukasiewicz t-norm: `max(sum(x) - n + 1, 0)`.
pub fn lukasiewicz(x: ArrayView1<'_, f64>) -> f64 {
    (x.sum() - x.len() as f64 + 1.0).max(0.0)
}

/// Maximum (Gödel) t-conorm.
pub fn maximum(x: ArrayView1<'_, f64>) -> f64 {
    x.iter().copied().fold(0.0, f64::max)
}

/// Probabilistic sum, the dual of the product t-norm: `1 - prod(1 - x)`.
pub fn probabilistic_sum(x: ArrayView1<'_, f64>) -> f64 {
    1.0 - x.iter().map(|v| 1.0 - v).product::<f64>()
}

/// Bounded sum, the dual of the Łukasiewicz t-norm: `min(sum(x), 1)`.
pub fn bounded_sum(x: ArrayView1<'_, f64>) -> f64 {
    x.sum().min(1.0)
}
