use ndarray::{Array1, ArrayView2};

use crate::error::Result;

/// Contract for operators that reduce a batch of marginal adequacies to one
/// global adequacy per example.
///
/// Given a `T x n` matrix, `aggregate` returns a vector of length `T` whose
/// entry `t` depends on row `t` only. Operators are shared between models, so
/// they must be `Send + Sync`.
pub trait AggregationOperator: Send + Sync {
    fn aggregate(&self, mads: ArrayView2<'_, f64>) -> Result<Array1<f64>>;

    /// Label reported by the factory and by `Debug` output of models.
    fn name(&self) -> &str {
        "aggregation"
    }
}

impl<F> AggregationOperator for F
where
    F: for<'a> Fn(ArrayView2<'a, f64>) -> Result<Array1<f64>> + Send + Sync,
{
    fn aggregate(&self, mads: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        self(mads)
    }

    fn name(&self) -> &str {
        "custom"
    }
}
