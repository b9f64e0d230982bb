use ndarray::{Array1, ArrayView1, ArrayView2, ArrayViewD};

use crate::error::{LamdaError, Result};
use crate::operators::operator_trait::AggregationOperator;
use crate::operators::reducers::Reducer;
use crate::operators::vectorize::{vectorize, Aggregated};

/// Mixed compensatory operator: `alpha * tnorm(x) + (1 - alpha) * tconorm(x)`.
///
/// `alpha` is the exigency of the operator: 1 gives the pure t-norm, 0 the
/// pure t-conorm.
#[derive(Clone, Copy)]
pub struct Compensatory {
    tnorm: Reducer,
    tconorm: Reducer,
    alpha: f64,
}

impl Compensatory {
    /// Fails with `LamdaError::Range` when `alpha` is not in `[0, 1]`.
    pub fn new(tnorm: Reducer, tconorm: Reducer, alpha: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(LamdaError::Range {
                name: "alpha",
                value: alpha,
                interval: "[0, 1]",
            });
        }
        Ok(Compensatory {
            tnorm,
            tconorm,
            alpha,
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn reduce(&self, x: ArrayView1<'_, f64>) -> f64 {
        self.alpha * (self.tnorm)(x) + (1.0 - self.alpha) * (self.tconorm)(x)
    }

    pub fn apply(&self, x: ArrayViewD<'_, f64>) -> Result<Aggregated> {
        vectorize(|row: ArrayView1<f64>| self.reduce(row)).apply(x)
    }
}

impl AggregationOperator for Compensatory {
    fn aggregate(&self, mads: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        Ok(vectorize(|row: ArrayView1<f64>| self.reduce(row)).apply_batch(mads))
    }

    fn name(&self) -> &str {
        "compensatory"
    }
}
