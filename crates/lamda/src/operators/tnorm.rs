use ndarray::{Array1, ArrayView2, ArrayViewD};

use crate::error::Result;
use crate::operators::operator_trait::AggregationOperator;
use crate::operators::reducers::{self, Reducer};
use crate::operators::vectorize::{vectorize, Aggregated, Vectorized};

/// Aggregation by a single t-norm or t-conorm reducer.
///
/// The reducer is assumed to be a real t-norm/t-conorm (monotonic,
/// associative, commutative, with the right neutral element); this is not
/// checked.
#[derive(Clone, Copy)]
pub struct TNorm {
    inner: Vectorized<Reducer>,
}

impl TNorm {
    pub fn new(reducer: Reducer, name: &'static str) -> Self {
        TNorm {
            inner: vectorize(reducer).with_name(name),
        }
    }

    pub fn minimum() -> Self {
        Self::new(reducers::minimum, "minimum")
    }

    pub fn product() -> Self {
        Self::new(reducers::product, "product")
    }

    pub fn lukasiewicz() -> Self {
        Self::new(reducers::lukasiewicz, "lukasiewicz")
    }

    pub fn maximum() -> Self {
        Self::new(reducers::maximum, "maximum")
    }

    pub fn probabilistic_sum() -> Self {
        Self::new(reducers::probabilistic_sum, "probabilistic_sum")
    }

    pub fn bounded_sum() -> Self {
        Self::new(reducers::bounded_sum, "bounded_sum")
    }

    /// Apply to a single example (1-D) or a batch (2-D).
    pub fn apply(&self, x: ArrayViewD<'_, f64>) -> Result<Aggregated> {
        self.inner.apply(x)
    }
}

impl AggregationOperator for TNorm {
    fn aggregate(&self, mads: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        self.inner.aggregate(mads)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
