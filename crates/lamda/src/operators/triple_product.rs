use ndarray::{Array1, ArrayView1, ArrayView2, ArrayViewD};

use crate::error::Result;
use crate::operators::operator_trait::AggregationOperator;
use crate::operators::vectorize::{vectorize, Aggregated};

/// Yager's fully reinforced triple-product operator.
///
/// `prod(x) / (prod(x) + prod(1 - x))`. When both products vanish (a row
/// holding a 0 and a 1) the value is NaN.
#[derive(Clone, Copy, Debug, Default)]
pub struct TripleProduct;

pub fn triple_product(x: ArrayView1<'_, f64>) -> f64 {
    let support: f64 = x.iter().product();
    let against: f64 = x.iter().map(|v| 1.0 - v).product();
    let total = support + against;
    if total == 0.0 {
        return f64::NAN;
    }
    support / total
}

impl TripleProduct {
    pub fn apply(&self, x: ArrayViewD<'_, f64>) -> Result<Aggregated> {
        vectorize(triple_product).apply(x)
    }
}

impl AggregationOperator for TripleProduct {
    fn aggregate(&self, mads: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        Ok(vectorize(triple_product).apply_batch(mads))
    }

    fn name(&self) -> &str {
        "triple_product"
    }
}
