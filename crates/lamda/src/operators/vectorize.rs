//! Row-wise vectorization of single-example reducers.
//!
//! A reducer maps the `n` adequacies of one example to a single value. The
//! wrapper lets the same reducer run on one example (1-D input) or on a
//! whole batch (2-D input, one result per row).

use ndarray::{Array1, ArrayView1, ArrayView2, ArrayViewD, Ix1, Ix2};

use crate::error::{LamdaError, Result};
use crate::operators::operator_trait::AggregationOperator;

/// Result of applying a vectorized reducer to an input of unknown rank.
#[derive(Debug, Clone, PartialEq)]
pub enum Aggregated {
    /// The input was a single example.
    Scalar(f64),
    /// The input was a batch, one value per row.
    Rows(Array1<f64>),
}

impl Aggregated {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Aggregated::Scalar(v) => Some(*v),
            Aggregated::Rows(_) => None,
        }
    }

    /// Batch view of the result; a scalar becomes a vector of length one.
    pub fn into_rows(self) -> Array1<f64> {
        match self {
            Aggregated::Scalar(v) => Array1::from_elem(1, v),
            Aggregated::Rows(rows) => rows,
        }
    }
}

/// A reducer lifted to work on single rows and on batches of rows.
#[derive(Clone, Copy)]
pub struct Vectorized<F> {
    reducer: F,
    name: &'static str,
}

/// Wrap `reducer` so it can be applied row-wise.
///
/// Extra parameters of the reducer (a t-norm to delegate to, a weight, ...)
/// are captured by the closure:
///
/// ```
/// use lamda::operators::vectorize;
/// use ndarray::array;
///
/// let lukasiewicz = vectorize(|x: ndarray::ArrayView1<f64>| (x.sum() - x.len() as f64 + 1.0).max(0.0));
/// let out = lukasiewicz.apply_batch(array![[0.5, 0.5, 0.5], [0.9, 0.9, 0.9]].view());
/// assert_eq!(out.len(), 2);
/// ```
pub fn vectorize<F>(reducer: F) -> Vectorized<F>
where
    F: for<'a> Fn(ArrayView1<'a, f64>) -> f64,
{
    Vectorized {
        reducer,
        name: "vectorized",
    }
}

impl<F> Vectorized<F>
where
    F: for<'a> Fn(ArrayView1<'a, f64>) -> f64 + Sync,
{
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn reducer(&self) -> &F {
        &self.reducer
    }

    /// Apply the reducer to an input of any rank.
    ///
    /// 1-D input yields `Aggregated::Scalar`, 2-D input yields one value per
    /// row. Any other rank fails with `LamdaError::Shape`.
    pub fn apply(&self, x: ArrayViewD<'_, f64>) -> Result<Aggregated> {
        let ndim = x.ndim();
        match ndim {
            1 => {
                let row = x
                    .into_dimensionality::<Ix1>()
                    .map_err(|_| LamdaError::Shape { ndim })?;
                Ok(Aggregated::Scalar(self.apply_row(row)))
            }
            2 => {
                let batch = x
                    .into_dimensionality::<Ix2>()
                    .map_err(|_| LamdaError::Shape { ndim })?;
                Ok(Aggregated::Rows(self.apply_batch(batch)))
            }
            _ => Err(LamdaError::Shape { ndim }),
        }
    }

    pub fn apply_row(&self, row: ArrayView1<'_, f64>) -> f64 {
        (self.reducer)(row)
    }

    #[cfg(not(feature = "parallel"))]
    pub fn apply_batch(&self, x: ArrayView2<'_, f64>) -> Array1<f64> {
        x.outer_iter().map(|row| (self.reducer)(row)).collect()
    }

    #[cfg(feature = "parallel")]
    pub fn apply_batch(&self, x: ArrayView2<'_, f64>) -> Array1<f64> {
        use rayon::prelude::*;

        let values: Vec<f64> = (0..x.nrows())
            .into_par_iter()
            .map(|t| (self.reducer)(x.row(t)))
            .collect();
        Array1::from_vec(values)
    }
}

impl<F> AggregationOperator for Vectorized<F>
where
    F: for<'a> Fn(ArrayView1<'a, f64>) -> f64 + Send + Sync,
{
    fn aggregate(&self, mads: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        Ok(self.apply_batch(mads))
    }

    fn name(&self) -> &str {
        self.name
    }
}
