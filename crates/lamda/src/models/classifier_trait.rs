use ndarray::{Array2, ArrayView2};

use crate::error::Result;
use crate::models::lamda::Lamda;

/// A small trait abstraction for classifiers over fuzzy membership degrees.
/// Lets calling code train and score without knowing which aggregation
/// operator or concept type the model was built with.
pub trait ClassifierModel<L> {
    /// Fit the model on `x` (one row per example) and its labels `y`.
    fn fit(&mut self, x: ArrayView2<'_, f64>, y: &[L]) -> Result<()>;

    /// Predict one label per row of `x` with the model's own criterion.
    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Vec<L>>;

    /// Per-class scores, one column per concept.
    fn predict_scores(&self, x: ArrayView2<'_, f64>) -> Result<Array2<f64>>;

    /// Short label identifying the model kind in logs.
    fn name(&self) -> &str {
        "classifier"
    }
}

impl<L: Clone + Ord> ClassifierModel<L> for Lamda<L> {
    fn fit(&mut self, x: ArrayView2<'_, f64>, y: &[L]) -> Result<()> {
        self.fit_supervised(x, y)
    }

    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Vec<L>> {
        self.recognize(x, self.criterion())
    }

    fn predict_scores(&self, x: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        self.recognize_with_gads(x, self.criterion())
            .map(|(_, gads)| gads)
    }

    fn name(&self) -> &str {
        "lamda"
    }
}
