//! The LAMDA classifier.
//!
//! A `Lamda` model owns one rho row per concept and a shared aggregation
//! operator. Supervised learning sets each row to the mean of the examples of
//! that concept; recognition assigns every example to the concept with the
//! highest global adequacy.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use ndarray::{Array2, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::config::LamdaConfig;
use crate::error::{LamdaError, Result};
use crate::gad::{gad, nic_threshold};
use crate::mad::{check_degrees, mad, validate_rho};
use crate::operators::{build_operator, AggregationOperator};

/// Rho value of a concept with no evidence.
pub const NEUTRAL_RHO: f64 = 0.5;

/// Default distance kept between learned rho values and the bounds 0 and 1.
pub const DEFAULT_RHO_MARGIN: f64 = 1e-9;

/// Rule used to turn a row of global adequacies into a concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// Concept with maximal GAD; ties go to the first concept.
    #[default]
    Max,
}

impl FromStr for Criterion {
    type Err = LamdaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "max" => Ok(Criterion::Max),
            _ => Err(LamdaError::UnsupportedCriterion(s.to_string())),
        }
    }
}

/// Fitted parameters: one rho row per concept, in concept order.
#[derive(Debug, Clone, PartialEq)]
pub struct LamdaState<L> {
    rho: Array2<f64>,
    concepts: Vec<L>,
}

impl<L> LamdaState<L> {
    pub fn rho(&self) -> &Array2<f64> {
        &self.rho
    }

    pub fn concepts(&self) -> &[L] {
        &self.concepts
    }

    pub fn descriptors(&self) -> usize {
        self.rho.ncols()
    }
}

/// LAMDA classifier over concepts of type `L`.
///
/// The model is either uninitialized (no rho) or fitted. Every supervised fit
/// builds a complete new [`LamdaState`] and swaps it in. Recognition only
/// needs `&self`, so a model behind an `RwLock` can serve many readers while
/// a fit holds the write lock.
#[derive(Clone)]
pub struct Lamda<L> {
    operator: Arc<dyn AggregationOperator>,
    descriptors: Option<usize>,
    concepts: Option<Vec<L>>,
    state: Option<LamdaState<L>>,
    rho_margin: f64,
    criterion: Criterion,
}

impl<L: Clone> Lamda<L> {
    pub fn new(operator: Arc<dyn AggregationOperator>) -> Self {
        Self::with_shape(operator, None, None)
    }

    /// Create a model whose descriptor count and/or concept list are known up
    /// front. When both are known, rho starts at the neutral value 0.5.
    pub fn with_shape(
        operator: Arc<dyn AggregationOperator>,
        descriptors: Option<usize>,
        concepts: Option<Vec<L>>,
    ) -> Self {
        let state = match (descriptors, &concepts) {
            (Some(d), Some(c)) if !c.is_empty() => Some(LamdaState {
                rho: Array2::from_elem((c.len(), d), NEUTRAL_RHO),
                concepts: c.clone(),
            }),
            _ => None,
        };
        Lamda {
            operator,
            descriptors,
            concepts,
            state,
            rho_margin: DEFAULT_RHO_MARGIN,
            criterion: Criterion::default(),
        }
    }

    pub fn from_config(config: &LamdaConfig) -> Result<Self> {
        let operator = build_operator(&config.operator)?;
        let model =
            Self::with_shape(operator, config.descriptors, None).with_rho_margin(config.rho_margin)?;
        Ok(model.with_criterion(config.criterion))
    }

    /// Criterion used by [`ClassifierModel::predict`](crate::models::classifier_trait::ClassifierModel::predict).
    pub fn with_criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }

    /// Learned rho values are clamped to `[margin, 1 - margin]`.
    ///
    /// The margin must lie strictly inside (0, 0.5) so fitted rho never
    /// reaches 0 or 1.
    pub fn with_rho_margin(mut self, margin: f64) -> Result<Self> {
        if !(margin > 0.0 && margin < 0.5) {
            return Err(LamdaError::Range {
                name: "rho_margin",
                value: margin,
                interval: "(0, 0.5)",
            });
        }
        self.rho_margin = margin;
        Ok(self)
    }
}

impl<L> Lamda<L> {
    pub fn operator(&self) -> &Arc<dyn AggregationOperator> {
        &self.operator
    }

    pub fn descriptors(&self) -> Option<usize> {
        self.descriptors
    }

    pub fn concepts(&self) -> Option<&[L]> {
        self.concepts.as_deref()
    }

    pub fn state(&self) -> Option<&LamdaState<L>> {
        self.state.as_ref()
    }

    pub fn rho(&self) -> Option<&Array2<f64>> {
        self.state.as_ref().map(|s| &s.rho)
    }

    pub fn is_fitted(&self) -> bool {
        self.state.is_some()
    }

    pub fn rho_margin(&self) -> f64 {
        self.rho_margin
    }

    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    /// Marginal adequacy of `x` to every concept of the fitted model.
    pub fn mad(&self, x: ArrayView2<'_, f64>) -> Result<Vec<Array2<f64>>> {
        let state = self.state.as_ref().ok_or(LamdaError::NotFitted)?;
        mad(state.rho.view(), x)
    }

    /// Global adequacy of precomputed MAD matrices with this model's operator.
    pub fn gad(&self, mads: &[Array2<f64>]) -> Result<Array2<f64>> {
        gad(mads, self.operator.as_ref())
    }

    /// GAD of the non-informative class for this model's descriptor count.
    pub fn non_informative_threshold(&self) -> Result<f64> {
        let descriptors = self.descriptors.ok_or(LamdaError::NotFitted)?;
        nic_threshold(self.operator.as_ref(), descriptors)
    }
}

impl<L: Clone + Ord> Lamda<L> {
    /// Supervised learning: each concept's rho row becomes the column-wise
    /// mean of its examples.
    ///
    /// # Arguments
    ///
    /// * `x` - A `T x n` matrix of membership degrees.
    /// * `y` - The `T` labels of `x`.
    ///
    /// If the model has no concept list yet, it becomes the sorted set of
    /// labels in `y`. Otherwise the list is kept: labels outside it are
    /// ignored and listed concepts without examples get a neutral row.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when `y` and `x` disagree on the number of
    /// examples or `x` disagrees with a fixed descriptor count, `Range` when
    /// a degree of `x` is outside [0, 1] or NaN, `EmptyInput` when there is
    /// no concept to learn.
    pub fn fit_supervised(&mut self, x: ArrayView2<'_, f64>, y: &[L]) -> Result<()> {
        if y.len() != x.nrows() {
            return Err(LamdaError::DimensionMismatch {
                context: "fit_supervised: labels against examples",
                expected: x.nrows(),
                found: y.len(),
            });
        }
        if let Some(d) = self.descriptors {
            if d != x.ncols() {
                return Err(LamdaError::DimensionMismatch {
                    context: "fit_supervised: descriptors",
                    expected: d,
                    found: x.ncols(),
                });
            }
        }
        check_degrees(x)?;
        let descriptors = x.ncols();

        let concepts: Vec<L> = match &self.concepts {
            Some(c) => c.clone(),
            None => y.iter().collect::<BTreeSet<_>>().into_iter().cloned().collect(),
        };
        if concepts.is_empty() {
            return Err(LamdaError::EmptyInput("no concepts to learn"));
        }

        // First position of each concept; duplicates share its statistics.
        let mut index: BTreeMap<&L, usize> = BTreeMap::new();
        for (k, concept) in concepts.iter().enumerate() {
            index.entry(concept).or_insert(k);
        }

        let mut sums = Array2::<f64>::zeros((concepts.len(), descriptors));
        let mut counts = vec![0usize; concepts.len()];
        let mut ignored = 0usize;
        for (row, label) in x.outer_iter().zip(y) {
            match index.get(label) {
                Some(&k) => {
                    let mut acc = sums.row_mut(k);
                    acc += &row;
                    counts[k] += 1;
                }
                None => ignored += 1,
            }
        }

        let margin = self.rho_margin;
        let mut rho = Array2::from_elem((concepts.len(), descriptors), NEUTRAL_RHO);
        for (k, concept) in concepts.iter().enumerate() {
            let j = index.get(concept).copied().unwrap_or(k);
            let n = counts[j];
            log::debug!("Concept {}: {} examples", k, n);
            if n == 0 {
                continue;
            }
            let mut rho_k = rho.row_mut(k);
            rho_k.assign(&sums.row(j));
            rho_k.mapv_inplace(|v| (v / n as f64).clamp(margin, 1.0 - margin));
        }

        log::info!(
            "LAMDA supervised fit: {} examples, {} descriptors, {} concepts ({} examples with unknown labels ignored)",
            x.nrows(),
            descriptors,
            concepts.len(),
            ignored
        );

        self.state = Some(LamdaState {
            rho,
            concepts: concepts.clone(),
        });
        self.descriptors = Some(descriptors);
        self.concepts = Some(concepts);
        Ok(())
    }
}

impl<L: Clone> Lamda<L> {
    /// Replace the fitted parameters with a caller-supplied rho matrix.
    ///
    /// `rho` must have one row per concept, entries strictly inside (0, 1),
    /// and as many columns as a fixed descriptor count.
    pub fn set_parameters(&mut self, rho: Array2<f64>, concepts: Vec<L>) -> Result<()> {
        if concepts.is_empty() {
            return Err(LamdaError::EmptyInput("no concepts for rho"));
        }
        if rho.nrows() != concepts.len() {
            return Err(LamdaError::DimensionMismatch {
                context: "set_parameters: rho rows against concepts",
                expected: concepts.len(),
                found: rho.nrows(),
            });
        }
        if let Some(d) = self.descriptors {
            if d != rho.ncols() {
                return Err(LamdaError::DimensionMismatch {
                    context: "set_parameters: descriptors",
                    expected: d,
                    found: rho.ncols(),
                });
            }
        }
        validate_rho(rho.view())?;

        self.descriptors = Some(rho.ncols());
        self.concepts = Some(concepts.clone());
        self.state = Some(LamdaState { rho, concepts });
        Ok(())
    }

    /// Assign every row of `x` to a concept.
    pub fn recognize(&self, x: ArrayView2<'_, f64>, criterion: Criterion) -> Result<Vec<L>> {
        self.recognize_with_gads(x, criterion).map(|(labels, _)| labels)
    }

    /// Like [`Lamda::recognize`], also returning the `T x K` GAD matrix.
    ///
    /// Ties go to the first concept. A NaN adequacy never wins, and a row
    /// whose adequacies are all NaN is assigned the first concept.
    pub fn recognize_with_gads(
        &self,
        x: ArrayView2<'_, f64>,
        criterion: Criterion,
    ) -> Result<(Vec<L>, Array2<f64>)> {
        let state = self.state.as_ref().ok_or(LamdaError::NotFitted)?;
        if x.ncols() != state.descriptors() {
            return Err(LamdaError::DimensionMismatch {
                context: "recognize: descriptors",
                expected: state.descriptors(),
                found: x.ncols(),
            });
        }

        let gads = gad(&mad(state.rho.view(), x)?, self.operator.as_ref())?;
        let labels = match criterion {
            Criterion::Max => gads
                .outer_iter()
                .map(|row| state.concepts[first_argmax(row)].clone())
                .collect(),
        };
        log::trace!("Recognized {} examples", x.nrows());
        Ok((labels, gads))
    }
}

fn first_argmax(row: ArrayView1<'_, f64>) -> usize {
    let mut best = 0;
    let mut best_value = f64::NEG_INFINITY;
    for (k, &v) in row.iter().enumerate() {
        if v > best_value {
            best = k;
            best_value = v;
        }
    }
    best
}

impl<L: fmt::Debug> fmt::Debug for Lamda<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lamda")
            .field("operator", &self.operator.name())
            .field("descriptors", &self.descriptors)
            .field("concepts", &self.concepts)
            .field("rho", &self.state.as_ref().map(|s| &s.rho))
            .field("rho_margin", &self.rho_margin)
            .field("criterion", &self.criterion)
            .finish()
    }
}
