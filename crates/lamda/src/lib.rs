//! lamda: the LAMDA fuzzy classifier (Learning Algorithm for Multivariate
//! Data Analysis).
//!
//! Examples are rows of membership degrees in `[0, 1]`. For every concept the
//! classifier keeps one rho parameter per descriptor, scores each descriptor
//! with a marginal adequacy degree (`mad`), aggregates those scores into a
//! global adequacy degree per concept (`gad`) with a pluggable aggregation
//! operator (`operators`), and assigns each example to the concept with the
//! highest global adequacy (`models::lamda`).
//!
//! ```
//! use std::sync::Arc;
//! use lamda::models::lamda::{Criterion, Lamda};
//! use lamda::operators::TNorm;
//! use ndarray::array;
//!
//! let mut model = Lamda::new(Arc::new(TNorm::minimum()));
//! let x = array![[0.2, 0.8], [0.3, 0.7], [0.9, 0.1]];
//! model.fit_supervised(x.view(), &[1, 1, 2]).unwrap();
//! let labels = model.recognize(x.view(), Criterion::Max).unwrap();
//! assert_eq!(labels, vec![1, 1, 2]);
//! ```
pub mod config;
pub mod error;
pub mod gad;
pub mod mad;
pub mod models;
pub mod operators;

pub use error::{LamdaError, Result};
pub use models::lamda::{Criterion, Lamda, LamdaState};
