//! Aggregation operators used to compute global adequacy degrees.
pub mod compensatory;
pub mod factory;
pub mod operator_trait;
pub mod reducers;
pub mod tnorm;
pub mod triple_product;
pub mod vectorize;

pub use compensatory::Compensatory;
pub use factory::build_operator;
pub use operator_trait::AggregationOperator;
pub use reducers::Reducer;
pub use tnorm::TNorm;
pub use triple_product::TripleProduct;
pub use vectorize::{vectorize, Aggregated, Vectorized};
