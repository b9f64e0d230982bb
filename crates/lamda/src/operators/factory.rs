use std::sync::Arc;

use crate::config::OperatorConfig;
use crate::error::Result;
use crate::operators::compensatory::Compensatory;
use crate::operators::operator_trait::AggregationOperator;
use crate::operators::tnorm::TNorm;
use crate::operators::triple_product::TripleProduct;

/// Build a shared aggregation operator from an `OperatorConfig`.
/// Fails only when a compensatory operator carries an invalid `alpha`.
pub fn build_operator(config: &OperatorConfig) -> Result<Arc<dyn AggregationOperator>> {
    let operator: Arc<dyn AggregationOperator> = match *config {
        OperatorConfig::TNorm { reducer } => Arc::new(TNorm::new(reducer.reducer(), reducer.name())),
        OperatorConfig::Compensatory {
            tnorm,
            tconorm,
            alpha,
        } => Arc::new(Compensatory::new(tnorm.reducer(), tconorm.reducer(), alpha)?),
        OperatorConfig::TripleProduct => Arc::new(TripleProduct),
    };
    log::debug!("Built aggregation operator '{}'", operator.name());
    Ok(operator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReducerKind;
    use crate::error::LamdaError;
    use ndarray::array;

    #[test]
    fn builds_each_operator_kind() {
        let x = array![[0.2, 0.6]];
        let min = build_operator(&OperatorConfig::TNorm {
            reducer: ReducerKind::Minimum,
        })
        .unwrap();
        assert_eq!(min.name(), "minimum");
        assert!((min.aggregate(x.view()).unwrap()[0] - 0.2).abs() < 1e-12);

        let comp = build_operator(&OperatorConfig::Compensatory {
            tnorm: ReducerKind::Minimum,
            tconorm: ReducerKind::Maximum,
            alpha: 0.5,
        })
        .unwrap();
        assert!((comp.aggregate(x.view()).unwrap()[0] - 0.4).abs() < 1e-12);

        let triple = build_operator(&OperatorConfig::TripleProduct).unwrap();
        assert_eq!(triple.name(), "triple_product");
    }

    #[test]
    fn invalid_alpha_fails_to_build() {
        let res = build_operator(&OperatorConfig::Compensatory {
            tnorm: ReducerKind::Minimum,
            tconorm: ReducerKind::Maximum,
            alpha: 2.0,
        });
        assert!(matches!(res, Err(LamdaError::Range { .. })));
    }
}
