//! Global adequacy degrees (GAD).
//!
//! Each class's MAD matrix is reduced independently by the aggregation
//! operator, so column `k` of the result only depends on MAD matrix `k`.

use ndarray::Array2;

use crate::error::{LamdaError, Result};
use crate::operators::AggregationOperator;

/// Aggregate `K` MAD matrices (each `T x n`) into a `T x K` GAD matrix.
pub fn gad<O>(mads: &[Array2<f64>], operator: &O) -> Result<Array2<f64>>
where
    O: AggregationOperator + ?Sized,
{
    let first = mads
        .first()
        .ok_or(LamdaError::EmptyInput("gad needs at least one MAD matrix"))?;
    let rows = first.nrows();

    let mut gads = Array2::zeros((rows, mads.len()));
    for (k, m) in mads.iter().enumerate() {
        if m.nrows() != rows {
            return Err(LamdaError::DimensionMismatch {
                context: "gad: examples per MAD matrix",
                expected: rows,
                found: m.nrows(),
            });
        }
        let column = operator.aggregate(m.view())?;
        if column.len() != rows {
            return Err(LamdaError::DimensionMismatch {
                context: "gad: operator output length",
                expected: rows,
                found: column.len(),
            });
        }
        gads.column_mut(k).assign(&column);
    }

    log::trace!(
        "Aggregated {} MAD matrices with '{}'",
        mads.len(),
        operator.name()
    );
    Ok(gads)
}

/// Global adequacy of the non-informative class for `descriptors` descriptors.
///
/// Every marginal adequacy of the non-informative class is 0.5, so this is
/// the operator applied to a row of 0.5s. It is the reference threshold a
/// recognized example has to beat in unsupervised LAMDA.
pub fn nic_threshold<O>(operator: &O, descriptors: usize) -> Result<f64>
where
    O: AggregationOperator + ?Sized,
{
    let row = Array2::from_elem((1, descriptors), 0.5);
    let out = operator.aggregate(row.view())?;
    out.first()
        .copied()
        .ok_or(LamdaError::DimensionMismatch {
            context: "nic_threshold: operator output length",
            expected: 1,
            found: 0,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::{TNorm, TripleProduct};
    use ndarray::{array, Array1, ArrayView2};

    fn truncating(_m: ArrayView2<f64>) -> Result<Array1<f64>> {
        Ok(Array1::zeros(1))
    }

    #[test]
    fn columns_follow_class_order() {
        let mads = vec![array![[0.2, 0.4], [0.9, 0.8]], array![[0.6, 0.7], [0.1, 0.3]]];
        let g = gad(&mads, &TNorm::minimum()).unwrap();
        assert_eq!(g.dim(), (2, 2));
        assert_eq!(g[(0, 0)], 0.2);
        assert_eq!(g[(1, 0)], 0.8);
        assert_eq!(g[(0, 1)], 0.6);
        assert_eq!(g[(1, 1)], 0.1);
    }

    #[test]
    fn row_count_mismatch_is_rejected() {
        let mads = vec![array![[0.2, 0.4]], array![[0.6, 0.7], [0.1, 0.3]]];
        assert!(matches!(
            gad(&mads, &TNorm::minimum()),
            Err(LamdaError::DimensionMismatch { expected: 1, found: 2, .. })
        ));
    }

    #[test]
    fn operator_returning_wrong_length_is_rejected() {
        let mads = vec![array![[0.2], [0.4], [0.6]]];
        let op = truncating;
        assert!(matches!(
            gad(&mads, &op),
            Err(LamdaError::DimensionMismatch { expected: 3, found: 1, .. })
        ));
    }

    #[test]
    fn empty_mad_list_is_rejected() {
        assert!(matches!(
            gad(&[], &TNorm::minimum()),
            Err(LamdaError::EmptyInput(_))
        ));
    }

    #[test]
    fn non_informative_thresholds() {
        for m in [2usize, 3, 5, 10] {
            assert_eq!(nic_threshold(&TNorm::minimum(), m).unwrap(), 0.5);
            assert_eq!(
                nic_threshold(&TNorm::product(), m).unwrap(),
                0.5f64.powi(m as i32)
            );
            assert_eq!(nic_threshold(&TripleProduct, m).unwrap(), 0.5);
        }
    }
}
