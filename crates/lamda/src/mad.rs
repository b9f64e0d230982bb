//! Marginal adequacy degrees (MAD).
//!
//! For class `k`, descriptor `i` and example `t` the marginal adequacy is
//!
//! ```text
//! mad[k][t, i] = rho[k, i]^x[t, i] * (1 - rho[k, i])^(1 - x[t, i])
//! ```
//!
//! Arrays are row-major and 0-indexed: rows of `x` are examples, rows of
//! `rho` are classes, columns of both are descriptors.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use crate::error::{LamdaError, Result};

/// Marginal adequacy of a single degree `x` to a single parameter `rho`.
#[inline]
pub fn marginal_adequacy(rho: f64, x: f64) -> f64 {
    rho.powf(x) * (1.0 - rho).powf(1.0 - x)
}

/// Compute one `T x n` MAD matrix per row of `rho`.
///
/// # Arguments
///
/// * `rho` - A `K x n` matrix of class parameters. Entries should lie in the
///   open interval (0, 1); this function does not check it (see
///   [`validate_rho`]), and an entry of exactly 0 or 1 follows `powf`, which
///   defines `0^0 = 1`.
/// * `x` - A `T x n` matrix of membership degrees in `[0, 1]`.
///
/// # Errors
///
/// `DimensionMismatch` when the descriptor counts differ, `Range` when an
/// entry of `x` is outside `[0, 1]` or NaN.
pub fn mad(rho: ArrayView2<'_, f64>, x: ArrayView2<'_, f64>) -> Result<Vec<Array2<f64>>> {
    if x.ncols() != rho.ncols() {
        return Err(LamdaError::DimensionMismatch {
            context: "mad: descriptors of x against rho",
            expected: rho.ncols(),
            found: x.ncols(),
        });
    }
    check_degrees(x)?;

    log::trace!(
        "Computing MAD for {} classes, {} examples, {} descriptors",
        rho.nrows(),
        x.nrows(),
        x.ncols()
    );

    Ok(rho
        .outer_iter()
        .map(|rho_k| {
            Array2::from_shape_fn(x.dim(), |(t, i)| marginal_adequacy(rho_k[i], x[(t, i)]))
        })
        .collect())
}

/// Check that every rho entry is strictly inside (0, 1).
pub fn validate_rho(rho: ArrayView2<'_, f64>) -> Result<()> {
    match rho.iter().find(|&&v| !(v > 0.0 && v < 1.0)) {
        Some(&value) => Err(LamdaError::Range {
            name: "rho",
            value,
            interval: "(0, 1)",
        }),
        None => Ok(()),
    }
}

pub(crate) fn check_degrees(x: ArrayView2<'_, f64>) -> Result<()> {
    match x.iter().find(|v| !(0.0..=1.0).contains(*v)) {
        Some(&value) => Err(LamdaError::Range {
            name: "x",
            value,
            interval: "[0, 1]",
        }),
        None => Ok(()),
    }
}

/// Sample the MAD of one class over `samples` evenly spaced degrees in `[0, 1]`.
///
/// Returns `(xi, m)` where `m[(s, i)]` is the adequacy of degree `xi[s]` to
/// `rho_row[i]`. This is the data plotted as MAD curves.
pub fn mad_curves(
    rho_row: ArrayView1<'_, f64>,
    samples: usize,
) -> Result<(Array1<f64>, Array2<f64>)> {
    if samples < 2 {
        return Err(LamdaError::Range {
            name: "samples",
            value: samples as f64,
            interval: "[2, inf)",
        });
    }
    let rho = rho_row.insert_axis(Axis(0));
    validate_rho(rho.view())?;

    let last = (samples - 1) as f64;
    let xi = Array1::from_shape_fn(samples, |s| s as f64 / last);
    let x = Array2::from_shape_fn((samples, rho.ncols()), |(s, _)| xi[s]);
    let mut curves = mad(rho.view(), x.view())?;
    Ok((xi, curves.swap_remove(0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn matches_closed_form() {
        let rho = array![[0.25, 0.75], [0.9, 0.1]];
        let x = array![[0.0, 1.0], [0.5, 0.5]];
        let mads = mad(rho.view(), x.view()).unwrap();
        assert_eq!(mads.len(), 2);
        assert_eq!(mads[0].dim(), (2, 2));

        assert!((mads[0][(0, 0)] - 0.75).abs() < 1e-12);
        assert!((mads[0][(0, 1)] - 0.75).abs() < 1e-12);
        assert!((mads[1][(0, 0)] - 0.1).abs() < 1e-12);
        assert!((mads[1][(1, 1)] - (0.1f64 * 0.9).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn descriptor_mismatch_is_rejected() {
        let rho = array![[0.5, 0.5, 0.5]];
        let x = array![[0.1, 0.2]];
        let err = mad(rho.view(), x.view()).unwrap_err();
        assert_eq!(
            err,
            LamdaError::DimensionMismatch {
                context: "mad: descriptors of x against rho",
                expected: 3,
                found: 2,
            }
        );
    }

    #[test]
    fn degrees_outside_unit_interval_are_rejected() {
        let rho = array![[0.5]];
        for bad in [-0.01, 1.5, f64::NAN] {
            let x = array![[bad]];
            assert!(matches!(
                mad(rho.view(), x.view()),
                Err(LamdaError::Range { name: "x", .. })
            ));
        }
    }

    #[test]
    fn rho_validation_excludes_bounds() {
        assert!(validate_rho(array![[0.1, 0.9]].view()).is_ok());
        assert!(validate_rho(array![[0.0, 0.5]].view()).is_err());
        assert!(validate_rho(array![[0.5, 1.0]].view()).is_err());
        assert!(validate_rho(array![[f64::NAN]].view()).is_err());
    }

    #[test]
    fn curves_peak_at_the_extremes() {
        let rho = array![0.1, 0.3, 0.5, 0.7, 0.9];
        let (xi, m) = mad_curves(rho.view(), 50).unwrap();
        assert_eq!(xi.len(), 50);
        assert_eq!(m.dim(), (50, 5));
        assert_eq!(xi[0], 0.0);
        assert_eq!(xi[49], 1.0);
        // rho = 0.5 gives a flat curve
        for s in 0..50 {
            assert!((m[(s, 2)] - 0.5).abs() < 1e-12);
        }
        // rho = 0.9 increases with x
        assert!(m[(49, 4)] > m[(0, 4)]);
        assert!((m[(49, 4)] - 0.9).abs() < 1e-12);
    }

    #[test]
    fn curves_need_two_samples() {
        let rho = array![0.5];
        assert!(mad_curves(rho.view(), 1).is_err());
    }
}
