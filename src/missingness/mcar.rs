//! Missing completely at random
//!
//! The likelihood that an observation is missing is independent of both the
//! value itself and the other values in its row.

use crate::error::{AmputeError, Result};
use ndarray::Array2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Remove observations from `x` with the given per-cell likelihood.
///
/// Each cell is marked missing independently. The generator is created from
/// `seed` and walked over the matrix in row-major order, so identical
/// (shape, likelihood, seed) inputs always produce an identical result.
pub fn mcar(x: &Array2<f64>, likelihood: f64, seed: u64) -> Result<Array2<f64>> {
    mcar_with_mask(x, likelihood, seed).map(|(incomplete, _)| incomplete)
}

/// Like [`mcar`], but also returns the boolean mask of removed cells.
pub fn mcar_with_mask(
    x: &Array2<f64>,
    likelihood: f64,
    seed: u64,
) -> Result<(Array2<f64>, Array2<bool>)> {
    if !(0.0..=1.0).contains(&likelihood) {
        return Err(AmputeError::Config(format!(
            "missing likelihood must be in [0, 1], got {}",
            likelihood
        )));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut incomplete = x.to_owned();
    let mut mask = Array2::from_elem(x.raw_dim(), false);

    for ((i, j), value) in incomplete.indexed_iter_mut() {
        if rng.gen::<f64>() < likelihood {
            *value = f64::NAN;
            mask[[i, j]] = true;
        }
    }

    Ok((incomplete, mask))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn test_mcar_reproducible() {
        let x = Array2::from_shape_fn((50, 3), |(i, j)| (i * 3 + j) as f64);
        let (a, mask_a) = mcar_with_mask(&x, 0.3, 42).unwrap();
        let (b, mask_b) = mcar_with_mask(&x, 0.3, 42).unwrap();

        assert_eq!(mask_a, mask_b);
        for (va, vb) in a.iter().zip(b.iter()) {
            assert!(va == vb || (va.is_nan() && vb.is_nan()));
        }
    }

    #[test]
    fn test_mcar_zero_likelihood() {
        let x = Array2::from_shape_fn((20, 4), |(i, j)| (i + j) as f64);
        let (incomplete, mask) = mcar_with_mask(&x, 0.0, 42).unwrap();
        assert_eq!(incomplete, x);
        assert!(!mask.iter().any(|&m| m));
    }

    #[test]
    fn test_mcar_full_likelihood() {
        let x = Array2::from_shape_fn((20, 4), |(i, j)| (i + j) as f64);
        let (incomplete, mask) = mcar_with_mask(&x, 1.0, 42).unwrap();
        assert!(incomplete.iter().all(|v| v.is_nan()));
        assert!(mask.iter().all(|&m| m));
    }

    #[test]
    fn test_mcar_rejects_bad_likelihood() {
        let x = Array2::zeros((5, 2));
        assert!(mcar(&x, -0.1, 42).is_err());
        assert!(mcar(&x, 1.5, 42).is_err());
    }

    #[test]
    fn test_mcar_leaves_input_unmodified() {
        let x = Array2::from_elem((10, 2), 1.0);
        let _ = mcar(&x, 0.9, 42).unwrap();
        assert!(x.iter().all(|&v| v == 1.0));
    }
}
