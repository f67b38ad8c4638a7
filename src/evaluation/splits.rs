//! Stratified splitting of paired complete/incomplete matrices

use crate::error::{AmputeError, Result};
use ndarray::{Array1, Array2, Axis};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single train/test split
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoldSplit {
    pub train_indices: Vec<usize>,
    pub test_indices: Vec<usize>,
    pub fold_idx: usize,
}

/// Stratified K-Fold splitter (folds respect class proportions)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StratifiedKFold {
    n_splits: usize,
    seed: u64,
}

impl StratifiedKFold {
    pub fn new(n_splits: usize) -> Self {
        Self {
            n_splits,
            seed: crate::missingness::DEFAULT_SEED,
        }
    }

    /// Set the seed driving the within-class shuffle.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generate train/test splits stratified over the class labels in `y`.
    ///
    /// Same (labels, fold count, seed) always yields the same partition.
    pub fn split(&self, y: &Array1<f64>) -> Result<Vec<FoldSplit>> {
        let n_samples = y.len();
        if self.n_splits < 2 {
            return Err(AmputeError::Validation(
                "n_splits must be at least 2".to_string(),
            ));
        }
        if n_samples < self.n_splits {
            return Err(AmputeError::Validation(format!(
                "n_samples ({}) must be >= n_splits ({})",
                n_samples, self.n_splits
            )));
        }

        // BTreeMap keeps class iteration order deterministic
        let mut class_indices: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
        for (idx, &val) in y.iter().enumerate() {
            class_indices.entry(val.round() as i64).or_default().push(idx);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        for indices in class_indices.values_mut() {
            indices.shuffle(&mut rng);
        }

        // deal samples from each class to folds round-robin
        let mut folds: Vec<Vec<usize>> = vec![Vec::new(); self.n_splits];
        for indices in class_indices.values() {
            for (i, &idx) in indices.iter().enumerate() {
                folds[i % self.n_splits].push(idx);
            }
        }

        let mut splits = Vec::with_capacity(self.n_splits);
        for fold_idx in 0..self.n_splits {
            let test_indices = folds[fold_idx].clone();
            let train_indices: Vec<usize> = folds
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != fold_idx)
                .flat_map(|(_, f)| f.iter().copied())
                .collect();

            splits.push(FoldSplit {
                train_indices,
                test_indices,
                fold_idx,
            });
        }

        Ok(splits)
    }
}

/// Matched complete/incomplete train/test views of one fold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncompleteDataset {
    pub x_train_complete: Array2<f64>,
    pub x_train_incomplete: Array2<f64>,
    pub x_test_complete: Array2<f64>,
    pub x_test_incomplete: Array2<f64>,
    pub y_train: Array1<f64>,
    pub y_test: Array1<f64>,
}

/// Split paired complete/incomplete matrices with stratified k-fold
/// cross-validation and return the views for the requested fold.
///
/// The same row indices drive the complete and incomplete selections, so
/// both members of each split cover the same observations in the same
/// order. All returned arrays are newly allocated; the inputs are left
/// untouched.
pub fn incomplete_data_splits(
    x_complete: &Array2<f64>,
    x_incomplete: &Array2<f64>,
    y: &Array1<f64>,
    fold: usize,
    num_folds: usize,
    seed: u64,
) -> Result<IncompleteDataset> {
    if x_complete.dim() != x_incomplete.dim() {
        return Err(AmputeError::ShapeMismatch {
            expected: format!("{:?}", x_complete.dim()),
            actual: format!("{:?}", x_incomplete.dim()),
        });
    }
    if y.len() != x_complete.nrows() {
        return Err(AmputeError::Validation(format!(
            "number of labels ({}) does not match number of rows ({})",
            y.len(),
            x_complete.nrows()
        )));
    }
    if fold >= num_folds {
        return Err(AmputeError::Validation(format!(
            "fold {} is out of range for {} folds",
            fold, num_folds
        )));
    }

    let splits = StratifiedKFold::new(num_folds).with_seed(seed).split(y)?;
    let FoldSplit {
        train_indices,
        test_indices,
        ..
    } = &splits[fold];

    Ok(IncompleteDataset {
        x_train_complete: x_complete.select(Axis(0), train_indices),
        x_train_incomplete: x_incomplete.select(Axis(0), train_indices),
        x_test_complete: x_complete.select(Axis(0), test_indices),
        x_test_incomplete: x_incomplete.select(Axis(0), test_indices),
        y_train: y.select(Axis(0), train_indices),
        y_test: y.select(Axis(0), test_indices),
    })
}
