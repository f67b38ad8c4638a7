//! Missing at random
//!
//! The likelihood that an observation is missing depends on the other,
//! observed values in the same instance, so removal is driven by a per-row
//! rule that inspects a whole observation at a time.

use crate::error::{AmputeError, Result};
use ndarray::{Array1, Array2, ArrayView1};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-row missingness rule for [`mar`].
///
/// A rule receives one full observation and returns a same-length copy where
/// zero or more target features are NaN, based on the other feature values
/// in that row.
pub trait RowRule: Sync {
    /// Apply the rule to one observation.
    fn apply(&self, row: ArrayView1<'_, f64>) -> Array1<f64>;

    /// Check the rule against the row width before execution.
    fn validate(&self, width: usize) -> Result<()> {
        let _ = width;
        Ok(())
    }
}

impl<F> RowRule for F
where
    F: Fn(ArrayView1<'_, f64>) -> Array1<f64> + Sync,
{
    fn apply(&self, row: ArrayView1<'_, f64>) -> Array1<f64> {
        self(row)
    }
}

/// Remove observations from `x` by applying `rule` to every row.
///
/// Rows carry no inter-row dependency, so they are processed in parallel;
/// the output is identical to sequential application.
pub fn mar(x: &Array2<f64>, rule: &dyn RowRule) -> Result<Array2<f64>> {
    rule.validate(x.ncols())?;

    let rows: Vec<Array1<f64>> = (0..x.nrows())
        .into_par_iter()
        .map(|i| rule.apply(x.row(i)))
        .collect();

    let mut incomplete = Array2::from_elem(x.raw_dim(), f64::NAN);
    for (i, row) in rows.iter().enumerate() {
        if row.len() != x.ncols() {
            return Err(AmputeError::Validation(format!(
                "row rule returned {} values for row {} with {} features",
                row.len(),
                i,
                x.ncols()
            )));
        }
        incomplete.row_mut(i).assign(row);
    }

    Ok(incomplete)
}

/// How to combine several condition features into one value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Combination {
    #[default]
    Product,
    Sum,
    Min,
    Max,
}

impl Combination {
    fn combine(self, values: impl Iterator<Item = f64>) -> f64 {
        match self {
            Combination::Product => values.product(),
            Combination::Sum => values.sum(),
            Combination::Min => values.fold(f64::INFINITY, f64::min),
            Combination::Max => values.fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

/// Row rule removing feature `target` when the combined `conditions`
/// features strictly exceed a threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoveWhenLarge {
    target: usize,
    conditions: Vec<usize>,
    threshold: f64,
    combination: Combination,
}

impl RemoveWhenLarge {
    /// Remove `target` when the product of the `conditions` features
    /// exceeds `threshold`.
    pub fn new(target: usize, conditions: &[usize], threshold: f64) -> Self {
        Self {
            target,
            conditions: conditions.to_vec(),
            threshold,
            combination: Combination::default(),
        }
    }

    /// Set the operator combining the condition features.
    pub fn with_combination(mut self, combination: Combination) -> Self {
        self.combination = combination;
        self
    }
}

impl RowRule for RemoveWhenLarge {
    fn apply(&self, row: ArrayView1<'_, f64>) -> Array1<f64> {
        let combined = self
            .combination
            .combine(self.conditions.iter().map(|&z| row[z]));

        let mut out = row.to_owned();
        if combined > self.threshold {
            out[self.target] = f64::NAN;
        }
        out
    }

    fn validate(&self, width: usize) -> Result<()> {
        if self.target >= width {
            return Err(AmputeError::Validation(format!(
                "target feature index {} is out of range for {} features",
                self.target, width
            )));
        }
        if let Some(&z) = self.conditions.iter().find(|&&z| z >= width) {
            return Err(AmputeError::Validation(format!(
                "condition feature index {} is out of range for {} features",
                z, width
            )));
        }
        Ok(())
    }
}
