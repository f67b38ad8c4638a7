//! Not missing at random
//!
//! The likelihood that an observation is missing depends on the unobserved
//! value itself, so removal is driven by per-column rules over the feature's
//! own values.

use crate::error::{AmputeError, Result};
use ndarray::{Array1, Array2, ArrayView1};
use serde::{Deserialize, Serialize};

/// Per-column missingness rule for [`nmar`].
///
/// A rule receives the full value vector of one feature and returns a
/// same-length copy where the values selected by its predicate are NaN.
pub trait ColumnRule {
    /// Apply the rule to one feature column.
    fn apply(&self, column: ArrayView1<'_, f64>) -> Array1<f64>;

    /// Check the rule against the column length before execution.
    fn validate(&self, len: usize) -> Result<()> {
        let _ = len;
        Ok(())
    }
}

impl<F> ColumnRule for F
where
    F: Fn(ArrayView1<'_, f64>) -> Array1<f64>,
{
    fn apply(&self, column: ArrayView1<'_, f64>) -> Array1<f64> {
        self(column)
    }
}

/// Remove observations from `x` according to per-column rules.
///
/// `rules` must contain one entry per column; `None` means all observations
/// for that feature stay present. Columns are independent of each other, so
/// re-running with the same inputs yields the same output.
pub fn nmar(x: &Array2<f64>, rules: &[Option<Box<dyn ColumnRule>>]) -> Result<Array2<f64>> {
    if rules.len() != x.ncols() {
        return Err(AmputeError::Config(format!(
            "the number of column rules ({}) does not match the number of features ({})",
            rules.len(),
            x.ncols()
        )));
    }

    let mut incomplete = x.to_owned();
    for (j, rule) in rules.iter().enumerate() {
        if let Some(rule) = rule {
            rule.validate(x.nrows())?;
            let column = rule.apply(x.column(j));
            if column.len() != x.nrows() {
                return Err(AmputeError::Validation(format!(
                    "column rule {} returned {} values for {} rows",
                    j,
                    column.len(),
                    x.nrows()
                )));
            }
            incomplete.column_mut(j).assign(&column);
        }
    }

    Ok(incomplete)
}

/// Remove values strictly above `threshold`, returning the masked copy and
/// the mask of removed positions.
pub fn remove_large_values(
    values: ArrayView1<'_, f64>,
    threshold: f64,
) -> (Array1<f64>, Array1<bool>) {
    let mask = values.mapv(|v| v > threshold);
    let masked = values.mapv(|v| if v > threshold { f64::NAN } else { v });
    (masked, mask)
}

/// Column rule removing values strictly above a threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RemoveLargeValues {
    threshold: f64,
}

impl RemoveLargeValues {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl ColumnRule for RemoveLargeValues {
    fn apply(&self, column: ArrayView1<'_, f64>) -> Array1<f64> {
        remove_large_values(column, self.threshold).0
    }
}
