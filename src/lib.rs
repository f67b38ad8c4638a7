//! Ampute - controlled missingness simulation for tabular data
//!
//! This crate removes observations from complete numeric matrices under the
//! standard missing data mechanisms, builds matched complete/incomplete
//! train/test splits, and cross-evaluates models over them to measure how
//! robust a predictor is to incomplete data.
//!
//! # Modules
//!
//! - [`missingness`] - MCAR / MAR / NMAR injection with seeded reproducibility
//! - [`evaluation`] - stratified splitting and the factorial train/test harness
//! - [`encoding`] - a label encoder tolerant of missing and unseen values
//!
//! # Example
//!
//! ```
//! use ampute::prelude::*;
//! use ndarray::{Array1, Array2};
//!
//! let x_complete = Array2::from_shape_fn((40, 4), |(i, j)| (i * 4 + j) as f64);
//! let y = Array1::from_shape_fn(40, |i| (i % 2) as f64);
//!
//! // every observation has a 20% chance of being missing
//! let x_incomplete = mcar(&x_complete, 0.2, DEFAULT_SEED)?;
//!
//! // matched complete/incomplete views of fold 0
//! let data = incomplete_data_splits(&x_complete, &x_incomplete, &y, 0, 10, DEFAULT_SEED)?;
//! assert_eq!(data.x_train_complete.nrows(), data.x_train_incomplete.nrows());
//! # Ok::<(), ampute::AmputeError>(())
//! ```

pub mod encoding;
pub mod error;
pub mod evaluation;
pub mod missingness;

pub use error::{AmputeError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::encoding::NanLabelEncoder;
    pub use crate::error::{AmputeError, Result};
    pub use crate::evaluation::{
        incomplete_data_splits, train_on_incomplete_data, Estimator, IncompleteDataset,
        StratifiedKFold, TrainingResult,
    };
    pub use crate::missingness::{
        ampute, mar, mcar, mcar_with_mask, nmar, ColumnRule, Combination, Mechanism,
        MissingnessSpec, RemoveLargeValues, RemoveWhenLarge, RowRule, DEFAULT_SEED,
    };
}
