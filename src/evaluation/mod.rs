//! Evaluation helpers for incomplete datasets
//!
//! Splits a complete matrix and its injected incomplete counterpart into
//! matched train/test views, then cross-evaluates a model over every
//! combination of complete and incomplete data.

mod harness;
mod splits;

pub use harness::{train_on_incomplete_data, Estimator, TrainingResult};
pub use splits::{incomplete_data_splits, FoldSplit, IncompleteDataset, StratifiedKFold};
