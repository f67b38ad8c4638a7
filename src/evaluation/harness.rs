//! Factorial training/evaluation over complete and incomplete data

use crate::error::Result;
use crate::evaluation::IncompleteDataset;
use ndarray::{Array1, Array2};

/// The model contract the harness relies on: a cloneable template that can
/// be fitted and then queried for predictions. The harness never inspects
/// model internals.
pub trait Estimator: Clone {
    /// Fit the model to training data
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<()>;

    /// Make predictions
    fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>>;
}

/// Models and predictions from every training/testing combination
///
/// Suffix convention: the first letter is the training variant, the second
/// the test variant (`ci` = fitted on complete data, predicting the
/// incomplete test matrix).
#[derive(Debug, Clone)]
pub struct TrainingResult<M> {
    /// The model fitted on the complete training data
    pub model_complete: M,
    /// The model fitted on the incomplete training data
    pub model_incomplete: M,
    pub y_pred_cc: Array1<f64>,
    pub y_pred_ci: Array1<f64>,
    pub y_pred_ic: Array1<f64>,
    pub y_pred_ii: Array1<f64>,
    /// The true test labels
    pub y_test: Array1<f64>,
}

/// Fit `model` on both training variants and evaluate both fitted models on
/// both test variants.
///
/// This factorial layout isolates whether missingness hurts more during
/// training or during inference. Any failure during fit or predict
/// propagates unmodified to the caller.
pub fn train_on_incomplete_data<M: Estimator>(
    model: &M,
    data: &IncompleteDataset,
) -> Result<TrainingResult<M>> {
    let mut model_complete = model.clone();
    model_complete.fit(&data.x_train_complete, &data.y_train)?;

    let mut model_incomplete = model.clone();
    model_incomplete.fit(&data.x_train_incomplete, &data.y_train)?;

    let y_pred_cc = model_complete.predict(&data.x_test_complete)?;
    let y_pred_ci = model_complete.predict(&data.x_test_incomplete)?;
    let y_pred_ic = model_incomplete.predict(&data.x_test_complete)?;
    let y_pred_ii = model_incomplete.predict(&data.x_test_incomplete)?;

    Ok(TrainingResult {
        model_complete,
        model_incomplete,
        y_pred_cc,
        y_pred_ci,
        y_pred_ic,
        y_pred_ii,
        y_test: data.y_test.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AmputeError;
    use ndarray::Array2;

    /// Predicts the training-label mean for every test row, counting NaN
    /// cells in the training data as zero.
    #[derive(Debug, Clone, Default)]
    struct MeanModel {
        mean: f64,
    }

    impl Estimator for MeanModel {
        fn fit(&mut self, _x: &Array2<f64>, y: &Array1<f64>) -> Result<()> {
            self.mean = y.sum() / y.len() as f64;
            Ok(())
        }

        fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
            Ok(Array1::from_elem(x.nrows(), self.mean))
        }
    }

    #[derive(Debug, Clone)]
    struct FailingModel;

    impl Estimator for FailingModel {
        fn fit(&mut self, _x: &Array2<f64>, _y: &Array1<f64>) -> Result<()> {
            Err(AmputeError::Training("fit exploded".to_string()))
        }

        fn predict(&self, _x: &Array2<f64>) -> Result<Array1<f64>> {
            unreachable!("predict is never reached when fit fails")
        }
    }

    fn dataset() -> IncompleteDataset {
        IncompleteDataset {
            x_train_complete: Array2::from_elem((4, 2), 1.0),
            x_train_incomplete: Array2::from_elem((4, 2), f64::NAN),
            x_test_complete: Array2::from_elem((2, 2), 1.0),
            x_test_incomplete: Array2::from_elem((2, 2), f64::NAN),
            y_train: Array1::from_vec(vec![0.0, 1.0, 0.0, 1.0]),
            y_test: Array1::from_vec(vec![0.0, 1.0]),
        }
    }

    #[test]
    fn test_prediction_lengths_match_test_size() {
        let result = train_on_incomplete_data(&MeanModel::default(), &dataset()).unwrap();
        assert_eq!(result.y_pred_cc.len(), 2);
        assert_eq!(result.y_pred_ci.len(), 2);
        assert_eq!(result.y_pred_ic.len(), 2);
        assert_eq!(result.y_pred_ii.len(), 2);
        assert_eq!(result.y_test.len(), 2);
    }

    #[test]
    fn test_models_are_fitted_independently() {
        let result = train_on_incomplete_data(&MeanModel::default(), &dataset()).unwrap();
        assert_eq!(result.model_complete.mean, 0.5);
        assert_eq!(result.model_incomplete.mean, 0.5);
        assert_eq!(result.y_pred_cc, result.y_pred_ii);
    }

    #[test]
    fn test_fit_errors_propagate() {
        let err = train_on_incomplete_data(&FailingModel, &dataset()).unwrap_err();
        assert!(err.to_string().contains("fit exploded"));
    }
}
