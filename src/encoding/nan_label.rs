//! A label encoder which handles missing values
//!
//! Missing labels are `None` on the way in and a NaN placeholder on the way
//! out, so downstream numeric consumers that understand NaN still see which
//! entries were missing. A reserved sentinel class, appended after all real
//! classes, absorbs unseen values when configured to do so.

use crate::error::{AmputeError, Result};
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// Label encoder with a dedicated class for missing and unseen values
///
/// The encoder is unusable until [`fit`](Self::fit) has run; the fitted
/// class list is the sorted set of observed labels, any pre-declared labels,
/// and the sentinel marker as the final, highest-indexed class.
#[derive(Debug, Clone)]
pub struct NanLabelEncoder<L> {
    missing_marker: L,
    declared: Vec<L>,
    treat_unknown_as_missing: bool,
    classes: Option<Vec<L>>,
}

impl Default for NanLabelEncoder<String> {
    fn default() -> Self {
        Self::new("---NaN---".to_string())
    }
}

impl<L: Ord + Clone + fmt::Display> NanLabelEncoder<L> {
    /// Create an encoder using `missing_marker` as the sentinel class.
    ///
    /// The marker must not appear among the real labels; `fit` rejects the
    /// collision.
    pub fn new(missing_marker: L) -> Self {
        Self {
            missing_marker,
            declared: Vec::new(),
            treat_unknown_as_missing: false,
            classes: None,
        }
    }

    /// Declare labels that must be accounted for even when they do not
    /// appear in the fitted data.
    pub fn with_labels<I: IntoIterator<Item = L>>(mut self, labels: I) -> Self {
        self.declared = labels.into_iter().collect();
        self
    }

    /// Replace unseen values with the sentinel during transform instead of
    /// failing.
    pub fn with_unknown_as_missing(mut self, yes: bool) -> Self {
        self.treat_unknown_as_missing = yes;
        self
    }

    /// Fit the encoder on a label sequence; `None` entries are missing.
    pub fn fit(&mut self, y: &[Option<L>]) -> Result<&mut Self> {
        if self.declared.contains(&self.missing_marker) {
            return Err(AmputeError::Config(format!(
                "the missing value marker {} collides with a declared label",
                self.missing_marker
            )));
        }
        if y.iter().flatten().any(|v| *v == self.missing_marker) {
            return Err(AmputeError::Config(format!(
                "found the missing value marker {} among the labels",
                self.missing_marker
            )));
        }

        let mut unique: BTreeSet<L> = y.iter().flatten().cloned().collect();
        unique.extend(self.declared.iter().cloned());

        let mut classes: Vec<L> = unique.into_iter().collect();
        classes.push(self.missing_marker.clone());
        self.classes = Some(classes);
        Ok(self)
    }

    pub fn is_fitted(&self) -> bool {
        self.classes.is_some()
    }

    /// The fitted class list, sentinel last.
    pub fn classes(&self) -> Result<&[L]> {
        self.fitted()
    }

    /// The number of classes, not including the sentinel.
    pub fn num_classes(&self) -> Result<usize> {
        Ok(self.fitted()?.len() - 1)
    }

    /// Encode labels as their rank position in the fitted class list.
    ///
    /// Missing entries (and entries equal to the sentinel marker) come back
    /// as NaN. Unseen values map to the sentinel's index when
    /// unseen-as-missing is enabled and fail otherwise.
    pub fn transform(&self, y: &[Option<L>]) -> Result<Vec<f64>> {
        let classes = self.fitted()?;
        let sentinel = classes.len() - 1;
        let known = &classes[..sentinel];
        debug!("encoding {} labels against {} classes", y.len(), sentinel);

        let mut unseen: Vec<String> = Vec::new();
        let mut codes = Vec::with_capacity(y.len());
        for value in y {
            match value {
                None => codes.push(f64::NAN),
                Some(v) if *v == self.missing_marker => codes.push(f64::NAN),
                Some(v) => match known.binary_search(v) {
                    Ok(idx) => codes.push(idx as f64),
                    Err(_) if self.treat_unknown_as_missing => codes.push(sentinel as f64),
                    Err(_) => {
                        let repr = v.to_string();
                        if !unseen.contains(&repr) {
                            unseen.push(repr);
                        }
                    }
                },
            }
        }

        if !unseen.is_empty() {
            return Err(AmputeError::UnseenLabel(unseen.join(", ")));
        }
        Ok(codes)
    }

    /// Decode integer codes back to labels.
    ///
    /// The NaN placeholder and the sentinel's index both decode to `None`;
    /// codes outside the fitted range fail, naming the offending codes.
    pub fn inverse_transform(&self, codes: &[f64]) -> Result<Vec<Option<L>>> {
        let classes = self.fitted()?;
        let sentinel = classes.len() - 1;

        let mut invalid: Vec<String> = Vec::new();
        let mut labels = Vec::with_capacity(codes.len());
        for &code in codes {
            if code.is_nan() {
                labels.push(None);
            } else if code >= 0.0 && code.fract() == 0.0 && (code as usize) <= sentinel {
                let idx = code as usize;
                labels.push(if idx == sentinel {
                    None
                } else {
                    Some(classes[idx].clone())
                });
            } else {
                invalid.push(code.to_string());
            }
        }

        if !invalid.is_empty() {
            return Err(AmputeError::UnseenLabel(format!(
                "codes {} out of range",
                invalid.join(", ")
            )));
        }
        Ok(labels)
    }

    fn fitted(&self) -> Result<&[L]> {
        self.classes.as_deref().ok_or(AmputeError::NotFitted)
    }
}
