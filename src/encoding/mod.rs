//! Categorical encoding tolerant of missing values

mod nan_label;

pub use nan_label::NanLabelEncoder;
