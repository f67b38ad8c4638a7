//! Controlled removal of observations under different missingness mechanisms
//!
//! Supports missing completely at random (MCAR), missing at random (MAR),
//! and not missing at random (NMAR). Every injector borrows the complete
//! matrix immutably and returns a newly allocated incomplete matrix with
//! removed cells set to NaN.
//!
//! ```
//! use ndarray::array;
//! use ampute::missingness::{
//!     mcar, nmar, mar, ColumnRule, RemoveLargeValues, RemoveWhenLarge, DEFAULT_SEED,
//! };
//!
//! let x = array![[1.0, 5.0], [2.0, 0.2], [3.0, 7.5]];
//!
//! // mcar: every observation has a 20% chance of being missing
//! let x_mcar = mcar(&x, 0.2, DEFAULT_SEED)?;
//!
//! // nmar: remove all second-column values greater than 4
//! let rules: Vec<Option<Box<dyn ColumnRule>>> =
//!     vec![None, Some(Box::new(RemoveLargeValues::new(4.0)))];
//! let x_nmar = nmar(&x, &rules)?;
//!
//! // mar: remove feature 1 when feature 0 exceeds 2.5
//! let rule = RemoveWhenLarge::new(1, &[0], 2.5);
//! let x_mar = mar(&x, &rule)?;
//! # Ok::<(), ampute::AmputeError>(())
//! ```

mod mar;
mod mcar;
mod nmar;

pub use mar::{mar, Combination, RemoveWhenLarge, RowRule};
pub use mcar::{mcar, mcar_with_mask};
pub use nmar::{nmar, remove_large_values, ColumnRule, RemoveLargeValues};

use crate::error::{AmputeError, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Seed used by the examples and carried over as the conventional default.
pub const DEFAULT_SEED: u64 = 8675309;

/// Check if a value is missing (NaN)
#[inline]
pub fn is_missing(v: f64) -> bool {
    v.is_nan()
}

/// Missing data mechanism tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mechanism {
    /// Missingness independent of all values
    Mcar,
    /// Missingness depends on other observed features in the same instance
    Mar,
    /// Missingness depends on the unobserved value itself
    Nmar,
}

impl Mechanism {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mechanism::Mcar => "mcar",
            Mechanism::Mar => "mar",
            Mechanism::Nmar => "nmar",
        }
    }
}

impl FromStr for Mechanism {
    type Err = AmputeError;

    /// Parse a mechanism name, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mcar" => Ok(Mechanism::Mcar),
            "mar" => Ok(Mechanism::Mar),
            "nmar" => Ok(Mechanism::Nmar),
            other => Err(AmputeError::Config(format!(
                "unknown missing data mechanism: {}. Must be one of: mcar mar nmar",
                other
            ))),
        }
    }
}

/// A mechanism tag together with its mechanism-specific configuration
pub enum MissingnessSpec {
    /// Every cell is removed independently with the given likelihood
    Mcar { likelihood: f64 },
    /// One optional rule per column; `None` leaves the column complete
    Nmar { rules: Vec<Option<Box<dyn ColumnRule>>> },
    /// A single rule applied to every row
    Mar { rule: Box<dyn RowRule> },
}

impl MissingnessSpec {
    pub fn mechanism(&self) -> Mechanism {
        match self {
            MissingnessSpec::Mcar { .. } => Mechanism::Mcar,
            MissingnessSpec::Nmar { .. } => Mechanism::Nmar,
            MissingnessSpec::Mar { .. } => Mechanism::Mar,
        }
    }
}

/// Remove observations from `x` according to the configured mechanism.
///
/// Only the MCAR mechanism draws random numbers; the rule-based mechanisms
/// are deterministic and ignore `seed`.
pub fn ampute(x: &Array2<f64>, spec: &MissingnessSpec, seed: u64) -> Result<Array2<f64>> {
    match spec {
        MissingnessSpec::Mcar { likelihood } => mcar(x, *likelihood, seed),
        MissingnessSpec::Nmar { rules } => nmar(x, rules),
        MissingnessSpec::Mar { rule } => mar(x, rule.as_ref()),
    }
}
