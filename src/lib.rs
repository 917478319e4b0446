//! *A playground for experiments with truncated Maclaurin series
//! approximations of trigonometric functions*.
//!
//! Two partial-sum approximations — cosine and arctangent — plus the
//! angular unit conversions needed to present their arguments and results.
//! Deliberately naive: every term of a partial sum is evaluated
//! independently, the way the series is written on paper, so the effect of
//! truncating after a given number of terms is easy to observe.
//!
//! ```
//! use maclaurin::prelude::*;
//! use std::f64::consts::FRAC_PI_3;
//!
//! let c = series::cosine(FRAC_PI_3, DEFAULT_TERMS);
//! assert!((c - 0.5).abs() < 1e-9);
//!
//! let a = series::arctangent(0.5, DEFAULT_TERMS)?;
//! assert!((a - 0.4636476090008061).abs() < 1e-9);
//! # Ok::<(), maclaurin::Error>(())
//! ```

use thiserror::Error;

pub mod math;

pub use crate::math::angular;
pub use crate::math::series;
pub use crate::math::series::DEFAULT_TERMS;

/// The errors of the crate. Only the arctangent series can fail: its
/// Maclaurin expansion diverges outside the closed interval [-1, 1],
/// so arguments outside of it are rejected before any summation.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("domain error: {0} is outside [-1, 1]")]
    Domain(f64),
}

/// Preamble for consumers of the crate
pub mod prelude {
    pub use crate::angular;
    pub use crate::series;
    pub use crate::Error;
    pub use crate::DEFAULT_TERMS;
}
