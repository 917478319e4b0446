//! Miscellaneous math functions for general use

/// Free functions for handling and converting between
/// different representations of angles.
pub mod angular;

/// Truncated Maclaurin series for cosine and arctangent
pub mod series;

pub use series::DEFAULT_TERMS;
