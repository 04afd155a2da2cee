//! Core traits for streaming summaries
//!
//! Numeric bounds shared by every accumulator, the [`Summary`] trait that all
//! summaries implement, and the error types of their fallible operations.

use core::fmt::Debug;

use num_traits::{Float, PrimInt, Unsigned};

/// Floating-point type an accumulator can observe (`f32`, `f64`, ...)
pub trait Value: Float + Debug {}

impl<T: Float + Debug> Value for T {}

/// Unsigned integer type an accumulator counts observations with
pub trait Counter: PrimInt + Unsigned + Debug {}

impl<C: PrimInt + Unsigned + Debug> Counter for C {}

/// Error when an observation cannot be recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddError {
    /// The counter type cannot represent one more observation
    CounterSaturated,
}

impl core::fmt::Display for AddError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AddError::CounterSaturated => {
                write!(f, "counter saturated: observation was not recorded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AddError {}

/// Error when restoring an accumulator from raw parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    /// Count is zero but sum, minimum or maximum is not
    EmptyWithData,
    /// Minimum is greater than maximum
    InvertedBounds,
    /// Sum of squared differences is negative
    NegativeSpread,
    /// Variance is tracked but no sum of squared differences was given
    MissingSpread,
    /// Variance is not tracked but a sum of squared differences was given
    UnexpectedSpread,
    /// Count is one but the bounds, sum or spread disagree with a single observation
    InconsistentSingle,
}

impl core::fmt::Display for StateError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StateError::EmptyWithData => write!(f, "empty state carries a non-zero sum or bound"),
            StateError::InvertedBounds => write!(f, "minimum exceeds maximum"),
            StateError::NegativeSpread => write!(f, "negative sum of squared differences"),
            StateError::MissingSpread => {
                write!(f, "variance is tracked but sum of squared differences is missing")
            }
            StateError::UnexpectedSpread => {
                write!(f, "variance is not tracked but sum of squared differences is present")
            }
            StateError::InconsistentSingle => {
                write!(f, "single observation state has differing bounds, sum or non-zero spread")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StateError {}

/// Core trait for all streaming summaries
///
/// A summary folds observations into constant-size state; observations are
/// never retained, removed or replayed.
pub trait Summary: Clone + Debug {
    /// The type of observation this summary processes
    type Item;

    /// Add an observation to the summary
    fn update(&mut self, item: &Self::Item);

    /// Reset summary to empty state
    fn clear(&mut self);

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize {
        core::mem::size_of_val(self)
    }

    /// Check if no observation has been added
    fn is_empty(&self) -> bool;
}
