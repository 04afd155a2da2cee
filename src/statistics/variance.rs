//! Variance tracking capability
//!
//! Whether an accumulator tracks variance is chosen by a marker type, not a
//! runtime flag. [`Tracked`] stores the running sum of squared differences;
//! [`Untracked`] stores nothing at all, so the capability costs neither space
//! nor time when it is not wanted.

use core::fmt::Debug;

use crate::traits::Value;

/// Storage for the running sum of squared differences
pub trait SpreadStore<T: Value>: Copy + Debug + Default + PartialEq {
    /// Reset to the empty state
    fn clear(&mut self);

    /// Add one step's contribution
    fn accumulate(&mut self, term: T);

    /// Current sum of squared differences, `None` when not tracked
    fn get(&self) -> Option<T>;

    /// Rebuild the store from a previously observed value
    fn restore(value: T) -> Self;
}

/// Selects whether an accumulator tracks variance
pub trait VarianceMode: Copy + Debug + Default + PartialEq {
    /// Whether the variance update runs at all
    const ENABLED: bool;

    /// Per-accumulator storage for value type `T`
    type Store<T: Value>: SpreadStore<T>;
}

/// Track variance: variance-family queries are computed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tracked;

/// Do not track variance: variance-family queries report NaN
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Untracked;

impl VarianceMode for Tracked {
    const ENABLED: bool = true;
    type Store<T: Value> = SumSquaredDiff<T>;
}

impl VarianceMode for Untracked {
    const ENABLED: bool = false;
    type Store<T: Value> = NoSpread;
}

/// Sum of squared differences from the running mean
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SumSquaredDiff<T>(T);

impl<T: Value> Default for SumSquaredDiff<T> {
    fn default() -> Self {
        Self(T::zero())
    }
}

impl<T: Value> SpreadStore<T> for SumSquaredDiff<T> {
    fn clear(&mut self) {
        self.0 = T::zero();
    }

    #[inline]
    fn accumulate(&mut self, term: T) {
        self.0 = self.0 + term;
    }

    #[inline]
    fn get(&self) -> Option<T> {
        Some(self.0)
    }

    fn restore(value: T) -> Self {
        Self(value)
    }
}

/// Zero-sized stand-in when variance is not tracked
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoSpread;

impl<T: Value> SpreadStore<T> for NoSpread {
    fn clear(&mut self) {}

    #[inline]
    fn accumulate(&mut self, _term: T) {}

    #[inline]
    fn get(&self) -> Option<T> {
        None
    }

    fn restore(_value: T) -> Self {
        NoSpread
    }
}
