//! Statistical summaries for streaming data
//!
//! This module provides a recursive accumulator that computes statistics over
//! a stream in a single pass with constant memory.
//!
//! # Example
//!
//! ```
//! use statistic::statistics::Statistic;
//!
//! let mut stat: Statistic<f64> = Statistic::new();
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     stat.add(value);
//! }
//!
//! println!("Average: {}", stat.average());
//! println!("Stdev: {}", stat.pop_stdev());
//! println!("Min: {}", stat.minimum());
//! println!("Max: {}", stat.maximum());
//! ```

mod accumulator;
mod variance;

pub use accumulator::Statistic;
pub use variance::{NoSpread, SpreadStore, SumSquaredDiff, Tracked, Untracked, VarianceMode};
