//! # Statistic
//!
//! Recursive streaming statistics for Rust.
//!
//! Statistic keeps a running count, sum, minimum, maximum and mean of a stream
//! of observations, and optionally its variance, without retaining any of the
//! observations. Variance is tracked with a recursive (Welford-family) update
//! that never forms `Σx²`, so it stays accurate when the mean is large compared
//! to the spread of the data.
//!
//! ## Quick Start
//!
//! ```rust
//! use statistic::prelude::*;
//!
//! let mut stat: Statistic<f64> = Statistic::new();
//! for reading in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
//!     stat.add(reading);
//! }
//!
//! assert_eq!(stat.count(), 8);
//! assert_eq!(stat.average(), 5.0);
//! assert!((stat.pop_stdev() - 2.0).abs() < 1e-12);
//! ```
//!
//! ## Undefined Results
//!
//! Queries never fail. Statistics that are not defined for the current state
//! (an average of nothing, a variance that was never tracked) are reported as
//! NaN:
//!
//! ```rust
//! use statistic::{Statistic, Untracked};
//!
//! let mut stat: Statistic<f64, u32, Untracked> = Statistic::new();
//! assert!(stat.average().is_nan());
//!
//! stat.add(1.0);
//! assert_eq!(stat.average(), 1.0);
//! assert!(stat.variance().is_nan());
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support
//! - `libm`: Floating-point math for `no_std` targets
//! - `serde`: Enable serialization of accumulator state
//! - `log`: Emit diagnostics through the `log` facade

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("statistic needs floating-point math: enable either the `std` or the `libm` feature");

// Logging shims; compile to nothing without the `log` feature.
macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        { log::trace!($($arg)*) }
    }};
}

macro_rules! warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        { log::warn!($($arg)*) }
    }};
}

pub mod traits;

pub mod statistics;

/// Version of this library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::statistics::{Statistic, Tracked, Untracked, VarianceMode};
}

pub use statistics::{Statistic, Tracked, Untracked};
