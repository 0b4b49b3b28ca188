//! # boxplot-stats
//!
//! Robust boxplot statistics for f64 samples: five-number summary,
//! mean, IQR-fence whiskers snapped to real data points, and outliers.
//!
//! This crate is the numerical core behind a box-and-whisker rendering
//! layer. It performs no scaling, layout, or formatting; consumers read
//! the result fields directly and map them onto their own display domain.
//!
//! The computation is permissive by policy: non-finite samples are
//! silently dropped, input with no finite samples yields an all-NaN
//! sentinel instead of an error, an unrecognized quantile selector falls
//! back to the type 7 rule, and an invalid fence coefficient disables
//! fencing. A call either returns a complete, well-formed result or the
//! sentinel - there are no partial results and no side effects, so every
//! function here is safe to call concurrently on independent inputs.
//!
//! ## Quick Start
//!
//! ```
//! use boxplot_stats::{boxplot_stats, QuantileMethod, StatsOptions};
//!
//! // Default: type 7 quantiles, fence coefficient 1.5
//! let stats = boxplot_stats(&[1.0, 2.0, 3.0, 4.0, 100.0], &StatsOptions::default());
//! assert_eq!(stats.summary.median, 3.0);
//! assert_eq!(stats.whiskers.whisker_max, 4.0);
//! assert_eq!(stats.outliers, vec![100.0]);
//!
//! // Tukey's hinges, fencing disabled: whiskers collapse to min/max
//! let options = StatsOptions::new()
//!     .coef(0.0)
//!     .quantiles(QuantileMethod::Fivenum);
//! let stats = boxplot_stats(&[1.0, 2.0, 3.0, 4.0, 100.0], &options);
//! assert_eq!(stats.whiskers.whisker_max, 100.0);
//! assert!(stats.outliers.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod boxplot;
mod config;
mod types;

// Functional modules
pub mod statistics;

// Re-exports for public API
pub use boxplot::{boxplot_stats, boxplot_stats_sorted, clean_samples};
pub use config::{QuantileFn, QuantileMethod, StatsOptions};
pub use statistics::{
    fivenum, quantiles_higher, quantiles_linear, quantiles_lower, quantiles_midpoint,
    quantiles_nearest, quantiles_type7, whiskers,
};
pub use types::{BoxplotStats, BoxplotSummary, WhiskerBounds};
