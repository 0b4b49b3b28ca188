//! Top-level boxplot statistics computation.
//!
//! One deterministic pass per call: clean the raw samples, estimate the
//! five-number summary under the selected rule, derive whiskers, then
//! collect the mean and outliers. Nothing is retained between calls and
//! the caller's slice is never mutated, so concurrent use on independent
//! inputs needs no synchronization.

use crate::config::StatsOptions;
use crate::statistics::whiskers;
use crate::types::BoxplotStats;

/// Filter samples to finite values and sort them ascending.
///
/// NaN and infinite entries are silently dropped. The result is an owned
/// copy; the caller's slice is left untouched. Feeding an already-cleaned
/// sequence back through yields the same sequence.
pub fn clean_samples(samples: &[f64]) -> Vec<f64> {
    let mut cleaned: Vec<f64> = samples.iter().copied().filter(|v| v.is_finite()).collect();
    cleaned.sort_unstable_by(f64::total_cmp);
    cleaned
}

/// Compute boxplot statistics for raw samples.
///
/// Non-finite entries are dropped before anything is computed. Input
/// with no finite samples (empty, or emptied by cleaning) yields the NaN
/// sentinel from [`BoxplotStats::nan`] - a normal return value, not a
/// failure - so callers must check [`BoxplotStats::is_nan`] before using
/// the fields.
///
/// # Example
///
/// ```
/// use boxplot_stats::{boxplot_stats, StatsOptions};
///
/// let stats = boxplot_stats(&[3.0, 1.0, 5.0, 2.0, 4.0], &StatsOptions::default());
/// assert_eq!(stats.summary.median, 3.0);
/// assert_eq!(stats.mean, 3.0);
/// assert!(stats.outliers.is_empty());
/// ```
pub fn boxplot_stats(samples: &[f64], options: &StatsOptions) -> BoxplotStats {
    let cleaned = clean_samples(samples);
    boxplot_stats_sorted(&cleaned, options)
}

/// Compute boxplot statistics for samples that are already finite-only
/// and sorted ascending.
///
/// Fast path skipping the filter-and-sort pass when the caller holds
/// pre-cleaned data, for instance from [`clean_samples`] reused across
/// several option sets. The caller must guarantee cleanliness; unsorted
/// or non-finite input here produces meaningless results.
pub fn boxplot_stats_sorted(sorted: &[f64], options: &StatsOptions) -> BoxplotStats {
    if sorted.is_empty() {
        return BoxplotStats::nan();
    }

    let summary = options.quantiles.compute(sorted);
    let bounds = whiskers(&summary, sorted, options.coef);
    let mean = sorted.iter().sum::<f64>() / sorted.len() as f64;
    let outliers: Vec<f64> = sorted
        .iter()
        .copied()
        .filter(|&v| v < bounds.whisker_min || v > bounds.whisker_max)
        .collect();

    BoxplotStats {
        summary,
        mean,
        whiskers: bounds,
        outliers,
    }
}
