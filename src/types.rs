//! Result types for boxplot statistics.

use serde::{Deserialize, Serialize};

/// Five-number summary of a sample distribution.
///
/// Every field is drawn from, or interpolated between, elements of the
/// cleaned (finite, ascending) sample sequence. For any input with at
/// least one finite sample, `min <= q1 <= median <= q3 <= max` holds
/// under every named estimation rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxplotSummary {
    /// Smallest sample.
    pub min: f64,
    /// First quartile (25th percentile).
    pub q1: f64,
    /// Median (50th percentile).
    pub median: f64,
    /// Third quartile (75th percentile).
    pub q3: f64,
    /// Largest sample.
    pub max: f64,
}

impl BoxplotSummary {
    /// Interquartile range, `q3 - q1`.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    pub(crate) fn nan() -> Self {
        Self {
            min: f64::NAN,
            q1: f64::NAN,
            median: f64::NAN,
            q3: f64::NAN,
            max: f64::NAN,
        }
    }
}

/// Whisker bounds: the data-snapped boundary of the non-outlier range.
///
/// Both bounds are guaranteed to equal an actual element of the cleaned
/// sample sequence, never a purely interpolated point. When the fence
/// coefficient is valid, `whisker_min <= q1` and `whisker_max >= q3`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WhiskerBounds {
    /// Smallest sample at or above the lower fence.
    pub whisker_min: f64,
    /// Largest sample at or below the upper fence.
    pub whisker_max: f64,
}

/// Complete boxplot statistics for one sample collection.
///
/// Produced by [`boxplot_stats`](crate::boxplot_stats). The rendering
/// layer reads these fields directly; no scaling or formatting happens
/// here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxplotStats {
    /// Five-number summary under the selected quantile rule.
    pub summary: BoxplotSummary,
    /// Arithmetic mean of the cleaned samples.
    pub mean: f64,
    /// Data-snapped whisker bounds.
    pub whiskers: WhiskerBounds,
    /// Samples strictly outside `[whisker_min, whisker_max]`, ascending.
    pub outliers: Vec<f64>,
}

impl BoxplotStats {
    /// Sentinel for input with no finite samples: every statistic is NaN
    /// and `outliers` is empty. A normal return value, not a failure.
    pub fn nan() -> Self {
        Self {
            summary: BoxplotSummary::nan(),
            mean: f64::NAN,
            whiskers: WhiskerBounds {
                whisker_min: f64::NAN,
                whisker_max: f64::NAN,
            },
            outliers: Vec::new(),
        }
    }

    /// True if this is the no-finite-samples sentinel.
    ///
    /// Callers must check this before mapping the result onto a display
    /// domain, since NaN propagates through any further arithmetic.
    pub fn is_nan(&self) -> bool {
        self.summary.median.is_nan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iqr_is_q3_minus_q1() {
        let summary = BoxplotSummary {
            min: 1.0,
            q1: 2.0,
            median: 3.0,
            q3: 4.5,
            max: 5.0,
        };
        assert_eq!(summary.iqr(), 2.5);
    }

    #[test]
    fn nan_sentinel_is_all_nan() {
        let stats = BoxplotStats::nan();
        assert!(stats.summary.min.is_nan());
        assert!(stats.summary.q1.is_nan());
        assert!(stats.summary.median.is_nan());
        assert!(stats.summary.q3.is_nan());
        assert!(stats.summary.max.is_nan());
        assert!(stats.mean.is_nan());
        assert!(stats.whiskers.whisker_min.is_nan());
        assert!(stats.whiskers.whisker_max.is_nan());
        assert!(stats.outliers.is_empty());
        assert!(stats.is_nan());
    }
}
