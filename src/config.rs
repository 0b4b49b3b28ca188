//! Options controlling the boxplot statistics computation.

use std::fmt;
use std::sync::Arc;

use crate::statistics::{
    fivenum, quantiles_higher, quantiles_lower, quantiles_midpoint, quantiles_nearest,
    quantiles_type7,
};
use crate::types::BoxplotSummary;

/// Signature of a caller-supplied quantile estimator.
///
/// Receives the cleaned samples (finite, ascending, non-empty) and
/// produces the five-number summary. `Send + Sync` so options holding a
/// custom estimator remain shareable across threads.
pub type QuantileFn = dyn Fn(&[f64]) -> BoxplotSummary + Send + Sync;

/// Quantile estimation rule used for the five-number summary.
///
/// The named variants cover the interpolation rules exported from
/// [`statistics`](crate::statistics); `Custom` carries any caller
/// function honoring the same contract.
#[derive(Clone, Default)]
pub enum QuantileMethod {
    /// R type 7, linear interpolation (the default). The `type7`,
    /// `quantiles`, and `linear` selectors all resolve here.
    #[default]
    Type7,
    /// Lower bracketing element.
    Lower,
    /// Higher bracketing element.
    Higher,
    /// Whichever bracketing element is nearest by index fraction.
    Nearest,
    /// Midpoint of the bracketing elements.
    Midpoint,
    /// Tukey's hinges. The `fivenum` and `hinges` selectors resolve here.
    Fivenum,
    /// Caller-supplied estimator with the same contract as the named
    /// rules: sorted, finite, non-empty input in; five-number summary out.
    Custom(Arc<QuantileFn>),
}

impl QuantileMethod {
    /// Resolve a method by its string selector.
    ///
    /// Recognized names: `type7`, `quantiles`, `linear`, `lower`,
    /// `higher`, `nearest`, `midpoint`, `fivenum`, `hinges`. Unknown
    /// names fall back to [`QuantileMethod::Type7`] rather than failing.
    pub fn from_name(name: &str) -> Self {
        match name {
            "fivenum" | "hinges" => Self::Fivenum,
            "lower" => Self::Lower,
            "higher" => Self::Higher,
            "nearest" => Self::Nearest,
            "midpoint" => Self::Midpoint,
            // type7, quantiles, and linear are all the type 7 rule, and
            // unrecognized selectors fall back to it as well
            _ => Self::Type7,
        }
    }

    /// Wrap a caller-supplied estimator.
    pub fn custom(f: impl Fn(&[f64]) -> BoxplotSummary + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Compute the five-number summary of a sorted, finite, non-empty
    /// slice under this rule.
    ///
    /// # Panics
    ///
    /// The named rules panic on an empty slice; see
    /// [`quantiles_type7`](crate::statistics::quantiles_type7).
    pub fn compute(&self, sorted: &[f64]) -> BoxplotSummary {
        match self {
            Self::Type7 => quantiles_type7(sorted),
            Self::Lower => quantiles_lower(sorted),
            Self::Higher => quantiles_higher(sorted),
            Self::Nearest => quantiles_nearest(sorted),
            Self::Midpoint => quantiles_midpoint(sorted),
            Self::Fivenum => fivenum(sorted),
            Self::Custom(f) => f(sorted),
        }
    }
}

impl fmt::Debug for QuantileMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type7 => f.write_str("Type7"),
            Self::Lower => f.write_str("Lower"),
            Self::Higher => f.write_str("Higher"),
            Self::Nearest => f.write_str("Nearest"),
            Self::Midpoint => f.write_str("Midpoint"),
            Self::Fivenum => f.write_str("Fivenum"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Options for [`boxplot_stats`](crate::boxplot_stats).
///
/// | option | default | effect |
/// |---|---|---|
/// | `coef` | 1.5 | fence multiplier for the IQR |
/// | `quantiles` | type 7 | interpolation rule for the summary |
#[derive(Debug, Clone)]
pub struct StatsOptions {
    /// Fence coefficient: whiskers extend at most `coef * iqr` beyond the
    /// quartiles. NaN, infinite, or non-positive values disable fencing,
    /// collapsing the whiskers to min/max.
    pub coef: f64,

    /// Quantile estimation rule for the five-number summary.
    pub quantiles: QuantileMethod,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            coef: 1.5,
            quantiles: QuantileMethod::Type7,
        }
    }
}

impl StatsOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fence coefficient.
    pub fn coef(mut self, coef: f64) -> Self {
        self.coef = coef;
        self
    }

    /// Set the quantile estimation rule.
    pub fn quantiles(mut self, method: QuantileMethod) -> Self {
        self.quantiles = method;
        self
    }

    /// Select the quantile rule by its string selector.
    ///
    /// Unknown names fall back to type 7.
    pub fn quantiles_by_name(mut self, name: &str) -> Self {
        self.quantiles = QuantileMethod::from_name(name);
        self
    }

    /// Supply a custom quantile estimator.
    pub fn custom_quantiles(
        mut self,
        f: impl Fn(&[f64]) -> BoxplotSummary + Send + Sync + 'static,
    ) -> Self {
        self.quantiles = QuantileMethod::custom(f);
        self
    }
}
