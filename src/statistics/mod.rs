//! Statistical kernels for boxplot computation.
//!
//! This module provides the numerical core:
//! - Five-number summary estimation under several interpolation rules
//! - Tukey's fivenum hinges
//! - IQR-fence whisker derivation with snapping to observed samples

mod quantile;
mod whisker;

pub use quantile::{
    fivenum, quantiles_higher, quantiles_linear, quantiles_lower, quantiles_midpoint,
    quantiles_nearest, quantiles_type7,
};
pub use whisker::whiskers;
