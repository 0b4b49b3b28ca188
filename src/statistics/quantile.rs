//! Quantile estimators producing five-number summaries.
//!
//! Five of the estimators share one interpolating rule (for sorted sample
//! x of size n at probability q):
//!
//! ```text
//! index = q * (n - 1)
//! lo    = floor(index)
//! frac  = index - lo
//! value = x[lo]                                   if frac == 0
//!       = interpolate(x[lo], x[lo + 1], frac)     otherwise
//! ```
//!
//! where `interpolate` distinguishes the rules: linear (R type 7, the
//! default), lower, higher, nearest, and midpoint. [`fivenum`] is a
//! distinct algorithm (Tukey's hinges) that averages order statistics at
//! half-integer positions instead of interpolating.
//!
//! All estimators require a sorted slice and leave it untouched; the
//! summary is built from q in {0.25, 0.5, 0.75} plus the endpoints.
//!
//! # Reference
//!
//! Hyndman, R. J. & Fan, Y. (1996). "Sample quantiles in statistical
//! packages." The American Statistician 50(4):361-365.

use crate::types::BoxplotSummary;

/// Shared interpolating rule over a sorted slice.
///
/// `interpolate(a, b, frac)` receives the two bracketing elements and the
/// fractional part of the index; it is only called when `frac != 0`.
fn quantiles_interpolate(
    sorted: &[f64],
    interpolate: impl Fn(f64, f64, f64) -> f64,
) -> BoxplotSummary {
    assert!(
        !sorted.is_empty(),
        "Cannot summarize an empty sample slice"
    );

    let n1 = sorted.len() - 1;
    let compute = |q: f64| {
        let index = q * n1 as f64;
        let lo = index.floor() as usize;
        let frac = index - lo as f64;
        let a = sorted[lo];

        if frac == 0.0 {
            a
        } else {
            interpolate(a, sorted[(lo + 1).min(n1)], frac)
        }
    };

    BoxplotSummary {
        min: sorted[0],
        q1: compute(0.25),
        median: compute(0.5),
        q3: compute(0.75),
        max: sorted[n1],
    }
}

/// R's type 7 quantile estimator: linear interpolation between the
/// bracketing order statistics. The default rule.
///
/// # Arguments
///
/// * `sorted` - Finite samples in ascending order
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantiles_type7(sorted: &[f64]) -> BoxplotSummary {
    quantiles_interpolate(sorted, |a, b, frac| a + frac * (b - a))
}

/// Linear interpolation, `a + (b - a) * frac`.
///
/// Numerically identical to [`quantiles_type7`]; kept as its own export
/// so the `linear` selector resolves to a callable function.
pub fn quantiles_linear(sorted: &[f64]) -> BoxplotSummary {
    quantiles_interpolate(sorted, |a, b, frac| a + (b - a) * frac)
}

/// Lower bracketing element, `a`. Always returns literal input elements.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantiles_lower(sorted: &[f64]) -> BoxplotSummary {
    quantiles_interpolate(sorted, |a, _, _| a)
}

/// Higher bracketing element, `b`. Always returns literal input elements.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantiles_higher(sorted: &[f64]) -> BoxplotSummary {
    quantiles_interpolate(sorted, |_, b, _| b)
}

/// Whichever bracketing element is nearest by index fraction: `a` when
/// `frac < 0.5`, else `b`.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantiles_nearest(sorted: &[f64]) -> BoxplotSummary {
    quantiles_interpolate(sorted, |a, b, frac| if frac < 0.5 { a } else { b })
}

/// Midpoint of the bracketing elements, `(a + b) / 2`.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantiles_midpoint(sorted: &[f64]) -> BoxplotSummary {
    quantiles_interpolate(sorted, |a, b, _| (a + b) * 0.5)
}

/// Tukey's five-number summary (hinges).
///
/// The hinges equal the quartiles for odd n and differ for even n.
/// Whereas the quartiles only equal observations for n = 1 mod 4, the
/// hinges do so additionally for n = 2 mod 4, and sit in the middle of
/// two observations otherwise.
///
/// Positions are 1-indexed over the sorted sample of length n:
///
/// ```text
/// n4       = floor((n + 3) / 2) / 2
/// hinge(d) = 0.5 * (x[floor(d)] + x[ceil(d)])
/// q1       = hinge(n4)
/// median   = hinge((n + 1) / 2)
/// q3       = hinge(n + 1 - n4)
/// ```
///
/// # Arguments
///
/// * `sorted` - Finite samples in ascending order
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn fivenum(sorted: &[f64]) -> BoxplotSummary {
    assert!(
        !sorted.is_empty(),
        "Cannot summarize an empty sample slice"
    );

    let n = sorted.len();
    let n4 = ((n + 3) / 2) as f64 / 2.0;
    // 1-indexed positions, hence the -1 on access
    let hinge =
        |d: f64| 0.5 * (sorted[d.floor() as usize - 1] + sorted[d.ceil() as usize - 1]);

    BoxplotSummary {
        min: sorted[0],
        q1: hinge(n4),
        median: hinge((n as f64 + 1.0) / 2.0),
        q3: hinge(n as f64 + 1.0 - n4),
        max: sorted[n - 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type7_odd_length() {
        // Quartile indices land exactly on elements, no interpolation
        let sorted = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let summary = quantiles_type7(&sorted);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.q1, 2.0);
        assert_eq!(summary.median, 3.0);
        assert_eq!(summary.q3, 4.0);
        assert_eq!(summary.max, 5.0);
    }

    #[test]
    fn type7_even_length_interpolates() {
        // n = 4: q1 at index 0.75, median at 1.5, q3 at 2.25
        let sorted = vec![1.0, 2.0, 3.0, 4.0];
        let summary = quantiles_type7(&sorted);
        assert!((summary.q1 - 1.75).abs() < 1e-12);
        assert!((summary.median - 2.5).abs() < 1e-12);
        assert!((summary.q3 - 3.25).abs() < 1e-12);
    }

    #[test]
    fn linear_matches_type7() {
        let sorted = vec![1.0, 2.0, 3.0, 4.0, 7.0, 9.0];
        assert_eq!(quantiles_linear(&sorted), quantiles_type7(&sorted));
    }

    #[test]
    fn lower_takes_left_bracket() {
        let sorted = vec![1.0, 2.0, 3.0, 4.0];
        let summary = quantiles_lower(&sorted);
        assert_eq!(summary.q1, 1.0);
        assert_eq!(summary.median, 2.0);
        assert_eq!(summary.q3, 3.0);
    }

    #[test]
    fn higher_takes_right_bracket() {
        let sorted = vec![1.0, 2.0, 3.0, 4.0];
        let summary = quantiles_higher(&sorted);
        assert_eq!(summary.q1, 2.0);
        assert_eq!(summary.median, 3.0);
        assert_eq!(summary.q3, 4.0);
    }

    #[test]
    fn nearest_picks_closer_bracket() {
        // n = 4: q1 frac = 0.75 -> b; median frac = 0.5 -> b; q3 frac = 0.25 -> a
        let sorted = vec![1.0, 2.0, 3.0, 4.0];
        let summary = quantiles_nearest(&sorted);
        assert_eq!(summary.q1, 2.0);
        assert_eq!(summary.median, 3.0);
        assert_eq!(summary.q3, 3.0);
    }

    #[test]
    fn midpoint_averages_brackets() {
        let sorted = vec![1.0, 2.0, 3.0, 4.0];
        let summary = quantiles_midpoint(&sorted);
        assert_eq!(summary.q1, 1.5);
        assert_eq!(summary.median, 2.5);
        assert_eq!(summary.q3, 3.5);
    }

    #[test]
    fn exact_index_skips_interpolation() {
        // frac == 0 short-circuits to a, so even `higher` returns the
        // element itself when the index is integral
        let sorted = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let summary = quantiles_higher(&sorted);
        assert_eq!(summary.q1, 2.0);
        assert_eq!(summary.median, 3.0);
        assert_eq!(summary.q3, 4.0);
    }

    #[test]
    fn fivenum_even_length() {
        // n = 4: n4 = 1.5, hinges average adjacent order statistics
        let sorted = vec![5830.748, 7206.05, 7712.077, 18882.492];
        let summary = fivenum(&sorted);
        assert!((summary.q1 - 6518.399).abs() < 1e-9);
        assert!((summary.median - 7459.0635).abs() < 1e-9);
        assert!((summary.q3 - 13297.2845).abs() < 1e-9);
        assert_eq!(summary.min, 5830.748);
        assert_eq!(summary.max, 18882.492);
    }

    #[test]
    fn fivenum_odd_length_matches_observations() {
        // n = 5 (1 mod 4): hinges land exactly on observations
        let sorted = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let summary = fivenum(&sorted);
        assert_eq!(summary.q1, 2.0);
        assert_eq!(summary.median, 3.0);
        assert_eq!(summary.q3, 4.0);
    }

    #[test]
    fn singleton_collapses_all_fields() {
        let sorted = vec![42.0];
        for f in [
            quantiles_type7,
            quantiles_linear,
            quantiles_lower,
            quantiles_higher,
            quantiles_nearest,
            quantiles_midpoint,
            fivenum,
        ] {
            let summary = f(&sorted);
            assert_eq!(summary.min, 42.0);
            assert_eq!(summary.q1, 42.0);
            assert_eq!(summary.median, 42.0);
            assert_eq!(summary.q3, 42.0);
            assert_eq!(summary.max, 42.0);
        }
    }

    #[test]
    fn two_elements() {
        let sorted = vec![1.0, 3.0];
        let summary = quantiles_type7(&sorted);
        assert!((summary.q1 - 1.5).abs() < 1e-12);
        assert!((summary.median - 2.0).abs() < 1e-12);
        assert!((summary.q3 - 2.5).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "Cannot summarize an empty sample slice")]
    fn empty_slice_panics() {
        quantiles_type7(&[]);
    }

    #[test]
    #[should_panic(expected = "Cannot summarize an empty sample slice")]
    fn fivenum_empty_slice_panics() {
        fivenum(&[]);
    }
}
