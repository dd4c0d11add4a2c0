//! Utility functions for cmo-ta.
//!
//! # Absent values
//!
//! Outputs use `Option<T>`: `None` marks an index with no reading (warmup or
//! an undefined ratio). [`nan_to_none`] is the single place where a computed
//! NaN is turned into `None`, so outputs are either absent or a number.

use crate::traits::SeriesElement;

/// Standard epsilon for high-precision floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Converts a computed value to an optional reading, mapping NaN to `None`.
///
/// # Example
///
/// ```
/// use cmo_ta::utils::nan_to_none;
///
/// assert_eq!(nan_to_none(42.0_f64), Some(42.0));
/// assert_eq!(nan_to_none(f64::NAN), None);
/// ```
#[inline]
#[must_use]
pub fn nan_to_none<T: SeriesElement>(value: T) -> Option<T> {
    if value.is_nan() {
        tracing::trace!("nan guard dropped a computed value");
        None
    } else {
        Some(value)
    }
}

/// Approximate equality for optional readings.
///
/// Two `None`s are equal; `None` never equals a value; values compare within
/// `tolerance`.
///
/// # Example
///
/// ```
/// use cmo_ta::utils::{approx_eq_opt, EPSILON};
///
/// assert!(approx_eq_opt(Some(1.0), Some(1.0 + 1e-11), EPSILON));
/// assert!(approx_eq_opt::<f64>(None, None, EPSILON));
/// assert!(!approx_eq_opt(None, Some(1.0), EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq_opt<T: SeriesElement>(a: Option<T>, b: Option<T>, tolerance: T) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => (a - b).abs() < tolerance,
        _ => false,
    }
}

/// Counts the leading `None` entries of an optional series.
#[must_use]
pub fn count_none_prefix<T>(data: &[Option<T>]) -> usize {
    data.iter().take_while(|v| v.is_none()).count()
}

/// Counts all `None` entries of an optional series.
#[must_use]
pub fn count_nones<T>(data: &[Option<T>]) -> usize {
    data.iter().filter(|v| v.is_none()).count()
}
