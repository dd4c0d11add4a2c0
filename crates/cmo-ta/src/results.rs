//! Post-processing for timestamped oscillator results.
//!
//! ```
//! use cmo_ta::indicators::cmo_series;
//! use cmo_ta::results::{condense, remove_warmup_periods};
//!
//! let series = vec![(1, 10.0_f64), (2, 12.0), (3, 12.0), (4, 11.0)];
//! let results = cmo_series(&series, 1).unwrap();
//!
//! // Index 2 is flat, so it is absent even after warmup
//! assert_eq!(remove_warmup_periods(results.clone()).len(), 3);
//! assert_eq!(condense(results).len(), 2);
//! ```

use crate::indicators::cmo::CmoResult;

/// Index of the first result carrying a value, if any.
#[must_use]
pub fn warmup_len<K, T>(results: &[CmoResult<K, T>]) -> Option<usize> {
    results.iter().position(|r| r.cmo.is_some())
}

/// Drops the leading results that precede the first value.
///
/// A series without any value is returned unchanged, since there is no
/// converged point to trim to.
#[must_use]
pub fn remove_warmup_periods<K, T>(mut results: Vec<CmoResult<K, T>>) -> Vec<CmoResult<K, T>> {
    if let Some(first) = warmup_len(&results) {
        results.drain(..first);
    }
    results
}

/// Keeps only the results that carry a value.
#[must_use]
pub fn condense<K, T>(mut results: Vec<CmoResult<K, T>>) -> Vec<CmoResult<K, T>> {
    results.retain(|r| r.cmo.is_some());
    results
}
