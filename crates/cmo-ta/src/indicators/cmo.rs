//! CMO (Chande Momentum Oscillator) indicator.
//!
//! The Chande Momentum Oscillator compares up-moves to down-moves over a
//! trailing window of ticks.
//!
//! # Formula
//!
//! Each bar after the first is classified against its predecessor as an
//! [`Tick::Up`], [`Tick::Down`] or [`Tick::Flat`] tick. Over the `period` ticks
//! ending at bar `i`:
//!
//! ```text
//! sum_up   = Σ value[p]  for Up ticks p in [i - period + 1, i]
//! sum_down = Σ value[p]  for Down ticks p in the same window
//! CMO      = 100 * (sum_up - sum_down) / (sum_up + sum_down)
//! ```
//!
//! Note that the **bar value** at each tick position is summed, not the
//! change from the previous bar as in the textbook definition. This keeps
//! the numeric convention downstream consumers already chart against.
//!
//! # Range
//!
//! For non-negative prices CMO lies in `[-100, 100]`:
//! - +100: every non-flat tick in the window is up
//! - -100: every non-flat tick in the window is down
//!
//! # Absent values
//!
//! Output is `None` for the first `period` bars, and wherever
//! `sum_up + sum_down == 0` (including all-flat windows). A computed NaN is
//! also reported as `None`.
//!
//! # Lookback
//!
//! The lookback period is `period`.

use tracing::debug;

use crate::error::Result;
use crate::quote::{to_series, CandlePart, Quote};
use crate::traits::{validate_output_len, validate_period, SeriesElement};
use crate::utils::nan_to_none;

/// A `(timestamp, value)` input pair.
pub type Observation<K, T> = (K, T);

/// Direction of a bar relative to the bar before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tick {
    /// Strictly greater than the previous value.
    Up,
    /// Strictly less than the previous value.
    Down,
    /// Neither, which covers equal values and NaN comparisons.
    Flat,
}

impl Tick {
    /// Classifies `current` against `prev`.
    ///
    /// ```
    /// use cmo_ta::indicators::cmo::Tick;
    ///
    /// assert_eq!(Tick::classify(1.0, 2.0), Tick::Up);
    /// assert_eq!(Tick::classify(2.0, 1.0), Tick::Down);
    /// assert_eq!(Tick::classify(1.0, 1.0), Tick::Flat);
    /// ```
    #[inline]
    #[must_use]
    pub fn classify<T: SeriesElement>(prev: T, current: T) -> Self {
        if current > prev {
            Self::Up
        } else if current < prev {
            Self::Down
        } else {
            Self::Flat
        }
    }
}

/// One oscillator reading, aligned with an input observation.
#[derive(Debug, Clone, PartialEq)]
pub struct CmoResult<K, T> {
    /// Timestamp copied from the input observation.
    pub timestamp: K,
    /// Oscillator value, or `None` during warmup or when undefined.
    pub cmo: Option<T>,
}

/// Computes the lookback period for CMO.
#[inline]
#[must_use]
pub const fn cmo_lookback(period: usize) -> usize {
    period
}

/// Returns the minimum input length that can produce a CMO value.
#[inline]
#[must_use]
pub const fn cmo_min_len(period: usize) -> usize {
    period + 1
}

/// Oscillator over the ticks at positions `start..=end`. Requires `start >= 1`.
#[inline]
fn window_cmo<T, F>(value_at: &F, start: usize, end: usize) -> Option<T>
where
    T: SeriesElement,
    F: Fn(usize) -> T,
{
    let mut sum_up = T::zero();
    let mut sum_down = T::zero();

    for p in start..=end {
        let value = value_at(p);
        match Tick::classify(value_at(p - 1), value) {
            Tick::Up => sum_up = sum_up + value,
            Tick::Down => sum_down = sum_down + value,
            Tick::Flat => {}
        }
    }

    let total = sum_up + sum_down;
    if total == T::zero() {
        return None;
    }

    // Ratio first so one-sided windows land on exactly ±100.
    nan_to_none(T::hundred() * ((sum_up - sum_down) / total))
}

/// Shared kernel. Writes `len` readings into `output`.
fn fill_cmo<T, F>(len: usize, value_at: F, period: usize, output: &mut [Option<T>])
where
    T: SeriesElement,
    F: Fn(usize) -> T,
{
    let lookback = cmo_lookback(period);

    for (i, slot) in output.iter_mut().enumerate().take(len) {
        *slot = if i < lookback {
            None
        } else {
            window_cmo(&value_at, i + 1 - period, i)
        };
    }
}

/// Computes CMO and stores results in output slice.
///
/// # Arguments
///
/// * `data` - Price data (typically closing prices)
/// * `period` - Number of ticks in each window (typically 14)
/// * `output` - Pre-allocated output slice, at least `data.len()` long
///
/// # Errors
///
/// Returns `Error::InvalidParameter` if `period` is zero or the output
/// buffer is shorter than the input.
pub fn cmo_into<T: SeriesElement>(
    data: &[T],
    period: usize,
    output: &mut [Option<T>],
) -> Result<()> {
    validate_period(period)?;
    validate_output_len(data.len(), output.len())?;

    fill_cmo(data.len(), |i| data[i], period, output);
    Ok(())
}

/// Computes CMO (Chande Momentum Oscillator) over a plain value series.
///
/// # Example
///
/// ```
/// use cmo_ta::indicators::cmo;
///
/// let prices = vec![10.0_f64, 12.0, 11.0, 13.0, 15.0];
/// let result = cmo(&prices, 3).unwrap();
///
/// assert!(result[..3].iter().all(Option::is_none));
/// assert!((result[3].unwrap() - 38.888_888_888_9).abs() < 1e-9);
/// ```
///
/// # Errors
///
/// Returns `Error::InvalidParameter` if `period` is zero.
pub fn cmo<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<Option<T>>> {
    let mut output = vec![None; data.len()];
    cmo_into(data, period, &mut output)?;
    Ok(output)
}

/// Computes CMO over a timestamped series.
///
/// Returns one [`CmoResult`] per observation, in input order, carrying the
/// observation's timestamp. Input order is trusted as given.
///
/// # Example
///
/// ```
/// use cmo_ta::indicators::cmo_series;
///
/// let series = vec![("a", 10.0_f64), ("b", 12.0), ("c", 11.0)];
/// let results = cmo_series(&series, 1).unwrap();
///
/// assert_eq!(results[0].timestamp, "a");
/// assert_eq!(results[0].cmo, None);
/// assert_eq!(results[1].cmo, Some(100.0));
/// assert_eq!(results[2].cmo, Some(-100.0));
/// ```
///
/// # Errors
///
/// Returns `Error::InvalidParameter` if `lookback_periods` is zero.
pub fn cmo_series<K: Clone, T: SeriesElement>(
    observations: &[Observation<K, T>],
    lookback_periods: usize,
) -> Result<Vec<CmoResult<K, T>>> {
    validate_period(lookback_periods)?;
    debug!(
        len = observations.len(),
        lookback_periods, "computing cmo series"
    );

    let mut values = vec![None; observations.len()];
    fill_cmo(
        observations.len(),
        |i| observations[i].1,
        lookback_periods,
        &mut values,
    );

    Ok(observations
        .iter()
        .zip(values)
        .map(|((timestamp, _), cmo)| CmoResult {
            timestamp: timestamp.clone(),
            cmo,
        })
        .collect())
}

/// Computes CMO over OHLCV bars using the selected candle part.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` if `lookback_periods` is zero.
pub fn cmo_quotes<Q: Quote>(
    quotes: &[Q],
    part: CandlePart,
    lookback_periods: usize,
) -> Result<Vec<CmoResult<Q::Timestamp, Q::Value>>> {
    validate_period(lookback_periods)?;
    cmo_series(&to_series(quotes, part), lookback_periods)
}

// ==================== Configuration Type ====================

/// CMO configuration with fluent setters.
///
/// # Example
///
/// ```
/// use cmo_ta::indicators::Cmo;
/// use cmo_ta::quote::CandlePart;
///
/// let config = Cmo::new().period(3).source(CandlePart::Hl2);
/// assert_eq!(config.get_period(), 3);
///
/// let prices = vec![10.0_f64, 12.0, 11.0, 13.0, 15.0];
/// let result = config.compute(&prices).unwrap();
/// assert_eq!(result.len(), prices.len());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cmo {
    period: usize,
    source: CandlePart,
}

impl Default for Cmo {
    /// Creates a CMO configuration with the standard period (14) on close.
    fn default() -> Self {
        Self {
            period: 14,
            source: CandlePart::Close,
        }
    }
}

impl Cmo {
    /// Creates a CMO configuration with the standard period (14) on close.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lookback period.
    ///
    /// Default: 14
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Sets the candle part used by [`compute_quotes`](Self::compute_quotes).
    ///
    /// Default: [`CandlePart::Close`]
    #[must_use]
    pub const fn source(mut self, source: CandlePart) -> Self {
        self.source = source;
        self
    }

    /// Computes CMO over a plain value series.
    ///
    /// # Errors
    ///
    /// Returns an error if the period is 0.
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<Vec<Option<T>>> {
        cmo(data, self.period)
    }

    /// Computes CMO into a pre-allocated buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the period is 0 or the buffer is too short.
    pub fn compute_into<T: SeriesElement>(&self, data: &[T], output: &mut [Option<T>]) -> Result<()> {
        cmo_into(data, self.period, output)
    }

    /// Computes CMO over a timestamped series.
    ///
    /// # Errors
    ///
    /// Returns an error if the period is 0.
    pub fn compute_series<K: Clone, T: SeriesElement>(
        &self,
        observations: &[Observation<K, T>],
    ) -> Result<Vec<CmoResult<K, T>>> {
        cmo_series(observations, self.period)
    }

    /// Computes CMO over OHLCV bars using the configured candle part.
    ///
    /// # Errors
    ///
    /// Returns an error if the period is 0.
    pub fn compute_quotes<Q: Quote>(
        &self,
        quotes: &[Q],
    ) -> Result<Vec<CmoResult<Q::Timestamp, Q::Value>>> {
        cmo_quotes(quotes, self.source, self.period)
    }

    /// Returns the period.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Returns the candle part.
    #[must_use]
    pub const fn get_source(&self) -> CandlePart {
        self.source
    }

    /// Returns the number of leading `None` values for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        cmo_lookback(self.period)
    }

    /// Returns the minimum input length that can produce a value.
    #[must_use]
    pub const fn min_len(&self) -> usize {
        cmo_min_len(self.period)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::error::Error;

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("expected a value");
        assert!(
            (actual - expected).abs() < 1e-10,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_cmo_lookback() {
        assert_eq!(cmo_lookback(5), 5);
        assert_eq!(cmo_lookback(14), 14);
    }

    #[test]
    fn test_cmo_min_len() {
        assert_eq!(cmo_min_len(5), 6);
        assert_eq!(cmo_min_len(14), 15);
    }

    #[test]
    fn test_tick_classify() {
        assert_eq!(Tick::classify(10.0, 12.0), Tick::Up);
        assert_eq!(Tick::classify(12.0, 11.0), Tick::Down);
        assert_eq!(Tick::classify(11.0, 11.0), Tick::Flat);
        assert_eq!(Tick::classify(f64::NAN, 11.0), Tick::Flat);
        assert_eq!(Tick::classify(11.0, f64::NAN), Tick::Flat);
    }

    #[test]
    fn test_cmo_empty_input() {
        let data: Vec<f64> = vec![];
        let result = cmo(&data, 5).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_cmo_invalid_period() {
        let data: Vec<f64> = vec![10.0, 11.0, 12.0, 13.0, 14.0, 15.0];
        let result = cmo(&data, 0);
        assert!(matches!(
            result,
            Err(Error::InvalidParameter {
                name: "lookback_periods",
                value: 0,
                ..
            })
        ));
    }

    #[test]
    fn test_cmo_invalid_period_on_empty_input() {
        let data: Vec<f64> = vec![];
        assert!(cmo(&data, 0).is_err());
    }

    #[test]
    fn test_cmo_short_input_is_all_none() {
        let data: Vec<f64> = vec![10.0, 11.0, 12.0];
        let result = cmo(&data, 5).unwrap();
        assert_eq!(result, vec![None, None, None]);
    }

    #[test]
    fn test_cmo_output_length() {
        let data: Vec<f64> = vec![10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 19.0];
        let result = cmo(&data, 5).unwrap();
        assert_eq!(result.len(), data.len());
    }

    #[test]
    fn test_cmo_warmup_is_none() {
        let data: Vec<f64> = vec![10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 19.0];
        let result = cmo(&data, 5).unwrap();

        for i in 0..5 {
            assert!(result[i].is_none(), "cmo[{}] should be None", i);
        }
        for i in 5..result.len() {
            assert!(result[i].is_some(), "cmo[{}] should be present", i);
        }
    }

    #[test]
    fn test_cmo_reference_scenario() {
        // Window at 3: 12 up, 11 down, 13 up -> (25 - 11) / 36
        // Window at 4: 11 down, 13 up, 15 up -> (28 - 11) / 39
        let data: Vec<f64> = vec![10.0, 12.0, 11.0, 13.0, 15.0];
        let result = cmo(&data, 3).unwrap();

        assert_eq!(&result[..3], &[None, None, None]);
        assert_close(result[3], 100.0 * 14.0 / 36.0);
        assert_close(result[4], 100.0 * 17.0 / 39.0);
    }

    #[test]
    fn test_cmo_sums_values_not_changes() {
        // 12 up, 11 down, 13 up, 12 down, 14 up -> (39 - 23) / 62
        let data: Vec<f64> = vec![10.0, 12.0, 11.0, 13.0, 12.0, 14.0];
        let result = cmo(&data, 5).unwrap();
        assert_close(result[5], 100.0 * 16.0 / 62.0);
    }

    #[test]
    fn test_cmo_all_up() {
        let data: Vec<f64> = vec![10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.5];
        let result = cmo(&data, 5).unwrap();
        assert_eq!(result[5], Some(100.0));
        assert_eq!(result[6], Some(100.0));
    }

    #[test]
    fn test_cmo_all_down() {
        let data: Vec<f64> = vec![15.0, 14.0, 13.0, 12.0, 11.0, 10.0, 9.3];
        let result = cmo(&data, 5).unwrap();
        assert_eq!(result[5], Some(-100.0));
        assert_eq!(result[6], Some(-100.0));
    }

    #[test]
    fn test_cmo_constant_prices_are_none() {
        let data: Vec<f64> = vec![10.0; 10];
        let result = cmo(&data, 5).unwrap();
        assert!(result.iter().all(Option::is_none));
    }

    #[test]
    fn test_cmo_flat_window_after_moves() {
        // Windows of 2 ticks: [6 up, 6 flat], ..., [5 flat, 5 flat]
        let data: Vec<f64> = vec![5.0, 5.0, 6.0, 6.0, 5.0, 5.0, 5.0, 5.0];
        let result = cmo(&data, 2).unwrap();
        assert_eq!(
            result,
            vec![
                None,
                None,
                Some(100.0),
                Some(100.0),
                Some(-100.0),
                Some(-100.0),
                None,
                None
            ]
        );
    }

    #[test]
    fn test_cmo_period_one() {
        let data: Vec<f64> = vec![10.0, 10.0, 10.0, 9.0, 10.0];
        let result = cmo(&data, 1).unwrap();
        assert_eq!(result, vec![None, None, None, Some(-100.0), Some(100.0)]);
    }

    #[test]
    fn test_cmo_zero_values_are_none() {
        // Up to 0.0 contributes nothing to either sum
        let data: Vec<f64> = vec![-1.0, 0.0, 0.0];
        let result = cmo(&data, 1).unwrap();
        assert_eq!(result, vec![None, None, None]);
    }

    #[test]
    fn test_cmo_nan_input_never_emits_nan() {
        let data: Vec<f64> = vec![10.0, 11.0, f64::NAN, 12.0, 13.0, f64::INFINITY, 14.0];
        let result = cmo(&data, 2).unwrap();
        assert_eq!(result.len(), data.len());
        assert!(result.iter().flatten().all(|v| !v.is_nan()));
    }

    #[test]
    fn test_cmo_infinite_sums_become_none() {
        // Up sum overflows to inf: (inf - 1) / inf = NaN -> None
        let data: Vec<f64> = vec![0.0, f64::INFINITY, 1.0, f64::INFINITY];
        let result = cmo(&data, 3).unwrap();
        assert_eq!(result[3], None);
    }

    #[test]
    fn test_cmo_into() {
        let data: Vec<f64> = vec![10.0, 11.0, 12.0, 13.0, 14.0, 15.0];
        let mut output = vec![Some(-1.0_f64); 8];

        cmo_into(&data, 5, &mut output).unwrap();

        assert!(output[..5].iter().all(Option::is_none));
        assert_eq!(output[5], Some(100.0));
        // Slots past the input are left alone
        assert_eq!(output[6], Some(-1.0));
        assert_eq!(output[7], Some(-1.0));
    }

    #[test]
    fn test_cmo_into_buffer_too_small() {
        let data: Vec<f64> = vec![10.0, 11.0, 12.0, 13.0, 14.0, 15.0];
        let mut output = vec![None; 3];

        let result = cmo_into(&data, 5, &mut output);
        assert!(matches!(
            result,
            Err(Error::InvalidParameter { name: "output", value: 3, .. })
        ));
    }

    #[test]
    fn test_cmo_f32() {
        let data: Vec<f32> = vec![10.0, 12.0, 11.0, 13.0, 15.0];
        let result = cmo(&data, 3).unwrap();

        let value = result[3].unwrap();
        assert!((value - 38.888_89_f32).abs() < 1e-3);
    }

    #[test]
    fn test_cmo_series_keeps_timestamps() {
        let series: Vec<(u64, f64)> = vec![(100, 10.0), (90, 12.0), (95, 11.0), (95, 13.0), (1, 15.0)];
        let results = cmo_series(&series, 3).unwrap();

        let stamps: Vec<u64> = results.iter().map(|r| r.timestamp).collect();
        assert_eq!(stamps, vec![100, 90, 95, 95, 1]);
        assert_close(results[3].cmo, 100.0 * 14.0 / 36.0);
    }

    #[test]
    fn test_cmo_series_matches_values() {
        let values: Vec<f64> = vec![44.0, 44.5, 43.5, 44.5, 44.0, 43.0, 42.5, 43.5, 44.5, 45.0];
        let series: Vec<(usize, f64)> = values.iter().copied().enumerate().collect();

        let plain = cmo(&values, 5).unwrap();
        let stamped: Vec<Option<f64>> = cmo_series(&series, 5)
            .unwrap()
            .into_iter()
            .map(|r| r.cmo)
            .collect();

        assert_eq!(plain, stamped);
    }

    #[test]
    fn test_cmo_series_empty() {
        let series: Vec<(u64, f64)> = vec![];
        assert!(cmo_series(&series, 3).unwrap().is_empty());
    }

    #[test]
    fn test_cmo_series_invalid_period() {
        let series: Vec<(u64, f64)> = vec![(1, 1.0)];
        assert!(matches!(
            cmo_series(&series, 0),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_cmo_idempotent() {
        let data: Vec<f64> = vec![44.0, 44.5, 43.5, 44.5, 44.0, 43.0, 42.5, 43.5, 44.5, 45.0];
        assert_eq!(cmo(&data, 4).unwrap(), cmo(&data, 4).unwrap());
    }

    #[test]
    fn test_cmo_config_default() {
        let config = Cmo::default();
        assert_eq!(config.get_period(), 14);
        assert_eq!(config.get_source(), CandlePart::Close);
        assert_eq!(config.lookback(), 14);
        assert_eq!(config.min_len(), 15);
        assert_eq!(Cmo::new(), config);
    }

    #[test]
    fn test_cmo_config_compute_matches_function() {
        let data: Vec<f64> = vec![44.0, 44.5, 43.5, 44.5, 44.0, 43.0, 42.5, 43.5, 44.5, 45.0];
        let config = Cmo::new().period(5);

        assert_eq!(config.compute(&data).unwrap(), cmo(&data, 5).unwrap());

        let mut output = vec![None; data.len()];
        config.compute_into(&data, &mut output).unwrap();
        assert_eq!(output, cmo(&data, 5).unwrap());
    }

    #[test]
    fn test_cmo_config_zero_period() {
        let data: Vec<f64> = vec![1.0, 2.0];
        assert!(Cmo::new().period(0).compute(&data).is_err());
    }
}
