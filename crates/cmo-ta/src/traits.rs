//! Core traits for cmo-ta numeric operations.
//!
//! [`SeriesElement`] abstracts over `f32` and `f64` so every entry point
//! works with either precision. Constants are built through `From<f32>`,
//! which is infallible for both types.
//!
//! # Example
//!
//! ```
//! use cmo_ta::traits::{validate_period, SeriesElement};
//!
//! fn scaled_sum<T: SeriesElement>(data: &[T], period: usize) -> cmo_ta::Result<T> {
//!     validate_period(period)?;
//!     let sum = data.iter().take(period).fold(T::zero(), |acc, &x| acc + x);
//!     Ok(sum * T::hundred())
//! }
//!
//! let data = vec![0.25_f64, 0.5, 1.0];
//! assert!((scaled_sum(&data, 2).unwrap() - 75.0).abs() < 1e-10);
//! assert!(scaled_sum(&data, 0).is_err());
//! ```

use num_traits::Float;

use crate::error::{Error, Result};

/// A trait for types that can be used as elements in a price series.
///
/// # Type Bounds
///
/// - `Float`: floating-point arithmetic and NaN handling
/// - `From<f32>`: lossless construction of small constants
/// - `Send + Sync`: results can be computed on any thread
pub trait SeriesElement: Float + From<f32> + Default + Send + Sync + 'static {
    /// Converts an `f32` constant into this type.
    #[inline]
    #[must_use]
    fn constant(value: f32) -> Self {
        <Self as From<f32>>::from(value)
    }

    /// Returns the constant 100 as this type.
    ///
    /// Scales oscillator ratios to the `[-100, 100]` range.
    #[inline]
    #[must_use]
    fn hundred() -> Self {
        Self::constant(100.0)
    }
}

impl<T: Float + From<f32> + Default + Send + Sync + 'static> SeriesElement for T {}

/// Validates that a lookback period is usable.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` if the period is zero.
#[inline]
pub const fn validate_period(period: usize) -> Result<()> {
    if period == 0 {
        Err(Error::InvalidParameter {
            name: "lookback_periods",
            value: period,
            reason: "lookback periods must be greater than 0",
        })
    } else {
        Ok(())
    }
}

/// Validates that an output buffer can hold one value per input element.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` naming `output` if the buffer is shorter
/// than `required`.
#[inline]
pub const fn validate_output_len(required: usize, actual: usize) -> Result<()> {
    if actual < required {
        Err(Error::InvalidParameter {
            name: "output",
            value: actual,
            reason: "output buffer must be at least as long as the input",
        })
    } else {
        Ok(())
    }
}
