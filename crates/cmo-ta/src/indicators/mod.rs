//! Technical analysis indicators.
//!
//! # Overview
//!
//! Indicators in this module share the following properties:
//!
//! - **Generic**: work with both `f32` and `f64` via the
//!   [`SeriesElement`](crate::traits::SeriesElement) trait
//! - **Batch**: one call over a fully materialized series, no retained state
//! - **Aligned**: output has one entry per input element
//! - **Optional values**: warmup and undefined readings are `None`, never a
//!   sentinel number
//!
//! ## Momentum Indicators
//!
//! - [`cmo()`] - Chande Momentum Oscillator: up-tick vs down-tick balance
//!
//! # Example
//!
//! ```
//! use cmo_ta::indicators::{cmo, Cmo};
//!
//! let prices = vec![44.0_f64, 44.5, 43.5, 44.5, 44.0, 43.0, 42.5, 43.5, 44.5, 45.0];
//!
//! let direct = cmo(&prices, 5).unwrap();
//! let configured = Cmo::new().period(5).compute(&prices).unwrap();
//! assert_eq!(direct, configured);
//! ```

pub mod cmo;

pub use cmo::{
    cmo, cmo_into, cmo_lookback, cmo_min_len, cmo_quotes, cmo_series, Cmo, CmoResult, Observation,
    Tick,
};
