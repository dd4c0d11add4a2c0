//! cmo-ta: Chande Momentum Oscillator for timestamped price series
//!
//! Computes the Chande Momentum Oscillator over a fully materialized,
//! caller-ordered series and returns one optional reading per input point.
//!
//! # Features
//!
//! - **Generics**: works with both `f32` and `f64` data types
//! - **Aligned output**: results keep the input timestamps and order
//! - **No sentinels**: warmup and undefined readings are `None`
//! - **Bars or values**: plain slices, `(timestamp, value)` pairs, or any
//!   type implementing [`quote::Quote`]
//!
//! # Quick Start
//!
//! ```
//! use cmo_ta::prelude::*;
//!
//! let series = vec![(0, 10.0_f64), (1, 12.0), (2, 11.0), (3, 13.0), (4, 15.0)];
//! let results = cmo_series(&series, 3).unwrap();
//!
//! // Not enough ticks yet
//! assert!(results[..3].iter().all(|r| r.cmo.is_none()));
//! // 12 up, 11 down, 13 up -> 100 * (25 - 11) / 36
//! assert!((results[3].cmo.unwrap() - 38.888_888_888_9).abs() < 1e-9);
//! assert_eq!(results[4].timestamp, 4);
//! ```
//!
//! # Error Handling
//!
//! The only error is [`Error::InvalidParameter`], returned before any work is
//! done:
//!
//! ```
//! use cmo_ta::prelude::*;
//!
//! let data = vec![1.0_f64, 2.0, 3.0];
//! assert!(matches!(cmo(&data, 0), Err(Error::InvalidParameter { .. })));
//!
//! // Empty input is not an error
//! let empty: Vec<f64> = vec![];
//! assert!(cmo(&empty, 3).unwrap().is_empty());
//! ```
//!
//! # Logging
//!
//! The crate emits [`tracing`] events at `debug` and `trace` level and never
//! installs a subscriber.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod indicators;
pub mod prelude;
pub mod quote;
pub mod results;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use indicators::{cmo, cmo_series, Cmo, CmoResult};
pub use traits::SeriesElement;
