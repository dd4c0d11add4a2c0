//! Commonly used types and traits for convenient importing.
//!
//! ```
//! use cmo_ta::prelude::*;
//!
//! let prices = vec![1.0_f64, 2.0, 3.0, 2.5, 4.0, 5.0];
//! let values = cmo(&prices, 3).unwrap();
//! let trimmed = condense(cmo_series(&[(0, 1.0_f64), (1, 2.0)], 1).unwrap());
//! # assert_eq!(values.len(), prices.len());
//! # assert_eq!(trimmed.len(), 1);
//! ```

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::quote::Quote;
pub use crate::traits::SeriesElement;

// Indicator functions and types
pub use crate::indicators::{
    cmo, cmo_into, cmo_lookback, cmo_min_len, cmo_quotes, cmo_series, Cmo, CmoResult, Observation,
    Tick,
};

// Inputs and outputs
pub use crate::quote::{to_series, CandlePart};
pub use crate::results::{condense, remove_warmup_periods, warmup_len};
