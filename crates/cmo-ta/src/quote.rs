//! OHLCV bars as an oscillator input.
//!
//! Implement [`Quote`] on your own bar type and pick a [`CandlePart`] to turn
//! a slice of bars into a `(timestamp, price)` series. Bar order is kept as
//! supplied; nothing is sorted or deduplicated.
//!
//! # Example
//!
//! ```
//! use cmo_ta::quote::{to_series, CandlePart, Quote};
//!
//! struct Bar {
//!     ts: u64,
//!     o: f64, h: f64, l: f64, c: f64, v: f64,
//! }
//!
//! impl Quote for Bar {
//!     type Timestamp = u64;
//!     type Value = f64;
//!     fn timestamp(&self) -> u64 { self.ts }
//!     fn open(&self) -> f64 { self.o }
//!     fn high(&self) -> f64 { self.h }
//!     fn low(&self) -> f64 { self.l }
//!     fn close(&self) -> f64 { self.c }
//!     fn volume(&self) -> f64 { self.v }
//! }
//!
//! let bars = [Bar { ts: 1, o: 9.0, h: 12.0, l: 8.0, c: 10.0, v: 500.0 }];
//! assert_eq!(to_series(&bars, CandlePart::Hl2), vec![(1, 10.0)]);
//! ```

use std::fmt::{self, Display};

use crate::traits::SeriesElement;

/// An OHLCV bar with a caller-defined timestamp.
pub trait Quote {
    /// Timestamp or sequence key. Only cloned into results, never compared.
    type Timestamp: Clone;

    /// Numeric type of prices and volume.
    type Value: SeriesElement;

    /// Bar timestamp.
    fn timestamp(&self) -> Self::Timestamp;

    /// Opening price.
    fn open(&self) -> Self::Value;

    /// Highest price.
    fn high(&self) -> Self::Value;

    /// Lowest price.
    fn low(&self) -> Self::Value;

    /// Closing price.
    fn close(&self) -> Self::Value;

    /// Traded volume.
    fn volume(&self) -> Self::Value;
}

/// Which value of a bar feeds the observation series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CandlePart {
    /// Opening price.
    Open,
    /// Highest price.
    High,
    /// Lowest price.
    Low,
    /// Closing price.
    #[default]
    Close,
    /// Traded volume.
    Volume,
    /// `(high + low) / 2`
    Hl2,
    /// `(high + low + close) / 3`
    Hlc3,
    /// `(open + close) / 2`
    Oc2,
    /// `(open + high + low) / 3`
    Ohl3,
    /// `(open + high + low + close) / 4`
    Ohlc4,
}

impl CandlePart {
    /// Every candle part, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Open,
        Self::High,
        Self::Low,
        Self::Close,
        Self::Volume,
        Self::Hl2,
        Self::Hlc3,
        Self::Oc2,
        Self::Ohl3,
        Self::Ohlc4,
    ];

    /// Extracts this part from a bar.
    #[inline]
    #[must_use]
    pub fn extract<Q: Quote>(self, quote: &Q) -> Q::Value {
        let two = <Q::Value as SeriesElement>::constant(2.0);
        let three = <Q::Value as SeriesElement>::constant(3.0);
        let four = <Q::Value as SeriesElement>::constant(4.0);

        match self {
            Self::Open => quote.open(),
            Self::High => quote.high(),
            Self::Low => quote.low(),
            Self::Close => quote.close(),
            Self::Volume => quote.volume(),
            Self::Hl2 => (quote.high() + quote.low()) / two,
            Self::Hlc3 => (quote.high() + quote.low() + quote.close()) / three,
            Self::Oc2 => (quote.open() + quote.close()) / two,
            Self::Ohl3 => (quote.open() + quote.high() + quote.low()) / three,
            Self::Ohlc4 => (quote.open() + quote.high() + quote.low() + quote.close()) / four,
        }
    }

    /// Lower-case name, as used in `Display`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::High => "high",
            Self::Low => "low",
            Self::Close => "close",
            Self::Volume => "volume",
            Self::Hl2 => "hl2",
            Self::Hlc3 => "hlc3",
            Self::Oc2 => "oc2",
            Self::Ohl3 => "ohl3",
            Self::Ohlc4 => "ohlc4",
        }
    }
}

impl Display for CandlePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts bars into a `(timestamp, value)` series using `part`.
#[must_use]
pub fn to_series<Q: Quote>(quotes: &[Q], part: CandlePart) -> Vec<(Q::Timestamp, Q::Value)> {
    quotes
        .iter()
        .map(|q| (q.timestamp(), part.extract(q)))
        .collect()
}
