//! Shared test utilities for cmo-ta tests.

use cmo_ta::quote::Quote;

/// Approximate equality for optional readings.
///
/// Two `None`s are equal; `None` never equals a value.
#[allow(dead_code)]
pub fn approx_eq_opt(a: Option<f64>, b: Option<f64>, eps: f64) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => (a - b).abs() < eps,
        _ => false,
    }
}

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Deterministic, always-positive price walk.
#[allow(dead_code)]
pub fn generate_series(size: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(size);
    let mut price = 100.0;
    for i in 0..size {
        let delta = ((i as f64 * 0.1).sin() * 2.0) + ((i as f64 * 0.03).cos() * 1.5);
        price += delta;
        price = f64::max(price, 10.0);
        data.push(price);
    }
    data
}

/// A minimal OHLCV bar keyed by sequence number.
#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
pub struct Bar {
    pub ts: u64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Quote for Bar {
    type Timestamp = u64;
    type Value = f64;

    fn timestamp(&self) -> u64 {
        self.ts
    }
    fn open(&self) -> f64 {
        self.open
    }
    fn high(&self) -> f64 {
        self.high
    }
    fn low(&self) -> f64 {
        self.low
    }
    fn close(&self) -> f64 {
        self.close
    }
    fn volume(&self) -> f64 {
        self.volume
    }
}

/// Builds bars around a close series: open lags close, high/low bracket both.
#[allow(dead_code)]
pub fn bars_from_closes(closes: &[f64]) -> Vec<Bar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            Bar {
                ts: 1_700_000_000 + i as u64 * 60,
                open,
                high: f64::max(open, close) + 0.5,
                low: f64::min(open, close) - 0.5,
                close,
                volume: 1_000.0 + i as f64,
            }
        })
        .collect()
}
