//! Chande Momentum Oscillator Example
//!
//! Computes a 14-tick CMO over closing prices and prints each reading with
//! a simple overbought/oversold tag.
//!
//! Run with: `cargo run --example momentum`

use cmo_ta::indicators::Cmo;
use cmo_ta::results::{condense, remove_warmup_periods};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // (minute, close)
    let closes: Vec<f64> = vec![
        44.34, 44.09, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03, 45.61, 46.28,
        46.28, 46.00, 46.03, 46.41, 46.22, 45.64, 46.21, 46.25, 45.71, 46.45, 45.78, 45.35, 44.03,
        44.18, 44.22, 44.57, 43.42, 42.66, 43.13,
    ];
    let series: Vec<(u32, f64)> = closes
        .iter()
        .copied()
        .enumerate()
        .map(|(i, close)| (u32::try_from(i).unwrap_or(u32::MAX), close))
        .collect();

    println!("=== CMO (Chande Momentum Oscillator) ===");
    println!();
    println!("  Interpretation:");
    println!("    > +50: Overbought");
    println!("    < -50: Oversold");
    println!();

    let results = Cmo::default().compute_series(&series)?;

    for r in &results {
        match r.cmo {
            Some(value) => {
                let signal = if value > 50.0 {
                    "OVERBOUGHT"
                } else if value < -50.0 {
                    "OVERSOLD"
                } else {
                    ""
                };
                println!("  [{:>2}] CMO: {value:>7.2} {signal}", r.timestamp);
            }
            None => println!("  [{:>2}] CMO:       -", r.timestamp),
        }
    }

    println!();
    let converged = remove_warmup_periods(results);
    println!(
        "{} readings after warmup, {} with a value",
        converged.len(),
        condense(converged.clone()).len()
    );

    Ok(())
}
