//! Error Handling Examples
//!
//! The only error is an invalid parameter. Everything else (empty input,
//! short input, flat windows) is a `None` reading.
//!
//! Run with: `cargo run --example error_handling`

use cmo_ta::indicators::{cmo, cmo_into, cmo_min_len};
use cmo_ta::Error;

fn main() {
    println!("=== Error Handling Examples ===");
    println!();

    // Example 1: Invalid period
    println!("1. Invalid Period (zero):");
    let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    match cmo(&data, 0) {
        Ok(_) => println!("   Unexpected success"),
        Err(Error::InvalidParameter { name, value, reason }) => {
            println!("   Caught InvalidParameter error (expected)");
            println!("   Details: {name}={value}, reason: {reason}");
            println!("   Fix: Use a period of at least 1");
        }
    }
    println!();

    // Example 2: Output buffer too small
    println!("2. Output Buffer Too Small:");
    let mut output = vec![None; 2];
    match cmo_into(&data, 2, &mut output) {
        Ok(()) => println!("   Unexpected success"),
        Err(e) => println!("   Caught: {e}"),
    }
    println!();

    // Example 3: Empty input is not an error
    println!("3. Empty Input:");
    let empty: Vec<f64> = vec![];
    match cmo(&empty, 5) {
        Ok(values) => println!("   Ok, {} readings", values.len()),
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!();

    // Example 4: Short input yields only None
    println!("4. Short Input:");
    let period = 10;
    println!(
        "   {} bars given, {} needed for a first value",
        data.len(),
        cmo_min_len(period)
    );
    if let Ok(values) = cmo(&data, period) {
        let absent = values.iter().filter(|v| v.is_none()).count();
        println!("   {absent} of {} readings absent", values.len());
    }
    println!();

    // Example 5: Flat prices yield None, not zero
    println!("5. Flat Prices:");
    let flat = vec![10.0; 8];
    if let Ok(values) = cmo(&flat, 3) {
        println!("   {values:?}");
    }
}
