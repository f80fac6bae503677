//! Basic Range Limiting Example
//!
//! Clamps raw sensor readings into a valid range and reports which readings
//! were out of bounds.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_range_limit
//! ```

use appfilter_core::{RangeCheck, RangeFilter};

fn main() {
    println!("AppFilter Range Limit Example");
    println!("=============================\n");

    // Greenhouse temperature, valid between 40 and 60 units
    let mut filter = RangeFilter::new(60.0_f32, 40.0);
    println!("Range: [{}, {}]\n", filter.minimum(), filter.maximum());

    let readings = [38.9, 45.0, 56.7, 61.7, 42.3];

    println!("{:>8} {:>8} {:>8}", "raw", "limited", "status");
    for raw in readings {
        let limited = filter.limit(raw);
        let status = if filter.is_low() {
            "low"
        } else if filter.is_high() {
            "high"
        } else {
            "ok"
        };
        println!("{:>8.1} {:>8.1} {:>8}", raw, limited, status);
    }

    // Raw ADC counts work the same way
    let mut adc = RangeFilter::with_maximum(4095_u16);
    println!("\nADC 5000 -> {}", adc.limit(5000));
}
