//! Change Detection Example
//!
//! Feeds a noisy sequence through a range filter with jump detection and
//! prints the verdict for each reading.
//!
//! ## What You'll Learn
//!
//! - Configuring a filter from a `FilterConfig`
//! - Why the first reading never counts as a jump
//! - Using `check()` to get the reason for a rejection
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_change_detection
//! ```

use appfilter_core::{FilterConfig, RangeChangeFilter, RangeCheck};

fn main() {
    println!("AppFilter Change Detection Example");
    println!("==================================\n");

    let config = FilterConfig::new(60.0_f32, 40.0).with_difference(10.3);
    let mut filter: RangeChangeFilter<f32> = config.into();

    println!(
        "Range: [{}, {}], max change: {}\n",
        filter.minimum(),
        filter.maximum(),
        filter.difference()
    );

    let readings = [15.4, -8.7, -9.6, 38.9, 38.9, 45.0, 56.7, 61.7, 42.3];

    for raw in readings {
        let verdict = match filter.check_for(raw) {
            Ok(_) => "accepted".into(),
            Err(e) => e.to_string(),
        };
        let trend = filter
            .trend()
            .map_or("-".into(), |t| format!("{:?}", t));
        println!(
            "{:>6.1}  change {:>6.1}  {:<11} {}",
            raw,
            filter.change(),
            trend,
            verdict
        );
    }

    // Start over for a new batch; bounds and threshold are kept
    filter.init();
    println!("\nAfter init: initialized = {}", filter.is_initialized());
}
